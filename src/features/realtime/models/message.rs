use serde::Serialize;

use crate::shared::constants::WELCOME_MESSAGE;

/// Frames pushed to realtime clients
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Welcome { message: String },
}

impl ServerMessage {
    pub fn welcome() -> Self {
        Self::Welcome {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}
