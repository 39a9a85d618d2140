use rand::RngCore;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::core::config::AdminConfig;
use crate::core::error::{AppError, Result};

/// Issues and checks admin moderation sessions.
///
/// Each successful login yields a fresh random token that expires after the
/// configured TTL or when revoked. At most `MAX_ACTIVE_SESSIONS` are live at
/// once; beyond that the session closest to expiry is dropped.
pub struct SessionService {
    password: String,
    ttl: Duration,
    sessions: RwLock<HashMap<String, Instant>>,
}

impl SessionService {
    const TOKEN_BYTES: usize = 32;
    pub const MAX_ACTIVE_SESSIONS: usize = 64;

    pub fn new(config: AdminConfig) -> Self {
        Self {
            password: config.password,
            ttl: config.session_ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Exchange the admin password for a session token
    pub async fn login(&self, password: &str) -> Result<String> {
        if password != self.password {
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        let token = Self::generate_token();
        let now = Instant::now();

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, expires_at| *expires_at > now);
        while sessions.len() >= Self::MAX_ACTIVE_SESSIONS {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, expires_at)| **expires_at)
                .map(|(token, _)| token.clone());
            match oldest {
                Some(oldest) => {
                    sessions.remove(&oldest);
                    tracing::debug!("Session limit reached, evicted oldest session");
                }
                None => break,
            }
        }
        sessions.insert(token.clone(), now + self.ttl);

        tracing::info!("Admin session issued ({} active)", sessions.len());
        Ok(token)
    }

    /// True only for a known token that has not expired. Expired tokens are dropped.
    pub async fn validate(&self, token: &str) -> bool {
        let now = Instant::now();
        let expired = {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(expires_at) if *expires_at > now => return true,
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            self.sessions.write().await.remove(token);
            tracing::debug!("Dropped expired admin session");
        }
        false
    }

    /// Invalidate a token. Returns whether it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(token).is_some();
        if removed {
            tracing::info!("Admin session revoked");
        }
        removed
    }

    fn generate_token() -> String {
        let mut bytes = [0u8; Self::TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}
