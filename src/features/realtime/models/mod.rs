mod message;

pub use message::ServerMessage;
