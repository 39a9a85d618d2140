pub mod ws_handler;

pub use ws_handler::{realtime_handler, upgrade};
