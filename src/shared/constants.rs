/// First id handed out to user submissions
pub const REPORT_ID_START: i64 = 200;

/// Contact recorded when a submission leaves it blank
pub const DEFAULT_CONTACT: &str = "Anon";

/// Plain-text banner served at `/`
pub const HEALTH_BANNER: &str = "GOLD GUARD SYSTEM ONLINE 🟢";

/// Pushed to every realtime client on connect
pub const WELCOME_MESSAGE: &str = "Connected to Gold Guard";
