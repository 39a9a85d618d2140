pub mod referral_handler;

pub use referral_handler::track_referral;
