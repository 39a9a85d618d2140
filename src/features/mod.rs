pub mod admin;
pub mod gems;
pub mod realtime;
pub mod referrals;
pub mod reports;
pub mod scan;
pub mod status;
