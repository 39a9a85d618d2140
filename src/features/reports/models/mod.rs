mod report;

pub use report::{seed_reports, CreateReport, ModerationAction, Report, ReportStatus};
