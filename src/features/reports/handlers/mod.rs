pub mod report_handler;

pub use report_handler::{list_reports, report_action, submit_report, ReportState};
