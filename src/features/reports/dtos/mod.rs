mod report_dto;

pub use report_dto::{
    ReportActionDto, ReportActionResponseDto, SubmitReportDto, SubmitReportResponseDto,
};
