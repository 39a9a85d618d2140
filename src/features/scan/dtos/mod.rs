mod scan_dto;

pub use scan_dto::ScanRequestDto;
