mod gem_dto;

pub use gem_dto::GemsResponseDto;
