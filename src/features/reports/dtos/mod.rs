mod report_dto;

pub use report_dto::{
    CreateReportDto, ListReportsQuery, LocationDto, ReportMutationResponseDto, ReportResponseDto,
    UpdateReportStatusDto,
};
