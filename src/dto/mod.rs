pub mod response_dto;
pub mod vehicle_dto;

pub use response_dto::{OperationOutcome, OperationResult};
pub use vehicle_dto::VehicleRecord;
