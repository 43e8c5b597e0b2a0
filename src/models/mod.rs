//! Data models for employee records and profile images.

pub mod employee;
pub mod photo;

pub use employee::{EmployeeFields, EmployeeId, EmployeeRecord, Gender, STATES};
pub use photo::ProfileImage;
