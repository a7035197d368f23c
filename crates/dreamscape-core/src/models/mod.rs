pub mod report;
pub mod request;
