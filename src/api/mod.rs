pub mod dtos;
pub mod format;
pub mod response;
