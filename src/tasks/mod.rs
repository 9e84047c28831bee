pub mod shared;
pub mod upload;
