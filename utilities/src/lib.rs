pub mod logger;
pub mod result;
