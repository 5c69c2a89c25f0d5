pub mod celebrity;
#[cfg(feature = "server")]
pub mod config;
pub mod enquiry;
