pub mod celebrity;
pub mod enquiry;
pub mod filter;
pub mod types;

#[cfg(test)]
pub mod fixtures;
