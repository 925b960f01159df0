pub mod features;
pub mod filter;
pub mod profile;
pub mod ranking;
