pub mod error;
pub mod types;
pub mod config;
pub mod pricing;
pub mod compat;
pub mod engine;
pub mod sources;
pub mod util;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
