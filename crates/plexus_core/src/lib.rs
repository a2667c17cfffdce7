pub mod config;
pub mod constants;
pub mod types;

pub use config::NetworkConfig;
pub use constants::*;
pub use types::*;
