//! tango-gateway: High-score gateway backends.
//!
//! Implements the `HighScoreGateway` trait over HTTP and in memory, and
//! loads the `tango.toml` configuration that chooses between them.

pub mod config;
pub mod http;
pub mod memory;

pub use config::{create_gateway, load_config, load_config_from, GatewayConfig, TangoConfig};
pub use http::HttpGateway;
pub use memory::MemoryGateway;
