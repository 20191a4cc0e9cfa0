pub mod client;
pub mod config;
pub mod error;
pub mod rpc;
pub mod service;
pub mod types;
pub mod utils;

// ---- Top-level re-exports for ergonomic usage ----

// Client + configuration
pub use client::Epirus;
pub use config::EpirusConfig;
pub use error::{EpirusError, Result};

// URL resolution
pub use service::{resolve_service_url, ServiceUrlResolver};

// JSON-RPC client
pub use rpc::EpirusHttpClient;

// Core types
pub use types::{Block, BlockParameter, Network};
