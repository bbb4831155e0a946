pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
pub mod server;
pub mod stdio;
pub mod tools;

pub use auth::ApiKeyAuth;
pub use catalog::{CatalogClient, Composer, DataType, Genre, Work};
pub use config::OpusConfig;
pub use error::{OpusError, Result};
pub use server::OpusServer;
