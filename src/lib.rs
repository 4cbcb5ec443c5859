// Module declarations
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod rows;
pub mod sync;

// Re-export commonly used items
pub use client::{GitHubClient, SheetsClient};
pub use config::{Config, ConfigOverrides, SyncConfig};
pub use error::{SyncError, SyncResult};
pub use models::*;
pub use sync::SyncReport;

#[cfg(test)]
mod tests;
