mod config;

pub use config::{load_config, Config, ConfigOverrides, SyncConfig};

#[cfg(test)]
pub(crate) use config::{resolve_from, split_repository};
