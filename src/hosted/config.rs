//! Hosted Backend Configuration

use std::env;

/// Where the hosted kernel listens unless told otherwise.
pub const DEFAULT_KERNEL_ADDRESS: &str = "localhost:9687";

/// Environment variable overriding [`DEFAULT_KERNEL_ADDRESS`].
pub const KERNEL_ADDRESS_VAR: &str = "PANTHER_KERNEL_ADDR";

/// Connection settings for a hosted kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedConfig {
    /// `host:port` of the kernel's listener.
    pub address: String,
    /// Disable Nagle's algorithm. Packets are small and latency-bound.
    pub nodelay: bool,
}

impl Default for HostedConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_KERNEL_ADDRESS.to_owned(),
            nodelay: true,
        }
    }
}

impl HostedConfig {
    /// Defaults, with the address taken from [`KERNEL_ADDRESS_VAR`] if set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(address) = lookup(KERNEL_ADDRESS_VAR).filter(|a| !a.trim().is_empty()) {
            config.address = address.trim().to_owned();
        }
        config
    }
}
