//! Configuration for NoteStore
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;

use crate::error::{NoteError, Result};

/// Main configuration for a NoteStore server instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Largest accepted request body (in bytes)
    pub max_body_bytes: usize,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Id assigned to the first created note
    pub first_id: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            max_body_bytes: 1024 * 1024, // 1 MB
            first_id: 1,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            NoteError::Config(format!("invalid listen address '{}': {}", self.listen_addr, e))
        })
    }

    /// Check that the configuration can be used to start a server
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.max_body_bytes == 0 {
            return Err(NoteError::Config("max_body_bytes must be greater than zero".to_string()));
        }
        if self.first_id < 1 {
            return Err(NoteError::Config(format!(
                "first_id must be at least 1, got {}",
                self.first_id
            )));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the request body limit (in bytes)
    pub fn max_body_bytes(mut self, bytes: usize) -> Self {
        self.config.max_body_bytes = bytes;
        self
    }

    /// Set the id handed to the first created note
    pub fn first_id(mut self, id: i64) -> Self {
        self.config.first_id = id;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
