//! Users backend outbound adapter.
//!
//! This module provides the HTTP implementation of the `UserDirectory` port.

mod dto;
mod http_client;

pub use http_client::HttpUserDirectory;
