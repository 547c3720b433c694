//! Server-rendered user management pages backed by a REST users API.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_support;

pub use middleware::Trace;
