//! HTTP inbound adapter serving the server-rendered user pages.

pub mod components;
pub mod error;
pub mod health;
mod render;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod user_forms;
pub mod users;
mod views;
