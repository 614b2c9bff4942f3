//! Client for the external uptime monitoring backend.

pub mod client;
pub mod error;
pub mod traits;

pub use client::{UptimeClient, UptimeClientBuilder};
pub use error::{Result, UptimeError};
pub use traits::MonitorBackend;
