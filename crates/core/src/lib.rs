//! rail-core: TestRail API client for the rail CLI
//!
//! This crate provides:
//! - A blocking request primitive over the TestRail HTTP API
//! - Name-to-record resolution for projects, suites, milestones, and runs
//! - The operations behind the `is_completed` and `add` commands

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod transport;

// Re-exports
pub use client::TestRail;
pub use config::Config;
pub use error::{Entity, RailError};
pub use model::{Milestone, Project, Run, RunSelector, Suite};
pub use transport::{FakeTransport, HttpTransport, Method, Transport, TransportError};
