//! # tagstore-driver: Command Script Driver
//!
//! Runs command scripts against a fresh [`tagstore_core::IndexedStore`].
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DriverConfig (env + flags)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  script (file / stdin) ──► command::parse_line ──► Runner::execute     │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                                    RunSummary (text / JSON) ──► stdout  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Environment and flag configuration
//! - [`command`] - Script line parsing
//! - [`runner`] - Execution and checksum
//! - [`error`] - Driver error types

pub mod command;
pub mod config;
pub mod error;
pub mod runner;

pub use command::{parse_line, Command};
pub use config::{DriverConfig, OutputFormat};
pub use error::{ConfigError, DriverError, DriverResult};
pub use runner::{CommandResult, RunSummary, Runner};
