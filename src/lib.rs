//! Layar: a terminal browser for a remote movie catalog.
//!
//! The crate is split along the seams of the application:
//!
//! - [`catalog`]: the HTTP client for the remote catalog service
//! - [`config`]: file/env configuration resolved at startup
//! - [`ui`]: the terminal UI, including the per-screen state machines

pub mod catalog;
pub mod config;
pub mod logging;
pub mod ui;
