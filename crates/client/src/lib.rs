//! Command-line front end for the spell designer.
//!
//! The binary is a thin composition root: it loads `.env`, configures
//! logging, builds a [`hermetic_runtime::Designer`] and dispatches one
//! [`cli::Command`].

pub mod cli;
pub mod dirs;
pub mod logging;

pub use cli::{Cli, Command};
