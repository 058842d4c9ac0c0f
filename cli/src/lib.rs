//! Command-line access to the EE9 content layer.
//!
//! Every subcommand renders to a `String` through a `render` function in
//! [`commands`], so the integration tests exercise exactly what the binary
//! prints.

pub mod cli;
pub mod commands;
