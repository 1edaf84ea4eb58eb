//! emp-cli library
//!
//! This module exports the HTTP client for use in tests and other crates.

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
