//! Support code for the `crs-cli` binary.

pub mod config;
pub mod output;
