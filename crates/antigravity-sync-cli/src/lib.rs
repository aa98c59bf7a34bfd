//! antigravity-sync CLI library
//!
//! Argument parsing, layered configuration and console output for the
//! `ag-sync` binary. The conversion itself lives in `antigravity-sync`.

pub mod cli;
pub mod commands;
pub mod config;
