//! Command implementations for the Raconteur CLI.

pub mod config;
pub mod tell;
