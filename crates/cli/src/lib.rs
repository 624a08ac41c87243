//! CLI tool for inspecting rendezvous-hash placement.
//!
//! Provides commands for:
//! - Ranking a replica set for a content identifier
//! - Splitting the ranking into chosen and fallback replicas
//! - Querying the default redundancy policy

pub mod commands;
pub mod config;

pub use commands::Command;
pub use config::CliConfig;
