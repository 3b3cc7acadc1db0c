//! Chronicle - aggregated test-story reporting
//!
//! Chronicle is a CLI tool and library for test-automation reporting. The
//! library resolves human-readable metadata for test scenarios (titles,
//! issue references, pending/ignored markers, tags); the CLI collects story
//! result files into an aggregated report directory and manages historical
//! report data.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Configuration file loading and parsing
//! - `formatting`: Issue-reference extraction from free text
//! - `metadata`: Metadata model and the per-suite provider interface
//! - `naming`: Scenario-name normalization
//! - `reports`: Report-generation collaborators and project identity
//! - `resolver`: Scenario metadata resolution facade

pub mod cli;
pub mod config;
pub mod formatting;
pub mod metadata;
pub mod naming;
pub mod reports;
pub mod resolver;
