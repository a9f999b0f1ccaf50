//! Core library for ghostscore.
//!
//! This crate provides deterministic AI-authorship detection plus the
//! supporting content-quality and semantic-coverage analyzers used by the
//! `ghostscore` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`detection`] - 21-signal authorship scoring
//! - [`quality`] - Readability, structure, and completeness scoring
//! - [`semantic`] - Entity and LSI keyword coverage
//! - [`rewrite`] - Rewrite-instruction builder
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use ghostscore_core::detection::analyze;
//!
//! let report = analyze("Furthermore, it is worth noting that the landscape evolves.");
//! println!("{} ({:.2})", report.risk_level, report.composite_score);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod detection;
pub mod error;
pub mod quality;
pub mod report;
pub mod rewrite;
pub mod semantic;
pub mod text;
mod weights;
mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, check_input};
pub use quality::{ContentType, QualityReport, analyze_quality};
pub use report::{DetectionReport, RiskLevel, SignalReport};
pub use rewrite::build_rewrite_instructions;
pub use semantic::{SemanticReport, analyze_semantic_coverage};
