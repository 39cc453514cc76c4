//! Core functionality for the sift Swift linter
//!
//! This crate provides the core linting functionality including:
//! - Syntax tree analysis and rule checking
//! - Diagnostic generation with stable source positions
//! - Trivia-preserving tree rewriting for rules with a safe fix
//! - Rule metadata for the external registry and documentation generator
//!
//! Parsing, configuration files, suppression-comment resolution, and
//! reporting live outside this crate: trees come in through
//! [`check::TreeProvider`], disabled regions come in as resolved
//! [`location::SourceRange`] values.

pub mod analyze;
pub mod check;
pub mod checker;
pub mod config;
pub mod correct;
pub mod diagnostic;
pub mod error;
pub mod lints;
pub mod location;
pub mod rule_options;
pub mod rule_table;
pub mod syntax;
