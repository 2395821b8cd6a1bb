//! javachecks - Java code checks over resolved syntax trees
//!
//! The host front-end parses and resolves Java sources and hands each
//! compilation unit over as a [`SourceUnit`]. This library walks those
//! trees and reports two kinds of issues:
//!
//! - **S4201**: a null check made redundant by an adjacent `instanceof`
//! - **S3510**: a `HostnameVerifier.verify` that unconditionally returns `true`
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **File Discovery** - Find all `*.tree.json` compilation units
//! 2. **Loading** - Deserialize units with their type tables
//! 3. **Dispatch** - Walk each tree, handing subscribed nodes to detectors
//! 4. **Reporting** - Output results in various formats

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod report;
pub mod tree;

pub use analysis::{Analyzer, Issue, IssueKind, Severity};
pub use config::Config;
pub use discovery::FileFinder;
pub use report::{ReportFormat, Reporter};
pub use tree::SourceUnit;
