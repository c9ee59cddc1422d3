//! Output formatters for the zaiko inventory level estimator.
//!
//! This crate provides formatters for writing assessments and sales
//! histories to various output formats:
//!
//! - [`TextFormatter`] - Human-readable report
//! - [`CsvFormatter`] - CSV format
//! - [`JsonFormatter`] - Compact or pretty JSON

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zaiko-tools/zaiko/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod text;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use text::TextFormatter;
