//! Core types for the zaiko safe inventory level estimator.
//!
//! This crate provides the fundamental data structures used throughout zaiko:
//!
//! - [`SalesRecord`] - A single month of sales with a period label
//! - [`Parameters`] - Cost ratio, current inventory, lead time, safety factor
//! - [`Evaluation`] - Understock / overstock / normal verdict
//! - [`InputError`] - Input validation errors

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zaiko-tools/zaiko/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod evaluation;
mod params;
mod sales;

pub use error::{InputError, Result};
pub use evaluation::{Evaluation, OVERSTOCK_RATIO, UNDERSTOCK_RATIO};
pub use params::Parameters;
pub use sales::{SalesRecord, trailing_periods};
