//! Safe inventory level estimation for zaiko.
//!
//! This crate provides the pure computational kernel:
//!
//! - [`Estimator`] - Computes optimal inventory levels from sales history
//! - [`InventoryAssessment`] - The computed estimate and its breakdown
//! - [`stats`] - Descriptive statistics helpers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zaiko-tools/zaiko/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
pub mod stats;

pub use estimator::{Estimator, InventoryAssessment, SERVICE_LEVEL_Z};
