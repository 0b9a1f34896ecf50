//! Ethical score engine for the artisan marketplace.
//!
//! [`scoring`] turns resolved product, brand and origin facts into a 0-100 score, a letter
//! grade and advice. [`catalog`] assembles those facts from stored records. The remaining
//! modules carry the configuration, error and telemetry plumbing shared with the API service.

pub mod catalog;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
