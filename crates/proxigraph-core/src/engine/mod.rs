//! # Engine Module
//!
//! Drives proximity graph maintenance from geometry.
//!
//! ## Overview
//!
//! The core graph deliberately knows nothing about coordinates: it only accepts candidate pairs
//! with precomputed squared distances. This module is the geometry owner that produces those
//! candidates. A k-d tree broad phase finds every pair that could lie within the graph's cutoff,
//! exact squared distances are computed for each, and the pairs are fed through
//! `conditionally_add_edge` in a single sequential pass.
//!
//! - **Configuration** ([`config`]) - Broad-phase padding and validation switches
//! - **Rebuild** ([`rebuild`]) - The k-d tree and exhaustive rebuild passes
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod rebuild;
