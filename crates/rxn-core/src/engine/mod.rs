//! # Engine Module
//!
//! The stages that turn a parsed transformation and a reaction rule into a
//! completed reaction:
//!
//! - **Configuration** ([`config`]) - Per-call options and their builder
//! - **Resolution** ([`resolver`]) - Rule variants to process for a rule ID
//! - **Orientation** ([`direction`]) - Aligning rule and template with the user's transformation
//! - **Detection** ([`detector`]) - Precomputed and legacy missing-compound detectors
//! - **Completion** ([`completer`]) - Additive merge of missing compounds
//! - **Consistency** ([`consistency`]) - Per-side stoichiometric totals
//! - **Diagnostics** ([`diagnostics`]) - Non-fatal findings returned with each result
//! - **Error Handling** ([`error`]) - Engine error type

pub mod completer;
pub mod config;
pub mod consistency;
pub mod detector;
pub mod diagnostics;
pub mod direction;
pub mod error;
pub mod resolver;
