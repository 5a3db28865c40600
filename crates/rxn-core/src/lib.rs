//! # rxnrebuild
//!
//! Rebuilds a complete reaction equation from a partial transformation and a
//! reaction rule. A reaction rule is a reduced, directional copy of a larger
//! template reaction from which cofactors and other spectator compounds were
//! dropped; this library works out exactly which compounds (and how many of
//! each) were dropped and adds them back to the user's transformation.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Transformation`,
//!   `ReactionRule`, `TemplateReaction`), the textual reaction notation, the
//!   read-only compound cache, and multiset arithmetic.
//!
//! - **[`engine`]: The Logic Core.** Direction normalization, rule/template
//!   resolution, the two missing-compound detectors (precomputed exclusion
//!   lists and the legacy live difference), completion and consistency checks.
//!
//! - **[`workflows`]: The Public API.** [`workflows::complete::run`] ties the
//!   stages together and returns one completed result per template reaction.

pub mod core;
pub mod engine;
pub mod workflows;
