//! # Models Module
//!
//! Plain data structures shared by every layer of the library.
//!
//! - **Sides** ([`sides`]) - The two-sided container and the compound-to-coefficient map
//! - **Transformations** ([`transformation`]) - The user's (possibly partial) reaction
//! - **Reactions** ([`reaction`]) - Reaction rules and the template reactions they come from
//! - **Compounds** ([`compound`]) - Structural records of individual compounds
//!
//! None of these types perform I/O; rule, template and compound records are
//! produced by the [`crate::core::cache`] collaborator and only ever read.

pub mod compound;
pub mod reaction;
pub mod sides;
pub mod transformation;
