//! # Workflows Module
//!
//! Top-level entry points tying the [`crate::core`] and [`crate::engine`]
//! layers together.
//!
//! - **Completion Workflow** ([`complete`]) - Completes a transformation against
//!   every template reaction of a reaction rule (or one chosen template).

pub mod complete;
