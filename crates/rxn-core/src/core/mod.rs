//! # Core Module
//!
//! Building blocks with no engine logic of their own:
//!
//! - **Data Models** ([`models`]) - Transformations, reaction rules, template reactions, compounds
//! - **Notation** ([`io`]) - Parsing and rendering `A.B>>C` / `A+B=C` reaction strings
//! - **Compound Cache** ([`cache`]) - Read-only lookup of rules, templates and structures
//! - **Utilities** ([`utils`]) - Multiset arithmetic over stoichiometry maps

pub mod cache;
pub mod io;
pub mod models;
pub mod utils;
