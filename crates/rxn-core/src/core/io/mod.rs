//! # I/O Module
//!
//! Reading and writing the textual reaction notation
//! (`<left><sep_side><right>`, compounds joined by `<sep_cmpd>`, each
//! optionally prefixed by `"<coefficient> "`).

pub mod notation;
