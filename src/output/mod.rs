//! Output formatting
//!
//! - `text`: the two mean lines on stdout
//! - `normalized`: the rewritten `(x,y),(x,y)` point list
//! - `json`: optional machine-readable run summary

pub mod json;
pub mod normalized;
pub mod text;
