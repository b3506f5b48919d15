//! Per-concern filesystem operation helpers.
//!
//! Each submodule owns one operation family and its error type. The
//! [`File`](crate::File) facade forwards here; the helpers are also usable
//! directly with plain paths.

pub mod copy;
pub mod create;
pub mod empty;
pub mod json;
pub mod lines;
pub mod mv;
pub mod output;
pub mod path;
pub mod remove;
pub mod stat;
pub mod vacuum;
pub mod walk;
pub mod xml;
