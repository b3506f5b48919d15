//! `filekit` wraps a filesystem path as an object.
//!
//! The crate is a thin facade: [`File`] owns one path, and each method
//! forwards to `std::fs` or to a filesystem utility crate (`fs_extra` for
//! recursive copies, `walkdir` for traversal, `serde_json` and `quick-xml`
//! for structured reads) with the wrapped path prepended. The helpers in
//! [`ops`] are the forwarding targets and can also be used directly with
//! plain paths.

pub mod glob;
pub mod ops;

mod file;

pub use crate::file::File;
pub use crate::glob::{is_extglob, is_glob};
pub use crate::ops::lines::LineReader;
pub use crate::ops::path::PathError;
pub use crate::ops::stat::PathKind;
pub use crate::ops::vacuum::VacuumOptions;
pub use crate::ops::walk::DiveOptions;
pub use crate::ops::xml::XmlElement;
