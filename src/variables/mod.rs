//! Variable registry.
//!
//! The registry is the ordered list of variables offered as autocomplete
//! candidates and used as the substitution table for rendered exports.

mod registry;

pub use registry::{Variable, VariableRegistry};
