//! Configuration for maildraft.
//!
//! The config file is YAML with all fields optional; defaults cover the
//! common case so the tool runs without any config file at all. What was
//! implicit global state in earlier incarnations of this pipeline (the
//! tenure reference date, the coaching-theme table, the department-context
//! table) is explicit immutable configuration here, so tests and callers
//! can pin arbitrary values.
//!
//! The completion-service credential is *not* part of the config file; it
//! comes from the environment (see [`crate::completion`]).

mod model;
mod operations;


pub use model::Config;
