//! Command implementations
//!
//! The binary exposes a single user-facing operation: `publish`, the
//! four-stage pipeline that stages the commit's changed charts and
//! republishes the repository index.

pub mod publish;
