//! Integration-test host crate. No library code; see `tests/`.
