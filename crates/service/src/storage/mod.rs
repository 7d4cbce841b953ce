//! Storage abstractions for service layer
//!
//! In-process collections backing the `memory` database backend and the tests.

pub mod memory;
