//! Common test utilities for spa-engine
//!
//! Program and query builders plus the fixture programs shared by the
//! integration tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
