//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test servers over the in-memory backend
//! - [`assertions`] - Status, content type and error envelope assertions

#![allow(dead_code)]

pub mod assertions;
pub mod harness;
