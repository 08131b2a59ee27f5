//! Backend test support utilities
//!
//! Shared helpers for the league backend integration tests: one-time logging
//! initialization and assertions on the RFC 7807 error contract.

pub mod logging;
pub mod problem_details;
