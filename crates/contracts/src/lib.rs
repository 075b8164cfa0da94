//! Shared contracts between the web client and the REST backend.
//!
//! Holds the domain aggregates, wire DTOs and the pure form-orchestration
//! engine (validation rules, wizard state machine, field arrays, draft
//! lifecycle). Everything here is framework-free and natively testable.

pub mod domain;
pub mod shared;
pub mod system;
