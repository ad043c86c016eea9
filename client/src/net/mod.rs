//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the generic request wrapper, `endpoints` names every backend
//! route the UI touches, and `types` defines the JSON records.

pub mod api;
pub mod endpoints;
pub mod types;
