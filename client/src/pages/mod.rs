//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form signals, submit
//! handling) and delegates rendering details to `components`. Admin screens
//! live under `admin` and render inside the guarded admin layout.

pub mod about;
pub mod admin;
pub mod contact;
pub mod donate;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod quote;
pub mod services;
