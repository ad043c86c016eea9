//! Client-side state and form logic.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `donation`, `inquiry`, `admin`) so pages
//! keep only signals and wiring while the rules stay testable without a
//! browser.

pub mod admin;
pub mod auth;
pub mod donation;
pub mod inquiry;
