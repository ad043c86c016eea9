//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, cards, admin tables and the donation
//! wizard steps. Layouts read shared auth state from context; everything else
//! takes its data through props.

pub mod admin_table;
pub mod donate_button;
pub mod donation_form;
pub mod donation_outcome;
pub mod donation_summary;
pub mod feedback;
pub mod footer;
pub mod hero;
pub mod inquiries_table;
pub mod layout;
pub mod navbar;
pub mod project_card;
pub mod seo;
pub mod service_card;
pub mod sidebar;
pub mod stat_card;
pub mod testimonials;
pub mod topbar;
