//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive the session and callbacks as props from the page that
//! mounts them; none of them look up shared state on their own.

pub mod box_scene;
pub mod house_card;
pub mod house_form_dialog;
pub mod nav_bar;
pub mod protected_route;
