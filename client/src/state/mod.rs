//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is split per view (`chat`, `properties`, `property_form`). Each page
//! owns its own signal; nothing is shared between views except the backend.

pub mod chat;
pub mod properties;
pub mod property_form;
