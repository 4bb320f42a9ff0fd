//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, messages and site chrome from values handed in by
//! the pages; they hold no state of their own.

pub mod chat_message;
pub mod property_card;
pub mod recommendation_panel;
pub mod site_header;
