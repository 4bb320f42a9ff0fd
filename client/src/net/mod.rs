//! Networking modules for the listing and chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared by
//! every view.

pub mod api;
pub mod types;
