//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the remote auth-service plumbing so route handlers
//! can stay focused on protocol translation and redirect behavior.

pub mod auth_status;
pub mod watcher;
