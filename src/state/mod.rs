//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Application-level state lives in small focused models provided through
//! Leptos context by `App`, so components never reach for module globals.

pub mod theme;
