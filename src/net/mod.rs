//! Networking modules for the portal HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the login call and the response contract; everything else in
//! the crate stays wire-format agnostic.

pub mod api;
