//! # portal-ui
//!
//! Leptos + WASM front end for the member portal. Replaces the React
//! `client/` with a Rust-native UI layer.
//!
//! This crate contains the login and dashboard pages, the theme state, the
//! HTTP session client, and the localStorage session-token glue. It is a
//! client-side rendered (CSR) application; there is no server component.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
