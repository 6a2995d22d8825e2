//! Shared core of the storefront admin console.
//!
//! Everything in this crate is target independent: it compiles for the
//! browser bundle (`frontend`) and natively for the `host` binary and the
//! test suite. Browser specifics (HTTP, object URLs, dialogs) are reached
//! through the traits in [`resource`].

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod resource;
