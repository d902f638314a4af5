//! Platform abstraction layer
//!
//! Browser hosts get a `wasm-bindgen` handle around [`crate::Simulation`].
//! Canvas drawing, DOM updates and event listeners stay on the JS side;
//! the handle only accepts control state and exposes read-only status.

#[cfg(target_arch = "wasm32")]
pub mod web;
