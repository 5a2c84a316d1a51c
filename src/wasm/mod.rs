//! WebAssembly bindings for the rp2a03 core.
//!
//! This module provides JavaScript-callable interfaces to the processor,
//! enabling browser-based stepping and inspection of 6502 programs.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator;
