#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Pastel particle backdrop and page toggles, compiled to WebAssembly.
//!
//! The particle pool, shape tracing and widget state logic are plain Rust
//! and build on any target; the DOM glue lives in [`web`] and only exists
//! on wasm32.

pub mod config;
pub mod paint;
pub mod particle;
pub mod widget;

// Only compile browser-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use particle::{Bounds, Color, Particle, ParticleSet, Shape};
