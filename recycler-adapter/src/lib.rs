//! Adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate reacts to content-offset notifications and leaves the presentation of
//! motion to the UI layer. This crate provides small, framework-neutral helpers for UIs that
//! have to produce that motion themselves:
//!
//! - A frame-driven [`Controller`] (drag, navigation ticks, movement-stopped detection)
//! - Elastic overscroll: [`rubber_delta`] resistance and a [`SpringBack`] return
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod elastic;


pub use controller::{Controller, DEFAULT_STOP_DELAY_MS};
pub use elastic::{DEFAULT_ELASTICITY, SpringBack, rubber_delta};
