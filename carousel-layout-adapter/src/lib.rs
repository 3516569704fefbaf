//! Adapter utilities for the `carousel-layout` crate.
//!
//! The `carousel-layout` crate is UI-agnostic and focuses on the positioning math. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-based smooth scrolling (adapter-driven, sampled per tick)
//! - Snap-to-center once the user stops scrolling
//! - Click routing: center item vs. back items (which get scrolled to the center)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod snap;
mod tween;


pub use controller::{Controller, ItemClick};
pub use snap::{CenterSnap, ScrollPhase};
pub use tween::{Easing, Tween};
