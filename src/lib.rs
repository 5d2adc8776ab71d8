//! Intersection Simulation Library
//!
//! A four-way intersection simulation that can run headless in the console
//! or inside a Bevy window.

pub mod console;
pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
