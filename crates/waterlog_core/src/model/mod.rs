//! Tracker domain model.
//!
//! # Responsibility
//! - Define the screen-scoped state record and its synchronous transitions.
//! - Keep goal validation and unit conversion pure and storage-free.
//!
//! # Invariants
//! - Quantities are stored in milliliters; the display unit is presentation-only.
//! - Nothing in this module performs I/O.

pub mod goal;
pub mod intake;
pub mod state;
pub mod unit;
