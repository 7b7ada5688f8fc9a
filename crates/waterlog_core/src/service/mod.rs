//! Tracker use-case services.
//!
//! # Responsibility
//! - Wrap model transitions into the screen-facing tracker component.
//! - Derive notices and the render model for the presentation layer.

pub mod notice;
pub mod tracker;
pub mod view;
