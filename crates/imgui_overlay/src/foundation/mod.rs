//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the overlay:
//! - Math types and projection helpers
//! - Packed colors
//! - Value adapters between engine and GUI vector types
//! - Frame timing
//! - Logging utilities

pub mod math;
pub mod color;
pub mod adapters;
pub mod time;
pub mod logging;
