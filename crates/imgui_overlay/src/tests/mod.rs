//! Cross-module tests
//!
//! Architecture:
//! - mocks: recording GUI library, host device, host input and backend loader
//! - frame_cycle: full before_layout/after_layout passes through the frame bridge
//! - overlay_lifecycle: deferred setup, disabled mode and shutdown of the component


mod overlay_lifecycle;
