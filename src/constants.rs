//! Numeric constants for pipeline stability
//!
//! These constants define epsilon values used in the detection pipeline to
//! ensure numerical stability.

/// Floor for rise/fall time intervals in milliseconds.
/// Guards the slope division when a half-max crossing coincides with the
/// peak sample itself (zero elapsed time on that side).
pub const SLOPE_EPSILON_MS: f64 = 1e-6;
