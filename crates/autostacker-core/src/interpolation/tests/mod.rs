//! Tests for interpolation
//!
//! Organized into focused submodules, one per grammar area.

use super::*;

// Test helper functions
mod helpers;

mod scan_escaping;
mod delimited;
