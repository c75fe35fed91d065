//! Utility functions and helpers used throughout the application.
//!
//! This module contains:
//! * `cli_branding` - Banners, section headers and colored status lines

pub mod cli_branding;
