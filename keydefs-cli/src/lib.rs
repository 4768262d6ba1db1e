//! # Keydefs CLI Library
//!
//! Command definitions and handlers for the keydefs tool, exposed as a library
//! so the argument parser can be exercised in tests.

pub mod cli;
