//! Decorative random string generation library.
//!
//! This crate produces random-looking but visually structured tokens:
//! space-separated blocks of characters arranged by simple pattern rules
//! (repeated runs, alternating pairs, outliers, zero-padded tails).
//! Typical uses are placeholder IDs, mock data and demo output.
//!
//! The crate provides:
//! - A configurable character set (digits, lowercase, uppercase)
//! - A library of five block-pattern rules
//! - A block-assembly generator producing strings of an exact length
//!
//! Randomness is decorative, not cryptographic. Do not use the output
//! as a secret, a password or a session token.

/// Core pattern rules and generation logic.
///
/// This module exposes the high-level generator interface together with
/// the charset configuration and the rule library.
pub mod pattern;

/// Error types shared by the whole crate.
pub mod error;
