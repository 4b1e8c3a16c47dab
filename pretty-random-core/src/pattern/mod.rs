//! Top-level module for the pattern generation system.
//!
//! This crate provides a decorative random string generator, including:
//! - Symbol classes and charset configuration (`charset`)
//! - The five block-pattern rules (`rule`)
//! - A high-level block-assembly interface (`generator`)

/// Symbol classes, charset configuration and the resolved character pool.
///
/// The pool is the deduplicated union of all enabled symbol classes and
/// is resolved once at configuration time.
pub mod charset;

/// The closed library of five block-pattern rules.
///
/// Each rule maps two candidate characters and a block size to a string
/// of exactly that size.
pub mod rule;

/// High-level interface stitching rule outputs into a full token.
///
/// Exposes charset (re)configuration and `generate(blocksize, length)`
/// with per-call argument validation.
pub mod generator;
