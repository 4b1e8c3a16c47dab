use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::PrettyRandomError;

const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const LOWERCASE: &[char] = &[
	'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
	'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
const UPPERCASE: &[char] = &[
	'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
	'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// One of the three supported symbol categories.
///
/// Each class is backed by a fixed, immutable alphabet. The classes are
/// disjoint, so a union of any selection of them is duplicate-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
	Digits,
	Lowercase,
	Uppercase,
}

impl SymbolClass {
	/// Returns the fixed alphabet backing this class.
	pub fn alphabet(self) -> &'static [char] {
		match self {
			SymbolClass::Digits => DIGITS,
			SymbolClass::Lowercase => LOWERCASE,
			SymbolClass::Uppercase => UPPERCASE,
		}
	}
}

/// Selection of symbol classes used to build the character pool.
///
/// Each class is toggled independently. The default selection is
/// digits + uppercase letters, lowercase disabled.
///
/// # Invariants
/// - At least one class must be enabled; an all-false selection is a
///   configuration error, never a silently empty pool.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetConfig {
	/// Include the digits `0-9`.
	pub use_digits: bool,

	/// Include the lowercase letters `a-z`.
	pub use_lowercase: bool,

	/// Include the uppercase letters `A-Z`.
	pub use_uppercase: bool,
}

impl Default for CharsetConfig {
	fn default() -> Self {
		Self {
			use_digits: true,
			use_lowercase: false,
			use_uppercase: true,
		}
	}
}

impl CharsetConfig {
	/// Returns the enabled symbol classes, in a fixed order.
	pub fn enabled_classes(&self) -> Vec<SymbolClass> {
		let mut classes = Vec::new();
		if self.use_digits {
			classes.push(SymbolClass::Digits);
		}
		if self.use_lowercase {
			classes.push(SymbolClass::Lowercase);
		}
		if self.use_uppercase {
			classes.push(SymbolClass::Uppercase);
		}
		classes
	}
}

/// The resolved set of characters eligible for random selection.
///
/// Built once from a [`CharsetConfig`] and owned by the generator; it
/// is only replaced on an explicit reconfiguration. Members are unique
/// (the symbol classes are disjoint). Order is irrelevant because
/// selection is always a uniform random draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
	chars: Vec<char>,
}

impl CharacterPool {
	/// Resolves a charset configuration into a concrete pool.
	///
	/// # Errors
	/// Returns [`PrettyRandomError::EmptyCharset`] if no symbol class
	/// is enabled. No partial pool is produced in that case.
	pub fn resolve(config: &CharsetConfig) -> Result<Self, PrettyRandomError> {
		let classes = config.enabled_classes();
		if classes.is_empty() {
			return Err(PrettyRandomError::EmptyCharset);
		}

		let mut chars = Vec::new();
		for class in classes {
			chars.extend_from_slice(class.alphabet());
		}
		Ok(Self { chars })
	}

	/// Draws one character uniformly at random from the pool.
	pub(crate) fn draw<R: Rng>(&self, rng: &mut R) -> char {
		// The pool is never empty: `resolve` rejects empty selections
		self.chars[rng.random_range(0..self.chars.len())]
	}

	/// Returns whether the pool contains the given character.
	pub fn contains(&self, c: char) -> bool {
		self.chars.contains(&c)
	}

	/// Returns the number of distinct characters in the pool.
	pub fn len(&self) -> usize {
		self.chars.len()
	}

	/// Always false for a resolved pool, kept for API completeness.
	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}

	/// Returns an iterator over the characters of the pool.
	pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
		self.chars.iter().copied()
	}
}

impl Default for CharacterPool {
	/// Pool for the default configuration (digits + uppercase).
	///
	/// Infallible: the default selection is never empty.
	fn default() -> Self {
		let mut chars = Vec::with_capacity(DIGITS.len() + UPPERCASE.len());
		chars.extend_from_slice(DIGITS);
		chars.extend_from_slice(UPPERCASE);
		Self { chars }
	}
}
