use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::PrettyRandomError;
use crate::pattern::charset::{CharacterPool, CharsetConfig};
use crate::pattern::rule::Rule;

/// High-level decorative string generator.
///
/// # Responsibilities
/// - Own the resolved [`CharacterPool`] (replaced on reconfiguration)
/// - Own the entropy source used for all draws
/// - Stitch rule outputs into a final token of an exact length
///
/// # Invariants
/// - The pool is never empty (enforced at configuration time)
/// - The non-space character count of every generated token equals the
///   requested `length` exactly
///
/// The entropy source is an injected dependency rather than global
/// state, so tests can seed it ([`PrettyRandom::from_rng`]) and replay
/// exact outputs. The default source is a [`StdRng`] seeded from the OS.
#[derive(Debug)]
pub struct PrettyRandom<R: Rng = StdRng> {
	pool: CharacterPool,
	rng: R,
}

impl PrettyRandom<StdRng> {
	/// Creates a generator with the default charset (digits + uppercase)
	/// and an OS-seeded entropy source.
	pub fn new() -> Self {
		Self {
			pool: CharacterPool::default(),
			rng: StdRng::from_os_rng(),
		}
	}

	/// Creates a generator with the given charset configuration and an
	/// OS-seeded entropy source.
	///
	/// # Errors
	/// Returns [`PrettyRandomError::EmptyCharset`] if the configuration
	/// enables no symbol class.
	pub fn with_config(config: CharsetConfig) -> Result<Self, PrettyRandomError> {
		Self::from_rng(config, StdRng::from_os_rng())
	}
}

impl Default for PrettyRandom<StdRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> PrettyRandom<R> {
	/// Creates a generator with an explicit entropy source.
	///
	/// Use a seeded rng (ex. `StdRng::seed_from_u64`) for reproducible
	/// output in tests.
	///
	/// # Errors
	/// Returns [`PrettyRandomError::EmptyCharset`] if the configuration
	/// enables no symbol class.
	pub fn from_rng(config: CharsetConfig, rng: R) -> Result<Self, PrettyRandomError> {
		Ok(Self {
			pool: CharacterPool::resolve(&config)?,
			rng,
		})
	}

	/// Replaces the active charset with a newly resolved pool.
	///
	/// The prior pool is discarded; no history is kept.
	///
	/// # Errors
	/// Returns [`PrettyRandomError::EmptyCharset`] if the configuration
	/// enables no symbol class. The prior pool is kept in that case.
	pub fn configure(&mut self, config: CharsetConfig) -> Result<(), PrettyRandomError> {
		self.pool = CharacterPool::resolve(&config)?;
		Ok(())
	}

	/// Read-only access to the active character pool.
	pub fn pool(&self) -> &CharacterPool {
		&self.pool
	}

	/// Generates a decorative token of exactly `length` non-space
	/// characters, arranged in space-separated blocks of `blocksize`.
	///
	/// # Behavior
	/// - Emits `length / blocksize` full blocks. Each one uses a rule
	///   chosen uniformly among the five and a fresh pair of characters
	///   drawn (with replacement) from the pool.
	/// - If `length % blocksize != 0`, emits one trailing partial block
	///   of that size using the alternate rule only.
	/// - Blocks are joined with single spaces, in generation order.
	///
	/// # Errors
	/// Returns [`PrettyRandomError::InvalidArgument`] naming the
	/// violated constraint when `blocksize == 0`, `length == 0` or
	/// `length < blocksize`. Checked on every call.
	pub fn generate(&mut self, blocksize: usize, length: usize) -> Result<String, PrettyRandomError> {
		if blocksize == 0 {
			return Err(PrettyRandomError::InvalidArgument(
				"blocksize must be greater than zero".to_owned(),
			));
		}
		if length == 0 {
			return Err(PrettyRandomError::InvalidArgument(
				"length must be greater than zero".to_owned(),
			));
		}
		if length < blocksize {
			return Err(PrettyRandomError::InvalidArgument(format!(
				"length ({}) must be larger or equal than the block size ({})",
				length, blocksize
			)));
		}

		let num_blocks = length / blocksize;
		let remainder = length % blocksize;

		let mut blocks = Vec::with_capacity(num_blocks + 1);
		for _ in 0..num_blocks {
			let char_a = self.pool.draw(&mut self.rng);
			let char_b = self.pool.draw(&mut self.rng);
			let rule = Rule::random(&mut self.rng);
			blocks.push(rule.apply(char_a, char_b, blocksize, &mut self.rng));
		}

		if remainder != 0 {
			// Tail block: always the alternate rule, never one of the other four
			let char_a = self.pool.draw(&mut self.rng);
			let char_b = self.pool.draw(&mut self.rng);
			blocks.push(Rule::Alternate.apply(char_a, char_b, remainder, &mut self.rng));
		}

		Ok(blocks.join(" "))
	}
}
