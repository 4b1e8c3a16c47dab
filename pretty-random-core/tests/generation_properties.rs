//! Property tests for the public generation API.
//!
//! Coverage:
//! - Length invariant: the non-space character count always equals the
//!   requested length, for every valid `(blocksize, length)` pair
//! - Block-size invariant: every block has `blocksize` characters,
//!   except a possible shorter tail of `length % blocksize`
//! - Charset membership: output only contains pool characters
//!   (plus the zerofill padding digit `'0'`)
//! - Eager rejection of invalid configurations and arguments
//! - Seeded reproducibility

use rand::SeedableRng;
use rand::rngs::StdRng;

use pretty_random_core::error::PrettyRandomError;
use pretty_random_core::pattern::charset::CharsetConfig;
use pretty_random_core::pattern::generator::PrettyRandom;

#[test]
fn length_invariant_holds_for_every_valid_pair() {
	let mut generator = PrettyRandom::new();
	for length in 1..100 {
		for blocksize in 1..=length {
			let out = generator.generate(blocksize, length).unwrap();
			let non_space = out.chars().filter(|&c| c != ' ').count();
			assert_eq!(
				non_space, length,
				"blocksize={} length={} produced {:?}",
				blocksize, length, out
			);
		}
	}
}

#[test]
fn block_size_invariant_holds_for_every_valid_pair() {
	let mut generator = PrettyRandom::new();
	for length in 1..100 {
		for blocksize in 1..=length {
			let out = generator.generate(blocksize, length).unwrap();
			let blocks: Vec<&str> = out.split(' ').collect();

			let remainder = length % blocksize;
			let expected_blocks = length / blocksize + usize::from(remainder != 0);
			assert_eq!(blocks.len(), expected_blocks);

			for block in &blocks[..blocks.len() - 1] {
				assert_eq!(block.chars().count(), blocksize);
			}
			let expected_tail = if remainder != 0 { remainder } else { blocksize };
			assert_eq!(blocks[blocks.len() - 1].chars().count(), expected_tail);
		}
	}
}

#[test]
fn all_false_configuration_is_rejected() {
	let config = CharsetConfig {
		use_digits: false,
		use_lowercase: false,
		use_uppercase: false,
	};
	assert_eq!(
		PrettyRandom::with_config(config).err(),
		Some(PrettyRandomError::EmptyCharset)
	);

	let mut generator = PrettyRandom::new();
	assert_eq!(
		generator.configure(config),
		Err(PrettyRandomError::EmptyCharset)
	);
}

#[test]
fn invalid_arguments_are_rejected() {
	let mut generator = PrettyRandom::new();
	for (blocksize, length) in [(0, 5), (5, 0), (5, 3), (0, 0)] {
		match generator.generate(blocksize, length) {
			Err(PrettyRandomError::InvalidArgument(_)) => (),
			other => panic!(
				"generate({}, {}) should be rejected, got {:?}",
				blocksize, length, other
			),
		}
	}
}

/// The original demo invocation: five 4-character blocks plus a
/// 2-character tail, drawn from digits + uppercase only.
#[test]
fn default_charset_scenario_blocksize_4_length_22() {
	let mut generator = PrettyRandom::new();
	let out = generator.generate(4, 22).unwrap();

	let non_space = out.chars().filter(|&c| c != ' ').count();
	assert_eq!(non_space, 22);

	let blocks: Vec<&str> = out.split(' ').collect();
	assert_eq!(blocks.len(), 6);
	for block in &blocks[..5] {
		assert_eq!(block.chars().count(), 4);
	}
	assert_eq!(blocks[5].chars().count(), 2);

	for c in out.chars().filter(|&c| c != ' ') {
		assert!(
			c.is_ascii_digit() || c.is_ascii_uppercase(),
			"character {:?} is outside the default charset",
			c
		);
	}
}

#[test]
fn lowercase_only_output_stays_in_its_pool() {
	let config = CharsetConfig {
		use_digits: false,
		use_lowercase: true,
		use_uppercase: false,
	};
	let mut generator = PrettyRandom::with_config(config).unwrap();
	let out = generator.generate(3, 30).unwrap();

	// The zerofill padding digit is fixed and may fall outside the pool
	for c in out.chars().filter(|&c| c != ' ') {
		assert!(
			c.is_ascii_lowercase() || c == '0',
			"character {:?} is outside the lowercase pool",
			c
		);
	}
}

#[test]
fn same_seed_replays_the_same_token_stream() {
	let config = CharsetConfig::default();
	let mut first = PrettyRandom::from_rng(config, StdRng::seed_from_u64(7)).unwrap();
	let mut second = PrettyRandom::from_rng(config, StdRng::seed_from_u64(7)).unwrap();

	for _ in 0..10 {
		assert_eq!(
			first.generate(4, 22).unwrap(),
			second.generate(4, 22).unwrap()
		);
	}
}

#[test]
fn different_seeds_diverge_eventually() {
	let config = CharsetConfig::default();
	let mut first = PrettyRandom::from_rng(config, StdRng::seed_from_u64(1)).unwrap();
	let mut second = PrettyRandom::from_rng(config, StdRng::seed_from_u64(2)).unwrap();

	let diverged = (0..10).any(|_| {
		first.generate(8, 64).unwrap() != second.generate(8, 64).unwrap()
	});
	assert!(diverged);
}
