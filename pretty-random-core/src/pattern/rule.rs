use rand::Rng;

/// One of the five block-pattern rules.
///
/// A rule maps two candidate characters and a block size to a string of
/// exactly that size. Rules are stateless: they consult only their
/// inputs and the entropy source passed by the caller. The two
/// characters are drawn by the caller (independently, with repetition
/// allowed), never by the rule itself.
///
/// The library is a closed enumeration dispatched through a single
/// [`Rule::apply`] match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
	/// Repeat one of the two characters (`AAAA`).
	Repeat,
	/// Alternate between the two characters (`ABAB`).
	Alternate,
	/// Tile repeating pairs of the two characters (`AABB` `AABB`).
	Pairs,
	/// One `char_b` at a random position among `char_a`s (`AABA`).
	Outlier,
	/// One character zero-padded to the block size (`000A` or `A000`).
	Zerofill,
}

impl Rule {
	/// All five rules, in a fixed order.
	pub const ALL: [Rule; 5] = [
		Rule::Repeat,
		Rule::Alternate,
		Rule::Pairs,
		Rule::Outlier,
		Rule::Zerofill,
	];

	/// Returns a rule chosen uniformly at random among the five.
	pub(crate) fn random<R: Rng>(rng: &mut R) -> Rule {
		Rule::ALL[rng.random_range(0..Rule::ALL.len())]
	}

	/// Lowercase rule name, used for display and listing.
	pub fn name(self) -> &'static str {
		match self {
			Rule::Repeat => "repeat",
			Rule::Alternate => "alternate",
			Rule::Pairs => "pairs",
			Rule::Outlier => "outlier",
			Rule::Zerofill => "zerofill",
		}
	}

	/// Applies the rule, producing a string of length exactly `blocksize`.
	///
	/// # Parameters
	/// - `char_a`, `char_b`: candidate characters drawn by the caller.
	///   They may be equal.
	/// - `blocksize`: size of the produced block, must be >= 1.
	/// - `rng`: entropy source for the rules that make random choices
	///   (`Repeat`, `Outlier`, `Zerofill`). `Alternate` and `Pairs` are
	///   deterministic given the two characters.
	///
	/// # Panics
	/// Panics if `blocksize` is 0. The generator validates its
	/// arguments before dispatching to rules.
	pub fn apply<R: Rng>(self, char_a: char, char_b: char, blocksize: usize, rng: &mut R) -> String {
		assert!(blocksize > 0, "blocksize must be >= 1");
		match self {
			Rule::Repeat => repeat(char_a, char_b, blocksize, rng),
			Rule::Alternate => alternate(char_a, char_b, blocksize),
			Rule::Pairs => pairs(char_a, char_b, blocksize),
			Rule::Outlier => outlier(char_a, char_b, blocksize, rng),
			Rule::Zerofill => zerofill(char_a, char_b, blocksize, rng),
		}
	}
}

/// One of the two characters, chosen uniformly, repeated `blocksize` times.
fn repeat<R: Rng>(char_a: char, char_b: char, blocksize: usize, rng: &mut R) -> String {
	let c = if rng.random_bool(0.5) { char_a } else { char_b };
	std::iter::repeat(c).take(blocksize).collect()
}

/// `char_a` at even positions (0-indexed), `char_b` at odd positions.
fn alternate(char_a: char, char_b: char, blocksize: usize) -> String {
	(0..blocksize)
		.map(|i| if i % 2 == 0 { char_a } else { char_b })
		.collect()
}

/// The 4-cycle `a a b b` tiled from its start, truncated to `blocksize`.
///
/// The cycle always restarts from the beginning; it never resumes
/// mid-cycle across calls.
fn pairs(char_a: char, char_b: char, blocksize: usize) -> String {
	let cycle = [char_a, char_a, char_b, char_b];
	(0..blocksize).map(|i| cycle[i % cycle.len()]).collect()
}

/// `blocksize` copies of `char_a` with one uniformly random position
/// overwritten by `char_b`.
///
/// For `blocksize == 1` the single position is always overwritten, so
/// the output is always `char_b`.
fn outlier<R: Rng>(char_a: char, char_b: char, blocksize: usize, rng: &mut R) -> String {
	let mut chars = vec![char_a; blocksize];
	let position = rng.random_range(0..blocksize);
	chars[position] = char_b;
	chars.into_iter().collect()
}

/// One of the two characters, chosen uniformly, left-padded with the
/// literal digit `'0'` to `blocksize`; with probability 1/2 the padded
/// string is reversed instead (zeros on the right).
///
/// The padding character is always `'0'` regardless of the active
/// charset. It is a fixed decorative digit, not drawn from the pool.
fn zerofill<R: Rng>(char_a: char, char_b: char, blocksize: usize, rng: &mut R) -> String {
	let c = if rng.random_bool(0.5) { char_a } else { char_b };

	let mut res = String::with_capacity(blocksize);
	for _ in 1..blocksize {
		res.push('0');
	}
	res.push(c);

	if rng.random_bool(0.5) {
		res = res.chars().rev().collect();
	}
	res
}
