use rand::SeedableRng;
use rand::rngs::StdRng;

use pretty_random_core::pattern::charset::CharsetConfig;
use pretty_random_core::pattern::generator::PrettyRandom;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Default charset: digits + uppercase letters, lowercase disabled
	let mut generator = PrettyRandom::new();

	// Blocks of 4 characters, 22 characters in total:
	// five full blocks plus a 2-character tail
	println!("Default charset: {}", generator.generate(4, 22)?);

	// A few more shapes with the same generator
	println!("Single block:    {}", generator.generate(8, 8)?);
	println!("Tiny blocks:     {}", generator.generate(2, 14)?);

	// Reconfigure to lowercase letters only; the prior pool is discarded
	generator.configure(CharsetConfig {
		use_digits: false,
		use_lowercase: true,
		use_uppercase: false,
	})?;
	println!("Lowercase only:  {}", generator.generate(5, 17)?);

	// Enabling no symbol class at all is a configuration error
	let all_false = CharsetConfig {
		use_digits: false,
		use_lowercase: false,
		use_uppercase: false,
	};
	match generator.configure(all_false) {
		Ok(_) => println!("Should not happen"),
		Err(e) => println!("Empty selection rejected: {}", e),
	}

	// Invalid arguments are rejected on every call, naming the constraint
	match generator.generate(0, 5) {
		Ok(_) => println!("Should not happen"),
		Err(e) => println!("Rejected: {}", e),
	}
	match generator.generate(5, 3) {
		Ok(_) => println!("Should not happen"),
		Err(e) => println!("Rejected: {}", e),
	}

	// A seeded entropy source replays the exact same tokens,
	// useful for reproducible mock data
	let mut seeded = PrettyRandom::from_rng(CharsetConfig::default(), StdRng::seed_from_u64(42))?;
	println!("Seeded (42):     {}", seeded.generate(4, 22)?);

	Ok(())
}
