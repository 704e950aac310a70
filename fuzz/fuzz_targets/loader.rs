#![no_main]

use bytetape::Interpreter;
use bytetape_fuzz::noisy_source::NoisySource;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|source: NoisySource| {
	let _ = Interpreter::new(&source);
});
