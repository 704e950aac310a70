use std::ops::Deref;

use arbitrary::{Arbitrary, Result, Unstructured};
use bytetape::syntax::Symbol;

/// Alphabet symbols mixed with arbitrary comment text, brackets unchecked.
#[derive(Debug)]
pub struct NoisySource {
	content: String,
}

impl Arbitrary<'_> for NoisySource {
	fn arbitrary(u: &mut Unstructured) -> Result<Self> {
		let len = u.arbitrary_len::<char>()?;
		let mut content = String::with_capacity(len);

		for _ in 0..len {
			if u.ratio(3, 4)? {
				let symbol = u.choose(&Symbol::ALL)?;

				content.push(symbol.as_char());
			} else {
				content.push(char::arbitrary(u)?);
			}
		}

		Ok(Self { content })
	}
}

impl Deref for NoisySource {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.content
	}
}
