use std::ops::Deref;

use arbitrary::{Arbitrary, Result, Unstructured};
use bytetape::syntax::Symbol;

static BODY: [Symbol; 6] = [
	Symbol::Right,
	Symbol::Left,
	Symbol::Increment,
	Symbol::Decrement,
	Symbol::Output,
	Symbol::Input,
];

#[derive(Default)]
struct Builder {
	content: String,
	remaining: usize,
	open: usize,
}

impl Builder {
	fn add_open(&mut self) {
		self.remaining -= 1;
		self.open += 1;
		self.content.push(Symbol::Open.as_char());
	}

	fn add_close(&mut self) {
		self.open -= 1;
		self.content.push(Symbol::Close.as_char());
	}

	fn add_segment(&mut self, u: &mut Unstructured) -> Result<()> {
		let len = u.arbitrary_len::<u8>()?;

		self.content.reserve(len);

		for _ in 0..len {
			let symbol = u.choose(&BODY)?;

			self.content.push(symbol.as_char());
		}

		Ok(())
	}

	fn close_all(&mut self) {
		while self.open != 0 {
			self.add_close();
		}
	}
}

/// Source text whose brackets always balance.
#[derive(Debug)]
pub struct StructuredString {
	content: String,
}

impl Arbitrary<'_> for StructuredString {
	fn arbitrary(u: &mut Unstructured) -> Result<Self> {
		let mut builder = Builder {
			remaining: u.arbitrary_len::<[u8; 2]>()?,
			..Builder::default()
		};

		while !u.is_empty() {
			builder.add_segment(u)?;

			match (builder.remaining, builder.open) {
				(0, 0) => break,
				(0, _) => builder.add_close(),
				(_, 0) => builder.add_open(),
				(_, _) => {
					if u.arbitrary()? {
						builder.add_close();
					} else {
						builder.add_open();
					}
				}
			}
		}

		builder.close_all();

		Ok(Self {
			content: builder.content,
		})
	}
}

impl Deref for StructuredString {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.content
	}
}
