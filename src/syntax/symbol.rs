/// A member of the instruction alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
	Right,
	Left,
	Increment,
	Decrement,
	Output,
	Input,
	Open,
	Close,
}

impl Symbol {
	pub const ALL: [Self; 8] = [
		Self::Right,
		Self::Left,
		Self::Increment,
		Self::Decrement,
		Self::Output,
		Self::Input,
		Self::Open,
		Self::Close,
	];

	#[must_use]
	pub const fn from_char(c: char) -> Option<Self> {
		let symbol = match c {
			'>' => Self::Right,
			'<' => Self::Left,
			'+' => Self::Increment,
			'-' => Self::Decrement,
			'.' => Self::Output,
			',' => Self::Input,
			'[' => Self::Open,
			']' => Self::Close,
			_ => return None,
		};

		Some(symbol)
	}

	#[must_use]
	pub const fn as_char(self) -> char {
		match self {
			Self::Right => '>',
			Self::Left => '<',
			Self::Increment => '+',
			Self::Decrement => '-',
			Self::Output => '.',
			Self::Input => ',',
			Self::Open => '[',
			Self::Close => ']',
		}
	}
}

impl From<Symbol> for char {
	fn from(value: Symbol) -> Self {
		value.as_char()
	}
}

/// Keeps the alphabet characters of `source` in their original order and
/// drops everything else, comments and whitespace included.
#[must_use]
pub fn filter(source: &str) -> Vec<Symbol> {
	source.chars().filter_map(Symbol::from_char).collect()
}
