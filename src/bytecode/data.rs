use std::ops::Deref;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
	/// Add `delta` to the data pointer.
	Move { delta: isize },

	/// Add `delta` to the current cell, modulo 256.
	Adjust { delta: isize },

	/// Write the current cell as one byte.
	Output,

	/// Read one byte into the current cell.
	Input,

	/// Jump to `target` when it lies ahead and the cell is zero, or when it
	/// lies behind and the cell is not zero.
	Branch { target: usize },
}

/// Compiled instructions, addressed by their position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
	code: Box<[Instruction]>,
}

impl Program {
	#[must_use]
	pub const fn new(code: Box<[Instruction]>) -> Self {
		Self { code }
	}

	#[must_use]
	pub fn code(&self) -> &[Instruction] {
		&self.code
	}
}

impl Deref for Program {
	type Target = [Instruction];

	fn deref(&self) -> &Self::Target {
		&self.code
	}
}

/// Adds a signed `delta` to `cell` with 8-bit wraparound.
#[must_use]
pub fn wrapping_adjust(cell: u8, delta: isize) -> u8 {
	// `rem_euclid` is never negative and always below 256.
	let delta = delta.rem_euclid(256) as u8;

	cell.wrapping_add(delta)
}
