use std::num::NonZeroUsize;

use thiserror::Error;

use crate::bytecode::data::wrapping_adjust;

use super::settings::Overflow;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TapeError {
	#[error("data pointer {pointer} moved by {delta} leaves a tape of {capacity} cells")]
	OutOfBounds {
		pointer: usize,
		delta: isize,
		capacity: usize,
	},
}

/// Zeroed byte cells and the data pointer selecting one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
	cells: Box<[u8]>,
	pointer: usize,
	overflow: Overflow,
}

impl Tape {
	#[must_use]
	pub fn new(capacity: NonZeroUsize, overflow: Overflow) -> Self {
		Self {
			cells: vec![0; capacity.get()].into_boxed_slice(),
			pointer: 0,
			overflow,
		}
	}

	#[must_use]
	pub fn cells(&self) -> &[u8] {
		&self.cells
	}

	#[must_use]
	pub const fn pointer(&self) -> usize {
		self.pointer
	}

	#[must_use]
	pub fn get(&self) -> u8 {
		self.cells[self.pointer]
	}

	pub fn set(&mut self, value: u8) {
		self.cells[self.pointer] = value;
	}

	pub fn adjust(&mut self, delta: isize) {
		let cell = &mut self.cells[self.pointer];

		*cell = wrapping_adjust(*cell, delta);
	}

	/// # Errors
	///
	/// Returns `TapeError::OutOfBounds` if the pointer would leave the tape and the
	/// overflow policy is `Overflow::Fail`. The pointer is left unchanged.
	pub fn shift(&mut self, delta: isize) -> Result<(), TapeError> {
		let capacity = self.cells.len();

		self.pointer = match self.overflow {
			Overflow::Fail => self
				.pointer
				.checked_add_signed(delta)
				.filter(|&pointer| pointer < capacity)
				.ok_or(TapeError::OutOfBounds {
					pointer: self.pointer,
					delta,
					capacity,
				})?,
			Overflow::Wrap => {
				// Capacity is at most `isize::MAX` since it backs an allocation.
				let step = delta.rem_euclid(capacity as isize) as usize;

				(self.pointer + step) % capacity
			}
		};

		Ok(())
	}
}
