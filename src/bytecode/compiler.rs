use tracing::debug;

use crate::syntax::symbol::Symbol;

use super::data::{Instruction, Program};

/// Turns validated symbols into a [`Program`].
///
/// Brackets must already be balanced, see [`crate::syntax::validator::validate`].
#[derive(Default)]
pub struct Compiler {
	code: Vec<Instruction>,
	opened: Vec<usize>,
}

impl Compiler {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	fn reset(&mut self, len: usize) {
		self.code.clear();
		self.code.reserve(len);
		self.opened.clear();
	}

	fn add_run<F>(&mut self, symbols: &[Symbol], index: usize, fold: F) -> usize
	where
		F: FnOnce(isize) -> Instruction,
	{
		let symbol = symbols[index];
		let len = symbols[index..]
			.iter()
			.take_while(|&&next| next == symbol)
			.count();

		// Slice lengths never exceed `isize::MAX`.
		self.code.push(fold(len as isize));

		index + len
	}

	fn add_single(&mut self, index: usize, instruction: Instruction) -> usize {
		self.code.push(instruction);

		index + 1
	}

	fn add_open(&mut self, index: usize) -> usize {
		let position = self.code.len();

		self.opened.push(position);

		// Points at itself until the matching `]` shows up.
		self.add_single(index, Instruction::Branch { target: position })
	}

	fn add_close(&mut self, index: usize) -> usize {
		// Balance is checked beforehand, so a lone `]` is ignored.
		let Some(open) = self.opened.pop() else {
			return index + 1;
		};

		self.code[open] = Instruction::Branch {
			target: self.code.len(),
		};

		self.add_single(index, Instruction::Branch { target: open })
	}

	#[must_use]
	pub fn compile(&mut self, symbols: &[Symbol]) -> Program {
		self.reset(symbols.len());

		let mut index = 0;

		while let Some(&symbol) = symbols.get(index) {
			index = match symbol {
				Symbol::Right => self.add_run(symbols, index, |len| Instruction::Move { delta: len }),
				Symbol::Left => self.add_run(symbols, index, |len| Instruction::Move { delta: -len }),
				Symbol::Increment => {
					self.add_run(symbols, index, |len| Instruction::Adjust { delta: len })
				}
				Symbol::Decrement => {
					self.add_run(symbols, index, |len| Instruction::Adjust { delta: -len })
				}
				Symbol::Output => self.add_single(index, Instruction::Output),
				Symbol::Input => self.add_single(index, Instruction::Input),
				Symbol::Open => self.add_open(index),
				Symbol::Close => self.add_close(index),
			};
		}

		debug!(
			symbols = symbols.len(),
			instructions = self.code.len(),
			"compiled program"
		);

		let code = std::mem::take(&mut self.code);

		Program::new(code.into_boxed_slice())
	}
}
