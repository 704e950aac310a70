use std::io::{Read, Write};

use thiserror::Error;
use tracing::debug;

use crate::bytecode::data::{Instruction, Program};

use super::{
	settings::Settings,
	tape::{Tape, TapeError},
};

#[derive(Debug, Error)]
pub enum ExecuteError {
	#[error("input exhausted at instruction {position}")]
	InputExhausted {
		position: usize,
		#[source]
		source: std::io::Error,
	},

	#[error("tape overflow at instruction {position}")]
	TapeOverflow {
		position: usize,
		#[source]
		source: TapeError,
	},

	#[error("failed to write output")]
	Output(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
	Running,
	Halted,
}

/// Runs one [`Program`] against its own tape and a pair of byte streams.
pub struct Executor<'a, R, W> {
	program: &'a Program,
	tape: Tape,
	counter: usize,
	steps: u64,

	input: R,
	output: W,
}

impl<'a, R, W> Executor<'a, R, W>
where
	R: Read,
	W: Write,
{
	#[must_use]
	pub fn new(program: &'a Program, settings: &Settings, input: R, output: W) -> Self {
		Self {
			program,
			tape: Tape::new(settings.tape_size, settings.overflow),
			counter: 0,
			steps: 0,
			input,
			output,
		}
	}

	#[must_use]
	pub const fn tape(&self) -> &Tape {
		&self.tape
	}

	#[must_use]
	pub const fn counter(&self) -> usize {
		self.counter
	}

	#[must_use]
	pub fn state(&self) -> State {
		if self.counter < self.program.len() {
			State::Running
		} else {
			State::Halted
		}
	}

	#[must_use]
	pub fn into_tape(self) -> Tape {
		self.tape
	}

	fn read_input(&mut self) -> Result<(), ExecuteError> {
		let position = self.counter;
		let mut buffer = [0];

		// Anything printed so far may be a prompt for this read.
		self.output.flush().map_err(ExecuteError::Output)?;

		self.input
			.read_exact(&mut buffer)
			.map_err(|source| ExecuteError::InputExhausted { position, source })?;

		self.tape.set(buffer[0]);

		Ok(())
	}

	fn write_output(&mut self) -> Result<(), ExecuteError> {
		let value = self.tape.get();

		self.output.write_all(&[value]).map_err(ExecuteError::Output)
	}

	fn take_branch(&self, target: usize) -> bool {
		let value = self.tape.get();

		(target > self.counter && value == 0) || (target < self.counter && value != 0)
	}

	fn step(&mut self, instruction: Instruction) -> Result<(), ExecuteError> {
		match instruction {
			Instruction::Move { delta } => {
				let position = self.counter;

				self.tape
					.shift(delta)
					.map_err(|source| ExecuteError::TapeOverflow { position, source })?;
			}
			Instruction::Adjust { delta } => self.tape.adjust(delta),
			Instruction::Output => self.write_output()?,
			Instruction::Input => self.read_input()?,
			Instruction::Branch { target } => {
				if self.take_branch(target) {
					self.counter = target;
				}
			}
		}

		// A taken branch lands on its partner and steps past it.
		self.counter += 1;
		self.steps += 1;

		Ok(())
	}

	/// Executes until the program counter passes the last instruction.
	///
	/// # Errors
	///
	/// Returns `ExecuteError::InputExhausted` if an input instruction cannot read a byte.
	/// Returns `ExecuteError::TapeOverflow` if the data pointer leaves the tape.
	/// Returns `ExecuteError::Output` if the output stream fails.
	pub fn run(&mut self) -> Result<(), ExecuteError> {
		while self.state() == State::Running {
			let instruction = self.program[self.counter];

			self.step(instruction)?;
		}

		self.output.flush().map_err(ExecuteError::Output)?;

		debug!(
			steps = self.steps,
			pointer = self.tape.pointer(),
			"program halted"
		);

		Ok(())
	}
}
