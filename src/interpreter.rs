use std::io::{Read, Write};

use tracing::debug;

use crate::{
	bytecode::{compiler::Compiler, data::Program},
	error::Result,
	machine::{executor::Executor, settings::Settings, tape::Tape},
	syntax::{symbol::filter, validator::validate},
};

/// A loaded program together with the settings each run uses.
#[derive(Debug, Clone)]
pub struct Interpreter {
	program: Program,
	settings: Settings,
}

impl Interpreter {
	/// # Errors
	///
	/// Returns `Error::Malformed` if the loop brackets of `source` are unbalanced.
	pub fn new(source: &str) -> Result<Self> {
		Self::with_settings(source, Settings::default())
	}

	/// # Errors
	///
	/// Returns `Error::Malformed` if the loop brackets of `source` are unbalanced.
	pub fn with_settings(source: &str, settings: Settings) -> Result<Self> {
		let symbols = filter(source);

		debug!(characters = source.len(), symbols = symbols.len(), "filtered source");

		validate(&symbols)?;

		let program = Compiler::new().compile(&symbols);

		Ok(Self { program, settings })
	}

	#[must_use]
	pub const fn program(&self) -> &Program {
		&self.program
	}

	#[must_use]
	pub const fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Runs the program from a fresh tape and returns the tape once it halts.
	///
	/// # Errors
	///
	/// Returns `Error::Execute` if input runs out, the data pointer leaves the
	/// tape, or the output cannot be written.
	pub fn run<R, W>(&self, input: R, output: W) -> Result<Tape>
	where
		R: Read,
		W: Write,
	{
		let mut executor = Executor::new(&self.program, &self.settings, input, output);

		executor.run()?;

		Ok(executor.into_tape())
	}
}

#[cfg(test)]
mod tests {
	use std::io;

	use super::Interpreter;
	use crate::{error::Error, syntax::validator::BracketError};

	#[test]
	fn rejects_before_compiling() {
		let error = Interpreter::new("+[").expect_err("unbalanced");

		assert!(matches!(
			error,
			Error::Malformed(BracketError::TooLittleClosingBrackets { unclosed: 1 })
		));
	}

	#[test]
	fn runs_are_independent() {
		let interpreter = Interpreter::new("+++").expect("balanced");

		for _ in 0..2 {
			let tape = interpreter.run(io::empty(), io::sink()).expect("run succeeds");

			assert_eq!(tape.cells()[0], 3);
		}
	}
}
