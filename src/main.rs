use std::{
	fs::File,
	io::{BufWriter, Write},
	num::NonZeroUsize,
	process::ExitCode,
};

use anyhow::{Context, Result};
use argh::FromArgs;
use bytetape::{
	machine::settings::{Overflow, Settings},
	Interpreter,
};
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;

/// A byte tape language interpreter with a run-length folding bytecode
/// compiler. Program input is read from stdin.
#[derive(FromArgs)]
struct Arguments {
	/// the source file to run
	#[argh(positional)]
	program: String,

	/// the output file to write to
	/// if not specified, stdout is used
	#[argh(option, short = 'o')]
	output: Option<String>,

	/// the number of cells on the tape, 30000 if not specified
	#[argh(option, default = "Settings::DEFAULT_TAPE_SIZE")]
	tape_size: NonZeroUsize,

	/// what happens when the data pointer leaves the tape,
	/// either `fail` (default) or `wrap`
	#[argh(option, default = "Overflow::Fail")]
	overflow: Overflow,
}

fn load_output(name: Option<&str>) -> Result<Box<dyn Write>> {
	let output: Box<dyn Write> = if let Some(name) = name {
		let file =
			File::create(name).with_context(|| format!("failed to open output file `{name}`"))?;

		Box::new(BufWriter::new(file))
	} else {
		Box::new(BufWriter::new(std::io::stdout().lock()))
	};

	Ok(output)
}

fn run(arguments: &Arguments) -> Result<()> {
	let name = arguments.program.as_str();
	let source =
		std::fs::read_to_string(name).with_context(|| format!("failed to read `{name}`"))?;

	let settings = Settings {
		tape_size: arguments.tape_size,
		overflow: arguments.overflow,
	};

	let interpreter = Interpreter::with_settings(&source, settings)
		.with_context(|| format!("failed to load `{name}`"))?;

	let output = load_output(arguments.output.as_deref())?;
	let input = std::io::stdin().lock();

	interpreter
		.run(input, output)
		.with_context(|| format!("failed to run `{name}`"))?;

	Ok(())
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.init();

	let arguments = argh::from_env::<Arguments>();

	match run(&arguments) {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			debug!(program = %arguments.program, "run stopped early");
			eprintln!("error: {error:#}");

			ExitCode::FAILURE
		}
	}
}
