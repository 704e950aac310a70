use std::{io, num::NonZeroUsize};

use bytetape::{
	bytecode::data::Instruction,
	machine::{
		executor::ExecuteError,
		settings::{Overflow, Settings},
		tape::TapeError,
	},
	syntax::BracketError,
	Error, Interpreter,
};
use proptest::prelude::*;
use rstest::rstest;

static HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

fn run(source: &str, input: &[u8]) -> (Result<Vec<u8>, Error>, Vec<u8>) {
	let mut output = Vec::new();
	let result = Interpreter::new(source)
		.and_then(|interpreter| interpreter.run(input, &mut output))
		.map(|tape| tape.cells().to_vec());

	(result, output)
}

#[test]
fn hello_world() {
	let mut input: &[u8] = b"untouched";
	let mut output = Vec::new();
	let interpreter = Interpreter::new(HELLO_WORLD).expect("balanced");

	interpreter.run(&mut input, &mut output).expect("run succeeds");

	assert_eq!(output, b"Hello World!\n");
	assert_eq!(input, b"untouched");
}

#[test]
fn reads_one_byte() {
	let (tape, output) = run(",", b"A");

	assert_eq!(tape.expect("run succeeds")[0], 65);
	assert!(output.is_empty());
}

#[test]
fn skips_loop_on_zero_cell() {
	let (tape, output) = run("[-]", b"");
	let tape = tape.expect("run succeeds");

	assert!(tape.iter().all(|&cell| cell == 0));
	assert!(output.is_empty());
}

#[test]
fn exhausted_input_halts_immediately() {
	let (result, output) = run(",+++.", b"");

	assert!(matches!(
		result,
		Err(Error::Execute(ExecuteError::InputExhausted { position: 0, .. }))
	));
	assert!(output.is_empty());
}

#[test]
fn exhausted_input_keeps_earlier_output() {
	let (result, output) = run("+++.,.", b"");

	assert!(matches!(
		result,
		Err(Error::Execute(ExecuteError::InputExhausted { position: 2, .. }))
	));
	assert_eq!(output, [3]);
}

#[test]
fn prose_runs_as_empty_program() {
	let interpreter = Interpreter::new("This text has no instructions at all").expect("balanced");
	let mut output = Vec::new();

	assert!(interpreter.program().is_empty());

	let tape = interpreter.run(io::empty(), &mut output).expect("run succeeds");

	assert_eq!(tape.pointer(), 0);
	assert!(tape.cells().iter().all(|&cell| cell == 0));
	assert!(output.is_empty());
}

#[rstest]
#[case("[", BracketError::TooLittleClosingBrackets { unclosed: 1 })]
#[case("+]", BracketError::TooManyClosingBrackets { position: 1 })]
#[case("comment ] then [", BracketError::TooManyClosingBrackets { position: 0 })]
fn malformed_programs_are_rejected(#[case] source: &str, #[case] expected: BracketError) {
	let error = Interpreter::new(source).expect_err("unbalanced");

	assert!(matches!(error, Error::Malformed(found) if found == expected));
}

#[test]
fn folded_program_matches_source() {
	let interpreter = Interpreter::new(">>>+++[<-]").expect("balanced");

	assert_eq!(
		interpreter.program().code(),
		[
			Instruction::Move { delta: 3 },
			Instruction::Adjust { delta: 3 },
			Instruction::Branch { target: 5 },
			Instruction::Move { delta: -1 },
			Instruction::Adjust { delta: -1 },
			Instruction::Branch { target: 2 },
		]
	);
}

#[test]
fn moving_left_of_origin_fails_by_default() {
	let (result, _) = run("<", b"");

	assert!(matches!(
		result,
		Err(Error::Execute(ExecuteError::TapeOverflow {
			position: 0,
			source: TapeError::OutOfBounds {
				pointer: 0,
				delta: -1,
				capacity: 30_000,
			},
		}))
	));
}

#[test]
fn wrapping_tape_reaches_last_cell() {
	let settings = Settings {
		tape_size: NonZeroUsize::new(10).expect("non-zero"),
		overflow: Overflow::Wrap,
	};
	let interpreter = Interpreter::with_settings("<<+++.", settings).expect("balanced");
	let mut output = Vec::new();

	let tape = interpreter.run(io::empty(), &mut output).expect("run succeeds");

	assert_eq!(tape.pointer(), 8);
	assert_eq!(tape.cells()[8], 3);
	assert_eq!(output, [3]);
}

#[test]
fn cat_copies_input() {
	let (result, output) = run("+[,.]", b"tape\0");

	result.expect("run succeeds");
	assert_eq!(output, b"tape\0");
}

proptest! {
	#[test]
	fn increments_wrap_on_output(count in 0_usize..=1000) {
		let source = format!("{}.", "+".repeat(count));
		let (result, output) = run(&source, b"");

		prop_assert!(result.is_ok());
		prop_assert_eq!(output, vec![(count % 256) as u8]);
	}

	#[test]
	fn decrements_wrap_on_output(count in 0_usize..=1000) {
		let source = format!("{}.", "-".repeat(count));
		let (result, output) = run(&source, b"");

		prop_assert!(result.is_ok());
		prop_assert_eq!(output, vec![((256 - count % 256) % 256) as u8]);
	}
}
