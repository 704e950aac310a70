#![no_main]

use bytetape::{
	bytecode::{compiler::Compiler, data::Instruction},
	syntax::{filter, validate},
};
use bytetape_fuzz::structured_string::StructuredString;
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|source: StructuredString| -> Corpus {
	let symbols = filter(&source);

	if validate(&symbols).is_err() {
		return Corpus::Reject;
	}

	let program = Compiler::new().compile(&symbols);

	for (index, instruction) in program.iter().enumerate() {
		if let Instruction::Branch { target } = *instruction {
			assert_eq!(program.get(target), Some(&Instruction::Branch { target: index }));
		}
	}

	Corpus::Keep
});
