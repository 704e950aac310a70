pub mod syntax {
	pub mod symbol;
	pub mod validator;

	pub use symbol::{filter, Symbol};
	pub use validator::{validate, BracketError};
}

pub mod bytecode {
	pub mod compiler;
	pub mod data;
}

pub mod machine {
	pub mod executor;
	pub mod settings;
	pub mod tape;
}

pub mod error;
pub mod interpreter;

pub use error::{Error, Result};
pub use interpreter::Interpreter;
