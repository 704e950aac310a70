use thiserror::Error;

use crate::{machine::executor::ExecuteError, syntax::validator::BracketError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("malformed program")]
	Malformed(#[from] BracketError),

	#[error(transparent)]
	Execute(#[from] ExecuteError),
}
