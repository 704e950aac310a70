use thiserror::Error;

use super::symbol::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
	#[error("unmatched `]` at symbol {position}")]
	TooManyClosingBrackets { position: usize },

	#[error("{unclosed} `[` left without a matching `]`")]
	TooLittleClosingBrackets { unclosed: usize },
}

/// Checks that loop brackets are balanced and properly nested.
///
/// # Errors
///
/// Returns `BracketError::TooManyClosingBrackets` as soon as a `]` has no open `[` to close.
/// Returns `BracketError::TooLittleClosingBrackets` if any `[` is still open at the end.
pub fn validate(symbols: &[Symbol]) -> Result<(), BracketError> {
	let mut depth = 0_usize;

	for (position, symbol) in symbols.iter().enumerate() {
		match symbol {
			Symbol::Open => depth += 1,
			Symbol::Close => {
				depth = depth
					.checked_sub(1)
					.ok_or(BracketError::TooManyClosingBrackets { position })?;
			}
			_ => {}
		}
	}

	if depth == 0 {
		Ok(())
	} else {
		Err(BracketError::TooLittleClosingBrackets { unclosed: depth })
	}
}
