use std::{num::NonZeroUsize, str::FromStr};

use thiserror::Error;

/// What happens when the data pointer would leave the tape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
	/// Stop the run with an error.
	#[default]
	Fail,

	/// Wrap around to the other end of the tape.
	Wrap,
}

#[derive(Debug, Error)]
#[error("unknown overflow policy `{0}`, expected `fail` or `wrap`")]
pub struct UnknownOverflow(String);

impl FromStr for Overflow {
	type Err = UnknownOverflow;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"fail" => Ok(Self::Fail),
			"wrap" => Ok(Self::Wrap),
			_ => Err(UnknownOverflow(s.to_owned())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
	pub tape_size: NonZeroUsize,
	pub overflow: Overflow,
}

impl Settings {
	pub const DEFAULT_TAPE_SIZE: NonZeroUsize = match NonZeroUsize::new(30_000) {
		Some(size) => size,
		None => NonZeroUsize::MIN,
	};
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			tape_size: Self::DEFAULT_TAPE_SIZE,
			overflow: Overflow::default(),
		}
	}
}
