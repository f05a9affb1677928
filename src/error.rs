/*!
# Argset: Errors.
*/

use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Error!
///
/// Registration and bounds problems. Tokens that simply don't match anything
/// are _not_ errors; see [`FlagSet::unmatched`](crate::FlagSet::unmatched).
pub enum FlagError {
	#[error("Duplicate key: {0}")]
	/// # Duplicate Key.
	///
	/// The name is already registered with the set, either as a flag or as
	/// an alias.
	DuplicateKey(String),

	#[error("Foreign key: {0}")]
	/// # Foreign Flag.
	///
	/// An alias was pointed at a flag belonging to some other set.
	ForeignFlag(String),

	#[error("Invalid key: {0:?}")]
	/// # Invalid Key.
	///
	/// Keys cannot be empty or contain whitespace.
	InvalidKey(String),

	#[error("Index {idx} is out of range for {len} argument(s).")]
	/// # Out of Range.
	OutOfRange {
		/// # Requested Index.
		idx: usize,

		/// # Total Length.
		len: usize,
	},

	#[error("The flag set has already been parsed.")]
	/// # Already Parsed.
	///
	/// A [`FlagSet`](crate::FlagSet) can only be parsed once, and cannot
	/// accept new registrations afterwards.
	Parsed,
}

impl FlagError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a static description of the error kind, minus the specifics.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::DuplicateKey(_) => "Duplicate key.",
			Self::ForeignFlag(_) => "Foreign key.",
			Self::InvalidKey(_) => "Invalid key.",
			Self::OutOfRange { .. } => "Index out of range.",
			Self::Parsed => "Already parsed.",
		}
	}
}
