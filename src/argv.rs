/*!
# Argset: Argument Vector.

This module contains [`ArgVec`], an immutable, indexable snapshot of the
arguments passed to the program.
*/

use crate::{
	Args,
	FlagError,
};
use std::{
	ffi::OsString,
	ops::Index,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Argument Vector.
///
/// This holds the raw argument tokens, in order, with the program name
/// (or whatever the OS passed in its place) at index zero.
///
/// Once built, an `ArgVec` cannot be changed. Parsing only ever borrows it.
///
/// ## Examples
///
/// ```
/// use argset::ArgVec;
///
/// let args: ArgVec = ["app", "--verbose", "file.txt"].into_iter().collect();
/// assert_eq!(args.program(), Some("app"));
/// assert_eq!(args.len(), 3);
/// assert_eq!(args.get(1), Ok("--verbose"));
/// assert!(args.get(3).is_err());
/// ```
pub struct ArgVec(Box<[String]>);

impl<S: Into<String>> FromIterator<S> for ArgVec {
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self {
		Self(src.into_iter().map(Into::into).collect())
	}
}

impl From<Vec<String>> for ArgVec {
	#[inline]
	fn from(src: Vec<String>) -> Self { Self(src.into_boxed_slice()) }
}

impl Index<usize> for ArgVec {
	type Output = str;

	#[inline]
	/// # Index.
	///
	/// ## Panics
	///
	/// This will panic if `idx` is out of range. Use [`ArgVec::get`] for a
	/// checked alternative.
	fn index(&self, idx: usize) -> &Self::Output { self.0[idx].as_str() }
}

impl<'a> IntoIterator for &'a ArgVec {
	type Item = &'a str;
	type IntoIter = Args<'a>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl ArgVec {
	#[must_use]
	/// # From Env.
	///
	/// Snapshot [`std::env::args_os`]. Invalid UTF-8 is converted lossily
	/// rather than panicking.
	pub fn from_env() -> Self {
		std::env::args_os().map(os_to_string).collect()
	}
}

impl ArgVec {
	#[must_use]
	#[inline]
	/// # Length.
	///
	/// Return the total number of tokens, including the program name.
	pub fn len(&self) -> usize { self.0.len() }

	#[must_use]
	#[inline]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// # Get Token.
	///
	/// Return the token at `idx`.
	///
	/// ## Errors
	///
	/// If `idx` is out of range, [`FlagError::OutOfRange`] is returned.
	pub fn get(&self, idx: usize) -> Result<&str, FlagError> {
		self.0.get(idx)
			.map(String::as_str)
			.ok_or(FlagError::OutOfRange { idx, len: self.len() })
	}

	#[must_use]
	/// # Program Name.
	///
	/// Return the first token, if any. This is usually the program path,
	/// though the OS makes no promises.
	pub fn program(&self) -> Option<&str> { self.0.first().map(String::as_str) }

	/// # Slice.
	///
	/// Return the tokens in `start..end`.
	///
	/// ## Errors
	///
	/// If the range is backwards or extends past the end,
	/// [`FlagError::OutOfRange`] is returned.
	pub fn slice(&self, start: usize, end: usize) -> Result<&[String], FlagError> {
		let len = self.len();
		if end > len { Err(FlagError::OutOfRange { idx: end, len }) }
		else if start > end { Err(FlagError::OutOfRange { idx: start, len }) }
		else { Ok(&self.0[start..end]) }
	}

	#[must_use]
	#[inline]
	/// # As Slice.
	///
	/// Return all tokens, program name included.
	pub fn as_slice(&self) -> &[String] { &self.0 }

	#[must_use]
	#[inline]
	/// # Iterate All.
	///
	/// Iterate over every token, program name included.
	pub fn iter(&self) -> Args<'_> { Args::new(&self.0) }

	#[must_use]
	/// # Iterate Arguments.
	///
	/// Iterate over the tokens following the program name.
	pub fn args(&self) -> Args<'_> {
		Args::new(self.0.get(1..).unwrap_or_default())
	}
}



/// # Lossy `OsString` to `String`.
fn os_to_string(src: OsString) -> String {
	src.into_string().unwrap_or_else(|e| e.to_string_lossy().into_owned())
}
