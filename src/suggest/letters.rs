/*!
# Argset: Letter Sets.
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Letter Set.
///
/// A 27-bit signature recording which of the letters `a..=z` appear in a
/// string (case-insensitively, irrespective of position or count) plus
/// one catch-all bit for anything else (dashes, digits, non-ASCII, etc.).
///
/// This is a pruning key for [`Suggestor`](crate::Suggestor), not an exact
/// filter: anagrams, repeats, and words differing only in punctuation all
/// share a signature.
///
/// ## Examples
///
/// ```
/// use argset::LetterSet;
///
/// // Order and count don't matter.
/// assert_eq!(LetterSet::from("--verbose"), LetterSet::from("--verbos"));
/// assert_eq!(LetterSet::from("stop"), LetterSet::from("POTS"));
///
/// // But the letters themselves do.
/// assert_ne!(LetterSet::from("--verbose"), LetterSet::from("--version"));
/// ```
pub struct LetterSet(u32);

impl From<&str> for LetterSet {
	fn from(src: &str) -> Self {
		Self(src.chars().fold(0, |acc, c| acc | Self::bit(c)))
	}
}

impl fmt::Display for LetterSet {
	/// # Display.
	///
	/// Print the letters present, followed by `*` if the catch-all bit is
	/// set.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, c) in ('a'..='z').enumerate() {
			if 0 != self.0 & (1 << i) { write!(f, "{c}")?; }
		}
		if self.has_other() { f.write_str("*")?; }
		Ok(())
	}
}

impl LetterSet {
	/// # Catch-All Bit.
	const OTHER: u32 = 1 << 26;

	#[must_use]
	/// # Bit.
	///
	/// Return the signature bit for a single character.
	const fn bit(c: char) -> u32 {
		match c {
			'a'..='z' => 1 << (c as u32 - 'a' as u32),
			'A'..='Z' => 1 << (c as u32 - 'A' as u32),
			_ => Self::OTHER,
		}
	}

	#[must_use]
	#[inline]
	/// # Raw Bits.
	pub const fn bits(self) -> u32 { self.0 }

	#[must_use]
	#[inline]
	/// # Is Empty?
	///
	/// Only the empty string has an empty signature.
	pub const fn is_empty(self) -> bool { 0 == self.0 }

	#[must_use]
	#[inline]
	/// # Letter Count.
	///
	/// Return the number of distinct letters present, not counting the
	/// catch-all.
	pub const fn letters(self) -> u32 { (self.0 & ! Self::OTHER).count_ones() }

	#[must_use]
	#[inline]
	/// # Has Other?
	///
	/// Returns `true` if the string contained anything besides ASCII letters.
	pub const fn has_other(self) -> bool { 0 != self.0 & Self::OTHER }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_bit() {
		// Each letter gets its own bit, shared between cases.
		let mut seen = 0_u32;
		for (lower, upper) in ('a'..='z').zip('A'..='Z') {
			let bit = LetterSet::bit(lower);
			assert_eq!(bit, LetterSet::bit(upper), "Case mismatch for {lower}.");
			assert_eq!(bit.count_ones(), 1);
			assert_eq!(seen & bit, 0, "Bit collision for {lower}.");
			seen |= bit;
		}
		assert_eq!(seen.count_ones(), 26);

		// Everything else lands in the catch-all.
		for c in ['-', '_', '0', '9', ' ', 'ö', 'ß', '\0'] {
			assert_eq!(LetterSet::bit(c), LetterSet::OTHER, "Bad bit for {c:?}.");
		}
	}

	#[test]
	fn t_letter_set() {
		let empty = LetterSet::from("");
		assert!(empty.is_empty());
		assert_eq!(empty, LetterSet::default());
		assert_eq!(empty.to_string(), "");

		let set = LetterSet::from("--Verbose");
		assert!(! set.is_empty());
		assert!(set.has_other());
		assert_eq!(set.letters(), 6);
		assert_eq!(set.to_string(), "beorsv*");

		// No punctuation, no catch-all.
		let set = LetterSet::from("abba");
		assert!(! set.has_other());
		assert_eq!(set.letters(), 2);
		assert_eq!(set.bits(), 0b11);

		// Dashes vs digits are indistinguishable.
		assert_eq!(LetterSet::from("-x"), LetterSet::from("x9"));
	}
}
