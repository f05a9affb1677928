/*!
# Argset: Suggestions.

This module contains [`Suggestor`], a small "did you mean" engine for
mistyped flags, along with the edit-distance functions it uses.

To keep lookups cheap for larger vocabularies, entries are bucketed by
[`LetterSet`], the set of letters they contain, and only the bucket
matching the input is scored by default. Different words can and do share
buckets; that is fine. What matters is that typos like transpositions and
doubled letters leave the signature intact. For typos that _don't_, the
[`Fallback`] policy decides whether to widen the search to everything.
*/

mod distance;
mod letters;

pub use distance::{
	damerau_levenshtein,
	levenshtein,
	Distance,
};
pub use letters::LetterSet;

use std::collections::BTreeMap;
use tracing::trace;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Fallback Policy.
///
/// What a [`Suggestor`] should do when the input's [`LetterSet`] bucket
/// doesn't turn anything up.
pub enum Fallback {
	/// # Bucket Only.
	///
	/// Only ever score the input's own bucket. Fastest, but misses typos that
	/// add or drop a letter.
	Never,

	#[default]
	/// # Widen When Empty.
	///
	/// Score the input's bucket, falling back to everything if nothing in it
	/// is within range.
	WhenEmpty,

	/// # Always Everything.
	///
	/// Skip the bucketing altogether and score everything.
	Always,
}



#[derive(Debug, Clone)]
/// # Suggestor.
///
/// Given a vocabulary of known names, a `Suggestor` finds the closest match
/// for some input, as measured by edit distance.
///
/// Out of the box, it uses [`levenshtein`] distance with the
/// [`Fallback::WhenEmpty`] policy and no distance cap; see the `with_*`
/// methods to change that.
///
/// Ties always go to whichever entry was added first.
///
/// ## Examples
///
/// ```
/// use argset::Suggestor;
///
/// let sug = Suggestor::new(["--verbose", "--version", "--help"]);
/// assert_eq!(sug.suggest("--verbos"), Some("--verbose"));
///
/// // Nothing shares these letters, so the whole list is checked.
/// assert_eq!(sug.suggest("--hlp"), Some("--help"));
/// ```
pub struct Suggestor {
	/// # Entries (in insertion order).
	corpus: Vec<String>,

	/// # Entry Indexes by Signature.
	buckets: BTreeMap<LetterSet, Vec<usize>>,

	/// # Distance Function.
	distance: fn(&str, &str) -> usize,

	/// # Fallback Policy.
	fallback: Fallback,

	/// # Maximum Distance.
	max_distance: Option<usize>,
}

impl Default for Suggestor {
	fn default() -> Self {
		Self {
			corpus: Vec::new(),
			buckets: BTreeMap::new(),
			distance: levenshtein,
			fallback: Fallback::WhenEmpty,
			max_distance: None,
		}
	}
}

impl<S: Into<String>> Extend<S> for Suggestor {
	fn extend<I: IntoIterator<Item=S>>(&mut self, iter: I) {
		for s in iter { self.insert(s); }
	}
}

impl<S: Into<String>> FromIterator<S> for Suggestor {
	fn from_iter<I: IntoIterator<Item=S>>(iter: I) -> Self {
		let mut out = Self::default();
		out.extend(iter);
		out
	}
}

impl Suggestor {
	#[must_use]
	/// # New.
	///
	/// Create a new instance from a list of known names. Duplicates are
	/// ignored.
	pub fn new<I, S>(names: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		names.into_iter().collect()
	}

	/// # Insert.
	///
	/// Add a name to the vocabulary, returning `false` if it was already
	/// present.
	pub fn insert<S: Into<String>>(&mut self, name: S) -> bool {
		let name: String = name.into();
		let bucket = self.buckets.entry(LetterSet::from(name.as_str())).or_default();

		// Identical strings always share a bucket, so that's the only place
		// we need to look for duplicates.
		if bucket.iter().any(|&idx| self.corpus[idx] == name) { false }
		else {
			bucket.push(self.corpus.len());
			self.corpus.push(name);
			true
		}
	}
}

impl Suggestor {
	#[must_use]
	/// # With Distance.
	///
	/// Use one of the built-in distance algorithms.
	pub const fn with_distance(mut self, distance: Distance) -> Self {
		self.distance = distance.as_fn();
		self
	}

	#[must_use]
	/// # With Distance Function.
	///
	/// Use a custom distance function. It should return zero for equal
	/// strings and grow with dissimilarity.
	///
	/// ## Examples
	///
	/// ```
	/// use argset::{Fallback, Suggestor};
	///
	/// /// # Length Difference.
	/// fn len_diff(a: &str, b: &str) -> usize { a.len().abs_diff(b.len()) }
	///
	/// let sug = Suggestor::new(["-a", "--bbb"])
	///     .with_distance_fn(len_diff)
	///     .with_fallback(Fallback::Always);
	/// assert_eq!(sug.suggest("--xx"), Some("--bbb"));
	/// ```
	pub const fn with_distance_fn(mut self, distance: fn(&str, &str) -> usize)
	-> Self {
		self.distance = distance;
		self
	}

	#[must_use]
	/// # With Fallback Policy.
	pub const fn with_fallback(mut self, fallback: Fallback) -> Self {
		self.fallback = fallback;
		self
	}

	#[must_use]
	/// # With Maximum Distance.
	///
	/// Ignore any candidates farther than `max` from the input. Without a
	/// cap, _something_ will always be suggested (unless the vocabulary is
	/// empty), no matter how far-fetched.
	pub const fn with_max_distance(mut self, max: usize) -> Self {
		self.max_distance = Some(max);
		self
	}
}

impl Suggestor {
	#[must_use]
	#[inline]
	/// # Length.
	pub fn len(&self) -> usize { self.corpus.len() }

	#[must_use]
	#[inline]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.corpus.is_empty() }

	/// # Iterate.
	///
	/// Iterate over the vocabulary in insertion order.
	pub fn iter(&self) -> impl Iterator<Item=&str> {
		self.corpus.iter().map(String::as_str)
	}

	#[must_use]
	/// # Buckets.
	///
	/// Return the number of distinct [`LetterSet`] buckets in use.
	pub fn buckets(&self) -> usize { self.buckets.len() }

	#[must_use]
	/// # Suggest.
	///
	/// Return the closest match for `input`, if any. Exact matches count,
	/// with a distance of zero.
	pub fn suggest(&self, input: &str) -> Option<&str> {
		let (_, idx) = self.rank(input)?;
		idx.first().map(|&idx| self.corpus[idx].as_str())
	}

	#[must_use]
	/// # Suggestions.
	///
	/// Return all of the entries tied for closest to `input`, in insertion
	/// order.
	///
	/// ## Examples
	///
	/// ```
	/// let sug = argset::Suggestor::new(["--cat", "--bat", "--category"]);
	/// assert_eq!(sug.suggestions("--rat"), ["--cat", "--bat"]);
	/// ```
	pub fn suggestions(&self, input: &str) -> Vec<&str> {
		self.rank(input)
			.map(|(_, idx)| idx.into_iter().map(|i| self.corpus[i].as_str()).collect())
			.unwrap_or_default()
	}

	/// # Rank.
	///
	/// Score the candidates and return the best distance along with the
	/// indexes of every entry that achieved it.
	fn rank(&self, input: &str) -> Option<(usize, Vec<usize>)> {
		let key = LetterSet::from(input);
		let bucket = self.buckets.get(&key).map_or(&[][..], Vec::as_slice);
		trace!(input, %key, bucket = bucket.len(), fallback = ?self.fallback, "ranking suggestions");

		match self.fallback {
			Fallback::Never => self.rank_from(input, bucket.iter().copied()),
			Fallback::WhenEmpty => self.rank_from(input, bucket.iter().copied())
				.or_else(|| {
					trace!(input, "widening suggestion search");
					self.rank_from(input, 0..self.corpus.len())
				}),
			Fallback::Always => self.rank_from(input, 0..self.corpus.len()),
		}
	}

	/// # Rank From.
	///
	/// Candidates must be in ascending order for ties to favor the oldest.
	fn rank_from<I>(&self, input: &str, candidates: I) -> Option<(usize, Vec<usize>)>
	where I: Iterator<Item=usize> {
		let mut best: Option<(usize, Vec<usize>)> = None;
		for idx in candidates {
			let d = (self.distance)(input, &self.corpus[idx]);
			if self.max_distance.is_some_and(|max| max < d) { continue; }

			match best.as_mut() {
				Some((min, list)) if d == *min => {
					list.push(idx);
					continue;
				},
				Some((min, _)) if *min < d => continue,
				_ => {},
			}

			best = Some((d, vec![idx]));
		}

		best
	}
}
