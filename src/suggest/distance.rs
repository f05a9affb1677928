/*!
# Argset: Edit Distances.

Both functions work on `char`s rather than bytes, so multi-byte characters
count as one edit, not several.
*/



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Distance Algorithm.
///
/// The built-in distance functions available to a
/// [`Suggestor`](crate::Suggestor). Arbitrary functions can be used instead
/// via [`Suggestor::with_distance_fn`](crate::Suggestor::with_distance_fn).
pub enum Distance {
	#[default]
	/// # Levenshtein.
	///
	/// See [`levenshtein`].
	Levenshtein,

	/// # Damerau–Levenshtein.
	///
	/// See [`damerau_levenshtein`].
	DamerauLevenshtein,
}

impl Distance {
	#[must_use]
	/// # As Function.
	pub const fn as_fn(self) -> fn(&str, &str) -> usize {
		match self {
			Self::Levenshtein => levenshtein,
			Self::DamerauLevenshtein => damerau_levenshtein,
		}
	}
}



#[must_use]
/// # Levenshtein Distance.
///
/// Return the minimum number of single-character insertions, deletions,
/// and substitutions needed to turn `lhs` into `rhs`.
///
/// ## Examples
///
/// ```
/// assert_eq!(argset::levenshtein("kitten", "sitting"), 3);
/// assert_eq!(argset::levenshtein("", "abc"), 3);
/// assert_eq!(argset::levenshtein("same", "same"), 0);
/// ```
pub fn levenshtein(lhs: &str, rhs: &str) -> usize {
	let rhs: Vec<char> = rhs.chars().collect();

	// The previous row starts as the distance from "" to each prefix of rhs.
	let mut prev: Vec<usize> = (0..=rhs.len()).collect();
	let mut cur: Vec<usize> = vec![0; rhs.len() + 1];

	for (i, a) in lhs.chars().enumerate() {
		cur[0] = i + 1;
		for (j, b) in rhs.iter().enumerate() {
			let cost = usize::from(a != *b);
			cur[j + 1] = (prev[j + 1] + 1)  // Deletion.
				.min(cur[j] + 1)             // Insertion.
				.min(prev[j] + cost);        // Substitution.
		}
		std::mem::swap(&mut prev, &mut cur);
	}

	prev[rhs.len()]
}

#[must_use]
/// # Damerau–Levenshtein Distance.
///
/// This is [`levenshtein`] plus one more operation: swapping two adjacent
/// characters also costs one. (This is the "optimal string alignment"
/// variant; a given substring is never edited more than once.)
///
/// ## Examples
///
/// ```
/// // A transposition is one edit here…
/// assert_eq!(argset::damerau_levenshtein("--verbsoe", "--verbose"), 1);
///
/// // …but two for plain Levenshtein.
/// assert_eq!(argset::levenshtein("--verbsoe", "--verbose"), 2);
/// ```
pub fn damerau_levenshtein(lhs: &str, rhs: &str) -> usize {
	let lhs: Vec<char> = lhs.chars().collect();
	let rhs: Vec<char> = rhs.chars().collect();

	// Three rolling rows: i-2, i-1, and i.
	let mut prev2: Vec<usize> = vec![0; rhs.len() + 1];
	let mut prev: Vec<usize> = (0..=rhs.len()).collect();
	let mut cur: Vec<usize> = vec![0; rhs.len() + 1];

	for i in 1..=lhs.len() {
		cur[0] = i;
		for j in 1..=rhs.len() {
			let cost = usize::from(lhs[i - 1] != rhs[j - 1]);
			let mut d = (prev[j] + 1)
				.min(cur[j - 1] + 1)
				.min(prev[j - 1] + cost);

			// Adjacent transposition.
			if 1 < i && 1 < j && lhs[i - 1] == rhs[j - 2] && lhs[i - 2] == rhs[j - 1] {
				d = d.min(prev2[j - 2] + 1);
			}

			cur[j] = d;
		}

		// Rotate: prev2 <- prev <- cur.
		std::mem::swap(&mut prev2, &mut prev);
		std::mem::swap(&mut prev, &mut cur);
	}

	prev[rhs.len()]
}
