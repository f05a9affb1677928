/*!
# Benchmark: `argset::Suggestor`
*/

use brunch::{
	Bench,
	benches,
};
use argset::{
	Distance,
	Fallback,
	Suggestor,
};

/// # Vocabulary.
const NAMES: [&str; 12] = [
	"-h", "--help", "-V", "--version", "-v", "--verbose",
	"-q", "--quiet", "--threads", "--paths", "--output", "--dry-run",
];

/// # Suggestor.
fn suggestor() -> Suggestor { Suggestor::new(NAMES) }

benches!(
	Bench::new("argset::levenshtein(--verbsoe, --verbose)")
		.run(|| argset::levenshtein("--verbsoe", "--verbose")),

	Bench::new("argset::damerau_levenshtein(--verbsoe, --verbose)")
		.run(|| argset::damerau_levenshtein("--verbsoe", "--verbose")),

	Bench::spacer(),

	Bench::new("argset::Suggestor::new(x12)")
		.run(suggestor),

	Bench::spacer(),

	Bench::new("argset::Suggestor::suggest(--verbsoe)")
		.run_seeded_with(suggestor, |s| s.suggest("--verbsoe").is_some()),

	Bench::new("argset::Suggestor::suggest(--thrds)")
		.run_seeded_with(suggestor, |s| s.suggest("--thrds").is_some()),

	Bench::new("argset::Suggestor::suggest(--thrds) [Always]")
		.run_seeded_with(
			|| suggestor().with_fallback(Fallback::Always),
			|s| s.suggest("--thrds").is_some(),
		),

	Bench::new("argset::Suggestor::suggest(--thrds) [Damerau]")
		.run_seeded_with(
			|| suggestor().with_distance(Distance::DamerauLevenshtein),
			|s| s.suggest("--thrds").is_some(),
		),
);
