/*!
# Argset: Parsing.
*/

use crate::{
	ArgVec,
	FlagError,
};
use super::{
	FlagKind,
	FlagSet,
	FlagState,
	Value,
};
use tracing::{
	debug,
	trace,
};



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Parse Report.
///
/// A tally of how each token was classified during a [`FlagSet::parse`]
/// pass. Every token after the program name lands in exactly one bucket, so
/// [`ParseReport::total`] always equals the number of arguments.
pub struct ParseReport {
	/// # Flag Triggers.
	///
	/// Tokens that matched a registered name.
	pub triggers: usize,

	/// # Values.
	///
	/// Tokens consumed as the value(s) of a single or multi flag.
	pub values: usize,

	/// # Unmatched.
	///
	/// Tokens that were neither.
	pub unmatched: usize,
}

impl ParseReport {
	#[must_use]
	/// # Total.
	pub const fn total(&self) -> usize {
		self.triggers + self.values + self.unmatched
	}
}



impl FlagSet {
	/// # Parse.
	///
	/// Run through the arguments (skipping the program name) once, left to
	/// right, assigning values to the registered flags and collecting anything
	/// that doesn't match.
	///
	/// Matching rules by (resolved) kind:
	/// * Single: the next token becomes the value unless it is itself a flag, in which case the value is left as-was;
	/// * Multi: all tokens up to the next flag become the value, replacing whatever was there;
	/// * Switch: the value becomes `true`; following tokens are never consumed;
	///
	/// In all three cases, the flag's state becomes [`FlagState::Set`], even
	/// if no value was taken. Flags that never come up are marked
	/// [`FlagState::Absent`] once the pass is complete.
	///
	/// ## Examples
	///
	/// ```
	/// use argset::{ArgVec, FlagSet};
	///
	/// let mut set = FlagSet::new();
	/// let opt = set.switch("--opt").unwrap();
	///
	/// let args: ArgVec = ["app", "foo", "--opt", "bar"].into_iter().collect();
	/// let report = set.parse(&args).unwrap();
	///
	/// assert!(opt.value(&set));
	/// assert_eq!(set.unmatched(), ["foo", "bar"]);
	/// assert_eq!(report.total(), 3);
	/// ```
	///
	/// ## Errors
	///
	/// A set can only be parsed once; subsequent attempts return
	/// [`FlagError::Parsed`] and leave everything as it was.
	pub fn parse(&mut self, args: &ArgVec) -> Result<ParseReport, FlagError> {
		if self.parsed { return Err(FlagError::Parsed); }
		self.parsed = true;

		let tokens = args.as_slice();
		let len = tokens.len();
		let mut report = ParseReport::default();

		let mut i = 1;
		while i < len {
			let token = tokens[i].as_str();

			// Not a flag.
			let Some(idx) = self.names.get(token).copied() else {
				trace!(idx = i, token, "unmatched");
				self.unmatched.push(token.to_owned());
				report.unmatched += 1;
				i += 1;
				continue;
			};

			report.triggers += 1;
			let (idx, kind) = self.resolve_idx(idx);
			trace!(idx = i, token, %kind, "flag");

			match kind {
				FlagKind::Single => {
					let value = tokens.get(i + 1)
						.filter(|v| ! self.names.contains_key(v.as_str()))
						.cloned();

					i += 1;
					if let Some(value) = value {
						self.nodes[idx].value = Value::Single(Some(value));
						report.values += 1;
						i += 1;
					}
				},
				FlagKind::Multi => {
					let start = i + 1;
					let end = tokens[start..].iter()
						.position(|v| self.names.contains_key(v.as_str()))
						.map_or(len, |p| start + p);

					self.nodes[idx].value = Value::Multi(args.slice(start, end)?.to_vec());
					report.values += end - start;
					i = end;
				},
				FlagKind::Switch => {
					self.nodes[idx].value = Value::Switch(true);
					i += 1;
				},
			}

			self.nodes[idx].state = FlagState::Set;
		}

		// Anything untouched is now known to be absent.
		for node in &mut self.nodes {
			if FlagState::Pending == node.state && ! matches!(node.value, Value::Alias(_)) {
				node.state = FlagState::Absent;
			}
		}

		debug!(
			args = len.saturating_sub(1),
			triggers = report.triggers,
			values = report.values,
			unmatched = report.unmatched,
			"parsed arguments",
		);

		Ok(report)
	}

	/// # Parse Env.
	///
	/// Parse the arguments passed to the running program. See
	/// [`FlagSet::parse`] for details.
	///
	/// ## Errors
	///
	/// A set can only be parsed once; subsequent attempts return
	/// [`FlagError::Parsed`].
	pub fn parse_env(&mut self) -> Result<ParseReport, FlagError> {
		self.parse(&ArgVec::from_env())
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::FlagValue;

	/// # Helper: Build Arguments.
	fn argv(args: &[&str]) -> ArgVec {
		std::iter::once("app").chain(args.iter().copied()).collect()
	}

	#[test]
	fn t_parse() {
		let mut set = FlagSet::new();
		let name = set.single_with("--name", "nobody").expect("Single failed.");
		let files = set.multi("--files").expect("Multi failed.");
		let verbose = set.switch("--verbose").expect("Switch failed.");
		let quiet = set.switch("--quiet").expect("Switch failed.");
		let v = set.alias("-v", verbose).expect("Alias failed.");

		let args = argv(&[
			"first",
			"--name", "Björk",
			"--files", "a.txt", "b.txt",
			"-v",
			"last",
		]);
		let report = set.parse(&args).expect("Parse failed.");

		assert_eq!(name.value(&set), Some("Björk"));
		assert_eq!(files.value(&set), ["a.txt", "b.txt"]);
		assert!(verbose.value(&set));
		assert!(verbose.is_set(&set));
		assert!(v.is_set(&set));
		assert_eq!(v.value(&set), FlagValue::Switch(true));

		// Quiet never showed up.
		assert!(! quiet.value(&set));
		assert_eq!(quiet.state(&set), FlagState::Absent);

		// Switches don't take values.
		assert_eq!(set.unmatched(), ["first", "last"]);
		assert_eq!(
			report,
			ParseReport { triggers: 3, values: 3, unmatched: 2 },
		);
		assert_eq!(report.total(), args.len() - 1);
	}

	#[test]
	fn t_parse_twice() {
		let mut set = FlagSet::new();
		let verbose = set.switch("--verbose").expect("Switch failed.");
		assert!(set.parse(&argv(&["--verbose"])).is_ok());
		assert!(set.is_parsed());

		// Nope!
		assert_eq!(set.parse(&argv(&["extra"])), Err(FlagError::Parsed));
		assert!(set.unmatched().is_empty());
		assert!(verbose.is_set(&set));

		// No late additions either.
		assert_eq!(set.switch("--late"), Err(FlagError::Parsed));
		assert_eq!(set.alias("-v", verbose), Err(FlagError::Parsed));
	}

	#[test]
	fn t_parse_single() {
		// Last token, no value.
		let mut set = FlagSet::new();
		let name = set.single_with("--name", "default").expect("Single failed.");
		set.parse(&argv(&["--name"])).expect("Parse failed.");
		assert_eq!(name.value(&set), Some("default"));
		assert_eq!(name.state(&set), FlagState::Set);

		// Followed by another flag.
		let mut set = FlagSet::new();
		let name = set.single("--name").expect("Single failed.");
		let quiet = set.switch("-q").expect("Switch failed.");
		let report = set.parse(&argv(&["--name", "-q", "x"])).expect("Parse failed.");
		assert_eq!(name.value(&set), None);
		assert!(name.is_set(&set));
		assert!(quiet.value(&set));
		assert_eq!(set.unmatched(), ["x"]);
		assert_eq!(report, ParseReport { triggers: 2, values: 0, unmatched: 1 });

		// Repeated; the last one wins.
		let mut set = FlagSet::new();
		let name = set.single("--name").expect("Single failed.");
		set.parse(&argv(&["--name", "one", "--name", "two"])).expect("Parse failed.");
		assert_eq!(name.value(&set), Some("two"));

		// Values can look like anything so long as they aren't registered.
		let mut set = FlagSet::new();
		let name = set.single("--name").expect("Single failed.");
		set.parse(&argv(&["--name", "--unknown", "--other"])).expect("Parse failed.");
		assert_eq!(name.value(&set), Some("--unknown"));
		assert_eq!(set.unmatched(), ["--other"]);
	}

	#[test]
	fn t_parse_multi() {
		let mut set = FlagSet::new();
		let files = set.multi("--files").expect("Multi failed.");
		let verbose = set.switch("--verbose").expect("Switch failed.");
		let report = set.parse(&argv(&["--files", "a.txt", "b.txt", "--verbose"]))
			.expect("Parse failed.");

		assert_eq!(files.value(&set), ["a.txt", "b.txt"]);
		assert!(verbose.value(&set));
		assert!(set.unmatched().is_empty());
		assert_eq!(report.total(), 4);

		// Runs to the end when nothing stops it.
		let mut set = FlagSet::new();
		let files = set.multi_with("--files", ["default.txt"]).expect("Multi failed.");
		set.parse(&argv(&["--files", "a", "b", "c"])).expect("Parse failed.");
		assert_eq!(files.value(&set), ["a", "b", "c"]);

		// An empty run still replaces the defaults.
		let mut set = FlagSet::new();
		let files = set.multi_with("--files", ["default.txt"]).expect("Multi failed.");
		let q = set.switch("-q").expect("Switch failed.");
		set.parse(&argv(&["--files", "-q"])).expect("Parse failed.");
		assert!(files.value(&set).is_empty());
		assert!(files.is_set(&set));
		assert!(q.is_set(&set));

		// As the very last token.
		let mut set = FlagSet::new();
		let files = set.multi_with("--files", ["default.txt"]).expect("Multi failed.");
		let report = set.parse(&argv(&["x", "--files"])).expect("Parse failed.");
		assert!(files.value(&set).is_empty());
		assert_eq!(report, ParseReport { triggers: 1, values: 0, unmatched: 1 });

		// Repeated; the last run wins.
		let mut set = FlagSet::new();
		let files = set.multi("--files").expect("Multi failed.");
		set.parse(&argv(&["--files", "a", "--files", "b", "c"])).expect("Parse failed.");
		assert_eq!(files.value(&set), ["b", "c"]);
	}

	#[test]
	fn t_parse_switch() {
		let mut set = FlagSet::new();
		let opt = set.switch("--opt").expect("Switch failed.");
		let report = set.parse(&argv(&["foo", "--opt", "bar"])).expect("Parse failed.");
		assert!(opt.value(&set));
		assert_eq!(set.unmatched(), ["foo", "bar"]);
		assert_eq!(report, ParseReport { triggers: 1, values: 0, unmatched: 2 });
	}

	#[test]
	fn t_parse_empty() {
		// Nothing but the program name.
		let mut set = FlagSet::new();
		let name = set.single("--name").expect("Single failed.");
		let report = set.parse(&argv(&[])).expect("Parse failed.");
		assert_eq!(report.total(), 0);
		assert_eq!(name.state(&set), FlagState::Absent);

		// Not even that.
		let mut set = FlagSet::new();
		let report = set.parse(&ArgVec::default()).expect("Parse failed.");
		assert_eq!(report.total(), 0);
		assert!(set.unmatched().is_empty());

		// The program name is never matched, even if it looks like a flag.
		let mut set = FlagSet::new();
		let name = set.switch("--name").expect("Switch failed.");
		let args: ArgVec = ["--name", "x"].into_iter().collect();
		set.parse(&args).expect("Parse failed.");
		assert!(! name.is_set(&set));
		assert_eq!(set.unmatched(), ["x"]);
	}

	#[test]
	fn t_parse_alias() {
		let mut set = FlagSet::new();
		let out = set.single_with("--output", "default").expect("Single failed.");
		let o1 = set.alias("-o", out).expect("Alias failed.");
		let o2 = set.alias("--out", o1).expect("Alias failed.");
		let files = set.multi("--files").expect("Multi failed.");
		let f = set.alias("-f", files).expect("Alias failed.");

		set.parse(&argv(&["--out", "x.txt", "-f", "a", "b"])).expect("Parse failed.");

		// Every depth should agree with the target.
		assert_eq!(out.value(&set), Some("x.txt"));
		for a in [o1, o2] {
			assert_eq!(a.value(&set), set.value(out));
			assert_eq!(a.state(&set), out.state(&set));
		}
		assert!(out.is_set(&set));

		// Alias names also count as "known" for lookahead purposes.
		assert_eq!(f.value(&set).as_multi(), Some(files.value(&set)));
		assert_eq!(files.value(&set), ["a", "b"]);
	}

	#[test]
	fn t_parse_idempotent() {
		/// # Fresh Set.
		fn fresh() -> (FlagSet, [crate::FlagId; 4]) {
			let mut set = FlagSet::new();
			let a = set.single("-a").expect("Single failed.");
			let b = set.multi("-b").expect("Multi failed.");
			let c = set.switch("-c").expect("Switch failed.");
			let d = set.alias("-d", a).expect("Alias failed.");
			(set, [a.id(), b.id(), c.id(), d.id()])
		}

		let args = argv(&["x", "-a", "-b", "1", "2", "-c", "y", "-d", "z", "-a"]);
		let (mut set1, ids1) = fresh();
		let (mut set2, ids2) = fresh();
		let r1 = set1.parse(&args).expect("Parse failed.");
		let r2 = set2.parse(&args).expect("Parse failed.");

		assert_eq!(r1, r2);
		assert_eq!(r1.total(), args.len() - 1);
		assert_eq!(set1.unmatched(), set2.unmatched());
		for (a, b) in ids1.into_iter().zip(ids2) {
			assert_eq!(set1.value(a), set2.value(b));
			assert_eq!(set1.state(a), set2.state(b));
		}
	}

	#[test]
	fn t_parse_accounting() {
		// Churn through a bunch of permutations to make sure every token is
		// accounted for exactly once.
		let pool = ["-s", "-m", "-x", "a", "b"];
		for n in 0..=5_usize {
			for seed in 0..(pool.len().pow(u32::try_from(n).expect("Small number."))) {
				let mut s = seed;
				let mut raw = Vec::with_capacity(n);
				for _ in 0..n {
					raw.push(pool[s % pool.len()]);
					s /= pool.len();
				}

				let mut set = FlagSet::new();
				let _ = set.single("-s").expect("Single failed.");
				let _ = set.multi("-m").expect("Multi failed.");
				let _ = set.switch("-x").expect("Switch failed.");
				let report = set.parse(&argv(&raw)).expect("Parse failed.");

				assert_eq!(report.total(), n, "Bad accounting for {raw:?}.");
				assert_eq!(report.unmatched, set.unmatched().len());
				assert!(
					set.unmatched().iter().all(|v| v == "a" || v == "b"),
					"Flags ended up unmatched for {raw:?}.",
				);
			}
		}
	}
}
