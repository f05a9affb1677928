/*!
# Argset: Flag Sets.

This module contains [`FlagSet`], the registry that owns every flag
definition for a given parse, along with the typed handles used to read
them back out.

Definitions live in a flat arena inside the set. Handles are just indexes
into that arena (tagged with the id of the owning set), and aliases point
at earlier indexes, so every alias chain is finite by construction.
*/

mod kind;
mod parse;

pub use kind::{
	FlagKind,
	FlagValue,
};
pub use parse::ParseReport;

use crate::{
	FlagError,
	Suggestor,
};
use kind::Value;
use std::{
	collections::BTreeMap,
	sync::atomic::{
		AtomicU32,
		Ordering::Relaxed,
	},
};
use tracing::debug;



/// # Set Counter.
///
/// Each set gets its own id so handles can't wander between them.
static NEXT_SET: AtomicU32 = AtomicU32::new(0);



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Flag State.
///
/// Whether or not a flag turned up during parsing.
pub enum FlagState {
	#[default]
	/// # Not Yet Evaluated.
	///
	/// The set hasn't been parsed yet.
	Pending,

	/// # Observed and Set.
	///
	/// The flag (or an alias of it) was present.
	Set,

	/// # Observed and Absent.
	///
	/// The set was parsed, but the flag never came up.
	Absent,
}



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Flag ID.
///
/// An untyped reference to a definition within a [`FlagSet`]. All of the
/// typed handles convert into one of these.
pub struct FlagId {
	/// # Owning Set.
	set: u32,

	/// # Arena Index.
	idx: usize,
}

/// # Helper: Typed Handles.
macro_rules! handle {
	($($name:ident $title:literal,)+) => ($(
		#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
		#[doc = concat!("# ", $title, " Flag Handle.")]
		///
		/// This is returned by the corresponding [`FlagSet`] registration
		/// method, and can be used to query the flag after parsing.
		///
		/// ## Panics
		///
		/// The query methods panic if passed a set other than the one the
		/// handle was created by.
		pub struct $name(FlagId);

		impl From<$name> for FlagId {
			#[inline]
			fn from(src: $name) -> Self { src.0 }
		}

		impl $name {
			#[must_use]
			#[inline]
			/// # ID.
			pub const fn id(self) -> FlagId { self.0 }

			#[must_use]
			#[inline]
			/// # Name.
			///
			/// Return the name this handle was registered under.
			pub fn name(self, set: &FlagSet) -> &str { set.name(self.0) }

			#[must_use]
			#[inline]
			/// # State.
			pub fn state(self, set: &FlagSet) -> FlagState { set.state(self.0) }

			#[must_use]
			#[inline]
			/// # Is Set?
			///
			/// Returns `true` if the flag (or an alias of it) was present in
			/// the parsed arguments.
			pub fn is_set(self, set: &FlagSet) -> bool { set.is_set(self.0) }
		}
	)+);
}

handle!(
	SingleFlag "Single",
	MultiFlag "Multi",
	SwitchFlag "Switch",
	AliasFlag "Alias",
);

impl SingleFlag {
	#[must_use]
	/// # Value.
	///
	/// Return the parsed value, or the default if none was parsed.
	pub fn value(self, set: &FlagSet) -> Option<&str> {
		set.value(self.0).as_single()
	}
}

impl MultiFlag {
	#[must_use]
	/// # Values.
	///
	/// Return the parsed values, or the defaults if none were parsed.
	pub fn value(self, set: &FlagSet) -> &[String] {
		set.value(self.0).as_multi().unwrap_or_default()
	}
}

impl SwitchFlag {
	#[must_use]
	/// # Value.
	///
	/// Return `true` if the switch was present, otherwise the default.
	pub fn value(self, set: &FlagSet) -> bool {
		set.value(self.0).as_switch().unwrap_or_default()
	}
}

impl AliasFlag {
	#[must_use]
	/// # Value.
	///
	/// Return the value of the flag this alias ultimately resolves to.
	pub fn value(self, set: &FlagSet) -> FlagValue<'_> { set.value(self.0) }

	#[must_use]
	/// # Target.
	///
	/// Return the flag this alias directly points to, which might be
	/// another alias.
	pub fn target(self, set: &FlagSet) -> FlagId {
		match set.node(self.0).value {
			Value::Alias(idx) => FlagId { set: set.id, idx },
			_ => self.0,
		}
	}
}



#[derive(Debug, Clone)]
/// # Flag Node.
struct Node {
	/// # Name.
	name: Box<str>,

	/// # Parse State.
	state: FlagState,

	/// # Payload.
	value: Value,
}



#[derive(Debug)]
/// # Flag Set.
///
/// A `FlagSet` owns the flags you register with it, the bookkeeping needed to
/// match them by name, and (after parsing) any tokens that didn't match
/// anything.
///
/// Flags come in three flavors, plus aliases:
/// * [`FlagSet::single`]: takes the next token as its value;
/// * [`FlagSet::multi`]: takes every token up to the next flag;
/// * [`FlagSet::switch`]: a boolean, `true` if present;
/// * [`FlagSet::alias`]: an alternative name for any of the above (or another alias);
///
/// Name matching is exact and case-sensitive. Approximate matching is left
/// to [`Suggestor`].
///
/// Sets are strictly three-phase: register, [parse](FlagSet::parse) once,
/// then read.
///
/// ## Examples
///
/// ```
/// use argset::{ArgVec, FlagSet};
///
/// let mut set = FlagSet::new();
/// let files = set.multi("--files").unwrap();
/// let verbose = set.switch("--verbose").unwrap();
/// let v = set.alias("-v", verbose).unwrap();
///
/// let args: ArgVec = ["app", "--files", "a.txt", "b.txt", "-v"]
///     .into_iter()
///     .collect();
/// set.parse(&args).unwrap();
///
/// assert_eq!(files.value(&set), ["a.txt", "b.txt"]);
/// assert!(verbose.value(&set));
/// assert!(v.is_set(&set));
/// assert!(set.unmatched().is_empty());
/// ```
pub struct FlagSet {
	/// # Set ID.
	id: u32,

	/// # Definitions.
	nodes: Vec<Node>,

	/// # Name Index.
	names: BTreeMap<Box<str>, usize>,

	/// # Unmatched Tokens.
	unmatched: Vec<String>,

	/// # Parsed?
	parsed: bool,
}

impl Default for FlagSet {
	#[inline]
	fn default() -> Self { Self::new() }
}

impl FlagSet {
	#[must_use]
	/// # New.
	pub fn new() -> Self {
		Self {
			id: NEXT_SET.fetch_add(1, Relaxed),
			nodes: Vec::new(),
			names: BTreeMap::new(),
			unmatched: Vec::new(),
			parsed: false,
		}
	}
}

impl FlagSet {
	/// # Register Single.
	///
	/// Add a flag that takes one value, with no default.
	///
	/// ## Errors
	///
	/// This will return an error if the name is invalid or already taken, or
	/// the set has already been parsed.
	pub fn single(&mut self, name: &str) -> Result<SingleFlag, FlagError> {
		self.insert(name, Value::Single(None)).map(SingleFlag)
	}

	/// # Register Single (With Default).
	///
	/// Add a flag that takes one value, falling back to `default`.
	///
	/// ## Errors
	///
	/// This will return an error if the name is invalid or already taken, or
	/// the set has already been parsed.
	pub fn single_with<S: Into<String>>(&mut self, name: &str, default: S)
	-> Result<SingleFlag, FlagError> {
		self.insert(name, Value::Single(Some(default.into()))).map(SingleFlag)
	}

	/// # Register Multi.
	///
	/// Add a flag that takes any number of values, with no defaults.
	///
	/// ## Errors
	///
	/// This will return an error if the name is invalid or already taken, or
	/// the set has already been parsed.
	pub fn multi(&mut self, name: &str) -> Result<MultiFlag, FlagError> {
		self.insert(name, Value::Multi(Vec::new())).map(MultiFlag)
	}

	/// # Register Multi (With Defaults).
	///
	/// Add a flag that takes any number of values, falling back to
	/// `defaults`.
	///
	/// ## Errors
	///
	/// This will return an error if the name is invalid or already taken, or
	/// the set has already been parsed.
	pub fn multi_with<I, S>(&mut self, name: &str, defaults: I)
	-> Result<MultiFlag, FlagError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		let defaults = defaults.into_iter().map(Into::into).collect();
		self.insert(name, Value::Multi(defaults)).map(MultiFlag)
	}

	/// # Register Switch.
	///
	/// Add a boolean flag, `false` by default.
	///
	/// ## Errors
	///
	/// This will return an error if the name is invalid or already taken, or
	/// the set has already been parsed.
	pub fn switch(&mut self, name: &str) -> Result<SwitchFlag, FlagError> {
		self.switch_with(name, false)
	}

	/// # Register Switch (With Default).
	///
	/// Add a boolean flag with an explicit default. Note that presence always
	/// sets it `true`; there's no way to switch a switch off.
	///
	/// ## Errors
	///
	/// This will return an error if the name is invalid or already taken, or
	/// the set has already been parsed.
	pub fn switch_with(&mut self, name: &str, default: bool)
	-> Result<SwitchFlag, FlagError> {
		self.insert(name, Value::Switch(default)).map(SwitchFlag)
	}

	/// # Register Switches.
	///
	/// Add several boolean flags at once, returning their handles in the
	/// same order.
	///
	/// ## Errors
	///
	/// This will return the first error encountered; any switches registered
	/// before it remain registered.
	pub fn switches<'a, I>(&mut self, names: I) -> Result<Vec<SwitchFlag>, FlagError>
	where I: IntoIterator<Item=&'a str> {
		names.into_iter().map(|n| self.switch(n)).collect()
	}

	/// # Register Alias.
	///
	/// Add an alternative name for an existing flag. The target can be any
	/// handle from this set, including another alias.
	///
	/// ## Examples
	///
	/// ```
	/// use argset::FlagSet;
	///
	/// let mut set = FlagSet::new();
	/// let help = set.switch("--help").unwrap();
	/// let h = set.alias("-h", help).unwrap();
	///
	/// // Aliases of aliases are fine too.
	/// assert!(set.alias("-?", h).is_ok());
	///
	/// // But names still have to be unique.
	/// assert!(set.alias("--help", help).is_err());
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if the name is invalid or already taken, the
	/// target belongs to a different set, or the set has already been parsed.
	pub fn alias<T: Into<FlagId>>(&mut self, name: &str, target: T)
	-> Result<AliasFlag, FlagError> {
		let target = target.into();
		if target.set != self.id || self.nodes.len() <= target.idx {
			return Err(FlagError::ForeignFlag(name.to_owned()));
		}
		self.insert(name, Value::Alias(target.idx)).map(AliasFlag)
	}

	/// # Insert.
	fn insert(&mut self, name: &str, value: Value) -> Result<FlagId, FlagError> {
		if self.parsed { return Err(FlagError::Parsed); }
		if ! valid_name(name) { return Err(FlagError::InvalidKey(name.to_owned())); }
		if self.names.contains_key(name) {
			return Err(FlagError::DuplicateKey(name.to_owned()));
		}

		let idx = self.nodes.len();
		let alias = matches!(value, Value::Alias(_));
		debug!(flag = name, idx, alias, "registered flag");

		let name: Box<str> = Box::from(name);
		self.names.insert(name.clone(), idx);
		self.nodes.push(Node {
			name,
			state: FlagState::Pending,
			value,
		});

		Ok(FlagId { set: self.id, idx })
	}
}

impl FlagSet {
	#[must_use]
	#[inline]
	/// # Length.
	///
	/// Return the number of registered names, aliases included.
	pub fn len(&self) -> usize { self.nodes.len() }

	#[must_use]
	#[inline]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

	#[must_use]
	#[inline]
	/// # Parsed?
	pub const fn is_parsed(&self) -> bool { self.parsed }

	/// # Names.
	///
	/// Iterate over every registered name, aliases included, in
	/// registration order.
	pub fn names(&self) -> impl Iterator<Item=&str> {
		self.nodes.iter().map(|n| &*n.name)
	}

	#[must_use]
	/// # Find By Name.
	///
	/// Return the id registered under `name`, if any. No aliases are
	/// resolved; see [`FlagSet::resolve`] for that.
	pub fn find(&self, name: &str) -> Option<FlagId> {
		self.names.get(name).map(|&idx| FlagId { set: self.id, idx })
	}

	#[must_use]
	#[inline]
	/// # Unmatched Tokens.
	///
	/// Return the tokens that were neither flags nor flag values, in the
	/// order they were encountered. This is empty until the set is parsed.
	pub fn unmatched(&self) -> &[String] { &self.unmatched }

	#[must_use]
	/// # Suggestor.
	///
	/// Build a [`Suggestor`] from every registered name, for "did you mean"
	/// purposes.
	pub fn suggestor(&self) -> Suggestor { self.names().collect() }
}

impl FlagSet {
	#[must_use]
	/// # Resolve.
	///
	/// Follow any aliases and return the id of the concrete flag at the end
	/// of the chain. Non-aliases resolve to themselves.
	///
	/// ## Panics
	///
	/// This will panic if the id belongs to a different set.
	pub fn resolve<T: Into<FlagId>>(&self, id: T) -> FlagId {
		let id = id.into();
		let _ = self.node(id);
		FlagId { set: self.id, idx: self.resolve_idx(id.idx).0 }
	}

	#[must_use]
	/// # Is Alias?
	///
	/// ## Panics
	///
	/// This will panic if the id belongs to a different set.
	pub fn is_alias<T: Into<FlagId>>(&self, id: T) -> bool {
		matches!(self.node(id.into()).value, Value::Alias(_))
	}

	#[must_use]
	/// # Kind.
	///
	/// Return the kind of the flag, resolving aliases as needed.
	///
	/// ## Panics
	///
	/// This will panic if the id belongs to a different set.
	pub fn kind<T: Into<FlagId>>(&self, id: T) -> FlagKind {
		let id = id.into();
		let _ = self.node(id);
		self.resolve_idx(id.idx).1
	}

	#[must_use]
	/// # Name.
	///
	/// Return the name registered for the id. Aliases are _not_ resolved.
	///
	/// ## Panics
	///
	/// This will panic if the id belongs to a different set.
	pub fn name<T: Into<FlagId>>(&self, id: T) -> &str { &self.node(id.into()).name }

	#[must_use]
	/// # State.
	///
	/// Return the parse state of the flag, resolving aliases as needed.
	///
	/// ## Panics
	///
	/// This will panic if the id belongs to a different set.
	pub fn state<T: Into<FlagId>>(&self, id: T) -> FlagState {
		self.resolved(id.into()).state
	}

	#[must_use]
	#[inline]
	/// # Is Set?
	///
	/// ## Panics
	///
	/// This will panic if the id belongs to a different set.
	pub fn is_set<T: Into<FlagId>>(&self, id: T) -> bool {
		FlagState::Set == self.state(id)
	}

	#[must_use]
	/// # Value.
	///
	/// Return the current value of the flag, resolving aliases as needed.
	///
	/// ## Panics
	///
	/// This will panic if the id belongs to a different set.
	pub fn value<T: Into<FlagId>>(&self, id: T) -> FlagValue<'_> {
		// Resolution never stops on an alias, but just in case, an empty
		// single is as good an answer as any.
		self.resolved(id.into()).value.as_flag_value()
			.unwrap_or(FlagValue::Single(None))
	}
}

impl FlagSet {
	/// # Node.
	///
	/// ## Panics
	///
	/// This will panic if the id belongs to a different set.
	fn node(&self, id: FlagId) -> &Node {
		assert!(
			id.set == self.id && id.idx < self.nodes.len(),
			"Flag handles cannot be used with other sets.",
		);
		&self.nodes[id.idx]
	}

	/// # Resolved Node.
	fn resolved(&self, id: FlagId) -> &Node {
		let _ = self.node(id);
		&self.nodes[self.resolve_idx(id.idx).0]
	}

	/// # Resolve Index.
	///
	/// Chase aliases down to a concrete node, returning its index and kind.
	///
	/// Alias targets always have lower indexes than the aliases themselves,
	/// so the chain can't loop.
	fn resolve_idx(&self, mut idx: usize) -> (usize, FlagKind) {
		loop {
			match self.nodes[idx].value {
				Value::Single(_) => return (idx, FlagKind::Single),
				Value::Multi(_) => return (idx, FlagKind::Multi),
				Value::Switch(_) => return (idx, FlagKind::Switch),
				Value::Alias(next) => { idx = next; },
			}
		}
	}
}



/// # Valid Name?
///
/// Names can be anything other than empty or whitespace-y.
fn valid_name(name: &str) -> bool {
	! name.is_empty() && ! name.chars().any(char::is_whitespace)
}
