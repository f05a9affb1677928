/*!
# Argset: Flag Kinds.
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Flag Kind.
///
/// The behavioral class of a (resolved) flag. Aliases have no kind of their
/// own; asking an alias for its kind returns the kind of whatever it
/// ultimately points to.
pub enum FlagKind {
	/// # Single Value.
	///
	/// Takes the next token as its value, unless that token is itself a flag.
	Single,

	/// # Multiple Values.
	///
	/// Takes every following token up to the next flag.
	Multi,

	/// # Boolean Switch.
	///
	/// Never takes a value; presence means `true`.
	Switch,
}

impl fmt::Display for FlagKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FlagKind {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Single => "single",
			Self::Multi => "multi",
			Self::Switch => "switch",
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Flag Value.
///
/// A borrowed view of a resolved flag's current value, returned by
/// [`FlagSet::value`](crate::FlagSet::value) and
/// [`AliasFlag::value`](crate::AliasFlag::value) when the concrete kind isn't
/// known statically.
pub enum FlagValue<'a> {
	/// # Single.
	Single(Option<&'a str>),

	/// # Multi.
	Multi(&'a [String]),

	/// # Switch.
	Switch(bool),
}

impl<'a> FlagValue<'a> {
	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> FlagKind {
		match self {
			Self::Single(_) => FlagKind::Single,
			Self::Multi(_) => FlagKind::Multi,
			Self::Switch(_) => FlagKind::Switch,
		}
	}

	#[must_use]
	/// # As Single.
	///
	/// Return the single value, if this is a single and it has one.
	pub const fn as_single(&self) -> Option<&'a str> {
		if let Self::Single(v) = self { *v } else { None }
	}

	#[must_use]
	/// # As Multi.
	///
	/// Return the values, if this is a multi.
	pub const fn as_multi(&self) -> Option<&'a [String]> {
		if let Self::Multi(v) = self { Some(*v) } else { None }
	}

	#[must_use]
	/// # As Switch.
	///
	/// Return the boolean, if this is a switch.
	pub const fn as_switch(&self) -> Option<bool> {
		if let Self::Switch(v) = self { Some(*v) } else { None }
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Stored Value.
///
/// The payload held by each node in a [`FlagSet`](crate::FlagSet) arena.
pub(super) enum Value {
	/// # Single.
	Single(Option<String>),

	/// # Multi.
	Multi(Vec<String>),

	/// # Switch.
	Switch(bool),

	/// # Alias.
	///
	/// The arena index of the target, which is always lower than the alias's
	/// own index.
	Alias(usize),
}

impl Value {
	/// # As Flag Value.
	///
	/// Aliases have nothing to show for themselves and return `None`.
	pub(super) fn as_flag_value(&self) -> Option<FlagValue<'_>> {
		match self {
			Self::Single(v) => Some(FlagValue::Single(v.as_deref())),
			Self::Multi(v) => Some(FlagValue::Multi(v.as_slice())),
			Self::Switch(v) => Some(FlagValue::Switch(*v)),
			Self::Alias(_) => None,
		}
	}
}
