/*!
# Argset

[![license](https://img.shields.io/badge/license-wtfpl-ff1493?style=flat-square)](https://en.wikipedia.org/wiki/WTFPL)

This crate provides a small registry-based CLI flag parser called [`FlagSet`], along with a "did you mean" helper called [`Suggestor`] for when users fat-finger a flag name.

Unlike streaming parsers, a [`FlagSet`] knows about every flag up front. You register names (and kinds) first, [parse](FlagSet::parse) the arguments exactly once, then read the results back out using the typed handles returned during registration.

Four kinds of flags are supported:

| Kind | Matches | Value |
| ---- | ------- | ----- |
| [Single](FlagSet::single) | `--name value` | The next token, unless it's another flag. |
| [Multi](FlagSet::multi) | `--name a b c` | Every token up to the next flag. |
| [Switch](FlagSet::switch) | `--name` | `true`. |
| [Alias](FlagSet::alias) | `-n` | Whatever its target has. |

Tokens that match nothing are collected as-are; what to do with them is _entirely up to you_. Some might be paths; others might be typos, in which case a [`Suggestor`] can help point the user in the right direction.



## Crate Features

| Feature | Description | Default |
| ------- | ----------- | ------- |
| `docsrs` | Docs.rs workaround; don't enable this. | N |



## Logging

Registration and parsing emit [`tracing`](https://crates.io/crates/tracing) events at `DEBUG` (summaries) and `TRACE` (per-token detail) levels. They're free unless a subscriber is installed.



## Example

```
use argset::{ArgVec, FlagSet, FlagState};

// Register.
let mut set = FlagSet::new();
let help = set.switch("--help").unwrap();
let h = set.alias("-h", help).unwrap();
let verbose = set.switch("--verbose").unwrap();
let threads = set.single_with("--threads", "1").unwrap();
let paths = set.multi("--paths").unwrap();

// Parse. Normally you'd use ArgVec::from_env or FlagSet::parse_env, but
// this will do for the example.
let args: ArgVec = ["app", "--verbsoe", "--threads", "4", "--paths", "a", "b"]
    .into_iter()
    .collect();
set.parse(&args).unwrap();

// Read!
assert!(! help.value(&set));
assert_eq!(h.state(&set), FlagState::Absent);
assert_eq!(threads.value(&set), Some("4"));
assert_eq!(paths.value(&set), ["a", "b"]);

// Hmm, that typo didn't match anything…
assert!(! verbose.value(&set));
assert_eq!(set.unmatched(), ["--verbsoe"]);

// …but it's close to something that does.
let sug = set.suggestor();
assert_eq!(sug.suggest("--verbsoe"), Some("--verbose"));
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod argv;
mod error;
mod flag;
mod iter;
mod suggest;

pub use argv::ArgVec;
pub use error::FlagError;
pub use flag::{
	AliasFlag,
	FlagId,
	FlagKind,
	FlagSet,
	FlagState,
	FlagValue,
	MultiFlag,
	ParseReport,
	SingleFlag,
	SwitchFlag,
};
pub use iter::Args;
pub use suggest::{
	damerau_levenshtein,
	levenshtein,
	Distance,
	Fallback,
	LetterSet,
	Suggestor,
};

// Dev-dependencies are only used by the benches and demo.
#[cfg(test)] use brunch as _;
#[cfg(test)] use tracing_subscriber as _;
