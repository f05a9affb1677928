/*!
# Argset: Debug

This example parses the runtime arguments against a handful of flags,
prints what it found, and offers suggestions for anything that looks like a
mistyped flag.

Set `RUST_LOG=argset=trace` to see what's going on under the hood, e.g.:
RUST_LOG=argset=trace cargo run --example debug -- --verbsoe --paths a b
*/

use argset::{
	FlagSet,
	FlagState,
	Suggestor,
};
use tracing_subscriber::EnvFilter;



fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let mut set = FlagSet::new();
	let help = set.switch("--help").expect("Registration failed.");
	set.alias("-h", help).expect("Registration failed.");
	let verbose = set.switch("--verbose").expect("Registration failed.");
	set.alias("-v", verbose).expect("Registration failed.");
	let threads = set.single_with("--threads", "1").expect("Registration failed.");
	let paths = set.multi("--paths").expect("Registration failed.");

	let report = set.parse_env().expect("Parsing failed.");
	println!(
		"\x1b[2mTokens:\x1b[0m {} ({} flag(s), {} value(s), {} unmatched)\n",
		report.total(),
		report.triggers,
		report.values,
		report.unmatched,
	);

	if help.value(&set) {
		println!("Usage: debug [-h|--help] [-v|--verbose] [--threads <N>] [--paths <PATH>…]");
		return;
	}

	println!("--verbose  {}", verbose.value(&set));
	println!("--threads  {}", threads.value(&set).unwrap_or("(none)"));
	match paths.state(&set) {
		FlagState::Set => println!("--paths    {:?}", paths.value(&set)),
		_ => println!("--paths    (absent)"),
	}

	let sug: Suggestor = set.suggestor().with_max_distance(3);
	for token in set.unmatched() {
		if ! token.starts_with('-') {
			println!("\n\x1b[2mIgnoring:\x1b[0m {token}");
		}
		else if let Some(close) = sug.suggest(token) {
			println!("\n\x1b[1;91mUnknown:\x1b[0m {token} \x1b[2m(did you mean {close}?)\x1b[0m");
		}
		else {
			println!("\n\x1b[1;91mUnknown:\x1b[0m {token}");
		}
	}
}
