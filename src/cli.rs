//! CLI domain: parse, route, output, and presentation only.
//! No fingerprinting logic; the route dispatches to the fingerprint and persist modules.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, OutputFormat};
pub use presentation::{format_report_json, format_report_text, EntryReport, FingerprintReport};
pub use route::{RunContext, RunOptions};
