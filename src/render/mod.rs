//! Output rendering for user records.
//!
//! Records are written twice: as one pretty-printed JSON array and as JSON
//! Lines, one object per line.
//!
//! # Example
//!
//! ```no_run
//! use signup_prefill::{prefill_from_file, mapper::PrefillOptions, render::write_outputs};
//!
//! let outcome = prefill_from_file("responses.xlsx", &PrefillOptions::default())?;
//! let paths = write_outputs("prefill_users.json", &outcome.records)?;
//! println!("{}", paths.jsonl.display());
//! # Ok::<(), signup_prefill::Error>(())
//! ```

mod json;
mod output;

pub use json::{to_json, to_json_array, to_jsonl, JsonFormat};
pub use output::{jsonl_path_for, write_outputs, OutputPaths};
