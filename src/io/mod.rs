//! Text adapters around the optimizer.
//!
//! `input` turns the whitespace-separated request format into
//! [`Interval`](crate::models::Interval)s; `output` renders a
//! [`Selection`](crate::models::Selection) as text or JSON.

pub mod input;
pub mod output;

pub use input::{parse_intervals, ParseError, INPUT_FORMAT_HELP};
pub use output::{render_json, render_text};
