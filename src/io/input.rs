//! Request parsing.
//!
//! # Format
//!
//! ```text
//! <number of trains>
//! <id> <arrival> <unload time> <reward>   (repeated)
//! ```
//!
//! Tokens are separated by any whitespace, including blank lines.
//! Tokens after the last train are ignored.
//!
//! Every departure time and the sum of absolute rewards must fit in an
//! `i64`, so nothing downstream can overflow.

use std::str::SplitWhitespace;

use thiserror::Error;
use tracing::debug;

use crate::models::Interval;

/// Diagnostic shown to the user when the input cannot be parsed.
pub const INPUT_FORMAT_HELP: &str = "\
Wrong input format or error reading from the console.

Input should be as follows (without brackets):

<Number of trains>
Then for each train:
<Train number: Int> <Time of arrival: Int> <Time to unload the train: Int> <Reward for unloading the train: Int>";

/// Errors from parsing request text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    MissingToken { expected: &'static str },

    #[error("invalid integer '{token}' for {field}")]
    InvalidInteger { field: &'static str, token: String },

    #[error("number of trains must not be negative, got {0}")]
    NegativeCount(i64),

    #[error("departure time of train {id} does not fit in a 64-bit integer")]
    EndOverflow { id: i64 },

    #[error("total absolute reward does not fit in a 64-bit integer")]
    RewardOverflow,
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_int(&mut self, field: &'static str) -> Result<i64, ParseError> {
        let token = self
            .inner
            .next()
            .ok_or(ParseError::MissingToken { expected: field })?;
        token.parse().map_err(|_| ParseError::InvalidInteger {
            field,
            token: token.to_string(),
        })
    }
}

/// Parses a train count followed by that many `id start duration reward`
/// tuples.
pub fn parse_intervals(text: &str) -> Result<Vec<Interval>, ParseError> {
    let mut tokens = Tokens::new(text);

    let count = tokens.next_int("number of trains")?;
    if count < 0 {
        return Err(ParseError::NegativeCount(count));
    }

    // Capacity is not taken from `count` directly; it is untrusted.
    let mut intervals = Vec::new();
    let mut reward_budget: i64 = 0;
    for _ in 0..count {
        let id = tokens.next_int("train number")?;
        let start = tokens.next_int("time of arrival")?;
        let duration = tokens.next_int("time to unload")?;
        let reward = tokens.next_int("reward")?;

        if start.checked_add(duration).is_none() {
            return Err(ParseError::EndOverflow { id });
        }
        reward_budget = reward
            .checked_abs()
            .and_then(|r| reward_budget.checked_add(r))
            .ok_or(ParseError::RewardOverflow)?;

        intervals.push(Interval::new(id, start, duration, reward));
    }

    debug!(trains = intervals.len(), "parsed unloading requests");
    Ok(intervals)
}
