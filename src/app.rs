//! End-to-end runner: read requests, optimize, write the answer.
//!
//! Streams are passed in explicitly so the whole pipeline can be driven
//! from memory in tests.

use std::io::{Read, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::io::{parse_intervals, render_json, render_text, INPUT_FORMAT_HELP};
use crate::models::Selection;
use crate::scheduler::{optimize, SelectionKpi};
use crate::validation::validate_intervals;

/// How the selection is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Reward line followed by `[id, id, ...]`.
    #[default]
    Text,
    /// One JSON object.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format '{other}', expected 'text' or 'json'"),
        }
    }
}

/// Runner configuration.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Output rendering.
    pub format: OutputFormat,
    /// Reject input that fails [`validate_intervals`] instead of solving it.
    pub strict: bool,
    /// Log selection KPIs at `info` level.
    pub report_kpi: bool,
}

impl RunConfig {
    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables or disables strict validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enables or disables KPI reporting.
    pub fn with_kpi(mut self, report_kpi: bool) -> Self {
        self.report_kpi = report_kpi;
        self
    }
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Input was solved and the answer written.
    Solved(Selection),
    /// Input could not be parsed; the format diagnostic was written.
    InvalidInput,
    /// Strict mode rejected the input; the issues were written.
    Rejected(usize),
}

impl RunOutcome {
    /// Whether the run produced an answer.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Reads the whole of `input`, solves it and writes the result to `output`.
///
/// Malformed input never reaches the optimizer. I/O failures are returned
/// as errors.
pub fn run(mut input: impl Read, mut output: impl Write, config: &RunConfig) -> Result<RunOutcome> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read input")?;

    let intervals = match parse_intervals(&text) {
        Ok(intervals) => intervals,
        Err(e) => {
            warn!("rejecting input: {e}");
            writeln!(output, "{INPUT_FORMAT_HELP}").context("failed to write diagnostic")?;
            return Ok(RunOutcome::InvalidInput);
        }
    };

    if config.strict {
        if let Err(errors) = validate_intervals(&intervals) {
            for e in &errors {
                writeln!(output, "{e}").context("failed to write validation errors")?;
            }
            return Ok(RunOutcome::Rejected(errors.len()));
        }
    }

    let selection = optimize(&intervals);

    if config.report_kpi {
        let kpi = SelectionKpi::calculate(&intervals, &selection);
        info!(
            selected = kpi.selected_count,
            rejected = kpi.rejected_count,
            captured_reward = kpi.captured_reward,
            offered_reward = kpi.offered_reward,
            capture_rate = kpi.capture_rate,
            utilization = kpi.utilization,
            "selection kpi"
        );
    }

    let rendered = match config.format {
        OutputFormat::Text => render_text(&selection),
        OutputFormat::Json => {
            let mut json = render_json(&selection).context("failed to serialize selection")?;
            json.push('\n');
            json
        }
    };
    output
        .write_all(rendered.as_bytes())
        .context("failed to write result")?;
    output.flush().context("failed to flush output")?;

    Ok(RunOutcome::Solved(selection))
}
