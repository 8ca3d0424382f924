//! Scan driver
//!
//! Walks one input stream looking for `@`, hands each one to the recognizer and
//! runs whatever it matched. The walk is bounded by the byte length measured
//! when the stream was opened: at most that many top-level steps are taken.
//! Directives consume bytes of their own and snippet directives step back, so
//! the bound is loose; the walk also stops as soon as the stream ends.

use std::io::Write;

use tracing::{debug, trace};

use super::directive::DIRECTIVE_PREFIX;
use super::error::Result;
use super::interpreter::{Interpreter, InterpreterState, RenderOptions};
use super::recognizer::recognize;
use super::stream::CharSource;

/// What a scan of one input did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Top-level bytes read by the driver itself.
    pub steps: u64,
    /// Directives matched at top level (nested ones are not counted).
    pub directives: usize,
    /// `@` tokens at top level that matched no keyword.
    pub unmatched: usize,
    /// Interpreter state at the end of the scan.
    pub state: InterpreterState,
}

/// Render every directive in `input` to `output` with a fresh interpreter state.
pub fn scan<S, W>(input: &mut S, output: &mut W, options: &RenderOptions) -> Result<ScanReport>
where
    S: CharSource + ?Sized,
    W: Write + ?Sized,
{
    let bound = input.len();
    let mut interpreter = Interpreter::new(options);
    let mut report = ScanReport::default();

    while report.steps < bound {
        let Some(byte) = input.next_char()? else {
            break;
        };
        report.steps += 1;
        if byte != DIRECTIVE_PREFIX {
            continue;
        }

        let recognition = recognize(input)?;
        match recognition.directive {
            Some(_) => {
                report.directives += 1;
                interpreter.execute(&recognition, input, output)?;
            }
            None => {
                trace!(consumed = recognition.consumed, "unrecognized directive dropped");
                report.unmatched += 1;
            }
        }
    }

    report.state = interpreter.into_state();
    debug!(
        steps = report.steps,
        bound,
        directives = report.directives,
        unmatched = report.unmatched,
        "scan finished"
    );
    Ok(report)
}
