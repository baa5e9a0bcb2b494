//! Single-line progress display for a batch.
//!
//! Formatting is kept in pure functions; [`ProgressWriter`] only handles the
//! carriage-return redraw and the closing summary.
use std::io::Write;
use std::time::Duration;

use crossterm::{
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use tracing::debug;

use crate::http::RequestOutcome;

#[must_use]
pub fn format_outcome(outcome: &RequestOutcome) -> String {
    match outcome {
        RequestOutcome::Success(status) => status.to_string(),
        RequestOutcome::Timeout(message) => format!("timeout {}", message),
        RequestOutcome::Error(message) => format!("error {}", message),
    }
}

#[must_use]
pub fn format_request_line(index: usize, outcome: &RequestOutcome) -> String {
    format!("Request {}: {}", index, format_outcome(outcome))
}

#[must_use]
pub fn format_summary(count: usize, elapsed: Duration) -> String {
    format!(
        "Total time for {} requests: {:.4} seconds",
        count,
        elapsed.as_secs_f64()
    )
}

/// Redraws one line per recorded outcome in place, then prints the summary.
pub struct ProgressWriter<W: Write> {
    out: W,
    clear_line: bool,
    broken: bool,
}

impl<W: Write> ProgressWriter<W> {
    /// `clear_line` erases leftovers of a longer previous line; only useful on a terminal.
    #[must_use]
    pub const fn new(out: W, clear_line: bool) -> Self {
        Self {
            out,
            clear_line,
            broken: false,
        }
    }

    pub fn record(&mut self, index: usize, outcome: &RequestOutcome) {
        let line = format_request_line(index, outcome);
        self.write_or_disable(|out, clear_line| {
            queue!(out, Print("\r"), Print(&line))?;
            if clear_line {
                queue!(out, Clear(ClearType::UntilNewLine))?;
            }
            Ok(())
        });
    }

    pub fn finish(&mut self, count: usize, elapsed: Duration) {
        let summary = format_summary(count, elapsed);
        self.write_or_disable(|out, _| queue!(out, Print("\n"), Print(&summary), Print("\n")));
    }

    fn write_or_disable<F>(&mut self, render: F)
    where
        F: FnOnce(&mut W, bool) -> std::io::Result<()>,
    {
        if self.broken {
            return;
        }
        let result = render(&mut self.out, self.clear_line).and_then(|()| self.out.flush());
        if let Err(err) = result {
            debug!("Progress output disabled: {}", err);
            self.broken = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(bytes: Vec<u8>) -> Result<String, String> {
        String::from_utf8(bytes).map_err(|err| format!("non-utf8 output: {}", err))
    }

    struct FailingWriter {
        attempts: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            self.attempts = self.attempts.saturating_add(1);
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "closed",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn formats_each_outcome_kind() -> Result<(), String> {
        let cases = [
            (RequestOutcome::Success(200), "Request 1: 200"),
            (
                RequestOutcome::Timeout("operation timed out".to_owned()),
                "Request 1: timeout operation timed out",
            ),
            (
                RequestOutcome::Error("dns error".to_owned()),
                "Request 1: error dns error",
            ),
        ];
        for (outcome, expected) in cases {
            let line = format_request_line(1, &outcome);
            if line != expected {
                return Err(format!("expected {:?}, got {:?}", expected, line));
            }
        }
        Ok(())
    }

    #[test]
    fn summary_uses_four_decimals() -> Result<(), String> {
        let line = format_summary(10, Duration::from_millis(1234));
        if line != "Total time for 10 requests: 1.2340 seconds" {
            return Err(format!("Unexpected summary: {}", line));
        }
        let rounded = format_summary(10, Duration::from_micros(56));
        if rounded != "Total time for 10 requests: 0.0001 seconds" {
            return Err(format!("Unexpected summary: {}", rounded));
        }
        Ok(())
    }

    #[test]
    fn writer_emits_carriage_return_redraws_and_summary() -> Result<(), String> {
        let mut buffer = Vec::new();
        let mut writer = ProgressWriter::new(&mut buffer, false);
        writer.record(1, &RequestOutcome::Success(200));
        writer.record(2, &RequestOutcome::Error("refused".to_owned()));
        writer.finish(2, Duration::from_millis(500));
        let output = rendered(buffer)?;
        let expected =
            "\rRequest 1: 200\rRequest 2: error refused\nTotal time for 2 requests: 0.5000 seconds\n";
        if output != expected {
            return Err(format!("expected {:?}, got {:?}", expected, output));
        }
        Ok(())
    }

    #[test]
    fn terminal_mode_clears_line_remainder() -> Result<(), String> {
        let mut buffer = Vec::new();
        let mut writer = ProgressWriter::new(&mut buffer, true);
        writer.record(3, &RequestOutcome::Success(204));
        let output = rendered(buffer)?;
        if output != "\rRequest 3: 204\u{1b}[K" {
            return Err(format!("Unexpected output: {:?}", output));
        }
        Ok(())
    }

    #[test]
    fn write_failure_disables_further_output() -> Result<(), String> {
        let mut failing = FailingWriter { attempts: 0 };
        let mut writer = ProgressWriter::new(&mut failing, false);
        writer.record(1, &RequestOutcome::Success(200));
        writer.record(2, &RequestOutcome::Success(200));
        writer.finish(2, Duration::from_secs(1));
        let attempts = failing.attempts;
        if attempts != 1 {
            return Err(format!("Expected a single write attempt, got {}", attempts));
        }
        Ok(())
    }
}
