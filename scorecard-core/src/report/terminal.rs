use std::io::{self, Write};

use colored::Colorize;

use super::{CellOutcome, ReportError, Reporter};

/// A reporter that renders the scorecard grid to the terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalReporter {
    /// Whether to use colors in output (defaults to true).
    use_colors: bool,
}

impl TerminalReporter {
    /// Create a new terminal reporter with default settings.
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create a terminal reporter with color output disabled.
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// Plain text for the assessment column.
    fn assessment_text(outcome: &CellOutcome) -> &'static str {
        if outcome.result.is_error() {
            return "error";
        }
        match outcome.result.score {
            2 => "major gain",
            1 => "minor gain",
            -1 => "minor loss",
            -2 => "major loss",
            _ => "neutral",
        }
    }

    /// Plain text for the score column.
    fn score_text(outcome: &CellOutcome) -> String {
        if outcome.result.is_error() {
            "ERR".to_string()
        } else {
            format!("{:+}", outcome.result.score)
        }
    }

    /// Colorize a score-dependent column value.
    fn colorize(&self, text: String, score: i32, is_error: bool) -> String {
        if !self.use_colors {
            return text;
        }
        if is_error {
            return text.dimmed().to_string();
        }
        match score {
            2 => text.green().bold().to_string(),
            1 => text.green().to_string(),
            -1 => text.red().to_string(),
            -2 => text.red().bold().to_string(),
            _ => text.yellow().to_string(),
        }
    }

    /// Format the p-value column.
    fn format_p_value(outcome: &CellOutcome) -> String {
        if outcome.result.is_error() {
            "-".to_string()
        } else {
            format!("{:.4}", outcome.result.p_value)
        }
    }

    /// Print the table header.
    fn print_header(&self, writer: &mut impl Write, title: &str) -> io::Result<()> {
        writeln!(writer)?;
        if self.use_colors {
            writeln!(writer, "{}", title.bold())?;
        } else {
            writeln!(writer, "{}", title)?;
        }
        let header = format!(
            "{:<32} {:<34} {:>6} {:>10} {:>14}",
            "Cell", "Statistic", "Score", "p-value", "Assessment"
        );
        if self.use_colors {
            writeln!(writer, "{}", header.bold())?;
        } else {
            writeln!(writer, "{}", header)?;
        }
        writeln!(writer, "{}", "-".repeat(100))?;
        Ok(())
    }

    /// Print a single cell row.
    fn print_row(&self, writer: &mut impl Write, outcome: &CellOutcome) -> io::Result<()> {
        let label = if outcome.label.len() > 30 {
            format!("{}...", &outcome.label[..27])
        } else {
            outcome.label.clone()
        };

        let score = outcome.result.score;
        let is_error = outcome.result.is_error();

        let score_plain = Self::score_text(outcome);
        let assessment_plain = Self::assessment_text(outcome);
        let score_colored = self.colorize(score_plain.clone(), score, is_error);
        let assessment_colored = self.colorize(assessment_plain.to_string(), score, is_error);

        // Colored strings carry ANSI escapes, so pad by the visible
        // widths rather than the formatted lengths.
        let score_padding = 6_usize.saturating_sub(score_plain.len());
        let assessment_padding = 14_usize.saturating_sub(assessment_plain.len());

        writeln!(
            writer,
            "{:<32} {:<34} {:>width_score$}{} {:>10} {:>width_assessment$}{}",
            label,
            outcome.statistic,
            "",
            score_colored,
            Self::format_p_value(outcome),
            "",
            assessment_colored,
            width_score = score_padding,
            width_assessment = assessment_padding,
        )?;
        Ok(())
    }

    /// Print the summary footer.
    fn print_summary(
        &self,
        writer: &mut impl Write,
        outcomes: &[CellOutcome],
    ) -> io::Result<()> {
        let mut improved = 0;
        let mut degraded = 0;
        let mut neutral = 0;
        let mut errors = 0;

        for outcome in outcomes {
            if outcome.result.is_error() {
                errors += 1;
            } else if outcome.result.score > 0 {
                improved += 1;
            } else if outcome.result.score < 0 {
                degraded += 1;
            } else {
                neutral += 1;
            }
        }

        writeln!(writer)?;
        writeln!(writer, "{}", "-".repeat(100))?;

        let summary_label = "Summary:";
        if self.use_colors {
            write!(writer, "{} ", summary_label.bold())?;
        } else {
            write!(writer, "{} ", summary_label)?;
        }

        let improved_text = format!("{} improved", improved);
        let degraded_text = format!("{} degraded", degraded);
        let neutral_text = format!("{} neutral", neutral);
        let errors_text = format!("{} error", errors);

        if self.use_colors {
            writeln!(
                writer,
                "{}, {}, {}, {}",
                improved_text.green(),
                degraded_text.red(),
                neutral_text.yellow(),
                errors_text.dimmed()
            )?;
        } else {
            writeln!(
                writer,
                "{}, {}, {}, {}",
                improved_text, degraded_text, neutral_text, errors_text
            )?;
        }

        writeln!(writer)?;
        Ok(())
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, title: &str, outcomes: &[CellOutcome]) -> Result<(), ReportError> {
        let stdout = io::stdout();
        let mut writer = stdout.lock();

        self.print_header(&mut writer, title)?;

        for outcome in outcomes {
            self.print_row(&mut writer, outcome)?;
        }

        self.print_summary(&mut writer, outcomes)?;

        Ok(())
    }
}
