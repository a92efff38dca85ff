use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use super::{BenchmarkEntry, CombinedReport, ReportError, Reporter};
use crate::stats::{PerformanceCategory, SummaryRecord};

const TABLE_WIDTH: usize = 112;

/// A reporter that prints the combined report as a table on the terminal.
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

    /// Format a duration in milliseconds to a human-readable string.
    fn format_time(ms: f64) -> String {
        if ms >= 1_000.0 {
            format!("{:.3} s", ms / 1_000.0)
        } else if ms >= 1.0 {
            format!("{:.3} ms", ms)
        } else if ms >= 0.001 {
            format!("{:.3} us", ms * 1_000.0)
        } else {
            format!("{:.3} ns", ms * 1_000_000.0)
        }
    }

    fn paint(&self, text: String, category: PerformanceCategory) -> String {
        if !self.use_colors {
            return text;
        }
        let painted: ColoredString = match category {
            PerformanceCategory::Excellent => text.green().bold(),
            PerformanceCategory::Good => text.green(),
            PerformanceCategory::Acceptable => text.yellow(),
            PerformanceCategory::Slow => text.red(),
            PerformanceCategory::VerySlow => text.red().bold(),
        };
        painted.to_string()
    }

    /// Print the report header and table header.
    fn print_header(&self, writer: &mut dyn Write, report: &CombinedReport) -> io::Result<()> {
        let title = format!(
            "FlexonDB {} benchmark report ({})",
            report.metadata.flexondb_version, report.metadata.output_directory
        );
        if self.use_colors {
            writeln!(writer, "{}", title.bold())?;
        } else {
            writeln!(writer, "{}", title)?;
        }
        writeln!(
            writer,
            "Generated at {}, {} file(s) processed",
            report.metadata.generated_at, report.metadata.total_files_processed
        )?;
        writeln!(writer)?;

        let header = format!(
            "{:<20} {:>14} {:>14} {:>14} {:>14} {:>8} {:>12}",
            "Benchmark", "Mean", "Std Dev", "Min", "Max", "Runs", "Category"
        );
        if self.use_colors {
            writeln!(writer, "{}", header.bold())?;
        } else {
            writeln!(writer, "{}", header)?;
        }
        writeln!(writer, "{}", "-".repeat(TABLE_WIDTH))?;
        Ok(())
    }

    /// Print a single benchmark row.
    fn print_row(&self, writer: &mut dyn Write, name: &str, entry: &BenchmarkEntry) -> io::Result<()> {
        let name = if name.len() > 20 {
            format!("{}...", name.chars().take(17).collect::<String>())
        } else {
            name.to_string()
        };
        let stats = &entry.statistics;
        // Pad before painting so escape codes do not skew the column width.
        let category = self.paint(
            format!("{:>12}", entry.performance_category.as_str()),
            entry.performance_category,
        );

        writeln!(
            writer,
            "{:<20} {:>14} {:>14} {:>14} {:>14} {:>8} {}",
            name,
            Self::format_time(stats.mean_ms),
            Self::format_time(stats.stddev_ms),
            Self::format_time(stats.min_ms),
            Self::format_time(stats.max_ms),
            stats.runs,
            category,
        )
    }

    /// Print the summary footer.
    fn print_summary(&self, writer: &mut dyn Write, summary: &SummaryRecord) -> io::Result<()> {
        writeln!(writer, "{}", "-".repeat(TABLE_WIDTH))?;

        let summary_label = "Summary:";
        if self.use_colors {
            write!(writer, "{} ", summary_label.bold())?;
        } else {
            write!(writer, "{} ", summary_label)?;
        }
        writeln!(
            writer,
            "{} benchmark(s), {} run(s), fastest {}, slowest {}, average {}",
            summary.total_benchmarks,
            summary.total_test_runs,
            Self::format_time(summary.fastest_operation),
            Self::format_time(summary.slowest_operation),
            Self::format_time(summary.average_time_ms),
        )?;

        let distribution: Vec<String> = PerformanceCategory::ALL
            .iter()
            .map(|category| {
                let count = summary.performance_distribution.count(*category);
                self.paint(format!("{} {}", count, category), *category)
            })
            .collect();
        writeln!(writer, "{}", distribution.join(", "))?;
        writeln!(writer)?;
        Ok(())
    }
}

impl Reporter for TerminalReporter {
    fn write_report(
        &self,
        writer: &mut dyn Write,
        report: &CombinedReport,
    ) -> Result<(), ReportError> {
        self.print_header(writer, report)?;

        for (name, entry) in &report.benchmarks {
            self.print_row(writer, name, entry)?;
        }

        match &report.summary {
            Some(summary) => self.print_summary(writer, summary)?,
            None => writeln!(writer, "No benchmarks collected.")?,
        }

        Ok(())
    }
}
