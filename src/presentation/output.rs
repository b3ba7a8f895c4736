//! Output Rendering
//!
//! Final reports for `ingest` and `status`, as text or JSON.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::application::{IngestReport, StatusReport};
use crate::domain::services::LineChange;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[WARN]",
        }
    }
}

/// Trait for rendering run results
pub trait ReportRenderer {
    /// Summary of an ingest run; `show_diff` appends the ledger diff
    fn render_ingest(&self, out: &mut dyn Write, report: &IngestReport, show_diff: bool)
        -> io::Result<()>;

    /// Ledger status table
    fn render_status(&self, out: &mut dyn Write, report: &StatusReport) -> io::Result<()>;
}

/// Text renderer
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }
}

impl ReportRenderer for TextRenderer {
    fn render_ingest(
        &self,
        out: &mut dyn Write,
        report: &IngestReport,
        show_diff: bool,
    ) -> io::Result<()> {
        let icons = self.icons();

        writeln!(out)?;
        writeln!(out, "--- Ingestion Complete ---")?;
        writeln!(out, "Matches found: {}", report.matched.len())?;
        writeln!(out, "New assignments (Overwrites): {}", report.allocated.len())?;
        writeln!(out, "Total processed: {}", report.processed())?;

        if !report.unresolved.is_empty() {
            writeln!(
                out,
                "{} {} asset(s) had no free slot",
                self.paint(icons.cross, Color::Red),
                report.unresolved.len()
            )?;
        }

        match report.complete_count {
            Some(count) => writeln!(
                out,
                "{} Ledger: {}/{} complete",
                self.paint(icons.check, Color::Green),
                count,
                report.declared_total
            )?,
            None => writeln!(
                out,
                "{} Ledger has no summary line; left as is",
                self.paint(icons.warn, Color::Yellow)
            )?,
        }

        if report.dry_run {
            writeln!(
                out,
                "{} Dry run: no files copied, ledger not written ({})",
                self.paint(icons.warn, Color::Yellow),
                report.ledger_diff.summary()
            )?;
        }

        if show_diff && report.ledger_diff.has_changes() {
            writeln!(out)?;
            for line in report.ledger_diff.unified().lines() {
                let colored = match line.chars().next() {
                    Some('+') if !line.starts_with("+++") => self.paint(line, Color::Green),
                    Some('-') if !line.starts_with("---") => self.paint(line, Color::Red),
                    Some('@') => self.paint(line, Color::Cyan),
                    _ => line.to_string(),
                };
                writeln!(out, "{}", colored)?;
            }
        }

        Ok(())
    }

    fn render_status(&self, out: &mut dyn Write, report: &StatusReport) -> io::Result<()> {
        let icons = self.icons();

        writeln!(out, "Ledger: {}", report.ledger_path.display())?;
        writeln!(out)?;
        for tier in &report.tiers {
            let label = format!("Tier {} ({})", tier.tier.number(), tier.tier.label());
            writeln!(out, "  {:<24} {:>4}/{:<4}", label, tier.complete, tier.total)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "  {} of {} slots complete (declared total {})",
            report.complete_count, report.slot_count, report.declared_total
        )?;

        match report.stated {
            Some(_) if report.summary_in_sync() => writeln!(
                out,
                "{} Summary line is up to date",
                self.paint(icons.check, Color::Green)
            ),
            Some((stated, _)) => writeln!(
                out,
                "{} Summary line says {}, ledger has {}; run `icon-ingest ingest` to refresh",
                self.paint(icons.warn, Color::Yellow),
                stated,
                report.complete_count
            ),
            None => writeln!(
                out,
                "{} No summary line found",
                self.paint(icons.warn, Color::Yellow)
            ),
        }
    }
}

/// JSON renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    /// The NDJSON event stream already describes the run; only the diff is added.
    fn render_ingest(
        &self,
        out: &mut dyn Write,
        report: &IngestReport,
        show_diff: bool,
    ) -> io::Result<()> {
        if !show_diff {
            return Ok(());
        }
        let changes: Vec<serde_json::Value> = report
            .ledger_diff
            .changed_lines()
            .iter()
            .map(|line| {
                let change = match line.change {
                    LineChange::Added => "added",
                    LineChange::Removed => "removed",
                    LineChange::Unchanged => "unchanged",
                };
                serde_json::json!({
                    "change": change,
                    "line": line.line_number,
                    "content": line.content,
                })
            })
            .collect();
        let json = serde_json::json!({
            "event": "ledger_diff",
            "command": "ingest",
            "changes": changes,
        });
        writeln!(out, "{}", json)
    }

    fn render_status(&self, out: &mut dyn Write, report: &StatusReport) -> io::Result<()> {
        let tiers: Vec<serde_json::Value> = report
            .tiers
            .iter()
            .map(|t| {
                serde_json::json!({
                    "tier": t.tier.number(),
                    "label": t.tier.label(),
                    "folder": t.tier.folder_name(),
                    "total": t.total,
                    "complete": t.complete,
                })
            })
            .collect();
        let json = serde_json::json!({
            "ledger": report.ledger_path.display().to_string(),
            "slot_count": report.slot_count,
            "complete_count": report.complete_count,
            "declared_total": report.declared_total,
            "stated_complete": report.stated.map(|(c, _)| c),
            "summary_in_sync": report.summary_in_sync(),
            "tiers": tiers,
        });
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        )
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, color: bool, unicode: bool) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { color, unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
