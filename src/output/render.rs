//! Record renderer

use crate::error::Result;
use crate::pagination::PageSink;
use crate::types::Record;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable labelled fields
    #[default]
    Pretty,
    /// JSON output (one record per line)
    Json,
}

/// Labelled values of every populated field, in display order
///
/// Empty strings, zero counts and `false` flags are left out.
pub fn populated_fields(record: &Record) -> Vec<(&'static str, String)> {
    let number = |n: u64| (n != 0).then(|| n.to_string());
    let text = |s: &str| (!s.is_empty()).then(|| s.to_string());

    [
        ("ID", number(record.id)),
        ("Name", text(&record.name)),
        ("Status", text(&record.status)),
        ("Expires at", text(&record.expires_at)),
        ("Registration Code", text(&record.regcode)),
        ("Product Class", text(&record.product_classes.join(", "))),
        ("System Count", number(record.systems_count)),
        ("Virtual Count", number(record.virtual_count)),
        ("Identifier", text(&record.identifier)),
        ("Version", text(&record.version)),
        ("Login", text(&record.login)),
        ("Password", text(&record.password)),
        ("Last seen at", text(&record.last_seen_at)),
        ("Distro Target", text(&record.distro_target)),
        ("Url", text(&record.url)),
        (
            "Installer Updates",
            record.installer_updates.then(|| "true".to_string()),
        ),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

/// Writes pages of records in the chosen format
pub struct Renderer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer writing to `out`
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Output format in use
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Consume the renderer, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render one page of records and flush
    pub fn render(&mut self, records: &[Record]) -> Result<()> {
        match self.format {
            OutputFormat::Pretty => self.render_pretty(records)?,
            OutputFormat::Json => self.render_json(records)?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn render_pretty(&mut self, records: &[Record]) -> Result<()> {
        if records.is_empty() {
            writeln!(self.out, "[]")?;
            return Ok(());
        }

        for record in records {
            for (label, value) in populated_fields(record) {
                writeln!(self.out, "\t{label}: {value}")?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn render_json(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            serde_json::to_writer(&mut self.out, record).map_err(std::io::Error::from)?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: Write> PageSink for Renderer<W> {
    fn accept(&mut self, _page: u32, records: &[Record]) -> Result<()> {
        self.render(records)
    }
}

impl<W: Write> std::fmt::Debug for Renderer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
