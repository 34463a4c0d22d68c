//! Accumulating report document builder.
//!
//! The builder appends markdown cells in caller order, records heading
//! metadata as it goes, and synthesizes the table of contents when the report
//! is finalized. Finalization consumes the builder, so a report can only be
//! written once and no content can be appended afterwards.
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};
use maud::html;

use crate::error::ReportError;
use crate::notebook::{Cell, Notebook};

/// Required keys for [`ReportBuilder::add_introduction`], in render order.
const INTRODUCTION_FIELDS: [&str; 6] = [
    "simulation_name",
    "forecast_name",
    "origin_time",
    "evaluation_time",
    "catalog_source",
    "num_simulations",
];

/// One table-of-contents entry, recorded per heading in append order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub title: String,
    pub level: u8,
    pub anchor: String,
}

/// File paths feeding a result figure: either one image, or rows of images
/// rendered as a table.
#[derive(Debug, Clone)]
pub enum FigurePaths {
    Single(String),
    Rows(Vec<Vec<String>>),
}

impl From<&str> for FigurePaths {
    fn from(path: &str) -> Self {
        FigurePaths::Single(path.to_string())
    }
}

impl From<String> for FigurePaths {
    fn from(path: String) -> Self {
        FigurePaths::Single(path)
    }
}

impl From<Vec<Vec<String>>> for FigurePaths {
    fn from(rows: Vec<Vec<String>>) -> Self {
        FigurePaths::Rows(rows)
    }
}

/// Body content for a subheading: one line or several, one per output line.
#[derive(Debug, Clone)]
pub enum Body {
    SingleLine(String),
    MultiLine(Vec<String>),
}

impl From<&str> for Body {
    fn from(line: &str) -> Self {
        Body::SingleLine(line.to_string())
    }
}

impl From<String> for Body {
    fn from(line: String) -> Self {
        Body::SingleLine(line)
    }
}

impl From<Vec<String>> for Body {
    fn from(lines: Vec<String>) -> Self {
        Body::MultiLine(lines)
    }
}

impl Body {
    fn into_lines(self) -> Vec<String> {
        match self {
            Body::SingleLine(line) => vec![line],
            Body::MultiLine(lines) => lines,
        }
    }
}

/// Builds a forecast evaluation report as an ordered notebook document.
#[derive(Debug)]
pub struct ReportBuilder {
    nb: Notebook,
    outname: String,
    toc: Vec<TocEntry>,
    has_introduction: bool,
}

impl ReportBuilder {
    /// Create a builder writing to the default output name `results.ipynb`.
    pub fn new() -> Self {
        Self::with_outname("results.ipynb")
    }

    /// Create a builder with a caller-supplied output file name.
    pub fn with_outname<S: Into<String>>(outname: S) -> Self {
        Self {
            nb: Notebook::new(),
            outname: outname.into(),
            toc: Vec::new(),
            has_introduction: false,
        }
    }

    /// Append the report header cell rendered from the six required fields.
    ///
    /// All of `simulation_name`, `forecast_name`, `origin_time`,
    /// `evaluation_time`, `catalog_source` and `num_simulations` must be
    /// present. Calling this twice appends a second header cell; the TOC
    /// placement only tracks whether at least one introduction exists.
    pub fn add_introduction(&mut self, fields: &HashMap<String, String>) -> Result<(), ReportError> {
        for key in INTRODUCTION_FIELDS {
            if !fields.contains_key(key) {
                return Err(ReportError::MissingField(key.to_string()));
            }
        }
        let header = format!(
            "# Forecast Testing Results: {}  \n\
             **Forecast Name:** {}  \n\
             **Simulation Start Time:** {}  \n\
             **Evaluation Time:** {}  \n\
             **Catalog Source:** {}  \n\
             **Number Simulations:** {}",
            fields["simulation_name"],
            fields["forecast_name"],
            fields["origin_time"],
            fields["evaluation_time"],
            fields["catalog_source"],
            fields["num_simulations"],
        );
        self.has_introduction = true;
        self.nb.cells.push(Cell::markdown(header));
        debug!("Added report introduction for '{}'", fields["simulation_name"]);
        Ok(())
    }

    /// Append a headed cell embedding one or more result images.
    ///
    /// A single path renders as a bare image embed; rows of paths render as a
    /// markdown table of images, with a header separator synthesized from the
    /// first row's width. Records one TOC entry for the heading.
    pub fn add_result_figure<P: Into<FigurePaths>>(&mut self, title: &str, level: u8, paths: P) {
        let figures = match paths.into() {
            FigurePaths::Single(path) => vec![vec![path]],
            FigurePaths::Rows(rows) => rows,
        };

        let anchor = make_anchor(title);
        let mut lines = Vec::new();
        lines.push(format!(
            "{} {}  <a name=\"{}\"></a>\n",
            heading_markers(level),
            title,
            anchor
        ));
        for (i, row) in figures.iter().enumerate() {
            if i == 0 {
                lines.push(table_header_separator(row.len()));
            }
            lines.push(image_row(row));
        }

        self.nb.cells.push(Cell::markdown(lines.join("\n")));
        self.toc.push(TocEntry {
            title: title.to_string(),
            level,
            anchor,
        });
        debug!("Added result figure '{}' at level {}", title, level);
    }

    /// Append a headed cell with plain text content, one line per entry.
    ///
    /// Records one TOC entry for the heading, exactly like
    /// [`add_result_figure`](Self::add_result_figure).
    pub fn add_sub_heading<B: Into<Body>>(&mut self, title: &str, level: u8, text: B) {
        let anchor = make_anchor(title);
        let mut lines = Vec::new();
        lines.push(format!(
            "{} {} <a name=\"{}\"></a>",
            heading_markers(level),
            title,
            anchor
        ));
        lines.extend(text.into().into_lines());

        self.nb.cells.push(Cell::markdown(lines.join("\n")));
        self.toc.push(TocEntry {
            title: title.to_string(),
            level,
            anchor,
        });
        debug!("Added subheading '{}' at level {}", title, level);
    }

    /// Render a rectangular data grid as a styled HTML table fragment.
    ///
    /// When `use_header` is set the first row renders with header cells.
    /// The fragment is meant to be embedded as subheading body content. Row
    /// lengths are not checked; ragged input renders as ragged rows.
    pub fn render_table<T: fmt::Display>(
        data: &[Vec<T>],
        use_header: bool,
    ) -> Result<String, ReportError> {
        if data.is_empty() {
            return Err(ReportError::EmptyTable);
        }
        let markup = html! {
            div class="table table-striped" {
                table {
                    @for (i, row) in data.iter().enumerate() {
                        tr {
                            @for item in row {
                                @if i == 0 && use_header {
                                    th { (item) }
                                } @else {
                                    td { (item) }
                                }
                            }
                        }
                    }
                }
            }
        };
        Ok(markup.into_string())
    }

    /// Cells appended so far, in document order. The TOC cell is not present
    /// until finalization.
    pub fn cells(&self) -> &[Cell] {
        &self.nb.cells
    }

    /// TOC entries recorded so far, in append order.
    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    pub fn has_introduction(&self) -> bool {
        self.has_introduction
    }

    /// Output file name this builder will write on finalization.
    pub fn outname(&self) -> &str {
        &self.outname
    }

    /// Synthesize the TOC cell and assemble the finished document.
    ///
    /// The TOC lists every recorded heading in append order, indented by
    /// `level - 1` indent units, and is inserted immediately after the
    /// introduction when one exists, else at the document start. Consumes the
    /// builder; no content can be added afterwards.
    pub fn into_notebook(mut self) -> Notebook {
        let mut toc_lines = Vec::with_capacity(self.toc.len() + 1);
        toc_lines.push("# Table of Contents".to_string());
        for entry in &self.toc {
            let indent = "   ".repeat(usize::from(entry.level.saturating_sub(1)));
            toc_lines.push(format!("{}1. [{}](#{})", indent, entry.title, entry.anchor));
        }

        let insert_at = if self.has_introduction { 1 } else { 0 };
        self.nb.cells.insert(insert_at, Cell::markdown(toc_lines.join("\n")));
        self.nb
    }

    /// Assemble the document and write it to `save_dir` under the configured
    /// output name. Returns the written path.
    pub fn finalize(self, save_dir: &Path) -> Result<PathBuf, ReportError> {
        let path = save_dir.join(&self.outname);
        let cell_count = self.nb.cells.len() + 1;
        self.into_notebook().write(&path)?;
        info!("Wrote report with {} cells to {}", cell_count, path.display());
        Ok(path)
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Anchor derivation: lowercase the title and replace spaces with
/// underscores. Anchors are stable per title but not deduplicated.
fn make_anchor(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}

fn heading_markers(level: u8) -> String {
    "#".repeat(usize::from(level))
}

/// Markdown table header separator with one empty header cell per column.
fn table_header_separator(columns: usize) -> String {
    let mut top = String::from("|");
    let mut bottom = String::from("|");
    for _ in 0..columns {
        top.push_str(" |");
        bottom.push_str(" --- |");
    }
    format!("{}\n{}", top, bottom)
}

/// One-image rows embed bare; wider rows become a `|`-delimited image row.
fn image_row(row: &[String]) -> String {
    if row.len() == 1 {
        return format!("![]({})", row[0]);
    }
    let mut line = String::from("| ");
    for item in row {
        line.push_str(&format!(" ![]({}) |", item));
    }
    line
}
