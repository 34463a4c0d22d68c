//! Integration tests for the report builder: introduction rendering, heading
//! synthesis, TOC bookkeeping and placement, and table rendering.

use std::collections::HashMap;

use quakeval_report::error::ReportError;
use quakeval_report::ReportBuilder;

fn intro_fields() -> HashMap<String, String> {
    let mut fields = HashMap::new();
    fields.insert("simulation_name".to_string(), "Landers Mainshock".to_string());
    fields.insert("forecast_name".to_string(), "UCERF3-ETAS".to_string());
    fields.insert("origin_time".to_string(), "1992-06-28 11:57:34 UTC".to_string());
    fields.insert("evaluation_time".to_string(), "1992-07-28 11:57:34 UTC".to_string());
    fields.insert("catalog_source".to_string(), "ComCat".to_string());
    fields.insert("num_simulations".to_string(), "10000".to_string());
    fields
}

// ---------------------------------------------------------------------------
// Introduction
// ---------------------------------------------------------------------------

#[test]
fn introduction_renders_all_fields_verbatim() {
    let mut builder = ReportBuilder::new();
    builder.add_introduction(&intro_fields()).unwrap();

    assert_eq!(builder.cells().len(), 1);
    let source = &builder.cells()[0].source;
    for value in intro_fields().values() {
        assert!(source.contains(value), "missing value '{}' in header", value);
    }
    assert!(source.starts_with("# "), "header should open with a title line");
    assert!(builder.has_introduction());
}

#[test]
fn introduction_missing_field_errors() {
    let mut fields = intro_fields();
    fields.remove("catalog_source");

    let mut builder = ReportBuilder::new();
    let err = builder.add_introduction(&fields).unwrap_err();
    match err {
        ReportError::MissingField(key) => assert_eq!(key, "catalog_source"),
        other => panic!("expected MissingField, got {:?}", other),
    }
    // a failed call must not append anything or mark the introduction present
    assert!(builder.cells().is_empty());
    assert!(!builder.has_introduction());
}

#[test]
fn duplicate_introduction_appends_second_header() {
    let mut builder = ReportBuilder::new();
    builder.add_introduction(&intro_fields()).unwrap();
    builder.add_introduction(&intro_fields()).unwrap();
    assert_eq!(builder.cells().len(), 2);
}

#[test]
fn introduction_records_no_toc_entry() {
    let mut builder = ReportBuilder::new();
    builder.add_introduction(&intro_fields()).unwrap();
    assert!(builder.toc().is_empty());
}

// ---------------------------------------------------------------------------
// Heading synthesis and anchors
// ---------------------------------------------------------------------------

#[test]
fn sub_heading_line_has_level_markers_and_anchor() {
    let mut builder = ReportBuilder::new();
    builder.add_sub_heading("Evaluation Summary", 3, "All tests passed.");

    let source = &builder.cells()[0].source;
    let first_line = source.lines().next().unwrap();
    assert_eq!(
        first_line,
        "### Evaluation Summary <a name=\"evaluation_summary\"></a>"
    );
    assert!(source.ends_with("All tests passed."));
}

#[test]
fn sub_heading_multi_line_body_one_line_per_entry() {
    let mut builder = ReportBuilder::new();
    let body = vec!["first line".to_string(), "second line".to_string()];
    builder.add_sub_heading("Notes", 2, body);

    let lines: Vec<&str> = builder.cells()[0].source.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "first line");
    assert_eq!(lines[2], "second line");
}

#[test]
fn anchor_is_lowercased_with_underscores() {
    let mut builder = ReportBuilder::new();
    builder.add_sub_heading("N-Test Result Plot", 1, "body");
    assert_eq!(builder.toc()[0].anchor, "n-test_result_plot");
}

#[test]
fn heading_level_is_not_validated() {
    // permissive by design: out-of-range levels pass straight through
    let mut builder = ReportBuilder::new();
    builder.add_sub_heading("Too Deep", 7, "body");
    assert!(builder.cells()[0].source.starts_with("####### Too Deep"));

    builder.add_sub_heading("No Markers", 0, "body");
    assert!(builder.cells()[1].source.starts_with(" No Markers"));
}

// ---------------------------------------------------------------------------
// Result figures
// ---------------------------------------------------------------------------

#[test]
fn single_path_renders_bare_image_embed() {
    let mut builder = ReportBuilder::new();
    builder.add_result_figure("X", 2, "a.png");

    let source = &builder.cells()[0].source;
    let lines: Vec<&str> = source.lines().collect();
    assert_eq!(lines[0], "## X  <a name=\"x\"></a>");
    // a one-cell row is a bare embed, not a table-wrapped cell
    assert_eq!(*lines.last().unwrap(), "![](a.png)");
}

#[test]
fn image_rows_render_header_then_cells() {
    let mut builder = ReportBuilder::new();
    let rows = vec![vec!["a.png".to_string(), "b.png".to_string()]];
    builder.add_result_figure("Pair", 2, rows);

    let source = &builder.cells()[0].source;
    let lines: Vec<&str> = source.lines().collect();
    // header separator synthesized from the first row: one empty header cell
    // and one divider cell per column
    assert_eq!(lines[2], "| | |");
    assert_eq!(lines[3], "| --- | --- |");
    let row_line = *lines.last().unwrap();
    assert!(row_line.contains("![](a.png)"));
    assert!(row_line.contains("![](b.png)"));
    assert!(row_line.starts_with('|') && row_line.ends_with('|'));
}

#[test]
fn later_rows_have_no_header_separator() {
    let mut builder = ReportBuilder::new();
    let rows = vec![
        vec!["a.png".to_string(), "b.png".to_string()],
        vec!["c.png".to_string(), "d.png".to_string()],
    ];
    builder.add_result_figure("Grid", 2, rows);

    let source = &builder.cells()[0].source;
    assert_eq!(source.matches("---").count(), 2, "one divider cell per column, once");
}

// ---------------------------------------------------------------------------
// TOC bookkeeping and placement
// ---------------------------------------------------------------------------

#[test]
fn toc_entries_follow_append_order() {
    let mut builder = ReportBuilder::new();
    builder.add_introduction(&intro_fields()).unwrap();
    builder.add_result_figure("First Figure", 2, "a.png");
    builder.add_sub_heading("Second Section", 1, "text");
    builder.add_result_figure("Third Figure", 3, "b.png");

    let titles: Vec<&str> = builder.toc().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["First Figure", "Second Section", "Third Figure"]);
}

#[test]
fn toc_inserted_after_introduction() {
    let mut builder = ReportBuilder::new();
    builder.add_introduction(&intro_fields()).unwrap();
    builder.add_sub_heading("Section", 1, "text");

    let nb = builder.into_notebook();
    assert_eq!(nb.cells.len(), 3);
    assert!(nb.cells[0].source.starts_with("# Forecast Testing Results"));
    assert!(nb.cells[1].source.starts_with("# Table of Contents"));
    assert!(nb.cells[2].source.starts_with("# Section"));
}

#[test]
fn toc_inserted_at_start_without_introduction() {
    let mut builder = ReportBuilder::new();
    builder.add_sub_heading("Section", 1, "text");

    let nb = builder.into_notebook();
    assert_eq!(nb.cells.len(), 2);
    assert!(nb.cells[0].source.starts_with("# Table of Contents"));
}

#[test]
fn toc_entries_indent_by_level() {
    let mut builder = ReportBuilder::new();
    builder.add_sub_heading("Top", 1, "text");
    builder.add_sub_heading("Nested", 3, "text");

    let nb = builder.into_notebook();
    let toc: Vec<&str> = nb.cells[0].source.lines().collect();
    assert_eq!(toc[0], "# Table of Contents");
    assert_eq!(toc[1], "1. [Top](#top)");
    // level 3 indents by two indent units; markers stay ordinal "1."
    assert_eq!(toc[2], "      1. [Nested](#nested)");
}

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

#[test]
fn render_table_header_and_body_cells() {
    let data = vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["1".to_string(), "2".to_string()],
        vec!["3".to_string(), "4".to_string()],
    ];
    let table = ReportBuilder::render_table(&data, true).unwrap();
    assert!(table.contains("<th>a</th><th>b</th>"));
    assert!(table.contains("<td>1</td><td>2</td>"));
    assert!(table.contains("<td>3</td><td>4</td>"));
    assert!(table.starts_with("<div class=\"table table-striped\"><table>"));
    assert!(table.ends_with("</table></div>"));
}

#[test]
fn render_table_without_header_uses_body_cells_throughout() {
    let data = vec![vec!["a".to_string()], vec!["1".to_string()]];
    let table = ReportBuilder::render_table(&data, false).unwrap();
    assert!(!table.contains("<th>"));
    assert!(table.contains("<td>a</td>"));
}

#[test]
fn render_table_empty_input_errors() {
    let data: Vec<Vec<String>> = Vec::new();
    match ReportBuilder::render_table(&data, true) {
        Err(ReportError::EmptyTable) => {}
        other => panic!("expected EmptyTable, got {:?}", other),
    }
}

#[test]
fn render_table_does_not_enforce_rectangularity() {
    // permissive by design: ragged rows render with their own widths
    let data = vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["only".to_string()],
    ];
    let table = ReportBuilder::render_table(&data, true).unwrap();
    assert!(table.contains("<td>only</td>"));
}
