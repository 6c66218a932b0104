
use gamma_exposure::error::PipelineError;
use gamma_exposure::model::table::{GAMMA_EXPOSURE, GAMMA_SCALED};
use gamma_exposure::model::{Cell, ChartSettings, SelectionRequest};
use gamma_exposure::pipeline::{self, Stage};
use gamma_exposure::{ingest, render};

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

use xlsx_common::*;

fn numbers(table: &gamma_exposure::model::OptionsTable, column: &str) -> Vec<f64> {
    table
        .column(column)
        .unwrap()
        .map(|c| c.as_number().unwrap())
        .collect()
}

// ── Ingestion ────────────────────────────────────────────────────────

#[test]
fn test_reads_first_sheet_with_header() {
    let table = ingest::read_xlsx(&sample_chain()).unwrap();
    assert_eq!(table.columns(), &CHAIN_COLUMNS);
    assert_eq!(table.row_count(), 4);
    assert_eq!(table.rows()[1][2], Cell::from("Call"));
    assert_eq!(table.rows()[1][0], Cell::Number(100.0));
}

#[test]
fn test_blank_rows_are_skipped() {
    let bytes = workbook(
        &["Gamma", "Delta", "Vanna"],
        &[
            vec![0.1.into(), 0.5.into(), 0.2.into()],
            vec![Cell::Empty, Cell::Empty, Cell::Empty],
            vec![0.2.into(), 0.4.into(), 0.1.into()],
        ],
    );
    let table = ingest::read_xlsx(&bytes).unwrap();
    assert_eq!(table.row_count(), 2);
}

#[test]
fn test_date_cells_become_iso_text() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm");

    let expiry = ExcelDateTime::from_ymd(2025, 1, 17).unwrap();
    let expiry_open = ExcelDateTime::from_ymd(2025, 1, 17)
        .unwrap()
        .and_hms(9, 30, 0)
        .unwrap();

    sheet.write_string(0, 0, "Expiration").unwrap();
    sheet.write_string(0, 1, "Quoted_At").unwrap();
    sheet.write_datetime_with_format(1, 0, &expiry, &date_format).unwrap();
    sheet.write_datetime_with_format(1, 1, &expiry_open, &datetime_format).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let table = ingest::read_xlsx(&bytes).unwrap();
    assert_eq!(
        table.rows()[0],
        vec![Cell::from("2025-01-17"), Cell::from("2025-01-17 09:30:00")]
    );
}

#[test]
fn test_blank_header_named_by_sheet_column() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    // Column A stays empty; the table starts at B.
    sheet.write_string(0, 1, "Gamma").unwrap();
    sheet.write_string(0, 3, "Delta").unwrap();
    sheet.write_string(0, 4, "Vanna").unwrap();
    sheet.write_number(1, 1, 0.1).unwrap();
    sheet.write_string(1, 2, "note").unwrap();
    sheet.write_number(1, 3, 0.5).unwrap();
    sheet.write_number(1, 4, 0.2).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let table = ingest::read_xlsx(&bytes).unwrap();
    assert_eq!(table.columns(), &["Gamma", "Unnamed: 2", "Delta", "Vanna"]);
    assert_eq!(table.rows()[0][1], Cell::from("note"));
}

#[test]
fn test_sheet_without_cells_fails_validation_listing_all() {
    let bytes = workbook(&[], &[]);
    let run = pipeline::run(&bytes, &SelectionRequest::default(), &ChartSettings::default());
    assert_eq!(run.stage, Stage::Parsed);
    assert_eq!(
        run.error(),
        Some(&PipelineError::Schema {
            missing: vec!["Gamma".into(), "Delta".into(), "Vanna".into()],
        })
    );
}

#[test]
fn test_truncated_workbook_is_parse_error() {
    let bytes = sample_chain();
    let run = pipeline::run(
        &bytes[..bytes.len() / 2],
        &SelectionRequest::default(),
        &ChartSettings::default(),
    );
    assert_eq!(run.stage, Stage::FileReceived);
    assert_eq!(run.error().unwrap().kind(), "parse_error");
}

// ── Validation & transform ───────────────────────────────────────────

#[test]
fn test_missing_gamma_reports_exactly_gamma() {
    let bytes = workbook(&["Delta", "Vanna"], &[vec![0.5.into(), 0.1.into()]]);
    let run = pipeline::run(&bytes, &SelectionRequest::default(), &ChartSettings::default());
    assert_eq!(
        run.table.unwrap_err(),
        PipelineError::Schema {
            missing: vec!["Gamma".into()]
        }
    );
}

#[test]
fn test_all_zero_gamma_is_computation_error() {
    let bytes = workbook(
        &CHAIN_COLUMNS,
        &[
            option_row(95.0, "Put", "OTM", -0.28, 0.0, -0.12),
            option_row(100.0, "Call", "ATM", 0.52, 0.0, 0.02),
        ],
    );
    let run = pipeline::run(&bytes, &SelectionRequest::default(), &ChartSettings::default());
    assert_eq!(run.stage, Stage::Validated);
    assert_eq!(run.error().unwrap().kind(), "computation_error");
    assert!(run.chart.is_err());
}

#[test]
fn test_text_gamma_identifies_row() {
    let mut rows = vec![
        option_row(95.0, "Put", "OTM", -0.28, -0.03, -0.12),
        option_row(100.0, "Call", "ATM", 0.52, 0.06, 0.02),
    ];
    rows[1][5] = Cell::from("n/a");
    let bytes = workbook(&CHAIN_COLUMNS, &rows);
    let run = pipeline::run(&bytes, &SelectionRequest::default(), &ChartSettings::default());
    assert_eq!(
        run.error(),
        Some(&PipelineError::Type {
            column: "Gamma".into(),
            row: 2,
            value: "\"n/a\"".into(),
        })
    );
}

#[test]
fn test_scaled_values() {
    let run = pipeline::run(&sample_chain(), &SelectionRequest::default(), &ChartSettings::default());
    let table = run.table.unwrap();
    assert_eq!(numbers(&table, GAMMA_EXPOSURE), vec![0.031, 0.062, 0.062, 0.0155]);
    assert_eq!(numbers(&table, GAMMA_SCALED), vec![0.5, 1.0, 1.0, 0.25]);
}

#[test]
fn test_header_only_sheet_flows_through() {
    let bytes = workbook(&CHAIN_COLUMNS, &[]);
    let run = pipeline::run(&bytes, &SelectionRequest::default(), &ChartSettings::default());
    assert!(run.is_ok(), "{:?}", run.error());
    let table = run.table.unwrap();
    assert!(table.is_empty());

    let figure = render::figure(&table, &run.chart.unwrap());
    assert!(figure["data"].as_array().unwrap().is_empty());
}

// ── Configuration ────────────────────────────────────────────────────

#[test]
fn test_default_selection() {
    let run = pipeline::run(&sample_chain(), &SelectionRequest::default(), &ChartSettings::default());
    let spec = run.chart.unwrap();
    assert_eq!(
        (spec.x.as_str(), spec.y.as_str(), spec.color.as_str(), spec.hover_name.as_str()),
        ("Delta", "Vanna", "Moneyness", "Option_Type")
    );
    assert_eq!(spec.size, "GammaScaled");
    assert_eq!(spec.size_max, 40);
    assert_eq!(spec.hover_data, CHAIN_COLUMNS.to_vec());
}

#[test]
fn test_missing_moneyness_needs_substitute() {
    let header = ["Strike", "Option_Type", "Delta", "Gamma", "Vanna"];
    let rows = vec![vec![
        100.0.into(),
        "Call".into(),
        0.5.into(),
        0.06.into(),
        0.02.into(),
    ]];
    let bytes = workbook(&header, &rows);

    let run = pipeline::run(&bytes, &SelectionRequest::default(), &ChartSettings::default());
    assert_eq!(run.stage, Stage::Transformed);
    assert_eq!(
        run.error(),
        Some(&PipelineError::UnresolvedColumn {
            role: "Color By".into(),
            column: "Moneyness".into(),
        })
    );

    let request = SelectionRequest {
        color: Some("Strike".into()),
        ..Default::default()
    };
    let run = pipeline::run(&bytes, &request, &ChartSettings::default());
    assert!(run.is_ok());
}

#[test]
fn test_rerun_is_identical() {
    let bytes = sample_chain();
    let request = SelectionRequest {
        x: Some("Strike".into()),
        ..Default::default()
    };
    let settings = ChartSettings::new(70, true).unwrap();
    let first = pipeline::run(&bytes, &request, &settings);
    let second = pipeline::run(&bytes, &request, &settings);
    assert_eq!(first, second);

    let (t1, s1) = (first.table.unwrap(), first.chart.unwrap());
    let (t2, s2) = (second.table.unwrap(), second.chart.unwrap());
    assert_eq!(render::figure(&t1, &s1), render::figure(&t2, &s2));
}

// ── Rendering ────────────────────────────────────────────────────────

#[test]
fn test_preview_sorted_by_exposure() {
    let table = pipeline::run(&sample_chain(), &SelectionRequest::default(), &ChartSettings::default())
        .table
        .unwrap();
    let sorted = render::preview(&table);
    let exposure = numbers(&sorted, GAMMA_EXPOSURE);
    assert!(exposure.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(numbers(&sorted, "Strike"), vec![100.0, 100.0, 95.0, 105.0]);
}

#[test]
fn test_html_document_embeds_figure() {
    let run = pipeline::run(&sample_chain(), &SelectionRequest::default(), &ChartSettings::default());
    let table = run.table.unwrap();
    let spec = run.chart.unwrap();
    let html = render::html_document(&table, &spec, true);
    assert!(html.contains("<title>Options Exposure: Delta vs Vanna</title>"));
    assert!(html.contains("Plotly.newPlot('chart'"));
    assert!(html.contains("<h3>Data Preview</h3>"));

    let without = render::html_document(&table, &spec, false);
    assert!(!without.contains("Data Preview"));
}
