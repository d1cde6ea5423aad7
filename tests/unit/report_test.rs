//! Unit tests for the field registry, report sheet and cross-tab

use std::collections::HashMap;

use caltally::report::{
    column_index, summarize_kind, CrossTabBuilder, PivotBuilder, ReportDefinition, SummarizeKind,
};
use caltally::sink::{build_sheet, Cell, TOTAL_LABEL};
use caltally::WorkRecord;

fn record(work: &str, worker: &str, minutes: u64, color: Option<&str>) -> WorkRecord {
    WorkRecord {
        work_name: work.to_string(),
        client_name: "Acme".to_string(),
        task: "Inspection".to_string(),
        worker: worker.to_string(),
        duration_minutes: minutes,
        source_color: color.map(str::to_string),
    }
}

#[test]
fn every_field_resolves_by_label_and_alias() {
    let expected = [
        ("作業名", "work_name", 1),
        ("顧客名", "client_name", 2),
        ("作業内容", "task", 3),
        ("担当者", "worker", 4),
        ("時間(分)", "minutes", 5),
        ("時間(h)", "hours", 6),
        ("色", "color", 7),
    ];
    for (label, alias, column) in expected {
        assert_eq!(column_index(label), Some(column), "label {}", label);
        assert_eq!(column_index(alias), Some(column), "alias {}", alias);
    }
}

#[test]
fn column_lookup_ignores_case_and_width() {
    assert_eq!(column_index("  Work Name "), Some(1));
    assert_eq!(column_index("ＷＯＲＫＥＲ"), Some(4));
    assert_eq!(column_index("時間（分）"), Some(5));
}

#[test]
fn unknown_or_empty_field_has_no_column() {
    assert_eq!(column_index(""), None);
    assert_eq!(column_index("   "), None);
    assert_eq!(column_index("budget"), None);
}

#[test]
fn operator_lookup_is_case_insensitive() {
    assert_eq!(summarize_kind("average"), SummarizeKind::Average);
    assert_eq!(summarize_kind("AVERAGE"), summarize_kind("average"));
    assert_eq!(summarize_kind(" Median "), SummarizeKind::Median);
}

#[test]
fn unknown_operator_falls_back_to_sum() {
    assert_eq!(summarize_kind("bogus"), SummarizeKind::Sum);
    assert_eq!(summarize_kind(""), SummarizeKind::Sum);
}

#[test]
fn operators_summarize_numbers() {
    let values = [30.0, 45.0, 90.0];
    assert_eq!(SummarizeKind::Sum.apply(&values, 3), Some(165.0));
    assert_eq!(SummarizeKind::Count.apply(&values, 3), Some(3.0));
    assert_eq!(SummarizeKind::Average.apply(&values, 3), Some(55.0));
    assert_eq!(SummarizeKind::Max.apply(&values, 3), Some(90.0));
    assert_eq!(SummarizeKind::Min.apply(&values, 3), Some(30.0));
    assert_eq!(SummarizeKind::Median.apply(&values, 3), Some(45.0));
    assert_eq!(SummarizeKind::Product.apply(&[2.0, 3.0], 2), Some(6.0));
    assert_eq!(SummarizeKind::Sum.apply(&[], 2), None);
    assert_eq!(SummarizeKind::Count.apply(&[], 2), Some(2.0));
}

#[test]
fn sheet_totals_row_shows_hhmm_and_hours() {
    let records = vec![
        record("Alpha", "John", 30, None),
        record("Alpha", "Mary", 45, None),
        record("Beta", "John", 90, Some("5")),
    ];
    let sheet = build_sheet(&records, &HashMap::new());

    assert_eq!(
        sheet.header,
        vec!["Work name", "Client", "Task", "Worker", "Minutes", "Hours", "Color"]
    );
    assert_eq!(sheet.rows.len(), 3);
    assert_eq!(sheet.cell(2, 7), Some(&Cell::text("5")));
    assert_eq!(sheet.cell(0, 7), Some(&Cell::Empty));

    let totals = sheet.totals.unwrap();
    assert_eq!(totals[0], Cell::text(TOTAL_LABEL));
    assert_eq!(totals[4].to_string(), "02:45");
    assert_eq!(totals[5].to_string(), "2.75");
}

#[test]
fn sheet_maps_worker_codes_to_display_names() {
    let names = HashMap::from([("jd".to_string(), "John Doe".to_string())]);
    let sheet = build_sheet(
        &[record("Alpha", "jd", 60, None), record("Alpha", "mk", 60, None)],
        &names,
    );
    assert_eq!(sheet.cell(0, 4), Some(&Cell::text("John Doe")));
    assert_eq!(sheet.cell(1, 4), Some(&Cell::text("mk")));
    assert_eq!(sheet.cell(0, 6).and_then(Cell::as_number), Some(1.0));
}

#[test]
fn report_definition_from_toml_with_localized_names() {
    let definition: ReportDefinition = toml::from_str(
        r#"
rows = ["作業名"]
columns = []

[[values]]
field = "時間(分)"
summarize = "max"
"#,
    )
    .unwrap();
    let report = definition.resolve();
    assert!(report.unresolved().is_empty());
    assert_eq!(report.values[0].kind, SummarizeKind::Max);
    assert_eq!(report.values[0].display_name, "MAX of 時間(分)");

    let sheet = build_sheet(
        &[
            record("Alpha", "John", 30, None),
            record("Alpha", "Mary", 45, None),
            record("Beta", "John", 90, None),
        ],
        &HashMap::new(),
    );
    let pivot = PivotBuilder.build(&report, &sheet).unwrap();

    assert_eq!(pivot.header, vec!["作業名", "MAX of 時間(分)"]);
    assert_eq!(
        pivot.rows,
        vec![
            vec![Cell::text("Alpha"), Cell::Number(45.0)],
            vec![Cell::text("Beta"), Cell::Number(90.0)],
        ]
    );
    assert_eq!(pivot.totals.unwrap()[1], Cell::Number(90.0));
}

#[test]
fn unresolved_names_are_reported_not_invented() {
    let definition: ReportDefinition = toml::from_str(
        r#"
rows = ["budget"]
columns = ["worker"]

[[values]]
field = "overtime"
"#,
    )
    .unwrap();
    let report = definition.resolve();
    assert_eq!(report.unresolved(), vec!["budget", "overtime"]);
    assert_eq!(report.values[0].field.column, None);

    let sheet = build_sheet(&[record("Alpha", "John", 30, None)], &HashMap::new());
    assert!(PivotBuilder.build(&report, &sheet).is_none());
}
