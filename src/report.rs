use prettytable::{Cell, Row, Table};

use crate::model::GroupSummaries;

/// Per-platform five-number summary table printed after rendering.
pub fn build_summary_table(summaries: &GroupSummaries) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("Platform"),
        Cell::new("Min"),
        Cell::new("Q1"),
        Cell::new("Median"),
        Cell::new("Q3"),
        Cell::new("Max"),
        Cell::new("Cnt"),
    ]));

    for entry in summaries.entries() {
        let s = &entry.summary;
        table.add_row(Row::new(vec![
            Cell::new(&entry.group),
            Cell::new(&fmt_value(s.min)),
            Cell::new(&fmt_value(s.q1)),
            Cell::new(&fmt_value(s.median)),
            Cell::new(&fmt_value(s.q3)),
            Cell::new(&fmt_value(s.max)),
            Cell::new(&format!("{}", entry.count)),
        ]));
    }
    table
}

fn fmt_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}
