//! Human-Readable Output
//!
//! One table per (shape, size) cell group, algorithms ordered fastest first.

use crate::report::{Report, ReportRow};
use algobench_data::DataShape;
use std::collections::BTreeMap;

/// Format a report for terminal display
pub fn format_human_output(report: &Report) -> String {
    let meta = &report.meta;
    let mut output = String::new();

    output.push('\n');
    output.push_str("AlgoBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "mode: {}  iterations: {}  filter: {}  reducer: {}\n",
        meta.mode, meta.iterations, meta.filter, meta.reducer
    ));
    if let Some(seed) = meta.seed {
        output.push_str(&format!("seed: {}\n", seed));
    }
    output.push('\n');

    let mut groups: BTreeMap<(DataShape, usize), Vec<&ReportRow>> = BTreeMap::new();
    for row in &report.results {
        groups.entry((row.shape, row.length)).or_default().push(row);
    }

    let unit = if meta.unit.is_empty() {
        "value".to_string()
    } else {
        meta.unit.clone()
    };

    for ((shape, length), mut rows) in groups {
        output.push_str(&format!("Shape: {}  Size: {}\n", shape, length));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let name_width = rows
            .iter()
            .map(|r| r.algorithm.len())
            .max()
            .unwrap_or(0)
            .max("Algorithm".len());

        output.push_str(&format!(
            "  {:<width$}  {:>14}  {:>10}\n",
            "Algorithm",
            unit,
            "Relative",
            width = name_width
        ));

        rows.sort_by(|a, b| a.aggregate.total_cmp(&b.aggregate));
        for row in rows {
            let relative = row
                .relative
                .map(|r| format!("{:.2}x", r))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "  {:<width$}  {:>14.3}  {:>10}\n",
                row.algorithm,
                row.aggregate,
                relative,
                width = name_width
            ));
        }
        output.push('\n');
    }

    output
}
