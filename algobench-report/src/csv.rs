//! CSV Output

use crate::report::Report;

const HEADER: &str = "shape,length,algorithm,mode,aggregate,unit,iterations,relative";

/// Generate a CSV report, one line per matrix cell
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::with_capacity(64 * (report.results.len() + 1));
    output.push_str(HEADER);
    output.push('\n');

    for row in &report.results {
        let relative = row.relative.map(|r| format!("{:.4}", r)).unwrap_or_default();
        output.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            row.shape,
            row.length,
            escape(&row.algorithm),
            report.meta.mode,
            row.aggregate,
            report.meta.unit,
            row.iterations,
            relative
        ));
    }

    output
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
