//! HTML templates for the analysis page

use serde::Serialize;
use timewarp_core::{Datasets, SampleRow, SweepPoint};

use crate::chart::ChartRenderer;
use crate::error::Result;
use crate::summary::{validate, Summary};

/// CSS styles
pub const STYLE_CSS: &str = r#"
:root {
    --bg-page: #121212;
    --bg-card: #252525;
    --bg-header: #333333;
    --bg-row-odd: #2e2e2e;
    --text-primary: #f0f0f0;
    --text-table: #e0e0e0;
    --border: #333333;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg-page);
    color: var(--text-primary);
    font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace;
}

.page {
    max-width: 1200px;
    margin: 0 auto;
    padding: 20px;
}

.card {
    background: var(--bg-card);
    padding: 20px;
    border-radius: 8px;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.5);
    margin-bottom: 20px;
}

h1 {
    margin: 0 0 20px 0;
}

.chart {
    margin-bottom: 20px;
}

.chart .point {
    opacity: 0;
}

.chart .point:hover {
    opacity: 1;
}

.table-wrap {
    overflow-x: auto;
}

table {
    width: 100%;
    border-collapse: collapse;
}

th, td {
    text-align: left;
    padding: 10px;
    color: var(--text-table);
    border: 1px solid var(--border);
}

th {
    background: var(--bg-header);
    font-weight: bold;
}

td {
    background: var(--bg-card);
}

tr.odd td {
    background: var(--bg-row-odd);
}

.observations {
    margin-top: 20px;
    color: var(--text-table);
}
"#;

/// Data embedded in the page next to the chart
#[derive(Serialize)]
struct FigureData<'a> {
    sweep: &'a [SweepPoint],
    samples: &'a [SampleRow],
    summary: &'a Summary,
}

/// HTML-escape a string for hand-built HTML
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Multiplier as shown in the table and summary
pub fn format_multiplier(value: f64) -> String {
    format!("{:.4}", value)
}

/// Render the full page, or nothing if the datasets are unusable
pub fn page_html(datasets: &Datasets) -> Result<String> {
    validate(datasets)?;
    let summary = Summary::from_sweep(datasets.sweep())?;

    let chart = ChartRenderer::default().render_svg(datasets.sweep(), &summary);
    let table = table_html(datasets.samples());
    let observations = observations_html(&summary);

    let figure = serde_json::to_string(&FigureData {
        sweep: datasets.sweep(),
        samples: datasets.samples(),
        summary: &summary,
    })?
    .replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>analysis: timewarp multiplier</title>
    <style>{style}</style>
</head>
<body>
    <div class="page">
        <div class="card">
            <h1>analysis: timewarp multiplier</h1>
            <div class="chart">
{chart}
            </div>
{table}
{observations}
        </div>
    </div>
    <script type="application/json" id="figure-data">{figure}</script>
</body>
</html>"#,
        style = STYLE_CSS,
        chart = chart,
        table = table,
        observations = observations,
        figure = figure,
    ))
}

/// Sample table with alternating row shading
pub fn table_html(rows: &[SampleRow]) -> String {
    let body = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let class = if i % 2 == 1 { " class=\"odd\"" } else { "" };
            format!(
                "<tr{}><td>{}</td><td>{}</td><td>{}</td></tr>",
                class,
                row.input,
                format_multiplier(row.multiplier),
                html_escape(row.formula())
            )
        })
        .collect::<Vec<_>>()
        .join("\n                    ");

    format!(
        r#"            <div class="table-wrap">
                <table id="table">
                    <thead><tr><th>TW</th><th>Multiplier</th><th>Formula</th></tr></thead>
                    <tbody>
                    {}
                    </tbody>
                </table>
            </div>"#,
        body
    )
}

/// Observations list under the table
pub fn observations_html(summary: &Summary) -> String {
    format!(
        r#"            <div class="observations">
                <h3>Observations:</h3>
                <ul>
                    <li>minimum value: {} (at TW = {})</li>
                    <li>maximum value: {} (at TW = {})</li>
                    <li>transition point: {} (at TW = {})</li>
                </ul>
            </div>"#,
        format_multiplier(summary.min.multiplier),
        summary.min.input,
        format_multiplier(summary.max.multiplier),
        summary.max.input,
        summary.transition.multiplier,
        summary.transition.input,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    #[test]
    fn test_format_multiplier() {
        assert_eq!(format_multiplier(-0.048), "-0.0480");
        assert_eq!(format_multiplier(0.0), "0.0000");
        assert_eq!(format_multiplier(0.39836418954077035), "0.3984");
    }

    #[test]
    fn test_format_round_trip() {
        let datasets = Datasets::build().unwrap();
        for p in datasets.sweep() {
            let parsed: f64 = format_multiplier(p.multiplier).parse().unwrap();
            assert!((parsed - p.multiplier).abs() <= 1e-4);
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_table_shading_alternates() {
        let datasets = Datasets::build().unwrap();
        let html = table_html(datasets.samples());

        assert_eq!(html.matches("<tr class=\"odd\">").count(), datasets.samples().len() / 2);
        assert!(html.contains("<tr><td>90</td><td>-0.0480</td><td>-(4 * (100 - tw) / 100)² [bounded]</td></tr>"));
        assert!(html.contains("<tr class=\"odd\"><td>92</td>"));
    }

    #[test]
    fn test_observations() {
        let datasets = Datasets::build().unwrap();
        let summary = Summary::from_sweep(datasets.sweep()).unwrap();
        let html = observations_html(&summary);

        assert!(html.contains("minimum value: -0.0480 (at TW = 90)"));
        assert!(html.contains("maximum value: 0.3984 (at TW = 150)"));
        assert!(html.contains("transition point: 0 (at TW = 100)"));
    }

    #[test]
    fn test_page_html() {
        let page = page_html(&Datasets::build().unwrap()).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<svg"));
        assert!(page.contains("<table id=\"table\">"));
        assert!(page.contains("Observations:"));
        assert!(page.contains("id=\"figure-data\""));
        assert!(page.ends_with("</html>"));
    }

    #[test]
    fn test_figure_data_parses() {
        let page = page_html(&Datasets::build().unwrap()).unwrap();
        let start = page.find("id=\"figure-data\">").unwrap() + "id=\"figure-data\">".len();
        let end = page[start..].find("</script>").unwrap() + start;

        let figure: serde_json::Value = serde_json::from_str(&page[start..end]).unwrap();
        assert_eq!(figure["sweep"].as_array().unwrap().len(), 61);
        assert_eq!(figure["summary"]["max"]["input"], 150.0);
    }

    #[test]
    fn test_page_fails_fast() {
        let empty = Datasets::from_raw(Vec::new(), Vec::new());
        assert!(matches!(page_html(&empty), Err(RenderError::EmptySweep)));
    }
}
