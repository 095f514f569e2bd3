//! Report Export
//!
//! A report is a static capture of the displayed table: no action column,
//! no live bindings. Rendering it to a document is left to a
//! `ReportRenderer`.

use std::fmt;

use chrono::{DateTime, Local};

use crate::record::{Column, ColumnKind, Resource};

/// Report export errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// No document target (e.g. the print window was blocked)
    Unavailable(String),
    Render(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Unavailable(msg) => write!(f, "Report unavailable: {}", msg),
            ReportError::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {}

/// Static table snapshot handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub generated_at: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn capture<'a, R: Resource>(
        rows: impl IntoIterator<Item = &'a R>,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            title: R::REPORT_TITLE.to_string(),
            generated_at: generated_at.format("%Y-%m-%d %H:%M").to_string(),
            columns: R::columns().to_vec(),
            rows: rows.into_iter().map(|row| row.cells()).collect(),
        }
    }

    /// Standalone printable HTML document
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
        html.push_str(&format!("<title>{}</title>", escape_html(&self.title)));
        html.push_str(REPORT_STYLE);
        html.push_str("</head><body>");
        html.push_str(&format!("<h1>{}</h1>", escape_html(&self.title)));
        html.push_str(&format!(
            "<p class=\"generated\">Generated {}</p>",
            escape_html(&self.generated_at)
        ));
        html.push_str("<table><thead><tr>");
        for column in &self.columns {
            html.push_str(&format!("<th>{}</th>", escape_html(column.label)));
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for (column, cell) in self.columns.iter().zip(row) {
                match column.kind {
                    ColumnKind::Image => html.push_str(&format!(
                        "<td><img src=\"{}\" alt=\"\" width=\"50\" height=\"50\"></td>",
                        escape_html(cell)
                    )),
                    ColumnKind::Text => html.push_str(&format!("<td>{}</td>", escape_html(cell))),
                }
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table></body></html>");
        html
    }
}

const REPORT_STYLE: &str = "<style>\
body{font-family:sans-serif;margin:24px}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #999;padding:6px;text-align:left}\
.generated{color:#666;font-size:12px}\
</style>";

/// Document-export boundary
pub trait ReportRenderer {
    fn export(&self, report: &ReportTable) -> Result<(), ReportError>;
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_transport_items;
    use crate::transport::TransportItem;
    use chrono::TimeZone;

    fn at_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_capture_excludes_action_column() {
        let items = sample_transport_items();
        let report = ReportTable::capture::<TransportItem>(&items, at_noon());
        assert_eq!(report.title, "Items Report");
        assert_eq!(report.generated_at, "2026-03-01 12:00");
        assert_eq!(report.columns.len(), 7);
        assert!(report.columns.iter().all(|c| c.label != "Action"));
        assert_eq!(report.rows.len(), items.len());
    }

    #[test]
    fn test_html_escapes_cells() {
        let report = ReportTable {
            title: "Items Report".to_string(),
            generated_at: "now".to_string(),
            columns: vec![Column::image("Image"), Column::text("Name")],
            rows: vec![vec!["a\"b.png".to_string(), "<b>Van</b> & co".to_string()]],
        };
        let html = report.to_html();
        assert!(html.contains("<td>&lt;b&gt;Van&lt;/b&gt; &amp; co</td>"));
        assert!(html.contains("src=\"a&quot;b.png\""));
        assert!(html.contains("<title>Items Report</title>"));
    }
}
