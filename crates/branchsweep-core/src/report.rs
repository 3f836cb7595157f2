//! HTML report rendering

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::config::ReportConfig;
use crate::error::SweepError;
use crate::types::BranchRecord;

const STYLESHEETS: &[&str] = &[
    r#"<link href="https://fonts.googleapis.com/css?family=Raleway:400,300,600" rel="stylesheet" type="text/css">"#,
    r#"<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/normalize/4.1.1/normalize.min.css">"#,
    r#"<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/skeleton/2.0.4/skeleton.min.css">"#,
];

/// Escape text for use in HTML content and attribute values
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Link to an issue in the tracker
pub fn issue_url(tracker_url: &str, key: &str) -> String {
    format!("{}/{}", tracker_url.trim_end_matches('/'), key)
}

fn render_row(out: &mut String, record: &BranchRecord, settings: &ReportConfig) {
    let issue_cell = match &record.issue_key {
        Some(key) => format!(
            r#"<a href="{}">{}</a>"#,
            html_escape(&issue_url(&settings.issue_tracker_url, key)),
            html_escape(key)
        ),
        None => String::new(),
    };

    let _ = writeln!(
        out,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        html_escape(&record.name),
        issue_cell,
        record.formatted_date(),
        html_escape(&record.author)
    );
}

/// Render the full report document
pub fn render_report(records: &[BranchRecord], settings: &ReportConfig) -> String {
    let title = html_escape(&settings.title);

    let mut rows = String::new();
    for record in records {
        render_row(&mut rows, record, settings);
    }

    let mut html = String::new();
    html.push_str("<!doctype html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("  <head>\n");
    html.push_str("    <meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "    <title>{}</title>", title);
    let _ = writeln!(html, "    <meta name=\"description\" content=\"{}\">", title);
    for link in STYLESHEETS {
        let _ = writeln!(html, "    {}", link);
    }
    html.push_str("  </head>\n");
    html.push_str("  <body>\n");
    let _ = writeln!(
        html,
        "    <table style=\"width: 70vw; margin: auto\"><tbody>\n{}</tbody></table>",
        rows
    );
    html.push_str("  </body>\n");
    html.push_str("</html>\n");
    html
}

/// Write the rendered report, replacing any existing file
pub fn write_report(path: &Path, html: &str) -> Result<(), SweepError> {
    std::fs::write(path, html)?;
    info!("report written to {}", path.display());
    Ok(())
}
