use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use super::{attach_file, resolve_config};
use crate::cli::OutputFormat;
use crate::pagination::{item_summary, ItemSummary, PageLabel, Paginator, RenderSurface};
use crate::rows::Row;
use crate::search::filter_rows;

/// Options for the `print` command
#[derive(Debug, Clone)]
pub struct PrintConfig {
    pub file: PathBuf,
    pub page: usize,
    pub page_size: Option<usize>,
    pub filter: Option<String>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}

/// One projected page, as printed by `pagewise print`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    pub source: String,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub summary: ItemSummary,
    pub rows: Vec<Row>,
    /// Compact page labels; empty while the controls are suppressed.
    pub labels: Vec<PageLabel>,
    /// Page strip with the active page bracketed, e.g. `1 [2] 3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip: Option<String>,
}

impl PageReport {
    /// Capture what the paginator last projected.
    pub fn from_paginator<S: RenderSurface<Row>>(
        source: impl Into<String>,
        pager: &Paginator<Row, S>,
    ) -> Self {
        let controls = pager.controls();
        Self {
            source: source.into(),
            page: pager.current_page(),
            total_pages: pager.total_pages(),
            page_size: pager.page_size(),
            summary: item_summary(pager.visible_count(), pager.current_page(), pager.page_size()),
            rows: pager.current_items().to_vec(),
            labels: controls
                .map(|c| c.pages.iter().map(|p| p.label).collect())
                .unwrap_or_default(),
            strip: controls.map(|c| c.page_strip()),
        }
    }
}

pub fn handle_print(config: PrintConfig) -> Result<()> {
    let paginator_config = resolve_config(config.config.as_deref())?;
    let mut pager = attach_file(&config.file, config.page_size, paginator_config)?;

    if let Some(query) = config.filter.as_deref() {
        let filtered = filter_rows(pager.all_items(), query);
        pager.refresh(Some(filtered));
    }
    pager.go_to_page(config.page);

    let report = PageReport::from_paginator(config.file.display().to_string(), &pager);
    let output = match config.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&report).context("Failed to serialize page report")?;
            json.push('\n');
            json
        }
    };
    print!("{output}");
    Ok(())
}

/// Rows, then the summary line, then the page strip when there is one.
pub fn render_text(report: &PageReport) -> String {
    let width = report
        .rows
        .iter()
        .map(|row| row.number.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out: String = report
        .rows
        .iter()
        .map(|row| format!("{:>width$}  {}\n", row.number, row.text, width = width))
        .collect();
    out.push_str(&format!("{}\n", report.summary));
    if let Some(strip) = &report.strip {
        out.push_str(&format!("{strip}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginatorConfig;
    use crate::pagination::PaginatorOptions;
    use crate::testkit::MemorySource;
    use crate::tui::TerminalSurface;
    use pretty_assertions::assert_eq;

    fn pager(count: usize) -> Paginator<Row, TerminalSurface> {
        let rows: Vec<Row> = (1..=count).map(|n| Row::new(n, format!("row {n}"))).collect();
        let source = MemorySource::new().with_collection("rows.txt", rows);
        Paginator::attach(
            &source,
            PaginatorOptions::new("rows.txt").page_size(10),
            PaginatorConfig::default(),
            TerminalSurface::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_report_for_middle_page() {
        let mut pager = pager(25);
        pager.go_to_page(2);
        let report = PageReport::from_paginator("rows.txt", &pager);

        assert_eq!(report.page, 2);
        assert_eq!(report.total_pages, 3);
        assert_eq!(report.summary.to_string(), "11-20 of 25");
        assert_eq!(report.rows.len(), 10);
        assert_eq!(report.rows[0].number, 11);
        assert_eq!(report.strip.as_deref(), Some("1 [2] 3"));
    }

    #[test]
    fn test_single_page_has_no_labels() {
        let pager = pager(4);
        let report = PageReport::from_paginator("rows.txt", &pager);
        assert!(report.labels.is_empty());
        assert_eq!(report.strip, None);
        assert_eq!(render_text(&report), "1  row 1\n2  row 2\n3  row 3\n4  row 4\n1-4 of 4\n");
    }

    #[test]
    fn test_render_text_aligns_numbers() {
        let mut pager = pager(12);
        pager.go_to_page(2);
        let text = render_text(&PageReport::from_paginator("rows.txt", &pager));
        assert_eq!(text, "11  row 11\n12  row 12\n11-12 of 12\n1 [2]\n");
    }

    #[test]
    fn test_json_report_shape() {
        let pager = pager(25);
        let report = PageReport::from_paginator("rows.txt", &pager);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["page"], 1);
        assert_eq!(json["summary"]["total"], 25);
        assert_eq!(json["rows"][0]["text"], "row 1");
        assert_eq!(json["strip"], "[1] 2 3");
    }
}
