//! Explorer rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::app::PagerApp;
use super::theme::Theme;
use crate::pagination::{NavControls, PageLabel};

const HELP_TEXT: &str = "←/→ page  Home/End first/last  +/- page size  ↑/↓ scroll  / search  q quit";
const SEARCH_HELP_TEXT: &str = "type to filter  Backspace delete  Ctrl-U clear  Enter/Esc done";

/// Render the explorer
pub fn render(frame: &mut Frame, app: &PagerApp) {
    let theme = Theme::default();
    let footer_height = if app.pager().controls().is_some() { 3 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Min(0),                // Rows
            Constraint::Length(footer_height), // Controls + help
        ])
        .split(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        frame.area(),
    );
    render_header(frame, app, chunks[0], &theme);
    render_rows(frame, app, chunks[1], &theme);
    render_footer(frame, app, chunks[2], &theme);
}

/// Render title, row counts and the search box
fn render_header(frame: &mut Frame, app: &PagerApp, area: Rect, theme: &Theme) {
    let pager = app.pager();
    let counts = if pager.visible_count() == pager.item_count() {
        format!("{} rows", pager.item_count())
    } else {
        format!("{} of {} rows", pager.visible_count(), pager.item_count())
    };

    let cursor = if app.is_searching() { "▏" } else { "" };
    let header_text = vec![
        Line::from(vec![
            Span::styled(app.title().to_owned(), Style::default().fg(theme.accent())),
            Span::raw("  "),
            Span::styled(counts, theme.match_style()),
        ]),
        Line::from(Span::styled(
            format!("Search: {}{}", app.search().query(), cursor),
            theme.search_style(app.is_searching()),
        )),
    ];

    let header = Paragraph::new(header_text).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// Render the rows on the current page
fn render_rows(frame: &mut Frame, app: &PagerApp, area: Rect, theme: &Theme) {
    let surface = app.pager().surface();
    let shown = surface.shown();

    if shown.is_empty() {
        let empty_text = if app.search().query().is_empty() {
            "No rows"
        } else {
            "No rows match the current search"
        };
        frame.render_widget(
            Paragraph::new(empty_text).style(Style::default().fg(theme.muted)),
            area,
        );
        return;
    }

    let gutter = shown
        .iter()
        .map(|row| row.number.to_string().width())
        .max()
        .unwrap_or(1);

    let lines: Vec<Line> = shown
        .iter()
        .skip(surface.scroll_offset())
        .take(area.height as usize)
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{:>gutter$} ", row.number, gutter = gutter),
                    theme.gutter_style(),
                ),
                Span::styled(row.text.clone(), Style::default().fg(theme.text)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render navigation controls (when not suppressed) and the key help
fn render_footer(frame: &mut Frame, app: &PagerApp, area: Rect, theme: &Theme) {
    let help = if app.is_searching() {
        SEARCH_HELP_TEXT
    } else {
        HELP_TEXT
    };
    let help_line = Line::from(Span::styled(help, theme.metric_style()));

    let lines = match app.pager().controls() {
        Some(controls) => vec![
            Line::from(Span::styled(
                format!("Showing {}", controls.summary),
                theme.metric_style(),
            )),
            control_line(controls, theme),
            help_line,
        ],
        None => vec![help_line],
    };

    frame.render_widget(Paragraph::new(lines), area);
}

/// Build the button strip: boundary buttons, page labels, page-size selector.
pub fn control_line(controls: &NavControls, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();

    let [first, previous, next, last] = controls.buttons();
    for button in [first, previous] {
        spans.push(Span::styled(
            button.kind.glyph(),
            theme.control_style(button.enabled),
        ));
        spans.push(Span::raw(" "));
    }

    for control in &controls.pages {
        let span = match control.label {
            PageLabel::Ellipsis => Span::styled("...", theme.metric_style()),
            PageLabel::Page(page) if control.is_active() => {
                Span::styled(format!("[{page}]"), theme.active_style())
            }
            PageLabel::Page(page) => Span::styled(page.to_string(), theme.control_style(true)),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }

    for button in [next, last] {
        spans.push(Span::styled(
            button.kind.glyph(),
            theme.control_style(button.enabled),
        ));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled("  Per page:", theme.metric_style()));
    for option in &controls.page_sizes {
        spans.push(Span::raw(" "));
        if option.selected {
            spans.push(Span::styled(
                format!("[{}]", option.size),
                theme.active_style(),
            ));
        } else {
            spans.push(Span::styled(
                option.size.to_string(),
                theme.control_style(true),
            ));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginatorConfig;
    use crate::pagination::{Paginator, PaginatorOptions};
    use crate::rows::Row;
    use crate::testkit::MemorySource;
    use crate::tui::surface::TerminalSurface;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn app(count: usize) -> PagerApp {
        let rows: Vec<Row> = (1..=count)
            .map(|n| Row::new(n, format!("entry {n}")))
            .collect();
        let source = MemorySource::new().with_collection("data.txt", rows);
        let pager = Paginator::attach(
            &source,
            PaginatorOptions::new("data.txt"),
            PaginatorConfig::default(),
            TerminalSurface::new(),
        )
        .unwrap();
        PagerApp::new("data.txt", pager)
    }

    fn draw(app: &PagerApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_renders_summary_and_page_strip() {
        let mut app = app(47);
        app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));

        let screen = draw(&app);
        assert!(screen.contains("Showing 21-40 of 47"));
        assert!(screen.contains("1 [2] 3"));
        assert!(screen.contains("Per page: 10 [20] 50 100"));
        assert!(screen.contains("21 entry 21"));
        assert!(!screen.contains("entry 41"));
    }

    #[test]
    fn test_background_fills_frame() {
        let app = app(5);
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(39, 9)].bg, Theme::default().background);
    }

    #[test]
    fn test_single_page_hides_controls() {
        let app = app(5);
        let screen = draw(&app);
        assert!(!screen.contains("Showing"));
        assert!(!screen.contains("Per page"));
        assert!(screen.contains("5 entry 5"));
    }

    #[test]
    fn test_control_line_text() {
        let app = app(200);
        let controls = app.pager().controls().unwrap();
        let text = line_text(&control_line(controls, &Theme::default()));
        assert_eq!(
            text,
            "«« ‹ [1] 2 3 ... 10 › »»   Per page: 10 [20] 50 100"
        );
    }

    #[test]
    fn test_empty_search_message() {
        let mut app = app(10);
        app.handle_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE));
        for c in "zzz".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let screen = draw(&app);
        assert!(screen.contains("No rows match the current search"));
        assert!(screen.contains("Search: zzz"));
    }
}
