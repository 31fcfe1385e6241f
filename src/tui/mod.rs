//! Interactive terminal explorer for paginated rows.
//!
//! Keyboard-driven: arrows move between pages, `+`/`-` cycle the page size
//! and `/` filters rows with a fuzzy query that re-paginates from page 1.
//!
//! # Examples
//!
//! ```rust,ignore
//! use pagewise::tui::PagerExplorer;
//!
//! let mut explorer = PagerExplorer::new("data.txt", paginator)?;
//! explorer.run()?;
//! ```

pub mod actions;
pub mod app;
pub mod surface;
pub mod theme;
pub mod view;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::pagination::Paginator;
use crate::rows::Row;
pub use app::PagerApp;
pub use surface::TerminalSurface;

/// Explorer TUI manager
pub struct PagerExplorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: PagerApp,
    restored: bool,
}

impl PagerExplorer {
    /// Enter the alternate screen and wrap an attached paginator.
    pub fn new(title: impl Into<String>, pager: Paginator<Row, TerminalSurface>) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: PagerApp::new(title, pager),
            restored: false,
        })
    }

    /// Run the interactive event loop
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| self.app.render(f))?;

            if event::poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    if self.app.handle_key(key) {
                        break;
                    }
                }
            }
        }

        self.cleanup()
    }

    pub fn app(&self) -> &PagerApp {
        &self.app
    }

    /// Restore the terminal
    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for PagerExplorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
