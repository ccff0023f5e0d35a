//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{info, warn};

use crate::artic::{image_url, ArticClient, ArtworkSource};
use crate::config::Config;
use crate::models::{Artwork, PaginationParams};
use crate::tui::components::{selection_panel, ArtworkTable, PageChangeEvent, Paginator, Toast};
use crate::tui::ui::{centered_rect, Styles};

/// How long to wait for input before redrawing (keeps toast expiry timely)
const TICK_RATE: Duration = Duration::from_millis(250);

/// Main TUI application state
pub struct App {
    /// Application configuration
    pub config: Config,
    /// Where artwork pages come from
    source: Box<dyn ArtworkSource + Send + Sync>,

    // Component states
    pub table: ArtworkTable,
    pub paginator: Paginator,

    /// Params of the page currently displayed (or being fetched)
    pub pagination: PaginationParams,
    /// Selected artworks, in selection order; survives page changes
    pub selected: Vec<Artwork>,
    /// IIIF base URL from the most recent successful response
    pub iiif_url: String,
    /// True exactly while a fetch is outstanding
    pub loading: bool,

    // Global application state
    pub toast: Option<Toast>,
    pub should_quit: bool,
    pub show_help_popup: bool,
}

impl App {
    /// Create a new TUI application backed by the live API
    pub fn new(config: Config) -> Result<Self> {
        let client = ArticClient::new(&config)?;
        Ok(Self::with_source(config, Box::new(client)))
    }

    /// Create an application over an arbitrary artwork source
    pub fn with_source(config: Config, source: Box<dyn ArtworkSource + Send + Sync>) -> Self {
        let page_size = config.page_size;
        Self {
            config,
            source,
            table: ArtworkTable::new(),
            paginator: Paginator::new(page_size),
            pagination: PaginationParams {
                page: 1,
                limit: page_size,
            },
            selected: Vec::new(),
            iiif_url: String::new(),
            loading: false,
            toast: None,
            should_quit: false,
            show_help_popup: false,
        }
    }

    /// Jump to a 1-based startup page before the first fetch
    pub fn set_start_page(&mut self, page: usize) {
        let page = page.max(1);
        self.pagination.page = page;
        self.paginator.first = (page - 1) * self.paginator.rows;
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.load_artworks().await;

        loop {
            self.expire_toast();
            terminal.draw(|f| self.draw(f))?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key).await?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle keyboard input events
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Global shortcuts
        match key.code {
            KeyCode::F(1) | KeyCode::Char('?') => {
                self.show_help_popup = !self.show_help_popup;
                return Ok(());
            }
            KeyCode::Esc => {
                if self.show_help_popup {
                    self.show_help_popup = false;
                }
                return Ok(());
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Ok(());
            }
            _ => {}
        }

        if self.show_help_popup {
            return Ok(());
        }

        match key.code {
            KeyCode::Up => self.table.navigate_up(),
            KeyCode::Down => self.table.navigate_down(),
            KeyCode::Char(' ') => self.toggle_selection(),
            KeyCode::Char('a') => self.toggle_select_all(),
            KeyCode::Char('c') => self.clear_selection(),
            KeyCode::Char('r') => self.load_artworks().await,
            KeyCode::Left => {
                let event = self.paginator.previous_page();
                self.apply_page_change(event).await;
            }
            KeyCode::Right => {
                let event = self.paginator.next_page();
                self.apply_page_change(event).await;
            }
            KeyCode::Home => {
                let event = self.paginator.first_page();
                self.apply_page_change(event).await;
            }
            KeyCode::End => {
                let event = self.paginator.last_page();
                self.apply_page_change(event).await;
            }
            KeyCode::Char('s') => {
                let event = self.paginator.cycle_rows();
                self.apply_page_change(event).await;
            }
            _ => {}
        }

        Ok(())
    }

    /// Replace the pagination params from a paginator event, which triggers
    /// a reload of the displayed page.
    pub async fn apply_page_change(&mut self, event: Option<PageChangeEvent>) {
        if let Some(event) = event {
            self.pagination = event.into();
            self.load_artworks().await;
        }
    }

    /// Fetch the current page.
    ///
    /// On failure the prior artworks stay on screen and only a toast is
    /// shown; the error itself was already logged at the client boundary.
    pub async fn load_artworks(&mut self) {
        self.loading = true;
        info!(
            "Loading artworks page {} (limit {})",
            self.pagination.page, self.pagination.limit
        );

        match self.source.fetch_page(&self.pagination).await {
            Ok(response) => {
                self.paginator
                    .set_total_records(response.pagination.total as usize);
                self.iiif_url = response.config.iiif_url;
                self.table.set_artworks(response.data);
            }
            Err(e) => {
                warn!("Failed to load artworks: {}", e);
                self.toast = Some(Toast::error("Failed to fetch artworks"));
            }
        }

        self.loading = false;
    }

    /// Toggle the highlighted artwork in or out of the selection
    pub fn toggle_selection(&mut self) {
        let artwork = match self.table.selected_artwork() {
            Some(a) => a.clone(),
            None => return,
        };

        if let Some(pos) = self.selected.iter().position(|s| s.id == artwork.id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(artwork);
        }
    }

    /// Toggle between the full current page and an empty selection.
    /// Never reaches across pages.
    pub fn toggle_select_all(&mut self) {
        if self.selected.len() == self.table.len() && !self.table.is_empty() {
            self.selected.clear();
        } else {
            self.selected = self.table.artworks.clone();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                                  // title bar
                Constraint::Length(selection_panel::height(&self.selected)),
                Constraint::Min(0),                                     // table
                Constraint::Length(3),                                  // paginator
                Constraint::Length(4),                                  // status bar
            ])
            .split(size);

        self.draw_title_bar(f, chunks[0]);
        selection_panel::render(f, chunks[1], &self.selected);

        let selected_ids: HashSet<i64> = self.selected.iter().map(|a| a.id).collect();
        let is_selected = move |id: i64| selected_ids.contains(&id);
        self.table.render(f, chunks[2], &is_selected, self.loading);

        self.paginator.render(f, chunks[3]);
        self.draw_status_bar(f, chunks[4]);

        if let Some(toast) = &self.toast {
            toast.render(f, size);
        }

        if self.show_help_popup {
            self.draw_help_popup(f, size);
        }
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new("Browse artworks")
            .style(Styles::title())
            .block(
                Block::default()
                    .title("artbrowse - Art Institute of Chicago")
                    .borders(Borders::ALL),
            );
        f.render_widget(title, area);
    }

    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let image_line = if self.loading {
            "Loading artworks...".to_string()
        } else {
            match self
                .table
                .selected_artwork()
                .and_then(|a| image_url(a.image_id.as_deref(), &self.iiif_url))
            {
                Some(url) => format!("Image: {}", url),
                None => "No image for highlighted artwork".to_string(),
            }
        };

        let lines = vec![
            Line::from(image_line),
            Line::from(
                "↑/↓: Move | Space: Select | a: Select All | c: Clear | \
                 ←/→: Page | s: Page Size | r: Reload | ?: Help | q: Quit",
            ),
        ];

        let status_bar = Paragraph::new(lines).style(Styles::info()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );

        f.render_widget(status_bar, area);
    }

    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 60, area);

        f.render_widget(Clear, popup_area);

        let help_content = "Navigation:\n\
            ↑/↓ - Move cursor\n\
            ←/→ - Previous/next page\n\
            Home/End - First/last page\n\
            s - Cycle page size (5/10/20/50)\n\
            r - Reload current page\n\n\
            Selection:\n\
            Space - Toggle highlighted artwork\n\
            a - Select all on page / clear\n\
            c - Clear selection\n\n\
            Esc - Close this help\n\
            q - Quit";

        let help_popup = Paragraph::new(help_content).style(Styles::info()).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Styles::title()),
        );

        f.render_widget(help_popup, popup_area);
    }
}
