//! Pagination control for the artwork table
//!
//! Tracks the 0-based page index and rows-per-page the way a paginator
//! widget reports them; the App converts emitted events into the 1-based
//! params the API expects.

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::PaginationParams;
use crate::tui::ui::Styles;

/// Selectable page sizes
pub const ROWS_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// A page change as reported by the paginator: 0-based page index plus the
/// rows-per-page in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChangeEvent {
    pub page: usize,
    pub rows: usize,
}

impl From<PageChangeEvent> for PaginationParams {
    /// The paginator is 0-based, the API 1-based
    fn from(event: PageChangeEvent) -> Self {
        PaginationParams {
            page: event.page + 1,
            limit: event.rows,
        }
    }
}

/// Paginator state: first-record offset, page size, and the total record
/// count reported by the API.
pub struct Paginator {
    pub first: usize,
    pub rows: usize,
    pub total_records: usize,
}

impl Paginator {
    pub fn new(rows: usize) -> Self {
        Self {
            first: 0,
            rows: rows.max(1),
            total_records: 0,
        }
    }

    /// Current 0-based page index
    pub fn page(&self) -> usize {
        self.first / self.rows
    }

    pub fn total_pages(&self) -> usize {
        if self.total_records == 0 {
            0
        } else {
            (self.total_records + self.rows - 1) / self.rows
        }
    }

    pub fn set_total_records(&mut self, total: usize) {
        self.total_records = total;
    }

    /// Move to the next page, if there is one
    pub fn next_page(&mut self) -> Option<PageChangeEvent> {
        if self.page() + 1 < self.total_pages() {
            self.first += self.rows;
            Some(self.event())
        } else {
            None
        }
    }

    /// Move to the previous page, if there is one
    pub fn previous_page(&mut self) -> Option<PageChangeEvent> {
        if self.page() > 0 {
            self.first -= self.rows;
            Some(self.event())
        } else {
            None
        }
    }

    pub fn first_page(&mut self) -> Option<PageChangeEvent> {
        if self.page() > 0 {
            self.first = 0;
            Some(self.event())
        } else {
            None
        }
    }

    pub fn last_page(&mut self) -> Option<PageChangeEvent> {
        let total = self.total_pages();
        if total > 0 && self.page() + 1 < total {
            self.first = (total - 1) * self.rows;
            Some(self.event())
        } else {
            None
        }
    }

    /// Advance to the next rows-per-page option, returning to the first
    /// page like the original paginator does on a page-size change.
    pub fn cycle_rows(&mut self) -> Option<PageChangeEvent> {
        let idx = ROWS_OPTIONS.iter().position(|&r| r == self.rows);
        self.rows = match idx {
            Some(i) => ROWS_OPTIONS[(i + 1) % ROWS_OPTIONS.len()],
            // Size came from config and is not in the preset list
            None => ROWS_OPTIONS[0],
        };
        self.first = 0;
        Some(self.event())
    }

    fn event(&self) -> PageChangeEvent {
        PageChangeEvent {
            page: self.page(),
            rows: self.rows,
        }
    }

    /// "Showing X to Y of Z artworks" current-page report
    pub fn report(&self) -> String {
        if self.total_records == 0 {
            return "Showing 0 to 0 of 0 artworks".to_string();
        }
        let first = self.first + 1;
        let last = (self.first + self.rows).min(self.total_records);
        format!(
            "Showing {} to {} of {} artworks",
            first, last, self.total_records
        )
    }

    /// Render the footer line
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let text = format!(
            "{} | Page {} of {} | Rows: {} (s to cycle {:?})",
            self.report(),
            if self.total_pages() == 0 { 0 } else { self.page() + 1 },
            self.total_pages(),
            self.rows,
            ROWS_OPTIONS
        );

        let footer = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Styles::info())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );

        f.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator() -> Paginator {
        let mut p = Paginator::new(10);
        p.set_total_records(95);
        p
    }

    #[test]
    fn test_event_converts_to_one_based_params() {
        let params = PaginationParams::from(PageChangeEvent { page: 1, rows: 10 });
        assert_eq!(params, PaginationParams { page: 2, limit: 10 });
    }

    #[test]
    fn test_next_page_advances_and_stops_at_end() {
        let mut p = paginator();
        let event = p.next_page().unwrap();
        assert_eq!(event, PageChangeEvent { page: 1, rows: 10 });

        p.first = 90; // last page (records 91..95)
        assert!(p.next_page().is_none());
        assert_eq!(p.page(), 9);
    }

    #[test]
    fn test_previous_page_stops_at_start() {
        let mut p = paginator();
        assert!(p.previous_page().is_none());

        p.first = 20;
        let event = p.previous_page().unwrap();
        assert_eq!(event.page, 1);
    }

    #[test]
    fn test_last_and_first_page() {
        let mut p = paginator();
        let event = p.last_page().unwrap();
        assert_eq!(event.page, 9);
        assert!(p.last_page().is_none());

        let event = p.first_page().unwrap();
        assert_eq!(event.page, 0);
    }

    #[test]
    fn test_cycle_rows_resets_to_first_page() {
        let mut p = paginator();
        p.first = 30;
        let event = p.cycle_rows().unwrap();
        assert_eq!(event, PageChangeEvent { page: 0, rows: 20 });
    }

    #[test]
    fn test_report() {
        let mut p = paginator();
        assert_eq!(p.report(), "Showing 1 to 10 of 95 artworks");

        p.first = 90;
        assert_eq!(p.report(), "Showing 91 to 95 of 95 artworks");

        p.set_total_records(0);
        p.first = 0;
        assert_eq!(p.report(), "Showing 0 to 0 of 0 artworks");
    }

    #[test]
    fn test_total_pages_empty() {
        let mut p = Paginator::new(10);
        assert_eq!(p.total_pages(), 0);
        p.set_total_records(1);
        assert_eq!(p.total_pages(), 1);
    }
}
