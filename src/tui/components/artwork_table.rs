//! Artwork table component
//!
//! Renders one page of artworks with a checkbox column, an image-presence
//! marker and the derived text columns. Owns the cursor; the selection set
//! itself lives on the App.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::Artwork;
use crate::tui::ui::{truncate_string, Styles};

const TITLE_WIDTH: usize = 28;
const PLACE_WIDTH: usize = 14;
const ARTIST_WIDTH: usize = 26;
const INSCRIPTIONS_WIDTH: usize = 16;
const DATE_WIDTH: usize = 14;

/// Table state for the current page of artworks
pub struct ArtworkTable {
    pub artworks: Vec<Artwork>,
    pub state: ListState,
}

impl ArtworkTable {
    pub fn new() -> Self {
        Self {
            artworks: Vec::new(),
            state: ListState::default(),
        }
    }

    /// Replace the page contents and reset the cursor
    pub fn set_artworks(&mut self, artworks: Vec<Artwork>) {
        self.artworks = artworks;
        self.state.select(if self.artworks.is_empty() {
            None
        } else {
            Some(0)
        });
    }

    /// Artwork under the cursor
    pub fn selected_artwork(&self) -> Option<&Artwork> {
        self.state.selected().and_then(|idx| self.artworks.get(idx))
    }

    pub fn navigate_up(&mut self) {
        if self.artworks.is_empty() {
            return;
        }

        let selected = self.state.selected().unwrap_or(0);
        let new_selected = if selected == 0 {
            self.artworks.len() - 1
        } else {
            selected - 1
        };
        self.state.select(Some(new_selected));
    }

    pub fn navigate_down(&mut self) {
        if self.artworks.is_empty() {
            return;
        }

        let selected = self.state.selected().unwrap_or(0);
        self.state.select(Some((selected + 1) % self.artworks.len()));
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Render the table; `is_selected` reports checkbox membership
    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        is_selected: &dyn Fn(i64) -> bool,
        loading: bool,
    ) {
        let title = if loading {
            "Artworks (Loading...)".to_string()
        } else {
            format!("Artworks ({})", self.artworks.len())
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Styles::active_border());

        if self.artworks.is_empty() {
            let message = if loading {
                "Fetching artworks..."
            } else {
                "No artworks on this page."
            };
            let empty_widget = Paragraph::new(message)
                .style(Styles::inactive())
                .block(block);
            f.render_widget(empty_widget, area);
            return;
        }

        let header = ListItem::new(Line::from(Span::styled(header_text(), Styles::title())));

        let items: Vec<ListItem> = std::iter::once(header)
            .chain(self.artworks.iter().enumerate().map(|(i, artwork)| {
                let style = if Some(i) == self.state.selected() {
                    Styles::selected()
                } else {
                    Style::default()
                };
                let content = row_text(artwork, is_selected(artwork.id));
                ListItem::new(Line::from(Span::styled(content, style)))
            }))
            .collect();

        let list = List::new(items).block(block);
        f.render_stateful_widget(list, area, &mut self.state);
    }
}

impl Default for ArtworkTable {
    fn default() -> Self {
        Self::new()
    }
}

fn header_text() -> String {
    format!(
        "    │ Img │ {} │ {} │ {} │ {} │ {}",
        truncate_string("Title", TITLE_WIDTH),
        truncate_string("Place of Origin", PLACE_WIDTH),
        truncate_string("Artist", ARTIST_WIDTH),
        truncate_string("Inscriptions", INSCRIPTIONS_WIDTH),
        truncate_string("Date Range", DATE_WIDTH),
    )
}

/// One table row, derived purely from the artwork value
fn row_text(artwork: &Artwork, selected: bool) -> String {
    let checkbox = if selected { "[x]" } else { "[ ]" };
    let image_marker = if artwork.has_image() { " ▣ " } else { " - " };

    format!(
        "{} │ {} │ {} │ {} │ {} │ {} │ {}",
        checkbox,
        image_marker,
        truncate_string(artwork.display_title(), TITLE_WIDTH),
        truncate_string(artwork.display_place(), PLACE_WIDTH),
        truncate_string(artwork.display_artist(), ARTIST_WIDTH),
        truncate_string(artwork.display_inscriptions(), INSCRIPTIONS_WIDTH),
        truncate_string(&artwork.date_range(), DATE_WIDTH),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: i64, title: &str) -> Artwork {
        Artwork {
            id,
            title: Some(title.to_string()),
            artist_display: None,
            place_of_origin: None,
            inscriptions: None,
            date_start: Some(1900),
            date_end: Some(1950),
            image_id: None,
        }
    }

    #[test]
    fn test_set_artworks_resets_cursor() {
        let mut table = ArtworkTable::new();
        table.set_artworks(vec![artwork(1, "a"), artwork(2, "b")]);
        table.navigate_down();
        assert_eq!(table.selected_artwork().unwrap().id, 2);

        table.set_artworks(vec![artwork(3, "c")]);
        assert_eq!(table.selected_artwork().unwrap().id, 3);

        table.set_artworks(Vec::new());
        assert!(table.selected_artwork().is_none());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut table = ArtworkTable::new();
        table.set_artworks(vec![artwork(1, "a"), artwork(2, "b")]);

        table.navigate_up();
        assert_eq!(table.selected_artwork().unwrap().id, 2);
        table.navigate_down();
        assert_eq!(table.selected_artwork().unwrap().id, 1);
    }

    #[test]
    fn test_row_text_marks_selection_and_fallbacks() {
        let row = row_text(&artwork(1, "Nighthawks"), true);
        assert!(row.starts_with("[x]"));
        assert!(row.contains("Nighthawks"));
        assert!(row.contains("Unknown Artist"));
        assert!(row.contains("1900 - 1950"));

        let row = row_text(&artwork(1, "Nighthawks"), false);
        assert!(row.starts_with("[ ]"));
    }
}
