//! Selection summary panel
//!
//! Pure display of the current selection: a count, the comma-joined titles
//! and the clear-key hint. Renders nothing at all when empty.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Artwork;
use crate::tui::ui::Styles;

/// Panel height in rows; 0 collapses the panel out of the layout
pub fn height(selected: &[Artwork]) -> u16 {
    if selected.is_empty() {
        0
    } else {
        4
    }
}

/// Comma-joined titles of the selected artworks, "Untitled" per missing one
pub fn selected_titles(selected: &[Artwork]) -> String {
    selected
        .iter()
        .map(Artwork::display_title)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render(f: &mut Frame, area: Rect, selected: &[Artwork]) {
    if selected.is_empty() {
        return;
    }

    let lines = vec![
        Line::from(format!("{} artwork(s) selected", selected.len())),
        Line::from(format!("Selected: {}", selected_titles(selected))),
    ];

    let panel = Paragraph::new(lines).style(Styles::info()).block(
        Block::default()
            .title("Selection (c: Clear Selection)")
            .borders(Borders::ALL)
            .border_style(Styles::active_border()),
    );

    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn untitled(id: i64) -> Artwork {
        Artwork {
            id,
            title: None,
            artist_display: None,
            place_of_origin: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
            image_id: None,
        }
    }

    #[test]
    fn test_empty_selection_collapses_panel() {
        assert_eq!(height(&[]), 0);
    }

    #[test]
    fn test_non_empty_selection_has_height() {
        assert_eq!(height(&[untitled(1)]), 4);
    }

    #[test]
    fn test_titles_join_with_fallback() {
        let mut named = untitled(2);
        named.title = Some("Water Lilies".to_string());

        assert_eq!(
            selected_titles(&[untitled(1), named]),
            "Untitled, Water Lilies"
        );
    }
}
