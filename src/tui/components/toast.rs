//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content.

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use crate::tui::ui::Styles;

/// Lifetime of an error toast
const TOAST_LIFE: Duration = Duration::from_secs(3);

/// An auto-dismissing notification
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create an error toast with the standard 3-second life
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: TOAST_LIFE,
        }
    }

    /// Whether the toast has outlived its duration and should be dropped
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render in the bottom-right corner, clearing the area first so the
    /// toast sits above the table.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .title("Error")
            .borders(Borders::ALL)
            .border_style(Styles::error());

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Styles::error())
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_not_expired() {
        let toast = Toast::error("Failed to fetch artworks");
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_backdated_toast_expires() {
        let mut toast = Toast::error("Failed to fetch artworks");
        toast.created_at = Instant::now() - Duration::from_secs(4);
        assert!(toast.is_expired());
    }
}
