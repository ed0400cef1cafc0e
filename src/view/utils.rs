//! Utility functions for rendering UI components

use ratatui::layout::Rect;

use super::card::CARD_MIN_WIDTH;

/// Pad or cut `s` to exactly `max_width` characters, marking cuts with "..."
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// Columns taken by the grid block's borders and horizontal padding
pub const GRID_CHROME_WIDTH: u16 = 4;

/// Number of card columns that fit in the grid's inner width
pub fn columns_for_inner_width(inner_width: u16) -> usize {
    (inner_width / CARD_MIN_WIDTH).max(1) as usize
}

/// Number of card columns for a grid block `width` cells wide, chrome included
pub fn grid_columns_for_width(width: u16) -> usize {
    columns_for_inner_width(width.saturating_sub(GRID_CHROME_WIDTH))
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Where the details modal sits inside the full frame
pub fn modal_area(frame_area: Rect) -> Rect {
    centered_rect(frame_area, 80, 20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_string("The Lord of the Rings", 10), "The Lor...");
        assert_eq!(truncate_string("Up", 4), "Up  ");
    }

    #[test]
    fn at_least_one_column() {
        assert_eq!(grid_columns_for_width(10), 1);
        assert_eq!(grid_columns_for_width(GRID_CHROME_WIDTH + CARD_MIN_WIDTH * 3), 3);
        assert_eq!(grid_columns_for_width(GRID_CHROME_WIDTH + CARD_MIN_WIDTH * 3 - 1), 2);
    }

    #[test]
    fn modal_is_centered_and_fits() {
        let frame = Rect::new(0, 0, 120, 40);
        let modal = modal_area(frame);
        assert_eq!(modal, Rect::new(20, 10, 80, 20));

        let small = modal_area(Rect::new(0, 0, 40, 10));
        assert!(small.width <= 36 && small.height <= 8);
    }
}
