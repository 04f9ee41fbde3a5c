use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub search_bar: Rect,
    pub table: Rect,
    pub action_bar: Rect,
    pub pagination: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Table / alert
            Constraint::Length(1), // Delete Selected + count
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        search_bar: chunks[1],
        table: chunks[2],
        action_bar: chunks[3],
        pagination: chunks[4],
        status_bar: chunks[5],
    }
}

/// Centered popup rect: `pct_w`% x `height` rows, at least `min_w` wide,
/// never larger than `area`.
pub fn centered_popup(area: Rect, pct_w: u16, min_w: u16, height: u16) -> Rect {
    let pct = (u32::from(area.width) * u32::from(pct_w) / 100) as u16;
    let w = pct
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 100, 40);
        let l = compute_layout(area);
        assert_eq!(l.header.height, 1);
        assert_eq!(l.search_bar.height, 3);
        assert_eq!(l.table.height, 40 - 1 - 3 - 1 - 1 - 1);
        assert_eq!(l.status_bar.y, 39);
    }

    #[test]
    fn test_popup_fits_small_terminal() {
        let area = Rect::new(0, 0, 30, 6);
        let p = centered_popup(area, 60, 50, 12);
        assert!(p.width <= 26);
        assert!(p.height <= 4);
    }

    #[test]
    fn test_popup_on_very_wide_terminal() {
        let area = Rect::new(0, 0, 2000, 50);
        let p = centered_popup(area, 60, 50, 12);
        assert_eq!(p.width, 1200);
        assert_eq!(p.height, 12);
        assert_eq!(p.x, 400);
    }
}
