//! Shared input handling: coordinate conversion, click targets, and the
//! typed actions they trigger.
//!
//! Clickable regions are re-registered on every frame by whatever is
//! rendered, each carrying a [`UiAction`]. Navigation-level actions are
//! executed by the app layer without involving the current screen at all;
//! `Screen(..)` ids are routed back to the screen that registered them.

use ratzilla::ratatui::layout::Rect;

use crate::router::View;
use crate::session::Role;

/// Input events normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable key press.
    Char(char),
    Enter,
    Backspace,
    Esc,
    /// A click/tap on a screen-local target, identified by the id the
    /// screen registered it under.
    Click(u16),
}

/// What a clickable region (or a screen's key handler) asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Navigate to a view.
    Go(View),
    /// Open the course player on a specific course.
    OpenCourse(&'static str),
    /// Drill into one student's analytics.
    SelectStudent(u32),
    /// Enter a tenant context from the academy-selection hub.
    SelectTenant(&'static str),
    /// Authenticate as one of the demo identities.
    Login(Role),
    Logout,
    /// Screen-local action; delivered to the current screen as
    /// [`InputEvent::Click`].
    Screen(u16),
}

/// A region that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Terminal-cell rectangle for hit testing.
    pub rect: Rect,
    pub action: UiAction,
}

/// Shared state between the render loop and the click handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region.
    pub fn add_target(&mut self, rect: Rect, action: UiAction) {
        self.targets.push(ClickTarget { rect, action });
    }

    /// Convenience: register a full-row click target at the given row
    /// within an area. Rows outside the area are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action: UiAction) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action,
            });
        }
    }

    /// Register click targets for a horizontal tab bar based on actual text
    /// widths.
    ///
    /// Each entry in `tabs` is `(display_width, action)` for the **padded**
    /// label text of that tab; `separator_width` is the display width of
    /// the separator between tabs. Each target covers its label plus half
    /// of the adjacent separator(s); the first and last tabs extend to the
    /// area edges so the bar has no dead zones.
    pub fn register_tab_targets(
        &mut self,
        tabs: &[(u16, UiAction)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        let n = tabs.len();
        if n == 0 || total_width == 0 {
            return;
        }

        // Compute the starting column of each tab label
        let mut starts: Vec<u16> = Vec::with_capacity(n);
        let mut cursor: u16 = 0;
        for (i, &(w, _)) in tabs.iter().enumerate() {
            if i > 0 {
                cursor += separator_width;
            }
            starts.push(cursor);
            cursor += w;
        }

        for i in 0..n {
            let (_, action) = tabs[i];

            // Left boundary: first tab from 0, others from midpoint of left separator
            let left = if i == 0 {
                0
            } else {
                let prev_end = starts[i - 1] + tabs[i - 1].0;
                prev_end + (starts[i] - prev_end) / 2
            };

            // Right boundary: last tab to total_width, others to midpoint of right sep
            let right = if i == n - 1 {
                total_width
            } else {
                let cur_end = starts[i] + tabs[i].0;
                let next_start = starts[i + 1];
                cur_end + (next_start - cur_end) / 2
            };

            let w = right.saturating_sub(left);
            if w > 0 {
                self.add_target(Rect::new(x + left, y, w, height), action);
            }
        }
    }

    /// Hit-test a terminal cell coordinate against all registered targets.
    /// Later-registered (topmost) targets win when regions overlap.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<UiAction> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action)
            } else {
                None
            }
        })
    }
}

/// Whether a screen width (in columns) should use the stacked narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 70
}

/// Convert a pixel Y coordinate (relative to the grid container's top edge)
/// to a terminal row index. `None` when outside the grid or inputs are
/// degenerate.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }

    let cell_height = grid_height / f64::from(terminal_rows);
    let row = (click_y / cell_height) as u16;

    if row >= terminal_rows {
        return None;
    }

    Some(row)
}

/// Convert a pixel X coordinate to a terminal column index.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / f64::from(terminal_cols);
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols {
        None
    } else {
        Some(col)
    }
}
