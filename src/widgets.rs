//! Reusable clickable UI components.
//!
//! Each component encapsulates both rendering and click target registration,
//! so the visual output and the interactive behaviour cannot drift apart.
//!
//! - [`TabBar`] — horizontal tab navigation (rendering + click targets).
//! - [`ClickableList`] — line list with per-row click targets.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, UiAction};

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal tab bar.
///
/// Renders tabs as a single row of styled labels separated by a configurable
/// separator string, and registers click targets that match the actual
/// rendered positions (accounting for wide characters and dynamic labels).
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, UiAction)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    /// Add a tab with its label, style, and action.
    pub fn tab(mut self, label: impl Into<String>, style: Style, action: UiAction) -> Self {
        self.tabs.push((label.into(), style, action));
        self
    }

    /// Wrap the tab bar in a [`Block`]. With a bordered block, click target
    /// positions are adjusted via `Block::inner()`.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Render the tab bar and register click targets.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let mut spans: Vec<Span> = Vec::new();
        let sep_width = Line::from(self.separator).width() as u16;
        let mut tab_widths: Vec<(u16, UiAction)> = Vec::new();

        for (i, (label, style, action)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            tab_widths.push((Line::from(padded.as_str()).width() as u16, *action));
            spans.push(Span::styled(padded, *style));
        }

        // Compute inner content area (accounting for borders) before consuming block
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };

        let line = Line::from(spans);
        let paragraph = match self.block {
            Some(block) => Paragraph::new(line).block(block),
            None => Paragraph::new(line),
        };
        f.render_widget(paragraph, area);

        // Inner x/width for horizontal accuracy, outer y/height for better
        // tap tolerance on the full bar.
        cs.register_tab_targets(
            &tab_widths,
            sep_width,
            inner.x,
            area.y,
            inner.width,
            area.height.max(1),
        );
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// Annotate lines as clickable when you add them, then call
/// [`register_targets`](ClickableList::register_targets) once after
/// rendering; targets land on the correct rows no matter how many header or
/// spacer lines precede them.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action)` pairs — line_index is the index into `lines`.
    actions: Vec<(u16, UiAction)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line.
    ///
    /// The action is bound to whatever row this line ends up on — inserting
    /// or removing lines before it moves the target automatically.
    pub fn push_clickable(&mut self, line: Line<'a>, action: UiAction) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action));
        self.lines.push(line);
    }

    /// Total number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Visual height of the list when wrapped into `width` columns. Useful
    /// for sizing a layout constraint to the content.
    pub fn visual_height(&self, width: u16) -> u16 {
        Paragraph::new(self.lines.clone()).line_count(width) as u16
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `area` — the widget area (including borders).
    /// * `cs` — the shared click state.
    /// * `top_offset` — rows before content (e.g. 1 for a top border).
    /// * `bottom_offset` — rows after content (e.g. 1 for a bottom border).
    /// * `scroll` — vertical scroll offset in visual rows (0 if not scrollable).
    /// * `inner_width` — content width for wrap calculation. Pass `0` when
    ///   the widget does **not** use `Wrap`; each logical line is then
    ///   assumed to occupy exactly one visual row.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        if inner_width == 0 {
            // 1 logical line = 1 visual row (no wrapping).
            for &(line_idx, action) in &self.actions {
                if line_idx < scroll {
                    continue;
                }
                let row = content_y + (line_idx - scroll);
                if row >= content_end {
                    continue;
                }
                cs.add_row_target(area, row, action);
            }
            return;
        }

        // Wrap-aware path: compute the visual row offset for each logical line.
        let w = inner_width as usize;
        let mut visual_starts: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut visual_heights: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            visual_starts.push(cumulative);
            let lw = line.width();
            let h = if lw <= w { 1 } else { lw.div_ceil(w) as u16 };
            visual_heights.push(h);
            cumulative += h;
        }

        for &(line_idx, action) in &self.actions {
            let li = line_idx as usize;
            if li >= self.lines.len() {
                continue;
            }
            let vstart = visual_starts[li];
            let vheight = visual_heights[li];

            // Register a click target for every visual row this line spans.
            for r in 0..vheight {
                let vr = vstart + r;
                if vr < scroll {
                    continue;
                }
                let screen_row = content_y + (vr - scroll);
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ClickState;

    fn local(id: u16) -> UiAction {
        UiAction::Screen(id)
    }

    // ── TabBar tests ───────────────────────────────────────────

    #[test]
    fn tab_bar_registers_targets_based_on_text_width() {
        // TabBar delegates to register_tab_targets (tested in input.rs);
        // check the high-level behaviour: one target per tab.
        let mut cs = ClickState::new();
        let tabs = [(6, local(10)), (6, local(11)), (6, local(12))];
        cs.register_tab_targets(&tabs, 3, 0, 0, 80, 1);
        assert_eq!(cs.targets.len(), 3);
    }

    // ── ClickableList tests ────────────────────────────────────

    #[test]
    fn clickable_list_basic() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("başlık"));
        cl.push_clickable(Line::from("satır 0"), local(10));
        cl.push_clickable(Line::from("satır 1"), local(11));
        cl.push(Line::from("alt bilgi"));

        assert_eq!(cl.len(), 4);

        // area with Borders::ALL → top_offset=1, bottom_offset=1
        let area = Rect::new(0, 5, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        // "satır 0" is line 1 → row = 5 + 1 + 1 = 7
        // "satır 1" is line 2 → row = 5 + 1 + 2 = 8
        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 7), Some(local(10)));
        assert_eq!(cs.hit_test(10, 8), Some(local(11)));
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn clickable_list_with_scroll() {
        let mut cl = ClickableList::new();
        for i in 0..4 {
            cl.push_clickable(Line::from(format!("satır {i}")), local(100 + i));
        }

        let area = Rect::new(0, 10, 80, 5);
        let mut cs = ClickState::new();
        // scroll=2: lines 0 and 1 are scrolled out of view
        cl.register_targets(area, &mut cs, 0, 1, 2, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 10), Some(local(102)));
        assert_eq!(cs.hit_test(10, 11), Some(local(103)));
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn clickable_list_clipped_by_area() {
        let mut cl = ClickableList::new();
        for i in 0..20 {
            cl.push_clickable(Line::from(format!("satır {i}")), local(50 + i));
        }

        // Small area with borders: only 3 content rows
        let area = Rect::new(0, 0, 80, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(10, 1), Some(local(50)));
        assert_eq!(cs.hit_test(10, 3), Some(local(52)));
        assert_eq!(cs.hit_test(10, 4), None); // clipped by bottom border
    }

    #[test]
    fn clickable_list_empty() {
        let cl: ClickableList = ClickableList::new();
        assert!(cl.is_empty());

        let area = Rect::new(0, 0, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);
        assert_eq!(cs.targets.len(), 0);
    }

    #[test]
    fn clickable_list_insert_line_shifts_targets() {
        // Inserting a non-clickable line before clickable items adjusts
        // their rows automatically.
        let mut cl = ClickableList::new();
        cl.push(Line::from("başlık 1"));
        cl.push(Line::from("başlık 2"));
        cl.push_clickable(Line::from("kursu aç"), local(42));

        let area = Rect::new(0, 0, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.hit_test(10, 3), Some(local(42)));
        assert_eq!(cs.hit_test(10, 2), None);
    }

    #[test]
    fn clickable_list_wrap_aware_targets() {
        // With inner_width set, lines wider than the width occupy multiple
        // visual rows and push subsequent targets down.
        let mut cl = ClickableList::new();
        cl.push(Line::from("12345678901234567890")); // wraps to 2 rows in 10
        cl.push_clickable(Line::from("satır"), local(10));

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 2), Some(local(10)));
        assert_eq!(cs.hit_test(5, 0), None);
        assert_eq!(cs.hit_test(5, 1), None);
    }

    #[test]
    fn clickable_list_wrap_covers_all_rows() {
        // A clickable line that wraps is clickable on all its visual rows.
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("123456789012345678901234567890"), local(42));

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 0), Some(local(42)));
        assert_eq!(cs.hit_test(5, 1), Some(local(42)));
        assert_eq!(cs.hit_test(5, 2), Some(local(42)));
        assert_eq!(cs.hit_test(5, 3), None);
    }

    #[test]
    fn clickable_list_wrap_with_scroll() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("12345678901234567890"), local(10));
        cl.push_clickable(Line::from("satır"), local(11));

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 1, 10);

        // Line 0 row 0 scrolled out, row 1 at screen row 0
        assert_eq!(cs.hit_test(5, 0), Some(local(10)));
        // Line 1 at visual row 2, screen row = 2-1 = 1
        assert_eq!(cs.hit_test(5, 1), Some(local(11)));
    }
}
