//! Support & FAQ: category tabs with an accordion question list.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::data;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::theme;
use crate::widgets::{ClickableList, TabBar};

use super::{Screen, ScreenCtx};

const CATEGORY_TAB_BASE: u16 = 100;
const QUESTION_BASE: u16 = 0;

pub struct SupportScreen {
    category: usize,
    /// Index of the expanded question within the category, if any.
    open: Option<usize>,
}

impl SupportScreen {
    pub fn new() -> Self {
        Self {
            category: 0,
            open: None,
        }
    }

    fn set_category(&mut self, idx: usize) {
        if idx < data::FAQ.len() && idx != self.category {
            self.category = idx;
            self.open = None;
        }
    }

    fn toggle_question(&mut self, idx: usize) {
        if idx >= data::FAQ[self.category].entries.len() {
            return;
        }
        self.open = if self.open == Some(idx) {
            None
        } else {
            Some(idx)
        };
    }
}

impl Screen for SupportScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char(c @ 'a'..='c') => {
                self.set_category((*c as u8 - b'a') as usize);
            }
            InputEvent::Char(c @ '1'..='9') => {
                self.toggle_question((*c as u8 - b'1') as usize);
            }
            InputEvent::Click(id) => {
                if *id >= CATEGORY_TAB_BASE {
                    self.set_category((*id - CATEGORY_TAB_BASE) as usize);
                } else {
                    self.toggle_question((*id - QUESTION_BASE) as usize);
                }
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(6)])
            .split(area);

        let tab_style = |active: bool| {
            if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::label()
            }
        };
        let mut bar = TabBar::new(" │ ");
        for (i, category) in data::FAQ.iter().enumerate() {
            let key = (b'a' + i as u8) as char;
            bar = bar.tab(
                format!("{} [{}]", category.name, key.to_uppercase()),
                tab_style(self.category == i),
                UiAction::Screen(CATEGORY_TAB_BASE + i as u16),
            );
        }
        bar.block(Block::default().borders(Borders::ALL).title(" Destek & SSS "))
            .render(f, chunks[0], cs);

        let mut cl = ClickableList::new();
        for (i, entry) in data::FAQ[self.category].entries.iter().enumerate() {
            let expanded = self.open == Some(i);
            let arrow = if expanded { "▼" } else { "▶" };
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(
                        format!(" [{}] {arrow} ", i + 1),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(entry.question, theme::title_style(Color::White)),
                ]),
                UiAction::Screen(QUESTION_BASE + i as u16),
            );
            if expanded {
                cl.push(Line::from(Span::styled(
                    format!("      {}", entry.answer),
                    theme::label(),
                )));
            }
            cl.push(Line::from(""));
        }
        let inner_width = chunks[1].width.saturating_sub(2);
        cl.register_targets(chunks[1], cs, 1, 1, 0, inner_width);

        let list = Paragraph::new(cl.into_lines())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::dim())
                    .title(format!(" {} ", data::FAQ[self.category].name)),
            );
        f.render_widget(list, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_expand_and_collapse() {
        let mut screen = SupportScreen::new();
        screen.handle_input(&InputEvent::Char('1'));
        assert_eq!(screen.open, Some(0));

        // Same question again → collapse.
        screen.handle_input(&InputEvent::Char('1'));
        assert_eq!(screen.open, None);

        // Different question replaces the open one.
        screen.handle_input(&InputEvent::Char('1'));
        screen.handle_input(&InputEvent::Char('2'));
        assert_eq!(screen.open, Some(1));
    }

    #[test]
    fn switching_category_collapses_the_accordion() {
        let mut screen = SupportScreen::new();
        screen.handle_input(&InputEvent::Char('1'));
        screen.handle_input(&InputEvent::Char('b'));
        assert_eq!(screen.category, 1);
        assert_eq!(screen.open, None);
    }

    #[test]
    fn out_of_range_inputs_are_ignored() {
        let mut screen = SupportScreen::new();
        screen.handle_input(&InputEvent::Char('9'));
        assert_eq!(screen.open, None);
        screen.handle_input(&InputEvent::Click(CATEGORY_TAB_BASE + 9));
        assert_eq!(screen.category, 0);
    }

    #[test]
    fn category_clicks_select() {
        let mut screen = SupportScreen::new();
        screen.handle_input(&InputEvent::Click(CATEGORY_TAB_BASE + 2));
        assert_eq!(screen.category, 2);
    }
}
