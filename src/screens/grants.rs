//! Grant and opportunity programs, with mock applications.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, Grant};
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::theme;
use crate::widgets::ClickableList;

use super::{Screen, ScreenCtx, FETCH_TICKS, SLOW_TICKS};

pub struct GrantsScreen {
    grants: Remote<Vec<&'static Grant>>,
    applied: Vec<&'static str>,
    applying: Remote<&'static str>,
}

impl GrantsScreen {
    pub fn new() -> Self {
        let mut grants = Remote::idle();
        // Grants come from a slower upstream than the course lists.
        grants.request(FETCH_TICKS + 1, data::GRANTS.iter().collect());
        Self {
            grants,
            applied: Vec::new(),
            applying: Remote::idle(),
        }
    }

    fn apply_to(&mut self, idx: usize) {
        if self.applying.is_loading() {
            return;
        }
        let Some(grant) = self.grants.get().and_then(|list| list.get(idx).copied()) else {
            return;
        };
        if !self.applied.contains(&grant.id) {
            self.applying.request(SLOW_TICKS, grant.id);
        }
    }
}

impl Screen for GrantsScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char(c @ '1'..='9') => {
                self.apply_to((*c as u8 - b'1') as usize);
                None
            }
            InputEvent::Click(id) => {
                self.apply_to(*id as usize);
                None
            }
            _ => None,
        }
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.grants.tick(ticks);
        self.applying.tick(ticks);
        if let Some(grant_id) = self.applying.get().copied() {
            if !self.applied.contains(&grant_id) {
                self.applied.push(grant_id);
            }
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(6)])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(" Fırsatlar & Hibeler", theme::title_style(Color::Green)),
            Span::styled(
                "  — girişimciler için destek programları",
                theme::dim(),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        f.render_widget(header, chunks[0]);

        let mut cl = ClickableList::new();
        if self.grants.is_loading() {
            cl.push(Line::from(Span::styled(
                " Hibe programları yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(grants) = self.grants.get() {
            for (i, grant) in grants.iter().enumerate() {
                let applied = self.applied.contains(&grant.id);
                let action_label = if applied {
                    Span::styled(
                        " ✔ Başvurunuz başarıyla alındı.",
                        Style::default().fg(Color::Green),
                    )
                } else {
                    Span::styled(
                        format!(" [{}] Başvur", i + 1),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                };
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(grant.title, theme::title_style(Color::White)),
                        action_label,
                    ]),
                    UiAction::Screen(i as u16),
                );
                cl.push(Line::from(Span::styled(
                    format!(
                        "   {} · Son başvuru: {} · {}",
                        grant.organization, grant.deadline, grant.amount
                    ),
                    theme::dim(),
                )));
            }
            if self.applying.is_loading() {
                cl.push(Line::from(Span::styled(
                    " Başvurunuz iletiliyor...",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
        cl.register_targets(chunks[1], cs, 1, 1, 0, 0);

        let list = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" Açık Programlar "),
        );
        f.render_widget(list, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_application_flow() {
        let mut screen = GrantsScreen::new();
        screen.tick(FETCH_TICKS + 1);

        screen.handle_input(&InputEvent::Click(2));
        assert!(screen.applied.is_empty());
        screen.tick(SLOW_TICKS);
        assert_eq!(screen.applied, vec!["3"]);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut screen = GrantsScreen::new();
        screen.tick(FETCH_TICKS + 1);
        screen.handle_input(&InputEvent::Char('9'));
        screen.tick(SLOW_TICKS);
        assert!(screen.applied.is_empty());
    }
}
