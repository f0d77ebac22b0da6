//! Academy-selection hub: pick a tenant context or jump to the career
//! center. Reaching this screen always clears the active tenant (the app
//! layer does that on navigation), so the cards render unscoped.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::router::View;
use crate::theme;
use crate::widgets::ClickableList;

use super::{Screen, ScreenCtx};

pub struct AcademyScreen;

impl AcademyScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for AcademyScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char(c @ '1'..='9') => {
                let idx = (*c as u8 - b'1') as usize;
                data::TENANTS
                    .get(idx)
                    .map(|t| UiAction::SelectTenant(t.id))
            }
            InputEvent::Char('k') => Some(UiAction::Go(View::CareerCenter)),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(8),
                Constraint::Length(4),
            ])
            .split(area);

        let greeting = ctx
            .session
            .user()
            .map_or_else(String::new, |u| format!(" Hoş geldin, {}!", u.name));
        let header = Paragraph::new(vec![
            Line::from(Span::styled(greeting, theme::title_style(Color::Cyan))),
            Line::from(Span::styled(
                " Hangi akademide çalışmak istiyorsun?",
                theme::dim(),
            )),
        ])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, chunks[0]);

        let mut cl = ClickableList::new();
        for (i, tenant) in data::TENANTS.iter().enumerate() {
            let color = theme::brand_color(tenant.color);
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(
                        format!(" [{}] ", i + 1),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        tenant.name,
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ]),
                UiAction::SelectTenant(tenant.id),
            );
            let course_count = data::courses_for_tenant(Some(tenant.id)).len();
            cl.push(Line::from(Span::styled(
                format!("      {} · {} eğitim", tenant.kind.label(), course_count),
                theme::dim(),
            )));
            cl.push(Line::from(""));
        }
        cl.register_targets(chunks[1], cs, 1, 1, 0, 0);

        let cards = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Akademiler "),
        );
        f.render_widget(cards, chunks[1]);

        let mut footer = ClickableList::new();
        footer.push_clickable(
            Line::from(vec![
                Span::styled(" [K] ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    "Kariyer Merkezi",
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    "  — iş ilanları, hibeler ve CV araçları",
                    theme::dim(),
                ),
            ]),
            UiAction::Go(View::CareerCenter),
        );
        footer.register_targets(chunks[2], cs, 1, 1, 0, 0);
        let footer_widget = Paragraph::new(footer.into_lines())
            .block(Block::default().borders(Borders::ALL).border_style(theme::dim()));
        f.render_widget(footer_widget, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_select_tenants_in_order() {
        let mut screen = AcademyScreen::new();
        assert_eq!(
            screen.handle_input(&InputEvent::Char('1')),
            Some(UiAction::SelectTenant("umraniye"))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Char('3')),
            Some(UiAction::SelectTenant("tech"))
        );
        // Out of range: only three academies exist.
        assert_eq!(screen.handle_input(&InputEvent::Char('4')), None);
    }

    #[test]
    fn career_shortcut() {
        let mut screen = AcademyScreen::new();
        assert_eq!(
            screen.handle_input(&InputEvent::Char('k')),
            Some(UiAction::Go(View::CareerCenter))
        );
    }
}
