//! Demo login: pick one of the simulated identities. There is no password
//! in the demo, only a role choice.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::router::View;
use crate::session::Role;
use crate::theme;
use crate::widgets::ClickableList;

use super::{Screen, ScreenCtx};

const ROLE_CHOICES: [(char, Role, &str); 4] = [
    ('1', Role::Student, "Derslere ve kariyer araçlarına erişim"),
    ('2', Role::Instructor, "İçerik yönetimi ve stüdyo rezervasyonu"),
    ('3', Role::Admin, "Tüm platformun yönetimi"),
    ('4', Role::TenantAdmin, "Kurum paneli ve raporlar"),
];

pub struct LoginScreen;

impl LoginScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for LoginScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char(c) => ROLE_CHOICES
                .iter()
                .find(|(key, _, _)| key == c)
                .map(|(_, role, _)| UiAction::Login(*role)),
            InputEvent::Esc => Some(UiAction::Go(View::Landing)),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(8)])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                " Giriş Yap",
                theme::title_style(Color::Cyan),
            )),
            Line::from(Span::styled(
                " Demo hesaplarından biriyle devam edin.",
                theme::dim(),
            )),
        ])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, chunks[0]);

        let mut cl = ClickableList::new();
        for (key, role, blurb) in &ROLE_CHOICES {
            let seed = data::user_seed(*role);
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(
                        format!(" [{}] ", key.to_uppercase()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(role.label(), Style::default().fg(Color::White)),
                    Span::styled(format!("  ({})", seed.name), theme::label()),
                ]),
                UiAction::Login(*role),
            );
            cl.push(Line::from(Span::styled(format!("      {blurb}"), theme::dim())));
        }
        cl.push(Line::from(""));
        cl.push_clickable(
            Line::from(Span::styled(" [Esc] Geri dön", theme::dim())),
            UiAction::Go(View::Landing),
        );
        cl.register_targets(chunks[1], cs, 1, 1, 0, 0);

        let list = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Hesap Seçin "),
        );
        f.render_widget(list, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_pick_roles() {
        let mut screen = LoginScreen::new();
        assert_eq!(
            screen.handle_input(&InputEvent::Char('1')),
            Some(UiAction::Login(Role::Student))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Char('3')),
            Some(UiAction::Login(Role::Admin))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Char('4')),
            Some(UiAction::Login(Role::TenantAdmin))
        );
        assert_eq!(screen.handle_input(&InputEvent::Char('5')), None);
    }

    #[test]
    fn escape_returns_to_landing() {
        let mut screen = LoginScreen::new();
        assert_eq!(
            screen.handle_input(&InputEvent::Esc),
            Some(UiAction::Go(View::Landing))
        );
    }
}
