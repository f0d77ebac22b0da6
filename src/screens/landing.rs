//! Public landing page: platform pitch plus the two entry points.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent, UiAction};
use crate::router::View;
use crate::theme;
use crate::widgets::ClickableList;

use super::{Screen, ScreenCtx};

pub struct LandingScreen;

impl LandingScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for LandingScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char('g') | InputEvent::Enter => Some(UiAction::Go(View::Login)),
            InputEvent::Char('a') => Some(UiAction::Go(View::Activation)),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let mut cl = ClickableList::new();
        cl.push_clickable(
            Line::from(Span::styled(
                " [G] Giriş Yap",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            UiAction::Go(View::Login),
        );
        cl.push_clickable(
            Line::from(Span::styled(
                " [A] Aktivasyon Kodum Var",
                Style::default().fg(Color::Green),
            )),
            UiAction::Go(View::Activation),
        );

        // Size the action panel to its content (plus borders).
        let action_height = cl.visual_height(area.width.saturating_sub(2)) + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Min(6),
                Constraint::Length(action_height),
            ])
            .split(area);

        let hero = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  AKADEMİ İSTANBUL",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Şehrin tüm eğitim gücü tek platformda",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "  Belediyeler, üniversiteler ve kurumlar tek çatı altında.",
                theme::dim(),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(hero, chunks[0]);

        let features = Paragraph::new(vec![
            Line::from(""),
            Line::from("  • Canlı dersler ve soru çözüm kampları"),
            Line::from("  • Blockchain ile doğrulanabilir sertifikalar"),
            Line::from("  • Kariyer merkezi: iş ilanları ve hibe programları"),
            Line::from("  • 120+ eğitim, 40.000+ aktif öğrenci"),
        ])
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" Neler Var? "),
        );
        f.render_widget(features, chunks[1]);

        cl.register_targets(chunks[2], cs, 1, 1, 0, 0);
        let actions = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(actions, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_entry_points() {
        let mut screen = LandingScreen::new();
        assert_eq!(
            screen.handle_input(&InputEvent::Char('g')),
            Some(UiAction::Go(View::Login))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Enter),
            Some(UiAction::Go(View::Login))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Char('a')),
            Some(UiAction::Go(View::Activation))
        );
        assert_eq!(screen.handle_input(&InputEvent::Char('z')), None);
    }
}
