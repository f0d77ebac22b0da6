//! Payment result pages: one screen, two outcomes.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent, UiAction};
use crate::router::View;
use crate::theme;
use crate::widgets::ClickableList;

use super::super::{Screen, ScreenCtx};

pub struct PaymentResultScreen {
    success: bool,
}

impl PaymentResultScreen {
    pub fn new(success: bool) -> Self {
        Self { success }
    }
}

impl Screen for PaymentResultScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char('d') | InputEvent::Enter if self.success => {
                Some(UiAction::Go(View::Dashboard))
            }
            InputEvent::Char('t') | InputEvent::Enter if !self.success => {
                Some(UiAction::Go(View::Checkout))
            }
            InputEvent::Char('s') if !self.success => Some(UiAction::Go(View::Cart)),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let mut cl = ClickableList::new();
        cl.push(Line::from(""));

        if self.success {
            cl.push(Line::from(Span::styled(
                "  ✔ Ödeme Başarılı!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            cl.push(Line::from(Span::styled(
                "  Satın aldığınız içerikler hesabınıza tanımlandı.",
                theme::label(),
            )));
            cl.push(Line::from(Span::styled(
                "  Faturanız e-posta adresinize gönderildi.",
                theme::dim(),
            )));
            cl.push(Line::from(""));
            cl.push_clickable(
                Line::from(Span::styled(
                    "  [D] Eğitim Paneline Git →",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                UiAction::Go(View::Dashboard),
            );
        } else {
            cl.push(Line::from(Span::styled(
                "  ✘ Ödeme Başarısız",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            cl.push(Line::from(Span::styled(
                "  Kartınız onaylanmadı. Bilgilerinizi kontrol edip tekrar deneyin.",
                theme::label(),
            )));
            cl.push(Line::from(""));
            cl.push_clickable(
                Line::from(Span::styled(
                    "  [T] Tekrar Dene",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                UiAction::Go(View::Checkout),
            );
            cl.push_clickable(
                Line::from(Span::styled("  [S] Sepete Dön", theme::label())),
                UiAction::Go(View::Cart),
            );
        }
        cl.register_targets(area, cs, 1, 1, 0, 0);

        let border_color = if self.success { Color::Green } else { Color::Red };
        let title = if self.success {
            " Ödeme Onayı "
        } else {
            " Ödeme Hatası "
        };
        let widget = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(title),
        );
        f.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_continues_to_dashboard() {
        let mut screen = PaymentResultScreen::new(true);
        assert_eq!(
            screen.handle_input(&InputEvent::Char('d')),
            Some(UiAction::Go(View::Dashboard))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Enter),
            Some(UiAction::Go(View::Dashboard))
        );
        // Failure-only keys do nothing here.
        assert_eq!(screen.handle_input(&InputEvent::Char('s')), None);
    }

    #[test]
    fn failure_offers_retry_and_cancel() {
        let mut screen = PaymentResultScreen::new(false);
        assert_eq!(
            screen.handle_input(&InputEvent::Char('t')),
            Some(UiAction::Go(View::Checkout))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Enter),
            Some(UiAction::Go(View::Checkout))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Char('s')),
            Some(UiAction::Go(View::Cart))
        );
        assert_eq!(screen.handle_input(&InputEvent::Char('d')), None);
    }
}
