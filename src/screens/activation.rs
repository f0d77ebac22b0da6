//! Tenant onboarding via activation code.
//!
//! The code is checked against the partner-institution table through the
//! mock-latency layer, so the verifying state is visible. A validated code
//! hands over to the login screen.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::data;
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::router::View;
use crate::theme;
use crate::widgets::ClickableList;

use super::{Screen, ScreenCtx, SLOW_TICKS};

const MAX_CODE_LEN: usize = 12;

/// Result of a code check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub tenant_id: Option<&'static str>,
    pub message: &'static str,
}

/// Look a code up in the partner table. Pure; the screen adds the latency.
pub fn validate_code(code: &str) -> Verdict {
    for (known, tenant_id, message) in &data::ACTIVATION_CODES {
        if *known == code {
            return Verdict {
                tenant_id: Some(tenant_id),
                message,
            };
        }
    }
    Verdict {
        tenant_id: None,
        message: "Geçersiz aktivasyon kodu.",
    }
}

/// Normalize typed input: uppercase, alphanumeric only.
pub fn normalize_char(c: char) -> Option<char> {
    if c.is_ascii_alphanumeric() {
        Some(c.to_ascii_uppercase())
    } else {
        None
    }
}

pub struct ActivationScreen {
    code: String,
    verdict: Remote<Verdict>,
}

impl ActivationScreen {
    pub fn new() -> Self {
        Self {
            code: String::new(),
            verdict: Remote::idle(),
        }
    }

    fn submit(&mut self) {
        if self.code.is_empty() || self.verdict.is_loading() {
            return;
        }
        let verdict = validate_code(&self.code);
        self.verdict.request(SLOW_TICKS, verdict);
    }

    fn validated(&self) -> bool {
        self.verdict
            .get()
            .is_some_and(|v| v.tenant_id.is_some())
    }
}

impl Screen for ActivationScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Enter => {
                if self.validated() {
                    return Some(UiAction::Go(View::Login));
                }
                self.submit();
                None
            }
            InputEvent::Backspace => {
                self.code.pop();
                None
            }
            InputEvent::Char(c) => {
                if self.code.len() < MAX_CODE_LEN {
                    if let Some(c) = normalize_char(*c) {
                        self.code.push(c);
                    }
                }
                None
            }
            InputEvent::Esc => Some(UiAction::Go(View::Landing)),
            InputEvent::Click(_) => None,
        }
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.verdict.tick(ticks);
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Min(5),
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                " Hesabınızı Etkinleştirin",
                theme::title_style(Color::Cyan),
            )),
            Line::from(Span::styled(
                " Size verilen aktivasyon kodunu girerek kurumunuzun",
                theme::dim(),
            )),
            Line::from(Span::styled(
                " eğitim platformuna anında erişim sağlayın.",
                theme::dim(),
            )),
        ])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, chunks[0]);

        let code_display = if self.code.is_empty() {
            Span::styled("Örn: IBB2024", theme::dim())
        } else {
            Span::styled(
                self.code.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let input = Paragraph::new(vec![
            Line::from(vec![Span::raw(" > "), code_display]),
            Line::from(Span::styled(
                " [Enter] doğrula  [Backspace] sil",
                theme::dim(),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Eğitim Aktivasyon Kodu "),
        );
        f.render_widget(input, chunks[1]);

        let mut cl = ClickableList::new();
        if self.verdict.is_loading() {
            cl.push(Line::from(Span::styled(
                " Doğrulanıyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(verdict) = self.verdict.get() {
            let (color, prefix) = if verdict.tenant_id.is_some() {
                (Color::Green, "✔ ")
            } else {
                (Color::Red, "✘ ")
            };
            cl.push(Line::from(Span::styled(
                format!(" {prefix}{}", verdict.message),
                Style::default().fg(color),
            )));
            if verdict.tenant_id.is_some() {
                cl.push(Line::from(""));
                cl.push_clickable(
                    Line::from(Span::styled(
                        " [Enter] Giriş ekranına devam et",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )),
                    UiAction::Go(View::Login),
                );
            }
        } else {
            cl.push(Line::from(Span::styled(
                " Kod bekleniyor.",
                theme::dim(),
            )));
        }
        cl.push(Line::from(""));
        cl.push_clickable(
            Line::from(Span::styled(" [Esc] Geri dön", theme::dim())),
            UiAction::Go(View::Landing),
        );
        cl.register_targets(chunks[2], cs, 1, 1, 0, 0);

        let status = Paragraph::new(cl.into_lines())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).border_style(theme::dim()));
        f.render_widget(status, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_their_tenant() {
        assert_eq!(validate_code("IBB2024").tenant_id, Some("ibb"));
        assert_eq!(validate_code("TECH101").tenant_id, Some("tech"));
    }

    #[test]
    fn unknown_code_is_invalid() {
        let verdict = validate_code("NOPE99");
        assert_eq!(verdict.tenant_id, None);
        assert_eq!(verdict.message, "Geçersiz aktivasyon kodu.");
    }

    #[test]
    fn typing_normalizes_to_uppercase_alphanumerics() {
        let mut screen = ActivationScreen::new();
        for c in "ibb 20-24!".chars() {
            screen.handle_input(&InputEvent::Char(c));
        }
        assert_eq!(screen.code, "IBB2024");
    }

    #[test]
    fn code_length_is_capped() {
        let mut screen = ActivationScreen::new();
        for _ in 0..30 {
            screen.handle_input(&InputEvent::Char('A'));
        }
        assert_eq!(screen.code.len(), MAX_CODE_LEN);
    }

    #[test]
    fn backspace_edits_the_code() {
        let mut screen = ActivationScreen::new();
        screen.handle_input(&InputEvent::Char('a'));
        screen.handle_input(&InputEvent::Char('b'));
        screen.handle_input(&InputEvent::Backspace);
        assert_eq!(screen.code, "A");
    }

    #[test]
    fn verification_takes_time_then_settles() {
        let mut screen = ActivationScreen::new();
        for c in "IBB2024".chars() {
            screen.handle_input(&InputEvent::Char(c));
        }
        screen.handle_input(&InputEvent::Enter);
        assert!(screen.verdict.is_loading());
        assert!(!screen.validated());

        screen.tick(SLOW_TICKS);
        assert!(screen.validated());
    }

    #[test]
    fn enter_after_validation_continues_to_login() {
        let mut screen = ActivationScreen::new();
        for c in "TECH101".chars() {
            screen.handle_input(&InputEvent::Char(c));
        }
        screen.handle_input(&InputEvent::Enter);
        screen.tick(SLOW_TICKS);

        assert_eq!(
            screen.handle_input(&InputEvent::Enter),
            Some(UiAction::Go(View::Login))
        );
    }

    #[test]
    fn empty_code_is_not_submitted() {
        let mut screen = ActivationScreen::new();
        screen.handle_input(&InputEvent::Enter);
        assert!(!screen.verdict.is_loading());
    }
}
