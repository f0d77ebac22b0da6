//! Checkout: plan selection, card entry, and the simulated payment. The
//! payment settles asynchronously and redirects to the success or failure
//! page from `tick`.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data;
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::router::View;
use crate::theme;
use crate::widgets::ClickableList;

use super::super::{Screen, ScreenCtx, SLOW_TICKS};

const PLAN_BASE: u16 = 10;
const ACT_PAY: u16 = 1;

const CARD_LEN: usize = 16;

/// Outcome of the simulated payment gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    Approved,
    Declined,
}

/// The demo gateway: a complete card number is approved, anything else is
/// declined.
pub fn process_payment(card_digits: &str) -> PaymentOutcome {
    if card_digits.len() == CARD_LEN {
        PaymentOutcome::Approved
    } else {
        PaymentOutcome::Declined
    }
}

pub struct CheckoutScreen {
    plan: usize,
    card_digits: String,
    payment: Remote<PaymentOutcome>,
    redirected: bool,
}

impl CheckoutScreen {
    pub fn new() -> Self {
        // The recommended plan starts selected, like the web storefront.
        let plan = data::PLANS
            .iter()
            .position(|p| p.recommended)
            .unwrap_or(0);
        Self {
            plan,
            card_digits: String::new(),
            payment: Remote::idle(),
            redirected: false,
        }
    }

    fn pay(&mut self) {
        if self.payment.is_loading() || self.redirected {
            return;
        }
        self.payment
            .request(SLOW_TICKS, process_payment(&self.card_digits));
    }
}

impl Screen for CheckoutScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            // Plans select with letters so the digit pad stays free for the
            // card number.
            InputEvent::Char(c @ 'a'..='c') => {
                self.plan = (*c as u8 - b'a') as usize;
            }
            InputEvent::Char(c) if c.is_ascii_digit() => {
                if self.card_digits.len() < CARD_LEN {
                    self.card_digits.push(*c);
                }
            }
            InputEvent::Backspace => {
                self.card_digits.pop();
            }
            InputEvent::Enter => self.pay(),
            InputEvent::Esc => return Some(UiAction::Go(View::Cart)),
            InputEvent::Click(ACT_PAY) => self.pay(),
            InputEvent::Click(id) if *id >= PLAN_BASE => {
                let idx = (*id - PLAN_BASE) as usize;
                if idx < data::PLANS.len() {
                    self.plan = idx;
                }
            }
            _ => {}
        }
        None
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.payment.tick(ticks);
        if self.redirected {
            return None;
        }
        match self.payment.get().copied() {
            Some(PaymentOutcome::Approved) => {
                self.redirected = true;
                Some(UiAction::Go(View::PaymentSuccess))
            }
            Some(PaymentOutcome::Declined) => {
                self.redirected = true;
                Some(UiAction::Go(View::PaymentFailure))
            }
            None => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(6)])
            .split(area);

        let mut cl = ClickableList::new();
        for (i, plan) in data::PLANS.iter().enumerate() {
            let selected = i == self.plan;
            let marker = if selected { "●" } else { "○" };
            let name_style = if selected {
                theme::title_style(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            let price = if plan.price == 0 {
                "Ücretsiz".to_string()
            } else {
                format!("{}/ay", theme::format_lira(plan.price))
            };
            let badge = if plan.recommended { "  ★ Önerilen" } else { "" };
            let key = (b'a' + i as u8) as char;
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(
                        format!(" [{}] {marker} ", key.to_uppercase()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(plan.name, name_style),
                    Span::styled(format!("  {price}"), Style::default().fg(Color::Yellow)),
                    Span::styled(badge, Style::default().fg(Color::Magenta)),
                ]),
                UiAction::Screen(PLAN_BASE + i as u16),
            );
            cl.push(Line::from(Span::styled(
                format!("      {}", plan.features.join(" · ")),
                theme::dim(),
            )));
        }
        cl.register_targets(chunks[0], cs, 1, 1, 0, 0);

        let plans = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Plan Seçimi "),
        );
        f.render_widget(plans, chunks[0]);

        let masked: String = self
            .card_digits
            .chars()
            .enumerate()
            .map(|(i, c)| if i < CARD_LEN - 4 { '•' } else { c })
            .collect();
        let mut footer = ClickableList::new();
        footer.push(Line::from(vec![
            Span::styled(" Kart No: ", theme::label()),
            Span::styled(
                if masked.is_empty() {
                    "0000 0000 0000 0000".to_string()
                } else {
                    masked
                },
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  ({}/{CARD_LEN} hane)", self.card_digits.len()),
                theme::dim(),
            ),
        ]));
        let pay_line = if self.payment.is_loading() {
            Line::from(Span::styled(
                " Ödeme işleniyor...",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(Span::styled(
                " [Enter] Ödemeyi Tamamla",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        };
        footer.push_clickable(pay_line, UiAction::Screen(ACT_PAY));
        footer.push_clickable(
            Line::from(Span::styled(" [Esc] Sepete dön", theme::dim())),
            UiAction::Go(View::Cart),
        );
        footer.register_targets(chunks[1], cs, 1, 1, 0, 0);
        let footer_widget = Paragraph::new(footer.into_lines())
            .block(Block::default().borders(Borders::ALL).title(" Ödeme "));
        f.render_widget(footer_widget, chunks[1]);
    }
}
