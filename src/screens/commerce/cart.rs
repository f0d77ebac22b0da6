//! Shopping cart: seeded contents, optimistic removal, and the checkout
//! hand-off.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, Product};
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::router::View;
use crate::theme;
use crate::widgets::ClickableList;

use super::super::{Screen, ScreenCtx, FETCH_TICKS};

const REMOVE_BASE: u16 = 10;

#[derive(Clone, Debug)]
pub struct CartLine {
    pub product: &'static Product,
    pub quantity: u32,
}

/// Sum over the cart lines.
pub fn cart_total(lines: &[CartLine]) -> u32 {
    lines
        .iter()
        .map(|line| line.product.price * line.quantity)
        .sum()
}

pub struct CartScreen {
    items: Remote<Vec<CartLine>>,
}

impl CartScreen {
    pub fn new() -> Self {
        let mut items = Remote::idle();
        items.request(
            FETCH_TICKS,
            data::CART_SEED
                .iter()
                .map(|product| CartLine {
                    product,
                    quantity: 1,
                })
                .collect(),
        );
        Self { items }
    }

    /// Optimistic removal: the row disappears immediately, no server round
    /// trip to wait for.
    fn remove(&mut self, idx: usize) {
        if let Some(items) = self.items.get_mut() {
            if idx < items.len() {
                items.remove(idx);
            }
        }
    }
}

impl Screen for CartScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Enter | InputEvent::Char('o') => {
                let has_items = self.items.get().is_some_and(|items| !items.is_empty());
                has_items.then_some(UiAction::Go(View::Checkout))
            }
            InputEvent::Char('f') => Some(UiAction::Go(View::Invoices)),
            InputEvent::Char(c @ '1'..='9') => {
                self.remove((*c as u8 - b'1') as usize);
                None
            }
            InputEvent::Click(id) if *id >= REMOVE_BASE => {
                self.remove((*id - REMOVE_BASE) as usize);
                None
            }
            _ => None,
        }
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.items.tick(ticks);
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(5)])
            .split(area);

        let mut cl = ClickableList::new();
        if self.items.is_loading() {
            cl.push(Line::from(Span::styled(
                " Sepet yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(items) = self.items.get() {
            if items.is_empty() {
                cl.push(Line::from(Span::styled(
                    " Sepetinizde ürün bulunmamaktadır.",
                    theme::dim(),
                )));
            }
            for (i, line) in items.iter().enumerate() {
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(line.product.name, theme::title_style(Color::White)),
                        Span::styled(
                            format!("  {}", theme::format_lira(line.product.price)),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::styled(
                            format!("   [{}] Kaldır", i + 1),
                            Style::default().fg(Color::Red),
                        ),
                    ]),
                    UiAction::Screen(REMOVE_BASE + i as u16),
                );
                cl.push(Line::from(Span::styled(
                    format!("   {} · adet: {}", line.product.description, line.quantity),
                    theme::dim(),
                )));
            }
        }
        cl.register_targets(chunks[0], cs, 1, 1, 0, 0);

        let list = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Alışveriş Sepeti "),
        );
        f.render_widget(list, chunks[0]);

        let total = self.items.get().map_or(0, |items| cart_total(items));
        let mut footer = ClickableList::new();
        footer.push(Line::from(vec![
            Span::styled(" Toplam: ", theme::label()),
            Span::styled(
                theme::format_lira(total),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        footer.push_clickable(
            Line::from(Span::styled(
                " [O] Ödemeye Geç →",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            UiAction::Go(View::Checkout),
        );
        footer.push_clickable(
            Line::from(Span::styled(" [F] Faturalarım", theme::label())),
            UiAction::Go(View::Invoices),
        );
        footer.register_targets(chunks[1], cs, 1, 1, 0, 0);
        let footer_widget = Paragraph::new(footer.into_lines())
            .block(Block::default().borders(Borders::ALL).border_style(theme::dim()));
        f.render_widget(footer_widget, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> CartScreen {
        let mut screen = CartScreen::new();
        screen.tick(FETCH_TICKS);
        screen
    }

    #[test]
    fn seeded_cart_totals_both_items() {
        let screen = loaded();
        let items = screen.items.get().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(cart_total(items), 1699);
    }

    #[test]
    fn removal_is_optimistic() {
        let mut screen = loaded();
        screen.handle_input(&InputEvent::Char('1'));
        let items = screen.items.get().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product.id, "p2");
        assert_eq!(cart_total(items), 1200);
    }

    #[test]
    fn checkout_requires_items() {
        let mut screen = loaded();
        assert_eq!(
            screen.handle_input(&InputEvent::Enter),
            Some(UiAction::Go(View::Checkout))
        );

        screen.handle_input(&InputEvent::Char('1'));
        screen.handle_input(&InputEvent::Char('1'));
        assert_eq!(screen.handle_input(&InputEvent::Enter), None);
    }

    #[test]
    fn quantity_scales_the_total() {
        let lines = vec![CartLine {
            product: &data::CART_SEED[0],
            quantity: 3,
        }];
        assert_eq!(cart_total(&lines), 1497);
    }
}
