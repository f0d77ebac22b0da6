//! Invoice history.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, Invoice, InvoiceStatus};
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::router::View;
use crate::theme;
use crate::widgets::ClickableList;

use super::super::{Screen, ScreenCtx, FETCH_TICKS};

pub struct InvoicesScreen {
    invoices: Remote<Vec<&'static Invoice>>,
}

impl InvoicesScreen {
    pub fn new() -> Self {
        let mut invoices = Remote::idle();
        invoices.request(FETCH_TICKS, data::INVOICES.iter().collect());
        Self { invoices }
    }
}

impl Screen for InvoicesScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char('s') => Some(UiAction::Go(View::Cart)),
            _ => None,
        }
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.invoices.tick(ticks);
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let mut cl = ClickableList::new();
        if self.invoices.is_loading() {
            cl.push(Line::from(Span::styled(
                " Faturalar yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(invoices) = self.invoices.get() {
            for invoice in invoices {
                let status_color = match invoice.status {
                    InvoiceStatus::Paid => Color::Green,
                    InvoiceStatus::Pending => Color::Yellow,
                    InvoiceStatus::Overdue => Color::Red,
                };
                cl.push(Line::from(vec![
                    Span::styled(format!(" {} ", invoice.id), theme::title_style(Color::White)),
                    Span::styled(
                        format!("{} ", invoice.status.label()),
                        Style::default().fg(status_color),
                    ),
                    Span::styled(
                        theme::format_lira(invoice.amount),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(format!("  {}", invoice.date), theme::dim()),
                ]));
                cl.push(Line::from(Span::styled(
                    format!("   {}", invoice.items.join(", ")),
                    theme::dim(),
                )));
            }
            cl.push(Line::from(""));
            cl.push_clickable(
                Line::from(Span::styled(" [S] Sepete dön", theme::dim())),
                UiAction::Go(View::Cart),
            );
        }
        cl.register_targets(area, cs, 1, 1, 0, 0);

        let widget = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" Faturalarım "),
        );
        f.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoices_arrive_after_fetch() {
        let mut screen = InvoicesScreen::new();
        assert!(screen.invoices.is_loading());
        screen.tick(FETCH_TICKS);
        assert_eq!(screen.invoices.get().unwrap().len(), 2);
    }

    #[test]
    fn cart_shortcut() {
        let mut screen = InvoicesScreen::new();
        assert_eq!(
            screen.handle_input(&InputEvent::Char('s')),
            Some(UiAction::Go(View::Cart))
        );
    }
}
