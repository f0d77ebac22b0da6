//! Studio booking for instructors: pick a day, book a free slot.
//!
//! Slot availability is re-fetched on every day change; the stale-load
//! guard in `Remote` keeps a slow previous day from overwriting the list.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data;
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::theme;
use crate::widgets::ClickableList;

use super::{Screen, ScreenCtx, SLOW_TICKS};

const MAX_DAY: u32 = 13;
const SLOT_BASE: u16 = 10;
const ACT_PREV_DAY: u16 = 1;
const ACT_NEXT_DAY: u16 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub time: &'static str,
    pub available: bool,
}

/// Seed availability for a given day offset. Deterministic: the base table
/// rotated by the day, so neighbouring days differ.
pub fn slots_for_day(day: u32) -> Vec<Slot> {
    let n = data::STUDIO_SLOTS.len();
    (0..n)
        .map(|i| {
            let (time, _) = data::STUDIO_SLOTS[i];
            let (_, available) = data::STUDIO_SLOTS[(i + day as usize) % n];
            Slot { time, available }
        })
        .collect()
}

pub fn day_label(day: u32) -> String {
    match day {
        0 => "Bugün".to_string(),
        1 => "Yarın".to_string(),
        n => format!("+{n} gün"),
    }
}

pub struct StudioScreen {
    day: u32,
    slots: Remote<Vec<Slot>>,
    /// Slot index of a booking in flight.
    booking: Remote<usize>,
    confirmation: Option<&'static str>,
}

impl StudioScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            day: 0,
            slots: Remote::idle(),
            booking: Remote::idle(),
            confirmation: None,
        };
        screen.fetch_slots();
        screen
    }

    fn fetch_slots(&mut self) {
        self.slots.request(SLOW_TICKS, slots_for_day(self.day));
        // A booking from the previous day must not mark slots on this one.
        self.booking = Remote::idle();
        self.confirmation = None;
    }

    fn change_day(&mut self, delta: i32) {
        let day = self.day.saturating_add_signed(delta).min(MAX_DAY);
        if day != self.day {
            self.day = day;
            self.fetch_slots();
        }
    }

    fn book(&mut self, idx: usize) {
        if self.booking.is_loading() {
            return;
        }
        let free = self
            .slots
            .get()
            .and_then(|slots| slots.get(idx))
            .is_some_and(|slot| slot.available);
        if free {
            self.booking.request(SLOW_TICKS, idx);
        }
    }
}

impl Screen for StudioScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char('p') => self.change_day(-1),
            InputEvent::Char('n') => self.change_day(1),
            InputEvent::Char(c @ '1'..='9') => self.book((*c as u8 - b'1') as usize),
            InputEvent::Click(ACT_PREV_DAY) => self.change_day(-1),
            InputEvent::Click(ACT_NEXT_DAY) => self.change_day(1),
            InputEvent::Click(id) if *id >= SLOT_BASE => {
                self.book((*id - SLOT_BASE) as usize);
            }
            _ => {}
        }
        None
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.slots.tick(ticks);
        self.booking.tick(ticks);

        let booked = self.booking.get().copied();
        if let (Some(idx), Some(slots)) = (booked, self.slots.get_mut()) {
            if let Some(slot) = slots.get_mut(idx) {
                if slot.available {
                    slot.available = false;
                    self.confirmation = Some("Rezervasyonunuz başarıyla oluşturuldu.");
                }
            }
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(6)])
            .split(area);

        let mut header = ClickableList::new();
        header.push(Line::from(vec![
            Span::styled(" Stüdyo Rezervasyonu", theme::title_style(Color::Cyan)),
            Span::styled(
                "  — içerik üretimi için stüdyo ayırtın",
                theme::dim(),
            ),
        ]));
        header.push_clickable(
            Line::from(vec![
                Span::styled(" [P] ◀ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    day_label(self.day),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶ [N]", Style::default().fg(Color::Yellow)),
            ]),
            UiAction::Screen(ACT_NEXT_DAY),
        );
        header.register_targets(chunks[0], cs, 1, 1, 0, 0);
        let header_widget =
            Paragraph::new(header.into_lines()).block(Block::default().borders(Borders::ALL));
        f.render_widget(header_widget, chunks[0]);

        let mut cl = ClickableList::new();
        if self.slots.is_loading() {
            cl.push(Line::from(Span::styled(
                " Müsait saatler yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(slots) = self.slots.get() {
            for (i, slot) in slots.iter().enumerate() {
                if slot.available {
                    cl.push_clickable(
                        Line::from(vec![
                            Span::styled(
                                format!(" [{}] ", i + 1),
                                Style::default()
                                    .fg(Color::Yellow)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(slot.time, Style::default().fg(Color::White)),
                            Span::styled("  Müsait — rezerve et", Style::default().fg(Color::Green)),
                        ]),
                        UiAction::Screen(SLOT_BASE + i as u16),
                    );
                } else {
                    cl.push(Line::from(vec![
                        Span::styled(format!("     {} ", slot.time), theme::dim()),
                        Span::styled(" Dolu", Style::default().fg(Color::Red)),
                    ]));
                }
            }
            if self.booking.is_loading() {
                cl.push(Line::from(""));
                cl.push(Line::from(Span::styled(
                    " Rezervasyon oluşturuluyor...",
                    Style::default().fg(Color::Yellow),
                )));
            } else if let Some(message) = self.confirmation {
                cl.push(Line::from(""));
                cl.push(Line::from(Span::styled(
                    format!(" ✔ {message}"),
                    Style::default().fg(Color::Green),
                )));
            }
        }
        cl.register_targets(chunks[1], cs, 1, 1, 0, 0);

        let list = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(format!(" Müsait Saatler ({}) ", day_label(self.day))),
        );
        f.render_widget(list, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_zero_matches_the_seed_table() {
        let slots = slots_for_day(0);
        assert_eq!(slots.len(), 6);
        assert!(slots[0].available);
        assert!(!slots[1].available);
    }

    #[test]
    fn different_days_rotate_availability() {
        assert_ne!(slots_for_day(0), slots_for_day(1));
        // Full rotation wraps around.
        assert_eq!(slots_for_day(0), slots_for_day(6));
    }

    #[test]
    fn booking_marks_the_slot_taken() {
        let mut screen = StudioScreen::new();
        screen.tick(SLOW_TICKS); // slots arrive

        screen.handle_input(&InputEvent::Char('1'));
        assert!(screen.booking.is_loading());
        screen.tick(SLOW_TICKS);

        assert!(!screen.slots.get().unwrap()[0].available);
        assert!(screen.confirmation.is_some());
    }

    #[test]
    fn taken_slots_cannot_be_booked() {
        let mut screen = StudioScreen::new();
        screen.tick(SLOW_TICKS);

        screen.handle_input(&InputEvent::Char('2')); // 10:00 is already taken
        assert!(!screen.booking.is_loading());
    }

    #[test]
    fn day_change_refetches_and_clears_confirmation() {
        let mut screen = StudioScreen::new();
        screen.tick(SLOW_TICKS);
        screen.handle_input(&InputEvent::Char('1'));
        screen.tick(SLOW_TICKS);
        assert!(screen.confirmation.is_some());

        screen.handle_input(&InputEvent::Char('n'));
        assert_eq!(screen.day, 1);
        assert!(screen.slots.is_loading());
        assert!(screen.confirmation.is_none());

        screen.tick(SLOW_TICKS);
        assert_eq!(screen.slots.get().unwrap(), &slots_for_day(1));
    }

    #[test]
    fn day_is_clamped_to_the_booking_window() {
        let mut screen = StudioScreen::new();
        screen.handle_input(&InputEvent::Char('p'));
        assert_eq!(screen.day, 0);

        for _ in 0..40 {
            screen.handle_input(&InputEvent::Char('n'));
        }
        assert_eq!(screen.day, MAX_DAY);
    }
}
