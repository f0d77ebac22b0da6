//! Per-student analytics drill-down. Mounted via the router's student
//! selection; reachable by URL without one, in which case it renders the
//! pick-a-student hint instead of data.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, StudentRecord};
use crate::input::{ClickState, InputEvent, UiAction};
use crate::router::View;
use crate::theme;
use crate::widgets::ClickableList;

use super::{Screen, ScreenCtx};

/// Weekly study hours, Monday first. One demo series for every student,
/// shifted by id so the charts differ.
pub fn weekly_activity(student_id: u32) -> [u8; 7] {
    const BASE: [u8; 7] = [2, 4, 3, 6, 5, 8, 1];
    let shift = (student_id as usize) % BASE.len();
    let mut out = [0u8; 7];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = BASE[(i + shift) % BASE.len()];
    }
    out
}

const DAY_LABELS: [&str; 7] = ["Pzt", "Sal", "Çar", "Per", "Cum", "Cmt", "Paz"];

pub struct StudentAnalyticsScreen {
    student: Option<&'static StudentRecord>,
}

impl StudentAnalyticsScreen {
    pub fn new(student_id: Option<u32>) -> Self {
        Self {
            student: student_id.and_then(data::student),
        }
    }
}

impl Screen for StudentAnalyticsScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char('g') | InputEvent::Esc => {
                Some(UiAction::Go(View::UserManagement))
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(6)])
            .split(area);

        let mut header = ClickableList::new();
        header.push_clickable(
            Line::from(vec![
                Span::styled(" [G] ← Öğrenci Listesi", Style::default().fg(Color::Yellow)),
                Span::styled("   Öğrenci Analizi", theme::title_style(Color::Cyan)),
            ]),
            UiAction::Go(View::UserManagement),
        );
        if let Some(student) = self.student {
            header.push(Line::from(Span::styled(
                format!(" {} · {} · son giriş {}", student.name, student.email, student.last_login),
                theme::dim(),
            )));
        }
        header.register_targets(chunks[0], cs, 1, 1, 0, 0);
        let header_widget = Paragraph::new(header.into_lines())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(header_widget, chunks[0]);

        let Some(student) = self.student else {
            let hint = Paragraph::new(Line::from(Span::styled(
                " Analiz için öğrenci listesinden bir kayıt seçin.",
                theme::dim(),
            )))
            .block(Block::default().borders(Borders::ALL).border_style(theme::dim()));
            f.render_widget(hint, chunks[1]);
            return;
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(" Kayıtlı eğitim: ", theme::label()),
                Span::styled(student.course, Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    theme::progress_bar(student.progress, 24),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(format!(" %{} ilerleme", student.progress), theme::dim()),
            ]),
            Line::from(""),
            Line::from(Span::styled(" Haftalık Aktivite (saat)", theme::label())),
        ];
        let activity = weekly_activity(student.id);
        for (day, hours) in DAY_LABELS.iter().zip(activity.iter()) {
            lines.push(Line::from(vec![
                Span::styled(format!(" {day} "), theme::dim()),
                Span::styled(
                    "▇".repeat(usize::from(*hours)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(format!(" {hours}"), theme::dim()),
            ]));
        }

        let body = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(format!(" {} ", student.name)),
        );
        f.render_widget(body, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_selected_student() {
        let screen = StudentAnalyticsScreen::new(Some(4));
        assert_eq!(screen.student.unwrap().name, "Zeynep Çelik");
    }

    #[test]
    fn missing_or_unknown_selection_renders_hint() {
        assert!(StudentAnalyticsScreen::new(None).student.is_none());
        assert!(StudentAnalyticsScreen::new(Some(999)).student.is_none());
    }

    #[test]
    fn back_returns_to_user_management() {
        let mut screen = StudentAnalyticsScreen::new(Some(1));
        assert_eq!(
            screen.handle_input(&InputEvent::Char('g')),
            Some(UiAction::Go(View::UserManagement))
        );
    }

    #[test]
    fn weekly_activity_is_stable_per_student() {
        assert_eq!(weekly_activity(1), weekly_activity(1));
        assert_ne!(weekly_activity(1), weekly_activity(2));
        // Shift preserves the total.
        let total: u32 = weekly_activity(5).iter().map(|h| u32::from(*h)).sum();
        assert_eq!(total, 29);
    }
}
