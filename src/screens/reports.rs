//! Reports & analytics for administrators: enrollment by category,
//! completion overview, top students. All aggregates derive from the demo
//! tables; charts are textual.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, CourseCategory};
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::theme;

use super::{Screen, ScreenCtx, FETCH_TICKS};

/// Course count per category, in the category display order.
pub fn category_breakdown() -> Vec<(CourseCategory, usize)> {
    CourseCategory::all()
        .iter()
        .map(|category| {
            let count = data::COURSES
                .iter()
                .filter(|c| c.category == *category)
                .count();
            (*category, count)
        })
        .collect()
}

/// Mean completion over the roster, rounded down.
pub fn average_progress() -> u8 {
    let total: u32 = data::STUDENTS.iter().map(|s| u32::from(s.progress)).sum();
    (total / data::STUDENTS.len() as u32) as u8
}

pub struct ReportsScreen {
    report: Remote<Vec<(CourseCategory, usize)>>,
}

impl ReportsScreen {
    pub fn new() -> Self {
        let mut report = Remote::idle();
        report.request(FETCH_TICKS, category_breakdown());
        Self { report }
    }
}

impl Screen for ReportsScreen {
    fn handle_input(&mut self, _event: &InputEvent) -> Option<UiAction> {
        None
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.report.tick(ticks);
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, _cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(7)])
            .split(area);

        let mut lines = vec![Line::from("")];
        if self.report.is_loading() {
            lines.push(Line::from(Span::styled(
                " Rapor hazırlanıyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(breakdown) = self.report.get() {
            lines.push(Line::from(Span::styled(
                " Kategoriye Göre Eğitimler",
                theme::label(),
            )));
            let max = breakdown.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
            for (category, count) in breakdown {
                let width = ((count * 20) / max) as u16;
                lines.push(Line::from(vec![
                    Span::styled(format!(" {:<16}", category.label()), theme::dim()),
                    Span::styled(
                        "▇".repeat(usize::from(width)),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(format!(" {count}"), Style::default().fg(Color::White)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(" Ortalama tamamlama: ", theme::label()),
                Span::styled(
                    theme::progress_bar(average_progress(), 20),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(" %{}", average_progress()),
                    Style::default().fg(Color::White),
                ),
            ]));
        }

        let charts = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Raporlar & Analitik "),
        );
        f.render_widget(charts, chunks[0]);

        let top: Vec<Line> = data::LEADERBOARD
            .iter()
            .take(3)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(format!(" {}. ", entry.rank), theme::dim()),
                    Span::styled(entry.name, Style::default().fg(Color::White)),
                    Span::styled(format!("  {} puan", entry.points), theme::dim()),
                ])
            })
            .collect();
        let top_widget = Paragraph::new(top).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" En Başarılı Öğrenciler "),
        );
        f.render_widget(top_widget, chunks[1]);
    }
}
