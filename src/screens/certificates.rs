//! Certificates: one per fully completed course, plus the badge wall and
//! the locked certificates still in progress.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, Course};
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::theme;

use super::{Screen, ScreenCtx, FETCH_TICKS};

/// A course yields a certificate only at 100% completion.
pub fn earned_certificates() -> Vec<&'static Course> {
    data::COURSES.iter().filter(|c| c.progress == 100).collect()
}

/// Courses still short of a certificate, with the remaining module count.
pub fn pending_certificates() -> Vec<(&'static Course, u32)> {
    data::COURSES
        .iter()
        .filter(|c| c.progress < 100)
        .map(|c| (c, c.total_modules - c.completed_modules))
        .collect()
}

pub struct CertificatesScreen {
    earned: Remote<Vec<&'static Course>>,
}

impl CertificatesScreen {
    pub fn new() -> Self {
        let mut earned = Remote::idle();
        earned.request(FETCH_TICKS, earned_certificates());
        Self { earned }
    }
}

impl Screen for CertificatesScreen {
    fn handle_input(&mut self, _event: &InputEvent) -> Option<UiAction> {
        None
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.earned.tick(ticks);
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, _cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(7),
                Constraint::Length(6),
            ])
            .split(area);

        let mut lines = Vec::new();
        if self.earned.is_loading() {
            lines.push(Line::from(Span::styled(
                " Sertifikalar yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(earned) = self.earned.get() {
            if earned.is_empty() {
                lines.push(Line::from(Span::styled(
                    " Henüz tamamlanmış bir eğitiminiz yok.",
                    theme::dim(),
                )));
            }
            for course in earned {
                lines.push(Line::from(vec![
                    Span::styled(" 🏅 ", Style::default()),
                    Span::styled(course.title, theme::title_style(Color::White)),
                ]));
                lines.push(Line::from(Span::styled(
                    format!(
                        "    {} · Blockchain ile doğrulanabilir",
                        course.instructor
                    ),
                    theme::dim(),
                )));
            }
        }
        let earned_widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Sertifikalarım "),
        );
        f.render_widget(earned_widget, chunks[0]);

        let pending: Vec<Line> = pending_certificates()
            .into_iter()
            .take(4)
            .map(|(course, remaining)| {
                Line::from(vec![
                    Span::styled(" 🔒 ", Style::default()),
                    Span::styled(course.title, theme::label()),
                    Span::styled(format!("  {remaining} modül kaldı"), theme::dim()),
                ])
            })
            .collect();
        let pending_widget = Paragraph::new(pending).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" Kilidi Açılacaklar "),
        );
        f.render_widget(pending_widget, chunks[1]);

        let badges: Vec<Line> = data::BADGES
            .iter()
            .map(|badge| {
                let style = if badge.earned_at.is_some() {
                    Style::default().fg(Color::White)
                } else {
                    theme::dim()
                };
                Line::from(vec![
                    Span::raw(format!(" {} ", badge.icon)),
                    Span::styled(badge.name, style),
                    Span::styled(format!(" — {}", badge.description), theme::dim()),
                ])
            })
            .collect();
        let badge_widget = Paragraph::new(badges).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" Rozetler "),
        );
        f.render_widget(badge_widget, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fully_completed_courses_earn_certificates() {
        let earned = earned_certificates();
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].id, "4");
    }

    #[test]
    fn pending_list_reports_remaining_modules() {
        let pending = pending_certificates();
        assert_eq!(pending.len(), 4);
        let yks = pending.iter().find(|(c, _)| c.id == "1").unwrap();
        assert_eq!(yks.1, 6); // 24 total - 18 completed
    }
}
