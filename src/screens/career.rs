//! Career center: job postings matched to the profile.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, Job};
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::theme;
use crate::widgets::ClickableList;

use super::{Screen, ScreenCtx, FETCH_TICKS, SLOW_TICKS};

pub struct CareerScreen {
    jobs: Remote<Vec<&'static Job>>,
    applied: Vec<&'static str>,
    /// In-flight application; settles into `applied`.
    applying: Remote<&'static str>,
}

impl CareerScreen {
    pub fn new() -> Self {
        let mut jobs = Remote::idle();
        jobs.request(FETCH_TICKS, data::JOBS.iter().collect());
        Self {
            jobs,
            applied: Vec::new(),
            applying: Remote::idle(),
        }
    }

    fn apply_to(&mut self, idx: usize) {
        if self.applying.is_loading() {
            return;
        }
        let Some(job) = self.jobs.get().and_then(|list| list.get(idx).copied()) else {
            return;
        };
        if !self.applied.contains(&job.id) {
            self.applying.request(SLOW_TICKS, job.id);
        }
    }
}

impl Screen for CareerScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char(c @ '1'..='9') => {
                self.apply_to((*c as u8 - b'1') as usize);
                None
            }
            InputEvent::Click(id) => {
                self.apply_to(*id as usize);
                None
            }
            _ => None,
        }
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.jobs.tick(ticks);
        self.applying.tick(ticks);
        if let Some(job_id) = self.applying.get().copied() {
            if !self.applied.contains(&job_id) {
                self.applied.push(job_id);
            }
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(6)])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(" Kariyer Merkezi", theme::title_style(Color::Magenta)),
            Span::styled(
                "  — profilinize göre eşleşen ilanlar",
                theme::dim(),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        f.render_widget(header, chunks[0]);

        let mut cl = ClickableList::new();
        if self.jobs.is_loading() {
            cl.push(Line::from(Span::styled(
                " İlanlar yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(jobs) = self.jobs.get() {
            for (i, job) in jobs.iter().enumerate() {
                let applied = self.applied.contains(&job.id);
                let action_label = if applied {
                    Span::styled(" ✔ Başvuruldu", Style::default().fg(Color::Green))
                } else {
                    Span::styled(
                        format!(" [{}] Başvur", i + 1),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                };
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(job.title, theme::title_style(Color::White)),
                        Span::styled(format!("  {}", job.company), theme::label()),
                        action_label,
                    ]),
                    UiAction::Screen(i as u16),
                );
                cl.push(Line::from(vec![
                    Span::raw("   "),
                    Span::styled(
                        theme::progress_bar(job.match_score, 10),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::styled(
                        format!(
                            " %{} uyum · {} · {} · {}",
                            job.match_score, job.location, job.kind, job.posted
                        ),
                        theme::dim(),
                    ),
                ]));
            }
            if self.applying.is_loading() {
                cl.push(Line::from(Span::styled(
                    " Başvurunuz gönderiliyor...",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
        cl.register_targets(chunks[1], cs, 1, 1, 0, 0);

        let list = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" İş İlanları "),
        );
        f.render_widget(list, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> CareerScreen {
        let mut screen = CareerScreen::new();
        screen.tick(FETCH_TICKS);
        screen
    }

    #[test]
    fn applying_takes_time_then_lands() {
        let mut screen = loaded();
        screen.handle_input(&InputEvent::Char('1'));
        assert!(screen.applied.is_empty());

        screen.tick(SLOW_TICKS);
        assert_eq!(screen.applied, vec!["j1"]);
    }

    #[test]
    fn double_application_is_ignored() {
        let mut screen = loaded();
        screen.handle_input(&InputEvent::Char('2'));
        screen.tick(SLOW_TICKS);
        screen.handle_input(&InputEvent::Char('2'));
        screen.tick(SLOW_TICKS);
        assert_eq!(screen.applied, vec!["j2"]);
    }

    #[test]
    fn one_application_at_a_time() {
        let mut screen = loaded();
        screen.handle_input(&InputEvent::Char('1'));
        screen.handle_input(&InputEvent::Char('2')); // still in flight → ignored
        screen.tick(SLOW_TICKS);
        assert_eq!(screen.applied, vec!["j1"]);
    }

    #[test]
    fn applying_before_load_is_ignored() {
        let mut screen = CareerScreen::new();
        screen.handle_input(&InputEvent::Char('1'));
        screen.tick(SLOW_TICKS);
        assert!(screen.applied.is_empty());
    }
}
