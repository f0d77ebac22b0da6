//! Dashboards: the student home (courses, leaderboard, badges) and the
//! admin/instructor panel (platform stats and activity).

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, Course, Trend};
use crate::fetch::Remote;
use crate::input::{is_narrow_layout, ClickState, InputEvent, UiAction};
use crate::theme;
use crate::widgets::ClickableList;

use super::{Screen, ScreenCtx, FETCH_TICKS};

// ── Student dashboard ──────────────────────────────────────────

pub struct StudentDashboard {
    courses: Remote<Vec<&'static Course>>,
}

impl StudentDashboard {
    pub fn new(tenant_id: Option<&'static str>) -> Self {
        let mut courses = Remote::idle();
        courses.request(FETCH_TICKS, data::courses_for_tenant(tenant_id));
        Self { courses }
    }
}

impl Screen for StudentDashboard {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        if let InputEvent::Char(c @ '1'..='9') = event {
            let idx = (*c as u8 - b'1') as usize;
            return self
                .courses
                .get()
                .and_then(|list| list.get(idx))
                .map(|course| UiAction::OpenCourse(course.id));
        }
        None
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.courses.tick(ticks);
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, ctx: &ScreenCtx) {
        let narrow = is_narrow_layout(area.width);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(8)])
            .split(area);

        let name = ctx.session.user().map_or("", |u| u.name.as_str());
        let points = ctx.session.user().map_or(0, |u| u.points);
        let hero = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" Merhaba {name} 👋"),
                theme::title_style(Color::White),
            ),
            Span::styled(format!("   {points} puan"), Style::default().fg(Color::Yellow)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::accent(ctx.session.tenant()))),
        );
        f.render_widget(hero, chunks[0]);

        if narrow {
            self.render_courses(f, chunks[1], cs, ctx);
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        self.render_courses(f, columns[0], cs, ctx);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);
        render_leaderboard(f, side[0]);
        render_badges(f, side[1]);
    }
}

impl StudentDashboard {
    fn render_courses(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, ctx: &ScreenCtx) {
        let mut cl = ClickableList::new();

        if self.courses.is_loading() {
            cl.push(Line::from(Span::styled(
                " Eğitimler yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(courses) = self.courses.get() {
            if courses.is_empty() {
                cl.push(Line::from(Span::styled(
                    " Bu akademide kayıtlı eğitiminiz yok.",
                    theme::dim(),
                )));
            }
            for (i, course) in courses.iter().enumerate() {
                let live = if course.is_live { " ● CANLI" } else { "" };
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(
                            format!(" [{}] ", i + 1),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(course.title, Style::default().fg(Color::White)),
                        Span::styled(live, Style::default().fg(Color::Red)),
                    ]),
                    UiAction::OpenCourse(course.id),
                );
                cl.push(Line::from(vec![
                    Span::raw("      "),
                    Span::styled(
                        theme::progress_bar(course.progress, 16),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!(
                            " %{} · {}/{} modül · {}",
                            course.progress,
                            course.completed_modules,
                            course.total_modules,
                            course.instructor
                        ),
                        theme::dim(),
                    ),
                ]));
            }
        }
        cl.register_targets(area, cs, 1, 1, 0, 0);

        let widget = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::accent(ctx.session.tenant())))
                .title(" Eğitimlerim "),
        );
        f.render_widget(widget, area);
    }
}

fn render_leaderboard(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = data::LEADERBOARD
        .iter()
        .map(|entry| {
            let trend = match entry.trend {
                Trend::Up => Span::styled("▲", Style::default().fg(Color::Green)),
                Trend::Down => Span::styled("▼", Style::default().fg(Color::Red)),
                Trend::Same => Span::styled("─", theme::dim()),
            };
            Line::from(vec![
                Span::styled(format!(" {}. ", entry.rank), theme::label()),
                Span::styled(entry.name, Style::default().fg(Color::White)),
                Span::styled(format!("  {} puan ", entry.points), theme::dim()),
                trend,
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::dim())
            .title(" Liderlik Tablosu "),
    );
    f.render_widget(widget, area);
}

fn render_badges(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = data::BADGES
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
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::dim())
            .title(" Rozetler "),
    );
    f.render_widget(widget, area);
}

// ── Admin / instructor dashboard ───────────────────────────────

/// Aggregates shown on the admin panel, derived from the static tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelStats {
    pub course_count: usize,
    pub student_count: usize,
    pub active_students: usize,
    pub live_courses: usize,
}

pub fn panel_stats() -> PanelStats {
    PanelStats {
        course_count: data::COURSES.len(),
        student_count: data::STUDENTS.len(),
        active_students: data::STUDENTS
            .iter()
            .filter(|s| s.status == data::EnrollmentStatus::Active)
            .count(),
        live_courses: data::COURSES.iter().filter(|c| c.is_live).count(),
    }
}

pub struct AdminDashboard {
    instructor: bool,
    stats: Remote<PanelStats>,
}

impl AdminDashboard {
    pub fn new(instructor: bool) -> Self {
        let mut stats = Remote::idle();
        stats.request(FETCH_TICKS, panel_stats());
        Self { instructor, stats }
    }
}

impl Screen for AdminDashboard {
    fn handle_input(&mut self, _event: &InputEvent) -> Option<UiAction> {
        None
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.stats.tick(ticks);
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, _cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(5)])
            .split(area);

        let title = if self.instructor {
            " Eğitmen Paneli "
        } else {
            " Yönetim Paneli "
        };

        let mut lines = vec![Line::from("")];
        if self.stats.is_loading() {
            lines.push(Line::from(Span::styled(
                " İstatistikler yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(stats) = self.stats.get() {
            lines.push(Line::from(vec![
                Span::styled(" Eğitim: ", theme::label()),
                Span::styled(
                    stats.course_count.to_string(),
                    theme::title_style(Color::Cyan),
                ),
                Span::styled("   Öğrenci: ", theme::label()),
                Span::styled(
                    stats.student_count.to_string(),
                    theme::title_style(Color::Cyan),
                ),
                Span::styled("   Aktif: ", theme::label()),
                Span::styled(
                    stats.active_students.to_string(),
                    theme::title_style(Color::Green),
                ),
                Span::styled("   Canlı yayın: ", theme::label()),
                Span::styled(
                    stats.live_courses.to_string(),
                    theme::title_style(Color::Red),
                ),
            ]));
        }

        let stats_widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title),
        );
        f.render_widget(stats_widget, chunks[0]);

        // Recent activity straight from the audit trail.
        let activity: Vec<Line> = data::AUDIT_LOG
            .iter()
            .take(6)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(format!(" {} ", entry.timestamp), theme::dim()),
                    Span::styled(entry.user, Style::default().fg(Color::White)),
                    Span::styled(format!(" — {}", entry.description), theme::label()),
                ])
            })
            .collect();
        let activity_widget = Paragraph::new(activity).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" Son Aktiviteler "),
        );
        f.render_widget(activity_widget, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_courses_scope_to_tenant() {
        let mut screen = StudentDashboard::new(Some("umraniye"));
        assert!(screen.courses.is_loading());
        screen.tick(FETCH_TICKS);

        let courses = screen.courses.get().unwrap();
        assert_eq!(courses.len(), 2);
        assert!(courses.iter().all(|c| c.tenant_id == "umraniye"));
    }

    #[test]
    fn course_keys_open_the_player() {
        let mut screen = StudentDashboard::new(Some("umraniye"));
        // Nothing loaded yet → no navigation.
        assert_eq!(screen.handle_input(&InputEvent::Char('1')), None);

        screen.tick(FETCH_TICKS);
        assert_eq!(
            screen.handle_input(&InputEvent::Char('1')),
            Some(UiAction::OpenCourse("1"))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Char('2')),
            Some(UiAction::OpenCourse("4"))
        );
        assert_eq!(screen.handle_input(&InputEvent::Char('9')), None);
    }

    #[test]
    fn panel_stats_aggregate_the_tables() {
        let stats = panel_stats();
        assert_eq!(stats.course_count, 5);
        assert_eq!(stats.student_count, 6);
        assert_eq!(stats.active_students, 4);
        assert_eq!(stats.live_courses, 1);
    }
}
