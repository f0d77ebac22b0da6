//! Student roster for administrators and instructors. Selecting a row
//! drills into that student's analytics via the router's student selection.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, EnrollmentStatus, StudentRecord};
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::theme;
use crate::widgets::{ClickableList, TabBar};

use super::{Screen, ScreenCtx, FETCH_TICKS};

const TAB_ALL: u16 = 200;
const TAB_ACTIVE: u16 = 201;
const TAB_INACTIVE: u16 = 202;

pub struct UserManagementScreen {
    roster: Remote<Vec<&'static StudentRecord>>,
    status_filter: Option<EnrollmentStatus>,
}

impl UserManagementScreen {
    pub fn new() -> Self {
        let mut roster = Remote::idle();
        roster.request(FETCH_TICKS, data::STUDENTS.iter().collect());
        Self {
            roster,
            status_filter: None,
        }
    }

    fn filtered(&self) -> Vec<&'static StudentRecord> {
        let Some(roster) = self.roster.get() else {
            return Vec::new();
        };
        roster
            .iter()
            .copied()
            .filter(|s| self.status_filter.is_none_or(|status| s.status == status))
            .collect()
    }
}

impl Screen for UserManagementScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char('a') => {
                self.status_filter = None;
                None
            }
            InputEvent::Char('f') => {
                self.status_filter = Some(EnrollmentStatus::Active);
                None
            }
            InputEvent::Char('p') => {
                self.status_filter = Some(EnrollmentStatus::Inactive);
                None
            }
            InputEvent::Char(c @ '1'..='9') => {
                let idx = (*c as u8 - b'1') as usize;
                self.filtered()
                    .get(idx)
                    .map(|student| UiAction::SelectStudent(student.id))
            }
            InputEvent::Click(TAB_ALL) => {
                self.status_filter = None;
                None
            }
            InputEvent::Click(TAB_ACTIVE) => {
                self.status_filter = Some(EnrollmentStatus::Active);
                None
            }
            InputEvent::Click(TAB_INACTIVE) => {
                self.status_filter = Some(EnrollmentStatus::Inactive);
                None
            }
            _ => None,
        }
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.roster.tick(ticks);
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(6)])
            .split(area);

        let tab_style = |active: bool| {
            if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::label()
            }
        };
        TabBar::new(" │ ")
            .tab(
                "Tümü [A]",
                tab_style(self.status_filter.is_none()),
                UiAction::Screen(TAB_ALL),
            )
            .tab(
                "Aktif [F]",
                tab_style(self.status_filter == Some(EnrollmentStatus::Active)),
                UiAction::Screen(TAB_ACTIVE),
            )
            .tab(
                "Pasif [P]",
                tab_style(self.status_filter == Some(EnrollmentStatus::Inactive)),
                UiAction::Screen(TAB_INACTIVE),
            )
            .block(Block::default().borders(Borders::ALL).title(" Öğrenci Listesi "))
            .render(f, chunks[0], cs);

        let mut cl = ClickableList::new();
        if self.roster.is_loading() {
            cl.push(Line::from(Span::styled(
                " Öğrenciler yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else {
            for (i, student) in self.filtered().iter().enumerate() {
                let status_color = match student.status {
                    EnrollmentStatus::Active => Color::Green,
                    EnrollmentStatus::Inactive => Color::DarkGray,
                };
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(
                            format!(" [{}] ", i + 1),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(student.name, Style::default().fg(Color::White)),
                        Span::styled(
                            format!("  {}", student.status.label()),
                            Style::default().fg(status_color),
                        ),
                        Span::styled(
                            format!("  {} · %{} · {}", student.course, student.progress, student.last_login),
                            theme::dim(),
                        ),
                    ]),
                    UiAction::SelectStudent(student.id),
                );
            }
        }
        cl.register_targets(chunks[1], cs, 1, 1, 0, 0);

        let list = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" Kayıtlı Öğrenciler "),
        );
        f.render_widget(list, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> UserManagementScreen {
        let mut screen = UserManagementScreen::new();
        screen.tick(FETCH_TICKS);
        screen
    }

    #[test]
    fn status_tabs_filter_the_roster() {
        let mut screen = loaded();
        assert_eq!(screen.filtered().len(), 6);

        screen.handle_input(&InputEvent::Char('f'));
        assert_eq!(screen.filtered().len(), 4);

        screen.handle_input(&InputEvent::Click(TAB_INACTIVE));
        assert_eq!(screen.filtered().len(), 2);

        screen.handle_input(&InputEvent::Char('a'));
        assert_eq!(screen.filtered().len(), 6);
    }

    #[test]
    fn number_keys_select_within_the_filtered_list() {
        let mut screen = loaded();
        screen.handle_input(&InputEvent::Char('p')); // inactive: Mehmet (3), Elif (6)
        assert_eq!(
            screen.handle_input(&InputEvent::Char('1')),
            Some(UiAction::SelectStudent(3))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Char('2')),
            Some(UiAction::SelectStudent(6))
        );
        assert_eq!(screen.handle_input(&InputEvent::Char('3')), None);
    }
}
