//! "Eğitimlerim" category sub-views.
//!
//! The same six URLs serve two audiences: learners get the consumption
//! list ([`MyEducationScreen`]), instructors get the authoring list
//! ([`EducationManagerScreen`]). The dispatch table decides which one
//! mounts; nothing here branches on role.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::data::{self, Course};
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::theme;
use crate::widgets::ClickableList;

use super::{Category, Screen, ScreenCtx, FETCH_TICKS};

fn category_hint(category: Category) -> &'static str {
    match category {
        Category::Ebooks => "Ders notları ve e-kitapçıklar çevrimdışı okunabilir.",
        Category::Videos => "Video dersleri izlemek için bir eğitim seçiniz.",
        Category::Live => "Canlı derslere yayın saatinde katılabilirsiniz.",
        Category::Assignments => "Teslim tarihi geçmemiş ödevleriniz listelenir.",
        Category::Quizzes => "Quizler süresiz tekrar edilebilir.",
        Category::Exams => "Sınavlar tek giriş hakkıyla yapılır, süre sınırlıdır.",
    }
}

// ── Learner view ───────────────────────────────────────────────

pub struct MyEducationScreen {
    category: Category,
    courses: Remote<Vec<&'static Course>>,
}

impl MyEducationScreen {
    pub fn new(category: Category, tenant_id: Option<&'static str>) -> Self {
        let mut courses = Remote::idle();
        courses.request(FETCH_TICKS, data::courses_for_tenant(tenant_id));
        Self { category, courses }
    }
}

impl Screen for MyEducationScreen {
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

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(5)])
            .split(area);

        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {}", self.category.label()),
                theme::title_style(Color::Cyan),
            )),
            Line::from(Span::styled(
                format!(" {}", category_hint(self.category)),
                theme::dim(),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(banner, chunks[0]);

        let mut cl = ClickableList::new();
        if self.courses.is_loading() {
            cl.push(Line::from(Span::styled(
                " İçerikler yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(courses) = self.courses.get() {
            for (i, course) in courses.iter().enumerate() {
                let live_badge = if self.category == Category::Live && course.is_live {
                    course.next_live.unwrap_or("Canlı")
                } else {
                    ""
                };
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(
                            format!(" [{}] ", i + 1),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(course.title, Style::default().fg(Color::White)),
                        Span::styled(
                            if live_badge.is_empty() {
                                String::new()
                            } else {
                                format!("  ● {live_badge}")
                            },
                            Style::default().fg(Color::Red),
                        ),
                    ]),
                    UiAction::OpenCourse(course.id),
                );
                cl.push(Line::from(vec![
                    Span::raw("      "),
                    Span::styled(
                        theme::progress_bar(course.progress, 12),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(format!(" %{}", course.progress), theme::dim()),
                ]));
            }
        }
        cl.register_targets(chunks[1], cs, 1, 1, 0, 0);

        let list = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(format!(" {} ", self.category.label())),
        );
        f.render_widget(list, chunks[1]);
    }
}

// ── Instructor view ────────────────────────────────────────────

/// One administered content entry with its publish state.
pub struct ManagedItem {
    pub course: &'static Course,
    pub published: bool,
}

pub struct EducationManagerScreen {
    category: Category,
    items: Vec<ManagedItem>,
}

impl EducationManagerScreen {
    pub fn new(category: Category) -> Self {
        // Seeded deterministically: anything a learner has touched counts
        // as published.
        let items = data::COURSES
            .iter()
            .map(|course| ManagedItem {
                course,
                published: course.progress > 0,
            })
            .collect();
        Self { category, items }
    }

    fn toggle(&mut self, idx: usize) {
        if let Some(item) = self.items.get_mut(idx) {
            item.published = !item.published;
        }
    }
}

impl Screen for EducationManagerScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char(c @ '1'..='9') => {
                self.toggle((*c as u8 - b'1') as usize);
                None
            }
            InputEvent::Click(id) => {
                self.toggle(*id as usize);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let published = self.items.iter().filter(|i| i.published).count();
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" İçerik Yönetimi — {}", self.category.label()),
                theme::title_style(Color::Cyan),
            ),
            Span::styled(
                format!("   {published}/{} yayında", self.items.len()),
                theme::dim(),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, chunks[0]);

        let mut cl = ClickableList::new();
        for (i, item) in self.items.iter().enumerate() {
            let (state, color) = if item.published {
                ("YAYINDA", Color::Green)
            } else {
                ("TASLAK ", Color::Yellow)
            };
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(
                        format!(" [{}] ", i + 1),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(format!("{state} "), theme::title_style(color)),
                    Span::styled(item.course.title, Style::default().fg(Color::White)),
                ]),
                UiAction::Screen(i as u16),
            );
        }
        cl.push(Line::from(""));
        cl.push(Line::from(Span::styled(
            " Numara tuşu veya dokunuş yayın durumunu değiştirir.",
            theme::dim(),
        )));
        cl.register_targets(chunks[1], cs, 1, 1, 0, 0);

        let list = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" İçerikler "),
        );
        f.render_widget(list, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learner_list_opens_courses() {
        let mut screen = MyEducationScreen::new(Category::Videos, None);
        screen.tick(FETCH_TICKS);
        assert_eq!(
            screen.handle_input(&InputEvent::Char('1')),
            Some(UiAction::OpenCourse("1"))
        );
    }

    #[test]
    fn learner_list_scopes_to_tenant() {
        let mut screen = MyEducationScreen::new(Category::Ebooks, Some("tech"));
        screen.tick(FETCH_TICKS);
        let courses = screen.courses.get().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, "2");
    }

    #[test]
    fn manager_seeds_publish_state_from_progress() {
        let screen = EducationManagerScreen::new(Category::Videos);
        let published: Vec<bool> = screen.items.iter().map(|i| i.published).collect();
        // Courses 1, 2, 4 have progress; 3 and 5 are untouched drafts.
        assert_eq!(published, vec![true, true, false, true, false]);
    }

    #[test]
    fn manager_toggles_publish_state() {
        let mut screen = EducationManagerScreen::new(Category::Quizzes);
        assert!(screen.items[0].published);

        screen.handle_input(&InputEvent::Char('1'));
        assert!(!screen.items[0].published);

        screen.handle_input(&InputEvent::Click(0));
        assert!(screen.items[0].published);

        // Out of range: no panic, no change.
        screen.handle_input(&InputEvent::Char('9'));
    }
}
