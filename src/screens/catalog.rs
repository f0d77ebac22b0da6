//! Course catalog with category filter tabs.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, Course, CourseCategory};
use crate::fetch::Remote;
use crate::input::{ClickState, InputEvent, UiAction};
use crate::theme;
use crate::widgets::{ClickableList, TabBar};

use super::{Screen, ScreenCtx, FETCH_TICKS};

/// Tab ids: 0 = all, 1.. = category index + 1.
const TAB_ALL: u16 = 0;
const TAB_CATEGORY_BASE: u16 = 1;

pub struct CatalogScreen {
    filter: Option<CourseCategory>,
    courses: Remote<Vec<&'static Course>>,
}

impl CatalogScreen {
    pub fn new() -> Self {
        let mut courses = Remote::idle();
        courses.request(FETCH_TICKS, data::COURSES.iter().collect());
        Self {
            filter: None,
            courses,
        }
    }

    fn filtered(&self) -> Vec<&'static Course> {
        let Some(courses) = self.courses.get() else {
            return Vec::new();
        };
        courses
            .iter()
            .copied()
            .filter(|c| self.filter.is_none_or(|cat| c.category == cat))
            .collect()
    }

    fn set_tab(&mut self, id: u16) {
        self.filter = if id == TAB_ALL {
            None
        } else {
            CourseCategory::all()
                .get((id - TAB_CATEGORY_BASE) as usize)
                .copied()
        };
    }
}

impl Screen for CatalogScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char('0') => {
                self.set_tab(TAB_ALL);
                None
            }
            InputEvent::Char(c @ '1'..='4') => {
                self.set_tab(TAB_CATEGORY_BASE + (*c as u8 - b'1') as u16);
                None
            }
            InputEvent::Char(c @ 'a'..='j') => {
                let idx = (*c as u8 - b'a') as usize;
                self.filtered()
                    .get(idx)
                    .map(|course| UiAction::OpenCourse(course.id))
            }
            InputEvent::Click(id) => {
                self.set_tab(*id);
                None
            }
            _ => None,
        }
    }

    fn tick(&mut self, ticks: u32) -> Option<UiAction> {
        self.courses.tick(ticks);
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

        let mut bar = TabBar::new(" │ ").tab(
            "Tümü [0]",
            tab_style(self.filter.is_none()),
            UiAction::Screen(TAB_ALL),
        );
        for (i, category) in CourseCategory::all().iter().enumerate() {
            bar = bar.tab(
                format!("{} [{}]", category.label(), i + 1),
                tab_style(self.filter == Some(*category)),
                UiAction::Screen(TAB_CATEGORY_BASE + i as u16),
            );
        }
        bar.block(Block::default().borders(Borders::ALL))
            .render(f, chunks[0], cs);

        let mut cl = ClickableList::new();
        if self.courses.is_loading() {
            cl.push(Line::from(Span::styled(
                " Katalog yükleniyor...",
                Style::default().fg(Color::Yellow),
            )));
        } else {
            let filtered = self.filtered();
            if filtered.is_empty() {
                cl.push(Line::from(Span::styled(
                    " Bu kategoride eğitim bulunamadı.",
                    theme::dim(),
                )));
            }
            for (i, course) in filtered.iter().enumerate() {
                let key = (b'a' + i as u8) as char;
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(
                            format!(" [{}] ", key.to_uppercase()),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(course.title, Style::default().fg(Color::White)),
                        Span::styled(format!("  ★ {:.1}", course.rating), Style::default().fg(Color::Yellow)),
                    ]),
                    UiAction::OpenCourse(course.id),
                );
                let tenant_name = data::tenant(course.tenant_id).map_or("", |t| t.name);
                cl.push(Line::from(Span::styled(
                    format!(
                        "      {} · {} · {} modül",
                        course.category.label(),
                        tenant_name,
                        course.total_modules
                    ),
                    theme::dim(),
                )));
            }
        }
        cl.register_targets(chunks[1], cs, 1, 1, 0, 0);

        let list = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(" Eğitim Kataloğu "),
        );
        f.render_widget(list, chunks[1]);
    }
}
