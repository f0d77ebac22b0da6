//! Course player: module list, per-type content area, and the quiz runner.
//!
//! Quiz flow matches the platform's web player: one question at a time,
//! pick an option, submit to advance, score summary at the end, retry
//! allowed. Switching modules resets any quiz in progress.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::data::{self, Course, ModuleKind, QuizQuestion};
use crate::input::{is_narrow_layout, ClickState, InputEvent, UiAction};
use crate::router::View;
use crate::theme;
use crate::widgets::ClickableList;

use super::{Screen, ScreenCtx};

// Screen-local action ids.
const ACT_BACK: u16 = 1;
const ACT_SUBMIT: u16 = 2;
const ACT_RETRY: u16 = 3;
const ACT_CYCLE_TAB: u16 = 4;
const TAB_OVERVIEW: u16 = 20;
const TAB_FORUM: u16 = 21;
const OPTION_BASE: u16 = 40;
const MODULE_BASE: u16 = 100;

/// State of one quiz attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRun {
    pub step: usize,
    pub score: u32,
    pub finished: bool,
    pub selected: Option<usize>,
}

impl QuizRun {
    pub fn new() -> Self {
        Self {
            step: 0,
            score: 0,
            finished: false,
            selected: None,
        }
    }

    /// Highlight an option for the current question.
    pub fn select(&mut self, idx: usize, quiz: &[QuizQuestion]) {
        if self.finished || self.step >= quiz.len() {
            return;
        }
        if idx < quiz[self.step].options.len() {
            self.selected = Some(idx);
        }
    }

    /// Score the selected option and advance; finishing on the last
    /// question. Without a selection this is a no-op.
    pub fn submit(&mut self, quiz: &[QuizQuestion]) {
        let Some(selected) = self.selected else {
            return;
        };
        if self.finished || self.step >= quiz.len() {
            return;
        }
        if quiz[self.step].correct == selected {
            self.score += 1;
        }
        if self.step + 1 < quiz.len() {
            self.step += 1;
            self.selected = None;
        } else {
            self.finished = true;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InfoTab {
    Overview,
    Forum,
}

pub struct PlayerScreen {
    course: &'static Course,
    active_module: usize,
    tab: InfoTab,
    quiz: QuizRun,
}

impl PlayerScreen {
    /// Falls back to the first course when no selection survived; the
    /// player is reachable by URL without an in-memory selection.
    pub fn new(course_id: Option<&str>) -> Self {
        let course = course_id
            .and_then(data::course)
            .unwrap_or(&data::COURSES[0]);
        Self {
            course,
            active_module: 0,
            tab: InfoTab::Overview,
            quiz: QuizRun::new(),
        }
    }

    fn select_module(&mut self, idx: usize) {
        if idx < self.course.modules.len() {
            self.active_module = idx;
            self.quiz = QuizRun::new();
        }
    }

    fn active_quiz(&self) -> Option<&'static [QuizQuestion]> {
        self.course.modules.get(self.active_module)?.quiz
    }
}

impl Screen for PlayerScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char('g') | InputEvent::Esc => {
                return Some(UiAction::Go(View::Dashboard));
            }
            InputEvent::Char('t') => {
                self.tab = match self.tab {
                    InfoTab::Overview => InfoTab::Forum,
                    InfoTab::Forum => InfoTab::Overview,
                };
            }
            InputEvent::Char('r') => {
                if self.quiz.finished {
                    self.quiz = QuizRun::new();
                }
            }
            InputEvent::Char(c @ '1'..='9') => {
                let idx = (*c as u8 - b'1') as usize;
                // While a quiz is running, digits pick options; otherwise
                // they switch modules.
                match self.active_quiz() {
                    Some(quiz) if !self.quiz.finished => self.quiz.select(idx, quiz),
                    _ => self.select_module(idx),
                }
            }
            InputEvent::Enter => {
                if let Some(quiz) = self.active_quiz() {
                    self.quiz.submit(quiz);
                }
            }
            InputEvent::Click(id) => match *id {
                ACT_BACK => return Some(UiAction::Go(View::Dashboard)),
                ACT_SUBMIT => {
                    if let Some(quiz) = self.active_quiz() {
                        self.quiz.submit(quiz);
                    }
                }
                ACT_RETRY => self.quiz = QuizRun::new(),
                ACT_CYCLE_TAB => {
                    self.tab = match self.tab {
                        InfoTab::Overview => InfoTab::Forum,
                        InfoTab::Forum => InfoTab::Overview,
                    };
                }
                TAB_OVERVIEW => self.tab = InfoTab::Overview,
                TAB_FORUM => self.tab = InfoTab::Forum,
                id if id >= MODULE_BASE => {
                    self.select_module((id - MODULE_BASE) as usize);
                }
                id if id >= OPTION_BASE => {
                    if let Some(quiz) = self.active_quiz() {
                        self.quiz.select((id - OPTION_BASE) as usize, quiz);
                    }
                }
                _ => {}
            },
            InputEvent::Backspace => {}
            InputEvent::Char(_) => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let narrow = is_narrow_layout(area.width);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(6),
            ])
            .split(area);

        self.render_header(f, chunks[0], cs);

        if narrow {
            self.render_content(f, chunks[1], cs);
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(chunks[1]);
            self.render_content(f, columns[0], cs);
            self.render_modules(f, columns[1], cs);
        }

        self.render_info(f, chunks[2], cs);
    }
}

impl PlayerScreen {
    fn render_header(&self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let mut spans = vec![
            Span::styled(" [G] ← ", Style::default().fg(Color::Yellow)),
            Span::styled(
                self.course.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", self.course.instructor), theme::dim()),
        ];
        if self.course.is_live {
            spans.push(Span::styled(
                "  ● CANLI YAYIN",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::styled(
            format!("  %{} tamamlandı", self.course.progress),
            Style::default().fg(Color::Green),
        ));

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(header, area);
        // The whole header row doubles as a back target.
        cs.add_target(
            Rect::new(area.x, area.y, 8, area.height),
            UiAction::Screen(ACT_BACK),
        );
    }

    fn render_content(&self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let Some(module) = self.course.modules.get(self.active_module) else {
            let empty = Paragraph::new(Line::from(Span::styled(
                " Bu eğitimde henüz yayınlanmış modül yok.",
                theme::dim(),
            )))
            .block(Block::default().borders(Borders::ALL).border_style(theme::dim()));
            f.render_widget(empty, area);
            return;
        };

        match module.kind {
            ModuleKind::Quiz => self.render_quiz(f, area, cs, module.quiz.unwrap_or(&[])),
            ModuleKind::Live => {
                let widget = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("  ● {}", module.title),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "  Canlı sınıf yayını sürüyor — ses ve görüntü tarayıcıda.",
                        theme::label(),
                    )),
                    Line::from(Span::styled(
                        format!("  Eğitmen: {}", self.course.instructor),
                        theme::dim(),
                    )),
                ])
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title(" Canlı Ders "),
                );
                f.render_widget(widget, area);
            }
            ModuleKind::Video | ModuleKind::Document => {
                let icon = if module.kind == ModuleKind::Video {
                    "▶"
                } else {
                    "▤"
                };
                let widget = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("  {icon} {}", module.title),
                        theme::title_style(Color::White),
                    )),
                    Line::from(Span::styled(
                        format!("  {} · {}", module.kind.label(), module.duration),
                        theme::dim(),
                    )),
                ])
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme::dim())
                        .title(" Oynatıcı "),
                );
                f.render_widget(widget, area);
            }
        }
    }

    fn render_quiz(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, quiz: &[QuizQuestion]) {
        let mut cl = ClickableList::new();

        if quiz.is_empty() {
            cl.push(Line::from(Span::styled(" Soru bulunamadı.", theme::dim())));
        } else if self.quiz.finished {
            cl.push(Line::from(""));
            cl.push(Line::from(Span::styled(
                " Sınav Tamamlandı!",
                theme::title_style(Color::Green),
            )));
            cl.push(Line::from(vec![
                Span::styled(" Skor: ", theme::label()),
                Span::styled(
                    format!("{} / {}", self.quiz.score, quiz.len()),
                    theme::title_style(Color::Cyan),
                ),
            ]));
            cl.push(Line::from(""));
            cl.push_clickable(
                Line::from(Span::styled(
                    " [R] Tekrarla",
                    Style::default().fg(Color::Yellow),
                )),
                UiAction::Screen(ACT_RETRY),
            );
        } else {
            let question = &quiz[self.quiz.step];
            cl.push(Line::from(vec![
                Span::styled(
                    format!(" Soru {} ", self.quiz.step + 1),
                    theme::title_style(Color::Cyan),
                ),
                Span::styled(format!("/ {}", quiz.len()), theme::dim()),
            ]));
            cl.push(Line::from(Span::styled(
                format!(" {}", theme::progress_bar(
                    ((self.quiz.step * 100) / quiz.len()) as u8,
                    24,
                )),
                Style::default().fg(Color::Cyan),
            )));
            cl.push(Line::from(""));
            cl.push(Line::from(Span::styled(
                format!(" {}", question.text),
                Style::default().fg(Color::White),
            )));
            cl.push(Line::from(""));
            for (i, option) in question.options.iter().enumerate() {
                let style = if self.quiz.selected == Some(i) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(
                            format!(" [{}] ", i + 1),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::styled(*option, style),
                    ]),
                    UiAction::Screen(OPTION_BASE + i as u16),
                );
            }
            cl.push(Line::from(""));
            let submit_label = if self.quiz.step + 1 == quiz.len() {
                " [Enter] Sınavı Bitir"
            } else {
                " [Enter] Sonraki Soru"
            };
            cl.push_clickable(
                Line::from(Span::styled(
                    submit_label,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                UiAction::Screen(ACT_SUBMIT),
            );
        }
        cl.register_targets(area, cs, 1, 1, 0, 0);

        let widget = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Bölüm Sonu Testi "),
        );
        f.render_widget(widget, area);
    }

    fn render_modules(&self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let mut cl = ClickableList::new();
        for (i, module) in self.course.modules.iter().enumerate() {
            let marker = if module.completed { "✔" } else { " " };
            let style = if i == self.active_module {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(
                        format!(" {marker} "),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(module.title, style),
                    Span::styled(
                        format!(" · {}", module.duration),
                        theme::dim(),
                    ),
                ]),
                UiAction::Screen(MODULE_BASE + i as u16),
            );
        }
        if cl.is_empty() {
            cl.push(Line::from(Span::styled(" Modül yok.", theme::dim())));
        }
        cl.register_targets(area, cs, 1, 1, 0, 0);

        let widget = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(format!(" Modüller ({}) ", self.course.modules.len())),
        );
        f.render_widget(widget, area);
    }

    fn render_info(&self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let mut cl = ClickableList::new();

        let tab_style = |active: bool| {
            if active {
                theme::title_style(Color::Cyan)
            } else {
                theme::dim()
            }
        };
        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    " Genel Bakış ",
                    tab_style(self.tab == InfoTab::Overview),
                ),
                Span::styled("│", theme::dim()),
                Span::styled(" Soru-Cevap ", tab_style(self.tab == InfoTab::Forum)),
                Span::styled("  [T] sekme değiştir", theme::dim()),
            ]),
            UiAction::Screen(ACT_CYCLE_TAB),
        );

        match self.tab {
            InfoTab::Overview => {
                cl.push(Line::from(Span::styled(
                    format!(" {}", self.course.description),
                    theme::label(),
                )));
            }
            InfoTab::Forum => {
                for post in &data::FORUM_POSTS {
                    cl.push(Line::from(vec![
                        Span::styled(format!(" {} ", post.user), theme::title_style(Color::White)),
                        Span::styled(
                            format!("· {} · {} beğeni · {} yanıt", post.date, post.likes, post.replies),
                            theme::dim(),
                        ),
                    ]));
                    cl.push(Line::from(Span::styled(
                        format!("   {}", post.content),
                        theme::label(),
                    )));
                }
            }
        }

        // Tab row click targets sit on the first content row.
        cl.register_targets(area, cs, 1, 1, 0, 0);
        cs.add_target(
            Rect::new(area.x + 1, area.y + 1, 13, 1),
            UiAction::Screen(TAB_OVERVIEW),
        );
        cs.add_target(
            Rect::new(area.x + 15, area.y + 1, 12, 1),
            UiAction::Screen(TAB_FORUM),
        );

        let widget = Paragraph::new(cl.into_lines())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).border_style(theme::dim()));
        f.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_player() -> PlayerScreen {
        let mut screen = PlayerScreen::new(Some("1"));
        screen.select_module(3); // "Bölüm Sonu Testi"
        screen
    }

    #[test]
    fn unknown_course_falls_back_to_first() {
        let screen = PlayerScreen::new(Some("does-not-exist"));
        assert_eq!(screen.course.id, "1");
        let screen = PlayerScreen::new(None);
        assert_eq!(screen.course.id, "1");
    }

    #[test]
    fn module_keys_switch_modules() {
        let mut screen = PlayerScreen::new(Some("1"));
        screen.handle_input(&InputEvent::Char('2'));
        assert_eq!(screen.active_module, 1);

        // Out-of-range module index is ignored.
        screen.handle_input(&InputEvent::Char('9'));
        assert_eq!(screen.active_module, 1);
    }

    #[test]
    fn back_returns_to_dashboard() {
        let mut screen = PlayerScreen::new(Some("1"));
        assert_eq!(
            screen.handle_input(&InputEvent::Char('g')),
            Some(UiAction::Go(View::Dashboard))
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Click(ACT_BACK)),
            Some(UiAction::Go(View::Dashboard))
        );
    }

    #[test]
    fn quiz_scores_correct_answers() {
        let mut screen = quiz_player();

        // Q1: correct option is index 2 → key '3'.
        screen.handle_input(&InputEvent::Char('3'));
        screen.handle_input(&InputEvent::Enter);
        assert_eq!(screen.quiz.step, 1);
        assert_eq!(screen.quiz.score, 1);

        // Q2: wrong answer.
        screen.handle_input(&InputEvent::Char('2'));
        screen.handle_input(&InputEvent::Enter);
        assert_eq!(screen.quiz.score, 1);

        // Q3: correct option is index 1 → key '2'; finishes the quiz.
        screen.handle_input(&InputEvent::Char('2'));
        screen.handle_input(&InputEvent::Enter);
        assert!(screen.quiz.finished);
        assert_eq!(screen.quiz.score, 2);
    }

    #[test]
    fn submit_without_selection_is_ignored() {
        let mut screen = quiz_player();
        screen.handle_input(&InputEvent::Enter);
        assert_eq!(screen.quiz.step, 0);
        assert!(!screen.quiz.finished);
    }

    #[test]
    fn selection_clears_between_questions() {
        let mut screen = quiz_player();
        screen.handle_input(&InputEvent::Char('1'));
        assert_eq!(screen.quiz.selected, Some(0));
        screen.handle_input(&InputEvent::Enter);
        assert_eq!(screen.quiz.selected, None);
    }

    #[test]
    fn retry_resets_a_finished_quiz() {
        let mut screen = quiz_player();
        for _ in 0..3 {
            screen.handle_input(&InputEvent::Char('1'));
            screen.handle_input(&InputEvent::Enter);
        }
        assert!(screen.quiz.finished);

        screen.handle_input(&InputEvent::Char('r'));
        assert_eq!(screen.quiz, QuizRun::new());
    }

    #[test]
    fn switching_modules_resets_the_quiz() {
        let mut screen = quiz_player();
        screen.handle_input(&InputEvent::Char('1'));
        screen.handle_input(&InputEvent::Enter);
        assert_eq!(screen.quiz.step, 1);

        screen.handle_input(&InputEvent::Click(MODULE_BASE));
        assert_eq!(screen.active_module, 0);
        assert_eq!(screen.quiz, QuizRun::new());
    }

    #[test]
    fn option_clicks_select() {
        let mut screen = quiz_player();
        screen.handle_input(&InputEvent::Click(OPTION_BASE + 2));
        assert_eq!(screen.quiz.selected, Some(2));
        // Option index past the answer list is ignored.
        screen.handle_input(&InputEvent::Click(OPTION_BASE + 9));
        assert_eq!(screen.quiz.selected, Some(2));
    }

    #[test]
    fn out_of_range_selection_is_ignored_by_quizrun() {
        let mut run = QuizRun::new();
        let quiz = data::course("1").unwrap().modules[3].quiz.unwrap();
        run.select(99, quiz);
        assert_eq!(run.selected, None);
    }
}
