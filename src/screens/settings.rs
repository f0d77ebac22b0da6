//! Settings: profile, notification toggles, and security. Notification and
//! appearance toggles persist to localStorage through the versioned
//! preference save; everything else is display-only demo data.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent, UiAction};
use crate::save::{self, Preferences};
use crate::theme;
use crate::widgets::{ClickableList, TabBar};

use super::{Screen, ScreenCtx};

const TAB_PROFILE: u16 = 0;
const TAB_NOTIFICATIONS: u16 = 1;
const TAB_SECURITY: u16 = 2;

const TOGGLE_BASE: u16 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Profile,
    Notifications,
    Security,
}

pub struct SettingsScreen {
    tab: Tab,
    prefs: Preferences,
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self {
            tab: Tab::Profile,
            prefs: save::load_prefs(),
        }
    }

    fn toggle(&mut self, idx: u16) {
        match idx {
            0 => self.prefs.notify_course_updates = !self.prefs.notify_course_updates,
            1 => self.prefs.notify_live_reminders = !self.prefs.notify_live_reminders,
            2 => self.prefs.notify_marketing = !self.prefs.notify_marketing,
            3 => self.prefs.reduce_motion = !self.prefs.reduce_motion,
            _ => return,
        }
        #[cfg(target_arch = "wasm32")]
        save::store_prefs(&self.prefs);
    }

    fn toggles(&self) -> [(&'static str, bool); 4] {
        [
            ("Eğitim güncellemeleri", self.prefs.notify_course_updates),
            ("Canlı ders hatırlatmaları", self.prefs.notify_live_reminders),
            ("Kampanya ve duyurular", self.prefs.notify_marketing),
            ("Animasyonları azalt", self.prefs.reduce_motion),
        ]
    }
}

impl Screen for SettingsScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char('p') => self.tab = Tab::Profile,
            InputEvent::Char('b') => self.tab = Tab::Notifications,
            InputEvent::Char('g') => self.tab = Tab::Security,
            InputEvent::Char(c @ '1'..='4') => {
                if self.tab == Tab::Notifications {
                    self.toggle((*c as u8 - b'1') as u16);
                }
            }
            InputEvent::Click(id) => match *id {
                TAB_PROFILE => self.tab = Tab::Profile,
                TAB_NOTIFICATIONS => self.tab = Tab::Notifications,
                TAB_SECURITY => self.tab = Tab::Security,
                id if id >= TOGGLE_BASE => self.toggle(id - TOGGLE_BASE),
                _ => {}
            },
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, ctx: &ScreenCtx) {
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
                "Profil [P]",
                tab_style(self.tab == Tab::Profile),
                UiAction::Screen(TAB_PROFILE),
            )
            .tab(
                "Bildirimler [B]",
                tab_style(self.tab == Tab::Notifications),
                UiAction::Screen(TAB_NOTIFICATIONS),
            )
            .tab(
                "Güvenlik [G]",
                tab_style(self.tab == Tab::Security),
                UiAction::Screen(TAB_SECURITY),
            )
            .block(Block::default().borders(Borders::ALL).title(" Ayarlar "))
            .render(f, chunks[0], cs);

        match self.tab {
            Tab::Profile => {
                let mut lines = vec![Line::from("")];
                if let Some(user) = ctx.session.user() {
                    lines.push(Line::from(vec![
                        Span::styled(" Ad Soyad: ", theme::label()),
                        Span::styled(user.name.clone(), Style::default().fg(Color::White)),
                    ]));
                    lines.push(Line::from(vec![
                        Span::styled(" E-posta:  ", theme::label()),
                        Span::styled(user.email, Style::default().fg(Color::White)),
                    ]));
                    lines.push(Line::from(vec![
                        Span::styled(" Unvan:    ", theme::label()),
                        Span::styled(user.title, Style::default().fg(Color::White)),
                    ]));
                    lines.push(Line::from(vec![
                        Span::styled(" Rol:      ", theme::label()),
                        Span::styled(user.role.label(), Style::default().fg(Color::Cyan)),
                    ]));
                }
                let widget = Paragraph::new(lines).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme::dim())
                        .title(" Profil Bilgileri "),
                );
                f.render_widget(widget, chunks[1]);
            }
            Tab::Notifications => {
                let mut cl = ClickableList::new();
                cl.push(Line::from(""));
                for (i, (label, enabled)) in self.toggles().iter().enumerate() {
                    let (mark, color) = if *enabled {
                        ("[✔]", Color::Green)
                    } else {
                        ("[ ]", Color::DarkGray)
                    };
                    cl.push_clickable(
                        Line::from(vec![
                            Span::styled(
                                format!(" [{}] ", i + 1),
                                Style::default().fg(Color::Yellow),
                            ),
                            Span::styled(format!("{mark} "), Style::default().fg(color)),
                            Span::styled(*label, Style::default().fg(Color::White)),
                        ]),
                        UiAction::Screen(TOGGLE_BASE + i as u16),
                    );
                }
                cl.push(Line::from(""));
                cl.push(Line::from(Span::styled(
                    " Tercihler bu tarayıcıda saklanır.",
                    theme::dim(),
                )));
                cl.register_targets(chunks[1], cs, 1, 1, 0, 0);
                let widget = Paragraph::new(cl.into_lines()).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme::dim())
                        .title(" Bildirim Tercihleri "),
                );
                f.render_widget(widget, chunks[1]);
            }
            Tab::Security => {
                let widget = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        " Son giriş: bu oturum",
                        theme::label(),
                    )),
                    Line::from(Span::styled(
                        " İki adımlı doğrulama: kapalı",
                        theme::label(),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        " Şifre sıfırlama bağlantısı e-posta ile gönderilir.",
                        theme::dim(),
                    )),
                ])
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme::dim())
                        .title(" Güvenlik "),
                );
                f.render_widget(widget, chunks[1]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_profile_tab_with_default_prefs() {
        let screen = SettingsScreen::new();
        assert_eq!(screen.tab, Tab::Profile);
        assert_eq!(screen.prefs, Preferences::default());
    }

    #[test]
    fn tab_keys_and_clicks_switch() {
        let mut screen = SettingsScreen::new();
        screen.handle_input(&InputEvent::Char('b'));
        assert_eq!(screen.tab, Tab::Notifications);
        screen.handle_input(&InputEvent::Click(TAB_SECURITY));
        assert_eq!(screen.tab, Tab::Security);
        screen.handle_input(&InputEvent::Char('p'));
        assert_eq!(screen.tab, Tab::Profile);
    }

    #[test]
    fn toggles_only_respond_on_the_notifications_tab() {
        let mut screen = SettingsScreen::new();
        screen.handle_input(&InputEvent::Char('1'));
        assert!(screen.prefs.notify_course_updates); // unchanged on profile tab

        screen.handle_input(&InputEvent::Char('b'));
        screen.handle_input(&InputEvent::Char('1'));
        assert!(!screen.prefs.notify_course_updates);
    }

    #[test]
    fn toggle_clicks_flip_preferences() {
        let mut screen = SettingsScreen::new();
        assert!(!screen.prefs.notify_marketing);
        screen.handle_input(&InputEvent::Click(TOGGLE_BASE + 2));
        assert!(screen.prefs.notify_marketing);
        screen.handle_input(&InputEvent::Click(TOGGLE_BASE + 2));
        assert!(!screen.prefs.notify_marketing);
    }
}
