//! System audit log with actor filtering and tenant scoping.
//!
//! Scoping rules: a global admin sees every tenant and may narrow to one;
//! a tenant admin is pinned to their own tenant and the tenant tabs never
//! render. The "Admin" actor filter also matches super-admin entries.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{self, AuditEntry, LogAction, LogActor};
use crate::input::{ClickState, InputEvent, UiAction};
use crate::theme;
use crate::widgets::TabBar;

use super::{Screen, ScreenCtx};

const ACTOR_TAB_BASE: u16 = 0; // 0=all, 1=admin, 2=instructor, 3=student
const TENANT_TAB_BASE: u16 = 10; // 10=all tenants, 11.. = tenant index

/// Does `entry` pass the actor filter? `None` means all actors; the admin
/// filter intentionally includes super-admin activity.
pub fn actor_matches(entry: &AuditEntry, filter: Option<LogActor>) -> bool {
    match filter {
        None => true,
        Some(LogActor::Admin) => {
            matches!(entry.actor, LogActor::Admin | LogActor::SuperAdmin)
        }
        Some(actor) => entry.actor == actor,
    }
}

/// Apply both filters over the audit table.
pub fn filtered_logs(
    can_see_all: bool,
    own_tenant: Option<&str>,
    actor_filter: Option<LogActor>,
    tenant_filter: Option<&str>,
) -> Vec<&'static AuditEntry> {
    data::AUDIT_LOG
        .iter()
        .filter(|entry| actor_matches(entry, actor_filter))
        .filter(|entry| {
            if can_see_all {
                tenant_filter.is_none_or(|t| entry.tenant_id == t)
            } else {
                // Tenant admins only ever see their own academy's trail.
                own_tenant.is_some_and(|t| entry.tenant_id == t)
            }
        })
        .collect()
}

pub struct SystemLogsScreen {
    can_see_all: bool,
    own_tenant: Option<&'static str>,
    actor_filter: Option<LogActor>,
    tenant_filter: Option<&'static str>,
}

impl SystemLogsScreen {
    pub fn new(can_see_all: bool, own_tenant: Option<&'static str>) -> Self {
        Self {
            can_see_all,
            own_tenant,
            actor_filter: None,
            tenant_filter: None,
        }
    }

    fn visible(&self) -> Vec<&'static AuditEntry> {
        filtered_logs(
            self.can_see_all,
            self.own_tenant,
            self.actor_filter,
            self.tenant_filter,
        )
    }

    fn set_tab(&mut self, id: u16) {
        match id {
            0 => self.actor_filter = None,
            1 => self.actor_filter = Some(LogActor::Admin),
            2 => self.actor_filter = Some(LogActor::Instructor),
            3 => self.actor_filter = Some(LogActor::Student),
            TENANT_TAB_BASE => self.tenant_filter = None,
            id if id > TENANT_TAB_BASE => {
                self.tenant_filter = data::TENANTS
                    .get((id - TENANT_TAB_BASE - 1) as usize)
                    .map(|t| t.id);
            }
            _ => {}
        }
    }
}

impl Screen for SystemLogsScreen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction> {
        match event {
            InputEvent::Char(c @ '0'..='3') => {
                self.set_tab(ACTOR_TAB_BASE + (*c as u8 - b'0') as u16);
                None
            }
            InputEvent::Click(id) => {
                self.set_tab(*id);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, _ctx: &ScreenCtx) {
        let tenant_bar = u16::from(self.can_see_all) * 3;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(tenant_bar),
                Constraint::Min(5),
            ])
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
            .tab("Tümü [0]", tab_style(self.actor_filter.is_none()), UiAction::Screen(0))
            .tab(
                "Admin [1]",
                tab_style(self.actor_filter == Some(LogActor::Admin)),
                UiAction::Screen(1),
            )
            .tab(
                "Eğitmen [2]",
                tab_style(self.actor_filter == Some(LogActor::Instructor)),
                UiAction::Screen(2),
            )
            .tab(
                "Öğrenci [3]",
                tab_style(self.actor_filter == Some(LogActor::Student)),
                UiAction::Screen(3),
            )
            .block(Block::default().borders(Borders::ALL).title(" Sistem Logları "))
            .render(f, chunks[0], cs);

        if self.can_see_all {
            let mut bar = TabBar::new(" │ ").tab(
                "Tüm Akademiler",
                tab_style(self.tenant_filter.is_none()),
                UiAction::Screen(TENANT_TAB_BASE),
            );
            for (i, tenant) in data::TENANTS.iter().enumerate() {
                bar = bar.tab(
                    tenant.name,
                    tab_style(self.tenant_filter == Some(tenant.id)),
                    UiAction::Screen(TENANT_TAB_BASE + 1 + i as u16),
                );
            }
            bar.block(Block::default().borders(Borders::ALL))
                .render(f, chunks[1], cs);
        }

        let lines: Vec<Line> = self
            .visible()
            .iter()
            .map(|entry| {
                let action_color = match entry.action {
                    LogAction::Create => Color::Green,
                    LogAction::Update => Color::Cyan,
                    LogAction::Delete => Color::Red,
                    LogAction::Login => Color::Blue,
                    LogAction::Complete => Color::Magenta,
                    LogAction::Error => Color::Red,
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", entry.id), theme::dim()),
                    Span::styled(
                        format!("{:<11}", entry.action.label()),
                        Style::default().fg(action_color),
                    ),
                    Span::styled(entry.user, Style::default().fg(Color::White)),
                    Span::styled(
                        format!(" ({})", entry.actor.label()),
                        theme::dim(),
                    ),
                    Span::styled(format!(" — {}", entry.description), theme::label()),
                    Span::styled(
                        format!(" · {} · {}", entry.timestamp, entry.ip),
                        theme::dim(),
                    ),
                ])
            })
            .collect();

        let table = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim())
                .title(format!(" Kayıtlar ({}) ", self.visible().len())),
        );
        f.render_widget(table, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_admin_sees_everything_by_default() {
        let screen = SystemLogsScreen::new(true, None);
        assert_eq!(screen.visible().len(), data::AUDIT_LOG.len());
    }

    #[test]
    fn tenant_admin_is_pinned_to_their_tenant() {
        let screen = SystemLogsScreen::new(false, Some("tech"));
        let visible = screen.visible();
        assert_eq!(visible.len(), 4);
        assert!(visible.iter().all(|e| e.tenant_id == "tech"));
    }

    #[test]
    fn tenant_admin_without_binding_sees_nothing() {
        let screen = SystemLogsScreen::new(false, None);
        assert!(screen.visible().is_empty());
    }

    #[test]
    fn admin_filter_includes_super_admin() {
        let mut screen = SystemLogsScreen::new(true, None);
        screen.handle_input(&InputEvent::Char('1'));
        let visible = screen.visible();
        assert_eq!(visible.len(), 3); // L001 (super), L007, L010
        assert!(visible
            .iter()
            .all(|e| matches!(e.actor, LogActor::Admin | LogActor::SuperAdmin)));
    }

    #[test]
    fn tenant_tabs_narrow_a_global_view() {
        let mut screen = SystemLogsScreen::new(true, None);
        screen.handle_input(&InputEvent::Click(TENANT_TAB_BASE + 2)); // ibb
        let visible = screen.visible();
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|e| e.tenant_id == "ibb"));

        screen.handle_input(&InputEvent::Click(TENANT_TAB_BASE));
        assert_eq!(screen.visible().len(), data::AUDIT_LOG.len());
    }

    #[test]
    fn filters_compose() {
        let mut screen = SystemLogsScreen::new(true, None);
        screen.handle_input(&InputEvent::Char('3')); // students
        screen.handle_input(&InputEvent::Click(TENANT_TAB_BASE + 3)); // tech
        let visible = screen.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "L003");
    }
}
