//! Application composition: owns the navigation service, the session, and
//! the mounted screen; executes typed UI actions; assembles the sidebar and
//! header chrome around whatever screen is mounted.
//!
//! Routing itself lives in `router` and stays render-free; this layer only
//! reads its state to decide what to mount.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState, InputEvent, UiAction};
use crate::router::{History, Navigator, View};
use crate::screens::{self, Screen, ScreenCtx, ScreenKind};
use crate::session::{Role, Session};
use crate::theme;
use crate::widgets::ClickableList;

/// One sidebar entry: where it goes and who sees it.
pub struct MenuItem {
    pub label: &'static str,
    pub target: View,
    pub badge: Option<&'static str>,
}

/// The standard sidebar for a role. Mirrors the role matrix of the web
/// platform's menu: admins get the management surface, students the
/// learning surface, instructors a blend plus the studio.
pub fn sidebar_items(role: Role) -> Vec<MenuItem> {
    let mut items = Vec::new();

    let (dash_label, dash_target) = match role {
        Role::Admin | Role::TenantAdmin => ("Yönetim Paneli", View::AdminPanel),
        Role::Instructor => ("Eğitmen Paneli", View::Dashboard),
        _ => ("Eğitim Paneli", View::Dashboard),
    };
    items.push(MenuItem {
        label: dash_label,
        target: dash_target,
        badge: None,
    });

    if matches!(role, Role::Student | Role::Instructor) {
        items.push(MenuItem {
            label: "Eğitim Kataloğu",
            target: View::Catalog,
            badge: None,
        });
        items.push(MenuItem {
            label: "E-Kitapçık",
            target: View::EducationEbooks,
            badge: None,
        });
        items.push(MenuItem {
            label: "Ders Videoları",
            target: View::EducationVideos,
            badge: None,
        });
        items.push(MenuItem {
            label: "Canlı Dersler",
            target: View::EducationLive,
            badge: (role == Role::Student).then_some("Canlı"),
        });
        items.push(MenuItem {
            label: "Ödevler",
            target: View::EducationAssignments,
            badge: None,
        });
        items.push(MenuItem {
            label: "Quizler",
            target: View::EducationQuizzes,
            badge: None,
        });
        items.push(MenuItem {
            label: "Sınavlar",
            target: View::EducationExams,
            badge: None,
        });
    }

    if role == Role::Instructor {
        items.push(MenuItem {
            label: "Stüdyo Rezervasyon",
            target: View::StudioBooking,
            badge: None,
        });
    }

    if role == Role::Student {
        items.push(MenuItem {
            label: "Sertifikalarım",
            target: View::Certificates,
            badge: None,
        });
        items.push(MenuItem {
            label: "Sepetim",
            target: View::Cart,
            badge: None,
        });
        items.push(MenuItem {
            label: "Faturalar",
            target: View::Invoices,
            badge: None,
        });
    }

    if matches!(role, Role::Student | Role::Instructor | Role::Admin) {
        items.push(MenuItem {
            label: "Kariyer Merkezi",
            target: View::CareerCenter,
            badge: None,
        });
        items.push(MenuItem {
            label: "Fırsatlar & Hibeler",
            target: View::Grants,
            badge: None,
        });
    }

    if matches!(role, Role::Admin | Role::Instructor | Role::TenantAdmin) {
        items.push(MenuItem {
            label: "Öğrenci Listesi",
            target: View::UserManagement,
            badge: None,
        });
        items.push(MenuItem {
            label: "Raporlar & Analitik",
            target: View::Reports,
            badge: None,
        });
    }

    if role.is_admin() {
        items.push(MenuItem {
            label: "Sistem Logları",
            target: View::SystemLogs,
            badge: Some("Yeni"),
        });
    }

    items.push(MenuItem {
        label: "Destek & SSS",
        target: View::Support,
        badge: None,
    });
    items.push(MenuItem {
        label: "Ayarlar",
        target: View::Settings,
        badge: None,
    });

    items
}

/// Career-mode sidebar, swapped in while the user is inside the career
/// section.
pub fn career_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "Kariyer Merkezi",
            target: View::CareerCenter,
            badge: None,
        },
        MenuItem {
            label: "Fırsatlar & Hibeler",
            target: View::Grants,
            badge: None,
        },
        MenuItem {
            label: "İş İlanları",
            target: View::CareerCenter,
            badge: None,
        },
        MenuItem {
            label: "CV & Portfolyo",
            target: View::CareerCenter,
            badge: Some("Yakında"),
        },
    ]
}

/// Views that render without the sidebar/header chrome even when logged in.
fn is_bare_view(view: View) -> bool {
    matches!(
        view,
        View::Landing | View::AcademySelection | View::Login | View::Activation
    )
}

pub struct App<H: History> {
    nav: Navigator<H>,
    session: Session,
    screen: Box<dyn Screen>,
    /// What is currently mounted; remount happens only when this changes.
    mounted: (ScreenKind, Option<&'static str>, Option<u32>),
}

impl<H: History> App<H> {
    pub fn new(history: H) -> Self {
        let nav = Navigator::new(history);
        let session = Session::new();
        let kind = screens::screen_kind(nav.view(), session.role());
        let screen = screens::build(kind, nav.state(), &session);
        let mounted = (kind, nav.state().active_course, nav.state().selected_student);
        Self {
            nav,
            session,
            screen,
            mounted,
        }
    }

    pub fn view(&self) -> View {
        self.nav.view()
    }

    pub fn mounted_kind(&self) -> ScreenKind {
        self.mounted.0
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Remount the screen if the dispatch decision or selection context
    /// changed. Same decision → the mounted screen (and its state) stays.
    fn sync_screen(&mut self) {
        let kind = screens::screen_kind(self.nav.view(), self.session.role());
        let state = self.nav.state();
        let next = (kind, state.active_course, state.selected_student);
        if next != self.mounted {
            self.screen = screens::build(kind, state, &self.session);
            self.mounted = next;
        }
    }

    /// The `navigateTo` operation: tenant-clearing side effect on the hub,
    /// then delegate to the navigation service.
    pub fn navigate_to(&mut self, view: View, course: Option<&'static str>) {
        if view == View::AcademySelection {
            self.session.clear_tenant();
        }
        self.nav.navigate_to(view, course);
        self.sync_screen();
    }

    /// Execute a typed UI action. Screen-local ids are routed back into the
    /// mounted screen; whatever it answers is executed in turn.
    pub fn dispatch(&mut self, action: UiAction) {
        match action {
            UiAction::Screen(id) => {
                if let Some(follow_up) = self.screen.handle_input(&InputEvent::Click(id)) {
                    self.execute(follow_up);
                }
            }
            other => self.execute(other),
        }
    }

    fn execute(&mut self, action: UiAction) {
        match action {
            UiAction::Go(view) => self.navigate_to(view, None),
            UiAction::OpenCourse(course_id) => {
                self.navigate_to(View::CoursePlayer, Some(course_id));
            }
            UiAction::SelectStudent(student_id) => {
                self.nav.select_student(student_id);
                self.sync_screen();
            }
            UiAction::SelectTenant(tenant_id) => {
                self.session.select_tenant(tenant_id);
                let target = if self.session.role().is_admin() {
                    View::AdminPanel
                } else {
                    View::Dashboard
                };
                self.navigate_to(target, None);
            }
            UiAction::Login(role) => {
                self.session.login(role);
                self.navigate_to(View::AcademySelection, None);
            }
            UiAction::Logout => {
                self.session.logout();
                self.navigate_to(View::Landing, None);
            }
            // Screen-local actions never reach here; dispatch unwraps them.
            UiAction::Screen(_) => {}
        }
    }

    /// Keyboard entry point.
    pub fn handle_key(&mut self, event: InputEvent) {
        if let Some(action) = self.screen.handle_input(&event) {
            self.execute(action);
        }
    }

    /// Browser back/forward: resync the view from the URL, never pushing.
    pub fn on_popstate(&mut self) {
        self.nav.sync_from_history();
        self.sync_screen();
    }

    /// Advance mock loads; a screen may answer with a redirect.
    pub fn tick(&mut self, ticks: u32) {
        if ticks == 0 {
            return;
        }
        if let Some(action) = self.screen.tick(ticks) {
            self.execute(action);
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let ctx = ScreenCtx {
            session: &self.session,
            nav: self.nav.state(),
        };

        let show_chrome = self.session.is_logged_in() && !is_bare_view(self.nav.view());
        if !show_chrome {
            self.screen.render(f, area, cs, &ctx);
            return;
        }

        let narrow = is_narrow_layout(area.width);
        let (sidebar_area, main_area) = if narrow {
            (None, area)
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(26), Constraint::Min(30)])
                .split(area);
            (Some(columns[0]), columns[1])
        };

        if let Some(sidebar) = sidebar_area {
            self.render_sidebar(f, sidebar, cs);
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(main_area);
        self.render_header(f, rows[0], cs);
        self.screen.render(f, rows[1], cs, &ctx);
    }

    fn render_sidebar(&self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let view = self.nav.view();
        let career_mode = matches!(view, View::CareerCenter | View::Grants);

        let mut cl = ClickableList::new();
        cl.push(Line::from(Span::styled(
            " AKADEMİ İSTANBUL",
            theme::title_style(Color::Cyan),
        )));
        cl.push(Line::from(""));
        cl.push_clickable(
            Line::from(Span::styled(
                " ◂ Platforma Dön",
                Style::default().fg(Color::Yellow),
            )),
            UiAction::Go(View::AcademySelection),
        );
        cl.push(Line::from(""));

        let section = if career_mode {
            " KARİYER MENÜSÜ"
        } else {
            " ANA MENÜ"
        };
        cl.push(Line::from(Span::styled(section, theme::dim())));

        let items = if career_mode {
            career_items()
        } else {
            sidebar_items(self.session.role())
        };
        for item in items {
            let active = view == item.target;
            let style = if active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::label()
            };
            let mut spans = vec![Span::styled(format!(" {}", item.label), style)];
            if let Some(badge) = item.badge {
                spans.push(Span::styled(
                    format!(" [{badge}]"),
                    Style::default().fg(Color::Red),
                ));
            }
            cl.push_clickable(Line::from(spans), UiAction::Go(item.target));
        }

        cl.push(Line::from(""));
        cl.push_clickable(
            Line::from(Span::styled(" ✕ Çıkış Yap", Style::default().fg(Color::Red))),
            UiAction::Logout,
        );
        cl.register_targets(area, cs, 1, 1, 0, 0);

        let widget = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::accent(self.session.tenant()))),
        );
        f.render_widget(widget, area);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let mut spans = Vec::new();
        if let Some(tenant) = self.session.tenant() {
            spans.push(Span::styled(
                format!(" {} ", tenant.name),
                Style::default()
                    .fg(Color::Black)
                    .bg(theme::brand_color(tenant.color))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        if let Some(user) = self.session.user() {
            spans.push(Span::styled(
                user.name.clone(),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled(
                format!(" · {}", user.role.label()),
                theme::dim(),
            ));
        }

        let widget = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim()),
        );
        f.render_widget(widget, area);
        // Header is a compact logout target in the narrow layout where the
        // sidebar is hidden.
        if is_narrow_layout(f.area().width) {
            cs.add_target(
                Rect::new(area.x + area.width.saturating_sub(4), area.y, 4, area.height),
                UiAction::Logout,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::tests::FakeHistory;
    use crate::router::{path_for_view, ROUTES};
    use crate::screens::Category;

    fn app_at(path: &str) -> App<FakeHistory> {
        App::new(FakeHistory::at(path))
    }

    fn logged_in(role: Role) -> App<FakeHistory> {
        let mut app = app_at("/");
        app.dispatch(UiAction::Login(role));
        app
    }

    #[test]
    fn boots_from_the_load_path() {
        let app = app_at("/destek");
        assert_eq!(app.view(), View::Support);
        // Guest at a protected URL still renders the landing screen.
        assert_eq!(app.mounted_kind(), ScreenKind::Landing);
    }

    #[test]
    fn login_lands_on_the_hub() {
        let app = logged_in(Role::Student);
        assert_eq!(app.view(), View::AcademySelection);
        assert_eq!(app.mounted_kind(), ScreenKind::AcademySelection);
        assert!(app.session().is_logged_in());
    }

    #[test]
    fn tenant_selection_routes_by_role() {
        let mut app = logged_in(Role::Student);
        app.dispatch(UiAction::SelectTenant("umraniye"));
        assert_eq!(app.view(), View::Dashboard);
        assert_eq!(app.mounted_kind(), ScreenKind::DashboardStudent);

        let mut app = logged_in(Role::TenantAdmin);
        app.dispatch(UiAction::SelectTenant("ibb"));
        assert_eq!(app.view(), View::AdminPanel);
        assert_eq!(
            app.mounted_kind(),
            ScreenKind::DashboardAdmin { instructor: false }
        );
    }

    #[test]
    fn hub_navigation_clears_the_tenant() {
        let mut app = logged_in(Role::Student);
        app.dispatch(UiAction::SelectTenant("umraniye"));
        assert!(app.session().tenant().is_some());

        app.dispatch(UiAction::Go(View::AcademySelection));
        assert!(app.session().tenant().is_none());
        // The user stays logged in; only the tenant context drops.
        assert!(app.session().is_logged_in());
    }

    #[test]
    fn repeat_navigation_pushes_once() {
        let mut app = logged_in(Role::Student);
        let before = app.nav_history().push_count;
        app.dispatch(UiAction::Go(View::Catalog));
        app.dispatch(UiAction::Go(View::Catalog));
        assert_eq!(app.nav_history().push_count, before + 1);
    }

    #[test]
    fn open_course_mounts_the_player_with_the_course() {
        let mut app = logged_in(Role::Student);
        app.dispatch(UiAction::SelectTenant("umraniye"));
        app.dispatch(UiAction::OpenCourse("4"));
        assert_eq!(app.view(), View::CoursePlayer);
        assert_eq!(app.mounted_kind(), ScreenKind::CoursePlayer);
        assert_eq!(app.nav_history().current_path(), "/egitim/oynatici");
    }

    #[test]
    fn select_student_forces_analytics_and_pushes() {
        let mut app = logged_in(Role::Admin);
        app.dispatch(UiAction::Go(View::UserManagement));
        let before = app.nav_history().push_count;

        app.dispatch(UiAction::SelectStudent(42));
        assert_eq!(app.view(), View::StudentAnalytics);
        assert_eq!(app.mounted_kind(), ScreenKind::StudentAnalytics);
        assert_eq!(app.nav_history().current_path(), "/yonetim/ogrenci-analiz");
        assert_eq!(app.nav_history().push_count, before + 1);
    }

    #[test]
    fn browser_back_restores_the_previous_view_without_pushing() {
        let mut app = logged_in(Role::Student);
        app.dispatch(UiAction::SelectTenant("umraniye")); // → /dashboard
        app.dispatch(UiAction::Go(View::Catalog));
        let pushes = app.nav_history().push_count;

        app.nav_history_mut().back();
        app.on_popstate();
        assert_eq!(app.view(), View::Dashboard);
        assert_eq!(app.mounted_kind(), ScreenKind::DashboardStudent);
        assert_eq!(app.nav_history().push_count, pushes);
    }

    #[test]
    fn logout_returns_to_landing() {
        let mut app = logged_in(Role::Instructor);
        app.dispatch(UiAction::Logout);
        assert_eq!(app.view(), View::Landing);
        assert!(!app.session().is_logged_in());
        assert_eq!(app.mounted_kind(), ScreenKind::Landing);
    }

    #[test]
    fn keyboard_flows_through_the_mounted_screen() {
        let mut app = app_at("/giris");
        assert_eq!(app.mounted_kind(), ScreenKind::Login);
        app.handle_key(InputEvent::Char('2'));
        assert_eq!(app.session().role(), Role::Instructor);
        assert_eq!(app.view(), View::AcademySelection);
    }

    #[test]
    fn role_change_remounts_role_polymorphic_views() {
        let mut app = logged_in(Role::Instructor);
        app.dispatch(UiAction::Go(View::EducationQuizzes));
        assert_eq!(
            app.mounted_kind(),
            ScreenKind::EducationManager(Category::Quizzes)
        );

        app.dispatch(UiAction::Logout);
        app.dispatch(UiAction::Login(Role::Student));
        app.dispatch(UiAction::Go(View::EducationQuizzes));
        assert_eq!(
            app.mounted_kind(),
            ScreenKind::MyEducation(Category::Quizzes)
        );
    }

    #[test]
    fn every_route_mounts_for_a_logged_in_admin() {
        let mut app = logged_in(Role::Admin);
        for (view, _) in ROUTES {
            app.dispatch(UiAction::Go(*view));
            assert_eq!(app.nav_history().current_path(), path_for_view(app.view()));
        }
    }

    // ── sidebar matrix ─────────────────────────────────────────

    fn labels(role: Role) -> Vec<&'static str> {
        sidebar_items(role).iter().map(|i| i.label).collect()
    }

    #[test]
    fn student_sidebar() {
        let labels = labels(Role::Student);
        assert!(labels.contains(&"Eğitim Paneli"));
        assert!(labels.contains(&"Sertifikalarım"));
        assert!(labels.contains(&"Sepetim"));
        assert!(!labels.contains(&"Stüdyo Rezervasyon"));
        assert!(!labels.contains(&"Sistem Logları"));
        assert!(!labels.contains(&"Öğrenci Listesi"));
    }

    #[test]
    fn instructor_sidebar() {
        let labels = labels(Role::Instructor);
        assert!(labels.contains(&"Eğitmen Paneli"));
        assert!(labels.contains(&"Stüdyo Rezervasyon"));
        assert!(labels.contains(&"Öğrenci Listesi"));
        assert!(!labels.contains(&"Sertifikalarım"));
        assert!(!labels.contains(&"Sistem Logları"));
    }

    #[test]
    fn admin_sidebar() {
        let labels = labels(Role::Admin);
        assert!(labels.contains(&"Yönetim Paneli"));
        assert!(labels.contains(&"Sistem Logları"));
        assert!(labels.contains(&"Kariyer Merkezi"));
        assert!(!labels.contains(&"E-Kitapçık"));
    }

    #[test]
    fn tenant_admin_sidebar() {
        let labels = labels(Role::TenantAdmin);
        assert!(labels.contains(&"Sistem Logları"));
        assert!(labels.contains(&"Raporlar & Analitik"));
        // The career section is not part of the tenant-admin menu.
        assert!(!labels.contains(&"Kariyer Merkezi"));
    }

    #[test]
    fn everyone_gets_support_and_settings() {
        for role in [Role::Student, Role::Instructor, Role::Admin, Role::TenantAdmin] {
            let labels = labels(role);
            assert!(labels.contains(&"Destek & SSS"));
            assert!(labels.contains(&"Ayarlar"));
        }
    }
}

#[cfg(test)]
impl App<crate::router::tests::FakeHistory> {
    fn nav_history(&self) -> &crate::router::tests::FakeHistory {
        self.nav.history_ref()
    }

    fn nav_history_mut(&mut self) -> &mut crate::router::tests::FakeHistory {
        self.nav.history_mut()
    }
}
