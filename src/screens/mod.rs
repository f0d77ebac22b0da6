//! Screen trait and the (view, role) → screen dispatch table.
//!
//! Exactly one screen is mounted at a time. Navigation rebuilds the screen
//! from scratch, so per-screen state (wizard steps, tab selection, loaded
//! lists) has mount lifetime, like the pages it models.

pub mod academy;
pub mod activation;
pub mod analytics;
pub mod career;
pub mod catalog;
pub mod certificates;
pub mod commerce;
pub mod dashboard;
pub mod education;
pub mod grants;
pub mod landing;
pub mod login;
pub mod logs;
pub mod player;
pub mod reports;
pub mod settings;
pub mod studio;
pub mod support;
pub mod users;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent, UiAction};
use crate::router::{NavState, View};
use crate::session::{Role, Session};

/// Ticks a standard mock fetch takes to settle (10 ticks/sec → 500ms).
pub const FETCH_TICKS: u32 = 5;
/// Slower operations: activation checks, bookings, payments (~1s).
pub const SLOW_TICKS: u32 = 10;

/// Read-only context handed to screens at render time.
pub struct ScreenCtx<'a> {
    pub session: &'a Session,
    pub nav: &'a NavState,
}

/// One mounted page. Input handlers may answer with a [`UiAction`] for the
/// app layer (navigation, auth); `tick` drives mock loads and may do the
/// same when an async outcome demands a redirect (e.g. payment result).
pub trait Screen {
    fn handle_input(&mut self, event: &InputEvent) -> Option<UiAction>;

    fn tick(&mut self, _ticks: u32) -> Option<UiAction> {
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState, ctx: &ScreenCtx);
}

/// The six "my education" content categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Ebooks,
    Videos,
    Live,
    Assignments,
    Quizzes,
    Exams,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Ebooks => "E-Kitapçık",
            Category::Videos => "Ders Videoları",
            Category::Live => "Canlı Dersler",
            Category::Assignments => "Ödevler",
            Category::Quizzes => "Quizler",
            Category::Exams => "Sınavlar",
        }
    }
}

/// Education sub-view → content category.
pub fn category_for_view(view: View) -> Option<Category> {
    match view {
        View::EducationEbooks => Some(Category::Ebooks),
        View::EducationVideos => Some(Category::Videos),
        View::EducationLive => Some(Category::Live),
        View::EducationAssignments => Some(Category::Assignments),
        View::EducationQuizzes => Some(Category::Quizzes),
        View::EducationExams => Some(Category::Exams),
        _ => None,
    }
}

/// Which concrete screen a (view, role) pair mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    Landing,
    Login,
    Activation,
    AcademySelection,
    DashboardStudent,
    DashboardAdmin { instructor: bool },
    Catalog,
    CoursePlayer,
    MyEducation(Category),
    EducationManager(Category),
    CareerCenter,
    Grants,
    Certificates,
    UserManagement,
    Reports,
    StudentAnalytics,
    SystemLogs,
    Settings,
    Support,
    StudioBooking,
    Cart,
    Invoices,
    Checkout,
    PaymentResult { success: bool },
}

/// The render dispatch table. Total: every (view, role) pair selects exactly
/// one screen. Guests only get the public surface; everything else falls
/// back to the landing page rather than erroring.
pub fn screen_kind(view: View, role: Role) -> ScreenKind {
    if role == Role::Guest && !matches!(view, View::Landing | View::Login | View::Activation) {
        return ScreenKind::Landing;
    }

    if let Some(category) = category_for_view(view) {
        return if role == Role::Instructor {
            ScreenKind::EducationManager(category)
        } else {
            ScreenKind::MyEducation(category)
        };
    }

    match view {
        View::Landing => ScreenKind::Landing,
        View::Login => ScreenKind::Login,
        View::Activation => ScreenKind::Activation,
        View::AcademySelection => ScreenKind::AcademySelection,
        View::Dashboard => match role {
            Role::Admin | Role::TenantAdmin => ScreenKind::DashboardAdmin { instructor: false },
            Role::Instructor => ScreenKind::DashboardAdmin { instructor: true },
            _ => ScreenKind::DashboardStudent,
        },
        View::AdminPanel => ScreenKind::DashboardAdmin { instructor: false },
        View::Catalog => ScreenKind::Catalog,
        View::CoursePlayer => ScreenKind::CoursePlayer,
        View::CareerCenter => ScreenKind::CareerCenter,
        View::Grants => ScreenKind::Grants,
        View::Certificates => ScreenKind::Certificates,
        View::UserManagement => ScreenKind::UserManagement,
        View::Reports => ScreenKind::Reports,
        View::StudentAnalytics => ScreenKind::StudentAnalytics,
        View::SystemLogs => ScreenKind::SystemLogs,
        View::Settings => ScreenKind::Settings,
        View::Support => ScreenKind::Support,
        View::StudioBooking => ScreenKind::StudioBooking,
        View::Cart => ScreenKind::Cart,
        View::Invoices => ScreenKind::Invoices,
        View::Checkout => ScreenKind::Checkout,
        View::PaymentSuccess => ScreenKind::PaymentResult { success: true },
        View::PaymentFailure => ScreenKind::PaymentResult { success: false },
        // Education views are handled above; keep the match total anyway.
        _ => ScreenKind::Landing,
    }
}

/// Mount the screen for a dispatch decision.
pub fn build(kind: ScreenKind, nav: &NavState, session: &Session) -> Box<dyn Screen> {
    let user_tenant = session.user().and_then(|u| u.tenant_id);
    match kind {
        ScreenKind::Landing => Box::new(landing::LandingScreen::new()),
        ScreenKind::Login => Box::new(login::LoginScreen::new()),
        ScreenKind::Activation => Box::new(activation::ActivationScreen::new()),
        ScreenKind::AcademySelection => Box::new(academy::AcademyScreen::new()),
        ScreenKind::DashboardStudent => {
            Box::new(dashboard::StudentDashboard::new(user_tenant))
        }
        ScreenKind::DashboardAdmin { instructor } => {
            Box::new(dashboard::AdminDashboard::new(instructor))
        }
        ScreenKind::Catalog => Box::new(catalog::CatalogScreen::new()),
        ScreenKind::CoursePlayer => Box::new(player::PlayerScreen::new(nav.active_course)),
        ScreenKind::MyEducation(category) => {
            Box::new(education::MyEducationScreen::new(category, user_tenant))
        }
        ScreenKind::EducationManager(category) => {
            Box::new(education::EducationManagerScreen::new(category))
        }
        ScreenKind::CareerCenter => Box::new(career::CareerScreen::new()),
        ScreenKind::Grants => Box::new(grants::GrantsScreen::new()),
        ScreenKind::Certificates => Box::new(certificates::CertificatesScreen::new()),
        ScreenKind::UserManagement => Box::new(users::UserManagementScreen::new()),
        ScreenKind::Reports => Box::new(reports::ReportsScreen::new()),
        ScreenKind::StudentAnalytics => {
            Box::new(analytics::StudentAnalyticsScreen::new(nav.selected_student))
        }
        ScreenKind::SystemLogs => Box::new(logs::SystemLogsScreen::new(
            session.role() == Role::Admin,
            user_tenant,
        )),
        ScreenKind::Settings => Box::new(settings::SettingsScreen::new()),
        ScreenKind::Support => Box::new(support::SupportScreen::new()),
        ScreenKind::StudioBooking => Box::new(studio::StudioScreen::new()),
        ScreenKind::Cart => Box::new(commerce::cart::CartScreen::new()),
        ScreenKind::Invoices => Box::new(commerce::invoices::InvoicesScreen::new()),
        ScreenKind::Checkout => Box::new(commerce::checkout::CheckoutScreen::new()),
        ScreenKind::PaymentResult { success } => {
            Box::new(commerce::result::PaymentResultScreen::new(success))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_is_role_polymorphic() {
        assert_eq!(
            screen_kind(View::Dashboard, Role::Admin),
            ScreenKind::DashboardAdmin { instructor: false }
        );
        assert_eq!(
            screen_kind(View::Dashboard, Role::TenantAdmin),
            ScreenKind::DashboardAdmin { instructor: false }
        );
        assert_eq!(
            screen_kind(View::Dashboard, Role::Instructor),
            ScreenKind::DashboardAdmin { instructor: true }
        );
        assert_eq!(
            screen_kind(View::Dashboard, Role::Student),
            ScreenKind::DashboardStudent
        );
    }

    #[test]
    fn education_views_split_by_role() {
        assert_eq!(
            screen_kind(View::EducationQuizzes, Role::Instructor),
            ScreenKind::EducationManager(Category::Quizzes)
        );
        assert_eq!(
            screen_kind(View::EducationQuizzes, Role::Student),
            ScreenKind::MyEducation(Category::Quizzes)
        );
        assert_eq!(
            screen_kind(View::EducationLive, Role::Admin),
            ScreenKind::MyEducation(Category::Live)
        );
    }

    #[test]
    fn guests_only_see_the_public_surface() {
        assert_eq!(screen_kind(View::Landing, Role::Guest), ScreenKind::Landing);
        assert_eq!(screen_kind(View::Login, Role::Guest), ScreenKind::Login);
        assert_eq!(
            screen_kind(View::Activation, Role::Guest),
            ScreenKind::Activation
        );

        assert_eq!(screen_kind(View::Dashboard, Role::Guest), ScreenKind::Landing);
        assert_eq!(screen_kind(View::Cart, Role::Guest), ScreenKind::Landing);
        assert_eq!(
            screen_kind(View::AcademySelection, Role::Guest),
            ScreenKind::Landing
        );
    }

    #[test]
    fn every_view_dispatches_for_every_role() {
        // Totality check over the whole table.
        let roles = [
            Role::Guest,
            Role::Student,
            Role::Instructor,
            Role::Admin,
            Role::TenantAdmin,
        ];
        for (view, _) in crate::router::ROUTES {
            for role in roles {
                let _ = screen_kind(*view, role);
            }
        }
    }

    #[test]
    fn payment_views_carry_their_outcome() {
        assert_eq!(
            screen_kind(View::PaymentSuccess, Role::Student),
            ScreenKind::PaymentResult { success: true }
        );
        assert_eq!(
            screen_kind(View::PaymentFailure, Role::Student),
            ScreenKind::PaymentResult { success: false }
        );
    }

    #[test]
    fn every_education_view_has_a_category() {
        for view in [
            View::EducationEbooks,
            View::EducationVideos,
            View::EducationLive,
            View::EducationAssignments,
            View::EducationQuizzes,
            View::EducationExams,
        ] {
            assert!(category_for_view(view).is_some());
        }
        assert!(category_for_view(View::Dashboard).is_none());
    }
}
