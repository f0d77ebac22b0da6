//! View routing: the bijective view↔path table, navigation state, and
//! browser-history sync.
//!
//! The route table is a single canonical list; both lookup directions are
//! derived from it, so the bijection holds by construction. All lookups are
//! total: unknown paths resolve to the landing view and unknown views to `/`
//! (a usability default, not an error).

/// Every distinct screen in the application. Closed set; each member has
/// exactly one canonical URL path in [`ROUTES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    AcademySelection,
    Dashboard,
    CoursePlayer,
    Catalog,
    AdminPanel,
    CareerCenter,
    Certificates,
    UserManagement,
    Reports,
    Settings,
    Support,
    Login,
    StudentAnalytics,
    SystemLogs,
    Activation,
    StudioBooking,
    Cart,
    Invoices,
    Checkout,
    PaymentSuccess,
    PaymentFailure,
    Grants,
    EducationEbooks,
    EducationVideos,
    EducationLive,
    EducationAssignments,
    EducationQuizzes,
    EducationExams,
}

/// Canonical route table. The single source of truth for both directions;
/// order is the display order used nowhere else, but keeping the hub views
/// first makes the table easy to audit against the URL surface.
pub const ROUTES: &[(View, &str)] = &[
    (View::Landing, "/"),
    (View::AcademySelection, "/akademi-secimi"),
    (View::Login, "/giris"),
    (View::Activation, "/aktivasyon"),
    (View::Dashboard, "/dashboard"),
    (View::AdminPanel, "/yonetim"),
    (View::Catalog, "/egitim/katalog"),
    (View::CoursePlayer, "/egitim/oynatici"),
    (View::CareerCenter, "/kariyer"),
    (View::Grants, "/kariyer/hibeler"),
    (View::Certificates, "/sertifikalarim"),
    (View::UserManagement, "/yonetim/kullanicilar"),
    (View::Reports, "/yonetim/raporlar"),
    (View::StudentAnalytics, "/yonetim/ogrenci-analiz"),
    (View::SystemLogs, "/yonetim/loglar"),
    (View::Settings, "/ayarlar"),
    (View::Support, "/destek"),
    (View::StudioBooking, "/studyo-rezervasyon"),
    (View::Cart, "/sepet"),
    (View::Invoices, "/faturalar"),
    (View::Checkout, "/odeme"),
    (View::PaymentSuccess, "/odeme/basarili"),
    (View::PaymentFailure, "/odeme/hata"),
    (View::EducationEbooks, "/egitimlerim/kitaplar"),
    (View::EducationVideos, "/egitimlerim/videolar"),
    (View::EducationLive, "/egitimlerim/canli"),
    (View::EducationAssignments, "/egitimlerim/odevler"),
    (View::EducationQuizzes, "/egitimlerim/quizler"),
    (View::EducationExams, "/egitimlerim/sinavlar"),
];

/// Resolve a browser path to a view. Exact string match only; anything not
/// in the table falls back to the landing view.
pub fn view_for_path(path: &str) -> View {
    ROUTES
        .iter()
        .find(|(_, p)| *p == path)
        .map_or(View::Landing, |(v, _)| *v)
}

/// Resolve a view to its canonical path. The `/` default is unreachable as
/// long as [`ROUTES`] stays exhaustive over [`View`].
pub fn path_for_view(view: View) -> &'static str {
    ROUTES
        .iter()
        .find(|(v, _)| *v == view)
        .map_or("/", |(_, p)| p)
}

/// Where the user is: the current view plus in-flight selection context.
/// Owned exclusively by [`Navigator`]; leaf screens read it through the
/// render context and mutate it only via navigation actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub view: View,
    /// Course shown by the player view. Survives navigation away and back.
    pub active_course: Option<&'static str>,
    /// Student shown by the analytics view.
    pub selected_student: Option<u32>,
}

/// Browser-history backend. The DOM implementation lives behind the wasm32
/// cfg below; tests inject a recording fake.
pub trait History {
    /// Push a new entry. Callers guard idempotence; `push` itself is dumb.
    fn push(&mut self, path: &str);
    /// The path of the current entry (`location.pathname` in the browser).
    fn current_path(&self) -> String;
}

/// The navigation service: owns [`NavState`] and keeps it and the browser
/// history consistent in both directions.
pub struct Navigator<H: History> {
    state: NavState,
    history: H,
}

impl<H: History> Navigator<H> {
    /// Derive the initial view from whatever path the app was loaded at.
    pub fn new(history: H) -> Self {
        let view = view_for_path(&history.current_path());
        Self {
            state: NavState {
                view,
                active_course: None,
                selected_student: None,
            },
            history,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    /// Switch to `view`, remembering `course` when given. Pushes history
    /// only when the canonical path differs from the current one, so
    /// repeated navigation to the same view never stacks duplicate entries.
    pub fn navigate_to(&mut self, view: View, course: Option<&'static str>) {
        if let Some(id) = course {
            self.state.active_course = Some(id);
        }
        self.state.view = view;
        let path = path_for_view(view);
        if self.history.current_path() != path {
            self.history.push(path);
        }
    }

    /// Jump to the analytics view for one student. Unlike [`navigate_to`]
    /// this always pushes, so drilling into successive students leaves a
    /// usable back-trail.
    ///
    /// [`navigate_to`]: Navigator::navigate_to
    pub fn select_student(&mut self, student: u32) {
        self.state.selected_student = Some(student);
        self.state.view = View::StudentAnalytics;
        self.history.push(path_for_view(View::StudentAnalytics));
    }

    /// React to a popped history entry (browser back/forward): recompute the
    /// view from the now-current path. Never pushes; this is the response
    /// to an entry change, not the cause of one.
    pub fn sync_from_history(&mut self) {
        self.state.view = view_for_path(&self.history.current_path());
    }
}

// ── DOM history backend ────────────────────────────────────────

/// History backend over `window.history` / `window.location`. Failures
/// (sandboxed iframe, detached window) degrade to no-ops with a console
/// warning; routing state stays internally consistent either way.
pub struct DomHistory;

impl History for DomHistory {
    fn push(&mut self, path: &str) {
        let pushed = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|h| h.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)));
        match pushed {
            Some(Ok(())) => {}
            _ => {
                web_sys::console::warn_1(&format!("akademi: history push failed: {path}").into());
            }
        }
    }

    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
}

#[cfg(test)]
impl<H: History> Navigator<H> {
    pub(crate) fn history_ref(&self) -> &H {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashSet;

    /// In-memory history with a cursor, so tests can simulate back/forward.
    pub(crate) struct FakeHistory {
        entries: Vec<String>,
        cursor: usize,
        pub push_count: u32,
    }

    impl FakeHistory {
        pub fn at(path: &str) -> Self {
            Self {
                entries: vec![path.to_string()],
                cursor: 0,
                push_count: 0,
            }
        }

        /// Simulate the browser's back button: move the cursor only.
        pub fn back(&mut self) {
            if self.cursor > 0 {
                self.cursor -= 1;
            }
        }
    }

    impl History for FakeHistory {
        fn push(&mut self, path: &str) {
            // Pushing discards any forward entries, like a real browser.
            self.entries.truncate(self.cursor + 1);
            self.entries.push(path.to_string());
            self.cursor = self.entries.len() - 1;
            self.push_count += 1;
        }

        fn current_path(&self) -> String {
            self.entries[self.cursor].clone()
        }
    }

    // ── table invariants ───────────────────────────────────────

    #[test]
    fn routes_paths_are_unique() {
        let paths: HashSet<&str> = ROUTES.iter().map(|(_, p)| *p).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn routes_views_are_unique() {
        let views: HashSet<View> = ROUTES.iter().map(|(v, _)| *v).collect();
        assert_eq!(views.len(), ROUTES.len());
    }

    #[test]
    fn round_trip_law_over_all_views() {
        for (view, _) in ROUTES {
            assert_eq!(view_for_path(path_for_view(*view)), *view);
        }
    }

    #[test]
    fn unknown_paths_resolve_to_landing() {
        assert_eq!(view_for_path("/no-such-page"), View::Landing);
        assert_eq!(view_for_path(""), View::Landing);
        assert_eq!(view_for_path("/dashboard/"), View::Landing); // exact match only
        assert_eq!(view_for_path("/egitim/oynatici/42"), View::Landing);
    }

    #[test]
    fn url_surface_matches_contract() {
        assert_eq!(path_for_view(View::Landing), "/");
        assert_eq!(path_for_view(View::AcademySelection), "/akademi-secimi");
        assert_eq!(path_for_view(View::StudentAnalytics), "/yonetim/ogrenci-analiz");
        assert_eq!(path_for_view(View::EducationEbooks), "/egitimlerim/kitaplar");
        assert_eq!(path_for_view(View::PaymentFailure), "/odeme/hata");
    }

    // ── navigator behaviour ────────────────────────────────────

    #[test]
    fn initial_view_derived_from_load_path() {
        let nav = Navigator::new(FakeHistory::at("/sepet"));
        assert_eq!(nav.view(), View::Cart);

        let nav = Navigator::new(FakeHistory::at("/garbage"));
        assert_eq!(nav.view(), View::Landing);
    }

    #[test]
    fn navigate_pushes_once_per_distinct_path() {
        let mut nav = Navigator::new(FakeHistory::at("/"));
        nav.navigate_to(View::Dashboard, None);
        nav.navigate_to(View::Dashboard, None);
        assert_eq!(nav.history.push_count, 1);
        assert_eq!(nav.history.current_path(), "/dashboard");
    }

    #[test]
    fn navigate_records_active_course() {
        let mut nav = Navigator::new(FakeHistory::at("/"));
        nav.navigate_to(View::CoursePlayer, Some("yks-mat-101"));
        assert_eq!(nav.state().active_course, Some("yks-mat-101"));

        // Navigating without a course keeps the previous one.
        nav.navigate_to(View::Dashboard, None);
        assert_eq!(nav.state().active_course, Some("yks-mat-101"));
    }

    #[test]
    fn select_student_forces_analytics_and_always_pushes() {
        let mut nav = Navigator::new(FakeHistory::at("/yonetim/kullanicilar"));
        nav.select_student(42);
        assert_eq!(nav.state().selected_student, Some(42));
        assert_eq!(nav.view(), View::StudentAnalytics);
        assert_eq!(nav.history.current_path(), "/yonetim/ogrenci-analiz");
        assert_eq!(nav.history.push_count, 1);

        // Even from the analytics view itself, another drill-down pushes.
        nav.select_student(7);
        assert_eq!(nav.history.push_count, 2);
    }

    #[test]
    fn back_restores_previous_view_without_pushing() {
        let mut nav = Navigator::new(FakeHistory::at("/"));
        nav.navigate_to(View::Dashboard, None);
        nav.navigate_to(View::Catalog, None);
        assert_eq!(nav.history.push_count, 2);

        nav.history.back();
        nav.sync_from_history();
        assert_eq!(nav.view(), View::Dashboard);
        assert_eq!(nav.history.push_count, 2); // no new entry

        nav.history.back();
        nav.sync_from_history();
        assert_eq!(nav.view(), View::Landing);
        assert_eq!(nav.history.push_count, 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_view() -> impl Strategy<Value = View> {
        (0..ROUTES.len()).prop_map(|i| ROUTES[i].0)
    }

    proptest! {
        #[test]
        fn prop_round_trip(view in arb_view()) {
            prop_assert_eq!(view_for_path(path_for_view(view)), view);
        }

        #[test]
        fn prop_arbitrary_strings_fall_back_to_landing(path in "[a-z/]{0,24}") {
            let resolved = view_for_path(&path);
            if ROUTES.iter().all(|(_, p)| *p != path) {
                prop_assert_eq!(resolved, View::Landing);
            }
        }

        #[test]
        fn prop_paths_are_rooted(view in arb_view()) {
            prop_assert!(path_for_view(view).starts_with('/'));
        }
    }
}
