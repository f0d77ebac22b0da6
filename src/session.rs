//! Session and tenant context: who is logged in, under which academy.
//!
//! The router reads this to pick role-specific screen variants but never
//! owns it; screens mutate it only through the typed UI actions.

use crate::data;

/// Access role. `Guest` is the logged-out state, not a loginable role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Guest,
    Student,
    Instructor,
    Admin,
    TenantAdmin,
}

impl Role {
    /// Admin and tenant-admin share the management surface.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin | Role::TenantAdmin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Guest => "Misafir",
            Role::Student => "Öğrenci",
            Role::Instructor => "Eğitmen",
            Role::Admin => "Yönetici",
            Role::TenantAdmin => "Kurum Yöneticisi",
        }
    }
}

/// Organization type behind a tenant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TenantKind {
    Municipality,
    Corporate,
}

impl TenantKind {
    pub fn label(self) -> &'static str {
        match self {
            TenantKind::Municipality => "Belediye",
            TenantKind::Corporate => "Kurumsal",
        }
    }
}

/// Tenant brand color, mapped to a terminal color in `theme`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrandColor {
    Emerald,
    Blue,
    Violet,
}

/// An academy: brands and scopes a subset of courses and users.
pub struct Tenant {
    pub id: &'static str,
    pub name: &'static str,
    pub color: BrandColor,
    pub kind: TenantKind,
}

/// The authenticated user. `name` is owned because selecting a tenant
/// re-brands it ("Ali (Ümraniye Akademi)").
#[derive(Clone, Debug)]
pub struct User {
    pub id: &'static str,
    pub name: String,
    pub role: Role,
    pub tenant_id: Option<&'static str>,
    pub email: &'static str,
    pub title: &'static str,
    pub points: u32,
}

/// Current user + current tenant. Both optional; all transitions go through
/// the methods below.
#[derive(Default)]
pub struct Session {
    user: Option<User>,
    tenant: Option<&'static Tenant>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn tenant(&self) -> Option<&'static Tenant> {
        self.tenant
    }

    /// Effective role; `Guest` while logged out.
    pub fn role(&self) -> Role {
        self.user.as_ref().map_or(Role::Guest, |u| u.role)
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Log in as one of the mock identities. The tenant-admin identity
    /// reuses the admin profile with the requested role, mirroring the
    /// simulated accounts of the platform demo.
    pub fn login(&mut self, role: Role) {
        if role == Role::Guest {
            return;
        }
        let seed = data::user_seed(role);
        self.user = Some(User {
            id: seed.id,
            name: seed.name.to_string(),
            role,
            tenant_id: seed.tenant_id,
            email: seed.email,
            title: seed.title,
            points: seed.points,
        });
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.tenant = None;
    }

    /// Enter a tenant context. A global admin keeps their global role but
    /// gets scoped to the tenant; the display name gains the academy suffix.
    pub fn select_tenant(&mut self, tenant_id: &str) {
        let Some(tenant) = data::tenant(tenant_id) else {
            return;
        };
        self.tenant = Some(tenant);
        if let Some(user) = self.user.as_mut() {
            user.tenant_id = Some(tenant.id);
            let first_name = user.name.split(' ').next().unwrap_or("").to_string();
            user.name = format!("{} ({})", first_name, tenant.name);
        }
    }

    /// Leave the tenant context (returning to the academy-selection hub).
    pub fn clear_tenant(&mut self) {
        self.tenant = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_session_is_guest() {
        let session = Session::new();
        assert_eq!(session.role(), Role::Guest);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn login_assigns_requested_role() {
        let mut session = Session::new();
        session.login(Role::Student);
        assert_eq!(session.role(), Role::Student);
        assert_eq!(session.user().unwrap().name, "Ali Yılmaz");

        session.login(Role::TenantAdmin);
        assert_eq!(session.role(), Role::TenantAdmin);
        // Tenant admin rides on the admin profile.
        assert_eq!(session.user().unwrap().id, "a1");
    }

    #[test]
    fn guest_login_is_ignored() {
        let mut session = Session::new();
        session.login(Role::Guest);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn select_tenant_binds_and_rebrands() {
        let mut session = Session::new();
        session.login(Role::Student);
        session.select_tenant("umraniye");

        assert_eq!(session.tenant().unwrap().id, "umraniye");
        let user = session.user().unwrap();
        assert_eq!(user.tenant_id, Some("umraniye"));
        assert_eq!(user.name, "Ali (Ümraniye Akademi)");
    }

    #[test]
    fn reselecting_tenant_keeps_first_name_only() {
        let mut session = Session::new();
        session.login(Role::Student);
        session.select_tenant("umraniye");
        session.select_tenant("tech");
        assert_eq!(session.user().unwrap().name, "Ali (Yazılım Akademisi)");
    }

    #[test]
    fn unknown_tenant_is_ignored() {
        let mut session = Session::new();
        session.login(Role::Student);
        session.select_tenant("no-such-academy");
        assert!(session.tenant().is_none());
    }

    #[test]
    fn clear_tenant_keeps_user() {
        let mut session = Session::new();
        session.login(Role::Admin);
        session.select_tenant("ibb");
        session.clear_tenant();
        assert!(session.tenant().is_none());
        assert!(session.is_logged_in());
    }

    #[test]
    fn logout_clears_everything() {
        let mut session = Session::new();
        session.login(Role::Admin);
        session.select_tenant("ibb");
        session.logout();
        assert!(session.user().is_none());
        assert!(session.tenant().is_none());
    }
}
