// src/dashboard.rs
// Auth gate for the dashboard layout.

use crate::models::user::User;

pub const HOME_ROUTE: &str = "/";

#[derive(Debug, Clone, PartialEq)]
pub enum AuthGate {
    Loading,
    Unauthenticated,
    Authenticated(User),
}

#[derive(Debug, PartialEq)]
pub enum GateView<'a> {
    Spinner,
    Redirect(&'static str),
    Content(&'a User),
}

impl AuthGate {
    /// Leaves `Loading` once auth state is known. Resolved gates stay put.
    pub fn resolve(self, user: Option<User>) -> Self {
        match self {
            AuthGate::Loading => match user {
                Some(u) => AuthGate::Authenticated(u),
                None => AuthGate::Unauthenticated,
            },
            resolved => resolved,
        }
    }

    pub fn view(&self) -> GateView<'_> {
        match self {
            AuthGate::Loading => GateView::Spinner,
            AuthGate::Unauthenticated => GateView::Redirect(HOME_ROUTE),
            AuthGate::Authenticated(user) => GateView::Content(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use chrono::Utc;

    fn user() -> User {
        User {
            id: 1,
            username: "boris".into(),
            full_name: "Boris".into(),
            role: UserRole::User,
            balance: 0.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn loading_shows_spinner() {
        assert_eq!(AuthGate::Loading.view(), GateView::Spinner);
    }

    #[test]
    fn no_user_redirects_home() {
        let gate = AuthGate::Loading.resolve(None);
        assert_eq!(gate, AuthGate::Unauthenticated);
        assert_eq!(gate.view(), GateView::Redirect("/"));
    }

    #[test]
    fn user_renders_content() {
        let u = user();
        let gate = AuthGate::Loading.resolve(Some(u.clone()));
        assert_eq!(gate.view(), GateView::Content(&u));
    }

    #[test]
    fn resolving_always_leaves_loading() {
        for user in [None, Some(user())] {
            let gate = AuthGate::Loading.resolve(user);
            assert_ne!(gate, AuthGate::Loading);
            assert_ne!(gate.view(), GateView::Spinner);
        }
    }

    #[test]
    fn authenticated_is_terminal() {
        let gate = AuthGate::Loading.resolve(Some(user())).resolve(None);
        assert!(matches!(gate, AuthGate::Authenticated(_)));
    }
}
