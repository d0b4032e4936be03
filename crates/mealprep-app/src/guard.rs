//! Session guard - access control run before any page is shown
//!
//! The guard is a pure function of the target path and the session. It is
//! called from `update` before the navigation state changes, so a protected
//! page is never rendered for a signed-out session.

use mealprep_core::{find, paths, Session};

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Show the requested page
    Allow,
    /// Go to this path instead
    Redirect(&'static str),
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Decide whether `path` may be shown for `session`.
///
/// Unregistered paths are treated as protected: a signed-out user is sent to
/// the login page, a signed-in user sees the not-found page.
pub fn authorize(path: &str, session: &Session) -> Access {
    let route = find(path);
    let requires_auth = route.map(|r| r.requires_auth).unwrap_or(true);

    if requires_auth && !session.is_authenticated() {
        return Access::Redirect(paths::LOGIN);
    }

    if route.is_some_and(|r| r.guest_only) && session.is_authenticated() {
        return Access::Redirect(paths::DASHBOARD);
    }

    Access::Allow
}

/// Clear the session and send the user to the login page.
///
/// Always redirects, whatever the current path or session state.
pub fn logout(session: &mut Session) -> Access {
    session.clear();
    Access::Redirect(paths::LOGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealprep_core::{list_routes, CurrentUser, SessionToken};

    fn signed_in() -> Session {
        Session::authenticated(
            SessionToken::new("tok"),
            Some(CurrentUser::new("cook@example.com")),
        )
    }

    #[test]
    fn test_signed_out_redirected_from_every_protected_route() {
        let session = Session::anonymous();
        for route in list_routes().iter().filter(|r| r.requires_auth) {
            assert_eq!(
                authorize(route.path, &session),
                Access::Redirect("/login"),
                "{} should redirect",
                route.path
            );
        }
    }

    #[test]
    fn test_signed_in_allowed_on_protected_routes() {
        let session = signed_in();
        for route in list_routes().iter().filter(|r| r.requires_auth) {
            assert!(authorize(route.path, &session).is_allowed());
        }
    }

    #[test]
    fn test_login_is_public_but_guest_only() {
        assert!(authorize("/login", &Session::anonymous()).is_allowed());
        assert_eq!(authorize("/login", &signed_in()), Access::Redirect("/"));
    }

    #[test]
    fn test_unregistered_path_treated_as_protected() {
        assert_eq!(
            authorize("/pantry", &Session::anonymous()),
            Access::Redirect("/login")
        );
        assert!(authorize("/pantry", &signed_in()).is_allowed());
    }

    #[test]
    fn test_logout_clears_and_redirects() {
        let mut session = signed_in();
        assert_eq!(logout(&mut session), Access::Redirect("/login"));
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut session = Session::anonymous();
        assert_eq!(logout(&mut session), Access::Redirect("/login"));
        assert_eq!(logout(&mut session), Access::Redirect("/login"));
        assert!(!session.is_authenticated());
    }
}
