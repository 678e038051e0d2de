// Session state machine
// Tracks the currently authenticated user and the view they may see

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::user::{Role, User};

/// The two views the portal can route to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Admin,
}

impl View {
    /// The view a user lands on right after signing in
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Admin => View::Admin,
            Role::User => View::Dashboard,
        }
    }

    /// Whether an account with `role` may reach this view
    ///
    /// Administrators may reach both views; regular users only the
    /// dashboard. This is the portal's single authorization rule.
    pub fn permits(self, role: Role) -> bool {
        match self {
            View::Dashboard => true,
            View::Admin => role == Role::Admin,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Dashboard => write!(f, "dashboard"),
            View::Admin => write!(f, "admin"),
        }
    }
}

/// Errors raised by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not signed in")]
    NotAuthenticated,

    #[error("the {0} view requires administrator access")]
    ViewNotPermitted(View),
}

/// Transient authentication state
///
/// Starts anonymous, becomes authenticated on login, and returns to
/// anonymous on logout. There is no timeout and no token; the session is
/// never persisted, so a process restart always comes back anonymous even
/// though the store's data survives.
///
/// The session holds a snapshot copy of the user record taken at login
/// time, not a live reference; later changes to the stored account do not
/// propagate to an active session.
///
/// # Example
/// ```
/// use induction_api::session::{Session, View};
/// use induction_api::store::seed;
///
/// let mut session = Session::new();
/// assert!(!session.is_authenticated());
///
/// let admin = seed::initial_users().remove(0);
/// let view = session.login(admin);
/// assert_eq!(view, View::Admin);
///
/// session.logout();
/// assert!(!session.is_authenticated());
/// ```
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

#[derive(Debug, Default)]
enum SessionState {
    #[default]
    Anonymous,
    Authenticated {
        user: User,
        view: View,
    },
}

impl Session {
    /// Creates a new anonymous session
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs `user` in and routes to their default view
    ///
    /// Signing in while already authenticated replaces the previous
    /// identity.
    pub fn login(&mut self, user: User) -> View {
        let view = View::default_for(user.role);
        self.state = SessionState::Authenticated { user, view };
        view
    }

    /// Returns the session to the anonymous state
    pub fn logout(&mut self) {
        self.state = SessionState::Anonymous;
    }

    /// Switches the current view, enforcing the authorization rule
    pub fn navigate(&mut self, target: View) -> Result<View, SessionError> {
        match &mut self.state {
            SessionState::Anonymous => Err(SessionError::NotAuthenticated),
            SessionState::Authenticated { user, view } => {
                if !target.permits(user.role) {
                    return Err(SessionError::ViewNotPermitted(target));
                }
                *view = target;
                Ok(target)
            }
        }
    }

    /// The signed-in user's snapshot, if any
    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Anonymous => None,
            SessionState::Authenticated { user, .. } => Some(user),
        }
    }

    /// The currently routed view, if signed in
    pub fn current_view(&self) -> Option<View> {
        match &self.state {
            SessionState::Anonymous => None,
            SessionState::Authenticated { view, .. } => Some(*view),
        }
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }
}
