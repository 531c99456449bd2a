//! Admin session gate. Authorization itself is delegated to the external
//! identity provider; this module only tracks whether the admin surface is
//! reachable and whether the viewer currently holds a valid session.

use crate::domain::model::Session;
use crate::domain::ports::SnapshotStorage;

pub const ADMIN_ROUTE: &str = "/admin";
pub const SESSION_SNAPSHOT: &str = "session.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Not on the admin route; the public site is shown.
    Public,
    /// On the admin route without a valid session.
    LoginRequired,
    Authenticated,
}

#[derive(Debug, Clone)]
pub struct AdminGate {
    state: GateState,
}

impl AdminGate {
    /// Evaluate the gate at load time from the requested route and any
    /// previously persisted session.
    pub fn at_load(route: &str, session: Option<&Session>) -> Self {
        let state = if route != ADMIN_ROUTE {
            GateState::Public
        } else if session.is_some_and(Session::is_valid) {
            GateState::Authenticated
        } else {
            GateState::LoginRequired
        };
        Self { state }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == GateState::Authenticated
    }

    /// A successful provider sign-in authenticates the viewer.
    pub fn signed_in(&mut self) {
        if self.state == GateState::LoginRequired {
            self.state = GateState::Authenticated;
        }
    }

    /// Explicit sign-out drops back to the login prompt on the admin route,
    /// or to the public site elsewhere.
    pub fn signed_out(&mut self, route: &str) {
        self.state = if route == ADMIN_ROUTE {
            GateState::LoginRequired
        } else {
            GateState::Public
        };
    }
}

/// Read the persisted admin session, discarding expired or unparseable
/// entries.
pub async fn load_session<S: SnapshotStorage>(storage: &S) -> Option<Session> {
    let bytes = storage.read_file(SESSION_SNAPSHOT).await.ok()?;
    let session: Session = serde_json::from_slice(&bytes).ok()?;
    session.is_valid().then_some(session)
}

pub async fn save_session<S: SnapshotStorage>(storage: &S, session: &Session) {
    match serde_json::to_vec_pretty(session) {
        Ok(bytes) => {
            if let Err(err) = storage.write_file(SESSION_SNAPSHOT, &bytes).await {
                tracing::warn!("Failed to persist session: {}", err);
            }
        }
        Err(err) => tracing::warn!("Failed to encode session: {}", err),
    }
}

pub async fn clear_session<S: SnapshotStorage>(storage: &S) {
    // Overwrite rather than delete; SnapshotStorage has no remove.
    if let Err(err) = storage.write_file(SESSION_SNAPSHOT, b"null").await {
        tracing::warn!("Failed to clear session: {}", err);
    }
}
