//! Role-based selection of the top-level navigation stack.
//!
//! Routing is a pure function of [`SessionState`]; nothing about previous
//! decisions is remembered. A role change is handled by evaluating again.

use diario_models::Role;
use std::fmt;
use tokio::sync::watch;

use crate::session::SessionState;

/// Top-level screen group mounted for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stack {
    Unauthenticated,
    Administrator,
    Technician,
    Requester,
    Teacher,
    Staff,
    Student,
    School,
}

impl Stack {
    pub fn name(&self) -> &'static str {
        match self {
            Stack::Unauthenticated => "auth",
            Stack::Administrator => "administrator",
            Stack::Technician => "technician",
            Stack::Requester => "requester",
            Stack::Teacher => "teacher",
            Stack::Staff => "staff",
            Stack::Student => "student",
            Stack::School => "school",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a routing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Session still resolving; show a neutral waiting indicator.
    Loading,
    Stack(Stack),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoleRouter;

impl RoleRouter {
    pub fn select(state: &SessionState) -> Route {
        if state.loading {
            return Route::Loading;
        }

        match &state.user {
            None => Route::Stack(Stack::Unauthenticated),
            Some(user) => Route::Stack(Self::stack_for(user.role)),
        }
    }

    pub fn stack_for(role: Role) -> Stack {
        match role {
            Role::Administrator => Stack::Administrator,
            Role::Technician => Stack::Technician,
            Role::Requester => Stack::Requester,
            Role::Teacher => Stack::Teacher,
            Role::Staff => Stack::Staff,
            Role::Student => Stack::Student,
            Role::School => Stack::School,
        }
    }

    /// Waits for the next session change and routes it.
    ///
    /// Returns `None` once the session store has been dropped.
    pub async fn next_route(rx: &mut watch::Receiver<SessionState>) -> Option<Route> {
        rx.changed().await.ok()?;
        Some(Self::select(&rx.borrow_and_update()))
    }
}
