//! Logged-in user profile and role resolution.
//!
//! The backend describes a user's category with independent boolean flags.
//! They are collapsed into a single [`Role`] when the profile is parsed, so
//! the priority between overlapping flags is decided exactly once.

use serde::Deserialize;
use std::fmt;

/// Role flags as sent by the profile endpoint (`is_administrator`,
/// `is_tecnico`, `is_solicitante`, `is_professor`, `is_funcionario`, `is_aluno`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleFlags {
    pub administrator: bool,
    pub technician: bool,
    pub requester: bool,
    pub teacher: bool,
    pub staff: bool,
    pub student: bool,
}

impl RoleFlags {
    fn is_set(&self, role: Role) -> bool {
        match role {
            Role::Administrator => self.administrator,
            Role::Technician => self.technician,
            Role::Requester => self.requester,
            Role::Teacher => self.teacher,
            Role::Staff => self.staff,
            Role::Student => self.student,
            Role::School => false,
        }
    }
}

/// Operational category of a user.
///
/// `School` is the generic school account used when no flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Administrator,
    Technician,
    Requester,
    Teacher,
    Staff,
    Student,
    School,
}

impl Role {
    /// Flagged roles, highest priority first.
    pub const PRIORITY: [Role; 6] = [
        Role::Administrator,
        Role::Technician,
        Role::Requester,
        Role::Teacher,
        Role::Staff,
        Role::Student,
    ];

    /// Resolve the effective role: first set flag in [`Role::PRIORITY`], else `School`.
    pub fn from_flags(flags: &RoleFlags) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|role| flags.is_set(*role))
            .unwrap_or(Role::School)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Technician => "technician",
            Role::Requester => "requester",
            Role::Teacher => "teacher",
            Role::Staff => "staff",
            Role::Student => "student",
            Role::School => "school",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Profile ids arrive as numbers from most deployments and as strings from some.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_id(self) -> Option<i64> {
        match self {
            RawId::Number(id) => Some(id),
            RawId::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct RawUserProfile {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    nome: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    is_administrator: Option<bool>,
    #[serde(default)]
    is_tecnico: Option<bool>,
    #[serde(default)]
    is_solicitante: Option<bool>,
    #[serde(default)]
    is_professor: Option<bool>,
    #[serde(default)]
    is_funcionario: Option<bool>,
    #[serde(default)]
    is_aluno: Option<bool>,
}

/// Profile of the logged-in user, read-only outside the session store.
///
/// `id` is informational only: it is `None` when the backend omits it or
/// sends something that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawUserProfile")]
pub struct UserProfile {
    pub id: Option<i64>,
    pub display_name: String,
    pub email: String,
    pub flags: RoleFlags,
    pub role: Role,
}

impl From<RawUserProfile> for UserProfile {
    fn from(raw: RawUserProfile) -> Self {
        let flags = RoleFlags {
            administrator: raw.is_administrator.unwrap_or(false),
            technician: raw.is_tecnico.unwrap_or(false),
            requester: raw.is_solicitante.unwrap_or(false),
            teacher: raw.is_professor.unwrap_or(false),
            staff: raw.is_funcionario.unwrap_or(false),
            student: raw.is_aluno.unwrap_or(false),
        };
        let email = raw.email.unwrap_or_default();
        let display_name = [raw.nome, raw.username, raw.name]
            .into_iter()
            .flatten()
            .find(|n| !n.trim().is_empty())
            .unwrap_or_else(|| email.clone());

        Self {
            id: raw.id.and_then(RawId::into_id),
            display_name,
            email,
            role: Role::from_flags(&flags),
            flags,
        }
    }
}

impl UserProfile {
    pub fn new(
        id: i64,
        display_name: impl Into<String>,
        email: impl Into<String>,
        flags: RoleFlags,
    ) -> Self {
        Self {
            id: Some(id),
            display_name: display_name.into(),
            email: email.into(),
            role: Role::from_flags(&flags),
            flags,
        }
    }
}
