//! # User accounts and roles
//!
//! [`UserAccount`] is one row of `GET /ver_usuarios`. The backend returns the
//! whole stored record, password hash included; only `usuario` and `tipo` are
//! deserialised so the hash never reaches component state.
//!
//! [`Role`] enumerates the three roles the registration form offers. Role
//! strings coming back from the backend stay plain `String`s on the wire
//! types, because older accounts may carry values outside this set.

use serde::{Deserialize, Serialize};

/// One of the three account roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Administrador,
    Editor,
    Codificador,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Administrador, Role::Editor, Role::Codificador];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Administrador => "administrador",
            Role::Editor => "editor",
            Role::Codificador => "codificador",
        }
    }

    /// Human-readable label for selects and tables.
    pub fn label(self) -> &'static str {
        match self {
            Role::Administrador => "Administrador",
            Role::Editor => "Editor",
            Role::Codificador => "Codificador",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|r| r.as_str() == value)
    }

    /// Whether the backend lets this role delete or edit records.
    pub fn can_modify(self) -> bool {
        matches!(self, Role::Administrador | Role::Editor)
    }
}

/// User account as listed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub usuario: String,
    #[serde(default)]
    pub tipo: String,
}

impl UserAccount {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.tipo)
    }

    /// Role label, or the raw value for roles outside the known set.
    pub fn role_label(&self) -> &str {
        self.role().map(Role::label).unwrap_or(&self.tipo)
    }
}
