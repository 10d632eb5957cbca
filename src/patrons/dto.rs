use std::fmt;
use std::fmt::{Display, Formatter};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::Role;
use crate::patrons::Patron;

// PatronDto is a data transfer object for roster queries; the borrowed
// list carries catalog keys only.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub name: String,
    pub role: Role,
    pub borrowed: Vec<String>,
}

impl PatronDto {
    // registration convenience for shells that do not assign their own ids
    pub fn new(name: &str, role: Role) -> Self {
        Self {
            patron_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            role,
            borrowed: vec![],
        }
    }

    pub fn with_id(patron_id: &str, name: &str, role: Role) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            role,
            borrowed: vec![],
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(data: String) -> Option<PatronDto> {
        if let Ok(patron) = serde_json::from_str(data.as_str()) {
            Some(patron)
        } else {
            None
        }
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Patron for PatronDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn role(&self) -> Role {
        self.role
    }

    fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    fn is_role(&self, match_role: Role) -> bool {
        self.role == match_role
    }

    fn max_books_allowed(&self) -> usize {
        self.role.max_books_allowed()
    }
}

impl Display for PatronDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.role, self.patron_id, self.name)
    }
}
