use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::Role;
use crate::patrons::Patron;

// PatronEntity abstracts a library member. The role is fixed at
// creation; the borrowed list holds catalog keys in acquisition order,
// never book values, so the Library store stays the single owner of
// every book.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct PatronEntity {
    pub patron_id: String,
    pub name: String,
    pub role: Role,
    pub borrowed: Vec<String>,
}

impl PatronEntity {
    pub fn new(patron_id: &str, name: &str, role: Role) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            role,
            borrowed: vec![],
        }
    }

    pub fn holds(&self, isbn: &str) -> bool {
        self.borrowed.iter().any(|held| held == isbn)
    }

    pub fn at_limit(&self) -> bool {
        self.borrowed.len() >= self.role.max_books_allowed()
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Patron for PatronEntity {
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

#[cfg(test)]
mod tests {
    use crate::core::library::Role;
    use crate::patrons::domain::model::PatronEntity;
    use crate::patrons::Patron;

    #[test]
    fn test_should_build_patron() {
        let patron = PatronEntity::new("S001", "Alice", Role::Student);
        assert_eq!("S001", patron.patron_id.as_str());
        assert_eq!("Alice", patron.name.as_str());
        assert_eq!(Role::Student, patron.role);
        assert!(patron.borrowed.is_empty());
        assert!(!patron.at_limit());
    }

    #[test]
    fn test_should_track_held_isbns() {
        let mut patron = PatronEntity::new("S001", "Alice", Role::Student);
        patron.borrowed.push("44444".to_string());
        assert!(patron.holds("44444"));
        assert!(!patron.holds("55555"));
    }

    #[test]
    fn test_should_hit_limit_at_role_maximum() {
        let mut patron = PatronEntity::new("S001", "Alice", Role::Student);
        for isbn in ["1", "2", "3"] {
            patron.borrowed.push(isbn.to_string());
        }
        assert!(patron.at_limit());
        assert!(patron.is_role(Role::Student));
        assert!(!patron.is_admin());
    }
}
