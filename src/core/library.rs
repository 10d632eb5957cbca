use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("file io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<std::num::ParseIntError> for LibraryError {
    fn from(err: std::num::ParseIntError) -> Self {
        LibraryError::serialization(
            format!("integer parsing {:?}", err).as_str())
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::serialization(
            format!("parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for the library core.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Role defines the closed set of patron categories; the borrowing
// limit is a pure function of the role so the policy stays in one place.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    // maximum number of concurrently held books for the role
    pub fn max_books_allowed(&self) -> usize {
        match self {
            Role::Student => 3,
            Role::Teacher => 5,
            Role::Admin => 10,
        }
    }

    // parses the persisted role tag; unknown tags are not defaulted so
    // that callers can skip the record instead
    pub fn from_tag(tag: &str) -> Option<Role> {
        match tag {
            "Student" => Some(Role::Student),
            "Teacher" => Some(Role::Teacher),
            "Admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Role::Student => write!(f, "Student"),
            Role::Teacher => write!(f, "Teacher"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, Role};

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_convert_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(matches!(LibraryError::from(err), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_convert_parse_int_error() {
        let err = "abc".parse::<u64>().unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_format_role() {
        let roles = vec![Role::Student, Role::Teacher, Role::Admin];
        for role in roles {
            let tag = role.to_string();
            let parsed = Role::from_tag(tag.as_str()).expect("should parse role tag");
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_should_reject_unknown_role_tag() {
        assert_eq!(None, Role::from_tag("Librarian"));
        assert_eq!(None, Role::from_tag(""));
    }

    #[test]
    fn test_should_map_role_limits() {
        assert_eq!(3, Role::Student.max_books_allowed());
        assert_eq!(5, Role::Teacher.max_books_allowed());
        assert_eq!(10, Role::Admin.max_books_allowed());
    }
}
