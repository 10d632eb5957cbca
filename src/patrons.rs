use crate::core::domain::Identifiable;
use crate::core::library::Role;

pub mod domain;
pub mod dto;

pub trait Patron: Identifiable {
    fn name(&self) -> &str;
    fn role(&self) -> Role;
    fn is_admin(&self) -> bool;
    fn is_role(&self, match_role: Role) -> bool;
    fn max_books_allowed(&self) -> usize;
}
