use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn genre(&self) -> &str;
    fn is_available(&self) -> bool;
}
