pub mod books;
pub mod catalog;
pub mod core;
pub mod patrons;
pub mod persistence;
pub mod recommend;
pub mod seed;
pub mod utils;
