pub mod emotions;
pub(crate) mod health;
pub mod recipes;
pub mod study;

pub use health::health_check;
