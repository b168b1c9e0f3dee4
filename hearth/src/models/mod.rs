mod emotion;
mod recipe;
mod study;

pub use emotion::*;
pub use recipe::*;
pub use study::*;
