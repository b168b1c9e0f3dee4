//! v1 API Data Transfer Objects.
//!
//! Request bodies live here. Responses reuse the pipeline types
//! (`ExtractedPayload`, `SentimentScore`, `MoodSeries`) directly where their
//! shape is already the wire format.

pub mod emotions;
pub mod recipes;
pub mod study;

pub use emotions::*;
pub use recipes::*;
pub use study::*;
