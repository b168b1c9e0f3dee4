pub mod extractor;
pub mod mood;
pub mod normalizer;
pub mod sentiment;
pub mod types;

pub use extractor::extract;
pub use mood::aggregate;
pub use normalizer::normalize;
pub use sentiment::score;
pub use types::{
    ExtractedPayload, InferenceRequest, MoodSeries, NormalizedResult, QuizItem, RankedLabel,
    Ranking, SentimentScore, TaskKind,
};
