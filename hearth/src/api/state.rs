use std::sync::Arc;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::inference::InferenceGateway;
use crate::llm::LlmProvider;
use crate::services::{EmotionService, RecipeService, StudyService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub gateway: InferenceGateway,
    pub llm: LlmProvider,
    pub study: StudyService,
    pub emotion: EmotionService,
    pub recipe: RecipeService,
}

impl AppState {
    pub fn new(
        config: Config,
        db: Arc<dyn DatabaseBackend>,
        gateway: InferenceGateway,
        llm: LlmProvider,
    ) -> Self {
        let config = Arc::new(config);
        let study = StudyService::new(
            db.clone(),
            gateway.clone(),
            config.inference.question_model.clone(),
        );
        let emotion = EmotionService::new(
            db.clone(),
            gateway.clone(),
            config.inference.sentiment_model.clone(),
        );
        let recipe = RecipeService::new(db.clone(), llm.clone());

        Self {
            config,
            db,
            gateway,
            llm,
            study,
            emotion,
            recipe,
        }
    }
}
