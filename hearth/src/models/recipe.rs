use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub user_input: String,
    pub suggestion: String,
    pub created_at: DateTime<Utc>,
}
