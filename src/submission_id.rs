use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    pub fn new() -> Self {
        Self(format!("sub_{}", Uuid::new_v4()))
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}
