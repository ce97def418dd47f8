use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One evaluated request/example together with its collected raw responses.
///
/// `responses` is populated by the model-invocation stage before any
/// ensemble runs; `filtered_responses` is filled in incrementally, one key
/// per ensemble applied to the item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationItem {
    pub id: String, // Unique identifier within the owning task
    pub responses: Vec<String>,
    #[serde(default)]
    pub filtered_responses: HashMap<String, Vec<String>>,
}

impl EvaluationItem {
    pub fn new(id: impl Into<String>, responses: Vec<String>) -> Self {
        EvaluationItem {
            id: id.into(),
            responses,
            filtered_responses: HashMap::new(),
        }
    }
}
