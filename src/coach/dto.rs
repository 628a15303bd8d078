use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::plans::model::Plan;
use crate::recipes::catalog::Recipe;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// One chat bubble. Coach replies may carry a proposed plan and new recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<Recipe>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<Vec<String>>,
}

impl ChatMessage {
    pub fn text(id: impl Into<String>, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender,
            text: text.into(),
            plan: None,
            recipes: None,
            cta: None,
        }
    }

    pub fn greeting() -> Self {
        Self::text(
            "init",
            Sender::Ai,
            "Hello! I'm your Potato Diet Coach. What can I help you plan today?",
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub prompt: String,
}

impl SendMessageRequest {
    pub fn validate(&self) -> Result<&str, ValidationError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }
        Ok(prompt)
    }
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub reply: ChatMessage,
    /// Plan adopted by the session after augmentation, if the reply proposed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adopted_plan: Option<Plan>,
    pub recipes_added: usize,
}
