//! Per-conversation overrides sent as `conversation_initiation_client_data`.
//!
//! An override adjusts one live conversation (system prompt, first message)
//! without touching the agent's stored configuration. The agent must allow
//! the overridden fields in its platform settings for the service to honour them.

use crate::conversation::ConversationConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const PROMPT_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationInitiationClientData {
    pub conversation_config_override: ConversationConfigOverride,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationConfigOverride {
    pub agent: AgentConfigOverride,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfigOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<PromptOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptOverride {
    pub prompt: String,
}

impl From<AgentConfigOverride> for ConversationInitiationClientData {
    fn from(agent: AgentConfigOverride) -> Self {
        Self {
            conversation_config_override: ConversationConfigOverride { agent },
        }
    }
}

impl ConversationInitiationClientData {
    pub fn prompt(&self) -> Option<&str> {
        self.conversation_config_override
            .agent
            .prompt
            .as_ref()
            .map(|p| p.prompt.as_str())
    }

    pub fn first_message(&self) -> Option<&str> {
        self.conversation_config_override.agent.first_message.as_deref()
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn combine_prompt(current_prompt: &str, append: &str) -> String {
    format!("{current_prompt}{PROMPT_SEPARATOR}{append}")
}

/// Build an override that appends to the system prompt and/or replaces the
/// first message.
///
/// The prompt is only overridden when both `current_prompt` and
/// `append_to_prompt` are non-empty. `first_message` is applied whenever it is
/// `Some`, so `Some("")` makes the agent open silently. Returns `None` when
/// neither applies.
pub fn build_conversation_override(
    current_prompt: Option<&str>,
    append_to_prompt: Option<&str>,
    first_message: Option<&str>,
) -> Option<ConversationInitiationClientData> {
    let mut agent = AgentConfigOverride::default();

    if let (Some(current), Some(append)) = (current_prompt, append_to_prompt) {
        if !current.is_empty() && !append.is_empty() {
            agent.prompt = Some(PromptOverride {
                prompt: combine_prompt(current, append),
            });
        }
    }

    if let Some(message) = first_message {
        agent.first_message = Some(message.to_string());
    }

    if agent == AgentConfigOverride::default() {
        tracing::debug!("No override fields supplied");
        return None;
    }

    tracing::debug!(
        prompt_override = agent.prompt.is_some(),
        first_message_override = agent.first_message.is_some(),
        "Built conversation override"
    );
    Some(agent.into())
}

/// Same as [`build_conversation_override`] with the current prompt taken from
/// the agent's stored configuration.
pub fn build_conversation_override_for(
    config: &ConversationConfig,
    append_to_prompt: Option<&str>,
    first_message: Option<&str>,
) -> Option<ConversationInitiationClientData> {
    build_conversation_override(Some(config.system_prompt()), append_to_prompt, first_message)
}

/// Unconditionally append `append_text` to `current_prompt`.
pub fn build_system_prompt_override(
    current_prompt: &str,
    append_text: &str,
) -> ConversationInitiationClientData {
    AgentConfigOverride {
        prompt: Some(PromptOverride {
            prompt: combine_prompt(current_prompt, append_text),
        }),
        first_message: None,
    }
    .into()
}
