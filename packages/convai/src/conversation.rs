//! # Conversation configuration
//!
//! Typed mirror of the `conversation_config` object accepted by the
//! ElevenLabs "create agent" and "update agent" endpoints, and the builder
//! that assembles one from flat parameters.
//!
//! Optional fields (`first_message`, `max_tokens`, `voice_id`) are only
//! emitted when they carry a truthy value: an empty string or a zero
//! `max_tokens` is dropped, never serialized as `null` or `""`.
//!
//! ```rust
//! use fluent_voice_convai::conversation::{ConversationParams, build_conversation_config};
//!
//! let params = ConversationParams::new("You are a helpful receptionist.")
//!     .with_first_message("Hello, how can I help?")
//!     .with_max_tokens(256);
//!
//! let config = build_conversation_config(&params);
//! assert_eq!(config.conversation.client_events.len(), 5);
//! ```

use crate::config::ConvaiDefaults;
use crate::error::Result;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use strum::Display;

/// Audio format used for both the user's microphone input and agent speech.
pub const PCM_16000: &str = "pcm_16000";

/// Speech recognition backend the agent runs on.
pub const ASR_PROVIDER: &str = "elevenlabs";

/// Events the client receives over the conversation websocket.
pub const CLIENT_EVENTS: [ClientEvent; 5] = [
    ClientEvent::Audio,
    ClientEvent::Interruption,
    ClientEvent::UserTranscript,
    ClientEvent::AgentResponse,
    ClientEvent::AgentResponseCorrection,
];

/// Full agent conversation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationConfig {
    pub agent: AgentConfig,
    pub asr: AsrConfig,
    pub tts: TtsConfig,
    pub turn: TurnConfig,
    pub conversation: ConversationSettings,
    #[serde(default)]
    pub language_presets: Map<String, Value>,
    #[serde(default)]
    pub is_blocked_ivc: bool,
    #[serde(default)]
    pub is_blocked_non_ivc: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub language: String,
    pub prompt: PromptConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_message: Option<String>,
    #[serde(default)]
    pub dynamic_variables: DynamicVariables,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicVariables {
    #[serde(default)]
    pub dynamic_variable_placeholders: BTreeMap<String, Value>,
}

/// LLM prompt block nested under `agent.prompt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub prompt: String,
    pub llm: String,
    #[serde(default = "default_tools")]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub knowledge_base: Vec<Value>,
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,
}

/// A tool the agent may invoke
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Tool {
    /// Built-in tool that lets the agent hang up.
    pub fn end_call() -> Self {
        Self {
            kind: "system".to_string(),
            name: "end_call".to_string(),
            description: String::new(),
        }
    }
}

fn default_tools() -> Vec<Tool> {
    vec![Tool::end_call()]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsrConfig {
    pub quality: String,
    #[serde(default = "default_asr_provider")]
    pub provider: String,
    #[serde(default = "default_audio_format")]
    pub user_input_audio_format: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

fn default_asr_provider() -> String {
    ASR_PROVIDER.to_string()
}

fn default_audio_format() -> String {
    PCM_16000.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    pub model_id: String,
    #[serde(default = "default_audio_format")]
    pub agent_output_audio_format: String,
    #[serde(deserialize_with = "whole_number")]
    pub optimize_streaming_latency: u8,
    pub stability: f64,
    pub similarity_boost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnConfig {
    #[serde(deserialize_with = "whole_number")]
    pub turn_timeout: u32,
}

/// Event names are kept as strings so a stored agent subscribed to events
/// this crate does not know about still parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSettings {
    #[serde(deserialize_with = "whole_number")]
    pub max_duration_seconds: u32,
    #[serde(default = "default_client_events")]
    pub client_events: Vec<String>,
}

/// [`CLIENT_EVENTS`] as wire names
pub fn default_client_events() -> Vec<String> {
    CLIENT_EVENTS.iter().map(ClientEvent::to_string).collect()
}

/// Client event names recognized by the conversation websocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ClientEvent {
    Audio,
    Interruption,
    UserTranscript,
    AgentResponse,
    AgentResponseCorrection,
}

/// Accept integral values the service reports as floats (`7.0`).
fn whole_number<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {value}"
        )));
    }
    T::try_from(value as u64)
        .map_err(|_| D::Error::custom(format!("{value} is out of range")))
}

/// Flat parameter set consumed by [`build_conversation_config`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationParams {
    pub language: String,
    pub system_prompt: String,
    pub llm: String,
    pub first_message: Option<String>,
    pub temperature: f64,
    pub max_tokens: Option<i32>,
    pub asr_quality: String,
    pub voice_id: Option<String>,
    pub model_id: String,
    pub optimize_streaming_latency: u8,
    pub stability: f64,
    pub similarity_boost: f64,
    pub turn_timeout: u32,
    pub max_duration_seconds: u32,
}

impl ConversationParams {
    /// Parameters for `system_prompt` with every other field taken from
    /// [`ConvaiDefaults::default`].
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self::with_defaults(system_prompt, &ConvaiDefaults::default())
    }

    pub fn with_defaults(system_prompt: impl Into<String>, defaults: &ConvaiDefaults) -> Self {
        Self {
            language: defaults.language.clone(),
            system_prompt: system_prompt.into(),
            llm: defaults.llm.clone(),
            first_message: defaults.first_message.clone(),
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            asr_quality: defaults.asr_quality.clone(),
            voice_id: defaults.voice_id.clone(),
            model_id: defaults.model_id.clone(),
            optimize_streaming_latency: defaults.optimize_streaming_latency,
            stability: defaults.stability,
            similarity_boost: defaults.similarity_boost,
            turn_timeout: defaults.turn_timeout,
            max_duration_seconds: defaults.max_duration_seconds,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_llm(mut self, llm: impl Into<String>) -> Self {
        self.llm = llm.into();
        self
    }

    pub fn with_first_message(mut self, first_message: impl Into<String>) -> Self {
        self.first_message = Some(first_message.into());
        self
    }

    pub fn without_first_message(mut self) -> Self {
        self.first_message = None;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_asr_quality(mut self, quality: impl Into<String>) -> Self {
        self.asr_quality = quality.into();
        self
    }

    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }

    pub fn without_voice(mut self) -> Self {
        self.voice_id = None;
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_streaming_latency(mut self, level: u8) -> Self {
        self.optimize_streaming_latency = level;
        self
    }

    pub fn with_voice_settings(mut self, stability: f64, similarity_boost: f64) -> Self {
        self.stability = stability;
        self.similarity_boost = similarity_boost;
        self
    }

    pub fn with_turn_timeout(mut self, seconds: u32) -> Self {
        self.turn_timeout = seconds;
        self
    }

    pub fn with_max_duration(mut self, seconds: u32) -> Self {
        self.max_duration_seconds = seconds;
        self
    }
}

impl From<&ConversationConfig> for ConversationParams {
    /// Flatten a stored configuration back into builder parameters.
    fn from(config: &ConversationConfig) -> Self {
        Self {
            language: config.agent.language.clone(),
            system_prompt: config.agent.prompt.prompt.clone(),
            llm: config.agent.prompt.llm.clone(),
            first_message: config.agent.first_message.clone(),
            temperature: config.agent.prompt.temperature,
            max_tokens: config.agent.prompt.max_tokens,
            asr_quality: config.asr.quality.clone(),
            voice_id: config.tts.voice_id.clone(),
            model_id: config.tts.model_id.clone(),
            optimize_streaming_latency: config.tts.optimize_streaming_latency,
            stability: config.tts.stability,
            similarity_boost: config.tts.similarity_boost,
            turn_timeout: config.turn.turn_timeout,
            max_duration_seconds: config.conversation.max_duration_seconds,
        }
    }
}

/// Drop empty strings so they are treated like an absent value.
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Assemble a [`ConversationConfig`] from flat parameters.
///
/// Values are passed through as given; the only policy applied is the
/// falsy exclusion of `first_message`, `voice_id` and `max_tokens`.
pub fn build_conversation_config(params: &ConversationParams) -> ConversationConfig {
    let first_message = non_empty(params.first_message.as_deref());
    let voice_id = non_empty(params.voice_id.as_deref());
    let max_tokens = params.max_tokens.filter(|&n| n != 0);

    tracing::debug!(
        language = %params.language,
        llm = %params.llm,
        model_id = %params.model_id,
        has_first_message = first_message.is_some(),
        has_voice = voice_id.is_some(),
        "Building conversation config"
    );

    ConversationConfig {
        agent: AgentConfig {
            language: params.language.clone(),
            prompt: PromptConfig {
                prompt: params.system_prompt.clone(),
                llm: params.llm.clone(),
                tools: default_tools(),
                knowledge_base: Vec::new(),
                temperature: params.temperature,
                max_tokens,
            },
            first_message,
            dynamic_variables: DynamicVariables::default(),
        },
        asr: AsrConfig {
            quality: params.asr_quality.clone(),
            provider: default_asr_provider(),
            user_input_audio_format: default_audio_format(),
            keywords: Vec::new(),
        },
        tts: TtsConfig {
            voice_id,
            model_id: params.model_id.clone(),
            agent_output_audio_format: default_audio_format(),
            optimize_streaming_latency: params.optimize_streaming_latency,
            stability: params.stability,
            similarity_boost: params.similarity_boost,
        },
        turn: TurnConfig {
            turn_timeout: params.turn_timeout,
        },
        conversation: ConversationSettings {
            max_duration_seconds: params.max_duration_seconds,
            client_events: default_client_events(),
        },
        language_presets: Map::new(),
        is_blocked_ivc: false,
        is_blocked_non_ivc: false,
    }
}

impl ConversationConfig {
    /// Parse a `conversation_config` object as returned by the "get agent" endpoint.
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The agent's current system prompt
    pub fn system_prompt(&self) -> &str {
        &self.agent.prompt.prompt
    }
}
