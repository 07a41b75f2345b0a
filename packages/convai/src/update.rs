//! Overlay partial changes onto a stored agent configuration.
//!
//! Every field of the result is resolved before the record is rebuilt through
//! the same builders used for new agents, so an updated record satisfies the
//! same invariants as a fresh one.
//!
//! Text and numeric fields resolve differently:
//!
//! * text fields (`language`, `system_prompt`, `llm`, `first_message`,
//!   `asr_quality`, `voice_id`, `model_id`) take the new value only when it is
//!   non-empty, so `Some("")` keeps the stored value;
//! * numeric and boolean fields take the new value whenever it is `Some`,
//!   including zero.
//!
//! This mirrors how the agent tools have always behaved. It also means an
//! update cannot clear a stored `first_message` or `voice_id`.

use crate::conversation::{
    ConversationConfig, ConversationParams, build_conversation_config, non_empty,
};
use crate::platform::{PlatformSettings, build_platform_settings};

/// Changes to apply to a [`ConversationConfig`]; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationConfigUpdate {
    pub language: Option<String>,
    pub system_prompt: Option<String>,
    pub llm: Option<String>,
    pub first_message: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<i32>,
    pub asr_quality: Option<String>,
    pub voice_id: Option<String>,
    pub model_id: Option<String>,
    pub optimize_streaming_latency: Option<u8>,
    pub stability: Option<f64>,
    pub similarity_boost: Option<f64>,
    pub turn_timeout: Option<u32>,
    pub max_duration_seconds: Option<u32>,
}

impl ConversationConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn llm(mut self, llm: impl Into<String>) -> Self {
        self.llm = Some(llm.into());
        self
    }

    pub fn first_message(mut self, message: impl Into<String>) -> Self {
        self.first_message = Some(message.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn asr_quality(mut self, quality: impl Into<String>) -> Self {
        self.asr_quality = Some(quality.into());
        self
    }

    pub fn voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }

    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn optimize_streaming_latency(mut self, level: u8) -> Self {
        self.optimize_streaming_latency = Some(level);
        self
    }

    pub fn stability(mut self, stability: f64) -> Self {
        self.stability = Some(stability);
        self
    }

    pub fn similarity_boost(mut self, similarity_boost: f64) -> Self {
        self.similarity_boost = Some(similarity_boost);
        self
    }

    pub fn turn_timeout(mut self, seconds: u32) -> Self {
        self.turn_timeout = Some(seconds);
        self
    }

    pub fn max_duration_seconds(mut self, seconds: u32) -> Self {
        self.max_duration_seconds = Some(seconds);
        self
    }

    /// True when no field would change the stored configuration.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn resolve_text(new: Option<&str>, existing: &str) -> String {
    non_empty(new).unwrap_or_else(|| existing.to_string())
}

fn resolve_optional_text(new: Option<&str>, existing: Option<&str>) -> Option<String> {
    non_empty(new).or_else(|| existing.map(str::to_string))
}

/// Rebuild `existing` with the fields set in `update` applied on top.
pub fn update_conversation_config(
    existing: &ConversationConfig,
    update: &ConversationConfigUpdate,
) -> ConversationConfig {
    let current = ConversationParams::from(existing);

    let params = ConversationParams {
        language: resolve_text(update.language.as_deref(), &current.language),
        system_prompt: resolve_text(update.system_prompt.as_deref(), &current.system_prompt),
        llm: resolve_text(update.llm.as_deref(), &current.llm),
        first_message: resolve_optional_text(
            update.first_message.as_deref(),
            current.first_message.as_deref(),
        ),
        temperature: update.temperature.unwrap_or(current.temperature),
        max_tokens: update.max_tokens.or(current.max_tokens),
        asr_quality: resolve_text(update.asr_quality.as_deref(), &current.asr_quality),
        voice_id: resolve_optional_text(update.voice_id.as_deref(), current.voice_id.as_deref()),
        model_id: resolve_text(update.model_id.as_deref(), &current.model_id),
        optimize_streaming_latency: update
            .optimize_streaming_latency
            .unwrap_or(current.optimize_streaming_latency),
        stability: update.stability.unwrap_or(current.stability),
        similarity_boost: update.similarity_boost.unwrap_or(current.similarity_boost),
        turn_timeout: update.turn_timeout.unwrap_or(current.turn_timeout),
        max_duration_seconds: update
            .max_duration_seconds
            .unwrap_or(current.max_duration_seconds),
    };

    if update.is_empty() {
        tracing::debug!("Conversation config update carries no changes; rebuilding as-is");
    } else {
        tracing::debug!(?update, "Applying conversation config update");
    }

    build_conversation_config(&params)
}

/// Rebuild `existing` with a new recording policy. `None` keeps the stored value.
pub fn update_platform_settings(
    existing: &PlatformSettings,
    record_voice: Option<bool>,
    retention_days: Option<i32>,
) -> PlatformSettings {
    let record_voice = record_voice.unwrap_or(existing.privacy.record_voice);
    let retention_days = retention_days.unwrap_or(existing.privacy.retention_days);

    build_platform_settings(record_voice, retention_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> ConversationConfig {
        build_conversation_config(
            &ConversationParams::new("Original prompt")
                .with_first_message("Hello")
                .with_voice_id("voice-a")
                .with_max_tokens(100),
        )
    }

    #[test]
    fn test_empty_update_is_identity() {
        let config = existing();
        assert_eq!(
            update_conversation_config(&config, &ConversationConfigUpdate::new()),
            config
        );
    }

    #[test]
    fn test_language_only_update() {
        let config = existing();
        let updated =
            update_conversation_config(&config, &ConversationConfigUpdate::new().language("fr"));

        let mut expected = config.clone();
        expected.agent.language = "fr".to_string();
        assert_eq!(updated, expected);
    }

    #[test]
    fn test_empty_strings_fall_back_to_existing() {
        let config = existing();
        let update = ConversationConfigUpdate::new()
            .system_prompt("")
            .first_message("")
            .voice_id("")
            .model_id("");

        let updated = update_conversation_config(&config, &update);
        assert_eq!(updated.agent.prompt.prompt, "Original prompt");
        assert_eq!(updated.agent.first_message.as_deref(), Some("Hello"));
        assert_eq!(updated.tts.voice_id.as_deref(), Some("voice-a"));
        assert_eq!(updated.tts.model_id, config.tts.model_id);
    }

    #[test]
    fn test_explicit_zero_numbers_win() {
        let update = ConversationConfigUpdate::new()
            .temperature(0.0)
            .optimize_streaming_latency(0)
            .stability(0.0)
            .turn_timeout(0);

        let updated = update_conversation_config(&existing(), &update);
        assert_eq!(updated.agent.prompt.temperature, 0.0);
        assert_eq!(updated.tts.optimize_streaming_latency, 0);
        assert_eq!(updated.tts.stability, 0.0);
        assert_eq!(updated.turn.turn_timeout, 0);
    }

    #[test]
    fn test_zero_max_tokens_is_dropped_by_rebuild() {
        let updated =
            update_conversation_config(&existing(), &ConversationConfigUpdate::new().max_tokens(0));
        assert_eq!(updated.agent.prompt.max_tokens, None);
    }

    #[test]
    fn test_platform_update_keeps_unset_fields() {
        let existing = build_platform_settings(true, 730);

        let updated = update_platform_settings(&existing, None, Some(30));
        assert!(updated.privacy.record_voice);
        assert_eq!(updated.privacy.retention_days, 30);

        let updated = update_platform_settings(&existing, Some(false), None);
        assert!(!updated.privacy.record_voice);
        assert_eq!(updated.privacy.retention_days, 730);

        assert_eq!(update_platform_settings(&existing, None, None), existing);
    }
}
