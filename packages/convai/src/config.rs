//! Default agent parameters.
//!
//! Values mirror what the ElevenLabs dashboard uses for a new agent. Deployments
//! can override a few of them through the environment, see [`ConvaiDefaults::from_env`].

use crate::error::{Error, Result};
use crate::voice::PremadeVoice;
use std::str::FromStr;

pub const ENV_VOICE_ID: &str = "ELEVENLABS_DEFAULT_VOICE_ID";
pub const ENV_VOICE: &str = "ELEVENLABS_DEFAULT_VOICE";
pub const ENV_MODEL_ID: &str = "ELEVENLABS_DEFAULT_MODEL_ID";
pub const ENV_LLM: &str = "ELEVENLABS_DEFAULT_LLM";
pub const ENV_LANGUAGE: &str = "ELEVENLABS_DEFAULT_LANGUAGE";
pub const ENV_MAX_DURATION: &str = "ELEVENLABS_MAX_DURATION_SECONDS";
pub const ENV_RETENTION_DAYS: &str = "ELEVENLABS_RETENTION_DAYS";

/// Parameters used for any field a caller leaves unspecified when creating an agent
#[derive(Debug, Clone, PartialEq)]
pub struct ConvaiDefaults {
    pub language: String,
    pub llm: String,
    pub first_message: Option<String>,
    pub temperature: f64,
    pub max_tokens: Option<i32>,
    pub asr_quality: String,
    pub voice_id: Option<String>,
    pub model_id: String,
    /// 0 (off) to 4 (max latency savings, may mispronounce numbers)
    pub optimize_streaming_latency: u8,
    pub stability: f64,
    pub similarity_boost: f64,
    /// Seconds of silence before the agent takes its turn
    pub turn_timeout: u32,
    pub max_duration_seconds: u32,
    pub record_voice: bool,
    /// -1 keeps conversations indefinitely
    pub retention_days: i32,
}

impl Default for ConvaiDefaults {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            llm: "gemini-2.0-flash-001".to_string(),
            first_message: Some("Hi, how can I help you today?".to_string()),
            temperature: 0.5,
            max_tokens: None,
            asr_quality: "high".to_string(),
            voice_id: Some(PremadeVoice::DEFAULT.into()),
            model_id: "eleven_turbo_v2".to_string(),
            optimize_streaming_latency: 3,
            stability: 0.5,
            similarity_boost: 0.8,
            turn_timeout: 7,
            max_duration_seconds: 300,
            record_voice: true,
            retention_days: 730,
        }
    }
}

impl ConvaiDefaults {
    /// Defaults with overrides read from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults with overrides resolved through `lookup`.
    ///
    /// Blank values are ignored. `ELEVENLABS_DEFAULT_VOICE_ID` takes precedence
    /// over the premade voice name in `ELEVENLABS_DEFAULT_VOICE`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut defaults = Self::default();

        if let Some(voice_id) = get(ENV_VOICE_ID) {
            defaults.voice_id = Some(voice_id);
        } else if let Some(name) = get(ENV_VOICE) {
            defaults.voice_id = Some(PremadeVoice::from_name(&name)?.into());
        }
        if let Some(model_id) = get(ENV_MODEL_ID) {
            defaults.model_id = model_id;
        }
        if let Some(llm) = get(ENV_LLM) {
            defaults.llm = llm;
        }
        if let Some(language) = get(ENV_LANGUAGE) {
            defaults.language = language;
        }
        if let Some(raw) = get(ENV_MAX_DURATION) {
            defaults.max_duration_seconds = parse_env(ENV_MAX_DURATION, raw)?;
        }
        if let Some(raw) = get(ENV_RETENTION_DAYS) {
            let days: i32 = parse_env(ENV_RETENTION_DAYS, raw.clone())?;
            if days < -1 {
                return Err(Error::InvalidEnvVar {
                    name: ENV_RETENTION_DAYS,
                    value: raw,
                    reason: "must be -1 or a non-negative number of days".to_string(),
                });
            }
            defaults.retention_days = days;
        }

        tracing::debug!(
            language = %defaults.language,
            llm = %defaults.llm,
            model_id = %defaults.model_id,
            "Resolved convai defaults"
        );
        Ok(defaults)
    }
}

fn parse_env<T>(name: &'static str, raw: String) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| {
        tracing::warn!("Rejecting {}={:?}: {}", name, raw, e);
        Error::InvalidEnvVar {
            name,
            reason: e.to_string(),
            value: raw,
        }
    })
}
