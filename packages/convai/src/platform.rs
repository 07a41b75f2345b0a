//! Platform settings: widget appearance, call limits and privacy policy of an agent.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Consent text shown by the embeddable widget before a conversation starts.
pub const WIDGET_TERMS_TEXT: &str = "#### Terms and conditions\n\nBy clicking \"Agree,\" and each time I interact with this AI agent, I consent to the recording, storage, and sharing of my communications with third-party service providers, and as described in the Privacy Policy.\nIf you do not wish to have your conversations recorded, please refrain from using this service.";

pub const AVATAR_COLOR_1: &str = "#6DB035";
pub const AVATAR_COLOR_2: &str = "#F5CABB";

/// `-1` disables the per-agent concurrency cap.
pub const UNLIMITED_CONCURRENCY: i32 = -1;
pub const DAILY_CALL_LIMIT: u32 = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSettings {
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub evaluation: Map<String, Value>,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub overrides: Map<String, Value>,
    #[serde(default)]
    pub call_limits: CallLimits,
    pub privacy: PrivacyConfig,
    #[serde(default)]
    pub data_collection: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub variant: String,
    pub avatar: Avatar,
    pub feedback_mode: String,
    pub terms_text: String,
    pub show_avatar_when_collapsed: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            variant: "full".to_string(),
            avatar: Avatar::default(),
            feedback_mode: "during".to_string(),
            terms_text: WIDGET_TERMS_TEXT.to_string(),
            show_avatar_when_collapsed: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Avatar {
    #[serde(rename = "type")]
    pub kind: String,
    pub color_1: String,
    pub color_2: String,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            kind: "orb".to_string(),
            color_1: AVATAR_COLOR_1.to_string(),
            color_2: AVATAR_COLOR_2.to_string(),
        }
    }
}

/// Allowlist entries come back from the service as `{"hostname": ...}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub allowlist: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallLimits {
    pub agent_concurrency_limit: i32,
    pub daily_limit: u32,
}

impl Default for CallLimits {
    fn default() -> Self {
        Self {
            agent_concurrency_limit: UNLIMITED_CONCURRENCY,
            daily_limit: DAILY_CALL_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyConfig {
    pub record_voice: bool,
    pub retention_days: i32,
    #[serde(default = "enabled")]
    pub delete_transcript_and_pii: bool,
    #[serde(default = "enabled")]
    pub delete_audio: bool,
    #[serde(default)]
    pub apply_to_existing_conversations: bool,
}

fn enabled() -> bool {
    true
}

/// Assemble [`PlatformSettings`] for the given recording policy. Everything
/// besides `record_voice` and `retention_days` is a fixed default.
pub fn build_platform_settings(record_voice: bool, retention_days: i32) -> PlatformSettings {
    tracing::debug!(record_voice, retention_days, "Building platform settings");

    PlatformSettings {
        widget: WidgetConfig::default(),
        evaluation: Map::new(),
        auth: AuthConfig::default(),
        overrides: Map::new(),
        call_limits: CallLimits::default(),
        privacy: PrivacyConfig {
            record_voice,
            retention_days,
            delete_transcript_and_pii: true,
            delete_audio: true,
            apply_to_existing_conversations: false,
        },
        data_collection: Map::new(),
    }
}

impl PlatformSettings {
    /// Parse a `platform_settings` object as returned by the "get agent" endpoint.
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_privacy_block() {
        let settings = build_platform_settings(true, 30);
        assert_eq!(
            settings.privacy,
            PrivacyConfig {
                record_voice: true,
                retention_days: 30,
                delete_transcript_and_pii: true,
                delete_audio: true,
                apply_to_existing_conversations: false,
            }
        );
    }

    #[test]
    fn test_fixed_blocks_serialize_verbatim() {
        let value = build_platform_settings(false, 730).to_json().unwrap();

        assert_eq!(
            value["widget"]["avatar"],
            json!({"type": "orb", "color_1": "#6DB035", "color_2": "#F5CABB"})
        );
        assert_eq!(value["widget"]["variant"], "full");
        assert_eq!(value["widget"]["feedback_mode"], "during");
        assert_eq!(value["widget"]["show_avatar_when_collapsed"], true);
        assert!(
            value["widget"]["terms_text"]
                .as_str()
                .unwrap()
                .starts_with("#### Terms and conditions\n\nBy clicking \"Agree,\"")
        );
        assert_eq!(value["evaluation"], json!({}));
        assert_eq!(value["auth"], json!({"allowlist": []}));
        assert_eq!(value["overrides"], json!({}));
        assert_eq!(
            value["call_limits"],
            json!({"agent_concurrency_limit": -1, "daily_limit": 100000})
        );
        assert_eq!(value["data_collection"], json!({}));
        assert_eq!(value["privacy"]["record_voice"], false);
        assert_eq!(value["privacy"]["retention_days"], 730);
    }

    #[test]
    fn test_partial_blocks_are_completed() {
        let settings = PlatformSettings::from_json(json!({
            "widget": {"variant": "compact", "avatar": {"type": "url"}},
            "auth": {"allowlist": [{"hostname": "example.com"}]},
            "call_limits": {"daily_limit": 50},
            "privacy": {"record_voice": true, "retention_days": 30}
        }))
        .unwrap();

        assert_eq!(settings.widget.variant, "compact");
        assert_eq!(settings.widget.feedback_mode, "during");
        assert_eq!(settings.widget.avatar.kind, "url");
        assert_eq!(settings.widget.avatar.color_1, AVATAR_COLOR_1);
        assert_eq!(settings.auth.allowlist, vec![json!({"hostname": "example.com"})]);
        assert_eq!(settings.call_limits.agent_concurrency_limit, UNLIMITED_CONCURRENCY);
        assert_eq!(settings.call_limits.daily_limit, 50);
    }

    #[test]
    fn test_minimal_response_fills_fixed_blocks() {
        let settings =
            PlatformSettings::from_json(json!({"privacy": {"record_voice": false, "retention_days": 7}}))
                .unwrap();

        assert_eq!(settings, build_platform_settings(false, 7));
    }
}
