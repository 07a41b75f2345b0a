//! ElevenLabs Conversational AI configuration builders
//!
//! This crate builds the JSON payloads the ElevenLabs agent API expects when
//! creating or updating an agent, and the per-conversation override sent when
//! a session starts. It performs no I/O: callers hand the resulting values to
//! whatever HTTP or websocket client they already use.
//!
//! # Usage
//!
//! ```
//! use fluent_voice_convai::*;
//!
//! fn main() -> Result<()> {
//!     let defaults = ConvaiDefaults::default();
//!
//!     // Create payloads
//!     let params = ConversationParams::with_defaults("You book dentist appointments.", &defaults)
//!         .with_voice_id(PremadeVoice::from_name("Rachel")?.id());
//!     let config = build_conversation_config(&params);
//!     let settings = build_platform_settings(defaults.record_voice, defaults.retention_days);
//!
//!     // Update payloads, starting from what the service returned
//!     let stored = ConversationConfig::from_json(config.to_json()?)?;
//!     let updated = update_conversation_config(
//!         &stored,
//!         &ConversationConfigUpdate::new().language("fr"),
//!     );
//!     let settings = update_platform_settings(&settings, None, Some(30));
//!
//!     // Per-session override
//!     let session = build_conversation_override_for(&updated, Some("Speak slowly."), None);
//!
//!     assert_eq!(updated.agent.language, "fr");
//!     assert_eq!(settings.privacy.retention_days, 30);
//!     assert!(session.is_some());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod conversation;
pub mod error;
pub mod overrides;
pub mod platform;
pub mod update;
pub mod voice;

pub use config::ConvaiDefaults;
pub use conversation::{
    CLIENT_EVENTS, ClientEvent, ConversationConfig, ConversationParams, build_conversation_config,
};
pub use error::{Error, Result};
pub use overrides::{
    ConversationInitiationClientData, build_conversation_override,
    build_conversation_override_for, build_system_prompt_override,
};
pub use platform::{PlatformSettings, build_platform_settings};
pub use update::{ConversationConfigUpdate, update_conversation_config, update_platform_settings};
pub use voice::PremadeVoice;
