//! Premade ElevenLabs voices usable as an agent's TTS voice.

use crate::error::{Error, Result};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Voices available to every ElevenLabs account without cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PremadeVoice {
    Rachel,
    Clyde,
    Roger,
    Sarah,
    Laura,
    Thomas,
    Charlie,
    George,
    Callum,
    River,
    Harry,
    Liam,
    Alice,
    Matilda,
    Will,
    Jessica,
    Eric,
    Chris,
    Brian,
    Daniel,
    Lily,
    Bill,
}

impl PremadeVoice {
    /// Voice assigned to new agents when the caller does not pick one.
    pub const DEFAULT: PremadeVoice = PremadeVoice::Jessica;

    /// The ElevenLabs voice ID for this voice
    pub fn id(self) -> &'static str {
        match self {
            PremadeVoice::Rachel => "21m00Tcm4TlvDq8ikWAM",
            PremadeVoice::Clyde => "2EiwWnXFnvU5JabPnv8n",
            PremadeVoice::Roger => "CYw3kZ02Hs0563khs1Fj",
            PremadeVoice::Sarah => "EXAVITQu4vr4xnSDxMaL",
            PremadeVoice::Laura => "FGY2WhTYpPnrIDTdsKH5",
            PremadeVoice::Thomas => "GBv7mTt0atIp3Br8iCZE",
            PremadeVoice::Charlie => "IKne3meq5aSn9XLyUdCD",
            PremadeVoice::George => "JBFqnCBsd6RMkjVDRZzb",
            PremadeVoice::Callum => "N2lVS1w4EtoT3dr4eOWO",
            PremadeVoice::River => "SAz9YHcvj6GT2YYXdXww",
            PremadeVoice::Harry => "SOYHLrjzK2X1ezoPC6cr",
            PremadeVoice::Liam => "TX3LPaxmHKxFdv7VOQHJ",
            PremadeVoice::Alice => "Xb7hH8MSUJpSbSDYk0k2",
            PremadeVoice::Matilda => "XrExE9yKIg1WjnnlVkGX",
            PremadeVoice::Will => "bIHbv24MWmeRgasZH58o",
            PremadeVoice::Jessica => "cgSgspJ2msm6clMCkdW9",
            PremadeVoice::Eric => "cjVigY5qzO86Huf0OWal",
            PremadeVoice::Chris => "iP95p4xoKVk53GoZ742B",
            PremadeVoice::Brian => "nPczCjzI2devNBz1zQrb",
            PremadeVoice::Daniel => "onwK4e9ZLuTAKqWW03F9",
            PremadeVoice::Lily => "pFZP5JQG7iQjIQuC4Bku",
            PremadeVoice::Bill => "pqHfZKP75CvOlQylNhV4",
        }
    }

    /// Parse a voice from its display name (case-insensitive)
    pub fn from_name(name: &str) -> Result<PremadeVoice> {
        name.trim()
            .parse()
            .map_err(|_| Error::VoiceNotFound(name.to_string()))
    }

    /// Reverse lookup from a voice ID, e.g. one read back from a stored agent
    pub fn from_id(id: &str) -> Option<PremadeVoice> {
        PremadeVoice::iter().find(|voice| voice.id() == id)
    }
}

impl From<PremadeVoice> for String {
    fn from(voice: PremadeVoice) -> String {
        voice.id().to_string()
    }
}
