//! Voice configuration types.

use msedge_tts::tts::SpeechConfig;
use serde::Serialize;

/// Audio container format requested from the service.
///
/// 24kHz mono MP3, the conventional output format of the Edge speech
/// service.
pub const DEFAULT_AUDIO_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Voice persona used when no profile is supplied.
///
/// Voice: ko-KR-BongJinNeural (male, deep and authoritative)
/// Pitch: -12Hz (deeper voice for royal authority)
/// Rate:  +15% (brisk but dignified)
/// Volume: +5% (subtle presence boost)
pub const SEJONG_VOICE: &str = "ko-KR-BongJinNeural";
pub const SEJONG_PITCH_HZ: i32 = -12;
pub const SEJONG_RATE_PCT: i32 = 15;
pub const SEJONG_VOLUME_PCT: i32 = 5;

/// A voice persona: identifier plus prosody offsets relative to the
/// voice's neutral delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceProfile {
    /// Voice short name, e.g. `ko-KR-BongJinNeural`.
    pub voice: String,
    /// Pitch offset in Hz.
    pub pitch_hz: i32,
    /// Speaking rate offset in percent.
    pub rate_pct: i32,
    /// Volume offset in percent.
    pub volume_pct: i32,
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self {
            voice: SEJONG_VOICE.to_string(),
            pitch_hz: SEJONG_PITCH_HZ,
            rate_pct: SEJONG_RATE_PCT,
            volume_pct: SEJONG_VOLUME_PCT,
        }
    }
}

impl VoiceProfile {
    /// Creates a profile for the given voice with neutral prosody.
    pub fn new(voice: impl Into<String>) -> Self {
        Self {
            voice: voice.into(),
            pitch_hz: 0,
            rate_pct: 0,
            volume_pct: 0,
        }
    }

    /// Pitch offset as the service's SSML string form, e.g. `-12Hz`.
    pub fn pitch_str(&self) -> String {
        format!("{:+}Hz", self.pitch_hz)
    }

    /// Rate offset as the service's SSML string form, e.g. `+15%`.
    pub fn rate_str(&self) -> String {
        format!("{:+}%", self.rate_pct)
    }

    /// Volume offset as the service's SSML string form, e.g. `+5%`.
    pub fn volume_str(&self) -> String {
        format!("{:+}%", self.volume_pct)
    }

    /// Maps the profile onto the binding's wire configuration.
    pub(crate) fn to_speech_config(&self) -> SpeechConfig {
        SpeechConfig {
            voice_name: self.voice.clone(),
            audio_format: DEFAULT_AUDIO_FORMAT.to_string(),
            pitch: self.pitch_hz,
            rate: self.rate_pct,
            volume: self.volume_pct,
        }
    }
}

/// One entry of the service's published voice catalog.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceInfo {
    /// Voice short name, usable as [`VoiceProfile::voice`].
    pub short_name: String,
    pub gender: String,
    pub locale: String,
    pub friendly_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_fixed_persona() {
        let profile = VoiceProfile::default();
        assert_eq!(profile.voice, "ko-KR-BongJinNeural");
        assert_eq!(profile.pitch_hz, -12);
        assert_eq!(profile.rate_pct, 15);
        assert_eq!(profile.volume_pct, 5);
    }

    #[test]
    fn test_prosody_strings_are_signed() {
        let profile = VoiceProfile::default();
        assert_eq!(profile.pitch_str(), "-12Hz");
        assert_eq!(profile.rate_str(), "+15%");
        assert_eq!(profile.volume_str(), "+5%");

        let neutral = VoiceProfile::new("en-US-AriaNeural");
        assert_eq!(neutral.pitch_str(), "+0Hz");
        assert_eq!(neutral.rate_str(), "+0%");
        assert_eq!(neutral.volume_str(), "+0%");
    }

    #[test]
    fn test_speech_config_mapping() {
        let profile = VoiceProfile::default();
        let config = profile.to_speech_config();
        assert_eq!(config.voice_name, profile.voice);
        assert_eq!(config.audio_format, DEFAULT_AUDIO_FORMAT);
        assert_eq!(config.pitch, profile.pitch_hz);
        assert_eq!(config.rate, profile.rate_pct);
        assert_eq!(config.volume, profile.volume_pct);
    }
}
