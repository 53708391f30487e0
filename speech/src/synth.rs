//! Speech synthesis through the Edge neural TTS service.

use std::path::Path;

use msedge_tts::tts::client::connect;
use msedge_tts::voice::get_voices_list;
use tokio::task;
use tracing::debug;

use crate::error::{Error, Result};
use crate::voice::{VoiceInfo, VoiceProfile};

/// Synthesizes speech with a fixed voice profile.
///
/// Each call performs exactly one connect-and-synthesize round trip against
/// the service. The underlying client is synchronous, so the call runs on
/// the blocking thread pool while the caller awaits it.
pub struct Synthesizer {
    profile: VoiceProfile,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(VoiceProfile::default())
    }
}

impl Synthesizer {
    /// Creates a synthesizer for the given voice profile.
    pub fn new(profile: VoiceProfile) -> Self {
        Self { profile }
    }

    /// Returns the voice profile this synthesizer speaks with.
    pub fn profile(&self) -> &VoiceProfile {
        &self.profile
    }

    /// Synthesizes the text and returns the encoded audio.
    ///
    /// The text is trimmed first; empty input fails with
    /// [`Error::EmptyText`] without contacting the service.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let text = text.trim().to_owned();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }

        debug!(
            voice = %self.profile.voice,
            pitch = %self.profile.pitch_str(),
            rate = %self.profile.rate_str(),
            volume = %self.profile.volume_str(),
            chars = text.len(),
            "synthesizing"
        );

        let config = self.profile.to_speech_config();
        let audio = task::spawn_blocking(move || {
            let mut client = connect().map_err(Error::service)?;
            let synthesized = client.synthesize(&text, &config).map_err(Error::service)?;
            Ok::<_, Error>(synthesized.audio_bytes)
        })
        .await??;

        debug!(bytes = audio.len(), "synthesis complete");
        Ok(audio)
    }

    /// Synthesizes the text and writes the audio to `path`.
    ///
    /// Returns the number of bytes written. On synthesis failure no file is
    /// created; a failure mid-write leaves whatever the runtime left behind.
    pub async fn save(&self, text: &str, path: impl AsRef<Path>) -> Result<usize> {
        let audio = self.synthesize(text).await?;
        tokio::fs::write(path, &audio).await?;
        Ok(audio.len())
    }
}

/// Fetches the service's published voice catalog, sorted by short name.
pub async fn list_voices() -> Result<Vec<VoiceInfo>> {
    let voices = task::spawn_blocking(|| get_voices_list().map_err(Error::service)).await??;

    let mut infos: Vec<VoiceInfo> = voices
        .into_iter()
        .map(|v| VoiceInfo {
            short_name: v.short_name.unwrap_or_else(|| v.name.clone()),
            gender: v.gender.unwrap_or_default(),
            locale: v.locale.unwrap_or_default(),
            friendly_name: v.friendly_name.unwrap_or_default(),
        })
        .collect();
    infos.sort_by(|a, b| a.short_name.cmp(&b.short_name));

    debug!(voices = infos.len(), "fetched voice catalog");
    Ok(infos)
}
