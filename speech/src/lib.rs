//! Fixed-persona neural TTS synthesis over the Edge speech service.
//!
//! This crate wraps the external `msedge-tts` binding behind a small typed
//! surface:
//! - [`VoiceProfile`]: a voice identifier plus prosody offsets, defaulting
//!   to the King Sejong persona
//! - [`Synthesizer`]: one-shot text-to-audio synthesis and file persistence
//! - [`list_voices`]: the service's published voice catalog
//!
//! # Example
//!
//! ```rust,no_run
//! use sejongvoice_speech::Synthesizer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let synth = Synthesizer::default();
//!     let written = synth.save("안녕하세요", "out.mp3").await?;
//!     println!("wrote {} bytes", written);
//!     Ok(())
//! }
//! ```

mod error;
mod synth;
mod voice;

pub use error::{Error, Result};
pub use synth::{list_voices, Synthesizer};
pub use voice::{
    VoiceInfo, VoiceProfile, DEFAULT_AUDIO_FORMAT, SEJONG_PITCH_HZ, SEJONG_RATE_PCT,
    SEJONG_VOICE, SEJONG_VOLUME_PCT,
};
