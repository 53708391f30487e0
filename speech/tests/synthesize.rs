//! Live tests calling the real Edge speech service.
//! Run with: SEJONGVOICE_E2E=1 cargo test -p sejongvoice-speech --test synthesize -- --ignored

use sejongvoice_speech::{list_voices, Synthesizer, SEJONG_VOICE};

fn e2e_enabled() -> bool {
    std::env::var("SEJONGVOICE_E2E")
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore]
async fn e2e_synthesize_and_save() {
    assert!(e2e_enabled(), "SEJONGVOICE_E2E=1 required");

    let path = std::env::temp_dir().join("sejongvoice-e2e.mp3");
    let _ = std::fs::remove_file(&path);

    let synth = Synthesizer::default();
    let written = synth.save("Hello", &path).await.expect("save failed");
    assert!(written > 0);

    let meta = std::fs::metadata(&path).expect("output file missing");
    assert_eq!(meta.len() as usize, written);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore]
async fn e2e_voice_catalog_contains_persona() {
    assert!(e2e_enabled(), "SEJONGVOICE_E2E=1 required");

    let voices = list_voices().await.expect("list_voices failed");
    assert!(!voices.is_empty());
    assert!(voices.iter().any(|v| v.short_name == SEJONG_VOICE));
}
