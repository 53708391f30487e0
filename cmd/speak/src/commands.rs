//! Command implementations for the speak CLI.

use std::io::Read;

use sejongvoice_speech::{list_voices as fetch_voices, Synthesizer};

use crate::Cli;

/// Synthesizes the input text and writes the audio file.
pub async fn synthesize(cli: &Cli) -> anyhow::Result<()> {
    let output = cli
        .output
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("output file is required"))?;
    let text = acquire_text(cli)?;

    let synth = Synthesizer::default();
    print_verbose(cli, &format!("Voice: {}", synth.profile().voice));
    print_verbose(
        cli,
        &format!(
            "Prosody: pitch {}, rate {}, volume {}",
            synth.profile().pitch_str(),
            synth.profile().rate_str(),
            synth.profile().volume_str()
        ),
    );
    print_verbose(cli, &format!("Text length: {} characters", text.chars().count()));

    let audio = synth.synthesize(&text).await?;

    output_bytes(&audio, output)?;
    print_verbose(cli, &format!("Wrote {}", format_bytes(audio.len())));

    println!("Audio saved to {}", output);
    Ok(())
}

/// Prints the service's voice catalog, one voice per line or as JSON.
pub async fn list_voices(cli: &Cli) -> anyhow::Result<()> {
    let voices = fetch_voices().await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&voices)?);
        return Ok(());
    }

    for v in &voices {
        println!("{:<44} {:<8} {}", v.short_name, v.gender, v.locale);
    }
    Ok(())
}

/// Gets the text to synthesize from the -t flag or, when absent, stdin.
fn acquire_text(cli: &Cli) -> anyhow::Result<String> {
    match cli.text.as_deref() {
        Some(t) => non_empty(t, "--text"),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            non_empty(&buf, "stdin")
        }
    }
}

/// Trims the raw input and rejects it when nothing remains.
fn non_empty(raw: &str, source: &str) -> anyhow::Result<String> {
    let text = raw.trim();
    if text.is_empty() {
        anyhow::bail!("No text provided in {}", source);
    }
    Ok(text.to_string())
}

/// Outputs binary data to a file.
fn output_bytes(data: &[u8], output_path: &str) -> anyhow::Result<()> {
    std::fs::write(output_path, data)?;
    Ok(())
}

/// Prints verbose output if enabled.
fn print_verbose(cli: &Cli, msg: &str) {
    if cli.verbose {
        eprintln!("[verbose] {}", msg);
    }
}

/// Formats bytes to human readable string.
fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
