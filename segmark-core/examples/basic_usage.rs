//! Example of segmenting a document and rebuilding it

use segmark_core::{coarse_chunks, Config, Input, Mode, Segmenter};
use std::borrow::Cow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Smart mode with the default configuration
    println!("=== Example 1: Smart Mode ===");
    let segmenter = Segmenter::new();
    let text = "Install with `cargo add segmark-core`.\n\nSee [the docs](https://docs.rs/segmark-core) or\nvisit https://example.com for more.";
    let output = segmenter.segment(text);

    for (i, chunk) in output.chunks.iter().enumerate() {
        println!(
            "  {:>2} [{:<5}] translate={:<5} {:?}",
            i + 1,
            chunk.kind.as_str(),
            chunk.translatable,
            chunk.text
        );
    }
    println!("Report: {}", serde_json::to_string(&output.report)?);

    // Example 2: Replace translatable chunks and rebuild the document
    println!("\n=== Example 2: Reassembly ===");
    let shouted = output.reassemble(text, |chunk| {
        if chunk.translatable {
            Cow::Owned(chunk.text.to_uppercase())
        } else {
            Cow::Borrowed(chunk.text.as_str())
        }
    })?;
    println!("{shouted}");

    // Example 3: Custom configuration
    println!("\n=== Example 3: Symbol Mode ===");
    let config = Config::builder()
        .mode(Mode::Symbol)
        .separators(["|", ";"])
        .build()?;
    let symbol = Segmenter::with_config(config)?;
    let output = symbol.process(Input::from_text("alpha | beta; gamma"))?;
    println!("Chunks: {:?}", output.texts());

    // Example 4: Subtitles
    println!("\n=== Example 4: Subtitles ===");
    let srt = "1\n00:00:01,000 --> 00:00:04,000\nHello there.\n\n2\n00:00:05,000 --> 00:00:08,000\n<i>General Kenobi.</i>\n";
    let output = Segmenter::with_mode(Mode::SubtitleSrt).segment(srt);
    for chunk in &output.chunks {
        println!("  [{}] {:?}", chunk.kind, chunk.text);
    }

    // Example 5: Coarse chunks for whole-document passes
    println!("\n=== Example 5: Coarse Chunks ===");
    let long = "A paragraph of moderate length that goes on for a while.\n\n".repeat(20);
    let chunks = coarse_chunks(&long, 300, 50)?;
    println!("{} coarse chunks", chunks.len());

    Ok(())
}
