//! Integration tests for `smart` mode
//!
//! End-to-end scenarios through the public API covering every construct the
//! pattern registry recognises, splitting, merging and the list-item rule.

use segmark_core::{ChunkKind, Config, ListItemPolicy, Segmenter};

fn small_segmenter() -> Segmenter {
    let config = Config::builder()
        .min_chunk_size(10)
        .max_chunk_size(30)
        .build()
        .unwrap();
    Segmenter::with_config(config).unwrap()
}

fn kinds_and_texts(segmenter: &Segmenter, text: &str) -> Vec<(ChunkKind, String)> {
    segmenter
        .segment(text)
        .chunks
        .into_iter()
        .map(|c| (c.kind, c.text))
        .collect()
}

#[test]
fn test_empty_input() {
    let output = Segmenter::new().segment("");
    assert!(output.chunks.is_empty());
    assert_eq!(output.report.total_chunks, 0);
}

#[test]
fn test_plain_sentence_untouched() {
    let text = "This is a simple sentence that fits within default limits.";
    let output = Segmenter::new().segment(text);
    assert_eq!(output.report.total_chunks, 1);
    assert_eq!(output.report.translatable_chunks, 1);
    assert_eq!(output.report.count(ChunkKind::Text), Some(1));
    assert_eq!(output.chunks[0].text, text);
    assert!(output.chunks[0].translatable);
}

#[test]
fn test_long_sentence_split_by_words() {
    let text = "This is a longer sentence that definitely needs to be split into multiple smaller chunks based on the small max size.";
    let output = small_segmenter().segment(text);

    assert!(output.report.total_chunks > 1);
    assert_eq!(output.report.translatable_chunks, output.report.total_chunks);
    for chunk in &output.chunks {
        assert_eq!(chunk.kind, ChunkKind::Text);
        assert!(chunk.char_len() <= 30);
    }
    let joined: String = output.chunks.iter().map(|c| c.text.replace(' ', "")).collect();
    assert_eq!(joined, text.replace(' ', ""));
}

#[test]
fn test_short_sentences_packed() {
    let output = small_segmenter().segment("Short. Also short. Merge these.");
    assert_eq!(output.texts(), vec!["Short. Also short.", "Merge these."]);

    let output = small_segmenter().segment("One. Two. Three. Four. Five.");
    assert_eq!(output.texts(), vec!["One. Two. Three. Four. Five."]);
}

#[test]
fn test_no_merge_past_maximum() {
    let output = small_segmenter().segment("This first part is okay size. Second part also okay.");
    assert_eq!(
        output.texts(),
        vec!["This first part is okay size.", "Second part also okay."]
    );

    let first = "A".repeat(25);
    let second = "B".repeat(25);
    let output = small_segmenter().segment(&format!("{first} {second}"));
    assert_eq!(output.texts(), vec![first.as_str(), second.as_str()]);
}

#[test]
fn test_fenced_code_blocks() {
    let text = "Some text before.\n```python\ndef hello():\n  print('hi')\n```\nSome text after.";
    assert_eq!(
        kinds_and_texts(&Segmenter::new(), text),
        vec![
            (ChunkKind::Text, "Some text before.".to_string()),
            (
                ChunkKind::Code,
                "```python\ndef hello():\n  print('hi')\n```".to_string()
            ),
            (ChunkKind::Text, "Some text after.".to_string()),
        ]
    );

    let output = Segmenter::new().segment("~~~\ndef test():\n  pass\n~~~");
    assert_eq!(output.report.count(ChunkKind::Code), Some(1));
    assert_eq!(output.report.total_chunks, 1);
}

#[test]
fn test_html_code_and_pre() {
    assert_eq!(
        kinds_and_texts(&Segmenter::new(), "Before <code>print()</code> After."),
        vec![
            (ChunkKind::Text, "Before".to_string()),
            (ChunkKind::Code, "<code>print()</code>".to_string()),
            (ChunkKind::Text, "After.".to_string()),
        ]
    );

    let output = Segmenter::new().segment("Some text <pre>\n  Formatted code\n</pre> More text.");
    assert_eq!(output.chunks[1].text, "<pre>\n  Formatted code\n</pre>");
    assert_eq!(output.chunks[1].kind, ChunkKind::Code);
}

#[test]
fn test_images() {
    assert_eq!(
        kinds_and_texts(&Segmenter::new(), "Look: ![Alt text](/image.png) That was it."),
        vec![
            (ChunkKind::Text, "Look:".to_string()),
            (ChunkKind::Image, "![Alt text](/image.png)".to_string()),
            (ChunkKind::Text, "That was it.".to_string()),
        ]
    );

    let output =
        Segmenter::new().segment("Image with empty alt: ![](image.png) and <img src='other.jpg' alt=''>");
    assert_eq!(output.report.count(ChunkKind::Image), Some(2));
}

#[test]
fn test_very_long_base64_image() {
    let payload = "iVBORw0KGgoAAAANSUhEUgAAAAUAAAAFCAYAAACNbyblAAAAHElEQVQI12P4".repeat(200);
    let text = format!(
        "Some text before the image.\n\n![Dot](data:image/png;base64,{payload})\n\nSome text after the image."
    );
    let output = Segmenter::new().segment(&text);

    assert_eq!(output.report.count(ChunkKind::Image), Some(1));
    assert_eq!(output.chunks[0].text, "Some text before the image.");
    assert!(output.chunks[1].text.contains(&payload));
    assert!(!output.chunks[1].translatable);
    assert_eq!(output.chunks[2].text, "Some text after the image.");
}

#[test]
fn test_links_and_urls() {
    assert_eq!(
        kinds_and_texts(&Segmenter::new(), "Go to [Google](https://google.com) now."),
        vec![
            (ChunkKind::Text, "Go to".to_string()),
            (ChunkKind::Url, "[Google](https://google.com)".to_string()),
            (ChunkKind::Text, "now.".to_string()),
        ]
    );
    assert_eq!(
        kinds_and_texts(&Segmenter::new(), "Visit http://example.com/page?q=1 please.")[1],
        (ChunkKind::Url, "http://example.com/page?q=1".to_string())
    );
    assert_eq!(
        kinds_and_texts(&Segmenter::new(), "Check www.anothersite.org end.")[1],
        (ChunkKind::Url, "www.anothersite.org".to_string())
    );
}

#[test]
fn test_percent_encoded_fragment_link() {
    let link = "[Subscribe](#elementor-action%3Aaction%3Dpopup%3Aopen%26settings%3DeyJpZCI6IjE5Njg4IiwidG9nZ2xlIjpmYWxzZX0%3D)";
    let text = format!("text1 text2 text3 {link} text4 text5 text6");
    assert_eq!(
        kinds_and_texts(&Segmenter::new(), &text),
        vec![
            (ChunkKind::Text, "text1 text2 text3".to_string()),
            (ChunkKind::Url, link.to_string()),
            (ChunkKind::Text, "text4 text5 text6".to_string()),
        ]
    );
}

#[test]
fn test_special_characters_in_targets() {
    let text = "\n    Check these URLs:\n    [Link with spaces](https://example.com/path with spaces)\n    [Link with unicode](https://example.com/üñîçødé)\n    ![Image with special chars](path/to/image-with-$pecial_chars!.jpg)\n    ";
    let output = Segmenter::new().segment(text);
    assert_eq!(output.report.count(ChunkKind::Url), Some(2));
    assert_eq!(output.report.count(ChunkKind::Image), Some(1));
    assert!(output
        .chunks
        .iter()
        .any(|c| c.kind == ChunkKind::Url && c.text.contains("üñîçødé")));
}

#[test]
fn test_consecutive_special_elements() {
    let output = Segmenter::new().segment("`code1`[link1](#1)`code2`[link2](#2)![image](img.png)`code3`");
    assert_eq!(output.report.count(ChunkKind::Code), Some(3));
    assert_eq!(output.report.count(ChunkKind::Url), Some(2));
    assert_eq!(output.report.count(ChunkKind::Image), Some(1));
    assert_eq!(output.report.total_chunks, 6);
    assert_eq!(output.report.count(ChunkKind::Text), None);
}

#[test]
fn test_elements_at_edges() {
    assert_eq!(
        kinds_and_texts(&Segmenter::new(), "`start code` then text."),
        vec![
            (ChunkKind::Code, "`start code`".to_string()),
            (ChunkKind::Text, "then text.".to_string()),
        ]
    );
    assert_eq!(
        kinds_and_texts(&Segmenter::new(), "Text then `end code`"),
        vec![
            (ChunkKind::Text, "Text then".to_string()),
            (ChunkKind::Code, "`end code`".to_string()),
        ]
    );
}

#[test]
fn test_whitespace_around_elements_is_trimmed() {
    assert_eq!(
        Segmenter::new().segment("Text with   `inline code`   example.").texts(),
        vec!["Text with", "`inline code`", "example."]
    );
    let output = Segmenter::new().segment("   ```python\ndef hello():\n    print('hi')\n```   ");
    assert_eq!(output.report.total_chunks, 1);
    assert!(output.chunks[0].text.starts_with("```python"));
}

#[test]
fn test_report_counts() {
    let output = Segmenter::new().segment("Text `code` ![image](img.png) [link](url) http://example.com");
    let report = &output.report;
    assert_eq!(report.total_chunks, 5);
    assert_eq!(report.translatable_chunks, 1);
    assert_eq!(report.non_translatable_chunks, 4);
    assert_eq!(report.count(ChunkKind::Text), Some(1));
    assert_eq!(report.count(ChunkKind::Code), Some(1));
    assert_eq!(report.count(ChunkKind::Image), Some(1));
    assert_eq!(report.count(ChunkKind::Url), Some(2));
    assert_eq!(report.count(ChunkKind::Footnote), None);
}

#[test]
fn test_footnote_lines() {
    let text = "\n    This is a paragraph that should be translated.\n\n    [^16]: This is a footnote reference that should not be translated.\n\n    [^14]: Another footnote reference.\n\n    This is another paragraph that should be translated.\n    ";
    let output = Segmenter::new().segment(text);
    let footnotes: Vec<_> = output
        .chunks
        .iter()
        .filter(|c| c.kind == ChunkKind::Footnote)
        .collect();
    assert_eq!(footnotes.len(), 2);
    assert_eq!(
        footnotes[0].text,
        "[^16]: This is a footnote reference that should not be translated."
    );
    assert!(footnotes.iter().all(|c| !c.translatable));
}

#[test]
fn test_unicode_and_emoji() {
    let text = "Text with emoji 😊 and unicode characters üñîçødé in `code 🚀` and ![image 🖼️](img.png)";
    let output = Segmenter::new().segment(text);
    assert!(output.chunks[0].text.contains('😊'));
    assert!(output.chunks[1].text.contains('🚀'));
    assert_eq!(output.chunks[3].kind, ChunkKind::Image);
    for chunk in &output.chunks {
        assert_eq!(&text[chunk.span()], chunk.text);
    }
}

#[test]
fn test_unterminated_fence_keeps_content() {
    let text = "```python\ndef hello():\n    print('hi')\n";
    let output = Segmenter::new().segment(text);
    assert_eq!(
        output.texts(),
        vec!["```python", "def hello():\n    print('hi')"]
    );
    assert_eq!(output.chunks[0].kind, ChunkKind::Code);
    assert_eq!(output.chunks[1].kind, ChunkKind::Text);

    let mismatched = Segmenter::new().segment("```python\ndef hello():\n    print('hi')\n~~~");
    assert!(mismatched.report.count_or_zero(ChunkKind::Code) >= 1);
    assert!(mismatched
        .chunks
        .iter()
        .any(|c| c.text.contains("print('hi')")));
}

#[test]
fn test_malformed_html_is_text() {
    for text in ["Before <code>print()", "Before <img src='pic.jpg' alt='Test' After"] {
        let output = Segmenter::new().segment(text);
        assert_eq!(output.texts(), vec![text]);
        assert_eq!(output.chunks[0].kind, ChunkKind::Text);
    }
}

#[test]
fn test_bullets_with_inline_code_merge_with_intro() {
    let text = "\n    LangChain provides sophisticated chunking capabilities that could be extended:\n\n    - `RecursiveCharacterTextSplitter` for recursive chunking\n    - `TokenTextSplitter` for fixed token chunking[^3]\n    ";
    let output = Segmenter::new().segment(text);
    assert_eq!(output.chunks.len(), 1);
    assert!(output.chunks[0].translatable);
    assert!(output.chunks[0].text.contains("RecursiveCharacterTextSplitter"));
    assert!(output.chunks[0].text.contains("TokenTextSplitter"));
}

#[test]
fn test_bullet_links_kept_whole() {
    for text in [
        "\n    - [News](https://brandeishoot.com/category/news/)\n    ",
        "\n    * [News](https://brandeishoot.com/category/news/)\n    ",
        "- Creates chunks with three fields: `chuckText`, `toTranslate`, and `chunkType`",
    ] {
        let output = Segmenter::new().segment(text);
        assert_eq!(output.chunks.len(), 1, "{text:?}");
        assert_eq!(output.chunks[0].kind, ChunkKind::Text);
        assert!(output.chunks[0].translatable);
    }
}

#[test]
fn test_bullet_rule_can_be_disabled() {
    let config = Config::builder()
        .list_items(ListItemPolicy::disabled())
        .build()
        .unwrap();
    let segmenter = Segmenter::with_config(config).unwrap();
    let output = segmenter.segment("- [News](https://brandeishoot.com/category/news/)");
    assert_eq!(output.report.count(ChunkKind::Url), Some(1));
}

#[test]
fn test_list_line_limit_never_exceeds_maximum() {
    let config = Config::builder()
        .min_chunk_size(5)
        .max_chunk_size(30)
        .list_items(ListItemPolicy {
            max_line_len: Some(200),
            ..ListItemPolicy::default()
        })
        .build()
        .unwrap();
    let output = Segmenter::with_config(config)
        .unwrap()
        .segment("- see `x` and many more words that exceed thirty characters by far");

    assert_eq!(output.report.count(ChunkKind::Code), Some(1));
    for chunk in &output.chunks {
        assert!(chunk.char_len() <= 30, "{:?} exceeds 30", chunk.text);
    }
}

#[test]
fn test_four_backtick_fence_stays_whole() {
    let output = Segmenter::new().segment("Intro.\n````\ncode\n````\nOutro.");
    assert_eq!(output.texts(), vec!["Intro.", "````\ncode\n````", "Outro."]);
    assert_eq!(output.report.count(ChunkKind::Code), Some(1));
}

#[test]
fn test_single_characters_not_translatable() {
    let output = small_segmenter().segment("x `code` y");
    assert_eq!(output.texts(), vec!["x", "`code`", "y"]);
    assert!(!output.chunks[0].translatable);
    assert!(!output.chunks[2].translatable);

    let output = Segmenter::new().segment("\n    a b c\n    ");
    assert_eq!(output.texts(), vec!["a b c"]);
    assert!(output.chunks[0].translatable);
}

#[test]
fn test_complex_document() {
    let text = r#"
This is the first paragraph with some regular text. It should be translated.

Here is a Markdown image: ![Alt text for my image](/path/to/image.jpg) which should not be translated.

Followed by more text that needs translation and might be long enough to require splitting depending on the max_chunk_size setting. Let's add more words to test this splitting functionality properly. We need enough content here. This sentence makes it longer. And another one for good measure.

```python
# This is a Python code block
def greet(name):
    print(f"Hello, {name}!")

greet("World")```

The code block above should be skipped. Inline code like `variable_name` or `function()` should also be treated as code. It shouldn't merge with surrounding text.

Here is a link: [Google Search](https://www.google.com) and a standalone URL: http://example.com/path?query=test.
Also check www.anothersite.net.

<p>An HTML image: <img src='data:image/png;base64,iVBORw0KGgo...' alt='HTML Image'></p> This is text right after an HTML image tag.

<code>print("inline html code")</code> And more text.

Final bit of text. Short. This text chunk might merge with the previous one if they are both small enough and consecutive.
"#;
    let output = Segmenter::new().segment(text);
    let report = &output.report;

    assert_eq!(report.count(ChunkKind::Image), Some(2));
    assert_eq!(report.count(ChunkKind::Code), Some(4));
    assert_eq!(report.count(ChunkKind::Url), Some(3));

    let find = |needle: &str| output.chunks.iter().find(|c| c.text == needle);
    assert_eq!(
        find("[Google Search](https://www.google.com)").map(|c| c.kind),
        Some(ChunkKind::Url)
    );
    assert_eq!(
        find(r#"<code>print("inline html code")</code>"#).map(|c| c.kind),
        Some(ChunkKind::Code)
    );
    assert!(output
        .chunks
        .iter()
        .any(|c| c.kind == ChunkKind::Image && c.text.contains("alt='HTML Image'")));

    for chunk in output.chunks.iter().filter(|c| c.kind == ChunkKind::Text) {
        assert!(chunk.char_len() <= 500);
    }
}

#[test]
fn test_long_paragraphs_split_on_breaks() {
    let text = format!(
        "First paragraph with enough text to make it substantial.\n\n\
         Second paragraph that continues the text and adds more content.\n\n\
         Third paragraph to ensure we have enough content to trigger splitting.{}",
        "A".repeat(400)
    );
    let output = Segmenter::new().segment(&text);
    assert!(output.report.total_chunks > 1);
    assert!(output.chunks[0].text.starts_with("First paragraph"));
    assert!(output.chunks.len() <= 4);
}

#[test]
fn test_long_sentences_end_on_terminators() {
    let text = format!(
        "First sentence that has some content. Second sentence that continues the text. \
         Third sentence to add more content. Fourth sentence to ensure we have enough text. {}",
        "A".repeat(400)
    );
    let output = Segmenter::new().segment(&text);
    assert!(output.report.total_chunks > 1);
    let (last, rest) = output.chunks.split_last().unwrap();
    for chunk in rest {
        assert!(chunk.text.ends_with('.'), "{:?}", chunk.text);
    }
    assert_eq!(last.text, "A".repeat(400));
}
