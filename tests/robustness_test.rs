use pagetext::{extract_text, extract_text_from_bytes};
use std::time::{Duration, Instant};

#[test]
fn extract_handles_unclosed_tags() {
    assert_eq!(extract_text("<p>text<div>more"), "\ntext\nmore\n");
}

#[test]
fn extract_handles_invalid_nesting() {
    let text = extract_text("<p><div></p>inside</div>");
    assert!(text.contains("inside"));
    assert!(text.ends_with('\n'));
}

#[test]
fn extract_handles_missing_closing_tags() {
    assert_eq!(extract_text("<html><body><article>content"), "\ncontent\n");
}

#[test]
fn extract_handles_broken_attributes() {
    let text = extract_text("<div class=\"a\"\" id=b c=>ok</div>");
    assert!(text.contains("ok"));
}

#[test]
fn extract_handles_incomplete_entities() {
    let text = extract_text("&amp text &lt;");
    assert!(text.contains("text"));
    assert!(text.contains('<'));
}

#[test]
fn extract_handles_img_without_alt() {
    assert_eq!(extract_text("<p><img src=a.png>caption</p>"), "\ncaption\n");
}

#[test]
fn extract_handles_unterminated_script() {
    let text = extract_text("<p>before</p><script>document.write('<p>x</p>')");
    assert_eq!(text, "\nbefore\n");
}

#[test]
fn extract_handles_comments_and_doctype() {
    let html = "<!DOCTYPE html><!-- a comment --><p>kept<!-- inner --></p>";
    assert_eq!(extract_text(html), "\nkept\n");
}

#[test]
fn extract_handles_invalid_utf8_bytes() {
    let text = extract_text_from_bytes(b"<p>Test \xFF\xFE Invalid</p>");
    assert!(text.contains("Test"));
    assert!(text.contains("Invalid"));
    assert!(text.contains('\u{FFFD}'));
}

#[test]
fn extract_handles_binary_garbage() {
    let bytes: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let text = extract_text_from_bytes(&bytes);
    assert!(text.ends_with('\n'));
}

#[test]
fn extract_handles_deep_nesting() {
    let depth = 1_000;
    let html = format!("{}deep{}", "<div>".repeat(depth), "</div>".repeat(depth));
    assert_eq!(extract_text(&html), "\ndeep\n");
}

#[test]
fn extract_large_document_completes_quickly() {
    let html: String = (0..10_000).map(|i| format!("<p>paragraph {i}</p>")).collect();
    let start = Instant::now();
    let text = extract_text(&html);
    assert!(start.elapsed() < Duration::from_secs(10));
    assert_eq!(text.lines().filter(|l| !l.is_empty()).count(), 10_000);
    assert!(text.starts_with("\nparagraph 0\nparagraph 1\n"));
}
