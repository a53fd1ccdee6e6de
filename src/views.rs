use std::fmt::Write as _;

use crate::core::models::{LengthBucket, PageView};

/// Escapes text for use inside HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn length_options(selected: LengthBucket) -> String {
    let mut options = String::new();
    for bucket in LengthBucket::ALL {
        let marker = if bucket == selected { " selected" } else { "" };
        let _ = write!(
            options,
            r#"<option value="{}"{marker}>{}</option>"#,
            bucket.as_str(),
            bucket.label()
        );
    }
    options
}

/// Render the summarizer page.
///
/// The form is always pre-filled with the submitted text and bucket; the
/// error block and summary block appear only when set.
///
/// A newline follows the `<textarea>` start tag since HTML parsers drop the
/// first one, which keeps a leading newline in the submitted text intact.
#[must_use]
pub fn render_page(view: &PageView) -> String {
    let error_block = view
        .error_message
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(|m| format!(r#"<p class="error" role="alert">{}</p>"#, escape_html(m)))
        .unwrap_or_default();

    let summary_block = view
        .summary
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| {
            format!(
                r#"<section class="summary"><h2>Summary</h2><p>{}</p></section>"#,
                escape_html(s)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Text Summarizer</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
textarea {{ width: 100%; min-height: 12rem; }}
.error {{ color: #b00020; }}
.summary {{ background: #f4f4f4; padding: 1rem; }}
</style>
</head>
<body>
<h1>Text Summarizer</h1>
<form method="post" action="/">
<label for="text_to_summarize">Text to summarize</label>
<textarea id="text_to_summarize" name="text_to_summarize">
{text}</textarea>
<label for="summary_length">Summary length</label>
<select id="summary_length" name="summary_length">{options}</select>
<button type="submit">Summarize</button>
</form>
{error_block}
{summary_block}
</body>
</html>
"#,
        text = escape_html(&view.original_text),
        options = length_options(view.selected_length),
    )
}

/// Minimal page for routes other than `/`.
#[must_use]
pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"><title>Not found</title></head>
<body><h1>Not found</h1><p>No page at <code>{}</code>. <a href="/">Back to the summarizer</a>.</p></body>
</html>
"#,
        escape_html(path)
    )
}
