use dioxus::document::eval;

/// Write `text` to the system clipboard; `true` once the write resolved.
pub async fn write_clipboard_text(text: &str) -> bool {
    let script = write_clipboard_script(text);
    match eval(&script).join::<bool>().await {
        Ok(written) => written,
        Err(err) => {
            tracing::warn!(error = ?err, "clipboard script failed");
            false
        }
    }
}

fn write_clipboard_script(text: &str) -> String {
    let literal = js_string_literal(text);
    format!(
        r#"
        try {{
            if (!navigator.clipboard || !navigator.clipboard.writeText) {{
                return false;
            }}
            await navigator.clipboard.writeText({literal});
            return true;
        }} catch (_) {{
            return false;
        }}
        "#
    )
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_escapes_quotes_and_newlines() {
        assert_eq!(
            js_string_literal("say \"hi\"\n\\"),
            r#""say \"hi\"\n\\""#
        );
    }

    #[test]
    fn script_embeds_code_and_reports_outcome() {
        let script = write_clipboard_script("a\nb");
        assert!(script.contains(r#"writeText("a\nb")"#));
        assert!(script.contains("return true;"));
        assert!(script.contains("return false;"));
    }
}
