use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::OutputFormat;

const SCRIPT_OPEN: &str = r#"<script type="application/ld+json">"#;
const SCRIPT_CLOSE: &str = "</script>";
const ESCAPED_SCRIPT_OPEN: &str = r#"&lt;script type="application/ld+json"&gt;"#;
const ESCAPED_SCRIPT_CLOSE: &str = "&lt;/script&gt;";
const CODE_OPEN: &str = r#"<code style="white-space:pre;">"#;
const CODE_CLOSE: &str = "</code>";

/// Serialize a node tree with tab indentation
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer).expect("serde_json only writes UTF-8 - this is a bug"))
}

pub fn open_marker(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Html => ESCAPED_SCRIPT_OPEN,
        OutputFormat::Script => SCRIPT_OPEN,
        OutputFormat::Json => "",
    }
}

pub fn close_marker(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Html => ESCAPED_SCRIPT_CLOSE,
        OutputFormat::Script => SCRIPT_CLOSE,
        OutputFormat::Json => "",
    }
}

pub(super) fn render(blocks: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => {
            let body: String = blocks
                .iter()
                .map(|block| wrap(&escape_html(block), format))
                .collect();
            format!("{CODE_OPEN}{body}{CODE_CLOSE}")
        }
        OutputFormat::Script => blocks
            .iter()
            .map(|block| wrap(&escape_script(block), format))
            .collect(),
        OutputFormat::Json => {
            let mut output = blocks.join("\n\n");
            output.push('\n');
            output
        }
    }
}

fn wrap(block: &str, format: OutputFormat) -> String {
    format!(
        "{}\n{block}\n{}\n",
        open_marker(format),
        close_marker(format)
    )
}

/// Escape text so a browser shows it instead of interpreting it
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// `</` inside a string literal would end the enclosing script element
fn escape_script(json: &str) -> String {
    json.replace("</", r"<\/")
}
