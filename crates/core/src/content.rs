//! Rendering of insight bodies.
//!
//! The dashboard editor stores a post as Editor.js JSON
//! (`{"blocks": [{"type": ..., "data": {...}}, ...]}`). Older posts were
//! written with a rich-text editor and hold plain HTML. [`render_content`]
//! accepts both: anything that is not a JSON object is returned as-is.
//!
//! Block `text` fields are editor-produced inline HTML and are emitted
//! unescaped; captions, URLs, code and stat values are escaped.

use serde_json::{Map, Value};

use crate::html::escape_html;

/// Default heading level for `header` blocks without a level.
const DEFAULT_HEADER_LEVEL: u64 = 2;

/// Image frame style for `imageCaption` blocks without a style.
const DEFAULT_IMAGE_STYLE: &str = "teal";

const DEFAULT_LIST_STYLE: &str = "unordered";

/// Render stored insight content to HTML.
pub fn render_content(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let doc = match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(doc)) => doc,
        _ => return content.to_string(),
    };

    let blocks = match doc.get("blocks") {
        Some(Value::Array(blocks)) => blocks.as_slice(),
        _ => &[],
    };

    let mut html = String::new();
    for block in blocks {
        let Some(block) = block.as_object() else {
            continue;
        };
        let kind = block.get("type").and_then(Value::as_str).unwrap_or_default();
        let empty = Map::new();
        let data = block.get("data").and_then(Value::as_object).unwrap_or(&empty);
        render_block(&mut html, kind, data);
    }
    html
}

fn str_field<'a>(data: &'a Map<String, Value>, key: &str) -> &'a str {
    data.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn render_block(html: &mut String, kind: &str, data: &Map<String, Value>) {
    match kind {
        "paragraph" => {
            html.push_str(&format!("<p>{}</p>", str_field(data, "text")));
        }
        "header" => {
            let level = data
                .get("level")
                .and_then(Value::as_u64)
                .unwrap_or(DEFAULT_HEADER_LEVEL)
                .clamp(1, 6);
            html.push_str(&format!("<h{level}>{}</h{level}>", str_field(data, "text")));
        }
        "list" => {
            // Only the unordered style is a bullet list; every other style numbers.
            let style = data
                .get("style")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_LIST_STYLE);
            let tag = if style == DEFAULT_LIST_STYLE { "ul" } else { "ol" };
            let items: String = data
                .get("items")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(list_item).collect())
                .unwrap_or_default();
            html.push_str(&format!("<{tag} class=\"styled\">{items}</{tag}>"));
        }
        "quote" => render_pullquote(html, str_field(data, "text"), str_field(data, "caption")),
        "pullquote" => render_pullquote(html, str_field(data, "text"), str_field(data, "citation")),
        "statCallout" => {
            html.push_str("<div class=\"stat-callout\">");
            for key in ["stat1", "stat2", "stat3"] {
                let stat = data.get(key).and_then(Value::as_object);
                let field = |name: &str| {
                    stat.and_then(|s| s.get(name))
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                };
                html.push_str(&format!(
                    "<div class=\"stat-cell\"><div class=\"num\">{}</div><div class=\"lbl\">{}</div></div>",
                    escape_html(field("num")),
                    escape_html(field("label")),
                ));
            }
            html.push_str("</div>");
        }
        "imageCaption" => {
            let style = data
                .get("style")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_IMAGE_STYLE);
            render_image(html, str_field(data, "url"), str_field(data, "caption"), style);
        }
        "image" => {
            // The image tool nests the URL under `file.url`; older posts keep it flat.
            let url = data
                .get("file")
                .and_then(|f| f.get("url"))
                .and_then(Value::as_str)
                .unwrap_or_else(|| str_field(data, "url"));
            render_image(html, url, str_field(data, "caption"), DEFAULT_IMAGE_STYLE);
        }
        "code" => {
            html.push_str(&format!(
                "<pre><code>{}</code></pre>",
                escape_html(str_field(data, "code"))
            ));
        }
        "delimiter" => html.push_str("<hr class=\"ce-delimiter\">"),
        "linkTool" => {
            let link = str_field(data, "link");
            let title = data
                .get("meta")
                .and_then(|m| m.get("title"))
                .and_then(Value::as_str)
                .unwrap_or(link);
            html.push_str(&format!(
                "<p><a href=\"{}\">{}</a></p>",
                escape_html(link),
                escape_html(title)
            ));
        }
        _ => {}
    }
}

/// List items are plain strings, or `{ "content": ... }` objects in the
/// nested-list tool.
fn list_item(item: &Value) -> String {
    let text = match item {
        Value::String(s) => s.as_str(),
        Value::Object(o) => o.get("content").and_then(Value::as_str).unwrap_or_default(),
        _ => "",
    };
    format!("<li>{text}</li>")
}

fn render_pullquote(html: &mut String, text: &str, cite: &str) {
    html.push_str(&format!("<div class=\"pullquote\"><p>{text}</p>"));
    if !cite.is_empty() {
        html.push_str(&format!("<cite>{}</cite>", escape_html(cite)));
    }
    html.push_str("</div>");
}

fn render_image(html: &mut String, url: &str, caption: &str, style: &str) {
    if url.is_empty() {
        return;
    }
    html.push_str("<div class=\"article-img\">");
    html.push_str(&format!(
        "<div class=\"article-img-inner {}\">",
        escape_html(style)
    ));
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" style=\"width:100%;height:100%;object-fit:cover;\">",
        escape_html(url),
        escape_html(caption)
    ));
    html.push_str("</div></div>");
    if !caption.is_empty() {
        html.push_str(&format!(
            "<p class=\"img-caption\">{}</p>",
            escape_html(caption)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(blocks: Value) -> String {
        json!({ "blocks": blocks }).to_string()
    }

    #[test]
    fn empty_content_renders_nothing() {
        assert_eq!(render_content(""), "");
    }

    #[test]
    fn html_content_passes_through() {
        let html = "<p>Legacy <strong>post</strong></p>";
        assert_eq!(render_content(html), html);
    }

    #[test]
    fn json_that_is_not_an_object_passes_through() {
        assert_eq!(render_content("[1, 2]"), "[1, 2]");
        assert_eq!(render_content("\"text\""), "\"text\"");
    }

    #[test]
    fn object_without_blocks_renders_nothing() {
        assert_eq!(render_content(r#"{"time": 1}"#), "");
    }

    #[test]
    fn paragraph_and_header() {
        let out = render_content(&doc(json!([
            {"type": "paragraph", "data": {"text": "Hello <b>world</b>"}},
            {"type": "header", "data": {"text": "Title", "level": 3}},
            {"type": "header", "data": {"text": "Default"}},
            {"type": "header", "data": {"text": "Clamped", "level": 9}},
        ])));
        assert_eq!(
            out,
            "<p>Hello <b>world</b></p><h3>Title</h3><h2>Default</h2><h6>Clamped</h6>"
        );
    }

    #[test]
    fn lists_ordered_and_unordered() {
        let out = render_content(&doc(json!([
            {"type": "list", "data": {"style": "ordered", "items": ["one", {"content": "two"}]}},
            {"type": "list", "data": {"items": ["a"]}},
        ])));
        assert_eq!(
            out,
            "<ol class=\"styled\"><li>one</li><li>two</li></ol><ul class=\"styled\"><li>a</li></ul>"
        );
    }

    #[test]
    fn list_styles_other_than_unordered_are_numbered() {
        let out = render_content(&doc(json!([
            {"type": "list", "data": {"style": "checklist", "items": ["a"]}},
            {"type": "list", "data": {"style": "unordered", "items": ["b"]}},
        ])));
        assert_eq!(
            out,
            "<ol class=\"styled\"><li>a</li></ol><ul class=\"styled\"><li>b</li></ul>"
        );
    }

    #[test]
    fn quote_escapes_caption_only() {
        let out = render_content(&doc(json!([
            {"type": "quote", "data": {"text": "<i>Green</i>", "caption": "A & B"}},
            {"type": "pullquote", "data": {"text": "No cite"}},
        ])));
        assert_eq!(
            out,
            "<div class=\"pullquote\"><p><i>Green</i></p><cite>A &amp; B</cite></div>\
             <div class=\"pullquote\"><p>No cite</p></div>"
        );
    }

    #[test]
    fn stat_callout_renders_three_cells() {
        let out = render_content(&doc(json!([
            {"type": "statCallout", "data": {
                "stat1": {"num": "140+", "label": "Villas"},
                "stat2": {"num": "<3", "label": "Weeks"}
            }}
        ])));
        assert_eq!(out.matches("stat-cell").count(), 3);
        assert!(out.contains("<div class=\"num\">&lt;3</div>"));
    }

    #[test]
    fn images_need_a_url() {
        let out = render_content(&doc(json!([
            {"type": "image", "data": {"url": "", "caption": "missing"}},
            {"type": "imageCaption", "data": {"url": "https://cdn/a.webp", "caption": "Pool", "style": "sand"}},
        ])));
        assert!(!out.contains("missing"));
        assert!(out.contains("article-img-inner sand"));
        assert!(out.contains("src=\"https://cdn/a.webp\" alt=\"Pool\""));
        assert!(out.ends_with("<p class=\"img-caption\">Pool</p>"));
    }

    #[test]
    fn image_tool_nested_file_url() {
        let out = render_content(&doc(json!([
            {"type": "image", "data": {"file": {"url": "https://cdn/b.webp"}}}
        ])));
        assert!(out.contains("article-img-inner teal"));
        assert!(out.contains("src=\"https://cdn/b.webp\""));
        assert!(!out.contains("img-caption"));
    }

    #[test]
    fn code_delimiter_link_and_unknown() {
        let out = render_content(&doc(json!([
            {"type": "code", "data": {"code": "<div>"}},
            {"type": "delimiter", "data": {}},
            {"type": "linkTool", "data": {"link": "https://example.com", "meta": {}}},
            {"type": "embed", "data": {"source": "x"}},
            "not a block",
        ])));
        assert_eq!(
            out,
            "<pre><code>&lt;div&gt;</code></pre><hr class=\"ce-delimiter\">\
             <p><a href=\"https://example.com\">https://example.com</a></p>"
        );
    }
}
