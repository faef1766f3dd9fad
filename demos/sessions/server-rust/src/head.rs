/* demos/sessions/server-rust/src/head.rs */

use meta_tags::MetaTags;

const LAYOUT: &str = r#"<!doctype html><html><head><meta charset="utf-8"></head><body>{{body}}</body></html>"#;

fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      _ => out.push(ch),
    }
  }
  out
}

fn head_meta(tags: &MetaTags) -> String {
  let mut html = String::new();
  for (name, content) in tags.iter() {
    if name == "title" {
      html.push_str(&format!("<title>{}</title>", escape_html(content)));
    } else {
      html.push_str(&format!(
        r#"<meta name="{}" content="{}">"#,
        escape_html(name),
        escape_html(content)
      ));
    }
  }
  html
}

/// Render the layout with `body`, placing head metadata right after `<meta charset="utf-8">`.
pub fn render_page(tags: &MetaTags, body: &str) -> String {
  let charset = r#"<meta charset="utf-8">"#;
  let html = LAYOUT.replace("{{body}}", body);
  match html.find(charset) {
    Some(pos) => {
      let insert_at = pos + charset.len();
      format!("{}{}{}", &html[..insert_at], head_meta(tags), &html[insert_at..])
    }
    None => html,
  }
}
