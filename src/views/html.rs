use reqwest::Url;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Path of a coin's detail page, with `id` percent-encoded as a single
/// segment. The result still needs `escape` inside an attribute.
pub fn coin_path(id: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/coins") else {
        return "/".to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(id);
    }
    url.path().to_string()
}

/// Wraps a rendered body in the shared document shell.
pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<main class="page">
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Renders `<h1>` with a status line (loading, error, empty).
pub fn status_title(text: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(r#"<h1 class="title {class}">{}</h1>"#, escape(text)),
        None => format!(r#"<h1 class="title">{}</h1>"#, escape(text)),
    }
}

const STYLE: &str = r#"
:root {
  --bg-primary: #ffffff; --bg-secondary: #ffffff; --bg-tertiary: #f9f9f9;
  --text-primary: #333333; --text-secondary: #666666; --border-color: #dddddd;
  --shadow-color: rgba(0, 0, 0, 0.1); --accent-color: #0070f3;
  --up: #10B981; --down: #EF4444;
}
@media (prefers-color-scheme: dark) {
  :root {
    --bg-primary: #1a1a1a; --bg-secondary: #2d2d2d; --bg-tertiary: #3a3a3a;
    --text-primary: #ffffff; --text-secondary: #cccccc; --border-color: #404040;
    --shadow-color: rgba(0, 0, 0, 0.3); --accent-color: #4da6ff;
  }
}
body { margin: 0; background: var(--bg-primary); color: var(--text-primary); font-family: Arial, sans-serif; }
.page { padding: 20px; max-width: 1200px; margin: 0 auto; min-height: 100vh; }
.title { text-align: center; margin-bottom: 30px; }
.title.error { color: var(--down); }
.coin-list { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 20px; margin-bottom: 30px; }
.coin-card { background: var(--bg-secondary); border: 1px solid var(--border-color); border-radius: 8px; padding: 20px; text-decoration: none; color: inherit; box-shadow: 0 2px 5px var(--shadow-color); }
.coin-header { display: flex; align-items: center; margin-bottom: 15px; }
.coin-icon { width: 32px; height: 32px; margin-right: 12px; border-radius: 50%; }
.coin-name { font-size: 1.5em; margin: 0 0 5px; color: var(--accent-color); }
.coin-symbol { font-size: 0.9em; color: var(--text-secondary); margin: 0; text-transform: uppercase; }
.coin-price { font-size: 1.2em; font-weight: bold; }
.price-change { font-weight: 600; padding: 6px 10px; border-radius: 6px; }
.price-change.up { color: var(--up); background: rgba(16, 185, 129, 0.1); }
.price-change.down { color: var(--down); background: rgba(239, 68, 68, 0.1); }
.price-range { font-size: 0.85em; color: var(--text-secondary); }
.pagination { display: flex; justify-content: center; gap: 15px; }
.page-button, .back-button { padding: 10px 20px; border: none; border-radius: 5px; background: var(--accent-color); color: white; text-decoration: none; cursor: pointer; font-size: 1em; }
.page-button.disabled { background: var(--text-secondary); cursor: not-allowed; }
.description { background: var(--bg-tertiary); padding: 20px; border-radius: 12px; margin-bottom: 30px; line-height: 1.6; border: 1px solid var(--border-color); }
.data-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; }
.data-card { background: var(--bg-secondary); border: 1px solid var(--border-color); border-radius: 12px; padding: 20px; }
.data-label { font-weight: bold; margin: 0 0 8px; color: var(--text-secondary); font-size: 0.9em; text-transform: uppercase; }
.data-value { margin: 0; font-size: 1.3em; font-weight: 600; }
.data-value.up { color: var(--up); }
.data-value.down { color: var(--down); }
"#;
