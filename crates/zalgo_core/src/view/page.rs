//! Form page template.
//!
//! # Invariants
//! - Every user-derived value is passed through `escape_html` before it is
//!   embedded in markup.

use crate::service::form_service::FormPage;
const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Zalgo Generator</title>
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        :root {
            --bg-color: #0a0b10;
            --text-color: #e8e8ff;
            --muted-color: #9aa3b2;
            --card-bg: #121420;
            --accent: #7c4dff;
            --border: #1f2433;
        }
        * { box-sizing: border-box; }
        body {
            margin: 0;
            background: var(--bg-color);
            color: var(--text-color);
            font-family: system-ui, 'Segoe UI', Roboto, Arial, sans-serif;
            font-size: 16px;
            line-height: 1.5;
        }
        .container { max-width: 900px; margin: 40px auto; padding: 20px; }
        .card {
            background: var(--card-bg);
            border: 1px solid var(--border);
            border-radius: 16px;
            padding: 20px;
            box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
            margin-bottom: 20px;
        }
        h1 { margin: 0 0 16px 0; font-size: 28px; font-weight: 700; }
        h2 { margin: 0 0 8px 0; font-size: 20px; }
        .main-grid { display: grid; grid-template-columns: 1fr; gap: 16px; }
        @media (min-width: 800px) {
            .main-grid { grid-template-columns: 2fr 1fr; }
        }
        label { display: block; margin: 12px 0 6px 0; color: var(--muted-color); font-weight: 500; }
        textarea {
            width: 100%;
            padding: 12px 14px;
            border-radius: 12px;
            border: 1px solid #22283a;
            background: #0e1018;
            color: var(--text-color);
            font-family: inherit;
            font-size: 14px;
        }
        textarea:focus { outline: none; border-color: var(--accent); }
        .controls {
            display: flex;
            gap: 16px;
            align-items: center;
            flex-wrap: wrap;
            color: var(--muted-color);
            margin-top: 10px;
        }
        .controls label { margin: 0; display: flex; align-items: center; gap: 4px; }
        .btn {
            border: none;
            border-radius: 12px;
            background: var(--accent);
            color: white;
            padding: 12px 16px;
            font-weight: 600;
            cursor: pointer;
            font-family: inherit;
        }
        .btn:hover { background: #6c42d9; }
        .btn.secondary { background: #1e2233; }
        .btn.secondary:hover { background: #252a3f; }
        .output-box {
            background: #0e1018;
            border: 1px solid #22283a;
            border-radius: 12px;
            padding: 12px 14px;
            white-space: pre-wrap;
            word-break: break-word;
            overflow-wrap: anywhere;
            min-height: 120px;
            font-family: monospace;
        }
        .button-row { display: flex; gap: 8px; margin-top: 10px; }
        small { color: var(--muted-color); }
        code { background: #0e1018; padding: 2px 6px; border-radius: 4px; font-family: monospace; }
        pre {
            background: #0e1018;
            border: 1px solid #22283a;
            border-radius: 12px;
            padding: 12px;
            overflow: auto;
            margin: 12px 0;
        }
    </style>
</head>
<body>
"#;

const API_CARD: &str = r#"        <div class="card">
            <h2>API Usage</h2>
            <p><small>Send a POST request to <code>/api/zalgo</code> with JSON data:</small></p>
            <pre>{
  "text": "The static is calling.",
  "density": 0.8,
  "up": true,
  "mid": true,
  "down": true
}

Response:
{"zalgo": "..."}</pre>
        </div>
"#;

const PAGE_TAIL: &str = r#"    <script>
        function copyToClipboard() {
            const text = document.getElementById('zalgo-output').textContent;
            navigator.clipboard.writeText(text).then(function() {
                document.querySelectorAll('.btn.secondary').forEach(function(button) {
                    const original = button.textContent;
                    button.textContent = 'Copied!';
                    setTimeout(function() { button.textContent = original; }, 1000);
                });
            }).catch(function(err) {
                console.error('Failed to copy text: ', err);
                alert('Failed to copy text');
            });
        }
    </script>
</body>
</html>
"#;

/// Escapes `& < > " '` for use in element content and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Renders the full form page for `page`.
pub fn render_page(page: &FormPage) -> String {
    let density = escape_html(&format!("{:?}", page.density));
    let mut html = String::with_capacity(PAGE_HEAD.len() + PAGE_TAIL.len() + 4096);
    html.push_str(PAGE_HEAD);

    let body = format!(
        r#"    <div class="container">
        <div class="card">
            <h1>Zalgo Text Generator</h1>
            <form method="post">
                <div class="main-grid">
                    <div>
                        <label for="input-text">Enter your text:</label>
                        <textarea id="input-text" name="text" rows="6"
                                  placeholder="Type something normal here...">{user_text}</textarea>
                        <div class="controls">
                            <label>Density: <span id="intensity-display">{density}</span></label>
                            <input type="range" min="0" max="3" step="0.1"
                                   name="density" value="{density}"
                                   oninput="document.getElementById('intensity-display').textContent=this.value">
                            <label><input type="checkbox" name="up"{up}> Above</label>
                            <label><input type="checkbox" name="mid"{mid}> Middle</label>
                            <label><input type="checkbox" name="down"{down}> Below</label>
                        </div>
                    </div>
                    <div>
                        <label>Cursed output:</label>
                        <div class="output-box" id="zalgo-output">{zalgo}</div>
                        <div class="button-row">
                            <button class="btn" type="submit">Summon Zalgo</button>
                            <button class="btn secondary" type="button" onclick="copyToClipboard()">Copy</button>
                        </div>
                        <small>Note: Some fonts don't support all Unicode combining marks.</small>
                    </div>
                </div>
            </form>
        </div>
"#,
        user_text = escape_html(&page.user_text),
        density = density,
        up = checked(page.show_above),
        mid = checked(page.show_middle),
        down = checked(page.show_below),
        zalgo = escape_html(&page.zalgo_result),
    );
    html.push_str(&body);

    html.push_str(API_CARD);
    html.push_str("    </div>\n");
    html.push_str(PAGE_TAIL);
    html
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}
