//! HTML page for viewing and editing a paste.

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the paste page: `title` is the identifier, `body` the stored blob.
/// Saving POSTs the textarea back to the current path.
pub fn render(title: &str, body: &[u8]) -> String {
    let title = html_escape(title);
    let body = html_escape(&String::from_utf8_lossy(body));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #1a1a2e; color: #e0e0e0; margin: 0; padding: 1.5rem; }}
        header {{ display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem; }}
        h1 {{ color: #fff; font-family: monospace; margin: 0; }}
        textarea {{ width: 100%; height: 75vh; box-sizing: border-box; background: #16213e; color: #e0e0e0; border: none; border-radius: 8px; padding: 1rem; font-family: monospace; font-size: 0.95rem; }}
        .btn {{ background: #0f3460; color: #fff; border: none; padding: 8px 24px; border-radius: 8px; font-size: 1rem; cursor: pointer; }}
        .btn:hover {{ background: #1a4a7a; }}
        #status {{ color: #a0a0a0; margin-left: 1rem; }}
    </style>
</head>
<body>
    <header>
        <h1>{title}</h1>
        <div><button class="btn" id="save">Save</button><span id="status"></span></div>
    </header>
    <textarea id="content" spellcheck="false">{body}</textarea>
    <script>
        const save = async () => {{
            const status = document.getElementById("status");
            const resp = await fetch(window.location.pathname, {{
                method: "POST",
                body: document.getElementById("content").value,
            }});
            const result = await resp.json();
            status.textContent = resp.ok ? "Saved" : result.error;
        }};
        document.getElementById("save").addEventListener("click", save);
        document.addEventListener("keydown", (e) => {{
            if ((e.ctrlKey || e.metaKey) && e.key === "s") {{
                e.preventDefault();
                save();
            }}
        }});
    </script>
</body>
</html>"#
    )
}
