//! Generated project files
//!
//! `main.js` and `package.json` are fixed templates; only the application
//! name and version vary.

use serde::Serialize;

use crate::models::{ENTRY_SCRIPT_FILE, HTML_FILE};

const DEFAULT_PACKAGE_NAME: &str = "app";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest<'a> {
    name: String,
    product_name: &'a str,
    version: &'a str,
    main: &'static str,
    scripts: Scripts,
}

#[derive(Serialize)]
struct Scripts {
    start: &'static str,
}

/// Render `package.json` for the generated project.
pub fn package_manifest(app_name: &str, version: &str) -> String {
    let manifest = PackageManifest {
        name: npm_package_name(app_name),
        product_name: app_name,
        version,
        main: ENTRY_SCRIPT_FILE,
        scripts: Scripts {
            start: "electron .",
        },
    };
    // Only plain strings in here, serialization cannot fail
    let mut json = serde_json::to_string_pretty(&manifest).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

/// Render the `main.js` bootstrap that opens one window on `index.html`.
pub fn entry_script(app_name: &str) -> String {
    let title = serde_json::Value::String(app_name.to_string()).to_string();
    format!(
        r#"const {{ app, BrowserWindow }} = require('electron');
const path = require('path');

const APP_NAME = {title};

function createWindow() {{
    const win = new BrowserWindow({{
        width: 1200,
        height: 800,
        title: APP_NAME,
        webPreferences: {{
            contextIsolation: true,
            nodeIntegration: false
        }}
    }});

    win.loadFile(path.join(__dirname, '{HTML_FILE}'));
}}

app.whenReady().then(() => {{
    createWindow();

    app.on('activate', () => {{
        if (BrowserWindow.getAllWindows().length === 0) {{
            createWindow();
        }}
    }});
}});

app.on('window-all-closed', () => {{
    if (process.platform !== 'darwin') {{
        app.quit();
    }}
}});
"#
    )
}

/// Normalise a display name into something npm accepts as a package name.
///
/// Lowercase; runs of characters outside `[a-z0-9._-]` collapse to `-`;
/// leading `.`, `_` and `-` are trimmed, as is a trailing `-`.
pub fn npm_package_name(app_name: &str) -> String {
    let mut name = String::with_capacity(app_name.len());
    for c in app_name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-') {
            name.push(c);
        } else if !name.ends_with('-') {
            name.push('-');
        }
    }

    let trimmed = name
        .trim_start_matches(['.', '_', '-'])
        .trim_end_matches('-');
    if trimmed.is_empty() {
        DEFAULT_PACKAGE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
