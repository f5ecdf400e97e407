//! HTML page rendering.
//!
//! The whole UI is one page: the form, plus an optional result or error
//! block. Dynamic text is escaped before it is written, since the symbol
//! class alone contains `<`, `>` and `&`.

use std::fmt::Write;

use zeroize::Zeroizing;

use crate::domain::{CharacterClass, ClassSelection};

const STYLE: &str = r"
      body { font-family: system-ui, sans-serif; max-width: 36rem; margin: 2rem auto; padding: 0 1rem; background: #eef1f4; }
      main { background: #fff; padding: 2rem; border-radius: 8px; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); }
      h1 small { font-size: 0.5em; color: #666; }
      .field { margin: 0.75rem 0; }
      .field input[type=number] { width: 5rem; padding: 4px; }
      button { background: #2f8f46; color: #fff; border: none; padding: 0.75rem 1.5rem; border-radius: 4px; font-size: 1rem; cursor: pointer; }
      button:hover { background: #287a3c; }
      .result { margin-top: 1rem; padding: 1rem; background: #f6f8fa; border-radius: 4px; word-break: break-all; font-family: ui-monospace, monospace; }
      .notice { margin-top: 0.5rem; color: #8a6d00; }
      .error { margin-top: 1rem; color: #c62828; }
";

/// Everything needed to render the page once.
#[derive(Debug, Clone)]
pub struct PageView {
    /// Length shown in the length input, as submitted.
    pub length: usize,

    /// Checked boxes.
    pub selection: ClassSelection,

    /// Generated password, if any.
    pub password: Option<Zeroizing<String>>,

    /// Informational message shown next to the result, if any.
    pub notice: Option<String>,

    /// Message for the user, if any.
    pub error: Option<String>,
}

impl PageView {
    /// Create a view with no password and no error.
    #[must_use]
    pub const fn new(length: usize, selection: ClassSelection) -> Self {
        Self {
            length,
            selection,
            password: None,
            notice: None,
            error: None,
        }
    }

    /// Attach a generated password.
    #[must_use]
    pub fn with_password(mut self, password: Zeroizing<String>) -> Self {
        self.password = Some(password);
        self
    }

    /// Attach an informational notice.
    #[must_use]
    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    /// Attach an error message.
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Render the full HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(4096);
        // Writing to a String cannot fail.
        let _ = self.write_page(&mut html);
        html
    }

    fn write_page(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "  <head>")?;
        writeln!(out, "    <meta charset=\"utf-8\">")?;
        writeln!(out, "    <title>Password Generator</title>")?;
        writeln!(out, "    <style>{STYLE}    </style>")?;
        writeln!(out, "  </head>")?;
        writeln!(out, "  <body>")?;
        writeln!(out, "    <main>")?;
        writeln!(
            out,
            "      <h1>Password Generator <small>v{}</small></h1>",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(out, "      <form method=\"POST\" action=\"/generate\">")?;
        writeln!(out, "        <div class=\"field\">")?;
        writeln!(out, "          <label for=\"length\">Password Length:</label>")?;
        writeln!(
            out,
            "          <input type=\"number\" id=\"length\" name=\"length\" value=\"{}\" min=\"1\">",
            self.length
        )?;
        writeln!(out, "        </div>")?;

        for class in CharacterClass::ALL {
            let name = class.field_name();
            let checked = if self.selection.contains(class) {
                " checked"
            } else {
                ""
            };
            writeln!(out, "        <div class=\"field\">")?;
            writeln!(
                out,
                "          <input type=\"checkbox\" id=\"{name}\" name=\"{name}\"{checked}>"
            )?;
            writeln!(
                out,
                "          <label for=\"{name}\">{}</label>",
                escape_html(class.label()).as_str()
            )?;
            writeln!(out, "        </div>")?;
        }

        writeln!(out, "        <button type=\"submit\">Generate Password</button>")?;
        writeln!(out, "      </form>")?;

        if let Some(password) = &self.password {
            writeln!(
                out,
                "      <div class=\"result\"><strong>Generated Password:</strong> <span id=\"password\">{}</span></div>",
                escape_html(password).as_str()
            )?;
        }
        if let Some(notice) = &self.notice {
            writeln!(
                out,
                "      <div class=\"notice\">{}</div>",
                escape_html(notice).as_str()
            )?;
        }
        if let Some(error) = &self.error {
            writeln!(
                out,
                "      <div class=\"error\">{}</div>",
                escape_html(error).as_str()
            )?;
        }

        writeln!(out, "    </main>")?;
        writeln!(out, "  </body>")?;
        writeln!(out, "</html>")
    }
}

/// Escape text for an HTML element or quoted attribute.
///
/// The escaped copy may hold a password, so it is wiped on drop.
#[must_use]
pub fn escape_html(text: &str) -> Zeroizing<String> {
    let mut escaped = Zeroizing::new(String::with_capacity(text.len() * 2));
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">&'</a>").as_str(),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain").as_str(), "plain");
    }

    #[test]
    fn test_initial_page() {
        let html = PageView::new(16, ClassSelection::all()).render();
        assert!(html.contains("value=\"16\""));
        assert!(!html.contains("class=\"notice\""));
        assert_eq!(html.matches(" checked>").count(), 4);
        assert!(html.contains(&format!("v{}", env!("CARGO_PKG_VERSION"))));
        assert!(!html.contains("class=\"result\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_selection_reflected() {
        let selection = ClassSelection::none().with(CharacterClass::Digits);
        let html = PageView::new(8, selection).render();
        assert_eq!(html.matches(" checked>").count(), 1);
        assert!(html.contains("name=\"digits\" checked>"));
        assert!(html.contains("name=\"lower\">"));
    }

    #[test]
    fn test_password_is_escaped() {
        let html = PageView::new(6, ClassSelection::all())
            .with_password(Zeroizing::new("a<b&c>".to_string()))
            .render();
        assert!(html.contains("<span id=\"password\">a&lt;b&amp;c&gt;</span>"));
    }

    #[test]
    fn test_error_block() {
        let html = PageView::new(16, ClassSelection::none())
            .with_error("Please select at least one character set")
            .render();
        assert!(html.contains("<div class=\"error\">Please select at least one character set</div>"));
        assert!(!html.contains("id=\"password\""));
        assert_eq!(html.matches(" checked>").count(), 0);
    }

    #[test]
    fn test_notice_keeps_submitted_length() {
        let html = PageView::new(2000, ClassSelection::all())
            .with_password(Zeroizing::new("abc".to_string()))
            .with_notice(Some("Length limited to 1024 characters".to_string()))
            .render();
        assert!(html.contains("value=\"2000\""));
        assert!(html.contains("<div class=\"notice\">Length limited to 1024 characters</div>"));
    }
}
