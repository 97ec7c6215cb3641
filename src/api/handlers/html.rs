//! Minimal server-rendered markup shared by the page handlers.
//!
//! The pages here exist to navigate, not to look good; styling stays out of
//! scope beyond what the fallback UX needs (a heading, a spinner, a link).

use crate::i18n::Catalog;
use axum::response::Html;
use std::fmt::Write;

/// A rendered page. Refresh directives are markup-level (`<meta http-equiv=
/// "refresh">`) so they survive even when the transport layer in front of
/// the service strips response headers.
pub(crate) struct Page {
    title: String,
    refresh: Option<(u16, String)>,
    body: String,
}

impl Page {
    pub(crate) fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            refresh: None,
            body: String::new(),
        }
    }

    /// Schedule a markup-level navigation to `url` after `delay_secs`.
    pub(crate) fn refresh(mut self, delay_secs: u16, url: &str) -> Self {
        self.refresh = Some((delay_secs, url.to_string()));
        self
    }

    pub(crate) fn heading(mut self, text: &str) -> Self {
        let _ = write!(self.body, "<h1>{}</h1>", escape(text));
        self
    }

    pub(crate) fn paragraph(mut self, text: &str) -> Self {
        let _ = write!(self.body, "<p>{}</p>", escape(text));
        self
    }

    /// Animated placeholder shown while a markup navigation completes.
    pub(crate) fn spinner(mut self) -> Self {
        self.body.push_str(r#"<div class="spinner" aria-hidden="true"></div>"#);
        self
    }

    /// Manual link: the terminal fallback when automated navigation fails.
    pub(crate) fn link(mut self, url: &str, label: &str) -> Self {
        let _ = write!(self.body, r#"<p><a href="{url}">{}</a></p>"#, escape(label));
        self
    }

    pub(crate) fn nav(mut self, catalog: &Catalog) -> Self {
        let _ = write!(
            self.body,
            concat!(
                r#"<nav><a href="/profile">{profile}</a> "#,
                r#"<a href="/create-profile?from=signin">{signin}</a> "#,
                r#"<a href="/create-profile?from=signup">{signup}</a> "#,
                r#"<form method="post" action="/auth/signout"><button>{signout}</button></form>"#,
                "</nav>"
            ),
            profile = escape(catalog.t("nav.profile")),
            signin = escape(catalog.t("nav.signIn")),
            signup = escape(catalog.t("nav.signUp")),
            signout = escape(catalog.t("nav.signOut")),
        );
        self
    }

    pub(crate) fn render(self) -> Html<String> {
        let refresh_meta = match &self.refresh {
            Some((delay, url)) => {
                format!(r#"<meta http-equiv="refresh" content="{delay};url={url}">"#)
            }
            None => String::new(),
        };

        Html(format!(
            concat!(
                "<!doctype html><html lang=\"en\"><head>",
                "<meta charset=\"utf-8\">",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
                "{refresh}",
                "<title>{title}</title>",
                "</head><body>{body}</body></html>"
            ),
            refresh = refresh_meta,
            title = escape(&self.title),
            body = self.body,
        ))
    }
}

/// Escape text interpolated into markup. Attribute URLs are built from our
/// own route table, never from request input, so only text nodes need this.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(character),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_directive_renders_delay_and_url() {
        let Html(body) = Page::new("t").refresh(2, "/auth/signin").render();
        assert!(body.contains(r#"<meta http-equiv="refresh" content="2;url=/auth/signin">"#));
    }

    #[test]
    fn no_refresh_directive_without_refresh() {
        let Html(body) = Page::new("t").heading("hello").render();
        assert!(!body.contains("http-equiv"));
        assert!(body.contains("<h1>hello</h1>"));
    }

    #[test]
    fn text_is_escaped() {
        let Html(body) = Page::new("a<b").paragraph("x & \"y\"").render();
        assert!(body.contains("<title>a&lt;b</title>"));
        assert!(body.contains("<p>x &amp; &quot;y&quot;</p>"));
    }
}
