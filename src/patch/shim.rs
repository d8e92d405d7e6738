use std::sync::OnceLock;

use regex_lite::Regex;

/// Present in any page that already defines the `$` alias.
pub const SHIM_MARKER: &str = "window.$ = window.$ || window.jQuery";

const SHIM_TAG: &str = "\n\t\t<script>window.$ = window.$ || window.jQuery;</script>";

fn jquery_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<script[^>]*src=["'][^"']*jquery\.min\.js["'][^>]*></script>"#)
            .expect("jquery tag pattern is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShimOutcome {
    /// The marker is already in the page.
    AlreadyPresent,
    /// No `jquery.min.js` script tag to anchor on.
    NoJquery,
    /// New page content with the shim after the first jQuery tag.
    Injected(String),
}

/// Insert the `$` alias shim right after the first `jquery.min.js` script
/// tag, unless the page already carries it.
pub fn inject_shim(html: &str) -> ShimOutcome {
    if html.contains(SHIM_MARKER) {
        return ShimOutcome::AlreadyPresent;
    }

    match jquery_tag().find(html) {
        Some(m) => {
            let mut patched = String::with_capacity(html.len() + SHIM_TAG.len());
            patched.push_str(&html[..m.end()]);
            patched.push_str(SHIM_TAG);
            patched.push_str(&html[m.end()..]);
            ShimOutcome::Injected(patched)
        }
        None => ShimOutcome::NoJquery,
    }
}
