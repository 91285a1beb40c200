//! Per-response pagination metadata

use reqwest::header::HeaderMap;
use url::Url;

/// Metadata extracted from one API response.
///
/// Okta carries pagination state out-of-band: each collection response
/// includes a `Link` header whose `rel="next"` entry points at the next
/// page. The link is opaque and server-controlled; it is consumed verbatim
/// as the next request URL, never reconstructed from its parts.
#[derive(Debug, Clone, Default)]
pub struct ResponseMeta {
    next: Option<Url>,
}

impl ResponseMeta {
    /// Extracts pagination metadata from response headers.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        let next = headers
            .get_all(reqwest::header::LINK)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .filter_map(parse_link)
            .find_map(|(url, rel)| (rel == "next").then_some(url));
        Self { next }
    }

    /// Returns the continuation cursor for the next page, if one exists.
    pub fn next(&self) -> Option<&Url> {
        self.next.as_ref()
    }

    /// Returns `true` if the response linked to a further page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Parses a single `<target>; rel="value"` link entry.
fn parse_link(raw: &str) -> Option<(Url, String)> {
    let (target, params) = raw.trim().split_once(';')?;
    let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
    let rel = params.split(';').find_map(|param| {
        let (key, value) = param.trim().split_once('=')?;
        (key.trim() == "rel").then(|| value.trim().trim_matches('"').to_string())
    })?;
    Some((Url::parse(target).ok()?, rel))
}
