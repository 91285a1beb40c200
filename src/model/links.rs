//! Shared hypermedia link type

use serde::Deserialize;

/// A `_links` entry pointing at a related resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
    /// Target URL of the linked resource.
    pub href: String,
    /// Media type of the target, if declared.
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
    /// Name of the link variant (e.g. a logo size), if declared.
    #[serde(default)]
    pub name: Option<String>,
}
