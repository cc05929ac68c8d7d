// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where a banner points: an external URL, an internal page, or nowhere.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Query parameters for an internal page, keyed by name.
pub type RouteParams = BTreeMap<String, String>;

/// Parses route parameters written as `key=value,key=value`.
///
/// Keys and values are trimmed. An entry without `=` or with an empty key is
/// skipped; when a value itself holds `=`, only the text up to the next `=` is kept.
/// Returns `None` when nothing usable remains.
///
/// ```
/// use understory_banner::parse_params;
///
/// let params = parse_params("department=shoes, sort=price").unwrap();
/// assert_eq!(params["department"], "shoes");
/// assert_eq!(params["sort"], "price");
/// assert!(parse_params("").is_none());
/// ```
#[must_use]
pub fn parse_params(params: &str) -> Option<RouteParams> {
    let mut map = RouteParams::new();
    for entry in params.split(',') {
        let mut parts = entry.split('=');
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key.to_string(), value.trim().to_string());
    }
    if map.is_empty() { None } else { Some(map) }
}

/// Authored link settings of a banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct BannerLink {
    /// Whether the banner leaves the store for [`url`](Self::url).
    pub external_route: bool,
    /// Destination of an external route.
    pub url: Option<String>,
    /// Internal page identifier, such as `store.search`.
    pub page: Option<String>,
    /// Route parameters for [`page`](Self::page), in `key=value,...` form.
    pub params: Option<String>,
    /// Internal path that takes precedence over [`page`](Self::page).
    #[cfg_attr(feature = "serde", serde(rename = "customInternalURL"))]
    pub custom_internal_url: Option<String>,
}

/// Resolved destination of a banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Leave the store; opened in a new browsing context.
    External {
        /// Destination URL.
        url: &'a str,
    },
    /// An internal path given verbatim.
    Path {
        /// Path to navigate to.
        to: &'a str,
    },
    /// An internal page with optional route parameters.
    Page {
        /// Page identifier.
        page: &'a str,
        /// Parsed route parameters.
        params: Option<RouteParams>,
    },
    /// No link; the banner is a plain image.
    None,
}

impl BannerLink {
    /// A link that leaves the store.
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            external_route: true,
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// A link to an internal page.
    pub fn page(page: impl Into<String>, params: Option<String>) -> Self {
        Self {
            page: Some(page.into()),
            params,
            ..Self::default()
        }
    }

    /// Decides where the banner points.
    ///
    /// External routes use [`url`](Self::url) and nothing else. Internal routes prefer
    /// [`custom_internal_url`](Self::custom_internal_url) over
    /// [`page`](Self::page). Anything else, including an external route without a
    /// URL, resolves to [`LinkTarget::None`].
    #[must_use]
    pub fn resolve(&self) -> LinkTarget<'_> {
        if self.external_route {
            return match non_empty(self.url.as_deref()) {
                Some(url) => LinkTarget::External { url },
                None => {
                    tracing::debug!("external banner route without a url");
                    LinkTarget::None
                }
            };
        }
        if let Some(to) = non_empty(self.custom_internal_url.as_deref()) {
            return LinkTarget::Path { to };
        }
        match non_empty(self.page.as_deref()) {
            Some(page) => LinkTarget::Page {
                page,
                params: self.params.as_deref().and_then(parse_params),
            },
            None => LinkTarget::None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
