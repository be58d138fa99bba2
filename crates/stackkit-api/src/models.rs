// API response types
//
// Models for the Stack Exchange JSON API. All responses arrive in the
// `ApiEnvelope<T>` wrapper. Model values are immutable once deserialized:
// every field is fixed at decode time and nothing on the public surface
// mutates them, so instances can be shared freely across tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

// ── Identity ─────────────────────────────────────────────────────────

/// Common identity contract for remote-backed entities.
///
/// Not every instance is identity-bound (the API omits identity fields in
/// some filtered responses), hence the `Option`.
pub trait RemoteObject {
    type Id: ?Sized;

    /// The entity's identity handle, if bound.
    fn identity(&self) -> Option<&Self::Id>;
}

// ── Response envelope ────────────────────────────────────────────────

/// Standard API response envelope.
///
/// Every endpoint wraps its payload:
/// ```json
/// { "items": [...], "has_more": false }
/// ```
/// and reports failures in-band:
/// ```json
/// { "error_id": 400, "error_name": "bad_parameter", "error_message": "..." }
/// ```
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub error_id: Option<u32>,
    #[serde(default)]
    pub error_name: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

// ── Site ─────────────────────────────────────────────────────────────

/// Lifecycle state of a site. Closed set: a state outside these four is a
/// decode error, never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteState {
    Normal,
    OpenBeta,
    ClosedBeta,
    LinkedMeta,
}

/// Site object from `GET /sites`.
///
/// Produced only by [`StackClient`](crate::StackClient) fetch operations;
/// application code never constructs one directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    /// The community the site serves ("professional programmers", ...).
    pub audience: String,
    /// Launch date, unix epoch seconds on the wire.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub launch_date: DateTime<Utc>,
    pub site_state: SiteState,
    #[serde(default)]
    pub site_url: Option<Url>,
    #[serde(default)]
    pub logo_url: Option<Url>,
    #[serde(default)]
    pub icon_url: Option<Url>,
    #[serde(default)]
    pub favicon_url: Option<Url>,
    /// Key used to scope per-site requests (badges, etc.). Absent in some
    /// filtered responses, in which case the site cannot scope a badge.
    #[serde(default)]
    pub api_site_parameter: Option<String>,
}

impl RemoteObject for Site {
    type Id = str;

    fn identity(&self) -> Option<&str> {
        self.api_site_parameter.as_deref()
    }
}

// ── Badge ────────────────────────────────────────────────────────────

/// Badge rank. The wire value is the ordinal (0, 1, 2); anything else is
/// rejected at decode time. Ordering follows the ordinal:
/// `Bronze < Silver < Gold`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum BadgeRank {
    Bronze = 0,
    Silver = 1,
    Gold = 2,
}

impl TryFrom<u8> for BadgeRank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            0 => Ok(Self::Bronze),
            1 => Ok(Self::Silver),
            2 => Ok(Self::Gold),
            other => Err(format!("unrecognized badge rank {other} (expected 0, 1 or 2)")),
        }
    }
}

impl From<BadgeRank> for u8 {
    fn from(rank: BadgeRank) -> u8 {
        rank as u8
    }
}

/// How a badge is earned: site-wide or per tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeType {
    General,
    Tag,
}

/// Fully decoded badge from `GET /badges/...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(rename = "badge_id")]
    pub id: u64,
    pub name: String,
    pub description: String,
    pub rank: BadgeRank,
    /// Number of users the badge has been awarded to.
    pub award_count: u64,
    /// `true` if the badge is earned per-tag rather than site-wide.
    pub tag_based: bool,
}

impl Badge {
    /// Classification derived from `tag_based`; no second field is stored.
    pub fn badge_type(&self) -> BadgeType {
        if self.tag_based {
            BadgeType::Tag
        } else {
            BadgeType::General
        }
    }

    /// Bind a badge identity to a site, ahead of the remote decode.
    ///
    /// Returns a [`BadgeRef`] carrying the parsed numeric id and a copy of
    /// the site's API key — never a live reference into the site. The
    /// reference is completed into a full `Badge` by
    /// [`StackClient::badge`](crate::StackClient::badge).
    ///
    /// Fails with [`Error::InvalidArgument`] if `badge_id` is empty or
    /// non-numeric, or if `site` carries no API identity.
    pub fn with_site(site: &Site, badge_id: &str) -> Result<BadgeRef, Error> {
        if badge_id.is_empty() {
            return Err(Error::invalid_argument("badge id must not be empty"));
        }
        let id: u64 = badge_id.parse().map_err(|_| {
            Error::invalid_argument(format!("badge id '{badge_id}' is not numeric"))
        })?;
        let Some(site_key) = site.identity() else {
            return Err(Error::invalid_argument(format!(
                "site '{}' has no API identity to scope a badge to",
                site.name
            )));
        };
        Ok(BadgeRef {
            site: site_key.to_owned(),
            id,
        })
    }
}

impl RemoteObject for Badge {
    type Id = u64;

    fn identity(&self) -> Option<&u64> {
        Some(&self.id)
    }
}

/// Identity-only badge handle: a badge id scoped to a site, before any
/// remote attributes exist. Keeps the no-unknown-rank invariant intact —
/// a `Badge` is only ever constructed from a complete payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BadgeRef {
    site: String,
    id: u64,
}

impl BadgeRef {
    /// The scoping site's API key (copied, non-owning).
    pub fn site(&self) -> &str {
        &self.site
    }

    /// The badge's numeric id.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl RemoteObject for BadgeRef {
    type Id = u64;

    fn identity(&self) -> Option<&u64> {
        Some(&self.id)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
