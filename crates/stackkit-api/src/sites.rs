// Site endpoints
//
// Site listing is network-scoped (not site-scoped): `GET /sites` returns
// every site on the network. The fuzzy name lookup is resolved client-side
// over that listing, the API has no server-side name search.

use tracing::debug;

use crate::client::StackClient;
use crate::error::Error;
use crate::models::Site;

impl StackClient {
    /// List every site on the network.
    ///
    /// `GET /sites`
    pub async fn sites(&self) -> Result<Vec<Site>, Error> {
        let url = self.api_url("sites")?;
        debug!("listing sites");
        self.get(url).await
    }

    /// Find the single best site whose name matches `name`.
    ///
    /// Matching is case-insensitive: an exact name match wins, otherwise
    /// the site whose name contains `name` as a substring, preferring the
    /// shortest name and breaking ties lexicographically. The outcome is
    /// deterministic for a given site listing.
    ///
    /// No match is a *successful* `Ok(None)`, not an error; the error path
    /// is reserved for transport and decode failures.
    ///
    /// Fails synchronously with [`Error::InvalidArgument`] if `name` is
    /// empty — no request is issued.
    pub async fn site_named_like(&self, name: &str) -> Result<Option<Site>, Error> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Err(Error::invalid_argument("site name must not be empty"));
        }

        let sites = self.sites().await?;
        debug!(candidates = sites.len(), query = %name, "matching site by name");
        Ok(best_match(&needle, sites))
    }
}

/// Pick the best match for an already-lowercased query.
fn best_match(needle: &str, sites: Vec<Site>) -> Option<Site> {
    if let Some(pos) = sites
        .iter()
        .position(|site| site.name.to_lowercase() == needle)
    {
        return sites.into_iter().nth(pos);
    }

    sites
        .into_iter()
        .filter(|site| site.name.to_lowercase().contains(needle))
        .min_by(|a, b| {
            a.name
                .len()
                .cmp(&b.name.len())
                .then_with(|| a.name.cmp(&b.name))
        })
}
