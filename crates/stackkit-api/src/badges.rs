// Badge endpoints
//
// Badges are site-scoped: every request carries the site's API key as the
// `site` query parameter.

use tracing::debug;

use crate::client::StackClient;
use crate::error::Error;
use crate::models::{Badge, BadgeRef, RemoteObject, Site};

impl StackClient {
    /// List the badges of a site.
    ///
    /// `GET /badges?site={key}`
    ///
    /// Fails synchronously with [`Error::InvalidArgument`] if `site`
    /// carries no API identity.
    pub async fn badges(&self, site: &Site) -> Result<Vec<Badge>, Error> {
        let Some(site_key) = site.identity() else {
            return Err(Error::invalid_argument(format!(
                "site '{}' has no API identity",
                site.name
            )));
        };

        let mut url = self.api_url("badges")?;
        url.query_pairs_mut().append_pair("site", site_key);
        debug!(site = site_key, "listing badges");
        self.get(url).await
    }

    /// Fetch the badge a [`BadgeRef`] points at, completing the two-phase
    /// construction started by [`Badge::with_site`].
    ///
    /// `GET /badges/{id}?site={key}`
    ///
    /// An unknown badge id is a successful `Ok(None)` (the API returns an
    /// empty item list), matching the site lookup's not-found convention.
    pub async fn badge(&self, badge_ref: &BadgeRef) -> Result<Option<Badge>, Error> {
        let mut url = self.api_url(&format!("badges/{}", badge_ref.id()))?;
        url.query_pairs_mut().append_pair("site", badge_ref.site());
        debug!(site = badge_ref.site(), id = badge_ref.id(), "fetching badge");

        let items: Vec<Badge> = self.get(url).await?;
        Ok(items.into_iter().next())
    }
}
