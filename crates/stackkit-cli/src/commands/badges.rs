//! Badge command handlers.

use stackkit_api::{Badge, StackClient};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, BadgeRow};

pub async fn list(client: &StackClient, site: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let site = super::resolve_site(client, site).await?;

    let badges = client
        .badges(&site)
        .await
        .map_err(|e| CliError::api(e, client.base_url()))?;

    if global.json {
        output::print_json(&badges)?;
    } else {
        output::print_table::<BadgeRow, _, _>(&badges);
    }
    Ok(())
}

pub async fn show(
    client: &StackClient,
    site: &str,
    id: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let site = super::resolve_site(client, site).await?;

    let badge_ref =
        Badge::with_site(&site, id).map_err(|e| CliError::api(e, client.base_url()))?;

    let badge = client
        .badge(&badge_ref)
        .await
        .map_err(|e| CliError::api(e, client.base_url()))?
        .ok_or_else(|| CliError::NotFound {
            resource_type: "badge".into(),
            identifier: id.into(),
            list_command: format!("badges {}", badge_ref.site()),
        })?;

    if global.json {
        output::print_json(&badge)?;
    } else {
        output::print_table::<BadgeRow, _, _>(std::iter::once(&badge));
    }
    Ok(())
}
