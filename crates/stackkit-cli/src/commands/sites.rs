//! Site command handlers.

use stackkit_api::StackClient;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, SiteRow};

pub async fn list(client: &StackClient, global: &GlobalOpts) -> Result<(), CliError> {
    let sites = client
        .sites()
        .await
        .map_err(|e| CliError::api(e, client.base_url()))?;

    if global.json {
        output::print_json(&sites)?;
    } else {
        output::print_table::<SiteRow, _, _>(&sites);
    }
    Ok(())
}

pub async fn find(client: &StackClient, name: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let site = super::resolve_site(client, name).await?;

    if global.json {
        output::print_json(&site)?;
    } else {
        output::print_table::<SiteRow, _, _>(std::iter::once(&site));
    }
    Ok(())
}
