//! Command handlers for the `stack` binary.

pub mod badges;
pub mod sites;

use stackkit_api::{Site, StackClient};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

pub async fn dispatch(
    command: Command,
    client: &StackClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Sites => sites::list(client, global).await,
        Command::Site { name } => sites::find(client, &name, global).await,
        Command::Badges { site } => badges::list(client, &site, global).await,
        Command::Badge { site, id } => badges::show(client, &site, &id, global).await,
    }
}

/// Resolve a site argument via the fuzzy name lookup.
///
/// The API reports "no match" as a successful empty result; the CLI turns
/// that into a `NotFound` with exit code 4.
pub(crate) async fn resolve_site(client: &StackClient, name: &str) -> Result<Site, CliError> {
    client
        .site_named_like(name)
        .await
        .map_err(|e| CliError::api(e, client.base_url()))?
        .ok_or_else(|| CliError::NotFound {
            resource_type: "site".into(),
            identifier: name.into(),
            list_command: "sites".into(),
        })
}
