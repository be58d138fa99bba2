//! Table and JSON rendering for command output.

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use stackkit_api::{Badge, BadgeRank, BadgeType, Site, SiteState};

use crate::error::CliError;

// ── Rows ─────────────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct SiteRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "State")]
    state: &'static str,
    #[tabled(rename = "Launched")]
    launched: String,
    #[tabled(rename = "Audience")]
    audience: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&Site> for SiteRow {
    fn from(site: &Site) -> Self {
        Self {
            name: site.name.clone(),
            state: state_label(site.site_state),
            launched: site.launch_date.format("%Y-%m-%d").to_string(),
            audience: site.audience.clone(),
            url: site
                .site_url
                .as_ref()
                .map_or_else(String::new, ToString::to_string),
        }
    }
}

#[derive(Tabled)]
pub struct BadgeRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Awarded")]
    awarded: u64,
    #[tabled(rename = "Scope")]
    scope: &'static str,
}

impl From<&Badge> for BadgeRow {
    fn from(badge: &Badge) -> Self {
        Self {
            id: badge.id,
            name: badge.name.clone(),
            rank: rank_label(badge.rank),
            awarded: badge.award_count,
            scope: match badge.badge_type() {
                BadgeType::General => "general",
                BadgeType::Tag => "tag",
            },
        }
    }
}

// ── Labels ───────────────────────────────────────────────────────────

fn state_label(state: SiteState) -> &'static str {
    match state {
        SiteState::Normal => "normal",
        SiteState::OpenBeta => "open beta",
        SiteState::ClosedBeta => "closed beta",
        SiteState::LinkedMeta => "meta",
    }
}

/// Colorized only when stdout is a terminal; piped output stays plain.
fn rank_label(rank: BadgeRank) -> String {
    match rank {
        BadgeRank::Bronze => "bronze"
            .if_supports_color(Stream::Stdout, |s| s.red())
            .to_string(),
        BadgeRank::Silver => "silver"
            .if_supports_color(Stream::Stdout, |s| s.white())
            .to_string(),
        BadgeRank::Gold => "gold"
            .if_supports_color(Stream::Stdout, |s| s.yellow())
            .to_string(),
    }
}

// ── Printers ─────────────────────────────────────────────────────────

pub fn print_table<'a, R, T, I>(items: I)
where
    R: Tabled + From<&'a T>,
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    let rows: Vec<R> = items.into_iter().map(R::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{table}");
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_label_is_plain_when_stdout_is_not_a_terminal() {
        // Test harness stdout is captured, never a tty, so labels must
        // carry no ANSI escape sequences.
        for rank in [BadgeRank::Bronze, BadgeRank::Silver, BadgeRank::Gold] {
            let label = rank_label(rank);
            assert!(
                !label.contains('\u{1b}'),
                "expected plain label, got escape codes: {label:?}"
            );
        }
        assert_eq!(rank_label(BadgeRank::Gold), "gold");
    }
}
