// stackkit-api: Async Rust client for the Stack Exchange API (sites + badges)

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod badges;
mod sites;

pub use client::StackClient;
pub use error::Error;
pub use models::{Badge, BadgeRank, BadgeRef, BadgeType, RemoteObject, Site, SiteState};
pub use transport::{DEFAULT_API_URL, TransportConfig};
