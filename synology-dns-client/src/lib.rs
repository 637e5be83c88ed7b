//! # synology-dns-client
//!
//! Client for the Synology DSM WebAPI: session negotiation against
//! `SYNO.API.Auth` (whose supported version is unknown in advance) and zone,
//! record and SOA management through `SYNO.DNSServer.*`.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use synology_dns_client::{
//!     CreateRecordRequest, Credentials, SessionNegotiator, SynologyConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SynologyConfig::new("https://nas.local:5001")?;
//!     let mut negotiator = SessionNegotiator::new(config)?;
//!
//!     // 1. Log in; auth API versions 7, 6, 3, 2 are tried in turn
//!     negotiator
//!         .login_dns_server(&Credentials::new("admin", "secret"))
//!         .await?;
//!
//!     // 2. Work with zones and records
//!     let dns = negotiator.dns_server()?;
//!     for zone in dns.list_zones().await? {
//!         println!("{} ({:?})", zone.zone_name, zone.zone_type);
//!     }
//!     dns.create_record(&CreateRecordRequest::new("example.com", "www", "A", "192.168.1.10"))
//!         .await?;
//!
//!     // 3. Log out
//!     negotiator.logout().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, SynologyError>`](SynologyError).
//! Remote `success=false` responses surface as [`SynologyError::Api`] with the
//! remote code and its [`ErrorCategory`]. Version fallback happens only during
//! login and logout; resource calls are never retried.

mod auth;
mod config;
mod dnsserver;
mod error;
mod http_client;
mod types;
mod utils;
mod webapi;

pub use auth::SessionNegotiator;
pub use config::{
    DEFAULT_AUTH_VERSIONS, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    SynologyConfig, SynologyConfigBuilder,
};
pub use dnsserver::{
    CreateMasterZoneRequest, CreateRecordRequest, DeleteRecordRequest, DnsServerClient,
    DomainType, Record, UpdateRecordRequest, UpdateSoaRequest, Zone, ZoneFileType, ZoneType,
    encoding,
};
pub use error::{ErrorCategory, Result, SynologyError};
pub use http_client::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{
    ApiParams, ApiResponse, Credentials, ParamValue, Session, SessionId, SessionInfo,
    SessionPurpose, Verb,
};
pub use webapi::WebApiClient;
