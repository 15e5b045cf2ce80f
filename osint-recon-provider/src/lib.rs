//! # osint-recon-provider
//!
//! IP geolocation provider abstraction for OSINT Recon.
//!
//! Wraps several free geolocation APIs behind one [`GeoProvider`] trait so
//! the resolver can walk them in a configured fallback order:
//!
//! | Provider | Id | Failure signal |
//! |----------|----|----------------|
//! | [ipwho.is](https://ipwho.is) | `ipwhois` | `success: false` |
//! | [ipapi.co](https://ipapi.co) | `ipapi.co` | `error: true` |
//! | [ip-api.com](http://ip-api.com) | `ip-api` | `status: "fail"` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use osint_recon_provider::{create_provider, GeoProviderKind, http::create_http_client};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client();
//! let provider = create_provider(GeoProviderKind::IpWhois, client, Duration::from_secs(15));
//! let payload = provider.lookup("8.8.8.8").await?;
//! println!("{} -> {:?}", payload.ip, payload.country);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every lookup returns [`ProviderResult<GeoPayload>`]. All variants of
//! [`ProviderError`] are transient from the resolver's point of view: it
//! records the reason and falls through to the next provider in order.

mod error;
mod factory;
pub mod http;
mod providers;
mod traits;
mod types;

pub use error::{ProviderError, ProviderResult};
pub use factory::{
    create_provider, create_provider_chain, default_provider_order, GeoProviderKind,
};
pub use traits::GeoProvider;
pub use types::GeoPayload;

pub use providers::{IpApiProvider, IpWhoisProvider, IpapiCoProvider};
