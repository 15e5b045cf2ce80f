//! Concrete geolocation providers.

mod ip_api;
mod ipapi_co;
mod ipwhois;

pub use ip_api::IpApiProvider;
pub use ipapi_co::IpapiCoProvider;
pub use ipwhois::IpWhoisProvider;
