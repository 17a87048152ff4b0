/// Adapters producing dependency license listings from cargo-license
mod cargo_license_source;
mod listing_parser;

pub use cargo_license_source::CargoLicenseSource;
pub use listing_parser::parse_listing;
