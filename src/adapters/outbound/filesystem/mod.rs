/// Filesystem adapters for reading pre-generated listings
mod listing_file_source;

pub use listing_file_source::ListingFileSource;
