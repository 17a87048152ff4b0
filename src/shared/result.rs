/// Type alias for Result with anyhow::Error as the error type.
/// Adapters and use cases share this alias so errors compose with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
