//! Domain layer for license auditing
//!
//! Pure data and decision logic with no I/O: dependency records, the
//! deny-list policy, violation classification and license statistics.
pub mod domain;
pub mod policies;
pub mod services;
