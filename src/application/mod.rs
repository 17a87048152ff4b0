/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod services;
pub mod use_cases;
