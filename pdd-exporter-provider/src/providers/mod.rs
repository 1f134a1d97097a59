//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod yandex_pdd;

pub use yandex_pdd::YandexPddProvider;
