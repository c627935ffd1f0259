//! # site
//!
//! WebAssembly behavior layer for the portfolio page. Resolves the page's
//! fixed element contract, installs listeners, observers, timers and
//! animation-frame callbacks, and applies the [`page::effect::Effect`]s that
//! the `page` crate's behaviors return.
//!
//! Everything that touches the browser is compiled only with the `browser`
//! feature; without it the crate builds natively so the selector contract and
//! error types can be tested with plain `cargo test`.

pub mod error;
pub mod selectors;

#[cfg(feature = "browser")]
mod app;
#[cfg(feature = "browser")]
mod behaviors;
#[cfg(feature = "browser")]
mod dom;
#[cfg(feature = "browser")]
mod listeners;
#[cfg(feature = "browser")]
mod storage;

#[cfg(feature = "browser")]
pub use app::{start, teardown};
