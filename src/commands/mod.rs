//! Command handler layer.
//!
//! ## Files
//! - `fetch.rs` — the single fetch flow (config → range → token → queries).
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod fetch;

pub use fetch::handle_fetch;
