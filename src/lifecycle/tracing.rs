//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber filtered by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per mutation
//! RUST_LOG=debug cargo run    # payloads and storage writes
//! ```
//!
//! Every actor logs with the same structured fields, so one filter covers all of them:
//!
//! ```text
//! INFO Created entity_type="Account" id=customer:a@x.com size=1
//! INFO checkout: Authorizing payment amount_minor=26250 currency=INR
//! INFO Created entity_type="Order" id=order_1736412345678 size=1
//! INFO Cleared entity_type="CartLine"
//! ```
//!
//! Client methods are wrapped in `#[instrument]` spans, which the compact format prints
//! inline (`checkout:`, `submit:`).

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
