//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber used by every actor.
//!
//! The format is compact and hides the module prefix (`with_target(false)`); actors log an
//! `entity_type` field instead, so lines stay short:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO create_order: Transaction committed entity_type="Product" ops=2
//! INFO create_order: Created entity_type="Order" id=1 size=1
//! WARN create_order: Transaction rolled back entity_type="Product" error=Entity error: ...
//! ```
//!
//! `RUST_LOG` wins over the default filter when it is set:
//!
//! ```bash
//! RUST_LOG=debug cargo run                              # full request payloads
//! RUST_LOG=actor_framework=debug,info cargo run         # only the actor loop
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `default_filter` is an `EnvFilter` directive (for example `"info"`) used when `RUST_LOG` is
/// unset or unparsable. Fails if a global subscriber is already installed.
pub fn setup_tracing(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
}
