//! Tutor Hints - learner-facing explanations for compiler diagnostics.
//!
//! A diagnostic from the front end is a kind, a few argument strings and a
//! source range. This crate turns it into:
//! - a list of [`Hint`]s: one shared problem statement, several candidate
//!   fixes, each with "incorrect" and "corrected" code examples
//! - at most one [`ReferenceLink`] into the reference catalog
//!
//! # Architecture
//!
//! Both outputs are produced by strategies registered per [`DiagnosticKind`]:
//! - [`HintRegistry`] dispatches to [`HintStrategy`] implementations
//! - [`LinkRegistry`] dispatches to [`LinkStrategy`] implementations, and
//!   [`LinkAssembler`] applies global link options
//! - [`HintEngine`] ties both together with configuration and batching
//!
//! Strategies recover their context by walking parent links from the anchor
//! node (see the `context` module). A strategy that cannot find the shape it
//! expects produces nothing rather than a misleading hint.
//!
//! # Tracing
//!
//! Enable tracing with environment variables:
//! - `RUST_LOG=tutor_hints=debug` - strategy failures and engine entry points
//! - `RUST_LOG=tutor_hints=trace` - dispatch misses as well

mod context;
mod demo;
mod diagnostic;
mod engine;
mod error;
mod hint;
mod links;
mod snippet;
mod strategies;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

pub use context::DiagnosticSite;
pub use demo::DemoValues;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use engine::{DiagnosticHelp, EngineConfig, HintEngine};
pub use error::ContextError;
pub use hint::Hint;
pub use links::{LinkAssembler, LinkRegistry, LinkStrategy, Query, ReferenceLink};
pub use snippet::{method_declaration, method_signature, simple_name, var_description};
pub use strategies::{HintRegistry, HintStrategy};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debugging.
///
/// Call this once at program start. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
