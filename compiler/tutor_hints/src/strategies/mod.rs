//! Hint strategies and their registry.
//!
//! Each strategy serves one or more diagnostic kinds. The registry maps a
//! kind to its strategies; kinds with no strategy simply get no hints.

mod arrays;
mod methods;
mod types;

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{ContextError, DemoValues, DiagnosticKind, DiagnosticSite, Hint};

use arrays::{ArrayDimensionWithInitializer, IllegalArrayDimension, MissingArrayDimension};
use methods::{MissingReturn, ParameterMismatch, UndefinedMethod};
use types::{TypeMismatch, UndefinedType};

/// Produces hints for the diagnostic kinds it declares.
pub trait HintStrategy: Send + Sync {
    /// Diagnostic kinds this strategy explains.
    fn kinds(&self) -> &'static [DiagnosticKind];

    /// Build the hints for one diagnostic, in presentation order.
    ///
    /// Any missing piece of context is an error; a partial hint is never
    /// returned.
    fn hints(
        &self,
        site: &DiagnosticSite<'_>,
        demo: &mut DemoValues<'_>,
    ) -> Result<Vec<Hint>, ContextError>;
}

/// Registry of hint strategies, keyed by diagnostic kind.
pub struct HintRegistry {
    /// All registered strategies (stored once, referenced by kind).
    strategies: Vec<Arc<dyn HintStrategy>>,
    /// Index from kind to strategy indices, in registration order.
    by_kind: FxHashMap<DiagnosticKind, Vec<usize>>,
}

impl Default for HintRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HintRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        HintRegistry {
            strategies: Vec::new(),
            by_kind: FxHashMap::default(),
        }
    }

    /// A registry with every built-in strategy.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(MissingArrayDimension);
        registry.register(IllegalArrayDimension);
        registry.register(ArrayDimensionWithInitializer);
        registry.register(UndefinedMethod);
        registry.register(ParameterMismatch);
        registry.register(MissingReturn);
        registry.register(TypeMismatch);
        registry.register(UndefinedType);
        registry
    }

    /// Register a strategy for all kinds it declares.
    pub fn register<S: HintStrategy + 'static>(&mut self, strategy: S) {
        let strategy = Arc::new(strategy);
        let idx = self.strategies.len();

        for &kind in strategy.kinds() {
            self.by_kind.entry(kind).or_default().push(idx);
        }

        self.strategies.push(strategy);
    }

    /// Hints for a diagnostic of `kind` at `site`.
    ///
    /// Empty when no strategy serves `kind`, or when any strategy cannot
    /// resolve its context.
    pub fn hints_for(
        &self,
        kind: DiagnosticKind,
        site: &DiagnosticSite<'_>,
        demo: &mut DemoValues<'_>,
    ) -> Vec<Hint> {
        let Some(indices) = self.by_kind.get(&kind) else {
            tracing::trace!(%kind, "no hint strategy registered");
            return Vec::new();
        };

        let mut hints = Vec::new();
        for &idx in indices {
            match self.strategies[idx].hints(site, demo) {
                Ok(found) => hints.extend(found),
                Err(error) => {
                    tracing::debug!(%kind, anchor = %site.anchor(), %error, "hint context not resolved");
                    return Vec::new();
                }
            }
        }
        hints
    }

    /// Check if any strategy serves `kind`.
    pub fn has_strategy_for(&self, kind: DiagnosticKind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    /// Get the number of registered strategies.
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Get the number of kind -> strategy mappings.
    pub fn mapping_count(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }
}

impl std::fmt::Debug for HintRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HintRegistry")
            .field("strategy_count", &self.strategy_count())
            .field("kinds", &self.by_kind.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
