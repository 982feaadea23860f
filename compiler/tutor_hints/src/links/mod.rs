//! Reference links into the documentation catalog.
//!
//! A link is a catalog path plus query parameters describing the learner's
//! code (`typemismatch?typeonename=Float&typetwoname=int&varname=x`). Link
//! strategies extract the same facts the hint strategies do, and
//! [`LinkAssembler`] encodes them and applies global options.
//!
//! Links carry no host; see [`ReferenceLink::with_base`].

mod arrays;
mod methods;
mod names;
mod query;
mod text;

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{ContextError, DiagnosticKind, DiagnosticSite};

pub use query::Query;

/// Produces the reference query for the diagnostic kinds it declares.
pub trait LinkStrategy: Send + Sync {
    /// Diagnostic kinds this strategy links.
    fn kinds(&self) -> &'static [DiagnosticKind];

    /// Build the unencoded query for one diagnostic.
    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError>;
}

/// Registry of link strategies, at most one per kind.
pub struct LinkRegistry {
    strategies: Vec<Arc<dyn LinkStrategy>>,
    /// Index from kind to strategy index. Later registrations win.
    by_kind: FxHashMap<DiagnosticKind, usize>,
}

impl Default for LinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkRegistry {
    pub fn new() -> Self {
        LinkRegistry {
            strategies: Vec::new(),
            by_kind: FxHashMap::default(),
        }
    }

    /// A registry with every built-in link strategy.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(arrays::MissingArrayDimension);
        registry.register(arrays::IllegalArrayDimension);
        registry.register(arrays::ArrayDimensionWithInitializer);
        registry.register(methods::UndefinedMethod);
        registry.register(methods::ParameterMismatch);
        registry.register(methods::MissingReturn);
        registry.register(methods::NonStaticFromStatic);
        registry.register(methods::MethodCallOnWrongType);
        registry.register(methods::VariableDeclarators);
        registry.register(names::TypeMismatch);
        registry.register(names::UndefinedType);
        registry.register(names::IncorrectVariableDeclaration);
        registry.register(names::UndefinedVariable);
        registry.register(names::UninitializedVariable);
        registry.register(names::UnexpectedToken);
        registry
    }

    /// Register a strategy for all kinds it declares, replacing any earlier
    /// strategy for those kinds.
    pub fn register<S: LinkStrategy + 'static>(&mut self, strategy: S) {
        let strategy = Arc::new(strategy);
        let idx = self.strategies.len();

        for &kind in strategy.kinds() {
            if self.by_kind.insert(kind, idx).is_some() {
                tracing::trace!(%kind, "link strategy replaced");
            }
        }

        self.strategies.push(strategy);
    }

    /// The query for a diagnostic of `kind` at `site`, if one can be built.
    pub fn query_for(&self, kind: DiagnosticKind, site: &DiagnosticSite<'_>) -> Option<Query> {
        let Some(&idx) = self.by_kind.get(&kind) else {
            tracing::trace!(%kind, "no link strategy registered");
            return None;
        };

        match self.strategies[idx].link(site) {
            Ok(query) => Some(query),
            Err(error) => {
                tracing::debug!(%kind, anchor = %site.anchor(), %error, "link context not resolved");
                None
            }
        }
    }

    /// Check if a strategy serves `kind`.
    pub fn has_strategy_for(&self, kind: DiagnosticKind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    /// Get the number of kinds with a strategy.
    pub fn kind_count(&self) -> usize {
        self.by_kind.len()
    }
}

impl fmt::Debug for LinkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkRegistry")
            .field("strategy_count", &self.strategies.len())
            .field("kinds", &self.by_kind.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// An encoded catalog path and query, without host.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ReferenceLink(String);

impl ReferenceLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The catalog page, without query.
    pub fn path(&self) -> &str {
        self.0.split_once('?').map_or(self.0.as_str(), |(path, _)| path)
    }

    /// Full address under `base`, e.g. `https://example.org/ref/`.
    pub fn with_base(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for ReferenceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds [`ReferenceLink`]s with the global link options applied.
#[derive(Debug)]
pub struct LinkAssembler {
    registry: LinkRegistry,
    /// Pages will be shown inside the editor.
    embedded: bool,
}

impl LinkAssembler {
    /// An assembler over the built-in strategies.
    pub fn new(embedded: bool) -> Self {
        Self::with_registry(LinkRegistry::builtin(), embedded)
    }

    pub fn with_registry(registry: LinkRegistry, embedded: bool) -> Self {
        LinkAssembler { registry, embedded }
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    pub fn registry(&self) -> &LinkRegistry {
        &self.registry
    }

    /// Link for a diagnostic of `kind` at `site`.
    pub fn link(&self, kind: DiagnosticKind, site: &DiagnosticSite<'_>) -> Option<ReferenceLink> {
        self.registry
            .query_for(kind, site)
            .map(|query| self.finish(&query))
    }

    /// Link for an extra `}`, from the source text up to the error line.
    pub fn extraneous_closing_brace(&self, text_above_error: &str) -> Option<ReferenceLink> {
        text::extraneous_closing_brace(text_above_error).map(|query| self.finish(&query))
    }

    /// Link for a malformed method header, from the source text up to the
    /// error line.
    pub fn incorrect_method_declaration(&self, text_above_error: &str) -> Option<ReferenceLink> {
        text::incorrect_method_declaration(text_above_error).map(|query| self.finish(&query))
    }

    fn finish(&self, query: &Query) -> ReferenceLink {
        ReferenceLink(query.encode(self.embedded))
    }
}
