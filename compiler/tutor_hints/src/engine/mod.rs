//! The engine: hints and links for diagnostics over one syntax tree.

mod config;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use tutor_ir::{NodeId, SyntaxTree};

pub use config::EngineConfig;

use crate::{
    DemoValues, Diagnostic, DiagnosticKind, DiagnosticSite, Hint, HintRegistry, LinkAssembler,
    LinkRegistry, ReferenceLink,
};

/// Everything produced for one diagnostic.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticHelp {
    /// Candidate fixes, in presentation order.
    pub hints: Vec<Hint>,
    pub link: Option<ReferenceLink>,
}

impl DiagnosticHelp {
    /// Check if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty() && self.link.is_none()
    }
}

/// Hint and link synthesis over built-in or custom registries.
///
/// Registries are built once; every method takes `&self`, so one engine can
/// serve many threads.
#[derive(Debug)]
pub struct HintEngine {
    config: EngineConfig,
    hints: HintRegistry,
    links: LinkAssembler,
}

impl Default for HintEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl HintEngine {
    /// An engine with every built-in strategy.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_registries(config, HintRegistry::builtin(), LinkRegistry::builtin())
    }

    pub fn with_registries(config: EngineConfig, hints: HintRegistry, links: LinkRegistry) -> Self {
        let links = LinkAssembler::with_registry(links, config.embedded);
        HintEngine {
            config,
            hints,
            links,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The assembler, for the text-based links that need no tree.
    pub fn link_assembler(&self) -> &LinkAssembler {
        &self.links
    }

    /// Hints for a diagnostic of `kind` anchored at `anchor`.
    ///
    /// Demo values come from the configured seed, or the thread RNG.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %kind))]
    pub fn synthesize_hints(
        &self,
        kind: DiagnosticKind,
        arguments: &[String],
        tree: &SyntaxTree,
        anchor: NodeId,
    ) -> Vec<Hint> {
        let mut rng = demo_rng(self.config.seed);
        self.synthesize_hints_with(kind, arguments, tree, anchor, &mut *rng)
    }

    /// Same as [`synthesize_hints`](Self::synthesize_hints), drawing demo
    /// values from `rng`.
    pub fn synthesize_hints_with(
        &self,
        kind: DiagnosticKind,
        arguments: &[String],
        tree: &SyntaxTree,
        anchor: NodeId,
        rng: &mut dyn RngCore,
    ) -> Vec<Hint> {
        let site = DiagnosticSite::new(tree, anchor, arguments);
        let mut demo = DemoValues::new(rng);
        self.hints.hints_for(kind, &site, &mut demo)
    }

    /// Reference link for a diagnostic of `kind` anchored at `anchor`.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %kind))]
    pub fn synthesize_reference_link(
        &self,
        kind: DiagnosticKind,
        arguments: &[String],
        tree: &SyntaxTree,
        anchor: NodeId,
    ) -> Option<ReferenceLink> {
        let site = DiagnosticSite::new(tree, anchor, arguments);
        self.links.link(kind, &site)
    }

    /// Hints and link for `diagnostic`, anchored at the deepest node
    /// covering its span.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %diagnostic.kind))]
    pub fn explain(&self, diagnostic: &Diagnostic, tree: &SyntaxTree) -> DiagnosticHelp {
        let mut rng = demo_rng(self.config.seed);
        self.explain_with(diagnostic, tree, &mut *rng)
    }

    /// [`explain`](Self::explain) for every diagnostic, in parallel.
    ///
    /// Output order matches input order. With a fixed seed, the diagnostic at
    /// index `i` draws demo values from `seed + i`, so results do not depend
    /// on scheduling.
    #[tracing::instrument(level = "debug", skip_all, fields(count = diagnostics.len()))]
    pub fn explain_all(&self, diagnostics: &[Diagnostic], tree: &SyntaxTree) -> Vec<DiagnosticHelp> {
        diagnostics
            .par_iter()
            .enumerate()
            .map(|(index, diagnostic)| {
                let seed = self.config.seed.map(|seed| seed.wrapping_add(index as u64));
                let mut rng = demo_rng(seed);
                self.explain_with(diagnostic, tree, &mut *rng)
            })
            .collect()
    }

    fn explain_with(
        &self,
        diagnostic: &Diagnostic,
        tree: &SyntaxTree,
        rng: &mut dyn RngCore,
    ) -> DiagnosticHelp {
        let Some(anchor) = tree.node_covering(diagnostic.span) else {
            tracing::trace!(kind = %diagnostic.kind, span = ?diagnostic.span, "no node covers diagnostic");
            return DiagnosticHelp::default();
        };

        let kind = diagnostic.kind;
        let arguments = &diagnostic.arguments;
        DiagnosticHelp {
            hints: self.synthesize_hints_with(kind, arguments, tree, anchor, rng),
            link: self.synthesize_reference_link(kind, arguments, tree, anchor),
        }
    }
}

/// Demo-value source: seeded when reproducibility is asked for.
fn demo_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}
