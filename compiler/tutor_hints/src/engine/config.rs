//! Engine configuration.

/// Show reference pages embedded in the editor: `1` or `true`.
const EMBEDDED_VAR: &str = "TUTOR_EMBEDDED";
/// Fixed demo-value seed, a `u64`.
const SEED_VAR: &str = "TUTOR_SEED";

/// Options for a [`HintEngine`](super::HintEngine).
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct EngineConfig {
    /// Reference pages will be embedded; links carry `embed=true`.
    pub embedded: bool,
    /// Seed for demo values. `None` draws from the thread RNG.
    ///
    /// In a batch, the diagnostic at index `i` uses `seed + i`.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Read `TUTOR_EMBEDDED` and `TUTOR_SEED` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` instead of the process
    /// environment. Unparseable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let embedded = lookup(EMBEDDED_VAR).is_some_and(|value| {
            let value = value.trim();
            value == "1" || value.eq_ignore_ascii_case("true")
        });

        let seed = lookup(SEED_VAR).and_then(|value| match value.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(error) => {
                tracing::debug!(var = SEED_VAR, %value, %error, "ignoring invalid seed");
                None
            }
        });

        EngineConfig { embedded, seed }
    }

    #[must_use]
    pub fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
