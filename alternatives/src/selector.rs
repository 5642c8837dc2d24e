use crate::config_store::{ConfigStore, StoreError};
use crate::events::{EventSink, REASON_INVALID_CONFIG};
use crate::metrics_defs::{CONFIG_LOAD_FAILED, CONFIG_LOAD_OK};
use crate::parser::{Alternatives, ParseError, parse_alternatives};
use expander::{AlternativeSelector, ExpansionOption, GroupId};
use shared::counter;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Name of the config object that stores the alternatives configuration.
pub const ALTERNATIVES_CONFIG_NAME: &str = "cluster-scaler-alternative-selector";

/// Key inside the config object that holds the serialized mapping.
pub const ALTERNATIVES_CONFIG_KEY: &str = "alternatives";

/// Everything that can end a reload without a usable mapping.
///
/// Stays internal: the public operations absorb it and return an empty
/// result instead.
#[derive(thiserror::Error, Debug)]
enum ReloadError {
    #[error("alternatives config object not available: {0}")]
    Fetch(#[from] StoreError),

    // The object exists but carries no alternatives key. Not a failure,
    // the feature is simply not enabled.
    #[error("config object has no alternatives key")]
    Unconfigured,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Picks alternative node groups based on operator-defined configuration.
///
/// Holds no configuration state between calls; every query fetches and
/// parses the mapping anew. The only state that outlives a call is the pair
/// of health counters.
pub struct Selector {
    store: Arc<dyn ConfigStore>,
    events: Arc<dyn EventSink>,
    ok_config_loads: AtomicU64,
    bad_config_loads: AtomicU64,
}

impl Selector {
    pub fn new(store: Arc<dyn ConfigStore>, events: Arc<dyn EventSink>) -> Self {
        Selector {
            store,
            events,
            ok_config_loads: AtomicU64::new(0),
            bad_config_loads: AtomicU64::new(0),
        }
    }

    /// Number of configuration loads that parsed successfully.
    pub fn ok_config_loads(&self) -> u64 {
        self.ok_config_loads.load(Ordering::Relaxed)
    }

    /// Number of configuration loads rejected as empty or malformed.
    pub fn bad_config_loads(&self) -> u64 {
        self.bad_config_loads.load(Ordering::Relaxed)
    }

    /// Fetches and parses the current alternatives mapping.
    ///
    /// Exactly one health counter moves per parse attempt. A missing object
    /// or an absent data key moves neither and raises no event; only a parse
    /// failure is reported to the operator.
    fn reload(&self) -> Result<Alternatives, ReloadError> {
        let object = self.store.get(ALTERNATIVES_CONFIG_NAME)?;

        let Some(raw) = object.data.get(ALTERNATIVES_CONFIG_KEY) else {
            return Err(ReloadError::Unconfigured);
        };

        match parse_alternatives(raw) {
            Ok(alternatives) => {
                self.ok_config_loads.fetch_add(1, Ordering::Relaxed);
                counter!(CONFIG_LOAD_OK).increment(1);
                tracing::debug!(object = %object.name, "loaded alternatives configuration");
                Ok(alternatives)
            }
            Err(err) => {
                let message =
                    format!("wrong configuration for alternatives: {err}. Ignoring update.");
                self.events
                    .warning(&object, REASON_INVALID_CONFIG, &message);
                tracing::warn!(object = %object.name, "{message}");
                self.bad_config_loads.fetch_add(1, Ordering::Relaxed);
                counter!(CONFIG_LOAD_FAILED).increment(1);
                Err(err.into())
            }
        }
    }
}

impl AlternativeSelector for Selector {
    /// Never surfaces an error: a failed reload yields an empty result,
    /// with the failure observable through the warning sink and the health
    /// counters. With `best` absent the configuration is not even fetched.
    fn alternative_options(
        &self,
        options: &[ExpansionOption],
        best: Option<&ExpansionOption>,
    ) -> Vec<ExpansionOption> {
        let Some(best) = best else {
            return Vec::new();
        };

        let Ok(alternatives) = self.reload() else {
            return Vec::new();
        };

        let Some(configured) = alternatives.get(&best.group_id) else {
            return Vec::new();
        };

        // Output follows the configured order, not the candidate order.
        // The first candidate wins when a group id appears more than once;
        // ids without a matching candidate are skipped.
        configured
            .iter()
            .filter_map(|alt| options.iter().find(|option| option.group_id == *alt))
            .cloned()
            .collect()
    }

    /// Same error absorption as `alternative_options`: an unloadable or
    /// unconfigured mapping comes back as an empty list.
    fn alternative_node_groups(&self, group_id: &str) -> Vec<GroupId> {
        match self.reload() {
            Ok(alternatives) => alternatives.get(group_id).cloned().unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }
}
