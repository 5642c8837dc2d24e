//! Core vocabulary shared between the expansion pipeline and the strategies
//! that refine its scaling decisions.

/// Unique name of a scaling group.
pub type GroupId = String;

/// A schedulable scaling choice produced by the expansion pipeline.
///
/// Each option references exactly one scaling group. Strategies treat the
/// supplied options as read-only input and clone the ones they return.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpansionOption {
    pub group_id: GroupId,
    pub node_count: u32,
    pub debug: String,
}

impl ExpansionOption {
    pub fn new<G, D>(group_id: G, node_count: u32, debug: D) -> Self
    where
        G: Into<GroupId>,
        D: Into<String>,
    {
        ExpansionOption {
            group_id: group_id.into(),
            node_count,
            debug: debug.into(),
        }
    }
}

/// Supplies operator-curated substitutes for an already-selected best option.
///
/// Both operations degrade to an empty result when no alternatives are
/// configured or the configuration cannot be loaded; they never fail.
pub trait AlternativeSelector: Send + Sync {
    /// Filters `options` down to the ones an operator declared
    /// interchangeable with `best`, in the configured order. Returns an
    /// empty vector when no best choice was determined upstream.
    fn alternative_options(
        &self,
        options: &[ExpansionOption],
        best: Option<&ExpansionOption>,
    ) -> Vec<ExpansionOption>;

    /// Returns the configured alternative group ids for `group_id` verbatim,
    /// empty if the group has no alternatives configured.
    fn alternative_node_groups(&self, group_id: &str) -> Vec<GroupId>;
}
