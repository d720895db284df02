/// Optional bounds on a search beyond its fixed depth.
///
/// With the default (no budget) the search is exact to the requested depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Nodes visited before the remaining frontier is scored statically
    pub max_nodes: Option<u64>,
}

impl SearchLimits {
    #[must_use]
    pub const fn unlimited() -> Self {
        SearchLimits { max_nodes: None }
    }

    #[must_use]
    pub const fn nodes(max_nodes: u64) -> Self {
        SearchLimits {
            max_nodes: Some(max_nodes),
        }
    }
}
