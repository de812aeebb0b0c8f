use derive_more::IsVariant;

use super::arena::NodeIndex;

/// Endpoint bookkeeping shared by the linked lists: either there are no nodes at all, or both ends
/// of the chain are known.
///
/// Folding both endpoints into one variant means there is no representable state with a head but
/// no tail, so the lists never need to reason about half-empty configurations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListEnds),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListEnds {
    pub head: NodeIndex,
    pub tail: NodeIndex,
}

impl ListState {
    /// The state for a chain whose only node is `index`.
    pub const fn single(index: NodeIndex) -> ListState {
        ListState::Full(ListEnds { head: index, tail: index })
    }
}
