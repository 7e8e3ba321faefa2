use super::{DesktopId, NodeId};

/// Where a managed window lives. Resolved from the registry for each event and never kept past
/// the handler that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLocation {
    pub desktop: DesktopId,
    pub node: NodeId,
}
