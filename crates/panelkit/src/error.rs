use thiserror::Error;

use crate::element::ElementId;

/// Misuse of the element tree structure
///
/// Geometry never produces errors; only attaching and detaching elements can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("element {0:?} does not exist")]
    UnknownElement(ElementId),
    #[error("element {0:?} cannot hold children")]
    NotAContainer(ElementId),
    #[error("element {0:?} already has a parent")]
    AlreadyAttached(ElementId),
    #[error("attaching the element would make it its own ancestor")]
    WouldCycle,
    #[error("element {child:?} is not a child of {parent:?}")]
    NotAChild { parent: ElementId, child: ElementId },
    #[error("the root panel cannot be removed or re-parented")]
    RootRemoval,
}
