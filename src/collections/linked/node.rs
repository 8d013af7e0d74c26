/// Arena index of the sentinel node. It is allocated with every LinkedSequence, never holds a value
/// and is never freed.
pub(crate) const SENTINEL: usize = 0;

pub(crate) struct Node<T> {
    pub value: Option<T>,
    pub prev: usize,
    pub next: usize,
}

impl<T> Node<T> {
    pub const fn sentinel() -> Node<T> {
        Node {
            value: None,
            prev: SENTINEL,
            next: SENTINEL,
        }
    }
}

/// A position within a [`LinkedSequence`](super::LinkedSequence), referring to one of its nodes.
///
/// The link to the sentinel node is the end position. Links to removed nodes are rejected until
/// the node is reused by a later insertion. From then on a stale link is accepted again and refers
/// to the new element, since links carry no generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link(pub(crate) usize);
