use alloc::vec::Vec;

/// Implicit, possibly nested child content.
///
/// This is the "children" input shape: callers can group nodes into fragments and leave holes
/// for conditionally rendered content. [`flatten_children`] turns it into a flat item list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Child<N> {
    Node(N),
    Fragment(Vec<Child<N>>),
    /// A child that rendered nothing.
    Empty,
}

impl<N> Child<N> {
    pub fn node(node: N) -> Self {
        Self::Node(node)
    }

    pub fn fragment(children: impl IntoIterator<Item = Child<N>>) -> Self {
        Self::Fragment(children.into_iter().collect())
    }

    pub fn optional(node: Option<N>) -> Self {
        node.map_or(Self::Empty, Self::Node)
    }
}

/// Flattens nested children depth-first, dropping empty entries.
pub fn flatten_children<N: Clone>(children: &[Child<N>]) -> Vec<N> {
    let mut out = Vec::with_capacity(children.len());
    push_children(children, &mut out);
    out
}

fn push_children<N: Clone>(children: &[Child<N>], out: &mut Vec<N>) {
    for child in children {
        match child {
            Child::Node(node) => out.push(node.clone()),
            Child::Fragment(nested) => push_children(nested, out),
            Child::Empty => {}
        }
    }
}

/// Normalizes the two content shapes into one ordered item list.
///
/// An explicit item list wins whenever it is present, even when empty. Without one, nested
/// children are flattened. Both absent yields an empty list.
pub fn resolve_content<N: Clone>(items: Option<&[N]>, children: Option<&[Child<N>]>) -> Vec<N> {
    match (items, children) {
        (Some(items), _) => items.to_vec(),
        (None, Some(children)) => flatten_children(children),
        (None, None) => Vec::new(),
    }
}
