/// Ownership slot for a child subtree. `None` means "no subtree".
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// Storage unit of the tree.
///
/// A node exclusively owns its children. `height` and `size` are memoized
/// from the children and are only refreshed by the owning tree.
#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: i32,
    pub(crate) size: usize,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Node {
            key,
            left: None,
            right: None,
            height: 1,
            size: 1,
        }
    }

    pub(crate) fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }

    /// Recomputes height and size from the children. Children must already
    /// be up to date.
    pub(crate) fn refresh(&mut self) {
        self.height = 1 + std::cmp::max(height(&self.left), height(&self.right));
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

pub(crate) fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

pub(crate) fn size<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.size)
}
