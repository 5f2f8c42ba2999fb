use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, error, trace};

use super::error::{Side, TreeError, TreeResult};
use super::node::{self, Link, Node};
use super::order::{KeyOrder, NaturalOrder};
use super::traversal::{Order, Traversal};

/// An ordered set of keys kept in a height-balanced binary search tree.
///
/// Each node caches the height and the size of its subtree. Heights drive
/// the AVL rebalancing on insert; sizes let [`range_query`](Self::range_query)
/// count whole subtrees at once.
///
/// The tree does no internal locking. Callers that share it must make sure
/// no insert runs alongside another operation or a live traversal; the
/// borrow checker enforces this for safe code.
pub struct AvlTree<K, O = NaturalOrder> {
    root: Link<K>,
    order: O,
}

impl<K: Ord> AvlTree<K> {
    /// Creates an empty tree ordered by `K`'s `Ord` implementation.
    pub fn new() -> Self {
        AvlTree {
            root: None,
            order: NaturalOrder,
        }
    }
}

impl<K, O> AvlTree<K, O> {
    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        node::size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree; 0 when empty, 1 for a single key.
    pub fn height(&self) -> usize {
        node::height(&self.root) as usize
    }

    /// Removes every key. Nodes are released one at a time from a work-list,
    /// so teardown never recurses over the tree's depth.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.right.take());
            pending.extend(node.left.take());
        }
    }

    /// A traversal positioned on the first key of `order`.
    pub fn begin(&self, order: Order) -> Traversal<'_, K> {
        Traversal::begin(self.root.as_deref(), order)
    }

    /// The past-the-end traversal for `order`.
    pub fn end(&self, order: Order) -> Traversal<'_, K> {
        Traversal::end(order)
    }

    pub fn begin_preorder(&self) -> Traversal<'_, K> {
        self.begin(Order::PreOrder)
    }

    pub fn end_preorder(&self) -> Traversal<'_, K> {
        self.end(Order::PreOrder)
    }

    pub fn begin_inorder(&self) -> Traversal<'_, K> {
        self.begin(Order::InOrder)
    }

    pub fn end_inorder(&self) -> Traversal<'_, K> {
        self.end(Order::InOrder)
    }

    pub fn begin_postorder(&self) -> Traversal<'_, K> {
        self.begin(Order::PostOrder)
    }

    pub fn end_postorder(&self) -> Traversal<'_, K> {
        self.end(Order::PostOrder)
    }

    pub fn pre_order(&self) -> Traversal<'_, K> {
        self.begin(Order::PreOrder)
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Traversal<'_, K> {
        self.begin(Order::InOrder)
    }

    pub fn post_order(&self) -> Traversal<'_, K> {
        self.begin(Order::PostOrder)
    }
}

impl<K, O: KeyOrder<K>> AvlTree<K, O> {
    /// Creates an empty tree ordered by an injected comparator.
    ///
    /// ```
    /// use avl_range_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::with_order(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    pub fn with_order(order: O) -> Self {
        AvlTree { root: None, order }
    }

    /// Inserts `key`, rebalancing along the insertion path.
    ///
    /// Returns `false` and leaves the tree untouched when the key is already
    /// present.
    pub fn insert(&mut self, key: K) -> bool {
        match insert_node(&mut self.root, key, &self.order) {
            Ok(inserted) => {
                if inserted {
                    debug!(len = self.len(), height = self.height(), "inserted new key");
                }
                inserted
            }
            Err(e) => {
                error!(error = %e, "insert reached an impossible tree shape");
                unreachable!("{}", e)
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match self.order.compare(key, &node.key) {
                Ordering::Equal => return true,
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        false
    }

    /// Counts the stored keys `k` with `min <= k <= max`.
    ///
    /// Returns 0 for an empty tree and for an inverted range (`min > max`).
    pub fn range_query(&self, min: &K, max: &K) -> usize {
        if self.root.is_none() || self.order.compare(min, max) == Ordering::Greater {
            return 0;
        }
        let count = count_in_range(&self.root, Some(min), Some(max), &self.order);
        debug!(count, "range query");
        count
    }

    /// Calls `f` on every stored key in `[min, max]`, in ascending order.
    pub fn for_each_in_range<F>(&self, min: &K, max: &K, mut f: F)
    where
        F: FnMut(&K),
    {
        if self.order.compare(min, max) == Ordering::Greater {
            return;
        }
        visit_range(&self.root, min, max, &self.order, &mut f);
    }

    /// Walks every node and checks key order, the AVL balance bound and the
    /// cached heights and sizes.
    pub fn check_invariants(&self) -> TreeResult<()> {
        let mut stack: Vec<(&Node<K>, usize, Option<&K>, Option<&K>)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0, None, None));
        }

        while let Some((node, depth, lower, upper)) = stack.pop() {
            let above_lower =
                lower.map_or(true, |lo| self.order.compare(lo, &node.key) == Ordering::Less);
            let below_upper =
                upper.map_or(true, |hi| self.order.compare(&node.key, hi) == Ordering::Less);
            if !above_lower || !below_upper {
                return Err(TreeError::OrderViolation { depth });
            }

            let actual_height =
                1 + std::cmp::max(node::height(&node.left), node::height(&node.right));
            if node.height != actual_height {
                return Err(TreeError::HeightMismatch {
                    depth,
                    cached: node.height,
                    actual: actual_height,
                });
            }

            let actual_size = 1 + node::size(&node.left) + node::size(&node.right);
            if node.size != actual_size {
                return Err(TreeError::SizeMismatch {
                    depth,
                    cached: node.size,
                    actual: actual_size,
                });
            }

            let balance = node.balance_factor();
            if balance.abs() > 1 {
                return Err(TreeError::Unbalanced { depth, balance });
            }

            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1, lower, Some(&node.key)));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1, Some(&node.key), upper));
            }
        }
        Ok(())
    }
}

fn insert_node<K, O: KeyOrder<K>>(link: &mut Link<K>, key: K, order: &O) -> TreeResult<bool> {
    match link {
        None => {
            *link = Some(Box::new(Node::new(key)));
            Ok(true)
        }
        Some(node) => {
            let inserted = match order.compare(&key, &node.key) {
                Ordering::Less => insert_node(&mut node.left, key, order)?,
                Ordering::Greater => insert_node(&mut node.right, key, order)?,
                Ordering::Equal => return Ok(false),
            };
            if inserted {
                rebalance(node)?;
            }
            Ok(inserted)
        }
    }
}

fn rebalance<K>(node: &mut Box<Node<K>>) -> TreeResult<()> {
    node.refresh();
    let balance = node.balance_factor();

    if balance > 1 {
        let left = node
            .left
            .as_mut()
            .ok_or(TreeError::MissingChild { side: Side::Left })?;
        if left.balance_factor() < 0 {
            trace!("LR rotation");
            rotate_left(left)?;
        } else {
            trace!("LL rotation");
        }
        return rotate_right(node);
    }

    if balance < -1 {
        let right = node
            .right
            .as_mut()
            .ok_or(TreeError::MissingChild { side: Side::Right })?;
        if right.balance_factor() > 0 {
            trace!("RL rotation");
            rotate_right(right)?;
        } else {
            trace!("RR rotation");
        }
        return rotate_left(node);
    }

    Ok(())
}

/// Promotes the right child of `node` in place. The demoted node is
/// refreshed before the new subtree root.
fn rotate_left<K>(node: &mut Box<Node<K>>) -> TreeResult<()> {
    let mut pivot = node
        .right
        .take()
        .ok_or(TreeError::MissingChild { side: Side::Right })?;
    node.right = pivot.left.take();
    node.refresh();
    mem::swap(node, &mut pivot);
    node.left = Some(pivot);
    node.refresh();
    Ok(())
}

/// Mirror of [`rotate_left`].
fn rotate_right<K>(node: &mut Box<Node<K>>) -> TreeResult<()> {
    let mut pivot = node
        .left
        .take()
        .ok_or(TreeError::MissingChild { side: Side::Left })?;
    node.left = pivot.right.take();
    node.refresh();
    mem::swap(node, &mut pivot);
    node.right = Some(pivot);
    node.refresh();
    Ok(())
}

/// Counts keys of `link` inside the bounds, where `None` means the bound is
/// already implied by an ancestor. A subtree is counted by its cached size
/// only once both bounds are implied, i.e. it lies entirely in range;
/// anything straddling a bound is descended into.
fn count_in_range<K, O: KeyOrder<K>>(
    link: &Link<K>,
    lower: Option<&K>,
    upper: Option<&K>,
    order: &O,
) -> usize {
    let Some(node) = link else {
        return 0;
    };
    if lower.is_none() && upper.is_none() {
        return node.size;
    }
    if let Some(lo) = lower {
        if order.compare(&node.key, lo) == Ordering::Less {
            return count_in_range(&node.right, lower, upper, order);
        }
    }
    if let Some(hi) = upper {
        if order.compare(&node.key, hi) == Ordering::Greater {
            return count_in_range(&node.left, lower, upper, order);
        }
    }
    // Left keys are below node.key <= upper, right keys above node.key >= lower.
    1 + count_in_range(&node.left, lower, None, order)
        + count_in_range(&node.right, None, upper, order)
}

fn visit_range<K, O, F>(link: &Link<K>, min: &K, max: &K, order: &O, f: &mut F)
where
    O: KeyOrder<K>,
    F: FnMut(&K),
{
    let Some(node) = link else {
        return;
    };
    let above_min = order.compare(&node.key, min) != Ordering::Less;
    let below_max = order.compare(&node.key, max) != Ordering::Greater;
    if order.compare(min, &node.key) == Ordering::Less {
        visit_range(&node.left, min, max, order, f);
    }
    if above_min && below_max {
        f(&node.key);
    }
    if order.compare(&node.key, max) == Ordering::Less {
        visit_range(&node.right, min, max, order, f);
    }
}

impl<K, O> Drop for AvlTree<K, O> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, O: Default> Default for AvlTree<K, O> {
    fn default() -> Self {
        AvlTree {
            root: None,
            order: O::default(),
        }
    }
}

impl<K, O: KeyOrder<K>> Extend<K> for AvlTree<K, O> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K, O: KeyOrder<K> + Default> FromIterator<K> for AvlTree<K, O> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = AvlTree::default();
        tree.extend(iter);
        tree
    }
}

impl<K: fmt::Debug, O> fmt::Debug for AvlTree<K, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: i32) -> Link<i32> {
        Some(Box::new(Node::new(key)))
    }

    fn branch(key: i32, left: Link<i32>, right: Link<i32>) -> Box<Node<i32>> {
        let mut node = Box::new(Node::new(key));
        node.left = left;
        node.right = right;
        node.refresh();
        node
    }

    #[test]
    fn test_rotate_left_refreshes_child_then_root() {
        //   1              2
        //    \            / \
        //     2    ->    1   3
        //      \
        //       3
        let right = branch(2, None, leaf(3));
        let mut root = branch(1, None, Some(right));
        assert_eq!(root.height, 3);

        rotate_left(&mut root).unwrap();

        assert_eq!(root.key, 2);
        assert_eq!(root.height, 2);
        assert_eq!(root.size, 3);
        let left = root.left.as_ref().unwrap();
        assert_eq!((left.key, left.height, left.size), (1, 1, 1));
    }

    #[test]
    fn test_rotate_right_moves_inner_grandchild() {
        //       4            2
        //      / \          / \
        //     2   5   ->   1   4
        //    / \              / \
        //   1   3            3   5
        let left = branch(2, leaf(1), leaf(3));
        let mut root = branch(4, Some(left), leaf(5));

        rotate_right(&mut root).unwrap();

        assert_eq!(root.key, 2);
        assert_eq!(root.size, 5);
        let right = root.right.as_ref().unwrap();
        assert_eq!(right.key, 4);
        assert_eq!(right.size, 3);
        assert_eq!(right.left.as_ref().unwrap().key, 3);
    }

    #[test]
    fn test_rotation_without_child_is_rejected_untouched() {
        let mut root = branch(7, leaf(3), None);

        assert_eq!(
            rotate_left(&mut root),
            Err(TreeError::MissingChild { side: Side::Right })
        );
        assert_eq!(root.key, 7);
        assert_eq!(root.size, 2);
        assert_eq!(root.left.as_ref().unwrap().key, 3);
    }

    #[test]
    fn test_rebalance_double_rotation() {
        //     30
        //    /
        //  10      ->     20
        //    \           /  \
        //     20       10    30
        let left = branch(10, None, leaf(20));
        let mut root = branch(30, Some(left), None);

        rebalance(&mut root).unwrap();

        assert_eq!(root.key, 20);
        assert_eq!(root.left.as_ref().unwrap().key, 10);
        assert_eq!(root.right.as_ref().unwrap().key, 30);
        assert_eq!(root.height, 2);
    }

    #[test]
    fn test_check_invariants_reports_stale_size() {
        let mut tree = AvlTree::new();
        tree.extend([2, 1, 3]);
        tree.root.as_mut().unwrap().size = 5;

        assert_eq!(
            tree.check_invariants(),
            Err(TreeError::SizeMismatch {
                depth: 0,
                cached: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn test_check_invariants_reports_order_violation() {
        let mut tree = AvlTree::new();
        tree.extend([2, 1, 3]);
        tree.root.as_mut().unwrap().left.as_mut().unwrap().key = 9;

        assert_eq!(
            tree.check_invariants(),
            Err(TreeError::OrderViolation { depth: 1 })
        );
    }

    #[test]
    fn test_drop_of_degenerate_chain() {
        let mut root: Link<i32> = None;
        for key in 0..500_000 {
            let mut node = Box::new(Node::new(key));
            node.left = root.take();
            root = Some(node);
        }
        let tree = AvlTree {
            root,
            order: NaturalOrder,
        };
        drop(tree);
    }
}
