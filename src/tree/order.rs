use std::cmp::Ordering;

/// Total order used by the tree to place keys.
///
/// The tree never looks at keys except through this trait, so a caller can
/// inject a comparator instead of relying on `Ord`. Any
/// `Fn(&K, &K) -> Ordering` closure is a `KeyOrder`.
pub trait KeyOrder<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The key type's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> KeyOrder<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F> KeyOrder<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
