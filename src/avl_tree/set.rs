use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::avl_tree::{Error, Result};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Inserting a key that
/// already exists is a no-op.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::{AvlSet, Error};
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Ok(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Ok(0));
/// assert_eq!(set.remove(&1), Err(Error::KeyNotFound));
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            tree: None,
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was inserted and `false` if it
    /// already existed, in which case the set is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set and returns it. Returns `Error::KeyNotFound` if the key does
    /// not exist in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Ok(1));
    /// assert_eq!(set.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &T) -> Result<T> {
        match tree::remove(&mut self.tree, key) {
            Some(key) => {
                self.len -= 1;
                Ok(key)
            },
            None => Err(Error::KeyNotFound),
        }
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Returns the height of the tree, or `0` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), 0);
    /// set.insert(30);
    /// set.insert(20);
    /// set.insert(10);
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the set. Returns `Error::EmptyTree` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.min(), Err(Error::EmptyTree));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        tree::min(&self.tree).ok_or(Error::EmptyTree)
    }

    /// Returns the maximum key of the set. Returns `Error::EmptyTree` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.max(), Err(Error::EmptyTree));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        tree::max(&self.tree).ok_or(Error::EmptyTree)
    }

    /// Returns the keys of the set in pre-order: each node before its left and right subtrees.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(set.pre_order(), vec![&10, &5, &3, &7, &15]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        tree::pre_order(&self.tree, &mut keys);
        keys
    }

    /// Returns the keys of the set in-order, which is ascending order.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(set.in_order(), vec![&3, &5, &7, &10, &15]);
    /// ```
    pub fn in_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        tree::in_order(&self.tree, &mut keys);
        keys
    }

    /// Returns the keys of the set in post-order: each node after its left and right subtrees.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(set.post_order(), vec![&3, &7, &5, &15, &10]);
    /// ```
    pub fn post_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        tree::post_order(&self.tree, &mut keys);
        keys
    }

    /// Returns the keys of the set breadth-first, visiting left children before right children.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(set.level_order(), vec![&10, &5, &15, &3, &7]);
    /// ```
    pub fn level_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        tree::level_order(&self.tree, &mut keys);
        keys
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T>
where
    T: Ord,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a + Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let &Node { ref key, ref right, .. } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> From<Vec<T>> for AvlSet<T>
where
    T: Ord,
{
    fn from(keys: Vec<T>) -> Self {
        keys.into_iter().collect()
    }
}

impl<T> fmt::Debug for AvlSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use crate::avl_tree::Error;

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
        assert_eq!(set.height(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.min(), Err(Error::EmptyTree));
        assert_eq!(set.max(), Err(Error::EmptyTree));
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert!(!set.contains(&100));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_scenario() {
        let set: AvlSet<u32> = vec![10, 5, 15, 3, 7].into();
        assert_eq!(set.len(), 5);
        assert_eq!(set.in_order(), vec![&3, &5, &7, &10, &15]);
        assert_eq!(set.min(), Ok(&3));
        assert_eq!(set.max(), Ok(&15));
    }

    #[test]
    fn test_rotation_heights() {
        for keys in &[[30, 20, 10], [10, 20, 30], [30, 10, 20], [10, 30, 20]] {
            let set: AvlSet<u32> = keys.iter().cloned().collect();
            assert_eq!(set.height(), 2);
            assert_eq!(set.pre_order(), vec![&20, &10, &30]);
        }
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), Ok(1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_cases() {
        let mut set: AvlSet<u32> = vec![10, 5, 15, 3, 7, 12, 17].into();

        assert_eq!(set.remove(&3), Ok(3));
        assert!(!set.contains(&3));
        assert_eq!(set.len(), 6);

        assert_eq!(set.remove(&5), Ok(5));
        assert!(!set.contains(&5));
        assert!(set.contains(&7));

        assert_eq!(set.remove(&15), Ok(15));
        assert!(!set.contains(&15));
        assert!(set.contains(&12) && set.contains(&17));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_remove_two_children() {
        let mut set: AvlSet<u32> = vec![10, 5, 15, 3, 7, 12, 17].into();
        assert_eq!(set.remove(&15), Ok(15));
        assert_eq!(set.len(), 6);
        assert!(!set.contains(&15));
        assert!(set.contains(&12) && set.contains(&17));
        assert_eq!(set.pre_order(), vec![&10, &5, &3, &7, &17, &12]);
    }

    #[test]
    fn test_remove_missing() {
        let mut set: AvlSet<u32> = vec![10, 5, 15].into();
        assert_eq!(set.remove(&100), Err(Error::KeyNotFound));
        assert_eq!(set.len(), 3);
        assert_eq!(set.pre_order(), vec![&10, &5, &15]);
    }

    #[test]
    fn test_insert_remove_round_trip() {
        let mut set: AvlSet<u32> = (0..20).collect();
        set.insert(100);
        assert_eq!(set.remove(&100), Ok(100));
        assert_eq!(set.len(), 20);
        assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_clear() {
        let mut set: AvlSet<u32> = (0..10).collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.height(), 0);
        assert!(set.insert(1));
    }

    #[test]
    fn test_traversals() {
        let set: AvlSet<u32> = vec![10, 5, 15, 3, 7].into();
        assert_eq!(set.pre_order(), vec![&10, &5, &3, &7, &15]);
        assert_eq!(set.in_order(), vec![&3, &5, &7, &10, &15]);
        assert_eq!(set.post_order(), vec![&3, &7, &5, &15, &10]);
        assert_eq!(set.level_order(), vec![&10, &5, &15, &3, &7]);
    }

    #[test]
    fn test_traversals_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.pre_order().is_empty());
        assert!(set.in_order().is_empty());
        assert!(set.post_order().is_empty());
        assert!(set.level_order().is_empty());
    }

    #[test]
    fn test_min_max() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Ok(&1));
        assert_eq!(set.max(), Ok(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut set: AvlSet<u32> = vec![10, 5, 15, 3, 7].into();
        let copy = set.clone();
        assert_eq!(copy.pre_order(), set.pre_order());
        assert_eq!(copy.height(), set.height());

        set.remove(&10).unwrap();
        set.insert(20);
        assert_eq!(copy.len(), 5);
        assert_eq!(copy.pre_order(), vec![&10, &5, &3, &7, &15]);
    }

    #[test]
    fn test_extend_skips_duplicates() {
        let mut set = AvlSet::new();
        set.extend(vec![3, 1, 3, 2, 1]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.in_order(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_debug() {
        let set: AvlSet<u32> = vec![2, 1, 3].into();
        assert_eq!(format!("{:?}", set), "{1, 2, 3}");
    }

    #[test]
    fn test_into_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(
            set.into_iter().collect::<Vec<u32>>(),
            vec![1, 3, 5],
        );
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(
            set.iter().collect::<Vec<&u32>>(),
            vec![&1, &3, &5],
        );
    }
}
