//! Paired available/chosen list handling.
//!
//! A [`SwapList`] is an ordered, duplicate-free list. Two instances are
//! used as a pair (available columns on one side, chosen columns on the
//! other) and items travel between them through the transactional move
//! operations, which keep the pair's union constant and its intersection
//! empty.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SwapError {
    #[error("Item is already present in the destination list")]
    DuplicateItem,
    #[error("Item not found in the source list")]
    ItemNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwapList<T> {
    items: Vec<T>,
}

impl<T> Default for SwapList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> SwapList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from an iterator, silently skipping duplicates.
    pub fn from_unique(items: impl IntoIterator<Item = T>) -> Self {
        let mut list = Self::new();
        for item in items {
            let _ = list.append(item);
        }
        list
    }

    /// Append at the end. Fails if the item is already present here.
    pub fn append(&mut self, item: T) -> Result<(), SwapError> {
        if self.items.contains(&item) {
            return Err(SwapError::DuplicateItem);
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item)
    }

    /// Move every item of `from` to the end of `to`, preserving order.
    pub fn move_all(from: &mut Self, to: &mut Self) -> Result<(), SwapError> {
        if from.items.iter().any(|item| to.items.contains(item)) {
            return Err(SwapError::DuplicateItem);
        }
        to.items.append(&mut from.items);
        Ok(())
    }

    /// Move a single item from `from` to the end of `to`.
    pub fn move_one(from: &mut Self, to: &mut Self, item: &T) -> Result<(), SwapError> {
        let index = from.position(item).ok_or(SwapError::ItemNotFound)?;
        if to.items.contains(item) {
            return Err(SwapError::DuplicateItem);
        }
        let moved = from.items.remove(index);
        to.items.push(moved);
        Ok(())
    }

    /// Move the named items from `from` to the end of `to`, preserving
    /// their relative order in `from`. The move is transactional: if any
    /// item is absent from `from` (or already in `to`), nothing moves.
    pub fn move_selected(from: &mut Self, to: &mut Self, items: &[T]) -> Result<(), SwapError> {
        for item in items {
            if !from.items.contains(item) {
                return Err(SwapError::ItemNotFound);
            }
            if to.items.contains(item) {
                return Err(SwapError::DuplicateItem);
            }
        }
        let mut kept = Vec::with_capacity(from.items.len());
        for item in from.items.drain(..) {
            if items.contains(&item) {
                to.items.push(item);
            } else {
                kept.push(item);
            }
        }
        from.items = kept;
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a SwapList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> SwapList<String> {
        SwapList::from_unique(items.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_append_rejects_duplicate() {
        let mut l = list(&["a", "b"]);
        assert_eq!(l.append("a".to_string()), Err(SwapError::DuplicateItem));
        assert_eq!(l.len(), 2);
    }

    #[test]
    fn test_from_unique_skips_duplicates() {
        let l = list(&["a", "b", "a"]);
        assert_eq!(l.as_slice(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_clear_then_append() {
        let mut l = list(&["a"]);
        l.clear();
        assert!(l.is_empty());
        assert!(l.append("a".to_string()).is_ok());
    }

    #[test]
    fn test_move_one() {
        let mut from = list(&["a", "b", "c"]);
        let mut to = list(&[]);
        SwapList::move_one(&mut from, &mut to, &"b".to_string()).unwrap();
        assert_eq!(from.as_slice(), ["a".to_string(), "c".to_string()]);
        assert_eq!(to.as_slice(), ["b".to_string()]);
    }

    #[test]
    fn test_move_one_missing() {
        let mut from = list(&["a"]);
        let mut to = list(&[]);
        let err = SwapList::move_one(&mut from, &mut to, &"z".to_string());
        assert_eq!(err, Err(SwapError::ItemNotFound));
        assert_eq!(from.len(), 1);
        assert!(to.is_empty());
    }

    #[test]
    fn test_move_all() {
        let mut from = list(&["a", "b"]);
        let mut to = list(&["c"]);
        SwapList::move_all(&mut from, &mut to).unwrap();
        assert!(from.is_empty());
        assert_eq!(
            to.as_slice(),
            ["c".to_string(), "a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_move_selected_preserves_relative_order() {
        let mut from = list(&["a", "b", "c", "d"]);
        let mut to = list(&[]);
        // Request out of order; items arrive in their order within `from`.
        let picked = vec!["d".to_string(), "b".to_string()];
        SwapList::move_selected(&mut from, &mut to, &picked).unwrap();
        assert_eq!(from.as_slice(), ["a".to_string(), "c".to_string()]);
        assert_eq!(to.as_slice(), ["b".to_string(), "d".to_string()]);
    }

    #[test]
    fn test_move_selected_is_transactional() {
        let mut from = list(&["a", "b"]);
        let mut to = list(&[]);
        let picked = vec!["a".to_string(), "z".to_string()];
        let err = SwapList::move_selected(&mut from, &mut to, &picked);
        assert_eq!(err, Err(SwapError::ItemNotFound));
        assert_eq!(from.as_slice(), ["a".to_string(), "b".to_string()]);
        assert!(to.is_empty());
    }

    #[test]
    fn test_pair_invariant_under_moves() {
        let mut available = list(&["a", "b", "c", "d"]);
        let mut chosen: SwapList<String> = SwapList::new();
        SwapList::move_one(&mut available, &mut chosen, &"c".to_string()).unwrap();
        SwapList::move_selected(&mut available, &mut chosen, &["a".to_string()]).unwrap();
        SwapList::move_one(&mut chosen, &mut available, &"c".to_string()).unwrap();

        let mut union: Vec<&String> = available.iter().chain(chosen.iter()).collect();
        union.sort();
        assert_eq!(union, ["a", "b", "c", "d"]);
        assert!(!available.iter().any(|x| chosen.contains(x)));
    }
}
