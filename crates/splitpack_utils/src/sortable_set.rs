use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::indexmap::FxIndexSet;

/// A deduplicated collection with a lazily maintained default order and a
/// table of named memoized derivations.
///
/// Any mutation invalidates every cached derivation, exactly — stale derived
/// data is never observable. `sort` only re-sorts when the default order is
/// dirty, so repeated reads stay cheap. Derivations sensitive to iteration
/// order go through [`SortableSet::get_from_cache`], which forces the default
/// order first; order-insensitive ones use
/// [`SortableSet::get_from_unordered_cache`], which must not pay for a sort.
pub struct SortableSet<T> {
  items: FxIndexSet<T>,
  is_sorted: bool,
  ordered_cache: FxHashMap<&'static str, Box<dyn Any>>,
  unordered_cache: FxHashMap<&'static str, Box<dyn Any>>,
}

impl<T> Default for SortableSet<T> {
  fn default() -> Self {
    Self {
      items: FxIndexSet::default(),
      is_sorted: true,
      ordered_cache: FxHashMap::default(),
      unordered_cache: FxHashMap::default(),
    }
  }
}

impl<T: Hash + Eq> SortableSet<T> {
  /// Returns `true` if the value was not yet in the set.
  pub fn add(&mut self, value: T) -> bool {
    let inserted = self.items.insert(value);
    if inserted {
      self.invalidate();
    }
    inserted
  }

  /// Returns `true` if the value was present. Keeps the relative order of
  /// the remaining items.
  pub fn remove(&mut self, value: &T) -> bool {
    let removed = self.items.shift_remove(value);
    if removed {
      self.invalidate();
    }
    removed
  }

  pub fn clear(&mut self) {
    if !self.items.is_empty() {
      self.items.clear();
      self.invalidate();
    }
  }

  pub fn contains(&self, value: &T) -> bool {
    self.items.contains(value)
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
    self.items.iter()
  }

  /// Re-sorts into the default order, but only when a mutation or a
  /// [`SortableSet::sort_with`] left the order dirty.
  pub fn sort(&mut self)
  where
    T: Ord,
  {
    if self.is_sorted {
      return;
    }
    self.items.sort_unstable();
    self.ordered_cache.clear();
    self.is_sorted = true;
  }

  /// Imposes an arbitrary order. The default order is considered dirty
  /// afterwards and every cached derivation is dropped.
  pub fn sort_with(&mut self, cmp: impl FnMut(&T, &T) -> Ordering) {
    self.items.sort_unstable_by(cmp);
    self.is_sorted = false;
    self.ordered_cache.clear();
    self.unordered_cache.clear();
  }

  /// Memoizes `derive` over the set in default order. Two reads with no
  /// mutation in between return the identical cached value.
  pub fn get_from_cache<V: Clone + 'static>(
    &mut self,
    name: &'static str,
    derive: impl FnOnce(&FxIndexSet<T>) -> V,
  ) -> V
  where
    T: Ord,
  {
    self.sort();
    if let Some(hit) = self.ordered_cache.get(name) {
      return hit.downcast_ref::<V>().expect("cache entry should keep its derived type").clone();
    }
    let value = derive(&self.items);
    self.ordered_cache.insert(name, Box::new(value.clone()));
    value
  }

  /// Like [`SortableSet::get_from_cache`] for order-insensitive derivations;
  /// never forces a sort.
  pub fn get_from_unordered_cache<V: Clone + 'static>(
    &mut self,
    name: &'static str,
    derive: impl FnOnce(&FxIndexSet<T>) -> V,
  ) -> V {
    if let Some(hit) = self.unordered_cache.get(name) {
      return hit.downcast_ref::<V>().expect("cache entry should keep its derived type").clone();
    }
    let value = derive(&self.items);
    self.unordered_cache.insert(name, Box::new(value.clone()));
    value
  }

  fn invalidate(&mut self) {
    self.is_sorted = false;
    self.ordered_cache.clear();
    self.unordered_cache.clear();
  }
}

impl<T: Hash + Eq> FromIterator<T> for SortableSet<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut set = Self::default();
    for value in iter {
      set.add(value);
    }
    set
  }
}

impl<'a, T> IntoIterator for &'a SortableSet<T> {
  type Item = &'a T;
  type IntoIter = indexmap::set::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.iter()
  }
}

impl<T: fmt::Debug> fmt::Debug for SortableSet<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SortableSet")
      .field("items", &self.items)
      .field("is_sorted", &self.is_sorted)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::SortableSet;

  #[test]
  fn add_and_remove_report_changes() {
    let mut set = SortableSet::default();
    assert!(set.add(3));
    assert!(set.add(1));
    assert!(!set.add(3));
    assert!(set.remove(&1));
    assert!(!set.remove(&1));
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn sort_is_lazy_and_restores_default_order() {
    let mut set: SortableSet<u32> = [3, 1, 2].into_iter().collect();
    set.sort();
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    set.sort_with(|a, b| b.cmp(a));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);

    // Dirty after sort_with, so the default order is recomputed.
    set.sort();
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
  }

  #[test]
  fn caches_are_reference_stable_between_mutations() {
    let mut set: SortableSet<u32> = [1, 2, 3].into_iter().collect();
    let mut calls = 0;
    let total = set.get_from_unordered_cache("total", |items| {
      calls += 1;
      items.iter().sum::<u32>()
    });
    assert_eq!(total, 6);
    let total = set.get_from_unordered_cache("total", |items| {
      calls += 1;
      items.iter().sum::<u32>()
    });
    assert_eq!(total, 6);
    assert_eq!(calls, 1);
  }

  #[test]
  fn mutation_invalidates_both_cache_kinds() {
    let mut set: SortableSet<u32> = [2, 1].into_iter().collect();
    let first = set.get_from_cache("joined", |items| {
      items.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
    });
    assert_eq!(first, "1,2");
    let sum = set.get_from_unordered_cache("total", |items| items.iter().sum::<u32>());
    assert_eq!(sum, 3);

    set.add(4);
    let second = set.get_from_cache("joined", |items| {
      items.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
    });
    assert_eq!(second, "1,2,4");
    let sum = set.get_from_unordered_cache("total", |items| items.iter().sum::<u32>());
    assert_eq!(sum, 7);
  }

  #[test]
  fn unordered_cache_does_not_force_a_sort() {
    let mut set: SortableSet<u32> = [3, 1].into_iter().collect();
    let _ = set.get_from_unordered_cache("total", |items| items.iter().sum::<u32>());
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 1]);
  }
}
