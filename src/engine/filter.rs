//! Multi-select display filters.
//!
//! A [`FilterSet`] is the set of keys a user has ticked in one filter
//! control. [`MovementFilter`] combines three of them (accounts,
//! categories, kinds) and is passed explicitly to the stages that honor
//! display filters.

use alloc::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::category::canonical_category;
use crate::models::{AccountName, Movement, MovementKind};

/// A set of selected keys.
///
/// An empty set means "no restriction": every key is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet<K: Ord> {
    /// Selected keys.
    selected: BTreeSet<K>,
}

impl<K: Ord> Default for FilterSet<K> {
    #[inline]
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<K: Ord> FilterSet<K> {
    /// Creates an empty set that allows everything.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the selection of `key`. Returns `true` if it is now selected.
    #[inline]
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key)
        }
    }

    /// Selects `key`. Returns `true` if it was not selected before.
    #[inline]
    pub fn select(&mut self, key: K) -> bool {
        self.selected.insert(key)
    }

    /// Deselects `key`. Returns `true` if it was selected.
    #[inline]
    pub fn deselect(&mut self, key: &K) -> bool {
        self.selected.remove(key)
    }

    /// Deselects everything.
    #[inline]
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Returns `true` if `key` is selected.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Returns `true` if nothing is selected.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Number of selected keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if `key` passes: the set is empty or contains it.
    #[inline]
    #[must_use]
    pub fn allows(&self, key: &K) -> bool {
        self.is_empty() || self.contains(key)
    }

    /// Iterates over the selected keys in order.
    #[inline]
    pub fn iter(&self) -> alloc::collections::btree_set::Iter<'_, K> {
        self.selected.iter()
    }
}

impl<K: Ord> FromIterator<K> for FilterSet<K> {
    #[inline]
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

impl<'set, K: Ord> IntoIterator for &'set FilterSet<K> {
    type Item = &'set K;
    type IntoIter = alloc::collections::btree_set::Iter<'set, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.selected.iter()
    }
}

/// Display filters applied to movements before aggregation.
///
/// All three sets must allow a movement for it to pass. Category keys are
/// stored in canonical form (see
/// [`canonical_category`](super::canonical_category)), so selecting
/// `"🍔 Food"` also matches `"Food"`.
///
/// # Examples
///
/// ```
/// use finanzas_rs::engine::MovementFilter;
/// use finanzas_rs::models::{AccountName, MovementKind};
///
/// let filter = MovementFilter::new()
///     .account(AccountName::from("Visa"))
///     .category("🍔 Food")
///     .kind(MovementKind::Expense);
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementFilter {
    /// Selected accounts (matches `account` or `destination_account`).
    pub accounts: FilterSet<AccountName>,
    /// Selected canonical category keys.
    pub categories: FilterSet<String>,
    /// Selected movement kinds.
    pub kinds: FilterSet<MovementKind>,
}

impl MovementFilter {
    /// Creates an empty filter that matches all movements.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account to the selection.
    #[inline]
    #[must_use]
    pub fn account(mut self, name: AccountName) -> Self {
        let _added = self.accounts.select(name);
        self
    }

    /// Adds a category to the selection, by any of its label variants.
    #[inline]
    #[must_use]
    pub fn category(mut self, label: &str) -> Self {
        let _added = self.categories.select(canonical_category(Some(label)));
        self
    }

    /// Adds a movement kind to the selection.
    #[inline]
    #[must_use]
    pub fn kind(mut self, kind: MovementKind) -> Self {
        let _added = self.kinds.select(kind);
        self
    }

    /// Flips a category in the selection, by any of its label variants.
    #[inline]
    pub fn toggle_category(&mut self, label: &str) -> bool {
        self.categories.toggle(canonical_category(Some(label)))
    }

    /// Deselects everything in all three sets.
    #[inline]
    pub fn clear(&mut self) {
        self.accounts.clear();
        self.categories.clear();
        self.kinds.clear();
    }

    /// Returns `true` when no set restricts anything.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.categories.is_empty() && self.kinds.is_empty()
    }

    /// Returns `true` if the movement passes every set.
    #[inline]
    #[must_use]
    pub fn matches(&self, mv: &Movement) -> bool {
        self.matches_kind(mv) && self.matches_account(mv) && self.matches_category(mv)
    }

    /// Returns the matching movements, preserving order.
    #[inline]
    #[must_use]
    pub fn apply(&self, movements: &[Movement]) -> Vec<Movement> {
        if self.is_empty() {
            return movements.to_vec();
        }
        movements
            .iter()
            .filter(|mv| self.matches(mv))
            .cloned()
            .collect()
    }

    /// Checks kind criteria.
    fn matches_kind(&self, mv: &Movement) -> bool {
        self.kinds.allows(&mv.kind)
    }

    /// Checks account criteria.
    fn matches_account(&self, mv: &Movement) -> bool {
        self.accounts.is_empty()
            || [mv.account.as_ref(), mv.destination_account.as_ref()]
                .into_iter()
                .flatten()
                .any(|name| self.accounts.contains(name))
    }

    /// Checks category criteria.
    fn matches_category(&self, mv: &Movement) -> bool {
        self.categories.is_empty()
            || self
                .categories
                .contains(&canonical_category(mv.category.as_deref()))
    }
}
