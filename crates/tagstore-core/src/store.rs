//! # Indexed Store
//!
//! The in-memory record store and its two indexes.
//!
//! ## Index Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         IndexedStore                                    │
//! │                                                                         │
//! │  items: BTreeMap<ItemId, Item>        tags: HashMap<Tag, HashSet<Id>>   │
//! │  ─────────────────────────────        ───────────────────────────────   │
//! │  1 → { 10.00, [5, 7] }                5 → {1}                           │
//! │  2 → { 20.00, [7] }         ◄──────   7 → {1, 2}                        │
//! │  (owns the items, ordered)            (ids only, never owns items)      │
//! │                                                                         │
//! │  Only `index_tags` and `unindex_tag` write to `tags`.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant
//! After every public call: for each stored item and each tag it carries,
//! the tag maps to a set containing the item's id; no tag maps to an id
//! that no longer carries it; no tag maps to an empty set.
//! [`IndexedStore::check_consistency`] verifies this.
//!
//! ## Usage
//! ```rust
//! use tagstore_core::{IndexedStore, InsertOutcome, Money};
//!
//! let mut store = IndexedStore::new();
//! assert_eq!(store.insert(1, Money::new(10, 0), &[5, 7]), InsertOutcome::New);
//! assert_eq!(store.insert(2, Money::new(20, 0), &[7]), InsertOutcome::New);
//!
//! assert_eq!(store.find_min_price(7), Money::new(10, 0));
//! assert_eq!(store.find_max_price(7), Money::new(20, 0));
//! assert_eq!(store.delete(2), 7);
//! assert!(store.find(2).is_zero());
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{HikeRate, InsertOutcome, Item, ItemId, Tag};

/// Ordered primary index plus inverted tag index.
#[derive(Debug, Clone, Default)]
pub struct IndexedStore {
    items: BTreeMap<ItemId, Item>,
    tags: HashMap<Tag, HashSet<ItemId>>,
}

impl IndexedStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        IndexedStore::default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Inserts a new item or updates an existing one.
    ///
    /// ## Behavior
    /// - New id: stores the item with `tags` (possibly empty)
    /// - Existing id, non-empty `tags`: old tags are unindexed, then replaced
    /// - Existing id, empty `tags`: tags are left as they are
    /// - Existing id: price is always overwritten
    pub fn insert(&mut self, id: ItemId, price: Money, tags: &[Tag]) -> InsertOutcome {
        debug!(id, price = %price, tags = tags.len(), "Inserting item");

        if !self.items.contains_key(&id) {
            self.items.insert(id, Item::new(id, price, tags));
            self.index_tags(id, tags);
            return InsertOutcome::New;
        }

        if !tags.is_empty() {
            self.replace_tags(id, tags);
        }
        self.reprice(id, price);
        InsertOutcome::Existing
    }

    /// Deletes an item and returns the sum of its tags (0 if absent).
    ///
    /// Duplicate tags are counted once per occurrence.
    pub fn delete(&mut self, id: ItemId) -> i64 {
        let Some(item) = self.items.remove(&id) else {
            return 0;
        };

        for &tag in &item.tags {
            self.unindex_tag(tag, id);
        }

        let sum = item.tag_sum();
        debug!(id, sum, "Deleted item");
        sum
    }

    /// Removes tags from an item's description.
    ///
    /// ## Behavior
    /// - Empty `tags`: returns `Ok(0)`, the id is not checked
    /// - Unknown id: `Err(CoreError::ItemNotFound)`
    /// - Each input tag present on the item removes one occurrence and adds
    ///   its value to the sum; absent tags are skipped
    ///
    /// The id leaves a tag's inverted set only when its last occurrence of
    /// that tag is gone.
    pub fn remove_names(&mut self, id: ItemId, tags: &[Tag]) -> CoreResult<i64> {
        if tags.is_empty() {
            return Ok(0);
        }

        let Some(item) = self.items.get_mut(&id) else {
            warn!(id, "Tag removal for unknown item");
            return Err(CoreError::ItemNotFound(id));
        };

        let mut sum = 0i64;
        let mut emptied = Vec::new();
        for &tag in tags {
            if item.remove_tag_once(tag) {
                sum = sum.wrapping_add(tag);
                if !item.has_tag(tag) {
                    emptied.push(tag);
                }
            }
        }

        for tag in emptied {
            self.unindex_tag(tag, id);
        }

        debug!(id, sum, "Removed tags");
        Ok(sum)
    }

    /// Raises the price of every item with id in `[low, high]` by `rate`.
    ///
    /// ## Behavior
    /// - Returns zero without touching anything if the store is empty,
    ///   `low > high`, or no stored id can fall inside the range
    /// - Each increase is truncated to whole cents before it is applied
    /// - Returns the sum of the applied increases
    ///
    /// ## Example
    /// ```rust
    /// use tagstore_core::{HikeRate, IndexedStore, Money};
    ///
    /// let mut store = IndexedStore::new();
    /// store.insert(1, Money::new(100, 0), &[]);
    ///
    /// let total = store.price_hike(1, 1, HikeRate::from_percentage(12.345));
    /// assert_eq!(total, Money::new(12, 34));
    /// assert_eq!(store.find(1), Money::new(112, 34));
    /// ```
    pub fn price_hike(&mut self, low: ItemId, high: ItemId, rate: HikeRate) -> Money {
        let Some((&min_id, _)) = self.items.first_key_value() else {
            return Money::zero();
        };
        let Some((&max_id, _)) = self.items.last_key_value() else {
            return Money::zero();
        };
        if low > high || max_id < low || min_id > high {
            return Money::zero();
        }

        let updates: Vec<(ItemId, Money, Money)> = self
            .items
            .range(low..=high)
            .map(|(&id, item)| (id, item.price, item.price.percentage_increase(rate)))
            .collect();

        let mut total = 0i64;
        for &(id, old_price, increase) in &updates {
            self.reprice(id, old_price + increase);
            total = total.wrapping_add(increase.total_cents());
        }

        debug!(
            low,
            high,
            rate = rate.percentage(),
            items = updates.len(),
            total,
            "Applied price hike"
        );
        Money::from_cents(total)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the price of `id`, or zero if absent.
    ///
    /// A missing item and an item priced at 0.00 look the same here; use
    /// [`IndexedStore::get`] to tell them apart.
    pub fn find(&self, id: ItemId) -> Money {
        self.items
            .get(&id)
            .map(|item| item.price)
            .unwrap_or_default()
    }

    /// Lowest price among items tagged `tag`, or zero if none are.
    pub fn find_min_price(&self, tag: Tag) -> Money {
        self.prices_with_tag(tag).min().unwrap_or_default()
    }

    /// Highest price among items tagged `tag`, or zero if none are.
    pub fn find_max_price(&self, tag: Tag) -> Money {
        self.prices_with_tag(tag).max().unwrap_or_default()
    }

    /// Counts items tagged `tag` priced within `[low, high]`.
    ///
    /// Saturates at `i32::MAX`.
    pub fn find_price_range(&self, tag: Tag, low: Money, high: Money) -> i32 {
        if low > high {
            return 0;
        }

        let count = self
            .prices_with_tag(tag)
            .filter(|price| (low..=high).contains(price))
            .count();
        saturating_count(count)
    }

    /// Returns the item stored under `id`.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Iterates the ids carrying `tag`, in no particular order.
    pub fn ids_with_tag(&self, tag: Tag) -> impl Iterator<Item = ItemId> + '_ {
        self.tags.get(&tag).into_iter().flatten().copied()
    }

    /// Iterates all items in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the store has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct tags currently indexed.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Verifies that the two indexes agree.
    ///
    /// ## Checks
    /// 1. Every tag of every item is indexed under that item's id
    /// 2. Every indexed (tag, id) pair names a stored item carrying the tag
    /// 3. No tag maps to an empty set
    pub fn check_consistency(&self) -> CoreResult<()> {
        for item in self.items.values() {
            for &tag in &item.tags {
                let indexed = self.tags.get(&tag).is_some_and(|ids| ids.contains(&item.id));
                if !indexed {
                    return Err(CoreError::IndexInconsistent {
                        tag,
                        id: item.id,
                        reason: "missing from inverted index".to_string(),
                    });
                }
            }
        }

        for (&tag, ids) in &self.tags {
            if ids.is_empty() {
                return Err(CoreError::IndexInconsistent {
                    tag,
                    id: 0,
                    reason: "empty id set".to_string(),
                });
            }
            for &id in ids {
                let carried = self.items.get(&id).is_some_and(|item| item.has_tag(tag));
                if !carried {
                    return Err(CoreError::IndexInconsistent {
                        tag,
                        id,
                        reason: "stale inverted index entry".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    // =========================================================================
    // Index Helpers
    // =========================================================================

    /// Prices of the items carrying `tag`.
    fn prices_with_tag(&self, tag: Tag) -> impl Iterator<Item = Money> + '_ {
        self.ids_with_tag(tag)
            .filter_map(move |id| self.items.get(&id).map(|item| item.price))
    }

    /// Replaces an existing item's tags, unindexing the old ones first.
    fn replace_tags(&mut self, id: ItemId, tags: &[Tag]) {
        let Some(item) = self.items.get_mut(&id) else {
            return;
        };
        let old = std::mem::replace(&mut item.tags, tags.to_vec());

        for tag in old {
            self.unindex_tag(tag, id);
        }
        self.index_tags(id, tags);
    }

    /// Price-only update shared by `insert` and `price_hike`.
    fn reprice(&mut self, id: ItemId, price: Money) {
        if let Some(item) = self.items.get_mut(&id) {
            item.price = price;
        }
    }

    /// Adds `id` to the inverted set of every tag in `tags`.
    fn index_tags(&mut self, id: ItemId, tags: &[Tag]) {
        for &tag in tags {
            self.tags.entry(tag).or_default().insert(id);
        }
    }

    /// Removes `id` from `tag`'s inverted set, dropping the set once empty.
    fn unindex_tag(&mut self, tag: Tag, id: ItemId) {
        if let Some(ids) = self.tags.get_mut(&tag) {
            ids.remove(&id);
            if ids.is_empty() {
                self.tags.remove(&tag);
            }
        }
    }
}

fn saturating_count(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn sample_store() -> IndexedStore {
        let mut store = IndexedStore::new();
        store.insert(1, m("10.00"), &[5, 7]);
        store.insert(2, m("20.00"), &[7]);
        store.insert(3, m("15.50"), &[7, 9]);
        store.insert(8, m("3.99"), &[9]);
        store
    }

    #[test]
    fn test_scenario() {
        let mut store = IndexedStore::new();

        assert_eq!(store.insert(1, m("10.00"), &[5, 7]), InsertOutcome::New);
        assert_eq!(store.insert(2, m("20.00"), &[7]), InsertOutcome::New);
        assert_eq!(store.find_min_price(7), m("10.00"));
        assert_eq!(store.find_max_price(7), m("20.00"));
        assert_eq!(store.find_price_range(7, m("10.00"), m("15.00")), 1);
        assert_eq!(store.remove_names(1, &[5]).unwrap(), 5);
        assert_eq!(store.delete(2), 7);
        assert_eq!(store.find(2), m("0.00"));

        store.check_consistency().unwrap();
    }

    #[test]
    fn test_insert_existing_replaces_tags() {
        let mut store = sample_store();

        assert_eq!(store.insert(1, m("11.00"), &[9, 12]), InsertOutcome::Existing);

        assert_eq!(store.find(1), m("11.00"));
        assert_eq!(store.get(1).unwrap().tags, vec![9, 12]);
        // Tag 5 only belonged to item 1 and must be pruned
        assert_eq!(store.ids_with_tag(5).count(), 0);
        assert!(!store.ids_with_tag(7).any(|id| id == 1));
        assert!(store.ids_with_tag(12).any(|id| id == 1));
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_insert_price_only_keeps_tags() {
        let mut store = IndexedStore::new();
        store.insert(4, m("1.00"), &[3, 6]);
        let tags_before = store.tag_count();

        assert_eq!(store.insert(4, m("2.50"), &[]), InsertOutcome::Existing);

        assert_eq!(store.find(4), m("2.50"));
        assert_eq!(store.get(4).unwrap().tags, vec![3, 6]);
        assert_eq!(store.tag_count(), tags_before);
        assert_eq!(store.ids_with_tag(3).collect::<Vec<_>>(), vec![4]);
        assert_eq!(store.ids_with_tag(6).collect::<Vec<_>>(), vec![4]);
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_insert_without_tags() {
        let mut store = IndexedStore::new();
        assert_eq!(store.insert(1, m("5.00"), &[]), InsertOutcome::New);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tag_count(), 0);
        assert!(store.get(1).unwrap().tags.is_empty());
    }

    #[test]
    fn test_find_missing_is_zero() {
        let store = sample_store();
        assert!(store.find(404).is_zero());
        assert!(store.get(404).is_none());
    }

    #[test]
    fn test_delete_sum_law() {
        let mut store = sample_store();

        assert_eq!(store.delete(3), 16);
        assert!(store.find(3).is_zero());
        assert!(!store.ids_with_tag(7).any(|id| id == 3));
        assert!(!store.ids_with_tag(9).any(|id| id == 3));
        assert_eq!(store.len(), 3);
        store.check_consistency().unwrap();

        // Absent id: no effect
        assert_eq!(store.delete(3), 0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_prunes_tags() {
        let mut store = sample_store();
        store.delete(1);
        assert_eq!(store.ids_with_tag(5).count(), 0);
        assert_eq!(store.find_min_price(5), Money::zero());
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_delete_with_duplicate_tags() {
        let mut store = IndexedStore::new();
        store.insert(1, m("1.00"), &[4, 4, 10]);
        assert_eq!(store.delete(1), 18);
        assert_eq!(store.tag_count(), 0);
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_min_max_price() {
        let store = sample_store();
        assert_eq!(store.find_min_price(7), m("10.00"));
        assert_eq!(store.find_max_price(7), m("20.00"));
        assert_eq!(store.find_min_price(9), m("3.99"));
        assert_eq!(store.find_max_price(9), m("15.50"));

        assert!(store.find_min_price(1000).is_zero());
        assert!(store.find_max_price(1000).is_zero());
    }

    #[test]
    fn test_min_price_with_ties() {
        let mut store = IndexedStore::new();
        store.insert(1, m("2.00"), &[1]);
        store.insert(2, m("2.00"), &[1]);
        store.insert(3, m("9.00"), &[1]);
        assert_eq!(store.find_min_price(1), m("2.00"));
    }

    #[test]
    fn test_price_range() {
        let store = sample_store();
        assert_eq!(store.find_price_range(7, m("10.00"), m("20.00")), 3);
        assert_eq!(store.find_price_range(7, m("10.01"), m("19.99")), 1);
        assert_eq!(store.find_price_range(7, m("15.50"), m("15.50")), 1);
        assert_eq!(store.find_price_range(7, m("20.00"), m("10.00")), 0);
        assert_eq!(store.find_price_range(1000, m("0.00"), m("99.00")), 0);
    }

    #[test]
    fn test_price_range_monotonic() {
        let store = sample_store();
        let low = m("0.00");
        let mut previous = 0;
        for high in ["0.00", "3.99", "10.00", "15.49", "15.50", "20.00", "100.00"] {
            let count = store.find_price_range(9, low, m(high));
            assert!(count >= previous);
            previous = count;
        }

        let high = m("100.00");
        previous = 0;
        for low in ["50.00", "20.00", "15.50", "10.00", "0.00"] {
            let count = store.find_price_range(7, m(low), high);
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn test_price_hike_truncation() {
        let mut store = IndexedStore::new();
        store.insert(1, m("100.00"), &[1]);

        let total = store.price_hike(1, 1, HikeRate::from_percentage(12.345));

        assert_eq!(total.total_cents(), 1234);
        assert_eq!(total, m("12.34"));
        assert_eq!(store.find(1), m("112.34"));
    }

    #[test]
    fn test_price_hike_range_only() {
        let mut store = sample_store();

        // ids 2 and 3 only: 20.00 → 22.00, 15.50 → 17.05
        let total = store.price_hike(2, 7, HikeRate::from_percentage(10.0));

        assert_eq!(total, m("3.55"));
        assert_eq!(store.find(1), m("10.00"));
        assert_eq!(store.find(2), m("22.00"));
        assert_eq!(store.find(3), m("17.05"));
        assert_eq!(store.find(8), m("3.99"));
        // Tags untouched
        assert_eq!(store.get(3).unwrap().tags, vec![7, 9]);
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_price_hike_noop_cases() {
        let mut empty = IndexedStore::new();
        assert!(empty.price_hike(0, 10, HikeRate::from_percentage(5.0)).is_zero());

        let mut store = sample_store();
        let rate = HikeRate::from_percentage(50.0);
        assert!(store.price_hike(5, 2, rate).is_zero());
        assert!(store.price_hike(9, 100, rate).is_zero());
        assert!(store.price_hike(-10, 0, rate).is_zero());
        // Gap between stored ids: nothing qualifies
        assert!(store.price_hike(4, 7, rate).is_zero());

        assert_eq!(store.find(1), m("10.00"));
        assert_eq!(store.find(8), m("3.99"));
    }

    #[test]
    fn test_remove_names() {
        let mut store = sample_store();

        assert_eq!(store.remove_names(3, &[9, 42, 7]).unwrap(), 16);
        assert!(store.get(3).unwrap().tags.is_empty());
        assert!(!store.ids_with_tag(7).any(|id| id == 3));
        // Tag 9 still carried by item 8
        assert_eq!(store.ids_with_tag(9).collect::<Vec<_>>(), vec![8]);
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_remove_names_empty_list() {
        let mut store = sample_store();
        assert_eq!(store.remove_names(1, &[]).unwrap(), 0);
        assert_eq!(store.remove_names(404, &[]).unwrap(), 0);
        assert_eq!(store.get(1).unwrap().tags, vec![5, 7]);
    }

    #[test]
    fn test_remove_names_unknown_item() {
        let mut store = sample_store();
        let err = store.remove_names(404, &[5]).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(404)));
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_remove_names_duplicates() {
        let mut store = IndexedStore::new();
        store.insert(1, m("1.00"), &[4, 4, 10]);

        // One occurrence left, so the id stays indexed under 4
        assert_eq!(store.remove_names(1, &[4]).unwrap(), 4);
        assert_eq!(store.get(1).unwrap().tags, vec![4, 10]);
        assert_eq!(store.ids_with_tag(4).collect::<Vec<_>>(), vec![1]);
        store.check_consistency().unwrap();

        // Second 4 in the input finds nothing left to remove
        assert_eq!(store.remove_names(1, &[4, 4]).unwrap(), 4);
        assert_eq!(store.ids_with_tag(4).count(), 0);
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_consistency_after_mixed_operations() {
        let mut store = IndexedStore::new();
        for id in 0..50i64 {
            let tags: Vec<Tag> = (0..(id % 5)).map(|t| (id + t) % 7).collect();
            store.insert(id, Money::from_cents(id * 137), &tags);
        }
        store.check_consistency().unwrap();

        for id in (0..50i64).step_by(3) {
            store.insert(id, Money::from_cents(id), &[id % 4, 100]);
        }
        store.check_consistency().unwrap();

        for id in (0..50i64).step_by(4) {
            let _ = store.remove_names(id, &[100, 1, 2]);
        }
        store.check_consistency().unwrap();

        for id in (0..50i64).step_by(5) {
            store.delete(id);
        }
        store.check_consistency().unwrap();

        store.price_hike(10, 30, HikeRate::from_percentage(7.5));
        store.check_consistency().unwrap();
        assert_eq!(store.len(), 40);
    }

    #[test]
    fn test_check_consistency_detects_stale_entry() {
        let mut store = sample_store();
        // Bypass the helpers on purpose
        store.tags.entry(5).or_default().insert(2);
        assert!(matches!(
            store.check_consistency(),
            Err(CoreError::IndexInconsistent { tag: 5, id: 2, .. })
        ));
    }

    #[test]
    fn test_check_consistency_detects_missing_entry() {
        let mut store = sample_store();
        store.tags.remove(&5);
        assert!(matches!(
            store.check_consistency(),
            Err(CoreError::IndexInconsistent { tag: 5, id: 1, .. })
        ));
    }

    #[test]
    fn test_tag_sums_wrap_at_bounds() {
        let mut store = IndexedStore::new();
        store.insert(1, m("1.00"), &[i64::MAX, 1]);
        assert_eq!(store.delete(1), i64::MIN);
        assert_eq!(store.tag_count(), 0);
        store.check_consistency().unwrap();

        store.insert(2, m("1.00"), &[i64::MAX, 1, i64::MIN]);
        assert_eq!(store.remove_names(2, &[i64::MAX, 1]).unwrap(), i64::MIN);
        assert_eq!(store.get(2).unwrap().tags, vec![i64::MIN]);
        assert_eq!(store.ids_with_tag(i64::MAX).count(), 0);
        assert_eq!(store.ids_with_tag(1).count(), 0);
        store.check_consistency().unwrap();

        assert_eq!(store.remove_names(2, &[i64::MIN]).unwrap(), i64::MIN);
        assert_eq!(store.tag_count(), 0);
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_price_hike_on_huge_price() {
        let mut store = IndexedStore::new();
        let huge = m("100000000000000000");
        store.insert(1, huge, &[3]);
        store.insert(2, m("10.00"), &[3]);

        let rate = HikeRate::from_percentage(1.0);
        let expected_increase = huge.percentage_increase(rate);
        let total = store.price_hike(1, 2, rate);

        assert_eq!(
            total.total_cents(),
            expected_increase.total_cents().wrapping_add(10)
        );
        assert_eq!(store.find(1), huge + expected_increase);
        assert_eq!(store.find(2), m("10.10"));
        assert_eq!(store.get(1).unwrap().tags, vec![3]);
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_price_hike_negative_rate() {
        let mut store = IndexedStore::new();
        store.insert(1, m("9.99"), &[1]);
        store.insert(2, m("100.00"), &[1]);

        // 999 * -10% = -99.9 → -99; 10000 * -10% = -1000
        let total = store.price_hike(1, 2, HikeRate::from_percentage(-10.0));

        assert_eq!(total.total_cents(), -1099);
        assert_eq!(total.to_string(), "-10.99");
        assert_eq!(store.find(1), m("9.00"));
        assert_eq!(store.find(2), m("90.00"));
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_extreme_ids_and_tags() {
        let mut store = IndexedStore::new();
        store.insert(i64::MIN, m("1.00"), &[i64::MIN]);
        store.insert(i64::MAX, m("2.00"), &[i64::MAX]);

        let total = store.price_hike(i64::MIN, i64::MAX, HikeRate::from_percentage(50.0));
        assert_eq!(total, m("1.50"));
        assert_eq!(store.find_max_price(i64::MAX), m("3.00"));
        assert_eq!(store.find_price_range(i64::MIN, m("1.50"), m("1.50")), 1);
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_saturating_count() {
        assert_eq!(saturating_count(3), 3);
        assert_eq!(saturating_count(i32::MAX as usize), i32::MAX);
        assert_eq!(saturating_count(usize::MAX), i32::MAX);
    }

    #[test]
    fn test_iter_is_ordered() {
        let store = sample_store();
        let ids: Vec<ItemId> = store.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 8]);
    }
}
