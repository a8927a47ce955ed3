//! Open-addressing memo table.
//!
//! # Layout
//!
//! A power-of-two array of slots. A key's home slot comes from Fibonacci
//! hashing of its packed bits; collisions walk forward one slot at a time,
//! wrapping at the end (linear probing). Once half the slots are occupied the
//! array doubles and every entry is rehashed, so at least one slot is always
//! free and every probe sequence terminates.
//!
//! # Complexity
//!
//! Amortized O(1) insert and lookup while the load factor stays below 50%.

use crate::error::{Error, Result};

use super::{MemoEntry, StateKey};

const MIN_CAPACITY: usize = 8;

/// Largest slot count a table may reach: 2^28 slots, the derived size for a
/// 24-city solve.
pub const MAX_TABLE_CAPACITY: usize = 1 << 28;
const FIBONACCI_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

/// Associative store from [`StateKey`] to best cost and predecessor.
///
/// # Examples
///
/// ```
/// use held_karp::memo::{MemoTable, StateKey};
/// use held_karp::subset::CitySet;
///
/// let mut table = MemoTable::with_capacity(16).unwrap();
/// let key = StateKey::new(CitySet::singleton(3), 3);
/// assert!(table.put(key, 2.5, 0).unwrap().is_none());
///
/// let entry = table.get(&key).expect("present");
/// assert_eq!(entry.cost(), 2.5);
/// assert_eq!(entry.predecessor(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MemoTable {
    slots: Vec<Option<MemoEntry>>,
    len: usize,
    shift: u32,
    resizes: usize,
}

impl MemoTable {
    /// Creates a table with at least `capacity` slots, rounded up to a power
    /// of two.
    ///
    /// Fails with [`Error::MemoAllocation`] above [`MAX_TABLE_CAPACITY`] or
    /// when the allocator refuses the slots.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = capacity
            .max(MIN_CAPACITY)
            .checked_next_power_of_two()
            .ok_or(Error::MemoAllocation { slots: capacity })?;
        Ok(Self {
            slots: allocate_slots(capacity)?,
            len: 0,
            shift: u64::BITS - capacity.trailing_zeros(),
            resizes: 0,
        })
    }

    /// Creates a table sized so that one solve over `n` cities never resizes.
    pub fn for_cities(n: usize) -> Result<Self> {
        Self::with_capacity(Self::capacity_for_cities(n))
    }

    /// Slot count [`for_cities`](Self::for_cities) asks for, before any
    /// allocation.
    pub fn capacity_for_cities(n: usize) -> usize {
        capacity_for(expected_states(n))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Stored entries divided by slots.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// How many times the table has doubled.
    pub fn resizes(&self) -> usize {
        self.resizes
    }

    /// Stores `cost` and `predecessor` for `key`.
    ///
    /// An existing entry for the same key is replaced as a whole, cost and
    /// predecessor together, and returned.
    ///
    /// Fails with [`Error::MemoAllocation`] if the table needs to double and
    /// cannot. The new entry is stored either way and the old slots are kept.
    pub fn put(
        &mut self,
        key: StateKey,
        cost: f64,
        predecessor: usize,
    ) -> Result<Option<MemoEntry>> {
        let entry = MemoEntry::new(key, cost, predecessor);
        let slot = self.probe(&key);
        let previous = self.slots[slot].replace(entry);
        if previous.is_none() {
            self.len += 1;
            if self.len * 2 >= self.capacity() {
                self.grow()?;
            }
        }
        Ok(previous)
    }

    /// Looks up the entry for `key`.
    pub fn get(&self, key: &StateKey) -> Option<&MemoEntry> {
        self.slots[self.probe(key)].as_ref()
    }

    /// Looks up the entry for `key`, treating absence as a broken invariant.
    ///
    /// The recurrence only reads states it has already written, so a miss
    /// here means the enumeration order is wrong.
    pub fn entry(&self, key: &StateKey) -> Result<&MemoEntry> {
        self.get(key).ok_or(Error::MissingState {
            visited: key.visited().bits(),
            city: key.city(),
        })
    }

    /// Returns `true` if `key` has an entry.
    pub fn contains_key(&self, key: &StateKey) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over stored entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &MemoEntry> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    fn home(&self, key: &StateKey) -> usize {
        (key.packed().wrapping_mul(FIBONACCI_MULTIPLIER) >> self.shift) as usize
    }

    /// Index of the slot holding `key`, or of the empty slot where it belongs.
    fn probe(&self, key: &StateKey) -> usize {
        let mask = self.capacity() - 1;
        let mut slot = self.home(key);
        loop {
            match &self.slots[slot] {
                Some(entry) if entry.key() != *key => slot = (slot + 1) & mask,
                _ => return slot,
            }
        }
    }

    fn grow(&mut self) -> Result<()> {
        let capacity = self.capacity() * 2;
        let old = std::mem::replace(&mut self.slots, allocate_slots(capacity)?);
        self.shift = u64::BITS - capacity.trailing_zeros();
        self.resizes += 1;
        log::debug!(
            "memo.grow: capacity={capacity} len={} resizes={}",
            self.len,
            self.resizes
        );
        for entry in old.into_iter().flatten() {
            let slot = self.probe(&entry.key());
            self.slots[slot] = Some(entry);
        }
        Ok(())
    }
}

fn allocate_slots(capacity: usize) -> Result<Vec<Option<MemoEntry>>> {
    if capacity > MAX_TABLE_CAPACITY {
        return Err(Error::MemoAllocation { slots: capacity });
    }
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| Error::MemoAllocation { slots: capacity })?;
    slots.resize(capacity, None);
    Ok(slots)
}

/// Number of states one solve over `n` cities stores: `(n-1)·2^(n-2)` DP
/// states plus the terminal state. Saturates instead of overflowing.
pub fn expected_states(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    let per_size = 1usize.checked_shl((n - 2) as u32).unwrap_or(usize::MAX);
    per_size.saturating_mul(n - 1).saturating_add(1)
}

/// Slot count that keeps `states` entries strictly under half load.
fn capacity_for(states: usize) -> usize {
    states
        .saturating_mul(2)
        .saturating_add(1)
        .checked_next_power_of_two()
        .unwrap_or(usize::MAX / 2 + 1)
}
