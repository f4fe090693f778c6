use crate::{core::UntypedVal, engine::TranslationError, ir::Slot, Error};
use alloc::{
    collections::{btree_map, BTreeMap},
    vec::Vec,
};
use core::{iter::Rev, slice::Iter as SliceIter};

/// A pool of deduplicated function local constant values.
///
/// - Those constant values are identified by their associated [`Slot`].
/// - All constant values are also deduplicated so that no duplicates
///   are stored in a [`ConstRegistry`]. This also means that deciding if two
///   [`Slot`] values refer to the equal constant values can be efficiently
///   done by comparing the [`Slot`] indices without resolving to their
///   underlying constant values.
#[derive(Debug, Default)]
pub struct ConstRegistry {
    /// Mapping from constant [`UntypedVal`] values to [`Slot`] indices.
    const2idx: BTreeMap<UntypedVal, Slot>,
    /// Mapping from [`Slot`] indices to constant [`UntypedVal`] values.
    idx2const: Vec<UntypedVal>,
    /// Mapping from [`Slot`] indices (in allocation order, parallel to
    /// `idx2const`) to the number of times that constant was referenced.
    refcounts: Vec<u32>,
    /// The [`Slot`] index for the next allocated function local constant value.
    next_idx: i16,
}

impl ConstRegistry {
    /// The maximum number of function local constants promoted to a permanent
    /// frame slot, ranked by observed reference count.
    ///
    /// Constants beyond this budget are still deduplicated and assigned a
    /// [`Slot`] (the frame simply grows to fit them), but [`ConstRegistry::is_promoted`]
    /// reports them as not promoted so that callers preferring the ranked
    /// subset (e.g. diagnostics, or a future cap-respecting lowering pass)
    /// can tell the difference.
    pub const MAX_PROMOTED_CONSTS: u16 = 6;

    /// Resets the [`ConstRegistry`] data structure.
    pub fn reset(&mut self) {
        self.const2idx.clear();
        self.idx2const.clear();
        self.refcounts.clear();
        self.next_idx = Self::first_index();
    }

    /// The maximum index for a [`Slot`] referring to function local constant values.
    ///
    /// # Note
    ///
    /// The maximum index is also the one to be assigned to the first allocated
    /// function local constant value as indices are counting downwards.
    fn first_index() -> i16 {
        -1
    }

    /// The minimum index for a [`Slot`] referring to function local constant values.
    ///
    /// # Note
    ///
    /// This index is not assignable to a function local constant value and acts
    /// as a bound to guard against overflowing the range of indices.
    fn last_index() -> i16 {
        i16::MIN
    }

    /// Returns the number of allocated function local constant values.
    pub fn len_consts(&self) -> u16 {
        self.next_idx.abs_diff(Self::first_index())
    }

    /// Allocates a new constant `value` on the [`ConstRegistry`] and returns its [`Slot`].
    ///
    /// # Note
    ///
    /// If the constant `value` already exists in this [`ConstRegistry`] no new value is
    /// allocated and the [`Slot`] of the existing constant `value` is returned instead.
    ///
    /// # Errors
    ///
    /// If too many constant values have been allocated for this [`ConstRegistry`].
    pub fn alloc(&mut self, value: UntypedVal) -> Result<Slot, Error> {
        match self.const2idx.entry(value) {
            btree_map::Entry::Occupied(entry) => {
                let slot = *entry.get();
                self.refcounts[Self::slot_to_index(slot)] += 1;
                Ok(slot)
            }
            btree_map::Entry::Vacant(entry) => {
                if self.next_idx == Self::last_index() {
                    return Err(Error::from(TranslationError::TooManyFuncLocalConstValues));
                }
                let slot = Slot::from(self.next_idx);
                self.next_idx -= 1;
                entry.insert(slot);
                self.idx2const.push(value);
                self.refcounts.push(1);
                Ok(slot)
            }
        }
    }

    /// Converts a constant [`Slot`] into its index into `idx2const`/`refcounts`.
    fn slot_to_index(slot: Slot) -> usize {
        i16::from(slot).wrapping_add(1).unsigned_abs() as usize
    }

    /// Returns the reference count observed so far for the constant at `slot`.
    ///
    /// Returns `0` if `slot` does not refer to a function local constant.
    pub fn refcount(&self, slot: Slot) -> u32 {
        if !slot.is_const() {
            return 0;
        }
        self.refcounts
            .get(Self::slot_to_index(slot))
            .copied()
            .unwrap_or(0)
    }

    /// Returns `true` if the constant at `slot` ranks among the top
    /// [`ConstRegistry::MAX_PROMOTED_CONSTS`] constants by reference count.
    ///
    /// Ties are broken in favor of the constant allocated first, matching the
    /// intuition that an equally-popular constant seen earlier is at least as
    /// likely to still be live when later constants are promoted.
    pub fn is_promoted(&self, slot: Slot) -> bool {
        if !slot.is_const() {
            return false;
        }
        let index = Self::slot_to_index(slot);
        let Some(&refcount) = self.refcounts.get(index) else {
            return false;
        };
        let rank = self
            .refcounts
            .iter()
            .enumerate()
            .filter(|&(other_index, &other_refcount)| {
                other_refcount > refcount || (other_refcount == refcount && other_index < index)
            })
            .count();
        rank < usize::from(Self::MAX_PROMOTED_CONSTS)
    }

    /// Returns the function local constant [`UntypedVal`] of the [`Slot`] if any.
    pub fn get(&self, slot: Slot) -> Option<UntypedVal> {
        if !slot.is_const() {
            return None;
        }
        let index = i16::from(slot).wrapping_add(1).unsigned_abs() as usize;
        self.idx2const.get(index).copied()
    }

    /// Returns an iterator yielding all function local constant values of the [`ConstRegistry`].
    ///
    /// # Note
    ///
    /// The function local constant values are yielded in their allocation order.
    pub fn iter(&self) -> ConstRegistryIter<'_> {
        ConstRegistryIter::new(self)
    }
}

/// Iterator yielding all allocated function local constant values.
pub struct ConstRegistryIter<'a> {
    /// The underlying iterator.
    iter: Rev<SliceIter<'a, UntypedVal>>,
}

impl<'a> ConstRegistryIter<'a> {
    /// Creates a new [`ConstRegistryIter`] from the given [`ConstRegistry`].
    pub fn new(consts: &'a ConstRegistry) -> Self {
        // Note: we need to revert the iteration since we allocate new
        //       function local constants in reverse order of their absolute
        //       vector indices in the function call frame during execution.
        Self {
            iter: consts.idx2const.as_slice().iter().rev(),
        }
    }
}

impl Iterator for ConstRegistryIter<'_> {
    type Item = UntypedVal;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().copied()
    }
}

impl DoubleEndedIterator for ConstRegistryIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().copied()
    }
}

impl ExactSizeIterator for ConstRegistryIter<'_> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}
