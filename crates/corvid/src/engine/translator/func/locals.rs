use crate::{core::ValType, engine::TranslationError, Error};
use alloc::vec::Vec;
use core::{cmp, iter};

#[cfg(doc)]
use super::FuncTranslator;

/// The index of a local variable or function parameter within a translated function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LocalIdx(u32);

impl From<u32> for LocalIdx {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl From<LocalIdx> for u32 {
    fn from(index: LocalIdx) -> Self {
        index.0
    }
}

/// Whether a declared local variable needs an explicit zero-initializing
/// record emitted at the head of its function's bytecode.
///
/// Function parameters never need this: the caller already supplies their
/// value. Declared locals are implicitly zero per the Wasm spec, but the
/// zero only needs to be materialized if some program point can read the
/// local before any definite write to it reaches that point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum LocalInitState {
    /// Neither a read nor a write of this local has been seen yet.
    Undecided,
    /// A write was seen before any read; no explicit zero-init is required.
    Written,
    /// A read was seen before any write; an explicit zero-init is required.
    NeedsInit,
}

/// Registered types of local variables and function parameters of the
/// currently translated function in the [`FuncTranslator`].
#[derive(Debug, Default, Clone)]
pub struct LocalsRegistry {
    /// The types of the first defined local variables.
    tys_first: Vec<ValType>,
    /// The types of the remaining defined local variables, grouped by common type.
    tys_remaining: Vec<LocalGroup>,
    /// The number of registered locals.
    len_locals: usize,
    /// The number of locals that are function parameters.
    ///
    /// Parameters occupy the first `params_end` local indices and never
    /// require explicit zero-initialization.
    params_end: usize,
    /// Per-local read/write tracking used to derive `needs_explicit_init_on_startup`.
    init_state: Vec<LocalInitState>,
}

impl LocalsRegistry {
    /// The maximum number of local variables per function.
    const LOCAL_VARIABLES_MAX: usize = 30_000;

    /// The maximum number of local variables stored in the fast `tys_first` vector.
    const FIRST_TYS_MAX: usize = 100;

    /// Resets the [`LocalsRegistry`].
    pub fn reset(&mut self) {
        self.tys_first.clear();
        self.tys_remaining.clear();
        self.len_locals = 0;
        self.params_end = 0;
        self.init_state.clear();
    }

    /// Returns the number of registered local variables and function parameters.
    pub fn len(&self) -> usize {
        self.len_locals
    }

    /// Returns `true` if no local variables or function parameters are registered.
    pub fn is_empty(&self) -> bool {
        self.len_locals == 0
    }

    /// Registers `amount` of locals of type `ty` for `self`.
    ///
    /// # Errors
    ///
    /// If too many local variables have been registered.
    pub fn register(&mut self, amount: usize, ty: ValType) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        if self.len().saturating_add(amount) > Self::LOCAL_VARIABLES_MAX {
            return Err(Error::from(TranslationError::TooManyLocals));
        }
        let vacant_first = Self::FIRST_TYS_MAX.saturating_sub(self.tys_first.len());
        let push_to_first = cmp::min(vacant_first, amount);
        self.tys_first.extend(iter::repeat_n(ty, push_to_first));
        let remaining_amount = amount - push_to_first;
        let remaining_index = (self.len() + amount - 1) as u32;
        if remaining_amount > 0 {
            self.tys_remaining
                .push(LocalGroup::new(remaining_index, ty));
        }
        self.len_locals += amount;
        self.init_state
            .extend(iter::repeat_n(LocalInitState::Undecided, amount));
        Ok(())
    }

    /// Marks every local index registered so far as a function parameter.
    ///
    /// Must be called exactly once, right after the function's parameters
    /// have been registered and before any declared `local` is registered.
    pub fn mark_params_end(&mut self) {
        self.params_end = self.len_locals;
    }

    /// Records a read (`local.get`) of the local at `index`.
    ///
    /// If no write of this local has been observed yet, it is marked as
    /// needing an explicit zero-initializing record.
    pub fn on_local_read(&mut self, index: LocalIdx) {
        let index = Self::local_idx_to_index(index);
        if index < self.params_end {
            return;
        }
        if let Some(state) = self.init_state.get_mut(index) {
            if *state == LocalInitState::Undecided {
                *state = LocalInitState::NeedsInit;
            }
        }
    }

    /// Records a write (`local.set` / `local.tee`) of the local at `index`.
    ///
    /// If no read of this local has been observed yet, it is marked as not
    /// needing an explicit zero-initializing record.
    pub fn on_local_write(&mut self, index: LocalIdx) {
        let index = Self::local_idx_to_index(index);
        if index < self.params_end {
            return;
        }
        if let Some(state) = self.init_state.get_mut(index) {
            if *state == LocalInitState::Undecided {
                *state = LocalInitState::Written;
            }
        }
    }

    /// Invalidates every local currently recorded as "written before read".
    ///
    /// Called whenever a branch is lowered whose target may be reached
    /// without executing an intervening write, so that a local written only
    /// on a path skipped by the branch is not falsely assumed initialized.
    /// This is a conservative approximation: it may re-require zero-init for
    /// a local that a full reachability analysis would have cleared, but it
    /// never skips a zero-init that is actually needed.
    pub fn invalidate_writes_across_branch(&mut self) {
        for state in &mut self.init_state {
            if *state == LocalInitState::Written {
                *state = LocalInitState::Undecided;
            }
        }
    }

    /// Returns an iterator yielding, for every declared local (parameters
    /// excluded) in index order, whether it needs an explicit zero-init
    /// record emitted at the head of the function's bytecode.
    pub fn needs_explicit_init(&self) -> impl Iterator<Item = bool> + '_ {
        self.init_state[self.params_end..]
            .iter()
            .map(|state| matches!(state, LocalInitState::NeedsInit))
    }

    /// Converts `index` into a `usize` value.
    fn local_idx_to_index(index: LocalIdx) -> usize {
        let index = u32::from(index);
        let Ok(index) = usize::try_from(index) else {
            panic!("out of bounds `LocalIdx`: {index}")
        };
        index
    }

    /// Returns the type of the local variable at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds and does not refer to a local in `self`.
    pub fn ty(&self, index: LocalIdx) -> ValType {
        let index_sz = Self::local_idx_to_index(index);
        match self.tys_first.get(index_sz) {
            Some(ty) => *ty,
            None => self
                .ty_slow(index)
                .unwrap_or_else(|| panic!("out of bounds local index: {index:?}")),
        }
    }

    /// Returns the type of the local variable at `index` if any.
    ///
    /// This is the slow-path for local variables that have been stored in the `remaining` buffer.
    #[cold]
    fn ty_slow(&self, index: LocalIdx) -> Option<ValType> {
        if self.tys_remaining.is_empty() {
            return None;
        }
        match self
            .tys_remaining
            .binary_search_by_key(&index.0, LocalGroup::max_index)
        {
            Err(i) if i == self.tys_remaining.len() => None,
            Ok(i) | Err(i) => Some(self.tys_remaining[i].ty()),
        }
    }
}

/// A group of one or more locals sharing a common type.
#[derive(Debug, Copy, Clone)]
struct LocalGroup {
    /// The local index of the last local in the group.
    max_index: u32,
    /// The shared type of the locals in the group.
    ty: ValType,
}

impl LocalGroup {
    /// Creates a new [`LocalGroup`].
    fn new(max_index: u32, ty: ValType) -> Self {
        Self { max_index, ty }
    }

    /// Returns the maximum index of the local variables in the [`LocalGroup`].
    fn max_index(&self) -> u32 {
        self.max_index
    }

    /// Returns the [`ValType`] of the [`LocalGroup`].
    fn ty(&self) -> ValType {
        self.ty
    }
}
