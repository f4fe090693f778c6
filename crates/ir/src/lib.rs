#![allow(clippy::len_without_is_empty)]

mod primitive;

#[cfg(test)]
mod tests;

pub use self::{
    decode::{CheckedOpDecoder, DecodeError, UncheckedOpDecoder},
    dispatch::{OpVariant, UncheckedOpVariantDecoder},
    encode::{OpEncoder, OpIter, OpPos, PatchError},
    immediate::*,
    primitive::*,
    r#enum::*,
    simd_code::SimdCode,
    slice::*,
    visit::Visitor,
};
pub mod index;
use corvid_core as core;

/// Alternate naming used by parts of the translator for [`Instruction`].
pub type Op = Instruction;
/// Alternate naming used by parts of the translator for [`Reg`].
pub type Slot = Reg;
/// Alternate naming used by parts of the translator for [`RegSpan`].
pub type SlotSpan = RegSpan;
/// Alternate naming used by parts of the translator for [`BoundedRegSpan`].
pub type BoundedSlotSpan = BoundedRegSpan;
/// Alternate naming used by parts of the translator for [`FixedRegSpan`].
pub type FixedSlotSpan<const N: u16> = FixedRegSpan<N>;

mod decode;
mod dispatch;
mod encode;
mod r#enum;
mod for_each_op;
mod immediate;
mod simd_code;
mod slice;
mod visit;
