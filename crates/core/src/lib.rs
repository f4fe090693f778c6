#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    clippy::cast_lossless,
    clippy::missing_errors_doc,
    clippy::used_underscore_binding,
    clippy::redundant_closure_for_method_calls,
    clippy::type_repetition_in_bounds,
    clippy::inconsistent_struct_constructor,
    clippy::default_trait_access,
    clippy::map_unwrap_or,
    clippy::items_after_statements
)]

mod fuel;
mod func_type;
mod global;
mod hint;
mod host_error;
mod index_ty;
mod limiter;
mod memory;
mod nan_preserving_float;
pub mod simd;
mod table;
mod trap;
mod typed;
mod units;
mod untyped;
mod value;
mod wasm;

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use self::value::{
    ArithmeticOps,
    ExtendInto,
    Float,
    Integer,
    LittleEndianConvert,
    SignExtendFrom,
    TruncateSaturateInto,
    TryTruncateInto,
    WrapInto,
};
pub use self::{
    fuel::{Fuel, FuelCosts, FuelCostsProvider, FuelError},
    func_type::{FuncType, FuncTypeError},
    global::{Global, GlobalError, GlobalType, Mutability},
    hint::{cold, likely, unlikely},
    host_error::HostError,
    index_ty::IndexType,
    limiter::{LimiterError, ResourceLimiter, ResourceLimiterRef},
    memory::{Memory, MemoryError, MemoryType, MemoryTypeBuilder},
    nan_preserving_float::{F32, F64},
    table::{ElementSegment, ElementSegmentRef, RefType, Table, TableError, TableType, TypedRef, UntypedRef},
    trap::{Trap, TrapCode},
    typed::{Typed, TypedVal},
    units::Pages,
    untyped::{ReadAs, UntypedVal, WriteAs},
    value::{ValType, V128},
};
