//! Corvid: a WebAssembly binary-to-bytecode lowering engine.
//!
//! Corvid decodes a Wasm binary, lowers each function body to a register-style
//! bytecode IR (stack-offset addressed rather than stack-machine addressed),
//! runs a live-range optimizer over the lowered locals, and ships a minimal
//! executor sufficient to run the result. The overall crate layout mirrors the
//! `corvid` register-machine architecture this crate descends from.
//!
//! # Example
//!
//! ```
//! use corvid::*;
//!
//! fn main() -> Result<(), corvid::Error> {
//!     let wasm = r#"
//!         (module
//!             (func (export "answer") (param i32) (result i32)
//!                 local.get 0
//!                 i32.const 1
//!                 i32.add
//!             )
//!         )
//!     "#;
//!     let engine = Engine::default();
//!     let module = Module::new(&engine, wasm)?;
//!     let mut store = Store::new(&engine, ());
//!     let instance = Instance::new(&mut store, &module)?;
//!     let answer = instance.get_func(&store, "answer").unwrap();
//!     let mut results = [Val::I32(0)];
//!     answer.call(&mut store, &[Val::I32(41)], &mut results)?;
//!     assert_eq!(results[0], Val::I32(42));
//!     Ok(())
//! }
//! ```
//!
//! # Crate Features
//!
//! | Feature | Crates | Description |
//! |:-:|:--|:--|
//! | `std` | `corvid`<br>`corvid_core`<br>`corvid_collections` | Enables usage of Rust's standard library. Disabling this feature allows Corvid to compile on platforms without one. <br><br> Enabled by default. |
//! | `wat` | `corvid` | Enables support to parse `.wat` encoded Wasm modules in addition to the binary format. <br><br> Enabled by default. |
//! | `simd` | `corvid`<br>`wasmparser` | Accepts the Wasm `simd` and `relaxed-simd` proposals during decoding and catalogs their opcodes in the bytecode IR. The minimal executor does not implement lane-wise SIMD execution. <br><br> Disabled by default. |
//! | `hash-collections` | `corvid`<br>`corvid_collections` | Enables use of hash-map based collections in Corvid internals. <br><br> Disabled by default. |
//! | `prefer-btree-collections` | `corvid`<br>`corvid_collections` | Enforces use of btree-map based collections even when `hash-collections` is enabled. Useful on platforms without a random source. <br><br> Disabled by default. |
//! | `extra-checks` | `corvid` | Enables extra runtime checks in the executor that catch translation bugs that would otherwise be undefined behavior. Expected overhead ~20%. <br><br> Disabled by default. |

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    clippy::cast_lossless,
    clippy::missing_errors_doc,
    clippy::used_underscore_binding,
    clippy::redundant_closure_for_method_calls,
    clippy::type_repetition_in_bounds,
    clippy::inconsistent_struct_constructor,
    clippy::default_trait_access,
    clippy::items_after_statements
)]
#![recursion_limit = "1000"]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std as alloc;


pub mod engine;
mod error;
mod global;
mod instance;
mod memory;
mod module;
mod reftype;
mod store;
mod table;
mod value;

/// Definitions from the `corvid_core` crate.
pub(crate) mod core {
    pub(crate) use corvid_core::{
        cold,
        likely,
        simd,
        unlikely,
        Typed,
        TypedVal,
        UntypedVal,
    };
    pub use corvid_core::{
        ElementSegment,
        Fuel,
        FuelCostsProvider,
        FuncType,
        Global,
        GlobalType,
        LimiterError,
        Memory,
        MemoryType,
        MemoryTypeBuilder,
        Mutability,
        ReadAs,
        ResourceLimiter,
        ResourceLimiterRef,
        Table,
        TableType,
        TrapCode,
        ValType,
        WriteAs,
        F32,
        F64,
        V128,
    };
}

/// Definitions from the `corvid_collections` crate.
#[doc(inline)]
use corvid_collections as collections;

/// Definitions from the `corvid_ir` crate.
#[doc(inline)]
use corvid_ir as ir;

/// Errors that may occur while decoding, lowering, or instantiating a module.
pub mod errors {
    pub use super::{
        error::ErrorKind,
        module::{InstantiationError, ReadError},
    };
}

pub use self::{
    engine::{CompilationMode, Config, Engine, Error},
    global::Global,
    instance::{Export, ExportsIter, Extern, ExternType, Instance},
    memory::{Memory, MemoryType, MemoryTypeBuilder},
    module::{ExportType, ImportType, Module, ModuleExportsIter, ModuleImportsIter, Read},
    reftype::{ExternRef, Ref},
    store::{AsContext, AsContextMut, Store, StoreContext, StoreContextMut},
    table::{Table, TableType},
    value::Val,
};
pub use corvid_core::{FuncType, GlobalType, Mutability, TrapCode, ValType, F32, F64, V128};
