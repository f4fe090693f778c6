//! Index newtypes identifying module-level entities referenced by bytecode operands.

pub use crate::{
    DataSegment as Data,
    ElementSegment as Elem,
    Func,
    FuncType,
    Global,
    InternalFunc,
    Memory,
    Table,
};
