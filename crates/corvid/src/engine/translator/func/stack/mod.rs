mod control;
mod locals;
mod operand;
mod operands;

pub use self::{
    control::{
        AcquiredTarget,
        BlockControlFrame,
        CatchInfo,
        ControlFrame,
        ControlFrameBase,
        ControlFrameKind,
        ControlFrameMut,
        ElseControlFrame,
        ElseReachability,
        IfControlFrame,
        IfReachability,
        LoopControlFrame,
        TryControlFrame,
    },
    operand::{ImmediateOperand, LocalOperand, Operand, TempOperand},
    operands::{PeekedOperands, PreservedAllLocalsIter, PreservedLocalsIter, StackPos},
};
use self::{
    control::ControlStack,
    locals::LocalsHead,
    operands::{OperandStack, StackOperand},
};
use super::{encoder::Pos, labels::LabelRef, LocalIdx, Reset, ReusableAllocations};
use crate::{
    core::{TypedVal, ValType},
    engine::BlockType,
    ir::{BlockFuel, Op},
    Engine,
    Error,
};
use alloc::vec::Vec;

/// The Wasm value and control stack during translation from Wasm to Corvid bytecode.
#[derive(Debug)]
pub struct Stack {
    /// The underlying [`Engine`].
    engine: Engine,
    /// The stack of operands.
    operands: OperandStack,
    /// The stack of control frames.
    controls: ControlStack,
    /// The `catch`/`catch_all` handlers of all `try` blocks lowered so far.
    catch_info: Vec<CatchInfo>,
}

/// Reusable heap allocations for the [`Stack`].
#[derive(Debug, Default)]
pub struct StackAllocations {
    /// The stack of operands.
    operands: OperandStack,
    /// The stack of control frames.
    controls: ControlStack,
    /// The `catch`/`catch_all` handlers of all `try` blocks lowered so far.
    catch_info: Vec<CatchInfo>,
}

impl Reset for StackAllocations {
    fn reset(&mut self) {
        self.operands.reset();
        self.controls.reset();
        self.catch_info.clear();
    }
}

impl ReusableAllocations for Stack {
    type Allocations = StackAllocations;

    fn into_allocations(self) -> StackAllocations {
        StackAllocations {
            operands: self.operands,
            controls: self.controls,
            catch_info: self.catch_info,
        }
    }
}

impl Stack {
    /// Creates a new empty [`Stack`] from the given `engine`.
    pub fn new(engine: &Engine, alloc: StackAllocations) -> Self {
        let StackAllocations {
            operands,
            controls,
            catch_info,
        } = alloc.into_reset();
        Self {
            engine: engine.clone(),
            operands,
            controls,
            catch_info,
        }
    }

    /// Registers `amount` local variables or function parameters.
    ///
    /// # Errors
    ///
    /// If too many local variables are being registered.
    pub fn register_locals(&mut self, amount: usize) -> Result<(), Error> {
        self.operands.register_locals(amount)
    }

    /// Returns `true` if the control stack is empty.
    pub fn is_control_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Returns the current height of the [`Stack`].
    ///
    /// # Note
    ///
    /// The height is equal to the number of [`Operand`]s on the [`Stack`].
    pub fn height(&self) -> usize {
        self.operands.height()
    }

    /// Returns the maximum height reached by the [`Stack`] so far.
    pub fn max_height(&self) -> usize {
        self.operands.max_stack_offset()
    }

    /// Truncates `self` to the target `height`.
    ///
    /// All operands above `height` are dropped.
    ///
    /// # Panics
    ///
    /// If `height` is greater than the current height of `self`.
    pub fn trunc(&mut self, height: usize) {
        debug_assert!(height <= self.height());
        while self.height() > height {
            self.pop();
        }
    }

    /// Returns `true` if fuel metering is enabled for the associated [`Engine`].
    fn is_fuel_metering_enabled(&self) -> bool {
        self.engine.config().get_consume_fuel()
    }

    /// Pushes the function enclosing Wasm `block` onto the [`Stack`].
    ///
    /// # Note
    ///
    /// - If `consume_fuel` is `None` fuel metering is expected to be disabled.
    /// - If `consume_fuel` is `Some` fuel metering is expected to be enabled.
    pub fn push_func_block(
        &mut self,
        ty: BlockType,
        label: LabelRef,
        consume_fuel: Option<Pos<BlockFuel>>,
    ) -> Result<(), Error> {
        debug_assert!(self.controls.is_empty());
        debug_assert!(self.is_fuel_metering_enabled() == consume_fuel.is_some());
        self.controls.push_block(ty, 0, label, consume_fuel);
        Ok(())
    }

    /// Pushes a Wasm `block` onto the [`Stack`].
    ///
    /// # Note
    ///
    /// This inherits the `consume_fuel` instruction from the parent [`ControlFrame`].
    pub fn push_block(&mut self, ty: BlockType, label: LabelRef) -> Result<(), Error> {
        debug_assert!(!self.controls.is_empty());
        let len_params = usize::from(ty.len_params(&self.engine));
        let block_height = self.height() - len_params;
        let consume_fuel = match self.is_fuel_metering_enabled() {
            true => {
                let consume_instr = self
                    .controls
                    .get(0)
                    .consume_fuel_instr()
                    .expect("control frame must have a consume fuel instruction");
                Some(consume_instr)
            }
            false => None,
        };
        self.controls
            .push_block(ty, block_height, label, consume_fuel);
        Ok(())
    }

    /// Pushes a Wasm `loop` onto the [`Stack`].
    ///
    /// # Panics (debug)
    ///
    /// If `consume_fuel` is `None` while fuel metering is enabled.
    pub fn push_loop(
        &mut self,
        ty: BlockType,
        label: LabelRef,
        consume_fuel: Option<Pos<BlockFuel>>,
    ) -> Result<(), Error> {
        debug_assert!(!self.controls.is_empty());
        debug_assert!(self.is_fuel_metering_enabled() == consume_fuel.is_some());
        let len_params = usize::from(ty.len_params(&self.engine));
        let block_height = self.height() - len_params;
        self.controls
            .push_loop(ty, block_height, label, consume_fuel);
        Ok(())
    }

    /// Pushes a Wasm `if` onto the [`Stack`].
    ///
    /// # Panics (debug)
    ///
    /// If `consume_fuel` is `None` while fuel metering is enabled.
    pub fn push_if(
        &mut self,
        ty: BlockType,
        label: LabelRef,
        reachability: IfReachability,
        consume_fuel: Option<Pos<BlockFuel>>,
    ) -> Result<(), Error> {
        debug_assert!(!self.controls.is_empty());
        debug_assert!(self.is_fuel_metering_enabled() == consume_fuel.is_some());
        let len_params = usize::from(ty.len_params(&self.engine));
        let block_height = self.height() - len_params;
        let else_operands = self.operands.peek(len_params);
        self.controls.push_if(
            ty,
            block_height,
            label,
            consume_fuel,
            reachability,
            else_operands,
        );
        Ok(())
    }

    /// Pushes a Wasm `try` onto the [`Stack`].
    ///
    /// # Panics (debug)
    ///
    /// If `consume_fuel` is `None` while fuel metering is enabled.
    pub fn push_try(
        &mut self,
        ty: BlockType,
        label: LabelRef,
        consume_fuel: Option<Pos<BlockFuel>>,
        try_start: Pos<Op>,
    ) -> Result<(), Error> {
        debug_assert!(!self.controls.is_empty());
        debug_assert!(self.is_fuel_metering_enabled() == consume_fuel.is_some());
        let len_params = usize::from(ty.len_params(&self.engine));
        let block_height = self.height() - len_params;
        let catch_info_start = self.catch_info.len();
        self.controls.push_try(
            ty,
            block_height,
            label,
            consume_fuel,
            try_start,
            catch_info_start,
        );
        Ok(())
    }

    /// Records a `catch` or `catch_all` handler for the given `try` `frame`.
    ///
    /// # Note
    ///
    /// `try_end` is the position of the instruction immediately following the
    /// end of the guarded region that this handler applies to: the `try` body
    /// for the first handler, or the previous handler's body for subsequent ones.
    pub fn push_catch_info(
        &mut self,
        frame: &TryControlFrame,
        try_end: Pos<Op>,
        catch_start: Pos<Op>,
        tag_index: Option<u32>,
    ) {
        self.catch_info.push(CatchInfo::new(
            frame.try_start(),
            try_end,
            catch_start,
            tag_index,
        ));
    }

    /// Returns the handlers recorded for the `try` whose first handler starts at `catch_info_start`.
    pub fn catch_info_since(&self, catch_info_start: usize) -> &[CatchInfo] {
        &self.catch_info[catch_info_start..]
    }

    /// Re-pushes a [`TryControlFrame`] popped for a `catch`/`catch_all` clause.
    pub fn push_try_again(&mut self, frame: TryControlFrame) {
        let consume_fuel = frame.consume_fuel_instr();
        self.controls.push_try_again(frame, consume_fuel);
    }

    /// Pushes a Wasm `else` onto the [`Stack`].
    ///
    /// # Note
    ///
    /// Re-pushes the operands memorized at the associated `if` onto the
    /// operand stack so that the `else` block starts with the same stack
    /// shape as the `then` block did.
    ///
    /// # Panics (debug)
    ///
    /// If `consume_fuel` is `None` while fuel metering is enabled.
    pub fn push_else(
        &mut self,
        if_frame: IfControlFrame,
        is_end_of_then_reachable: bool,
        consume_fuel: Option<Pos<BlockFuel>>,
    ) -> Result<(), Error> {
        debug_assert!(self.is_fuel_metering_enabled() == consume_fuel.is_some());
        let else_operands: Vec<Operand> = self.controls.pop_else_operands().collect();
        self.controls
            .push_else(if_frame, consume_fuel, is_end_of_then_reachable);
        self.push_else_operand_list(else_operands)
    }

    /// Re-pushes the memorized `else` operands of `frame` without pushing an
    /// `else` control frame.
    ///
    /// # Note
    ///
    /// Used when translating the implicit `else` of an `if` that never saw
    /// an explicit `else` opcode.
    pub fn push_else_operands(&mut self, frame: &IfControlFrame) -> Result<(), Error> {
        debug_assert!(matches!(frame.reachability(), IfReachability::Both { .. }));
        let else_operands: Vec<Operand> = self.controls.pop_else_operands().collect();
        self.push_else_operand_list(else_operands)
    }

    /// Re-pushes the given `else_operands` onto the operand stack.
    fn push_else_operand_list(&mut self, else_operands: Vec<Operand>) -> Result<(), Error> {
        for operand in else_operands {
            match operand {
                Operand::Local(op) => {
                    self.operands.push_local(op.local_index(), op.ty())?;
                }
                Operand::Temp(op) => {
                    self.operands.push_temp(op.ty())?;
                }
                Operand::Immediate(op) => {
                    self.operands.push_immediate(op.val())?;
                }
            }
        }
        Ok(())
    }

    /// Pushes an unreachable Wasm control frame onto the [`Stack`].
    pub fn push_unreachable(&mut self, kind: ControlFrameKind) -> Result<(), Error> {
        self.controls.push_unreachable(kind);
        Ok(())
    }

    /// Pops the top-most control frame from the control stack and returns it.
    ///
    /// # Panics
    ///
    /// If the control stack is empty.
    pub fn pop_control(&mut self) -> ControlFrame {
        self.controls
            .pop()
            .unwrap_or_else(|| panic!("tried to pop control from empty control stack"))
    }

    /// Returns a shared reference to the [`ControlFrame`] at `depth`.
    ///
    /// # Panics
    ///
    /// If `depth` is out of bounds for `self`.
    pub fn peek_control(&self, depth: usize) -> &ControlFrame {
        self.controls.get(depth)
    }

    /// Returns an exclusive view onto the [`ControlFrame`] at `depth`.
    ///
    /// # Panics
    ///
    /// If `depth` is out of bounds for `self`.
    pub fn peek_control_mut(&mut self, depth: usize) -> AcquiredTarget<'_> {
        self.controls.acquire_target(depth)
    }

    /// Pushes a local variable with index `local_idx` onto the [`Stack`].
    ///
    /// # Errors
    ///
    /// - If too many operands have been pushed onto the [`Stack`].
    /// - If the local with `local_idx` does not exist.
    pub fn push_local(&mut self, local_idx: LocalIdx, ty: ValType) -> Result<Operand, Error> {
        self.operands.push_local(local_idx, ty).map(Operand::from)
    }

    /// Pushes a temporary with type `ty` onto the [`Stack`].
    ///
    /// # Errors
    ///
    /// If too many operands have been pushed onto the [`Stack`].
    pub fn push_temp(&mut self, ty: ValType) -> Result<Operand, Error> {
        self.operands.push_temp(ty).map(Operand::from)
    }

    /// Pushes an immediate `value` onto the [`Stack`].
    ///
    /// # Errors
    ///
    /// If too many operands have been pushed onto the [`Stack`].
    pub fn push_immediate(&mut self, value: impl Into<TypedVal>) -> Result<Operand, Error> {
        self.operands.push_immediate(value).map(Operand::from)
    }

    /// Pushes the given [`Operand`] onto the [`Stack`].
    ///
    /// # Errors
    ///
    /// If too many operands have been pushed onto the [`Stack`].
    pub fn push_operand(&mut self, operand: Operand) -> Result<Operand, Error> {
        self.operands.push_operand(operand)
    }

    /// Peeks the [`Operand`] at `depth`.
    ///
    /// # Note
    ///
    /// A depth of 0 peeks the top-most [`Operand`] on `self`.
    ///
    /// # Panics
    ///
    /// If `depth` is out of bounds for `self`.
    pub fn peek(&self, depth: usize) -> Operand {
        self.operands.get(depth)
    }

    /// Returns an iterator yielding the last `n` [`Operand`]s on the [`Stack`].
    ///
    /// # Panics
    ///
    /// If `n` is out of bounds for `self`.
    pub fn peek_n(&self, n: usize) -> PeekedOperands<'_> {
        self.operands.peek(n)
    }

    /// Pops the top-most [`Operand`] from the [`Stack`].
    ///
    /// # Panics
    ///
    /// If `self` is empty.
    pub fn pop(&mut self) -> Operand {
        self.operands.pop()
    }

    /// Pops the two top-most [`Operand`]s from the [`Stack`].
    ///
    /// # Note
    ///
    /// The last returned [`Operand`] is the top-most one.
    pub fn pop2(&mut self) -> (Operand, Operand) {
        let rhs = self.pop();
        let lhs = self.pop();
        (lhs, rhs)
    }

    /// Pops the three top-most [`Operand`]s from the [`Stack`].
    ///
    /// # Note
    ///
    /// The last returned [`Operand`] is the top-most one.
    pub fn pop3(&mut self) -> (Operand, Operand, Operand) {
        let (v1, v2) = self.pop2();
        let v0 = self.pop();
        (v0, v1, v2)
    }

    /// Preserve all locals on the [`Stack`] that refer to `local_index`.
    ///
    /// This is done by converting those locals to [`Operand::Temp`] and yielding them.
    ///
    /// # Note
    ///
    /// The caller must fully consume all items yielded by the returned iterator
    /// in order for the local preservation to take full effect.
    #[must_use]
    pub fn preserve_locals(&mut self, local_idx: LocalIdx) -> PreservedLocalsIter<'_> {
        self.operands.preserve_locals(local_idx)
    }

    /// Preserve all locals on the [`Stack`], converting them to [`Operand::Temp`].
    #[must_use]
    pub fn preserve_all_locals(&mut self) -> PreservedAllLocalsIter<'_> {
        self.operands.preserve_all_locals()
    }

    /// Converts and returns the [`Operand`] at `depth` into an [`Operand::Temp`].
    ///
    /// # Note
    ///
    /// Returns the [`Operand`] at `depth` before being converted to an [`Operand::Temp`].
    ///
    /// # Panics
    ///
    /// If `depth` is out of bounds for the [`Stack`].
    #[must_use]
    pub fn operand_to_temp(&mut self, depth: usize) -> Operand {
        self.operands.operand_to_temp(depth)
    }

    /// Returns the current consume fuel instruction position if fuel metering is enabled.
    ///
    /// Returns `None` otherwise.
    pub fn consume_fuel_instr(&self) -> Option<Pos<BlockFuel>> {
        debug_assert!(!self.controls.is_empty());
        self.controls.get(0).consume_fuel_instr()
    }
}
