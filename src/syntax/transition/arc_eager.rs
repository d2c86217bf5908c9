use std::fmt;

use super::{Action, Error, Gold, Index, TransitionMutableState, TransitionState, TransitionSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcEagerActionType {
    Shift,
    Reduce,
    LeftArc(Index),
    RightArc(Index),
}

impl ArcEagerActionType {
    pub fn from_action(action: Action) -> Self {
        match action {
            0 => ArcEagerActionType::Shift,
            1 => ArcEagerActionType::Reduce,
            _ => {
                let label = (action - 2) >> 1;
                if action & 1 == 0 {
                    ArcEagerActionType::LeftArc(label)
                } else {
                    ArcEagerActionType::RightArc(label)
                }
            }
        }
    }

    pub fn into_action(self) -> Action {
        match self {
            ArcEagerActionType::Shift => 0,
            ArcEagerActionType::Reduce => 1,
            ArcEagerActionType::LeftArc(label) => 2 + (label << 1),
            ArcEagerActionType::RightArc(label) => 3 + (label << 1),
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            ArcEagerActionType::Shift => "Shift",
            ArcEagerActionType::Reduce => "Reduce",
            ArcEagerActionType::LeftArc(_) => "LeftArc",
            ArcEagerActionType::RightArc(_) => "RightArc",
        }
    }

    pub fn label(&self) -> Option<Index> {
        match *self {
            ArcEagerActionType::Shift | ArcEagerActionType::Reduce => None,
            ArcEagerActionType::LeftArc(label) | ArcEagerActionType::RightArc(label) => {
                Some(label)
            }
        }
    }

    pub fn num_action_types() -> usize {
        4
    }

    pub fn num_defined_actions(num_labels: usize) -> usize {
        2 + 2 * num_labels
    }
}

impl fmt::Display for ArcEagerActionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{}({})", self.name(), label),
            None => write!(f, "{}", self.name()),
        }
    }
}

#[derive(Debug)]
pub struct ArcEager;

impl ArcEager {
    /// Shift: (s, i|b, A) => (s|i, b, A)
    pub fn apply_shift<S: TransitionMutableState>(state: &mut S) -> Result<(), Error> {
        match state.buffer_head() {
            Some(b0) => {
                state.push(b0)?;
                state.advance()
            }
            None => Err(Error::InvalidOperation),
        }
    }

    /// Reduce: (s|i, b, A) => (s, b, A)
    pub fn apply_reduce<S: TransitionMutableState>(state: &mut S) -> Result<(), Error> {
        state.pop().map(|_| ())
    }

    /// Left Arc: (s|i, j|b, A) => (s, j|b, A +(j,l,i))
    pub fn apply_left_arc<S: TransitionMutableState>(
        state: &mut S,
        label: Index,
    ) -> Result<(), Error> {
        let b0 = state.buffer_head().ok_or(Error::InvalidOperation)?;
        let s0 = state.stack_top().ok_or(Error::InvalidOperation)?;
        state.add_arc(s0, b0, label)?;
        state.pop().map(|_| ())
    }

    /// Right Arc: (s|i, j|b, A) => (s|i|j, b, A +(i,l,j))
    pub fn apply_right_arc<S: TransitionMutableState>(
        state: &mut S,
        label: Index,
    ) -> Result<(), Error> {
        let b0 = state.buffer_head().ok_or(Error::InvalidOperation)?;
        let s0 = state.stack_top().ok_or(Error::InvalidOperation)?;
        state.add_arc(b0, s0, label)?;
        state.push(b0)?;
        state.advance()
    }

    pub fn is_allowed_shift<S: TransitionState>(state: &S) -> bool {
        !state.is_buffer_empty()
    }

    pub fn is_allowed_reduce<S: TransitionState>(state: &S) -> bool {
        !state.is_stack_empty()
    }

    pub fn is_allowed_left_arc<S: TransitionState>(state: &S) -> bool {
        !state.is_stack_empty() && !state.is_buffer_empty()
    }

    pub fn is_allowed_right_arc<S: TransitionState>(state: &S) -> bool {
        !state.is_stack_empty() && !state.is_buffer_empty()
    }

    /// `index` has its head and no gold dependent is left in the buffer.
    pub fn is_complete<S: TransitionState>(state: &S, gold: &Gold, index: Index) -> bool {
        if !state.has_head(index) {
            return false;
        }
        match state.buffer_head() {
            Some(b0) => !gold.has_dependent_from(index, b0),
            None => true,
        }
    }
}

impl TransitionSystem for ArcEager {
    fn num_action_types() -> usize {
        ArcEagerActionType::num_action_types()
    }

    fn num_defined_actions(num_labels: usize) -> usize {
        ArcEagerActionType::num_defined_actions(num_labels)
    }

    fn estimate_num_actions(num_tokens: usize) -> usize {
        2 * num_tokens.saturating_sub(1)
    }

    fn apply<S: TransitionMutableState>(action: Action, state: &mut S) -> Result<(), Error> {
        match ArcEagerActionType::from_action(action) {
            ArcEagerActionType::Shift => ArcEager::apply_shift(state)?,
            ArcEagerActionType::Reduce => ArcEager::apply_reduce(state)?,
            ArcEagerActionType::LeftArc(label) => ArcEager::apply_left_arc(state, label)?,
            ArcEagerActionType::RightArc(label) => ArcEager::apply_right_arc(state, label)?,
        }
        state.record(action)
    }

    fn is_allowed<S: TransitionState>(action: Action, state: &S) -> bool {
        match ArcEagerActionType::from_action(action) {
            ArcEagerActionType::Shift => ArcEager::is_allowed_shift(state),
            ArcEagerActionType::Reduce => ArcEager::is_allowed_reduce(state),
            ArcEagerActionType::LeftArc(_label) => ArcEager::is_allowed_left_arc(state),
            ArcEagerActionType::RightArc(_label) => ArcEager::is_allowed_right_arc(state),
        }
    }

    fn is_terminal<S: TransitionState>(state: &S) -> bool {
        state.is_buffer_empty()
    }

    fn get_oracle<S: TransitionState>(state: &S, gold: &Gold) -> Option<Action> {
        let b0 = state.buffer_head()?;
        let s0 = match state.stack_top() {
            Some(s0) => s0,
            None => return Some(ArcEagerActionType::Shift.into_action()),
        };
        let action = if gold.head(s0) == b0 {
            ArcEagerActionType::LeftArc(gold.label(s0))
        } else if gold.head(b0) == s0 {
            ArcEagerActionType::RightArc(gold.label(b0))
        } else if ArcEager::is_complete(state, gold, s0) {
            ArcEagerActionType::Reduce
        } else {
            ArcEagerActionType::Shift
        };
        Some(action.into_action())
    }
}
