use std::error;
use std::fmt;

pub use self::arc_eager::*;
pub use self::state::*;

mod arc_eager;
pub mod prelude;
mod state;

pub type Index = u32;
pub type Action = u32;

/// A labeled dependency arc `head -> dependent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub head: Index,
    pub dependent: Index,
    pub label: Index,
}

impl Edge {
    pub fn new(head: Index, dependent: Index, label: Index) -> Self {
        Edge {
            head: head,
            dependent: dependent,
            label: label,
        }
    }
}

pub trait TransitionState {
    fn step(&self) -> usize {
        self.actions().len()
    }

    fn num_tokens(&self) -> usize;

    fn stack_top(&self) -> Option<Index>;

    /// `position` counts from the top of the stack.
    fn stack(&self, position: Index) -> Option<Index>;

    fn stack_size(&self) -> usize;

    fn is_stack_empty(&self) -> bool {
        self.stack_size() == 0
    }

    fn buffer_head(&self) -> Option<Index>;

    fn buffer(&self, position: Index) -> Option<Index>;

    fn buffer_size(&self) -> usize;

    fn is_buffer_empty(&self) -> bool {
        self.buffer_size() == 0
    }

    fn head(&self, index: Index) -> Option<Index>;

    fn heads(&self) -> &[Option<Index>];

    fn has_head(&self, index: Index) -> bool {
        self.head(index).is_some()
    }

    fn label(&self, index: Index) -> Option<Index>;

    fn labels(&self) -> &[Option<Index>];

    fn arcs(&self) -> &[Edge];

    fn actions(&self) -> &[Action];
}

pub trait TransitionMutableState: TransitionState {
    fn advance(&mut self) -> Result<(), Error>;

    fn push(&mut self, index: Index) -> Result<(), Error>;

    fn pop(&mut self) -> Result<Index, Error>;

    fn add_arc(&mut self, index: Index, head: Index, label: Index) -> Result<(), Error>;

    fn record(&mut self, action: Action) -> Result<(), Error>;
}

pub trait TransitionSystem {
    fn num_action_types() -> usize;

    fn num_defined_actions(num_labels: usize) -> usize;

    fn estimate_num_actions(num_tokens: usize) -> usize;

    fn apply<S: TransitionMutableState>(action: Action, state: &mut S) -> Result<(), Error>;

    fn is_allowed<S: TransitionState>(action: Action, state: &S) -> bool;

    fn is_terminal<S: TransitionState>(state: &S) -> bool;

    fn get_oracle<S: TransitionState>(state: &S, gold: &Gold) -> Option<Action>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidOperation,
    InvalidArgument,
}

impl Error {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Error::InvalidOperation => "invalid operation",
            Error::InvalidArgument => "invalid argument",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl error::Error for Error {}
