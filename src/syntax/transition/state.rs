use std::u32::MAX as U32_MAX;

use super::{Action, Edge, Error, Index, TransitionMutableState, TransitionState, TransitionSystem};

#[inline]
fn default_capacity(num_tokens: usize) -> usize {
    2 * num_tokens.saturating_sub(1)
}

/// Parser configuration: stack, buffer and the arcs built so far.
///
/// The buffer is always a contiguous suffix `[b, n)` of the sentence, so it is
/// kept as the index of its front word only.
#[derive(Debug, Clone)]
pub struct State {
    num_tokens: Index,
    stack: Vec<Index>,
    buffer: Option<Index>,
    heads: Vec<Option<Index>>,
    labels: Vec<Option<Index>>,
    arcs: Vec<Edge>,
    actions: Vec<Action>,
}

impl State {
    pub fn new(num_tokens: u32) -> Self {
        State::with_capacity(num_tokens, default_capacity(num_tokens as usize))
    }

    pub fn with_capacity(num_tokens: u32, capacity: usize) -> Self {
        let n = num_tokens as usize;
        State {
            num_tokens: num_tokens,
            stack: vec![0],
            buffer: if num_tokens > 1 { Some(1) } else { None },
            heads: vec![None; n],
            labels: vec![None; n],
            arcs: Vec::with_capacity(n),
            actions: Vec::with_capacity(capacity),
        }
    }

    /// Stack contents, top first.
    pub fn stack_items(&self) -> Vec<Index> {
        self.stack.iter().rev().cloned().collect()
    }

    /// Buffer contents, front first.
    pub fn buffer_items(&self) -> Vec<Index> {
        match self.buffer {
            Some(b) => (b..self.num_tokens).collect(),
            None => vec![],
        }
    }
}

impl TransitionState for State {
    fn step(&self) -> usize {
        self.actions.len()
    }

    fn num_tokens(&self) -> usize {
        self.num_tokens as usize
    }

    fn stack_top(&self) -> Option<Index> {
        self.stack.last().map(|&i| i)
    }

    fn stack(&self, position: Index) -> Option<Index> {
        let position = position as usize;
        let stack_size = self.stack.len();
        if position < stack_size {
            self.stack.get(stack_size - 1 - position).map(|&i| i)
        } else {
            None
        }
    }

    fn stack_size(&self) -> usize {
        self.stack.len()
    }

    fn is_stack_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn buffer_head(&self) -> Option<Index> {
        self.buffer
    }

    fn buffer(&self, position: Index) -> Option<Index> {
        if let Some(buffer) = self.buffer {
            let index = buffer + position;
            if index < self.num_tokens {
                return Some(index);
            }
        }
        None
    }

    fn buffer_size(&self) -> usize {
        match self.buffer {
            Some(buffer) => (self.num_tokens - buffer) as usize,
            None => 0,
        }
    }

    fn is_buffer_empty(&self) -> bool {
        self.buffer.is_none()
    }

    fn head(&self, index: Index) -> Option<Index> {
        if index < self.num_tokens {
            return self.heads[index as usize];
        }
        None
    }

    fn heads(&self) -> &[Option<Index>] {
        &self.heads
    }

    fn label(&self, index: Index) -> Option<Index> {
        if index < self.num_tokens {
            return self.labels[index as usize];
        }
        None
    }

    fn labels(&self) -> &[Option<Index>] {
        &self.labels
    }

    fn arcs(&self) -> &[Edge] {
        &self.arcs
    }

    fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl TransitionMutableState for State {
    fn advance(&mut self) -> Result<(), Error> {
        match self.buffer {
            Some(buffer) => {
                if buffer == self.num_tokens - 1 {
                    self.buffer = None;
                } else {
                    self.buffer = Some(buffer + 1);
                }
                Ok(())
            }
            None => Err(Error::InvalidOperation),
        }
    }

    fn push(&mut self, index: Index) -> Result<(), Error> {
        if index >= self.num_tokens {
            return Err(Error::InvalidOperation);
        }
        self.stack.push(index);
        Ok(())
    }

    fn pop(&mut self) -> Result<Index, Error> {
        self.stack.pop().ok_or(Error::InvalidOperation)
    }

    fn add_arc(&mut self, index: Index, head: Index, label: Index) -> Result<(), Error> {
        if index == 0 || index >= self.num_tokens {
            Err(Error::InvalidOperation)
        } else if head >= self.num_tokens {
            Err(Error::InvalidOperation)
        } else if index == head {
            Err(Error::InvalidOperation)
        } else {
            let val = &mut self.heads[index as usize];
            match *val {
                Some(_) => Err(Error::InvalidOperation),
                None => {
                    *val = Some(head);
                    self.labels[index as usize] = Some(label);
                    self.arcs.push(Edge::new(head, index, label));
                    Ok(())
                }
            }
        }
    }

    fn record(&mut self, action: Action) -> Result<(), Error> {
        self.actions.push(action);
        Ok(())
    }
}

/// Gold annotation of one sentence, index 0 being the root.
#[derive(Debug, Clone)]
pub struct Gold {
    heads: Vec<Index>,
    labels: Vec<Index>,
    rightmost: Vec<Option<Index>>,
}

impl Gold {
    /// Fails with `InvalidArgument` on length mismatch or a head outside `0..n`.
    pub fn new(heads: &[Index], labels: &[Index]) -> Result<Self, Error> {
        let n = heads.len();
        if n == 0 || n > (U32_MAX as usize) {
            return Err(Error::InvalidArgument);
        } else if n != labels.len() {
            return Err(Error::InvalidArgument);
        }
        let mut rightmost = vec![None; n];
        for (dependent, &head) in heads.iter().enumerate() {
            if head as usize >= n {
                return Err(Error::InvalidArgument);
            }
            if dependent > 0 {
                rightmost[head as usize] = Some(dependent as Index);
            }
        }
        Ok(Gold {
            heads: heads.to_vec(),
            labels: labels.to_vec(),
            rightmost: rightmost,
        })
    }

    pub fn num_tokens(&self) -> usize {
        self.heads.len()
    }

    #[inline]
    pub fn head(&self, index: Index) -> Index {
        self.heads[index as usize]
    }

    #[inline]
    pub fn label(&self, index: Index) -> Index {
        self.labels[index as usize]
    }

    pub fn heads(&self) -> &[Index] {
        &self.heads
    }

    pub fn labels(&self) -> &[Index] {
        &self.labels
    }

    /// The rightmost word whose gold head is `index`.
    pub fn rightmost_dependent(&self, index: Index) -> Option<Index> {
        self.rightmost[index as usize]
    }

    /// Whether some word in `[from, n)` has `index` as its gold head.
    #[inline]
    pub fn has_dependent_from(&self, index: Index, from: Index) -> bool {
        match self.rightmost[index as usize] {
            Some(dependent) => dependent >= from,
            None => false,
        }
    }
}

/// A state driven to the terminal configuration by the oracle.
#[derive(Debug)]
pub struct GoldState {
    internal: State,
}

impl GoldState {
    pub fn new<T: TransitionSystem>(gold: &Gold) -> Result<Self, Error> {
        GoldState::with_feature_extract::<T, _, _>(gold, |_, _| ()).map(|(state, _)| state)
    }

    /// Runs the oracle, calling `extract` on every state before its action is applied.
    pub fn with_feature_extract<T: TransitionSystem, FO, F: FnMut(&State, Action) -> FO>(
        gold: &Gold,
        mut extract: F,
    ) -> Result<(Self, Vec<FO>), Error> {
        let n = gold.num_tokens();
        let capacity = T::estimate_num_actions(n);
        let mut internal = State::with_capacity(n as u32, capacity);
        let mut features = Vec::with_capacity(capacity);
        while !T::is_terminal(&internal) {
            let action = T::get_oracle(&internal, gold).ok_or(Error::InvalidOperation)?;
            features.push(extract(&internal, action));
            T::apply(action, &mut internal)?;
        }
        debug_assert!(internal.step() <= capacity);
        let state = GoldState { internal: internal };
        Ok((state, features))
    }

    pub fn attach_orphans(&mut self, label: Index) -> Result<Vec<Index>, Error> {
        attach_orphans(&mut self.internal, label)
    }

    pub fn into_inner(self) -> State {
        self.internal
    }
}

impl TransitionState for GoldState {
    fn step(&self) -> usize {
        self.internal.step()
    }

    fn num_tokens(&self) -> usize {
        self.internal.num_tokens()
    }

    fn stack_top(&self) -> Option<Index> {
        self.internal.stack_top()
    }

    fn stack(&self, position: Index) -> Option<Index> {
        self.internal.stack(position)
    }

    fn stack_size(&self) -> usize {
        self.internal.stack_size()
    }

    fn buffer_head(&self) -> Option<Index> {
        self.internal.buffer_head()
    }

    fn buffer(&self, position: Index) -> Option<Index> {
        self.internal.buffer(position)
    }

    fn buffer_size(&self) -> usize {
        self.internal.buffer_size()
    }

    fn head(&self, index: Index) -> Option<Index> {
        self.internal.head(index)
    }

    fn heads(&self) -> &[Option<Index>] {
        self.internal.heads()
    }

    fn label(&self, index: Index) -> Option<Index> {
        self.internal.label(index)
    }

    fn labels(&self) -> &[Option<Index>] {
        self.internal.labels()
    }

    fn arcs(&self) -> &[Edge] {
        self.internal.arcs()
    }

    fn actions(&self) -> &[Action] {
        self.internal.actions()
    }
}

/// Attaches every real word still lacking a head to the root with `label`.
///
/// Returns the attached words in sentence order.
pub fn attach_orphans<S: TransitionMutableState>(
    state: &mut S,
    label: Index,
) -> Result<Vec<Index>, Error> {
    let orphans: Vec<Index> = (1..state.num_tokens() as Index)
        .filter(|&index| !state.has_head(index))
        .collect();
    for &index in &orphans {
        state.add_arc(index, 0, label)?;
    }
    Ok(orphans)
}
