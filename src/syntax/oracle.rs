use slog::Logger;

use crate::syntax::transition::prelude::*;
use crate::syntax::transition::{
    attach_orphans, Action, ArcEager, ArcEagerActionType, Edge, Error, Gold, GoldState, Index,
    State,
};

/// A configuration and the action the oracle chose for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub step: usize,
    /// Top first.
    pub stack: Vec<Index>,
    /// Front first.
    pub buffer: Vec<Index>,
    pub action: Action,
}

impl Step {
    pub fn capture(state: &State, action: Action) -> Self {
        Step {
            step: state.step(),
            stack: state.stack_items(),
            buffer: state.buffer_items(),
            action: action,
        }
    }

    pub fn action_type(&self) -> ArcEagerActionType {
        ArcEagerActionType::from_action(self.action)
    }
}

/// Outcome of running the oracle over one sentence.
#[derive(Debug)]
pub struct Derivation {
    pub state: State,
    /// Words attached to the root after the transitions ran out.
    pub orphans: Vec<Index>,
    /// Filled only when steps were requested.
    pub steps: Vec<Step>,
}

impl Derivation {
    pub fn arcs(&self) -> &[Edge] {
        self.state.arcs()
    }

    pub fn actions(&self) -> &[Action] {
        self.state.actions()
    }

    pub fn num_transitions(&self) -> usize {
        self.state.step()
    }
}

/// Runs the arc-eager oracle to the end of the buffer and repairs connectivity.
pub fn derive(
    gold: &Gold,
    root_label: Index,
    record_steps: bool,
    logger: &Logger,
) -> Result<Derivation, Error> {
    let (mut gold_state, steps) = if record_steps {
        GoldState::with_feature_extract::<ArcEager, _, _>(gold, |state, action| {
            Some(Step::capture(state, action))
        })?
    } else {
        GoldState::with_feature_extract::<ArcEager, _, _>(gold, |_, _| None::<Step>)?
    };
    let steps: Vec<Step> = steps.into_iter().filter_map(|s| s).collect();
    trace!(
        logger,
        "actions: {}",
        gold_state
            .actions()
            .iter()
            .map(|&a| ArcEagerActionType::from_action(a).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    let orphans = gold_state.attach_orphans(root_label)?;
    if !orphans.is_empty() {
        debug!(logger, "attached orphans to the root: {:?}", orphans);
    }
    Ok(Derivation {
        state: gold_state.into_inner(),
        orphans: orphans,
        steps: steps,
    })
}

/// Replays `actions` from the initial configuration and attaches orphans.
pub fn replay(num_tokens: usize, actions: &[Action], root_label: Index) -> Result<State, Error> {
    let mut state = State::new(num_tokens as u32);
    for &action in actions {
        if !ArcEager::is_allowed(action, &state) {
            return Err(Error::InvalidOperation);
        }
        ArcEager::apply(action, &mut state)?;
    }
    attach_orphans(&mut state, root_label)?;
    Ok(state)
}
