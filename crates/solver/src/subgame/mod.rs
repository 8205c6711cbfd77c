//! Safe continual re-solving with the CFR-D gadget.
//!
//! # Overview
//!
//! Re-solving only the subgame in front of the player is unsafe on its
//! own: the opponent could have reached the subgame with a different
//! range than the one the solver assumes. The gadget fixes this by
//! letting the opponent, for every candidate state, either follow into
//! the real subgame or take the counterfactual value it was promised by
//! the previous resolve.
//!
//! # Components
//!
//! - [`Range`] — Candidate states with reach probabilities
//! - [`Gadget`] — Game wrapper that adds the select/follow root
//! - [`GadgetEdge`], [`GadgetInfo`], [`Phase`] — Gadget primitives
//! - [`SubgameMap`], [`NextRange`] — Bookkeeping for the next resolve
//! - [`Resolver`] — Budgeted resolve producing an [`Outcome`]
//! - [`summarize`] — Counterfactual values from a full-game strategy

mod edge;
mod gadget;
mod info;
mod map;
mod next;
mod outcome;
mod phase;
mod range;
mod resolver;
mod summary;

pub use edge::*;
pub use gadget::*;
pub use info::*;
pub use map::*;
pub use next::*;
pub use outcome::*;
pub use phase::*;
pub use range::*;
pub use resolver::*;
pub use summary::*;

use cfrd_core::Utility;
use std::collections::HashMap;

/// Counterfactual value of each opponent information set.
pub type Cfv<I> = HashMap<I, Utility>;
