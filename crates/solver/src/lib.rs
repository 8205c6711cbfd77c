//! Game-agnostic CFR with safe continual re-solving.
//!
//! This crate contains the generic traits and machinery that solve
//! two-player zero-sum imperfect-information games with CFR, and the
//! CFR-D gadget that lets a player re-solve only the subgame in front
//! of it while staying safe against the opponent's earlier choices.
//!
//! # Module Structure
//!
//! - `state` — Game model primitives (Turn, Edge, Percept, Info, Game)
//! - `tracker` — Reach-probability bookkeeping during tree walks
//! - `strategy` — Strategy store and regret table
//! - `regret` — Regret update schemes
//! - `policy` — Average-strategy weighting schemes
//! - `sample` — Seeded sampling and utility estimators
//! - `solver` — Full-enumeration CFR iteration
//! - `subgame` — Range, gadget root, and the continual resolver
//! - `evaluate` — Best response and exploitability
//! - `metrics` — Budgets, stopwatches, listeners, progress
//! - `player` — Match-facing player boundary
//! - `poker` — Kuhn and Leduc reference games

mod error;
mod evaluate;
mod metrics;
mod player;
mod poker;
mod policy;
mod regret;
mod sample;
mod solver;
mod state;
mod strategy;
mod subgame;
mod tracker;

pub use error::*;
pub use evaluate::*;
pub use metrics::*;
pub use player::*;
pub use poker::*;
pub use policy::*;
pub use regret::*;
pub use sample::*;
pub use solver::*;
pub use state::*;
pub use strategy::*;
pub use subgame::*;
pub use tracker::*;
