use crate::*;
use std::collections::HashSet;

/// Which information sets contribute to the average strategy.
#[derive(Debug, Clone)]
pub enum Accumulate<I>
where
    I: CfrInfo,
{
    All,
    Only(HashSet<I>),
}

impl<I> Accumulate<I>
where
    I: CfrInfo,
{
    pub fn nothing() -> Self {
        Self::Only(HashSet::new())
    }
    pub fn accepts(&self, info: &I) -> bool {
        match self {
            Self::All => true,
            Self::Only(infos) => infos.contains(info),
        }
    }
}
