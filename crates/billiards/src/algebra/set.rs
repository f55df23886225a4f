use std::collections::BTreeSet;

use super::equation::{Equation, TrigKind};

/// Deduplicated sine and cosine equations attached to one region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquationSet {
    pub sines: BTreeSet<Equation>,
    pub cosines: BTreeSet<Equation>,
}

impl EquationSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket_mut(&mut self, kind: TrigKind) -> &mut BTreeSet<Equation> {
        match kind {
            TrigKind::Sin => &mut self.sines,
            TrigKind::Cos => &mut self.cosines,
        }
    }

    /// Insert into the bucket of the equation's kind; false if already present.
    pub fn insert(&mut self, eq: Equation) -> bool {
        self.bucket_mut(eq.kind()).insert(eq)
    }

    pub fn remove(&mut self, eq: &Equation) -> bool {
        self.bucket_mut(eq.kind()).remove(eq)
    }

    pub fn len(&self) -> usize {
        self.sines.len() + self.cosines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sines.is_empty() && self.cosines.is_empty()
    }

    /// Sines first, then cosines.
    pub fn iter(&self) -> impl Iterator<Item = &Equation> {
        self.sines.iter().chain(self.cosines.iter())
    }
}

impl FromIterator<Equation> for EquationSet {
    fn from_iter<I: IntoIterator<Item = Equation>>(iter: I) -> Self {
        let mut set = Self::new();
        for eq in iter {
            set.insert(eq);
        }
        set
    }
}
