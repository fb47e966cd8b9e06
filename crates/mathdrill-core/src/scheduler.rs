//! Next-problem selection.
//!
//! The [`SessionScheduler`] reduces the record pool to the unmastered
//! problems and hands that pool to a [`SelectionStrategy`]. Mastered
//! problems never reach a strategy, so they are never presented again.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::{ProblemSpec, SelectionOrder};
use crate::record::ProblemRecord;

// ---------------------------------------------------------------------------
// Strategy trait
// ---------------------------------------------------------------------------

/// Picks one problem out of the current unmastered pool.
pub trait SelectionStrategy: Send {
    /// Short name used in logs (e.g. "random").
    fn name(&self) -> &str;

    /// Return the index of the chosen candidate.
    ///
    /// `candidates` is never empty and is listed in generation order.
    fn choose(&mut self, candidates: &[ProblemSpec]) -> usize;
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Independent uniform draw on every call.
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: make_rng(seed),
        }
    }
}

impl SelectionStrategy for UniformRandom {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, candidates: &[ProblemSpec]) -> usize {
        self.rng.random_range(0..candidates.len())
    }
}

/// Shuffled rounds: every unmastered problem appears once per round, in a
/// fresh random order each round.
pub struct ShuffledRounds {
    rng: StdRng,
    round: VecDeque<ProblemSpec>,
}

impl ShuffledRounds {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: make_rng(seed),
            round: VecDeque::new(),
        }
    }

    fn reshuffle(&mut self, candidates: &[ProblemSpec]) {
        let mut next: Vec<ProblemSpec> = candidates.to_vec();
        next.shuffle(&mut self.rng);
        self.round = next.into();
    }
}

impl SelectionStrategy for ShuffledRounds {
    fn name(&self) -> &str {
        "shuffled"
    }

    fn choose(&mut self, candidates: &[ProblemSpec]) -> usize {
        loop {
            if self.round.is_empty() {
                self.reshuffle(candidates);
            }
            // Entries mastered (or held back) since the round was shuffled
            // are dropped as they come up.
            while let Some(spec) = self.round.pop_front() {
                if let Ok(idx) = candidates.binary_search(&spec) {
                    return idx;
                }
            }
        }
    }
}

/// Walks the pool in generation order, wrapping around at the end.
#[derive(Default)]
pub struct Sequential {
    last: Option<ProblemSpec>,
}

impl SelectionStrategy for Sequential {
    fn name(&self) -> &str {
        "sequential"
    }

    fn choose(&mut self, candidates: &[ProblemSpec]) -> usize {
        let idx = match self.last {
            Some(last) => candidates.partition_point(|spec| *spec <= last),
            None => 0,
        };
        let idx = if idx < candidates.len() { idx } else { 0 };
        self.last = Some(candidates[idx]);
        idx
    }
}

/// Build the strategy for a configured order.
pub fn strategy_for(order: SelectionOrder, seed: Option<u64>) -> Box<dyn SelectionStrategy> {
    match order {
        SelectionOrder::Random => Box::new(UniformRandom::new(seed)),
        SelectionOrder::Shuffled => Box::new(ShuffledRounds::new(seed)),
        SelectionOrder::Sequential => Box::new(Sequential::default()),
    }
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Chooses which unmastered problem to present next.
pub struct SessionScheduler {
    strategy: Box<dyn SelectionStrategy>,
}

impl SessionScheduler {
    pub fn new(strategy: Box<dyn SelectionStrategy>) -> Self {
        Self { strategy }
    }

    pub fn for_order(order: SelectionOrder, seed: Option<u64>) -> Self {
        Self::new(strategy_for(order, seed))
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Pick the next problem, or `None` once every record is mastered.
    ///
    /// `just_answered` is held back from this draw unless it is the only
    /// unmastered problem left, so a problem is not asked twice in a row.
    pub fn next_problem(
        &mut self,
        records: &[ProblemRecord],
        just_answered: Option<&ProblemSpec>,
    ) -> Option<ProblemSpec> {
        let mut pool: Vec<ProblemSpec> = records
            .iter()
            .filter(|r| !r.is_mastered())
            .map(|r| *r.spec())
            .collect();

        if pool.is_empty() {
            return None;
        }

        if pool.len() > 1 {
            if let Some(held) = just_answered {
                pool.retain(|spec| spec != held);
            }
        }

        // The strategies rely on generation order for lookups.
        pool.sort_unstable();

        let idx = self.strategy.choose(&pool);
        pool.get(idx).or_else(|| pool.first()).copied()
    }
}
