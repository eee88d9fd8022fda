use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use catalog::Dish;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::error::PlanningError;
use crate::history::PlannerHistory;

/// Day-by-day dish selection for one meal slot.
///
/// A planner owns a candidate pool pre-filtered by meal type and an
/// anti-repeat history window. Selection is uniform over the candidates
/// that are neither in the history window nor already used in the
/// current draw round; when nothing is free it falls back to the least
/// recently served candidate instead of failing.
///
/// The random source is seedable so selection is reproducible under
/// test; without a seed the current timestamp is used.
pub struct MealPlanner {
    pool: Vec<Dish>,
    history: PlannerHistory,
    picks: Vec<Vec<Dish>>,
    rng: StdRng,
}

impl MealPlanner {
    pub fn new(pool: Vec<Dish>, window: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|elapsed| elapsed.as_secs())
                    .unwrap_or(0);
                StdRng::seed_from_u64(now)
            }
        };
        MealPlanner {
            pool,
            history: PlannerHistory::new(window),
            picks: Vec::new(),
            rng,
        }
    }

    /// Produce one pick per day over the horizon.
    ///
    /// No dish name repeats within the produced sequence while unused
    /// candidates remain; once every distinct candidate has been used
    /// the round resets and repeats are drawn least-recently-used
    /// first. An empty pool yields empty picks rather than an error.
    pub fn random_init(&mut self, horizon: usize) -> Vec<Vec<Dish>> {
        let distinct = self
            .pool
            .iter()
            .map(|dish| dish.name.as_str())
            .collect::<HashSet<_>>()
            .len();

        let mut used_this_round: HashSet<String> = HashSet::new();
        let mut picks = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            if distinct > 0 && used_this_round.len() >= distinct {
                used_this_round.clear();
            }
            match self.draw(&used_this_round) {
                Some(dish) => {
                    used_this_round.insert(dish.name.clone());
                    self.history.record(dish.name.clone());
                    picks.push(vec![dish]);
                }
                None => picks.push(Vec::new()),
            }
        }

        tracing::debug!(horizon, pool = self.pool.len(), "planner initialized");
        self.picks = picks.clone();
        picks
    }

    /// Replace the pick at `day_index` with a newly drawn dish.
    ///
    /// The dish currently occupying the slot is a hard exclusion; the
    /// history window is a soft one that degrades to the
    /// least-recently-used fallback. The new pick replaces the slot and
    /// is appended to history.
    pub fn pick_next(&mut self, day_index: usize) -> Result<Vec<Dish>, PlanningError> {
        let len = self.picks.len();
        let current = self
            .picks
            .get(day_index)
            .ok_or(PlanningError::DayOutOfRange {
                index: day_index,
                len,
            })?;

        let excluded: HashSet<String> = current.iter().map(|dish| dish.name.clone()).collect();
        let dish = self
            .draw(&excluded)
            .ok_or(PlanningError::NoAlternative { index: day_index })?;

        tracing::debug!(day_index, dish = %dish.name, "slot regenerated");
        self.history.record(dish.name.clone());
        self.picks[day_index] = vec![dish.clone()];
        Ok(vec![dish])
    }

    /// Replace the history wholesale from an imported record. Current
    /// picks are untouched; only future draws are affected.
    pub fn set_history(&mut self, names: impl IntoIterator<Item = String>) {
        self.history.replace_all(names);
    }

    pub fn current_picks(&self) -> &[Vec<Dish>] {
        &self.picks
    }

    pub fn history(&self) -> &PlannerHistory {
        &self.history
    }

    pub fn pool(&self) -> &[Dish] {
        &self.pool
    }

    /// Draw one dish, preferring candidates outside both the exclusion
    /// set and the history window, falling back to the stalest
    /// non-excluded candidate. `None` only when the pool has nothing
    /// outside the exclusion set at all.
    fn draw(&mut self, excluded: &HashSet<String>) -> Option<Dish> {
        let free: Vec<&Dish> = self
            .pool
            .iter()
            .filter(|dish| !excluded.contains(&dish.name) && !self.history.contains(&dish.name))
            .collect();
        if let Some(dish) = free.choose(&mut self.rng) {
            return Some((*dish).clone());
        }

        let candidates: Vec<&Dish> = self
            .pool
            .iter()
            .filter(|dish| !excluded.contains(&dish.name))
            .collect();
        let stalest_rank = candidates
            .iter()
            .map(|dish| self.staleness(&dish.name))
            .max()?;
        let stalest: Vec<&Dish> = candidates
            .into_iter()
            .filter(|dish| self.staleness(&dish.name) == stalest_rank)
            .collect();
        stalest.choose(&mut self.rng).map(|dish| (*dish).clone())
    }

    /// Rank for the fallback: never-served beats any served candidate,
    /// and among served ones a higher pick age is staler.
    fn staleness(&self, name: &str) -> (u8, usize) {
        match self.history.last_seen(name) {
            None => (1, 0),
            Some(age) => (0, age),
        }
    }
}
