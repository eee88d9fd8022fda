use std::collections::VecDeque;

/// Bounded record of recently served dish names.
///
/// A planner consults the last `window` picks (the anti-repeat window K)
/// to forbid repeats, and ranks fallback candidates by how long ago they
/// were last served. The record only ever biases future picks; it never
/// changes picks that were already made.
#[derive(Debug, Clone)]
pub struct PlannerHistory {
    window: usize,
    recent: VecDeque<String>,
}

impl PlannerHistory {
    pub fn new(window: usize) -> Self {
        PlannerHistory {
            window,
            recent: VecDeque::with_capacity(window),
        }
    }

    /// Seed the record from an imported sequence, keeping only the last
    /// `window` names.
    pub fn from_names(window: usize, names: impl IntoIterator<Item = String>) -> Self {
        let mut history = Self::new(window);
        history.replace_all(names);
        history
    }

    /// Append one served dish, evicting the oldest entry once the
    /// window is full.
    pub fn record(&mut self, name: String) {
        if self.window == 0 {
            return;
        }
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back(name);
    }

    /// Wholesale replacement from an externally supplied record.
    pub fn replace_all(&mut self, names: impl IntoIterator<Item = String>) {
        self.recent.clear();
        for name in names {
            self.record(name);
        }
    }

    /// Whether `name` was served within the window.
    pub fn contains(&self, name: &str) -> bool {
        self.recent.iter().any(|served| served == name)
    }

    /// How many picks ago `name` was last served (0 = most recent), or
    /// `None` if it is not in the window at all.
    pub fn last_seen(&self, name: &str) -> Option<usize> {
        self.recent
            .iter()
            .rev()
            .position(|served| served == name)
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}
