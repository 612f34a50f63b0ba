use std::collections::VecDeque;

/// Full-dataset error after each epoch, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorHistory {
    errors: VecDeque<f64>,
}

impl ErrorHistory {
    pub fn new() -> Self {
        Self {
            errors: VecDeque::new(),
        }
    }

    /// Records the error of the epoch that just finished.
    pub fn record(&mut self, error: f64) {
        self.errors.push_front(error);
    }

    pub fn latest(&self) -> Option<f64> {
        self.errors.front().copied()
    }

    pub fn previous(&self) -> Option<f64> {
        self.errors.get(1).copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.errors.iter().copied()
    }

    /// Oldest to newest, the order a training curve is drawn in.
    pub fn chronological(&self) -> Vec<f64> {
        self.errors.iter().rev().copied().collect()
    }
}

impl FromIterator<f64> for ErrorHistory {
    /// Builds a history from errors listed newest first.
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Mutable state a trainer carries between epochs and across `train` calls.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingState {
    pub learning_rate: f64,
    /// Epochs completed over the trainer's lifetime.
    pub epochs: usize,
    pub history: ErrorHistory,
}

impl TrainingState {
    pub fn new(learning_rate: f64) -> Self {
        Self {
            learning_rate,
            epochs: 0,
            history: ErrorHistory::new(),
        }
    }
}

/// Grows the rate by 5% after a strict improvement and halves it otherwise.
///
/// Nothing changes until two errors have been recorded. The result never drops
/// below `f64::MIN_POSITIVE`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LearningRateController;

impl LearningRateController {
    pub const GROWTH: f64 = 0.05;
    pub const DECAY_DIVISOR: f64 = 2.0;

    pub fn new() -> Self {
        Self
    }

    pub fn next_rate(&self, learning_rate: f64, history: &ErrorHistory) -> f64 {
        let (Some(latest), Some(previous)) = (history.latest(), history.previous()) else {
            return learning_rate;
        };

        let next = if latest < previous {
            learning_rate + learning_rate * Self::GROWTH
        } else {
            learning_rate / Self::DECAY_DIVISOR
        };
        next.max(f64::MIN_POSITIVE)
    }

    pub fn update(&self, state: &mut TrainingState) {
        state.learning_rate = self.next_rate(state.learning_rate, &state.history);
    }
}
