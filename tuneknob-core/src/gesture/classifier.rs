//! Single/double click classifier for one button
//!
//! Works on the raw press counter rather than on edges: every poll compares
//! the counter with the count at the last emitted gesture.
//!
//! | From | `diff` | Time since first press | To | Emits |
//! |---|---|---|---|---|
//! | Idle | 0 | - | Idle | None |
//! | Idle | 1 | - | AwaitingTimeout | None |
//! | AwaitingTimeout | 1 | `<= window` | AwaitingTimeout | None |
//! | AwaitingTimeout | 1 | `> window` | Idle | SingleClick |
//! | any | `>= 2` | - | Idle | DoubleClick |
//!
//! `diff` is `raw_count - last_settled_count`. Three or more presses between
//! polls still count as one double click.

/// Default double-click window in ticks
pub const DOUBLE_CLICK_WINDOW_MS: u32 = 500;

/// Classified outcome of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Nothing to report this poll
    #[default]
    None,
    /// One press, window elapsed without a second
    SingleClick,
    /// Two (or more) presses
    DoubleClick,
}

/// Classifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClassifierState {
    /// No unsettled press
    Idle,
    /// One press seen; waiting to see whether a second follows
    AwaitingTimeout {
        /// Tick at which the first press was observed
        started_at: u32,
    },
}

/// Gesture classifier for a single button
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    state: ClassifierState,
    last_settled_count: u32,
    window_ms: u32,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_WINDOW_MS)
    }
}

impl GestureClassifier {
    /// Create a classifier with the given double-click window
    pub const fn new(window_ms: u32) -> Self {
        Self {
            state: ClassifierState::Idle,
            last_settled_count: 0,
            window_ms,
        }
    }

    /// Current state
    pub fn state(&self) -> ClassifierState {
        self.state
    }

    /// Press count at the last emitted gesture
    pub fn last_settled_count(&self) -> u32 {
        self.last_settled_count
    }

    /// Classify the current press count at tick `now`
    pub fn poll(&mut self, raw_count: u32, now: u32) -> Gesture {
        let diff = raw_count.wrapping_sub(self.last_settled_count);

        match (self.state, diff) {
            (_, 0) => Gesture::None,
            (_, d) if d >= 2 => {
                self.settle(raw_count);
                Gesture::DoubleClick
            }
            (ClassifierState::Idle, _) => {
                self.state = ClassifierState::AwaitingTimeout { started_at: now };
                Gesture::None
            }
            (ClassifierState::AwaitingTimeout { started_at }, _) => {
                if now.wrapping_sub(started_at) > self.window_ms {
                    self.settle(raw_count);
                    Gesture::SingleClick
                } else {
                    Gesture::None
                }
            }
        }
    }

    fn settle(&mut self, raw_count: u32) {
        self.last_settled_count = raw_count;
        self.state = ClassifierState::Idle;
    }
}
