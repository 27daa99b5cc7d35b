//! Completion fan-in for concurrently animating shards.

/// Result of recording one completion report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanInRecord {
    /// New report; `remaining` distinct reports are still outstanding.
    Counted { remaining: usize },
    /// This report was the last outstanding one. Returned exactly once.
    Completed,
    /// This index already reported.
    Duplicate,
    /// Index outside `0..expected`.
    OutOfRange,
}

/// Waits for `expected` distinct indices to report completion.
///
/// Ordering of reports is irrelevant; only the count of distinct indices is.
#[derive(Debug, Clone)]
pub struct CompletionFanIn {
    seen: Vec<bool>,
    remaining: usize,
}

impl CompletionFanIn {
    pub fn new(expected: usize) -> Self {
        Self {
            seen: vec![false; expected],
            remaining: expected,
        }
    }

    pub fn record(&mut self, index: usize) -> FanInRecord {
        let Some(seen) = self.seen.get_mut(index) else {
            return FanInRecord::OutOfRange;
        };
        if *seen || self.remaining == 0 {
            return FanInRecord::Duplicate;
        }

        *seen = true;
        self.remaining -= 1;
        if self.remaining == 0 {
            FanInRecord::Completed
        } else {
            FanInRecord::Counted {
                remaining: self.remaining,
            }
        }
    }

    pub fn expected(&self) -> usize {
        self.seen.len()
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_once_in_any_order() {
        let mut fan_in = CompletionFanIn::new(3);
        assert_eq!(fan_in.record(2), FanInRecord::Counted { remaining: 2 });
        assert_eq!(fan_in.record(0), FanInRecord::Counted { remaining: 1 });
        assert_eq!(fan_in.record(1), FanInRecord::Completed);
        assert_eq!(fan_in.record(1), FanInRecord::Duplicate);
        assert!(fan_in.is_complete());
    }

    #[test]
    fn test_duplicates_do_not_count() {
        let mut fan_in = CompletionFanIn::new(2);
        fan_in.record(1);
        assert_eq!(fan_in.record(1), FanInRecord::Duplicate);
        assert_eq!(fan_in.record(1), FanInRecord::Duplicate);
        assert_eq!(fan_in.remaining(), 1);
    }

    #[test]
    fn test_highest_index_first_does_not_complete() {
        let mut fan_in = CompletionFanIn::new(120);
        assert_eq!(fan_in.record(119), FanInRecord::Counted { remaining: 119 });
        assert!(!fan_in.is_complete());
    }

    #[test]
    fn test_out_of_range() {
        let mut fan_in = CompletionFanIn::new(4);
        assert_eq!(fan_in.record(4), FanInRecord::OutOfRange);
        assert_eq!(fan_in.remaining(), 4);
        assert_eq!(fan_in.expected(), 4);
    }
}
