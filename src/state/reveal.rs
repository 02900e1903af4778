/// One-shot "has entered the viewport" latch for entrance animations.
///
/// `threshold` is the fraction of the element that must be visible before
/// it counts as entered, matching the observer's `thresholds` option.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RevealOnce {
    threshold: f64,
    entered: bool,
}

impl RevealOnce {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            entered: false,
        }
    }

    /// Feed one intersection entry. Returns true only on the transition
    /// into the revealed state.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.entered || !intersecting || ratio < self.threshold {
            return false;
        }
        self.entered = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.entered
    }
}
