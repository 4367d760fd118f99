//! Alpha cycling and stroke-width oscillation.
//!
//! Both walk a bounded range back and forth, reversing exactly at the ends.

use serde::Serialize;

/// Direction the alpha cycler walks through the configured levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphaDirection {
    /// Towards more opaque levels
    Forward,
    /// Towards more transparent levels
    Backward,
}

impl AlphaDirection {
    fn flipped(self) -> Self {
        match self {
            AlphaDirection::Forward => AlphaDirection::Backward,
            AlphaDirection::Backward => AlphaDirection::Forward,
        }
    }
}

/// Walks alpha level indices when the active color is tapped again.
///
/// `None` means the cycle has not started since the last color change.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AlphaCycler {
    direction: Option<AlphaDirection>,
}

impl AlphaCycler {
    pub fn reset(&mut self) {
        self.direction = None;
    }

    pub fn direction(&self) -> Option<AlphaDirection> {
        self.direction
    }

    /// Returns the next level index for a list of `len` levels.
    ///
    /// `index` must be below `len`. A single level never moves.
    pub fn advance(&mut self, index: usize, len: usize) -> usize {
        if len < 2 {
            return index;
        }
        let last = len - 1;

        let direction = match self.direction {
            None if index == 0 => AlphaDirection::Forward,
            None => AlphaDirection::Backward,
            Some(dir @ AlphaDirection::Forward) if index >= last => dir.flipped(),
            Some(dir @ AlphaDirection::Backward) if index == 0 => dir.flipped(),
            Some(dir) => dir,
        };
        self.direction = Some(direction);

        match direction {
            AlphaDirection::Forward => (index + 1).min(last),
            AlphaDirection::Backward => index.saturating_sub(1),
        }
    }
}

/// Ping-pong stepper for the "next width" control.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WidthOscillator {
    /// Signed step; the magnitude never changes
    step: f64,
}

impl WidthOscillator {
    pub fn new(step: f64) -> Self {
        Self { step: step.abs() }
    }

    /// Returns the width following `width`, bouncing at `min` and `max`.
    pub fn next(&mut self, width: f64, min: f64, max: f64) -> f64 {
        if (width >= max && self.step > 0.0) || (width <= min && self.step < 0.0) {
            self.step = -self.step;
        }
        (width + self.step).clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycler_starts_backward_from_top() {
        let mut cycler = AlphaCycler::default();
        assert_eq!(cycler.advance(3, 4), 2);
        assert_eq!(cycler.direction(), Some(AlphaDirection::Backward));
    }

    #[test]
    fn cycler_starts_forward_from_bottom() {
        let mut cycler = AlphaCycler::default();
        assert_eq!(cycler.advance(0, 4), 1);
        assert_eq!(cycler.direction(), Some(AlphaDirection::Forward));
    }

    #[test]
    fn cycler_bounces_at_both_ends() {
        let mut cycler = AlphaCycler::default();
        let mut index = 3;
        let mut seen = Vec::new();
        for _ in 0..8 {
            index = cycler.advance(index, 4);
            seen.push(index);
        }
        assert_eq!(seen, vec![2, 1, 0, 1, 2, 3, 2, 1]);
    }

    #[test]
    fn cycler_with_single_level_stays_put() {
        let mut cycler = AlphaCycler::default();
        assert_eq!(cycler.advance(0, 1), 0);
        assert_eq!(cycler.direction(), None);
    }

    #[test]
    fn reset_forgets_direction() {
        let mut cycler = AlphaCycler::default();
        cycler.advance(1, 4);
        cycler.reset();
        assert_eq!(cycler.direction(), None);
    }

    #[test]
    fn oscillator_clamps_uneven_ranges() {
        let mut osc = WidthOscillator::new(4.0);
        assert_eq!(osc.next(3.0, 3.0, 9.0), 7.0);
        assert_eq!(osc.next(7.0, 3.0, 9.0), 9.0);
        assert_eq!(osc.next(9.0, 3.0, 9.0), 5.0);
        assert_eq!(osc.next(5.0, 3.0, 9.0), 3.0);
        assert_eq!(osc.next(3.0, 3.0, 9.0), 7.0);
    }
}
