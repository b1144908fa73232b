//! Quadrature decoder
//!
//! Decodes the two encoder phases into detent steps. Pure logic: the caller
//! samples the pins and feeds the levels in, so the decoder works the same
//! whether the pins are polled or edge-triggered.

/// One detent of rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Clockwise (volume up)
    Clockwise,
    /// Counter-clockwise (volume down)
    CounterClockwise,
}

impl Step {
    /// Signed position change
    pub const fn delta(self) -> i32 {
        match self {
            Step::Clockwise => 1,
            Step::CounterClockwise => -1,
        }
    }
}

/// Decoder state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature decoder
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    state: State,
    last_a: bool,
    last_b: bool,
}

impl QuadratureDecoder {
    /// Create a decoder from the current pin levels
    pub fn new(a: bool, b: bool) -> Self {
        Self {
            state: State::Idle,
            last_a: a,
            last_b: b,
        }
    }

    /// Feed a new sample
    ///
    /// Returns a step when a full detent cycle completes.
    pub fn update(&mut self, a: bool, b: bool) -> Option<Step> {
        // No change
        if a == self.last_a && b == self.last_b {
            return None;
        }

        let step = self.decode(a, b);

        self.last_a = a;
        self.last_b = b;

        step
    }

    /// Decode encoder state using state machine
    ///
    /// Quadrature encoding (both phases pulled up, detents rest at (1,1)):
    /// CW:  (1,1) -> (0,1) -> (0,0) -> (1,0) -> (1,1), A leads B
    /// CCW: (1,1) -> (1,0) -> (0,0) -> (0,1) -> (1,1), B leads A
    ///
    /// A step is emitted on the third transition. Backing out part-way
    /// returns to the previous state without emitting.
    fn decode(&mut self, a: bool, b: bool) -> Option<Step> {
        match self.state {
            State::Idle => {
                if !a && b {
                    // A fell first -> CW direction
                    self.state = State::CwStep1;
                } else if a && !b {
                    // B fell first -> CCW direction
                    self.state = State::CcwStep1;
                }
                None
            }
            State::CwStep1 => {
                self.state = match (a, b) {
                    (false, false) => State::CwStep2,
                    _ => State::Idle,
                };
                None
            }
            State::CwStep2 => match (a, b) {
                (true, false) => {
                    self.state = State::Idle;
                    Some(Step::Clockwise)
                }
                (false, true) => {
                    // Reversed before completing
                    self.state = State::CwStep1;
                    None
                }
                _ => {
                    // Skipped a phase (bounce); drop it
                    self.state = State::Idle;
                    None
                }
            },
            State::CcwStep1 => {
                self.state = match (a, b) {
                    (false, false) => State::CcwStep2,
                    _ => State::Idle,
                };
                None
            }
            State::CcwStep2 => match (a, b) {
                (false, true) => {
                    self.state = State::Idle;
                    Some(Step::CounterClockwise)
                }
                (true, false) => {
                    self.state = State::CcwStep1;
                    None
                }
                _ => {
                    self.state = State::Idle;
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CW: [(bool, bool); 4] = [(false, true), (false, false), (true, false), (true, true)];
    const CCW: [(bool, bool); 4] = [(true, false), (false, false), (false, true), (true, true)];

    fn feed(decoder: &mut QuadratureDecoder, samples: &[(bool, bool)]) -> Vec<Step> {
        samples
            .iter()
            .filter_map(|&(a, b)| decoder.update(a, b))
            .collect()
    }

    #[test]
    fn test_clockwise_detent() {
        let mut decoder = QuadratureDecoder::new(true, true);
        assert_eq!(feed(&mut decoder, &CW), vec![Step::Clockwise]);
    }

    #[test]
    fn test_counter_clockwise_detent() {
        let mut decoder = QuadratureDecoder::new(true, true);
        assert_eq!(feed(&mut decoder, &CCW), vec![Step::CounterClockwise]);
    }

    #[test]
    fn test_consecutive_detents() {
        let mut decoder = QuadratureDecoder::new(true, true);
        let mut samples = Vec::new();
        samples.extend_from_slice(&CW);
        samples.extend_from_slice(&CW);
        samples.extend_from_slice(&CCW);

        assert_eq!(
            feed(&mut decoder, &samples),
            vec![Step::Clockwise, Step::Clockwise, Step::CounterClockwise]
        );
    }

    #[test]
    fn test_repeated_samples_ignored() {
        let mut decoder = QuadratureDecoder::new(true, true);
        let samples = [
            (true, true),
            (false, true),
            (false, true),
            (false, false),
            (false, false),
            (true, false),
            (true, false),
        ];
        assert_eq!(feed(&mut decoder, &samples), vec![Step::Clockwise]);
    }

    #[test]
    fn test_bounce_on_first_edge() {
        let mut decoder = QuadratureDecoder::new(true, true);
        let samples = [(false, true), (true, true), (false, true), (true, true)];
        assert!(feed(&mut decoder, &samples).is_empty());
    }

    #[test]
    fn test_reversal_mid_detent() {
        let mut decoder = QuadratureDecoder::new(true, true);
        // Half a CW detent, then back to rest
        let samples = [(false, true), (false, false), (false, true), (true, true)];
        assert!(feed(&mut decoder, &samples).is_empty());
    }

    #[test]
    fn test_skipped_phase_dropped() {
        let mut decoder = QuadratureDecoder::new(true, true);
        // (0,0) -> (1,1) jumps both phases at once
        let samples = [(false, true), (false, false), (true, true)];
        assert!(feed(&mut decoder, &samples).is_empty());
    }

    #[test]
    fn test_step_delta() {
        assert_eq!(Step::Clockwise.delta(), 1);
        assert_eq!(Step::CounterClockwise.delta(), -1);
    }
}
