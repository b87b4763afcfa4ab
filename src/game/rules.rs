/// Scoring switches. The defaults reproduce the legacy scorer exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Award a double its flat ten on top of its own pinfall and the
    /// two-roll lookahead, double-counting the strike the way the legacy
    /// scorer did. Disable to score doubles like plain strikes.
    pub double_stacking: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            double_stacking: true,
        }
    }
}

impl Rules {
    /// The corrected arithmetic, for exploratory runs only.
    pub fn corrected() -> Self {
        Self {
            double_stacking: false,
        }
    }
}
