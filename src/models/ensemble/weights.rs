use crate::Weight;

/// How much each signal counts in the blended score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub synergy: Weight,
    pub mana: Weight,
    pub popularity: Weight,
    pub combo: Weight,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            synergy: crate::WEIGHT_SYNERGY,
            mana: crate::WEIGHT_MANA,
            popularity: crate::WEIGHT_POPULARITY,
            combo: crate::WEIGHT_COMBO,
        }
    }
}
