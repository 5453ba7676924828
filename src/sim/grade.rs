//! End-of-run grading

use serde::{Deserialize, Serialize};

/// Grade tiers, lowest first so `Ord` follows score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

impl Grade {
    /// Step function over the final score, highest threshold first
    pub fn from_score(score: u32) -> Self {
        match score {
            86.. => Grade::SSS,
            66.. => Grade::SS,
            41.. => Grade::S,
            26.. => Grade::A,
            11.. => Grade::B,
            _ => Grade::C,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::C => "C",
            Grade::B => "B",
            Grade::A => "A",
            Grade::S => "S",
            Grade::SS => "SS",
            Grade::SSS => "SSS",
        }
    }

    /// One-line verdict shown under the grade
    pub fn flavor_text(&self) -> &'static str {
        match self {
            Grade::SSS => "(Meteor: this dinosaur... just won't die)",
            Grade::SS => "(Almost godlike)",
            Grade::S => "(Got careless and didn't dodge)",
            Grade::A => "(Not bad at all)",
            Grade::B => "(Dinosaur: you lousy gunner :D)",
            Grade::C => "(The dinosaurs went extinct because of you)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grade_table() {
        assert_eq!(Grade::from_score(86), Grade::SSS);
        assert_eq!(Grade::from_score(66), Grade::SS);
        assert_eq!(Grade::from_score(41), Grade::S);
        assert_eq!(Grade::from_score(26), Grade::A);
        assert_eq!(Grade::from_score(11), Grade::B);
        assert_eq!(Grade::from_score(0), Grade::C);
    }

    #[test]
    fn test_boundaries_fall_to_lower_tier() {
        assert_eq!(Grade::from_score(10), Grade::C);
        assert_eq!(Grade::from_score(25), Grade::B);
        assert_eq!(Grade::from_score(40), Grade::A);
        assert_eq!(Grade::from_score(65), Grade::S);
        assert_eq!(Grade::from_score(85), Grade::SS);
        assert_eq!(Grade::from_score(u32::MAX), Grade::SSS);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Grade::SSS.as_str(), "SSS");
        assert_eq!(Grade::C.as_str(), "C");
        assert!(!Grade::B.flavor_text().is_empty());
    }

    proptest! {
        #[test]
        fn prop_monotonic(a in any::<u32>(), b in any::<u32>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Grade::from_score(lo) <= Grade::from_score(hi));
        }
    }
}
