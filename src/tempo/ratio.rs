#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ratio of a note value to the reference beat, stored as an exact fraction.
/// `pulse = bpm * ratio` is the same for every field of a table.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotesPerBeat {
    /// Numerator: how many parts
    pub numerator: u32,
    /// Denominator: of what size
    pub denominator: u32,
}

impl NotesPerBeat {
    pub const ONE: NotesPerBeat = NotesPerBeat::whole(1);
    pub const TWO: NotesPerBeat = NotesPerBeat::whole(2);
    pub const HALF: NotesPerBeat = NotesPerBeat::new(1, 2);

    /// Build a ratio from a fraction (not reduced)
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        NotesPerBeat {
            numerator,
            denominator,
        }
    }

    /// Build an integral ratio
    pub const fn whole(n: u32) -> Self {
        NotesPerBeat::new(n, 1)
    }

    /// `whole + numerator/denominator`, e.g. `mixed(1, 1, 3)` = 4/3
    pub const fn mixed(whole: u32, numerator: u32, denominator: u32) -> Self {
        NotesPerBeat {
            numerator: whole * denominator + numerator,
            denominator,
        }
        .reduce()
    }

    /// Apply a dot: multiply by 3/2
    pub const fn dotted(self) -> Self {
        NotesPerBeat {
            numerator: self.numerator * 3,
            denominator: self.denominator * 2,
        }
        .reduce()
    }

    /// General tuplet: `played` notes in the time of `in_time_of` notes.
    /// E.g. `.tuplet(2, 3)` = triplet
    pub const fn tuplet(self, in_time_of: u32, played: u32) -> Self {
        NotesPerBeat {
            numerator: self.numerator * in_time_of,
            denominator: self.denominator * played,
        }
        .reduce()
    }

    /// Reduce the fraction to lowest terms using GCD
    pub const fn reduce(self) -> Self {
        let gcd = const_gcd(self.numerator, self.denominator);
        if gcd == 0 {
            return self;
        }
        NotesPerBeat {
            numerator: self.numerator / gcd,
            denominator: self.denominator / gcd,
        }
    }

    /// Strictly positive: both parts non-zero
    pub const fn is_positive(&self) -> bool {
        self.numerator != 0 && self.denominator != 0
    }

    /// Whole part plus remainder, so 5/3 evaluates as `1.0 + 2.0 / 3.0`
    /// (1.6666666666666665, one ulp below `5.0 / 3.0`)
    pub fn as_f64(&self) -> f64 {
        let whole = (self.numerator / self.denominator) as f64;
        let rest = (self.numerator % self.denominator) as f64;
        whole + rest / self.denominator as f64
    }
}

impl std::fmt::Display for NotesPerBeat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Compute greatest common divisor (Euclidean algorithm)
const fn const_gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_fractions() {
        // 1 + 1/3
        assert_eq!(NotesPerBeat::mixed(1, 1, 3), NotesPerBeat::new(4, 3));
        // 4 + 2/3
        assert_eq!(NotesPerBeat::mixed(4, 2, 3), NotesPerBeat::new(14, 3));
        // 2 + 0/3 reduces to 2
        assert_eq!(NotesPerBeat::mixed(2, 0, 3), NotesPerBeat::TWO);
    }

    #[test]
    fn test_dotted_and_tuplet() {
        assert_eq!(NotesPerBeat::ONE.dotted(), NotesPerBeat::new(3, 2));
        assert_eq!(NotesPerBeat::HALF.dotted(), NotesPerBeat::new(3, 4));
        assert_eq!(NotesPerBeat::TWO.tuplet(3, 2), NotesPerBeat::whole(3));
    }

    #[test]
    fn test_reduce() {
        let r = NotesPerBeat::new(6, 9).reduce();
        assert_eq!(r, NotesPerBeat::new(2, 3));

        // Zero denominator is left alone so validation can reject it
        let bad = NotesPerBeat::new(0, 0).reduce();
        assert_eq!(bad, NotesPerBeat::new(0, 0));
    }

    #[test]
    fn test_positivity() {
        assert!(NotesPerBeat::ONE.is_positive());
        assert!(!NotesPerBeat::new(0, 3).is_positive());
        assert!(!NotesPerBeat::new(3, 0).is_positive());
    }

    #[test]
    fn test_as_f64_and_display() {
        assert_eq!(NotesPerBeat::new(3, 4).as_f64(), 0.75);
        assert_eq!(NotesPerBeat::new(16, 3).to_string(), "16/3");
        assert_eq!(NotesPerBeat::whole(6).to_string(), "6");
    }

    #[test]
    fn test_as_f64_sums_whole_and_remainder() {
        assert_eq!(NotesPerBeat::new(5, 3).as_f64(), 1.0 + 2.0 / 3.0);
        assert_ne!(NotesPerBeat::new(5, 3).as_f64(), 5.0 / 3.0);
        assert_eq!(NotesPerBeat::new(4, 3).as_f64(), 1.0 + 1.0 / 3.0);
        assert_eq!(NotesPerBeat::new(8, 3).as_f64(), 2.0 + 2.0 / 3.0);
        assert_eq!(NotesPerBeat::new(16, 3).as_f64(), 5.0 + 1.0 / 3.0);
        assert_eq!(NotesPerBeat::new(1, 2).as_f64(), 0.5);
    }

    #[test]
    fn test_const_evaluation() {
        const DOTTED_EIGHTH: NotesPerBeat = NotesPerBeat::HALF.dotted();
        assert_eq!(DOTTED_EIGHTH.numerator, 3);
        assert_eq!(DOTTED_EIGHTH.denominator, 4);
    }
}
