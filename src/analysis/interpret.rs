//! Ordinal tiers for reporting metric values
//!
//! Thresholds are fixed domain constants. The fractal dimension tiers follow
//! perceptual studies in which dimensions between 1.2 and 1.7 are preferred
//! and experienced as restorative.

use crate::analysis::pipeline::Measurement;
use std::fmt;

/// Presentation tone of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Simple, uniform or ordered
    Low,
    /// Intermediate
    Medium,
    /// Complex, irregular or disordered
    High,
    /// Inside the perceptually preferred range
    Preferred,
}

impl Tone {
    /// Lowercase name of the tone
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Preferred => "preferred",
        }
    }
}

/// Tier a metric value falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    /// Short tier name
    pub level: &'static str,
    /// What the tier means for the texture
    pub meaning: &'static str,
    /// Presentation tone
    pub tone: Tone,
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.meaning)
    }
}

const fn tier(level: &'static str, meaning: &'static str, tone: Tone) -> Interpretation {
    Interpretation {
        level,
        meaning,
        tone,
    }
}

// (exclusive upper bound, tier); values beyond the last bound take the final tier
const DIMENSION_TIERS: [(f64, Interpretation); 4] = [
    (1.2, tier("very simple", "simple pattern", Tone::Low)),
    (
        1.4,
        tier("preferred range (lower)", "comfortable complexity", Tone::Preferred),
    ),
    (
        1.7,
        tier("preferred range (upper)", "engaging complexity", Tone::Preferred),
    ),
    (1.8, tier("complex", "high complexity", Tone::High)),
];
const DIMENSION_TOP: Interpretation = tier("very complex", "very high complexity", Tone::High);

const LACUNARITY_TIERS: [(f64, Interpretation); 2] = [
    (0.3, tier("uniform", "regular arrangement", Tone::Low)),
    (0.6, tier("moderate", "moderately uneven", Tone::Medium)),
];
const LACUNARITY_TOP: Interpretation = tier("irregular", "irregular arrangement", Tone::High);

const ENTROPY_TIERS: [(f64, Interpretation); 3] = [
    (0.4, tier("ordered", "repetitive structure", Tone::Low)),
    (0.7, tier("structured", "patterned with variation", Tone::Medium)),
    (0.9, tier("intricate", "rich local variation", Tone::High)),
];
const ENTROPY_TOP: Interpretation = tier("disordered", "noise-like", Tone::High);

const COMPLEXITY_TIERS: [(f64, Interpretation); 2] = [
    (0.1, tier("trivial", "either ordered or random", Tone::Low)),
    (0.25, tier("moderate", "some organized structure", Tone::Medium)),
];
const COMPLEXITY_TOP: Interpretation = tier("organized", "organized complexity", Tone::High);

const FISHER_TIERS: [(f64, Interpretation); 2] = [
    (0.1, tier("smooth", "gradual pattern transitions", Tone::Low)),
    (0.4, tier("moderate", "mixed pattern transitions", Tone::Medium)),
];
const FISHER_TOP: Interpretation = tier("sharp", "abrupt pattern transitions", Tone::High);

fn lookup(value: f64, tiers: &[(f64, Interpretation)], top: Interpretation) -> Interpretation {
    tiers
        .iter()
        .find(|(bound, _)| value < *bound)
        .map_or(top, |&(_, interpretation)| interpretation)
}

/// Tier of a fractal dimension
pub fn interpret_dimension(value: f64) -> Interpretation {
    lookup(value, &DIMENSION_TIERS, DIMENSION_TOP)
}

/// Tier of a lacunarity value
pub fn interpret_lacunarity(value: f64) -> Interpretation {
    lookup(value, &LACUNARITY_TIERS, LACUNARITY_TOP)
}

/// Tier of a normalized permutation entropy
pub fn interpret_entropy(value: f64) -> Interpretation {
    lookup(value, &ENTROPY_TIERS, ENTROPY_TOP)
}

/// Tier of a statistical complexity
pub fn interpret_complexity(value: f64) -> Interpretation {
    lookup(value, &COMPLEXITY_TIERS, COMPLEXITY_TOP)
}

/// Tier of a Fisher information value
pub fn interpret_fisher(value: f64) -> Interpretation {
    lookup(value, &FISHER_TIERS, FISHER_TOP)
}

/// Tier of every metric in a measurement, labelled by metric name
pub fn interpret(measurement: &Measurement) -> Vec<(&'static str, Interpretation)> {
    match measurement {
        Measurement::Fractal(fractal) => vec![
            ("FD", interpret_dimension(fractal.dimension)),
            ("L", interpret_lacunarity(fractal.lacunarity)),
        ],
        Measurement::Information(info) => vec![
            ("H", interpret_entropy(info.entropy)),
            ("C", interpret_complexity(info.complexity)),
            ("F", interpret_fisher(info.fisher)),
        ],
    }
}
