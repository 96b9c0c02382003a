// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The lowest base intention score a candidate can have.
pub const SCORE_MIN: u32 = 0;
/// The highest base intention score a candidate can have.
pub const SCORE_MAX: u32 = 100;
/// Score given to a candidate that has no default in the roster.
pub const FALLBACK_SCORE: u32 = 5;

/// A registered candidate, with the base intention score it starts with.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Candidate {
    pub name: String,
    pub default_score: u32,
}

impl Candidate {
    pub fn new(name: &str, default_score: u32) -> Candidate {
        Candidate {
            name: name.to_string(),
            default_score: default_score.min(SCORE_MAX),
        }
    }
}

/// The base intention for one candidate, as collected from the user.
///
/// The score is kept as a signed integer so that raw input can be passed
/// through untouched. It is clamped to `[SCORE_MIN, SCORE_MAX]` before use.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CandidateScore {
    pub name: String,
    pub score: i64,
}

impl CandidateScore {
    pub fn new(name: &str, score: i64) -> CandidateScore {
        CandidateScore {
            name: name.to_string(),
            score,
        }
    }
}

/// Clamps a raw score to the accepted range.
pub fn clamp_score(raw: i64) -> u32 {
    raw.clamp(SCORE_MIN as i64, SCORE_MAX as i64) as u32
}

// ******** Output data structures *********

/// The outcome for one candidate.
///
/// Nothing is rounded here: `share_percent` and `estimated_votes` are kept
/// at full precision and only formatted for display.
#[derive(PartialEq, Debug, Clone)]
pub struct ResultRow {
    pub candidate: String,
    pub raw_score: u32,
    pub share_percent: f64,
    pub estimated_votes: f64,
}

/// All the rows of one computation, sorted by decreasing share.
#[derive(PartialEq, Debug, Clone)]
pub struct ResultSet {
    pub rows: Vec<ResultRow>,
    pub total_score: u64,
    pub electorate_size: u64,
}

impl ResultSet {
    /// True when every score was zero. In that case all the shares are zero
    /// and the rows are in input order.
    pub fn is_degenerate(&self) -> bool {
        self.total_score == 0
    }

    /// The two candidates with the largest shares.
    ///
    /// The second qualifier is missing when only one candidate took part.
    pub fn runoff_qualifiers(&self) -> Option<(&ResultRow, Option<&ResultRow>)> {
        if self.is_degenerate() {
            return None;
        }
        let first = self.rows.first()?;
        Some((first, self.rows.get(1)))
    }

    pub fn total_share(&self) -> f64 {
        self.rows.iter().map(|r| r.share_percent).sum()
    }

    pub fn total_votes(&self) -> f64 {
        self.rows.iter().map(|r| r.estimated_votes).sum()
    }
}

/// Errors that prevent a computation from completing.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum InvalidInputError {
    /// The electorate size must be strictly positive.
    NonPositiveElectorate { electorate_size: i64 },
    /// The same candidate was given twice.
    DuplicateCandidate { name: String },
    /// The candidate is not part of the roster.
    UnknownCandidate { name: String },
    /// The bounds of an electorate range are inconsistent.
    InvalidRange {
        minimum: i64,
        maximum: i64,
        step: i64,
    },
}

impl Error for InvalidInputError {}

impl Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputError::NonPositiveElectorate { electorate_size } => write!(
                f,
                "the electorate size must be positive, got {}",
                electorate_size
            ),
            InvalidInputError::DuplicateCandidate { name } => {
                write!(f, "candidate {:?} was given more than once", name)
            }
            InvalidInputError::UnknownCandidate { name } => {
                write!(f, "candidate {:?} is not registered", name)
            }
            InvalidInputError::InvalidRange {
                minimum,
                maximum,
                step,
            } => write!(
                f,
                "invalid electorate range: minimum {}, maximum {}, step {}",
                minimum, maximum, step
            ),
        }
    }
}

// ********* Configuration **********

/// The candidates and their default base intention, in roster order.
pub const DEFAULT_CANDIDATES: [(&str, u32); 8] = [
    ("Jeannette Jara", 30),
    ("Evelyn Matthei", 15),
    ("José Antonio Kast", 20),
    ("Johannes Kaiser", 12),
    ("Franco Parisi", 10),
    ("Marco Enríquez-Ominami", 4),
    ("Harold Mayne-Nicholls", 3),
    ("Eduardo Artés", 2),
];

pub fn default_candidates() -> Vec<Candidate> {
    DEFAULT_CANDIDATES
        .iter()
        .map(|(name, score)| Candidate::new(name, *score))
        .collect()
}

/// The default score for a name, looked up in the default roster.
pub fn default_score_for(name: &str) -> u32 {
    DEFAULT_CANDIDATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, s)| *s)
        .unwrap_or(FALLBACK_SCORE)
}

/// The values the electorate size may take, as offered to the user.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct ElectorateRange {
    pub minimum: i64,
    pub maximum: i64,
    pub step: i64,
    pub default: i64,
}

impl ElectorateRange {
    pub const DEFAULT_RANGE: ElectorateRange = ElectorateRange {
        minimum: 8_000_000,
        maximum: 13_000_000,
        step: 100_000,
        default: 11_200_000,
    };

    pub fn check(&self) -> Result<(), InvalidInputError> {
        if self.step <= 0
            || self.minimum > self.maximum
            || self.default < self.minimum
            || self.default > self.maximum
        {
            return Err(InvalidInputError::InvalidRange {
                minimum: self.minimum,
                maximum: self.maximum,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Brings a value inside the range and onto the nearest step, counted
    /// from the minimum. The result never exceeds the maximum.
    ///
    /// An inconsistent range (see `check`) leaves the value untouched.
    pub fn adjust(&self, value: i64) -> i64 {
        if self.check().is_err() {
            return value;
        }
        // Wide ranges overflow i64 once the offset from the minimum is taken.
        let (minimum, maximum, step) = (
            self.minimum as i128,
            self.maximum as i128,
            self.step as i128,
        );
        let clamped = (value as i128).clamp(minimum, maximum);
        let steps = (clamped - minimum + step / 2) / step;
        (minimum + steps * step).min(maximum) as i64
    }
}

impl Default for ElectorateRange {
    fn default() -> Self {
        ElectorateRange::DEFAULT_RANGE
    }
}
