pub use crate::config::*;

use log::debug;

/// A builder for the score sheet of a roster.
///
/// The builder plays the part of the sliders: every candidate starts at its
/// default score and can be moved between 0 and 100. Each call to
/// `scores` or `compute` reads the current values afresh; nothing from a
/// previous computation is kept.
///
/// ```
/// use vote_share::builder::Builder;
/// use vote_share::Candidate;
/// # use vote_share::InvalidInputError;
///
/// let mut builder = Builder::new(&[Candidate::new("Anna", 10), Candidate::new("Bob", 30)])?;
///
/// builder.set_score("Anna", 60)?;
/// let res = builder.compute(1_000)?;
/// assert_eq!(res.rows[0].candidate, "Anna");
///
/// # Ok::<(), InvalidInputError>(())
/// ```
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Builder {
    pub(crate) _candidates: Vec<Candidate>,
    pub(crate) _scores: Vec<u32>,
}

impl Builder {
    pub fn new(candidates: &[Candidate]) -> Result<Builder, InvalidInputError> {
        for (idx, c) in candidates.iter().enumerate() {
            if candidates[..idx].iter().any(|prev| prev.name == c.name) {
                return Err(InvalidInputError::DuplicateCandidate {
                    name: c.name.clone(),
                });
            }
        }
        Ok(Builder {
            _candidates: candidates.to_vec(),
            _scores: candidates.iter().map(|c| c.default_score).collect(),
        })
    }

    /// A builder over the default roster, with the default scores.
    pub fn with_default_candidates() -> Builder {
        let candidates = default_candidates();
        Builder {
            _scores: candidates.iter().map(|c| c.default_score).collect(),
            _candidates: candidates,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self._candidates
    }

    /// Moves the score of a candidate. Values outside 0..=100 are clamped.
    pub fn set_score(&mut self, name: &str, score: i64) -> Result<(), InvalidInputError> {
        let idx = self
            ._candidates
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| InvalidInputError::UnknownCandidate {
                name: name.to_string(),
            })?;
        let clamped = clamp_score(score);
        debug!("set_score: {} -> {} (raw {})", name, clamped, score);
        self._scores[idx] = clamped;
        Ok(())
    }

    pub fn score(&self, name: &str) -> Option<u32> {
        self._candidates
            .iter()
            .position(|c| c.name == name)
            .map(|idx| self._scores[idx])
    }

    /// Puts every candidate back to its default score.
    pub fn reset(&mut self) {
        for (s, c) in self._scores.iter_mut().zip(self._candidates.iter()) {
            *s = c.default_score;
        }
    }

    /// The current score sheet, in roster order.
    pub fn scores(&self) -> Vec<CandidateScore> {
        self._candidates
            .iter()
            .zip(self._scores.iter())
            .map(|(c, s)| CandidateScore::new(&c.name, *s as i64))
            .collect()
    }

    /// Runs the computation on the current score sheet.
    pub fn compute(&self, electorate_size: i64) -> Result<ResultSet, InvalidInputError> {
        crate::compute_shares(&self.scores(), electorate_size)
    }
}
