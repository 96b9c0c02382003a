/*!
Normalization of base intention scores into vote shares.

Each candidate receives a base intention score between 0 and 100. The scores
are normalized so that the shares add up to 100%, and the shares are turned
into estimated vote counts for a given electorate size. The result is ranked
by decreasing share; the first two rows are the runoff qualifiers.

```
use vote_share::*;

let scores = vec![
    CandidateScore::new("Anna", 30),
    CandidateScore::new("Bob", 10),
];
let res = compute_shares(&scores, 1_000_000)?;
assert_eq!(res.rows[0].candidate, "Anna");
assert_eq!(res.rows[0].share_percent, 75.0);
assert_eq!(res.rows[1].estimated_votes, 250_000.0);

# Ok::<(), InvalidInputError>(())
```
*/

pub mod builder;
mod config;
pub mod manual;

use log::{debug, info};

use std::collections::HashSet;

pub use crate::config::*;

// **** Private structures ****

// Position of a candidate in the input. Doubles as the tie-break rank.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
struct CandidateId(u32);

#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
struct ScoreTotal(u64);

impl ScoreTotal {
    const EMPTY: ScoreTotal = ScoreTotal(0);
}

impl std::iter::Sum for ScoreTotal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        ScoreTotal(iter.map(|st| st.0).sum())
    }
}

// A score after clamping, attached to the position of its candidate.
#[derive(Eq, PartialEq, Debug, Clone)]
struct CheckedScore {
    cid: CandidateId,
    name: String,
    score: ScoreTotal,
}

/// Computes the shares and the estimated votes of all the candidates.
///
/// Arguments:
/// * `scores` the base intention of every candidate, each candidate exactly once.
/// The order of the scores is the order used to break ties.
/// * `electorate_size` the total number of valid votes expected. It must be positive.
///
/// When all the scores are zero, the shares and the votes are all zero and the
/// rows are returned in input order.
pub fn compute_shares(
    scores: &[CandidateScore],
    electorate_size: i64,
) -> Result<ResultSet, InvalidInputError> {
    info!(
        "Processing {:?} candidates, electorate size: {:?}",
        scores.len(),
        electorate_size
    );

    if electorate_size <= 0 {
        return Err(InvalidInputError::NonPositiveElectorate { electorate_size });
    }
    let electorate = electorate_size as u64;

    let checked = checks(scores)?;
    let total: ScoreTotal = checked.iter().map(|cs| cs.score).sum();
    debug!("compute_shares: total intention: {:?}", total.0);

    if total == ScoreTotal::EMPTY {
        info!("All the scores are zero, no ranking");
        let rows = checked
            .into_iter()
            .map(|cs| ResultRow {
                candidate: cs.name,
                raw_score: cs.score.0 as u32,
                share_percent: 0.0,
                estimated_votes: 0.0,
            })
            .collect();
        return Ok(ResultSet {
            rows,
            total_score: 0,
            electorate_size: electorate,
        });
    }

    let mut ranked: Vec<(CandidateId, ResultRow)> = checked
        .into_iter()
        .map(|cs| {
            let share_percent = (cs.score.0 as f64 / total.0 as f64) * 100.0;
            let estimated_votes = (share_percent / 100.0) * electorate as f64;
            debug!(
                "Candidate: {}: {} -> {}% {} votes",
                cs.cid.0, cs.name, share_percent, estimated_votes
            );
            (
                cs.cid,
                ResultRow {
                    candidate: cs.name,
                    raw_score: cs.score.0 as u32,
                    share_percent,
                    estimated_votes,
                },
            )
        })
        .collect();

    // Equal scores give bit-identical shares, so ties fall back on the input order.
    ranked.sort_by(|(cid1, r1), (cid2, r2)| {
        r2.share_percent
            .total_cmp(&r1.share_percent)
            .then(cid1.cmp(cid2))
    });

    Ok(ResultSet {
        rows: ranked.into_iter().map(|(_, row)| row).collect(),
        total_score: total.0,
        electorate_size: electorate,
    })
}

// Clamps the scores and rejects repeated candidates.
// Candidates are returned in the same order.
fn checks(scores: &[CandidateScore]) -> Result<Vec<CheckedScore>, InvalidInputError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut res: Vec<CheckedScore> = Vec::new();
    for (idx, cs) in scores.iter().enumerate() {
        if !seen.insert(cs.name.as_str()) {
            return Err(InvalidInputError::DuplicateCandidate {
                name: cs.name.clone(),
            });
        }
        let clamped = clamp_score(cs.score);
        if clamped as i64 != cs.score {
            debug!(
                "checks: score {} of {:?} clamped to {}",
                cs.score, cs.name, clamped
            );
        }
        res.push(CheckedScore {
            cid: CandidateId(idx as u32),
            name: cs.name.clone(),
            score: ScoreTotal(clamped as u64),
        });
    }
    Ok(res)
}
