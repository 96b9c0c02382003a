use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use vote_share::builder::Builder;
use vote_share::*;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::sim::config_reader::*;
use crate::sim::io_common::parse_score_override;

pub mod config_reader;
pub mod io_common;
pub mod render;

#[derive(Debug, Snafu)]
pub enum SimError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error serializing the summary"))]
    SerializingJson { source: serde_json::Error },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Invalid score {text:?}, expected NAME=VALUE"))]
    ParsingScore { text: String },
    #[snafu(display("Invalid input: {source}"))]
    Engine { source: InvalidInputError },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type SimResult<T> = Result<T, SimError>;

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub contest: String,
    #[serde(rename = "electorateSize")]
    pub electorate_size: u64,
    #[serde(rename = "totalIntention")]
    pub total_intention: u64,
}

pub fn build_summary_js(contest: &str, rs: &ResultSet) -> JSValue {
    let c = OutputConfig {
        contest: contest.to_string(),
        electorate_size: rs.electorate_size,
        total_intention: rs.total_score,
    };
    let runoff: Vec<String> = match rs.runoff_qualifiers() {
        Some((first, Some(second))) => vec![first.candidate.clone(), second.candidate.clone()],
        Some((first, None)) => vec![first.candidate.clone()],
        None => vec![],
    };
    // A ranking is meaningless when all the scores are zero.
    let results: Vec<JSValue> = if rs.is_degenerate() {
        vec![]
    } else {
        rs.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                json!({
                    "rank": idx + 1,
                    "candidate": row.candidate,
                    "baseIntention": row.raw_score,
                    "sharePercent": row.share_percent,
                    "estimatedVotes": row.estimated_votes,
                })
            })
            .collect()
    };
    json!({
        "config": c,
        "runoff": runoff,
        "results": results })
}

// The builder for the roster of the scenario, with the score overrides applied.
fn collect_scores(scenario: &ScenarioConfig, overrides: &[String]) -> SimResult<Builder> {
    let roster = scenario.roster();
    info!("Roster of {} candidates", roster.len());
    let mut builder = Builder::new(&roster).context(EngineSnafu {})?;
    for text in overrides.iter() {
        let (name, score) = parse_score_override(text)?;
        if clamp_score(score) as i64 != score {
            warn!(
                "Base intention {} for {:?} is out of range, using {}",
                score,
                name,
                clamp_score(score)
            );
        }
        builder.set_score(&name, score).context(EngineSnafu {})?;
    }
    Ok(builder)
}

fn resolve_electorate(range: &ElectorateRange, requested: Option<i64>) -> i64 {
    let value = requested.unwrap_or(range.default);
    let adjusted = range.adjust(value);
    if adjusted != value {
        warn!(
            "Electorate size {} adjusted to {} (range {}..={}, step {})",
            value, adjusted, range.minimum, range.maximum, range.step
        );
    }
    adjusted
}

// Where to write the summary: the command line wins over the configuration file.
fn summary_destination(
    args: &Args,
    scenario: &ScenarioConfig,
    config_dir: Option<&Path>,
) -> Option<String> {
    if let Some(out) = args.out.clone() {
        return Some(out);
    }
    let file = scenario.output_settings.output_file.clone()?;
    if file == "stdout" {
        return Some(file);
    }
    let p: PathBuf = match config_dir {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    };
    Some(p.display().to_string())
}

fn check_reference(summary_p: &str, pretty_js_stats: &str) -> SimResult<()> {
    let summary_ref = read_summary(summary_p)?;
    debug!("summary: {:?}", summary_ref);
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(SerializingJsonSnafu {})?;
    // Both sides go through the same parser so that float formatting cannot differ.
    let stats_js: JSValue = serde_json::from_str(pretty_js_stats).context(ParsingJsonSnafu {
        path: "<summary>",
    })?;
    let pretty_js_stats =
        serde_json::to_string_pretty(&stats_js).context(SerializingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference summary");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_stats.as_str(), "\n");
        whatever!("Difference detected between calculated summary and reference summary")
    }
    info!("The summary matches the reference {}", summary_p);
    Ok(())
}

pub fn run_simulation(args: &Args) -> SimResult<()> {
    let (scenario, config_dir) = match args.config.as_deref() {
        Some(path) => {
            let scenario = read_scenario(path)?;
            (scenario, Path::new(path).parent())
        }
        None => (ScenarioConfig::default(), None),
    };
    info!("scenario: {:?}", scenario);

    let range = scenario.electorate_range()?;
    let builder = collect_scores(&scenario, &args.score)?;
    let electorate = resolve_electorate(&range, args.electorate);

    let result = builder.compute(electorate).context(EngineSnafu {})?;
    debug!("result {:?}", result);

    let contest = scenario.contest_name();
    println!("{}", render::render_report(&contest, &result, args.width));

    let summary_js = build_summary_js(&contest, &result);
    let pretty_js_stats =
        serde_json::to_string_pretty(&summary_js).context(SerializingJsonSnafu {})?;

    if let Some(out) = summary_destination(args, &scenario, config_dir) {
        if out == "stdout" || out.is_empty() {
            println!("{}", pretty_js_stats);
        } else {
            info!("Writing summary to {:?}", out);
            fs::write(&out, &pretty_js_stats).context(WritingSummarySnafu { path: out.clone() })?;
        }
    }

    // The reference summary, if provided for comparison
    if let Some(reference) = args.reference.as_deref() {
        check_reference(reference, &pretty_js_stats)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(entries: &[(&str, i64)]) -> Vec<CandidateScore> {
        entries
            .iter()
            .map(|(name, score)| CandidateScore::new(name, *score))
            .collect()
    }

    #[test]
    fn summary_of_a_tie() {
        let rs = compute_shares(&sheet(&[("A", 50), ("B", 50)]), 10_000_000).unwrap();
        let js = build_summary_js("Tie", &rs);
        assert_eq!(js["config"]["contest"], json!("Tie"));
        assert_eq!(js["config"]["electorateSize"], json!(10_000_000));
        assert_eq!(js["config"]["totalIntention"], json!(100));
        assert_eq!(js["runoff"], json!(["A", "B"]));
        assert_eq!(js["results"][0]["rank"], json!(1));
        assert_eq!(js["results"][0]["sharePercent"], json!(50.0));
        assert_eq!(js["results"][1]["estimatedVotes"], json!(5_000_000.0));
        assert_eq!(js["results"][1]["baseIntention"], json!(50));
    }

    #[test]
    fn summary_without_ranking() {
        let rs = compute_shares(&sheet(&[("A", 0), ("B", 0)]), 10_000_000).unwrap();
        let js = build_summary_js("Empty", &rs);
        assert_eq!(js["runoff"], json!([]));
        assert_eq!(js["results"], json!([]));
    }

    #[test]
    fn summary_with_one_candidate() {
        let rs = compute_shares(&sheet(&[("A", 1)]), 8_000_000).unwrap();
        let js = build_summary_js("Alone", &rs);
        assert_eq!(js["runoff"], json!(["A"]));
        assert_eq!(js["results"][0]["sharePercent"], json!(100.0));
    }

    #[test]
    fn overrides_are_applied() {
        let scenario = ScenarioConfig::default();
        let b = collect_scores(
            &scenario,
            &["Franco Parisi = 40".to_string(), "Eduardo Artés=300".to_string()],
        )
        .unwrap();
        assert_eq!(b.score("Franco Parisi"), Some(40));
        assert_eq!(b.score("Eduardo Artés"), Some(100));
    }

    #[test]
    fn unknown_override() {
        let scenario = ScenarioConfig::default();
        let res = collect_scores(&scenario, &["Nobody=3".to_string()]);
        assert!(matches!(
            res,
            Err(SimError::Engine {
                source: InvalidInputError::UnknownCandidate { .. }
            })
        ));
    }

    #[test]
    fn electorate_is_clamped() {
        let range = ElectorateRange::DEFAULT_RANGE;
        assert_eq!(resolve_electorate(&range, None), 11_200_000);
        assert_eq!(resolve_electorate(&range, Some(-1)), 8_000_000);
        assert_eq!(resolve_electorate(&range, Some(9_512_345)), 9_500_000);
    }
}
