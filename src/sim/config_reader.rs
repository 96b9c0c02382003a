use crate::sim::*;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

pub const DEFAULT_CONTEST_NAME: &str = "First round simulation";

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "contestName")]
    pub contest_name: Option<String>,
    #[serde(rename = "outputFile")]
    pub output_file: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElectorateSettings {
    #[serde(rename = "estimatedValidVotes")]
    pub estimated_valid_votes: Option<i64>,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
    pub step: Option<i64>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCandidate {
    pub name: String,
    #[serde(rename = "baseIntention")]
    pub base_intention: Option<i64>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    #[serde(default)]
    pub electorate: ElectorateSettings,
    #[serde(default)]
    pub candidates: Vec<ScenarioCandidate>,
}

impl ScenarioConfig {
    pub fn contest_name(&self) -> String {
        match self.output_settings.contest_name.clone() {
            Some(x) if !x.trim().is_empty() => x,
            _ => DEFAULT_CONTEST_NAME.to_string(),
        }
    }

    /// The range of the electorate size. Missing bounds come from the default
    /// range; the estimate is brought inside the range.
    pub fn electorate_range(&self) -> SimResult<ElectorateRange> {
        let d = ElectorateRange::DEFAULT_RANGE;
        let mut range = ElectorateRange {
            minimum: self.electorate.minimum.unwrap_or(d.minimum),
            maximum: self.electorate.maximum.unwrap_or(d.maximum),
            step: self.electorate.step.unwrap_or(d.step),
            default: self.electorate.minimum.unwrap_or(d.minimum),
        };
        range.check().context(EngineSnafu {})?;
        let estimate = self.electorate.estimated_valid_votes.unwrap_or(d.default);
        range.default = range.adjust(estimate);
        if self.electorate.estimated_valid_votes.is_some() && range.default != estimate {
            warn!(
                "estimatedValidVotes {} adjusted to {}",
                estimate, range.default
            );
        }
        Ok(range)
    }

    /// The candidates of the scenario, in order. Without any candidate in the
    /// file, the default roster is used.
    pub fn roster(&self) -> Vec<Candidate> {
        if self.candidates.is_empty() {
            return default_candidates();
        }
        self.candidates
            .iter()
            .map(|c| {
                let score = match c.base_intention {
                    Some(x) => {
                        let clamped = clamp_score(x);
                        if clamped as i64 != x {
                            warn!(
                                "baseIntention {} for {:?} is out of range, using {}",
                                x, c.name, clamped
                            );
                        }
                        clamped
                    }
                    None => default_score_for(&c.name),
                };
                Candidate::new(&c.name, score)
            })
            .collect()
    }
}

pub fn read_scenario(path: &str) -> SimResult<ScenarioConfig> {
    info!("Attempting to read scenario file {:?}", path);
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: ScenarioConfig =
        serde_json::from_str(&contents).context(ParsingJsonSnafu { path })?;
    Ok(config)
}

pub fn read_summary(path: &str) -> SimResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read content: {:?}", contents);
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(js)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> ScenarioConfig {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn empty_scenario_uses_defaults() {
        let sc = parse("{}");
        assert_eq!(sc, ScenarioConfig::default());
        assert_eq!(sc.contest_name(), DEFAULT_CONTEST_NAME);
        assert_eq!(sc.roster(), default_candidates());
        assert_eq!(
            sc.electorate_range().unwrap(),
            ElectorateRange::DEFAULT_RANGE
        );
    }

    #[test]
    fn full_scenario() {
        let sc = parse(
            r#"{
                "outputSettings": {"contestName": "Test", "outputFile": "out.json"},
                "electorate": {"estimatedValidVotes": 500, "minimum": 100, "maximum": 1000, "step": 50},
                "candidates": [
                    {"name": "Evelyn Matthei"},
                    {"name": "Someone New"},
                    {"name": "Franco Parisi", "baseIntention": 140}
                ]
            }"#,
        );
        assert_eq!(sc.contest_name(), "Test");
        assert_eq!(sc.output_settings.output_file, Some("out.json".to_string()));
        assert_eq!(
            sc.electorate_range().unwrap(),
            ElectorateRange {
                minimum: 100,
                maximum: 1000,
                step: 50,
                default: 500
            }
        );
        assert_eq!(
            sc.roster(),
            vec![
                Candidate::new("Evelyn Matthei", 15),
                Candidate::new("Someone New", FALLBACK_SCORE),
                Candidate::new("Franco Parisi", 100),
            ]
        );
    }

    #[test]
    fn estimate_outside_range() {
        let sc = parse(r#"{"electorate": {"estimatedValidVotes": 20000000}}"#);
        assert_eq!(sc.electorate_range().unwrap().default, 13_000_000);
    }

    #[test]
    fn inconsistent_range() {
        let sc = parse(r#"{"electorate": {"minimum": 10, "maximum": 5}}"#);
        assert!(matches!(
            sc.electorate_range(),
            Err(SimError::Engine {
                source: InvalidInputError::InvalidRange { .. }
            })
        ));
    }

    #[test]
    fn malformed_file() {
        let res: Result<ScenarioConfig, _> =
            serde_json::from_str(r#"{"candidates": [{"baseIntention": 3}]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn very_wide_range() {
        let sc = parse(
            r#"{"electorate": {
                "minimum": -9000000000000000000,
                "maximum": 9000000000000000000,
                "step": 100000,
                "estimatedValidVotes": 9000000000000000000
            }}"#,
        );
        let range = sc.electorate_range().unwrap();
        assert_eq!(range.default, 9_000_000_000_000_000_000);
    }
}
