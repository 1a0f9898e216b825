use crate::ballot::RankingPolicy;
use crate::error::{Error, Result};
use std::env;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_BALLOT_COUNT: u32 = 20;
const DEFAULT_CANDIDATES: &str = "A,B,C,D,E";

/// Run parameters, loaded from the environment with defaults matching the
/// service's own demo poll: five candidates, twenty ballots, full rankings.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub base_url: String,
    pub ballot_count: u32,
    pub candidates: Vec<String>,
    pub policy: RankingPolicy,
}

impl SimulationConfig {
    /// Reads `POLL_SERVICE_URL`, `BALLOT_COUNT`, `CANDIDATES` (comma
    /// separated labels) and `RANKING_POLICY` (`full` or `prefix`).
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("POLL_SERVICE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let ballot_count = match env::var("BALLOT_COUNT") {
            Ok(raw) => parse_ballot_count(&raw)?,
            Err(_) => DEFAULT_BALLOT_COUNT,
        };
        let candidates = parse_candidates(
            &env::var("CANDIDATES").unwrap_or_else(|_| DEFAULT_CANDIDATES.to_string()),
        )?;
        let policy = match env::var("RANKING_POLICY") {
            Ok(raw) => parse_policy(&raw)?,
            Err(_) => RankingPolicy::FullPermutation,
        };
        Ok(Self {
            base_url,
            ballot_count,
            candidates,
            policy,
        })
    }
}

fn parse_ballot_count(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("BALLOT_COUNT must be a non-negative integer, got {raw:?}")))
}

fn parse_candidates(raw: &str) -> Result<Vec<String>> {
    let labels: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if labels.is_empty() {
        return Err(Error::Config(
            "CANDIDATES must list at least one label".to_string(),
        ));
    }
    Ok(labels)
}

fn parse_policy(raw: &str) -> Result<RankingPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "full" => Ok(RankingPolicy::FullPermutation),
        "prefix" => Ok(RankingPolicy::RandomPrefix),
        other => Err(Error::Config(format!(
            "RANKING_POLICY must be \"full\" or \"prefix\", got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_are_trimmed_and_split_on_commas() {
        let labels = parse_candidates(" A, B ,C,,D ").unwrap();
        assert_eq!(labels, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn empty_candidate_list_is_rejected() {
        assert!(parse_candidates("").is_err());
        assert!(parse_candidates(" , ,").is_err());
    }

    #[test]
    fn policy_names_are_case_insensitive() {
        assert_eq!(parse_policy("FULL").unwrap(), RankingPolicy::FullPermutation);
        assert_eq!(parse_policy("prefix").unwrap(), RankingPolicy::RandomPrefix);
        assert!(parse_policy("truncated").is_err());
    }

    #[test]
    fn ballot_count_must_be_numeric() {
        assert_eq!(parse_ballot_count("0").unwrap(), 0);
        assert_eq!(parse_ballot_count(" 42 ").unwrap(), 42);
        assert!(parse_ballot_count("twenty").is_err());
        assert!(parse_ballot_count("-1").is_err());
    }
}
