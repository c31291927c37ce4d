use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use shared_config::MatchPolicy;

use crate::models::{ClientMatch, ClientRecord, MatchError, MatchMethod, MatchScore};

/// Identifier split into lowercase whitespace tokens.
struct NormalizedIdentifier {
    phrase: String,
    tokens: Vec<String>,
}

impl NormalizedIdentifier {
    fn parse(identifier: &str) -> Option<Self> {
        let tokens: Vec<String> = identifier
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        if tokens.is_empty() {
            return None;
        }

        Some(Self {
            phrase: tokens.join(" "),
            tokens,
        })
    }
}

/// Resolves the identifier attached to an uploaded scan to a client record.
#[derive(Debug)]
pub struct ClientMatcher {
    policy: MatchPolicy,
    id_number_pattern: Regex,
}

impl ClientMatcher {
    pub fn new(policy: MatchPolicy) -> Result<Self, MatchError> {
        if policy.min_id_digits == 0 || policy.min_id_digits > policy.max_id_digits {
            return Err(MatchError::InvalidPolicy(format!(
                "ID number length range {}..={} is empty",
                policy.min_id_digits, policy.max_id_digits
            )));
        }

        let pattern = format!(r"^[0-9]{{{},{}}}$", policy.min_id_digits, policy.max_id_digits);
        let id_number_pattern = Regex::new(&pattern)
            .map_err(|e| MatchError::InvalidPolicy(e.to_string()))?;

        Ok(Self {
            policy,
            id_number_pattern,
        })
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// True when the identifier has the shape of a national ID number.
    pub fn is_id_number(&self, identifier: &str) -> bool {
        self.id_number_pattern.is_match(identifier.trim())
    }

    pub fn find_best_match<'a>(
        &self,
        identifier: &str,
        candidates: &'a [ClientRecord],
    ) -> Result<Option<&'a ClientRecord>, MatchError> {
        Ok(self.match_client(identifier, candidates)?.map(|found| found.client))
    }

    /// Best candidate for `identifier`, along with how it was found.
    ///
    /// An ID-shaped identifier that hits exactly one `idNumber` wins outright.
    /// Everything else is ranked by name similarity; ties keep input order.
    pub fn match_client<'a>(
        &self,
        identifier: &str,
        candidates: &'a [ClientRecord],
    ) -> Result<Option<ClientMatch<'a>>, MatchError> {
        let query = NormalizedIdentifier::parse(identifier).ok_or(MatchError::EmptyIdentifier)?;

        debug!("Matching scan identifier against {} candidates", candidates.len());

        if let Some(client) = self.exact_id_match(identifier, candidates) {
            debug!("Scan identifier matched client {} by ID number", client.id);
            return Ok(Some(ClientMatch {
                client,
                method: MatchMethod::ExactId,
                score: None,
            }));
        }

        let best = self
            .ranked(&query, candidates)
            .into_iter()
            .next()
            .map(|(client, score)| ClientMatch {
                client,
                method: MatchMethod::Fuzzy,
                score: Some(score),
            });

        match &best {
            Some(found) => debug!("Best fuzzy match is client {} with score {:?}", found.client.id, found.score),
            None => debug!("No candidate scored above zero"),
        }

        Ok(best)
    }

    /// Every candidate with a positive name score, highest first.
    pub fn rank_candidates(
        &self,
        identifier: &str,
        candidates: &[ClientRecord],
    ) -> Result<Vec<MatchScore>, MatchError> {
        let query = NormalizedIdentifier::parse(identifier).ok_or(MatchError::EmptyIdentifier)?;

        Ok(self
            .ranked(&query, candidates)
            .into_iter()
            .map(|(client, score)| MatchScore {
                client_id: client.id.clone(),
                score,
            })
            .collect())
    }

    /// Name similarity of one candidate. An empty identifier scores zero.
    pub fn score(&self, identifier: &str, candidate: &ClientRecord) -> u32 {
        NormalizedIdentifier::parse(identifier)
            .map(|query| self.score_normalized(&query, candidate))
            .unwrap_or(0)
    }

    fn exact_id_match<'a>(
        &self,
        identifier: &str,
        candidates: &'a [ClientRecord],
    ) -> Option<&'a ClientRecord> {
        let id_number = identifier.trim();
        if !self.is_id_number(id_number) {
            return None;
        }

        let mut hits = candidates
            .iter()
            .filter(|candidate| candidate.id_number.as_deref().map(str::trim) == Some(id_number));

        match (hits.next(), hits.next()) {
            (Some(client), None) => Some(client),
            (Some(_), Some(_)) => {
                debug!("ID number shared by several clients, falling back to name scoring");
                None
            }
            _ => None,
        }
    }

    fn ranked<'a>(
        &self,
        query: &NormalizedIdentifier,
        candidates: &'a [ClientRecord],
    ) -> Vec<(&'a ClientRecord, u32)> {
        let mut scored: Vec<(&'a ClientRecord, u32)> = candidates
            .iter()
            .map(|candidate| (candidate, self.score_normalized(query, candidate)))
            .filter(|(_, score)| *score > 0)
            .collect();

        // sort_by is stable, so equal scores stay in input order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
    }

    fn score_normalized(&self, query: &NormalizedIdentifier, candidate: &ClientRecord) -> u32 {
        let first = candidate.first_name.trim().to_lowercase();
        let last = candidate.last_name.trim().to_lowercase();
        let full = format!("{} {}", first, last).trim().to_string();
        let reversed = format!("{} {}", last, first).trim().to_string();

        let mut score = 0;

        if full == query.phrase {
            score += self.policy.full_name_weight;
        }
        if reversed == query.phrase {
            score += self.policy.reversed_name_weight;
        }

        for token in &query.tokens {
            if full.contains(token.as_str()) {
                score += self.policy.token_contained_weight;
            }
            if *token == first || *token == last {
                score += self.policy.token_exact_weight;
            }
            if first.starts_with(token.as_str()) || last.starts_with(token.as_str()) {
                score += self.policy.token_prefix_weight;
            }
        }

        score
    }
}

static DEFAULT_MATCHER: LazyLock<Result<ClientMatcher, MatchError>> =
    LazyLock::new(|| ClientMatcher::new(MatchPolicy::default()));

fn default_matcher() -> Result<&'static ClientMatcher, MatchError> {
    DEFAULT_MATCHER.as_ref().map_err(Clone::clone)
}

/// Best client for `identifier` using the default match policy.
pub fn find_best_match<'a>(
    identifier: &str,
    candidates: &'a [ClientRecord],
) -> Result<Option<&'a ClientRecord>, MatchError> {
    default_matcher()?.find_best_match(identifier, candidates)
}

/// Name similarity of one candidate using the default match policy.
pub fn score(identifier: &str, candidate: &ClientRecord) -> Result<u32, MatchError> {
    Ok(default_matcher()?.score(identifier, candidate))
}
