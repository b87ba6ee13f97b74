use serde::{Deserialize, Serialize};

use super::domain::{ApplicationRecord, CandidateRecordId};

/// Field weights for the duplicate verdict. The defaults are chosen so that
/// an email match alone stays under the threshold while email plus either
/// phone or name crosses it; phone plus name alone does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub email: f32,
    pub phone: f32,
    pub full_name: f32,
    pub threshold: f32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            email: 0.6,
            phone: 0.3,
            full_name: 0.1,
            threshold: 0.7,
        }
    }
}

/// Flags probable duplicate candidate records using weighted exact equality.
/// Comparisons are case-sensitive and unnormalized on purpose; the feeds are
/// trusted to deliver fields verbatim.
#[derive(Debug, Clone, Default)]
pub struct DuplicateMatcher {
    weights: MatchWeights,
}

impl DuplicateMatcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn match_score(&self, a: &ApplicationRecord, b: &ApplicationRecord) -> f32 {
        let mut score = 0.0;
        if a.email == b.email {
            score += self.weights.email;
        }
        if a.phone == b.phone {
            score += self.weights.phone;
        }
        if a.full_name == b.full_name {
            score += self.weights.full_name;
        }
        score
    }

    pub fn is_probable_duplicate(&self, a: &ApplicationRecord, b: &ApplicationRecord) -> bool {
        self.match_score(a, b) >= self.weights.threshold
    }

    /// Pairwise scan over a batch of records, reporting every pair of distinct
    /// candidate records that crosses the threshold. Quadratic in the batch
    /// size, which matches the dashboard's batch-review usage.
    pub fn scan(&self, records: &[ApplicationRecord]) -> Vec<DuplicatePair> {
        let mut pairs = Vec::new();
        for (index, left) in records.iter().enumerate() {
            for right in records.iter().skip(index + 1) {
                if left.candidate_record_id == right.candidate_record_id {
                    continue;
                }
                let score = self.match_score(left, right);
                if score >= self.weights.threshold {
                    pairs.push(DuplicatePair {
                        left: left.candidate_record_id.clone(),
                        right: right.candidate_record_id.clone(),
                        left_email: left.email.clone(),
                        right_email: right.email.clone(),
                        score,
                    });
                }
            }
        }
        pairs
    }
}

/// A flagged pair of candidate records judged likely to be the same person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicatePair {
    pub left: CandidateRecordId,
    pub right: CandidateRecordId,
    pub left_email: String,
    pub right_email: String,
    pub score: f32,
}
