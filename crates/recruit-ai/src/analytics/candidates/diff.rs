use serde::{Deserialize, Serialize};

use super::domain::{CandidateSnapshot, ExperienceBucket};

/// One material difference between two snapshots of the same candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeChange {
    SkillsAdded(Vec<String>),
    SkillsRemoved(Vec<String>),
    ExperienceUpdated {
        from: ExperienceBucket,
        to: ExperienceBucket,
    },
    RoleChanged {
        from: String,
        to: String,
    },
}

impl ResumeChange {
    pub fn summary(&self) -> String {
        match self {
            ResumeChange::SkillsAdded(skills) => {
                format!("Skills added: {}", skills.join(", "))
            }
            ResumeChange::SkillsRemoved(skills) => {
                format!("Skills removed: {}", skills.join(", "))
            }
            ResumeChange::ExperienceUpdated { from, to } => {
                format!("Experience updated: {} → {}", from.label(), to.label())
            }
            ResumeChange::RoleChanged { from, to } => {
                format!("Role changed: {} → {}", from, to)
            }
        }
    }
}

/// Compares two chronologically ordered snapshots and lists what changed, in
/// a fixed order: skills added, skills removed, experience bucket, role.
/// Callers must supply snapshots for the same candidate with `previous` older
/// than `latest`; candidates with fewer than two applications never reach
/// this function.
///
/// Skill listings come out alphabetically because snapshots keep skills in a
/// sorted set. Raw experience years and education are not compared.
pub fn diff_snapshots(previous: &CandidateSnapshot, latest: &CandidateSnapshot) -> Vec<ResumeChange> {
    let mut changes = Vec::new();

    if previous.skills != latest.skills {
        let added: Vec<String> = latest.skills.difference(&previous.skills).cloned().collect();
        let removed: Vec<String> = previous.skills.difference(&latest.skills).cloned().collect();
        if !added.is_empty() {
            changes.push(ResumeChange::SkillsAdded(added));
        }
        if !removed.is_empty() {
            changes.push(ResumeChange::SkillsRemoved(removed));
        }
    }

    if previous.experience_bucket != latest.experience_bucket {
        changes.push(ResumeChange::ExperienceUpdated {
            from: previous.experience_bucket,
            to: latest.experience_bucket,
        });
    }

    if previous.current_role != latest.current_role {
        changes.push(ResumeChange::RoleChanged {
            from: previous.current_role.clone(),
            to: latest.current_role.clone(),
        });
    }

    changes
}
