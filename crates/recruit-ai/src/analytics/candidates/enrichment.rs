use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::domain::{ApplicationRecord, CandidateApplication, CandidateSnapshot, EducationLevel};

pub const EDUCATION_POOL: [EducationLevel; 2] =
    [EducationLevel::Graduate, EducationLevel::PostGraduate];

pub const EXPERIENCE_YEARS_POOL: [u8; 7] = [0, 1, 2, 3, 5, 7, 10];

pub const SKILL_POOL: [&str; 7] = [
    "Python",
    "SQL",
    "Excel",
    "Power BI",
    "ML",
    "Marketing",
    "Sales",
];

pub const ROLE_POOL: [&str; 4] = ["Analyst", "Senior Analyst", "Consultant", "Manager"];

/// Assigns demonstration attributes (education, experience, skills, role) to
/// ingested records. The random source is injected so a fixed seed reproduces
/// the same enrichment from run to run; nothing here touches process-global
/// state.
#[derive(Debug)]
pub struct SnapshotEnricher<R: Rng> {
    rng: R,
}

impl SnapshotEnricher<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SnapshotEnricher<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a fresh snapshot. Each application record gets an independent
    /// draw, so repeat applicants naturally accumulate resume differences.
    pub fn enrich(&mut self, record: ApplicationRecord) -> CandidateApplication {
        let education = EDUCATION_POOL[self.rng.gen_range(0..EDUCATION_POOL.len())];
        let experience_years =
            EXPERIENCE_YEARS_POOL[self.rng.gen_range(0..EXPERIENCE_YEARS_POOL.len())];
        let skill_count = self.rng.gen_range(2..=4);
        let skills: BTreeSet<String> = SKILL_POOL
            .choose_multiple(&mut self.rng, skill_count)
            .map(|skill| (*skill).to_string())
            .collect();
        let current_role = ROLE_POOL[self.rng.gen_range(0..ROLE_POOL.len())].to_string();

        let snapshot = CandidateSnapshot::new(education, experience_years, skills, current_role);
        CandidateApplication { record, snapshot }
    }

    /// Picks a required-skill set for a job posting, mirroring how demo data
    /// seeds the skill-alignment view.
    pub fn required_skills(&mut self, count: usize) -> BTreeSet<String> {
        SKILL_POOL
            .choose_multiple(&mut self.rng, count.min(SKILL_POOL.len()))
            .map(|skill| (*skill).to_string())
            .collect()
    }
}
