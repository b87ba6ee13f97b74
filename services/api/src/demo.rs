use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infra::{analytics_config, InMemoryApplicationStore};
use recruit_ai::analytics::candidates::{
    CandidateAnalyticsService, DashboardOverview, RepeatApplicantReport, SnapshotEnricher,
};
use recruit_ai::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Directory of CSV feeds, one file per source system
    #[arg(long, default_value = "data/sources")]
    pub(crate) sources_dir: PathBuf,
    /// Override the reporting date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Seed controlling the demo enrichment attributes
    #[arg(long, default_value_t = 42)]
    pub(crate) seed: u64,
    /// Include the full candidate roster in the output
    #[arg(long)]
    pub(crate) list_candidates: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reporting date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Seed controlling feed synthesis and enrichment
    #[arg(long, default_value_t = 42)]
    pub(crate) seed: u64,
    /// Candidate pool size for the synthesized feeds
    #[arg(long, default_value_t = 40)]
    pub(crate) candidates: usize,
    /// Skip the duplicate-scan portion of the demo
    #[arg(long)]
    pub(crate) skip_duplicates: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        sources_dir,
        today,
        seed,
        list_candidates,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = build_service(seed);

    let summary = service.ingest_dir(&sources_dir)?;
    println!(
        "Ingested {} records from {}",
        summary.records_ingested, summary.source_system
    );

    let overview = service.overview()?;
    render_overview(&overview, list_candidates);

    let report = service.repeat_applicants(today)?;
    render_repeat_report(&report, 10);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        seed,
        candidates,
        skip_duplicates,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = build_service(seed);

    println!("Recruiter analytics demo (seed {seed})");

    let pool = CandidatePool::synthesize(seed, candidates.max(4), today);
    for (platform, csv) in pool.feeds() {
        let summary = service.ingest_reader(Cursor::new(csv), platform)?;
        println!(
            "- {}: {} records ({} total)",
            platform, summary.records_ingested, summary.total_records
        );
    }

    let overview = service.overview()?;
    render_overview(&overview, false);

    let report = service.repeat_applicants(today)?;
    render_repeat_report(&report, 5);

    if let Some(top) = report.recent.first().or_else(|| report.older.first()) {
        let changes = service.resume_changes(&top.email)?;
        println!("\nResume changes since last application ({})", top.full_name);
        if changes.applications < 2 {
            println!("  Only one application on record.");
        } else if changes.changes.is_empty() {
            println!("  No material resume changes detected.");
        } else {
            for change in &changes.changes {
                println!("  - {change}");
            }
        }
    }

    let required: BTreeSet<String> = SnapshotEnricher::seeded(seed).required_skills(3);
    let alignment = service.skill_alignment(&pool.busiest_job, &required)?;
    println!(
        "\nSkill alignment for {} (required: {})",
        alignment.job_id,
        alignment.required_skills.join(", ")
    );
    for entry in alignment.candidates.iter().take(5) {
        println!(
            "  - {} matches {} of {} required skills",
            entry.full_name,
            entry.match_count,
            alignment.required_skills.len()
        );
    }

    if !skip_duplicates {
        let pairs = service.duplicates()?;
        println!("\nProbable duplicate records: {}", pairs.len());
        for pair in pairs.iter().take(5) {
            println!(
                "  - {} ~ {} (score {:.1})",
                pair.left.0, pair.right.0, pair.score
            );
        }
    }

    Ok(())
}

fn build_service(seed: u64) -> Arc<CandidateAnalyticsService<InMemoryApplicationStore>> {
    Arc::new(CandidateAnalyticsService::new(
        Arc::new(InMemoryApplicationStore::default()),
        analytics_config(seed),
    ))
}

fn render_overview(overview: &DashboardOverview, list_candidates: bool) {
    println!("\nOverview");
    println!("- Job openings:       {}", overview.summary.job_openings);
    println!("- Total applications: {}", overview.summary.total_applications);
    println!("- Unique candidates:  {}", overview.summary.unique_candidates);
    println!("- Repeat applicants:  {}", overview.summary.repeat_applicants);

    if list_candidates {
        println!("\nCandidates");
        for entry in &overview.roster {
            println!(
                "  - {} <{}> | {} | {} | {} application(s)",
                entry.full_name,
                entry.email,
                entry.education_label,
                entry.experience_label,
                entry.applications
            );
        }
    }
}

fn render_repeat_report(report: &RepeatApplicantReport, limit: usize) {
    println!(
        "\nRepeat applicants (last {} days: {}, older: {})",
        report.recent_window_days,
        report.recent.len(),
        report.older.len()
    );
    for view in report.recent.iter().take(limit) {
        println!(
            "  - {} | applied {}x | last {} | intent {:.1}",
            view.full_name, view.times_applied, view.last_applied, view.intent.total
        );
    }
    for view in report.older.iter().take(limit) {
        println!(
            "  - {} | applied {}x | last {} | intent {:.1} (older)",
            view.full_name, view.times_applied, view.last_applied, view.intent.total
        );
    }
}

const FIRST_NAMES: [&str; 12] = [
    "Asha", "Ben", "Cara", "Dev", "Elena", "Farid", "Grace", "Hugo", "Ines", "Jonas", "Kavya",
    "Liam",
];

const LAST_NAMES: [&str; 12] = [
    "Rao", "Okafor", "Lim", "Patel", "Sousa", "Nazari", "Chen", "Meyer", "Duarte", "Berg",
    "Iyer", "Walsh",
];

const PLATFORMS: [&str; 3] = ["ATS", "LinkedIn", "JobPortal"];

struct CandidatePool {
    rows_per_platform: Vec<(String, String)>,
    busiest_job: String,
}

impl CandidatePool {
    /// Builds three platform feeds over a shared candidate pool. Candidates
    /// can apply on several platforms under platform-specific record ids,
    /// which is what makes the repeat and duplicate views interesting.
    fn synthesize(seed: u64, pool_size: usize, today: NaiveDate) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let header =
            "candidate_record_id,full_name,email,phone,job_id,application_platform,application_date\n";

        let mut people = Vec::with_capacity(pool_size);
        for index in 0..pool_size {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            people.push((
                format!("{first} {last}"),
                format!("{}.{}{}@example.com", first.to_lowercase(), last.to_lowercase(), index),
                format!("55500{index:05}"),
            ));
        }

        let mut feeds: Vec<(String, String)> = PLATFORMS
            .iter()
            .map(|platform| ((*platform).to_string(), header.to_string()))
            .collect();
        let mut job_counts: std::collections::BTreeMap<String, usize> =
            std::collections::BTreeMap::new();

        for (person_index, (name, email, phone)) in people.iter().enumerate() {
            let applications = rng.gen_range(1..=3);
            for _ in 0..applications {
                let feed_index = rng.gen_range(0..feeds.len());
                let job = format!("JOB-{}", rng.gen_range(100..=120));
                let date = today - Duration::days(rng.gen_range(0..365));
                *job_counts.entry(job.clone()).or_default() += 1;
                let (platform, csv) = &mut feeds[feed_index];
                csv.push_str(&format!(
                    "{}-{person_index:04},{name},{email},{phone},{job},{platform},{}\n",
                    platform.to_lowercase(),
                    date.format("%Y-%m-%d")
                ));
            }
        }

        let busiest_job = job_counts
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(job, _)| job.clone())
            .unwrap_or_else(|| "JOB-100".to_string());

        Self {
            rows_per_platform: feeds,
            busiest_job,
        }
    }

    fn feeds(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows_per_platform
            .iter()
            .map(|(platform, csv)| (platform.as_str(), csv.as_str()))
    }
}
