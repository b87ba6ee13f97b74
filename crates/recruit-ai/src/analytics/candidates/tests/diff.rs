use super::common::snapshot;
use crate::analytics::candidates::diff::{diff_snapshots, ResumeChange};
use crate::analytics::candidates::domain::EducationLevel;

#[test]
fn identical_snapshots_report_no_changes() {
    let previous = snapshot(EducationLevel::Graduate, 5, &["Python", "SQL"], "Analyst");
    let latest = previous.clone();

    assert!(diff_snapshots(&previous, &latest).is_empty());
}

#[test]
fn skill_changes_come_first_added_then_removed() {
    let previous = snapshot(EducationLevel::Graduate, 5, &["A", "B"], "Analyst");
    let latest = snapshot(EducationLevel::Graduate, 10, &["B", "C"], "Manager");

    let changes = diff_snapshots(&previous, &latest);

    assert_eq!(changes.len(), 4);
    assert_eq!(changes[0], ResumeChange::SkillsAdded(vec!["C".to_string()]));
    assert_eq!(
        changes[1],
        ResumeChange::SkillsRemoved(vec!["A".to_string()])
    );
    assert!(matches!(
        changes[2],
        ResumeChange::ExperienceUpdated { .. }
    ));
    assert!(matches!(changes[3], ResumeChange::RoleChanged { .. }));
}

#[test]
fn summaries_render_the_dashboard_strings() {
    let previous = snapshot(EducationLevel::Graduate, 2, &["Excel", "SQL"], "Analyst");
    let latest = snapshot(
        EducationLevel::Graduate,
        5,
        &["ML", "Python", "SQL"],
        "Senior Analyst",
    );

    let summaries: Vec<String> = diff_snapshots(&previous, &latest)
        .iter()
        .map(ResumeChange::summary)
        .collect();

    assert_eq!(
        summaries,
        vec![
            "Skills added: ML, Python".to_string(),
            "Skills removed: Excel".to_string(),
            "Experience updated: Early Career (1–3 yrs) → Experienced (4–7 yrs)".to_string(),
            "Role changed: Analyst → Senior Analyst".to_string(),
        ]
    );
}

#[test]
fn added_skill_listings_are_alphabetical() {
    let previous = snapshot(EducationLevel::PostGraduate, 3, &["SQL"], "Consultant");
    let latest = snapshot(
        EducationLevel::PostGraduate,
        3,
        &["SQL", "Sales", "Marketing", "Excel"],
        "Consultant",
    );

    let changes = diff_snapshots(&previous, &latest);

    assert_eq!(
        changes,
        vec![ResumeChange::SkillsAdded(vec![
            "Excel".to_string(),
            "Marketing".to_string(),
            "Sales".to_string(),
        ])]
    );
}

#[test]
fn education_and_raw_years_are_not_compared() {
    let previous = snapshot(EducationLevel::Graduate, 5, &["SQL"], "Analyst");
    let latest = snapshot(EducationLevel::PostGraduate, 6, &["SQL"], "Analyst");

    // Both years fall in the same bucket and education is out of scope.
    assert!(diff_snapshots(&previous, &latest).is_empty());
}
