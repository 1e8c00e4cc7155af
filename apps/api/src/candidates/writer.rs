//! Record writer: turns an intake form submission into a sheet row.

use serde::Deserialize;
use tracing::{info, warn};

use crate::candidates::store::{CandidateStore, InsertOutcome};
use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;

pub const TECH_POINTS_PER_SKILL: u32 = 5;
pub const POINTS_PER_SPORT: u32 = 7;
pub const POINTS_PER_EXTRACURRICULAR: u32 = 8;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Data submitted successfully!";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists in database";

/// Intake form payload. Field names follow the recruitment form.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateSubmission {
    pub college_full_name: String,
    pub college_city: String,
    pub roll_no: String,
    pub prefix: String,
    pub candidate_name: String,
    pub gender: String,
    pub candidate_mobile_number: String,
    #[serde(default)]
    pub alternate_mobile_number: String,
    pub primary_email: String,
    #[serde(default)]
    pub alternate_email: String,
    pub tenth_board_percentage: String,
    pub twelfth_board_percentage: String,
    pub graduation_degree: String,
    pub grad_specialization: String,
    pub graduation_cgpa: String,
    pub year_of_graduation: String,
    #[serde(default)]
    pub post_graduation_degree: String,
    #[serde(default)]
    pub post_grad_specialization: String,
    #[serde(default)]
    pub post_graduation_cgpa: String,
    #[serde(default)]
    pub year_of_post_grad: String,
    #[serde(default)]
    pub foreign_language: String,
    #[serde(default)]
    pub foreign_language_proficiency: String,
    pub permanent_address: String,
    pub permanent_city: String,
    pub permanent_state: String,
    pub permanent_pin_code: String,
    pub technologies_skills: String,
    #[serde(default)]
    pub organization_worked_with: String,
    #[serde(default)]
    pub prior_experience: String,
    #[serde(default = "default_total_experience")]
    pub total_experience: String,
    #[serde(default)]
    pub legal_pursuit: String,
    #[serde(default)]
    pub sports: String,
    #[serde(default)]
    pub extra_curriculum: String,
}

fn default_total_experience() -> String {
    "0".to_string()
}

/// Number of comma-separated items that are non-empty after trimming.
pub fn count_list_items(raw: &str) -> u32 {
    raw.split(',').filter(|item| !item.trim().is_empty()).count() as u32
}

/// Empty form values are stored as empty cells.
fn cell(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Builds the sheet row for a submission. `serial_no` is left at 0; the
/// store assigns it on insert.
pub fn build_record(submission: CandidateSubmission) -> CandidateRecord {
    let tech_points = count_list_items(&submission.technologies_skills) * TECH_POINTS_PER_SKILL;
    let sports_points = count_list_items(&submission.sports) * POINTS_PER_SPORT;
    let extracurricular_points =
        count_list_items(&submission.extra_curriculum) * POINTS_PER_EXTRACURRICULAR;

    CandidateRecord {
        serial_no: 0,
        college_full_name: cell(submission.college_full_name),
        college_city: cell(submission.college_city),
        roll_no: cell(submission.roll_no),
        prefix: cell(submission.prefix),
        candidate_name: cell(submission.candidate_name),
        gender: cell(submission.gender),
        candidate_mobile_number: cell(submission.candidate_mobile_number),
        alternate_mobile_number: cell(submission.alternate_mobile_number),
        primary_email: cell(submission.primary_email),
        alternate_email: cell(submission.alternate_email),
        tenth_board_percentage: cell(submission.tenth_board_percentage),
        twelfth_board_percentage: cell(submission.twelfth_board_percentage),
        graduation_degree: cell(submission.graduation_degree),
        grad_specialization: cell(submission.grad_specialization),
        graduation_cgpa: cell(submission.graduation_cgpa),
        year_of_graduation: cell(submission.year_of_graduation),
        post_graduation_degree: cell(submission.post_graduation_degree),
        post_grad_specialization: cell(submission.post_grad_specialization),
        post_graduation_cgpa: cell(submission.post_graduation_cgpa),
        year_of_post_grad: cell(submission.year_of_post_grad),
        foreign_language: cell(submission.foreign_language),
        foreign_language_proficiency: cell(submission.foreign_language_proficiency),
        permanent_address: cell(submission.permanent_address),
        permanent_city: cell(submission.permanent_city),
        permanent_state: cell(submission.permanent_state),
        permanent_pin_code: cell(submission.permanent_pin_code),
        skills: cell(submission.technologies_skills),
        tech_points: Some(tech_points),
        organization_worked_with: cell(submission.organization_worked_with),
        prior_experience: cell(submission.prior_experience),
        total_experience: cell(submission.total_experience),
        legal_pursuit: cell(submission.legal_pursuit),
        sports: cell(submission.sports),
        sports_points: Some(sports_points),
        extracurriculars: cell(submission.extra_curriculum),
        extracurricular_points: Some(extracurricular_points),
    }
}

/// Validates and stores a submission, returning the assigned serial number.
pub async fn submit_candidate(
    store: &dyn CandidateStore,
    submission: CandidateSubmission,
) -> Result<u64, AppError> {
    if submission.primary_email.trim().is_empty() {
        return Err(AppError::Validation(
            "primary_email cannot be empty".to_string(),
        ));
    }
    if submission.candidate_name.trim().is_empty() {
        return Err(AppError::Validation(
            "candidate_name cannot be empty".to_string(),
        ));
    }

    let email = submission.primary_email.clone();
    let record = build_record(submission);

    match store.insert_if_absent(record).await? {
        InsertOutcome::Inserted { serial_no } => {
            info!("Stored candidate S.No {serial_no}");
            Ok(serial_no)
        }
        InsertOutcome::DuplicateEmail => {
            warn!("Rejected submission: {email} already on file");
            Err(AppError::DuplicateEmail(DUPLICATE_EMAIL_MESSAGE.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::candidates::store::CsvCandidateStore;

    fn submission(email: &str) -> CandidateSubmission {
        serde_json::from_value(serde_json::json!({
            "college_full_name": "Government Engineering College",
            "college_city": "Pune",
            "roll_no": "PRN-1024",
            "prefix": "Ms",
            "candidate_name": "Asha Kulkarni",
            "gender": "Female",
            "candidate_mobile_number": "9800000000",
            "primary_email": email,
            "tenth_board_percentage": "91",
            "twelfth_board_percentage": "88",
            "graduation_degree": "B.E.",
            "grad_specialization": "Computer Engineering",
            "graduation_cgpa": "8.5",
            "year_of_graduation": "2024",
            "permanent_address": "12 MG Road",
            "permanent_city": "Pune",
            "permanent_state": "Maharashtra",
            "permanent_pin_code": "411001",
            "technologies_skills": "Python, SQL"
        }))
        .unwrap()
    }

    #[test]
    fn test_count_list_items_trims_and_skips_empty() {
        assert_eq!(count_list_items("Python, SQL"), 2);
        assert_eq!(count_list_items(" , ,Rust,"), 1);
        assert_eq!(count_list_items(""), 0);
        assert_eq!(count_list_items("   "), 0);
    }

    #[test]
    fn test_optional_fields_default() {
        let s = submission("a@x");
        assert_eq!(s.total_experience, "0");
        assert_eq!(s.sports, "");
        assert_eq!(s.alternate_email, "");
    }

    #[test]
    fn test_build_record_computes_points() {
        let mut s = submission("a@x");
        s.sports = "Football".to_string();
        s.extra_curriculum = "NSS, Debate, ".to_string();

        let r = build_record(s);
        assert_eq!(r.tech_points, Some(10));
        assert_eq!(r.sports_points, Some(7));
        assert_eq!(r.extracurricular_points, Some(16));
    }

    #[test]
    fn test_build_record_blank_lists_score_zero() {
        let r = build_record(submission("a@x"));
        assert_eq!(r.sports_points, Some(0));
        assert_eq!(r.extracurricular_points, Some(0));
        assert_eq!(r.sports, None);
        assert_eq!(r.extracurriculars, None);
    }

    #[test]
    fn test_build_record_keeps_raw_text() {
        let r = build_record(submission("a@x"));
        assert_eq!(r.skills.as_deref(), Some("Python, SQL"));
        assert_eq!(r.primary_email.as_deref(), Some("a@x"));
        assert_eq!(r.total_experience.as_deref(), Some("0"));
    }

    #[tokio::test]
    async fn test_submit_adds_exactly_one_row() {
        let dir = TempDir::new().unwrap();
        let store = CsvCandidateStore::new(dir.path().join("candidates.csv"));

        let serial = submit_candidate(&store, submission("asha@college.edu"))
            .await
            .unwrap();
        assert_eq!(serial, 1);

        let records = store.all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tech_points, Some(10));
    }

    #[tokio::test]
    async fn test_submit_duplicate_email_rejected() {
        let dir = TempDir::new().unwrap();
        let store = CsvCandidateStore::new(dir.path().join("candidates.csv"));

        submit_candidate(&store, submission("asha@college.edu"))
            .await
            .unwrap();
        let err = submit_candidate(&store, submission("asha@college.edu"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateEmail(ref m) if m == DUPLICATE_EMAIL_MESSAGE));
        assert_eq!(store.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_blank_email_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("candidates.csv");
        let store = CsvCandidateStore::new(&path);

        let err = submit_candidate(&store, submission("  ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!path.exists());
    }
}
