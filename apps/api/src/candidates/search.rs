//! Unified candidate search across skills, sports and extracurriculars.
//!
//! A query is a comma-separated list of terms. A candidate matches when every
//! term appears somewhere in the three fields combined (AND across terms, OR
//! across fields). Matching is case-insensitive substring containment.
//!
//! Missing fields are normalized asymmetrically: Skills becomes `""`, while
//! Sports and Extracurriculars become the literal `"no"`. A query for `"no"`
//! therefore matches every candidate who left sports or extracurriculars
//! blank.

use serde::Serialize;
use tracing::{debug, warn};

use crate::candidates::store::CandidateStore;
use crate::models::candidate::CandidateRecord;

const MISSING_SKILLS: &str = "";
const MISSING_ACTIVITY: &str = "no";

/// Which of the three searched fields contained a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermMatch {
    pub term: String,
    pub skills: bool,
    pub sports: bool,
    pub extracurriculars: bool,
}

/// A search hit: the candidate's stored (un-normalized) values plus a
/// per-term breakdown used for highlighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateMatch {
    pub serial_no: u64,
    pub name: Option<String>,
    pub cgpa: Option<String>,
    pub email: Option<String>,
    pub skills: Option<String>,
    pub sports: Option<String>,
    pub extracurriculars: Option<String>,
    pub tech_points: u32,
    pub sports_points: u32,
    pub extracurricular_points: u32,
    pub total_experience: Option<String>,
    pub matches: Vec<TermMatch>,
}

struct NormalizedFields {
    skills: String,
    sports: String,
    extracurriculars: String,
}

impl NormalizedFields {
    fn of(record: &CandidateRecord) -> Self {
        Self {
            skills: record
                .skills
                .as_deref()
                .unwrap_or(MISSING_SKILLS)
                .to_lowercase(),
            sports: record
                .sports
                .as_deref()
                .unwrap_or(MISSING_ACTIVITY)
                .to_lowercase(),
            extracurriculars: record
                .extracurriculars
                .as_deref()
                .unwrap_or(MISSING_ACTIVITY)
                .to_lowercase(),
        }
    }

    fn combined(&self) -> String {
        format!("{} {} {}", self.skills, self.sports, self.extracurriculars)
    }

    fn breakdown(&self, term: &str) -> TermMatch {
        TermMatch {
            term: term.to_string(),
            skills: self.skills.contains(term),
            sports: self.sports.contains(term),
            extracurriculars: self.extracurriculars.contains(term),
        }
    }
}

/// Splits a raw query into lowercase, trimmed, non-empty terms.
/// Repeated terms keep their first position only.
pub fn parse_search_terms(input: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in input.split(',') {
        let term = term.trim().to_lowercase();
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// Filters `records` to those matching every term, in sheet order.
pub fn match_candidates(records: &[CandidateRecord], terms: &[String]) -> Vec<CandidateMatch> {
    if terms.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter_map(|record| {
            let fields = NormalizedFields::of(record);
            let combined = fields.combined();
            if !terms.iter().all(|term| combined.contains(term.as_str())) {
                return None;
            }

            Some(CandidateMatch {
                serial_no: record.serial_no,
                name: record.candidate_name.clone(),
                cgpa: record.graduation_cgpa.clone(),
                email: record.primary_email.clone(),
                skills: record.skills.clone(),
                sports: record.sports.clone(),
                extracurriculars: record.extracurriculars.clone(),
                tech_points: record.tech_points.unwrap_or(0),
                sports_points: record.sports_points.unwrap_or(0),
                extracurricular_points: record.extracurricular_points.unwrap_or(0),
                total_experience: record.total_experience.clone(),
                matches: terms.iter().map(|term| fields.breakdown(term)).collect(),
            })
        })
        .collect()
}

/// Runs a query against the store. A store read failure is logged and
/// yields no results.
pub async fn search_candidates(store: &dyn CandidateStore, query: &str) -> Vec<CandidateMatch> {
    let terms = parse_search_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let records = match store.all().await {
        Ok(records) => records,
        Err(e) => {
            warn!("Candidate search could not read the store: {e}");
            return Vec::new();
        }
    };

    let hits = match_candidates(&records, &terms);
    debug!(
        "Search {:?} matched {} of {} candidates",
        terms,
        hits.len(),
        records.len()
    );
    hits
}
