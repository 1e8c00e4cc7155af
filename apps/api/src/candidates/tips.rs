use crate::candidates::search::CandidateMatch;

pub const CGPA_THRESHOLD: f64 = 6.5;

pub const INVALID_CGPA_TIP: &str = "CGPA is missing or invalid.";
pub const LOW_CGPA_TIP: &str = "Work on improving your CGPA to enhance academic strength.";
pub const SKILLS_TIP: &str =
    "Consider learning technical skills like Python, SQL, or Web Development.";
pub const SPORTS_TIP: &str = "Engaging in sports builds team spirit and leadership skills.";
pub const EXTRACURRICULAR_TIP: &str =
    "Participating in extracurriculars shows you're a well-rounded individual.";
pub const UNKNOWN_EXPERIENCE_TIP: &str = "Could not assess your experience level.";
pub const NO_EXPERIENCE_TIP: &str =
    "Try doing internships or real-world projects to build practical experience.";

/// Values that count as "nothing listed" for a free-text list field.
const EMPTY_ENTRIES: &[&str] = &["", "no", "none"];

/// Builds the ordered booster tips for a search hit.
///
/// Checks, each independent of the others:
/// 1. CGPA unparsable → invalid tip; otherwise below 6.5 → improvement tip
/// 2. Skills, 3. Sports, 4. Extracurriculars empty or "no"/"none" → nudge
/// 5. Experience unparsable → cannot-assess tip; otherwise exactly 0 → internship tip
///
/// A missing CGPA counts as unparsable. A missing experience value counts as 0.
pub fn generate_booster_tips(candidate: &CandidateMatch) -> Vec<String> {
    let mut tips = Vec::new();

    match parse_number(candidate.cgpa.as_deref()) {
        None => tips.push(INVALID_CGPA_TIP),
        Some(cgpa) if cgpa < CGPA_THRESHOLD => tips.push(LOW_CGPA_TIP),
        Some(_) => {}
    }

    if lists_nothing(candidate.skills.as_deref()) {
        tips.push(SKILLS_TIP);
    }
    if lists_nothing(candidate.sports.as_deref()) {
        tips.push(SPORTS_TIP);
    }
    if lists_nothing(candidate.extracurriculars.as_deref()) {
        tips.push(EXTRACURRICULAR_TIP);
    }

    match parse_number(Some(candidate.total_experience.as_deref().unwrap_or("0"))) {
        None => tips.push(UNKNOWN_EXPERIENCE_TIP),
        Some(years) if years == 0.0 => tips.push(NO_EXPERIENCE_TIP),
        Some(_) => {}
    }

    tips.into_iter().map(str::to_string).collect()
}

fn parse_number(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse::<f64>().ok())
}

fn lists_nothing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => EMPTY_ENTRIES.contains(&v.trim().to_lowercase().as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A candidate who triggers no tips.
    fn strong_candidate() -> CandidateMatch {
        CandidateMatch {
            serial_no: 1,
            name: Some("Asha".to_string()),
            cgpa: Some("8.2".to_string()),
            email: Some("asha@college.edu".to_string()),
            skills: Some("Python, SQL".to_string()),
            sports: Some("Football".to_string()),
            extracurriculars: Some("Debate".to_string()),
            tech_points: 10,
            sports_points: 7,
            extracurricular_points: 8,
            total_experience: Some("1.5".to_string()),
            matches: vec![],
        }
    }

    #[test]
    fn test_strong_candidate_gets_no_tips() {
        assert!(generate_booster_tips(&strong_candidate()).is_empty());
    }

    #[test]
    fn test_invalid_cgpa_short_circuits_threshold() {
        let mut c = strong_candidate();
        c.cgpa = Some("abc".to_string());
        assert_eq!(generate_booster_tips(&c), vec![INVALID_CGPA_TIP]);
    }

    #[test]
    fn test_missing_cgpa_is_invalid() {
        let mut c = strong_candidate();
        c.cgpa = None;
        assert_eq!(generate_booster_tips(&c), vec![INVALID_CGPA_TIP]);
    }

    #[test]
    fn test_low_cgpa_gets_threshold_tip_only() {
        let mut c = strong_candidate();
        c.cgpa = Some("6.0".to_string());
        assert_eq!(generate_booster_tips(&c), vec![LOW_CGPA_TIP]);
    }

    #[test]
    fn test_cgpa_at_threshold_passes() {
        let mut c = strong_candidate();
        c.cgpa = Some("6.5".to_string());
        assert!(generate_booster_tips(&c).is_empty());
    }

    #[test]
    fn test_placeholder_lists_count_as_empty() {
        let mut c = strong_candidate();
        c.skills = Some("  None ".to_string());
        c.sports = Some("NO".to_string());
        c.extracurriculars = Some("   ".to_string());
        assert_eq!(
            generate_booster_tips(&c),
            vec![SKILLS_TIP, SPORTS_TIP, EXTRACURRICULAR_TIP]
        );
    }

    #[test]
    fn test_missing_lists_get_tips() {
        let mut c = strong_candidate();
        c.sports = None;
        c.extracurriculars = None;
        assert_eq!(
            generate_booster_tips(&c),
            vec![SPORTS_TIP, EXTRACURRICULAR_TIP]
        );
    }

    #[test]
    fn test_zero_experience_gets_internship_tip() {
        let mut c = strong_candidate();
        c.total_experience = Some("0".to_string());
        assert_eq!(generate_booster_tips(&c), vec![NO_EXPERIENCE_TIP]);
    }

    #[test]
    fn test_unparsable_experience_cannot_be_assessed() {
        let mut c = strong_candidate();
        c.total_experience = Some("two years".to_string());
        assert_eq!(generate_booster_tips(&c), vec![UNKNOWN_EXPERIENCE_TIP]);
    }

    #[test]
    fn test_missing_experience_counts_as_none() {
        let mut c = strong_candidate();
        c.total_experience = None;
        assert_eq!(generate_booster_tips(&c), vec![NO_EXPERIENCE_TIP]);
    }

    #[test]
    fn test_blank_experience_cannot_be_assessed() {
        let mut c = strong_candidate();
        c.total_experience = Some("  ".to_string());
        assert_eq!(generate_booster_tips(&c), vec![UNKNOWN_EXPERIENCE_TIP]);
    }

    #[test]
    fn test_all_tips_fire_in_order() {
        let c = CandidateMatch {
            cgpa: Some("5.9".to_string()),
            skills: None,
            sports: None,
            extracurriculars: Some("none".to_string()),
            total_experience: Some("0.0".to_string()),
            ..strong_candidate()
        };
        assert_eq!(
            generate_booster_tips(&c),
            vec![
                LOW_CGPA_TIP,
                SKILLS_TIP,
                SPORTS_TIP,
                EXTRACURRICULAR_TIP,
                NO_EXPERIENCE_TIP
            ]
        );
    }
}
