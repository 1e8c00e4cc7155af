use serde::Deserialize;

use crate::mindset::PredictionError;

pub const FEATURE_COUNT: usize = 5;

/// Raw prediction form values.
#[derive(Debug, Clone, Deserialize)]
pub struct MindsetInput {
    pub graduation_cgpa: String,
    pub year_of_graduation: String,
    pub total_experience: String,
    pub technologies_skills: String,
    #[serde(default)]
    pub foreign_language_proficiency: Option<String>,
}

/// The model's input, in training column order:
/// `[cgpa, graduation_year, total_experience, skill_count, language_level]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MindsetFeatures {
    pub cgpa: f64,
    pub graduation_year: i32,
    pub total_experience: f64,
    pub skill_count: u32,
    pub language_level: u8,
}

impl MindsetFeatures {
    pub fn from_input(input: &MindsetInput) -> Result<Self, PredictionError> {
        Ok(Self {
            cgpa: parse_float("graduation_cgpa", &input.graduation_cgpa)?,
            graduation_year: parse_year(&input.year_of_graduation)?,
            total_experience: parse_float("total_experience", &input.total_experience)?,
            skill_count: skill_count(&input.technologies_skills),
            language_level: language_level(input.foreign_language_proficiency.as_deref()),
        })
    }

    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.cgpa,
            f64::from(self.graduation_year),
            self.total_experience,
            f64::from(self.skill_count),
            f64::from(self.language_level),
        ]
    }
}

/// Beginner → 0, Advanced → 1, Mastery → 2. Anything else is treated as Beginner.
pub fn language_level(proficiency: Option<&str>) -> u8 {
    match proficiency {
        Some("Advanced") => 1,
        Some("Mastery") => 2,
        _ => 0,
    }
}

/// Comma-separated pieces, counted as the model was trained: blank pieces
/// between commas still count, a blank string counts as zero.
fn skill_count(skills: &str) -> u32 {
    if skills.trim().is_empty() {
        0
    } else {
        skills.split(',').count() as u32
    }
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64, PredictionError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PredictionError::InvalidInput {
            field,
            expected: "a number",
            value: raw.to_string(),
        })
}

fn parse_year(raw: &str) -> Result<i32, PredictionError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| PredictionError::InvalidInput {
            field: "year_of_graduation",
            expected: "a whole year",
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(cgpa: &str, year: &str, experience: &str, skills: &str) -> MindsetInput {
        MindsetInput {
            graduation_cgpa: cgpa.to_string(),
            year_of_graduation: year.to_string(),
            total_experience: experience.to_string(),
            technologies_skills: skills.to_string(),
            foreign_language_proficiency: Some("Advanced".to_string()),
        }
    }

    #[test]
    fn test_feature_vector_layout() {
        let features = MindsetFeatures::from_input(&input("8.5", "2024", "1", "Python,SQL")).unwrap();
        assert_eq!(features.to_vector(), [8.5, 2024.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_language_levels() {
        assert_eq!(language_level(Some("Beginner")), 0);
        assert_eq!(language_level(Some("Advanced")), 1);
        assert_eq!(language_level(Some("Mastery")), 2);
        assert_eq!(language_level(Some("mastery")), 0);
        assert_eq!(language_level(Some("Fluent")), 0);
        assert_eq!(language_level(None), 0);
    }

    #[test]
    fn test_skill_count_blank_is_zero() {
        assert_eq!(skill_count(""), 0);
        assert_eq!(skill_count("   "), 0);
    }

    #[test]
    fn test_skill_count_keeps_empty_pieces() {
        assert_eq!(skill_count("Python"), 1);
        assert_eq!(skill_count("Python,,SQL"), 3);
    }

    #[test]
    fn test_values_are_trimmed() {
        let features = MindsetFeatures::from_input(&input(" 7.25 ", " 2023 ", " 0 ", "Go")).unwrap();
        assert_eq!(features.cgpa, 7.25);
        assert_eq!(features.graduation_year, 2023);
        assert_eq!(features.total_experience, 0.0);
    }

    #[test]
    fn test_non_numeric_cgpa_fails() {
        let err = MindsetFeatures::from_input(&input("abc", "2024", "1", "Python")).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::InvalidInput {
                field: "graduation_cgpa",
                ..
            }
        ));
    }

    #[test]
    fn test_fractional_year_fails() {
        let err = MindsetFeatures::from_input(&input("8", "2024.5", "1", "Python")).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::InvalidInput {
                field: "year_of_graduation",
                ..
            }
        ));
    }

    #[test]
    fn test_nan_experience_fails() {
        assert!(MindsetFeatures::from_input(&input("8", "2024", "NaN", "Python")).is_err());
    }

    #[test]
    fn test_blank_experience_fails() {
        assert!(MindsetFeatures::from_input(&input("8", "2024", "", "Python")).is_err());
    }
}
