use serde::{Deserialize, Serialize};

/// One row of the candidates sheet.
///
/// Field renames are the persisted column headers and must not change: the
/// file is shared with the recruitment team's spreadsheet tooling (including
/// the `Technonlogies` spelling). Empty cells read back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "S.No")]
    pub serial_no: u64,
    #[serde(rename = "College Full Name")]
    pub college_full_name: Option<String>,
    #[serde(rename = "College City")]
    pub college_city: Option<String>,
    #[serde(rename = "Roll No / PRN")]
    pub roll_no: Option<String>,
    #[serde(rename = "Prefix")]
    pub prefix: Option<String>,
    #[serde(rename = "Candidate Name")]
    pub candidate_name: Option<String>,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Candidate Mobile Number")]
    pub candidate_mobile_number: Option<String>,
    #[serde(rename = "Alternate Mobile Number")]
    pub alternate_mobile_number: Option<String>,
    #[serde(rename = "Primary Email ID (College)")]
    pub primary_email: Option<String>,
    #[serde(rename = "Alternate Email ID")]
    pub alternate_email: Option<String>,
    #[serde(rename = "10th Board%")]
    pub tenth_board_percentage: Option<String>,
    #[serde(rename = "12th Board%")]
    pub twelfth_board_percentage: Option<String>,
    #[serde(rename = "Graduation Degree")]
    pub graduation_degree: Option<String>,
    #[serde(rename = "Grad-Specialization")]
    pub grad_specialization: Option<String>,
    #[serde(rename = "Graduation CGPA")]
    pub graduation_cgpa: Option<String>,
    #[serde(rename = "Year of Graduation")]
    pub year_of_graduation: Option<String>,
    #[serde(rename = "Post Graduation Degree")]
    pub post_graduation_degree: Option<String>,
    #[serde(rename = "Post Grad- Specialization")]
    pub post_grad_specialization: Option<String>,
    #[serde(rename = "Post Graduation CGPA")]
    pub post_graduation_cgpa: Option<String>,
    #[serde(rename = "Year of Post Grad")]
    pub year_of_post_grad: Option<String>,
    #[serde(rename = "Foreign Language (Except English)")]
    pub foreign_language: Option<String>,
    #[serde(rename = "Proficiency in foreign language (Beginner / Advanced / Mastery)")]
    pub foreign_language_proficiency: Option<String>,
    #[serde(rename = "Permanent Home Address (Not Campus or Hostel Address)")]
    pub permanent_address: Option<String>,
    #[serde(rename = "Permanent City")]
    pub permanent_city: Option<String>,
    #[serde(rename = "Permanent State")]
    pub permanent_state: Option<String>,
    #[serde(rename = "Permanent Pin Code")]
    pub permanent_pin_code: Option<String>,
    #[serde(rename = "Technonlogies/Skills known")]
    pub skills: Option<String>,
    #[serde(rename = "Tech_points")]
    pub tech_points: Option<u32>,
    #[serde(rename = "Organization worked with (If Any) Eg: Accenture/KPMG")]
    pub organization_worked_with: Option<String>,
    #[serde(rename = "Prior Experienced (Brief Summary of the work)")]
    pub prior_experience: Option<String>,
    #[serde(rename = "Total Experienced (In Years)")]
    pub total_experience: Option<String>,
    #[serde(rename = "Legal pursuit")]
    pub legal_pursuit: Option<String>,
    #[serde(rename = "Sports")]
    pub sports: Option<String>,
    #[serde(rename = "Sports_Points")]
    pub sports_points: Option<u32>,
    #[serde(rename = "ExtraCurriculum")]
    pub extracurriculars: Option<String>,
    #[serde(rename = "ExxCur_Points")]
    pub extracurricular_points: Option<u32>,
}
