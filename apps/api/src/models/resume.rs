use serde::{Deserialize, Serialize};

/// Structured résumé content as produced by the generation collaborator.
///
/// Every list keeps its original order; layout never reorders entries, and
/// page plans refer back into `experience` by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<WorkEntry>,
    #[serde(default)]
    pub has_photo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

/// A single work-history record. Atomic for pagination purposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub location: String,
    /// Bullet lines, rendered in order.
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub period: String,
}

impl ResumeData {
    /// Summary text, or `None` when absent or blank.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Skills with blank items skipped.
    pub fn skill_count(&self) -> usize {
        self.skills.iter().filter(|s| !s.trim().is_empty()).count()
    }
}

impl WorkEntry {
    /// Non-blank description lines, trimmed.
    pub fn description_lines(&self) -> impl Iterator<Item = &str> {
        self.description
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
    }
}
