//! Typed edit commands: addresses a single field of `ResumeData` and replaces its text.
//!
//! Commands are resolved by matching on the section tag; indices refer to the
//! position of the item in its source list, never to its position on a page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::resume::ResumeData;

// ────────────────────────────────────────────────────────────────────────────
// Command types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum EditCommand {
    Name {
        value: String,
    },
    Title {
        value: String,
    },
    /// An empty value removes the summary.
    Summary {
        value: String,
    },
    Experience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    Education {
        index: usize,
        field: EducationField,
        value: String,
    },
    Skill {
        index: usize,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Role,
    Company,
    Period,
    Location,
    /// Bullet line; one past the last line appends.
    Description(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Institution,
    Degree,
    Period,
}

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("{section} index {index} is out of range (have {len})")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },

    #[error("description line {line} of experience {index} is out of range (have {len})")]
    LineOutOfRange { index: usize, line: usize, len: usize },
}

// ────────────────────────────────────────────────────────────────────────────
// Application
// ────────────────────────────────────────────────────────────────────────────

impl EditCommand {
    /// Applies the edit in place. On error `resume` is left unchanged.
    pub fn apply(self, resume: &mut ResumeData) -> Result<(), EditError> {
        match self {
            EditCommand::Name { value } => resume.name = value,
            EditCommand::Title { value } => resume.title = value,
            EditCommand::Summary { value } => {
                resume.summary = if value.trim().is_empty() {
                    None
                } else {
                    Some(value)
                };
            }
            EditCommand::Experience {
                index,
                field,
                value,
            } => {
                let len = resume.experience.len();
                let entry = resume
                    .experience
                    .get_mut(index)
                    .ok_or(EditError::IndexOutOfRange {
                        section: "experience",
                        index,
                        len,
                    })?;

                match field {
                    ExperienceField::Role => entry.role = value,
                    ExperienceField::Company => entry.company = value,
                    ExperienceField::Period => entry.period = value,
                    ExperienceField::Location => entry.location = value,
                    ExperienceField::Description(line) => {
                        let lines = entry.description.len();
                        if line < lines {
                            entry.description[line] = value;
                        } else if line == lines {
                            entry.description.push(value);
                        } else {
                            return Err(EditError::LineOutOfRange {
                                index,
                                line,
                                len: lines,
                            });
                        }
                    }
                }
            }
            EditCommand::Education {
                index,
                field,
                value,
            } => {
                let len = resume.education.len();
                let entry = resume
                    .education
                    .get_mut(index)
                    .ok_or(EditError::IndexOutOfRange {
                        section: "education",
                        index,
                        len,
                    })?;

                match field {
                    EducationField::Institution => entry.institution = value,
                    EducationField::Degree => entry.degree = value,
                    EducationField::Period => entry.period = value,
                }
            }
            EditCommand::Skill { index, value } => {
                let len = resume.skills.len();
                let skill = resume
                    .skills
                    .get_mut(index)
                    .ok_or(EditError::IndexOutOfRange {
                        section: "skills",
                        index,
                        len,
                    })?;
                *skill = value;
            }
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, WorkEntry};

    fn make_resume() -> ResumeData {
        ResumeData {
            name: "Ada".to_string(),
            summary: Some("Engineer.".to_string()),
            skills: vec!["Rust".to_string()],
            education: vec![EducationEntry {
                institution: "ETH".to_string(),
                degree: "MSc".to_string(),
                period: "2014 - 2016".to_string(),
            }],
            experience: vec![WorkEntry {
                role: "Engineer".to_string(),
                company: "Acme".to_string(),
                period: "2016 - 2020".to_string(),
                location: "Zurich".to_string(),
                description: vec!["Built things".to_string()],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_experience_description() {
        let json = r#"{"section": "experience", "index": 0, "field": {"description": 1}, "value": "x"}"#;
        let command: EditCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            command,
            EditCommand::Experience {
                index: 0,
                field: ExperienceField::Description(1),
                value: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_deserialize_unit_field() {
        let json = r#"{"section": "education", "index": 0, "field": "degree", "value": "PhD"}"#;
        let command: EditCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(
            command,
            EditCommand::Education {
                field: EducationField::Degree,
                ..
            }
        ));
    }

    #[test]
    fn test_replace_description_line() {
        let mut resume = make_resume();
        EditCommand::Experience {
            index: 0,
            field: ExperienceField::Description(0),
            value: "Shipped the pager".to_string(),
        }
        .apply(&mut resume)
        .unwrap();
        assert_eq!(resume.experience[0].description, vec!["Shipped the pager"]);
    }

    #[test]
    fn test_append_description_line() {
        let mut resume = make_resume();
        EditCommand::Experience {
            index: 0,
            field: ExperienceField::Description(1),
            value: "Second".to_string(),
        }
        .apply(&mut resume)
        .unwrap();
        assert_eq!(resume.experience[0].description.len(), 2);
    }

    #[test]
    fn test_description_gap_rejected() {
        let mut resume = make_resume();
        let before = resume.clone();
        let err = EditCommand::Experience {
            index: 0,
            field: ExperienceField::Description(5),
            value: "x".to_string(),
        }
        .apply(&mut resume)
        .unwrap_err();
        assert_eq!(
            err,
            EditError::LineOutOfRange {
                index: 0,
                line: 5,
                len: 1
            }
        );
        assert_eq!(resume, before);
    }

    #[test]
    fn test_experience_index_out_of_range() {
        let mut resume = make_resume();
        let err = EditCommand::Experience {
            index: 3,
            field: ExperienceField::Role,
            value: "CTO".to_string(),
        }
        .apply(&mut resume)
        .unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfRange {
                section: "experience",
                index: 3,
                len: 1
            }
        );
    }

    #[test]
    fn test_blank_summary_clears_it() {
        let mut resume = make_resume();
        EditCommand::Summary {
            value: "  ".to_string(),
        }
        .apply(&mut resume)
        .unwrap();
        assert!(resume.summary.is_none());
    }

    #[test]
    fn test_edit_skill_and_education() {
        let mut resume = make_resume();
        EditCommand::Skill {
            index: 0,
            value: "Go".to_string(),
        }
        .apply(&mut resume)
        .unwrap();
        EditCommand::Education {
            index: 0,
            field: EducationField::Institution,
            value: "EPFL".to_string(),
        }
        .apply(&mut resume)
        .unwrap();
        assert_eq!(resume.skills, vec!["Go"]);
        assert_eq!(resume.education[0].institution, "EPFL");
    }

    #[test]
    fn test_skill_out_of_range_message() {
        let mut resume = make_resume();
        let err = EditCommand::Skill {
            index: 9,
            value: "Go".to_string(),
        }
        .apply(&mut resume)
        .unwrap_err();
        assert_eq!(err.to_string(), "skills index 9 is out of range (have 1)");
    }
}
