//! Student model
//!
//! Identity and display data for the report header card.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Biological sex as used by the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse from free text; unknown values map to `Other`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "masculino" | "man" => Gender::Male,
            "female" | "f" | "feminino" | "woman" => Gender::Female,
            _ => Gender::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

fn de_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .map(|s| Gender::parse(&s)))
}

/// Student record supplied by the calling application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "de_gender")]
    pub gender: Option<Gender>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn is_male(&self) -> bool {
        self.gender == Some(Gender::Male)
    }

    /// Birth date parsed from `YYYY-MM-DD` (optionally with a time part) or `DD/MM/YYYY`
    pub fn birth_date_parsed(&self) -> Option<NaiveDate> {
        let raw = self.birth_date.as_deref()?.trim();
        let date_part = raw.split('T').next().unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(date_part, "%d/%m/%Y"))
            .ok()
    }

    /// Age in whole years on the given date
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let born = self.birth_date_parsed()?;
        let mut years = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }

    /// Birth date formatted for display, falling back to the raw text
    pub fn birth_date_display(&self) -> Option<String> {
        match self.birth_date_parsed() {
            Some(date) => Some(date.format("%d/%m/%Y").to_string()),
            None => self
                .birth_date
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("male"), Gender::Male);
        assert_eq!(Gender::parse(" Masculino "), Gender::Male);
        assert_eq!(Gender::parse("F"), Gender::Female);
        assert_eq!(Gender::parse("non-binary"), Gender::Other);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let student: StudentRecord = serde_json::from_str(
            r#"{"name": "João Silva", "gender": "male", "birthDate": "1990-05-20"}"#,
        )
        .unwrap();
        assert_eq!(student.name, "João Silva");
        assert!(student.is_male());
        assert_eq!(
            student.birth_date_parsed(),
            NaiveDate::from_ymd_opt(1990, 5, 20)
        );
    }

    #[test]
    fn test_age_on() {
        let mut student = StudentRecord::new("Ana");
        student.birth_date = Some("20/05/1990".to_string());

        let before_birthday = NaiveDate::from_ymd_opt(2024, 5, 19).unwrap();
        let on_birthday = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        assert_eq!(student.age_on(before_birthday), Some(33));
        assert_eq!(student.age_on(on_birthday), Some(34));
    }

    #[test]
    fn test_unparseable_birth_date_display() {
        let mut student = StudentRecord::new("Ana");
        student.birth_date = Some("sometime in May".to_string());
        assert_eq!(student.birth_date_parsed(), None);
        assert_eq!(student.birth_date_display().as_deref(), Some("sometime in May"));
    }
}
