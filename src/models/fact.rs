// src/models/fact.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// A single piece of quiz knowledge: an entity and the category it belongs to
/// (e.g. a country and its continent).
///
/// Both fields are trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFact")]
pub struct Fact {
    entity: String,
    category: String,
}

impl Fact {
    pub fn new(entity: impl AsRef<str>, category: impl AsRef<str>) -> Result<Self, QuizError> {
        let entity = entity.as_ref().trim();
        let category = category.as_ref().trim();

        if entity.is_empty() {
            return Err(QuizError::InvalidFact(format!(
                "entity is empty (category '{}')",
                category
            )));
        }
        if category.is_empty() {
            return Err(QuizError::InvalidFact(format!(
                "category is empty for '{}'",
                entity
            )));
        }

        Ok(Self {
            entity: entity.to_string(),
            category: category.to_string(),
        })
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Untrusted wire shape; converted through `Fact::new`.
#[derive(Deserialize)]
struct RawFact {
    entity: String,
    category: String,
}

impl TryFrom<RawFact> for Fact {
    type Error = QuizError;

    fn try_from(raw: RawFact) -> Result<Self, Self::Error> {
        Fact::new(raw.entity, raw.category)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.entity, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_is_trimmed() {
        let fact = Fact::new("  France ", "\tEurope\n").unwrap();
        assert_eq!(fact.entity(), "France");
        assert_eq!(fact.category(), "Europe");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(matches!(
            Fact::new("   ", "Europe"),
            Err(QuizError::InvalidFact(_))
        ));
        assert!(matches!(
            Fact::new("France", ""),
            Err(QuizError::InvalidFact(_))
        ));
    }

    #[test]
    fn test_deserialize_validates_fields() {
        let fact: Fact = serde_json::from_str(r#"{"entity":" Peru ","category":"South America"}"#)
            .unwrap();
        assert_eq!(fact.entity(), "Peru");

        let blank = serde_json::from_str::<Fact>(r#"{"entity":"   ","category":""}"#);
        assert!(blank.is_err(), "blank fields must be rejected: {blank:?}");
    }
}
