// src/store/csv_source.rs

use std::io::Read;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::{error::QuizError, models::fact::Fact, store::FactProvider};

/// Parses a headerless two-column CSV of `entity,category` records.
///
/// Fields are trimmed; blank lines are skipped and extra columns ignored.
/// A record with fewer than two fields or a blank field fails the whole read.
pub fn read_facts<R: Read>(reader: R) -> Result<Vec<Fact>, QuizError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut facts = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = i + 1;

        let (Some(entity), Some(category)) = (record.get(0), record.get(1)) else {
            return Err(QuizError::LoadError(format!(
                "row {} has {} field(s), expected 2",
                row,
                record.len()
            )));
        };

        let fact = Fact::new(entity, category)
            .map_err(|e| QuizError::LoadError(format!("row {}: {}", row, e)))?;
        facts.push(fact);
    }

    Ok(facts)
}

/// Fact provider reading straight from a CSV file on every load.
#[derive(Debug, Clone)]
pub struct CsvFactProvider {
    path: PathBuf,
}

impl CsvFactProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FactProvider for CsvFactProvider {
    async fn load_facts(&self) -> Result<Vec<Fact>, QuizError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            tracing::error!("Failed to read {}: {:?}", self.path.display(), e);
            QuizError::LoadError(format!("{}: {}", self.path.display(), e))
        })?;

        let facts = read_facts(bytes.as_slice())?;
        tracing::debug!("Read {} facts from {}", facts.len(), self.path.display());
        Ok(facts)
    }
}
