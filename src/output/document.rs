use crate::deck::Commander;
use crate::HarvestError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// The dataset written at the end of a run
///
/// Commanders are sorted by deck count, most popular first, when the
/// document is built; the document cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    updated_at: NaiveDate,
    commanders: Vec<Commander>,
}

impl OutputDocument {
    /// Sorts the commanders and stamps the document with `updated_at`
    ///
    /// The sort is stable, so commanders with equal deck counts keep the
    /// order they were fetched in.
    pub fn new(mut commanders: Vec<Commander>, updated_at: NaiveDate) -> Self {
        commanders.sort_by(|a, b| b.num_decks.cmp(&a.num_decks));
        Self {
            updated_at,
            commanders,
        }
    }

    pub fn updated_at(&self) -> NaiveDate {
        self.updated_at
    }

    pub fn commanders(&self) -> &[Commander] {
        &self.commanders
    }

    pub fn is_empty(&self) -> bool {
        self.commanders.is_empty()
    }

    /// Writes the document as pretty-printed JSON, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<(), HarvestError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
