//! JSON file answer store.
//!
//! The answer slot is one file, `<data_dir>/diagnosisAnswers.json`, holding the
//! serialized [`AnswerSet`]. Writes go to a sibling temp file that is renamed
//! over the slot, so a reader never sees a half-written session.

use madori_application::ports::answer_store::{ANSWER_STORE_KEY, AnswerStore, StoreError};
use madori_domain::AnswerSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// [`AnswerStore`] backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileAnswerStore {
    path: PathBuf,
}

impl JsonFileAnswerStore {
    /// Store the slot under `data_dir`. The directory is created on first save.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir
                .as_ref()
                .join(format!("{}.json", ANSWER_STORE_KEY)),
        }
    }

    /// Path of the slot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl AnswerStore for JsonFileAnswerStore {
    fn save(&self, answers: &AnswerSet) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::Io(format!(
                    "could not create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(answers)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .map_err(|e| StoreError::Io(format!("could not write {}: {}", temp.display(), e)))?;
        fs::rename(&temp, &self.path).map_err(|e| {
            StoreError::Io(format!("could not replace {}: {}", self.path.display(), e))
        })?;

        debug!("Saved {} answers to {}", answers.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<AnswerSet>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io(format!(
                    "could not read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        match serde_json::from_str::<AnswerSet>(&content) {
            Ok(answers) => Ok(Some(answers)),
            Err(e) => {
                warn!(
                    "Ignoring unreadable answers in {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }
}
