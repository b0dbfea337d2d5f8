pub mod entry;
pub mod timestamp;

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_with::{VecSkipError, serde_as};

pub use self::entry::Entry;
use crate::prelude::*;

/// Rolling PV history, oldest entry first.
///
/// Records which fail to decode are skipped on load, so a single malformed
/// timestamp never costs the rest of the file.
#[must_use]
#[serde_as]
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::From,
    derive_more::IntoIterator,
)]
#[serde(transparent)]
pub struct History(#[serde_as(deserialize_as = "VecSkipError<_>")] Vec<Entry>);

impl History {
    /// Read the history, falling back to an empty one when the file is missing or unreadable.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Self {
        Self::load_fallibly(path).unwrap_or_else(|error| {
            warn!("failed to load the history, starting afresh: {error:#}");
            Self::default()
        })
    }

    fn load_fallibly(path: &Path) -> Result<Self> {
        if !path.is_file() {
            info!("no history yet");
            return Ok(Self::default());
        }
        let contents = fs::read(path).context("failed to read the history file")?;
        let this: Self =
            serde_json::from_slice(&contents).context("failed to parse the history file")?;
        debug!(n_entries = this.len(), "loaded");
        Ok(this)
    }

    /// Write the history, logging instead of failing.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn save(&self, path: &Path) {
        if let Err(error) = self.save_fallibly(path) {
            error!("failed to save the history: {error:#}");
        }
    }

    /// Write into a sibling temporary file and rename it over the target,
    /// so that an interrupted run leaves the previous history intact.
    fn save_fallibly(&self, path: &Path) -> Result {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create `{}`", parent.display()))?;
        }
        let temporary_path = path.with_extension("json.tmp");
        fs::write(&temporary_path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("failed to write `{}`", temporary_path.display()))?;
        fs::rename(&temporary_path, path)
            .with_context(|| format!("failed to move `{}` into place", temporary_path.display()))?;
        info!(n_entries = self.len(), "saved");
        Ok(())
    }

    pub fn push(&mut self, entry: Entry) {
        self.0.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::quantity::{
        energy::{KilowattHours, MegawattHours},
        power::Watts,
    };

    fn history_path(directory: &TempDir) -> PathBuf {
        directory.path().join("public").join("history_daily.json")
    }

    #[test]
    fn test_load_missing_file() -> Result {
        let directory = TempDir::new()?;
        assert!(History::load(&history_path(&directory)).is_empty());
        Ok(())
    }

    #[test]
    fn test_load_corrupt_file() -> Result {
        let directory = TempDir::new()?;
        let path = directory.path().join("history_daily.json");
        fs::write(&path, "[{\"timestamp\": \"2024-06-01 23:58\", ")?;
        assert!(History::load(&path).is_empty());
        Ok(())
    }

    #[test]
    fn test_load_skips_malformed_records() -> Result {
        let directory = TempDir::new()?;
        let path = directory.path().join("history_daily.json");
        // language=json
        let contents = r#"[
            {"timestamp": "2024-06-01 23:50", "power": 3, "energy_daily": 12.2, "energy_total": 4.5},
            {"timestamp": "not a timestamp", "power": 0, "energy_daily": 0, "energy_total": 0},
            {"power": 1},
            {"timestamp": "2024-06-01 23:58", "power": 0, "energy_daily": 12.3, "energy_total": 4.5}
        ]"#;
        fs::write(&path, contents)?;

        let history = History::load(&path);

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].timestamp, timestamp::parse("2024-06-01 23:50")?);
        assert_eq!(history[1].energy_daily, KilowattHours(12.3));
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result {
        let directory = TempDir::new()?;
        let path = history_path(&directory);
        let history = History::from(vec![
            Entry::zero(timestamp::parse("2024-06-01 23:58")?),
            Entry::builder()
                .timestamp(timestamp::parse("2024-06-02 00:02")?)
                .power(Watts(5.0))
                .energy_daily(KilowattHours(0.0))
                .energy_total(MegawattHours(4.5))
                .build(),
        ]);

        history.save(&path);

        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(History::load(&path), history);
        Ok(())
    }

    #[test]
    fn test_save_format() -> Result {
        let directory = TempDir::new()?;
        let path = directory.path().join("history_daily.json");
        History::from(vec![Entry::zero(timestamp::parse("2024-06-02 00:02")?)]).save(&path);

        let saved: serde_json::Value = serde_json::from_slice(&fs::read(&path)?)?;
        assert_eq!(
            saved,
            serde_json::json!([{
                "timestamp": "2024-06-02 00:02",
                "power": 0,
                "energy_daily": 0.0,
                "energy_total": 0.0,
            }]),
        );
        Ok(())
    }

    #[test]
    fn test_save_failure_is_not_fatal() -> Result {
        let directory = TempDir::new()?;
        // The target is an existing directory, so the rename has to fail.
        let path = directory.path().join("history_daily.json");
        fs::create_dir(&path)?;
        History::from(vec![Entry::zero(timestamp::parse("2024-06-02 00:02")?)]).save(&path);
        assert!(path.is_dir());
        Ok(())
    }
}
