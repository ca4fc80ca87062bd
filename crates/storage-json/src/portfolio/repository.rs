use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::fs;

use equitytrack_core::errors::Result;
use equitytrack_core::holdings::{
    HistoricalPoint, HoldingRecord, HoldingSet, PortfolioStoreTrait,
};

use crate::errors::StorageError;

pub const PORTFOLIO_FILE: &str = "portfolio.json";
pub const HISTORY_FILE: &str = "historical.json";

/// Portfolio store backed by two JSON files.
///
/// A missing or empty file reads as an empty array. Writes go to a sibling
/// temporary file which is then renamed over the target, so a crash mid-write
/// never leaves a truncated `portfolio.json` behind.
#[derive(Debug, Clone)]
pub struct JsonPortfolioStore {
    portfolio_path: PathBuf,
    history_path: PathBuf,
}

impl JsonPortfolioStore {
    /// Store using `portfolio.json` and `historical.json` inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self::with_paths(data_dir.join(PORTFOLIO_FILE), data_dir.join(HISTORY_FILE))
    }

    pub fn with_paths(portfolio_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self {
            portfolio_path: portfolio_path.into(),
            history_path: history_path.into(),
        }
    }

    pub fn portfolio_path(&self) -> &Path {
        &self.portfolio_path
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }
}

#[async_trait]
impl PortfolioStoreTrait for JsonPortfolioStore {
    async fn load_holdings(&self) -> Result<Vec<HoldingRecord>> {
        let Some(items) = read_array(&self.portfolio_path).await? else {
            return Ok(Vec::new());
        };

        // Every element yields a record, even one that is not an object, so
        // positions in the file line up with the indexes the core reports.
        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<HoldingRecord>(item).unwrap_or_else(|e| {
                    warn!("Holding record {} is not an object: {}", index, e);
                    HoldingRecord::default()
                })
            })
            .collect::<Vec<_>>();

        debug!(
            "Read {} holding records from {}",
            records.len(),
            self.portfolio_path.display()
        );
        Ok(records)
    }

    async fn load_history(&self) -> Result<Vec<HistoricalPoint>> {
        let Some(items) = read_array(&self.history_path).await? else {
            return Ok(Vec::new());
        };

        let points = decode_lenient::<HistoricalPoint>(items, &self.history_path);
        debug!(
            "Read {} history points from {}",
            points.len(),
            self.history_path.display()
        );
        Ok(points)
    }

    async fn save_holdings(&self, holdings: &HoldingSet) -> Result<()> {
        let json = serde_json::to_string_pretty(holdings).map_err(StorageError::from)?;
        write_atomic(&self.portfolio_path, json.as_bytes()).await?;
        debug!(
            "Saved {} holdings to {}",
            holdings.len(),
            self.portfolio_path.display()
        );
        Ok(())
    }
}

/// Reads `path` as a JSON array. `None` when the file is missing or blank.
async fn read_array(path: &Path) -> std::result::Result<Option<Vec<Value>>, StorageError> {
    let raw = match fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist, starting empty", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(StorageError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice::<Vec<Value>>(&raw)
        .map(Some)
        .map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

/// Decodes each element, skipping the ones that do not fit `T`.
fn decode_lenient<T: DeserializeOwned>(items: Vec<Value>, path: &Path) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Skipping entry {} of {}: {}", index, path.display(), e);
                None
            }
        })
        .collect()
}

async fn write_atomic(path: &Path, contents: &[u8]) -> std::result::Result<(), StorageError> {
    let write_failed = |source| StorageError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(write_failed)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).await.map_err(write_failed)?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(write_failed(e));
    }
    Ok(())
}
