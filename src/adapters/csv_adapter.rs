//! CSV file data adapter: one `<name>.csv` per instrument under a base path.

use crate::domain::error::FoliobenchError;
use crate::ports::data_port::DataPort;
use std::fs;
use std::path::PathBuf;

pub struct CsvDataAdapter {
    base_path: PathBuf,
}

impl CsvDataAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{name}.csv"))
    }
}

impl DataPort for CsvDataAdapter {
    fn fetch_price_table(&self, name: &str) -> Result<String, FoliobenchError> {
        let path = self.csv_path(name);
        fs::read_to_string(&path).map_err(|e| FoliobenchError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })
    }

    fn list_instruments(&self) -> Result<Vec<String>, FoliobenchError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| FoliobenchError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FoliobenchError::Data {
                reason: format!("directory entry error: {e}"),
            })?;
            let file_name = entry.file_name();
            let name_str = file_name.to_string_lossy();
            if let Some(stem) = name_str.strip_suffix(".csv") {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}
