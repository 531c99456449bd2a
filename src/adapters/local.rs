use crate::domain::ports::SnapshotStorage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Snapshot files on the local filesystem under one base directory.
#[derive(Debug, Clone)]
pub struct LocalSnapshots {
    base_path: String,
}

impl LocalSnapshots {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl SnapshotStorage for LocalSnapshots {
    async fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(name);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    async fn quarantine(&self, name: &str) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(name);
        let aside = full_path.with_extension("json.corrupt");
        fs::rename(full_path, aside)?;
        Ok(())
    }
}
