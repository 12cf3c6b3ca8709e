//! JSON file storage implementation.
//!
//! Stores each project as a JSON document under a `.taskflow` root and keeps
//! small per-project meta markers (version + updated_at). Repository-level
//! versioning, if wanted, is left to an external VCS.

use std::path::Path;
use std::sync::Arc;

use taskflow_core::{Project, ProjectId};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use super::{Result, Storage};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: std::path::PathBuf,
    pending: Arc<Mutex<bool>>,
}

impl JsonStorage {
    /// Create storage. This creates the `projects/` and `meta/` directories
    /// under the given root as needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("projects")).await?;
        fs::create_dir_all(root.join("meta").join("projects")).await?;

        Ok(Self {
            root,
            pending: Arc::new(Mutex::new(false)),
        })
    }

    fn project_path(&self, id: ProjectId) -> std::path::PathBuf {
        self.root.join("projects").join(format!("{}.json", id))
    }

    fn meta_path(&self, id: &str) -> std::path::PathBuf {
        self.root
            .join("meta")
            .join("projects")
            .join(format!("{}.meta.json", id))
    }

    async fn set_pending(&self) {
        *self.pending.lock().await = true;
    }

    /// Read and increment the per-project version, return the new version.
    async fn bump_version(&self, id: &str) -> Result<u64> {
        let path = self.meta_path(id);
        let mut version = 0u64;
        if let Ok(s) = fs::read_to_string(&path).await {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(&s) {
                if let Some(v) = json.get("version").and_then(|v| v.as_u64()) {
                    version = v;
                }
            }
        }
        version += 1;
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        fs::write(&path, serde_json::to_string_pretty(&meta)?.as_bytes()).await?;
        Ok(version)
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn save_project(&mut self, project: &Project) -> Result<()> {
        let path = self.project_path(project.id);
        let json = serde_json::to_string_pretty(project)?;
        fs::write(&path, json.as_bytes()).await?;

        let id_str = format!("{}", project.id);
        let version = self.bump_version(&id_str).await?;
        debug!(project = %project.id, version, "saved project");

        self.set_pending().await;
        Ok(())
    }

    async fn load_project(&self, id: ProjectId) -> Result<Option<Project>> {
        read_json(&self.project_path(id)).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = list_dir(&self.root.join("projects")).await?;
        projects.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(projects)
    }

    async fn delete_project(&mut self, id: ProjectId) -> Result<()> {
        fs::remove_file(self.project_path(id)).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Ok(())
            } else {
                Err(e)
            }
        })?;
        self.set_pending().await;
        Ok(())
    }

    async fn commit(&mut self, _message: &str) -> Result<()> {
        // No VCS integration; commit clears the pending flag.
        *self.pending.lock().await = false;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<()> {
        *self.pending.lock().await = false;
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn list_dir<T: serde::de::DeserializeOwned>(dir: &std::path::Path) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        if let Ok(Some(item)) = read_json(&entry.path()).await {
            items.push(item);
        }
    }
    Ok(items)
}
