use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::Mutex,
};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A single persisted record.
///
/// `load` returns `Ok(None)` when nothing was saved yet; `save` replaces the
/// whole record.
#[async_trait]
pub trait Store<T>: Send + Sync
where
    T: Send + Sync,
{
    async fn load(&self) -> Result<Option<T>, StoreError>;
    async fn save(&self, record: &T) -> Result<(), StoreError>;
}

/// Stores a record as a pretty-printed JSON file, rewritten whole on every save.
pub struct JsonFileStore<T> {
    path: PathBuf,
    marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl<T> Store<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> Result<Option<T>, StoreError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Serde {
                path: self.path.clone(),
                source,
            })
    }

    async fn save(&self, record: &T) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_error(e))?;
            }
        }

        let json = serde_json::to_string_pretty(record).map_err(|source| StoreError::Serde {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Writing {}", self.path.display());
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| self.io_error(e))
    }
}

/// Keeps the record in memory. Used where no file should be touched, e.g. tests.
pub struct MemoryStore<T> {
    record: Mutex<Option<T>>,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new(record: Option<T>) -> Self {
        Self {
            record: Mutex::new(record),
        }
    }

    pub fn empty() -> Self {
        Self::new(None)
    }

    pub fn snapshot(&self) -> Option<T> {
        self.record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl<T> Store<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> Result<Option<T>, StoreError> {
        Ok(self.snapshot())
    }

    async fn save(&self, record: &T) -> Result<(), StoreError> {
        *self
            .record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(record.clone());
        Ok(())
    }
}
