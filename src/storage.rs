use async_trait::async_trait;
use std::collections::BTreeMap;
use std::{env, io, path::PathBuf};
use tokio::{fs, sync::Mutex};
use tracing::error;

pub const LEDGER_KEY: &str = "pageStats";

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: String) -> Result<(), io::Error>;
}

pub fn resolve_data_dir() -> PathBuf {
    env::var("SITE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(text) => Some(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read stored value for {key}: {err}");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), io::Error> {
        fs::create_dir_all(&self.dir).await?;
        fs::write(self.key_path(key), value).await
    }
}

#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.lock().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) -> Result<(), io::Error> {
        self.values.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}
