use super::FileSystem;
use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    error::Error,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::sync::Mutex;

#[derive(Clone, Debug, Default)]
pub struct FakeFileSystem {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl FakeFileSystem {
    pub fn new<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            files: Arc::new(Mutex::new(
                files
                    .into_iter()
                    .map(|(path, contents)| (path.into(), contents.into()))
                    .collect(),
            )),
        }
    }

    pub async fn files(&self) -> BTreeMap<PathBuf, String> {
        self.files.lock().await.clone()
    }
}

#[async_trait]
impl FileSystem for FakeFileSystem {
    async fn read_file_to_string(
        &self,
        path: &Path,
        buffer: &mut String,
    ) -> Result<(), Box<dyn Error>> {
        buffer.push_str(
            self.files
                .lock()
                .await
                .get(path)
                .ok_or_else(|| format!("file not found: {}", path.display()))?,
        );

        Ok(())
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), Box<dyn Error>> {
        self.files
            .lock()
            .await
            .insert(path.into(), String::from_utf8(contents.to_vec())?);

        Ok(())
    }

    async fn create_directory(&self, _: &Path) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}
