use super::Console;
use async_trait::async_trait;
use std::{error::Error, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone, Debug, Default)]
pub struct FakeConsole {
    stdout: Arc<Mutex<Vec<u8>>>,
    stderr: Arc<Mutex<Vec<u8>>>,
}

impl FakeConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.stdout.lock().await).into()
    }

    pub async fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.stderr.lock().await).into()
    }
}

#[async_trait]
impl Console for FakeConsole {
    async fn write_stdout(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error>> {
        self.stdout.lock().await.extend_from_slice(buffer);

        Ok(())
    }

    async fn write_stderr(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error>> {
        self.stderr.lock().await.extend_from_slice(buffer);

        Ok(())
    }
}
