use async_trait::async_trait;
use std::error::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stderr, Stdout, stderr, stdout};

#[async_trait]
pub trait Console {
    async fn write_stdout(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error>>;
    async fn write_stderr(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error>>;
}

#[derive(Debug)]
pub struct OsConsole {
    stdout: Stdout,
    stderr: Stderr,
}

impl OsConsole {
    pub fn new() -> Self {
        Self {
            stdout: stdout(),
            stderr: stderr(),
        }
    }
}

#[async_trait]
impl Console for OsConsole {
    async fn write_stdout(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error>> {
        write_flushed(&mut self.stdout, buffer).await
    }

    async fn write_stderr(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error>> {
        write_flushed(&mut self.stderr, buffer).await
    }
}

// The process may exit right after the last write.
async fn write_flushed(
    stream: &mut (impl AsyncWrite + Unpin + Send),
    buffer: &[u8],
) -> Result<(), Box<dyn Error>> {
    stream.write_all(buffer).await?;
    stream.flush().await?;

    Ok(())
}
