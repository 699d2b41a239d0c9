use anyhow::Result;

pub trait ClipboardSink: Send + Sync {
    fn write(&self, content: &str) -> Result<()>;
}
