//! Environment/runtime helpers
//!
//! Sanity checks run before a service starts accepting traffic.

use std::path::Path;

use tracing::info;

/// Fail early when a data file the service cannot run without is missing.
pub async fn require_file(path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let meta = tokio::fs::metadata(path)
        .await
        .map_err(|e| anyhow::anyhow!("required file {} is not readable: {e}", path.display()))?;
    if !meta.is_file() {
        return Err(anyhow::anyhow!("required path {} is not a regular file", path.display()));
    }
    info!(path = %path.display(), bytes = meta.len(), "required file present");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn require_file_rejects_missing_and_directories() {
        let missing = std::env::temp_dir().join(format!("missing_{}.json", uuid::Uuid::new_v4()));
        assert!(require_file(&missing).await.is_err());
        assert!(require_file(std::env::temp_dir()).await.is_err());
    }

    #[tokio::test]
    async fn require_file_accepts_regular_file() -> anyhow::Result<()> {
        let tmp = std::env::temp_dir().join(format!("present_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, b"[]").await?;
        require_file(&tmp).await?;
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
