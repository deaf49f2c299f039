use crate::domain::model::FormSubmission;
use crate::domain::ports::SubmissionSink;
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Logs accepted submissions. The local stand-in for the real send step,
/// which lives outside this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    async fn deliver(&self, submission: &FormSubmission) -> Result<()> {
        tracing::info!("Form submitted: {}", serde_json::to_string(submission)?);
        Ok(())
    }
}

/// Appends accepted submissions as JSON lines under a base directory.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    base_path: String,
}

impl JsonFileSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn submissions_file(&self) -> PathBuf {
        Path::new(&self.base_path).join("submissions.jsonl")
    }
}

impl SubmissionSink for JsonFileSink {
    async fn deliver(&self, submission: &FormSubmission) -> Result<()> {
        let path = self.submissions_file();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(submission)?;
        line.push('\n');

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(line.as_bytes())?;

        tracing::debug!("Submission appended to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn submission() -> FormSubmission {
        FormSubmission {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            subject: "Hi there".to_string(),
            message: "This is long enough".to_string(),
        }
    }

    #[tokio::test]
    async fn test_json_file_sink_appends_lines() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().to_str().unwrap().to_string();
        let sink = JsonFileSink::new(base);

        sink.deliver(&submission()).await.unwrap();
        sink.deliver(&submission()).await.unwrap();

        let content = std::fs::read_to_string(sink.submissions_file()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: FormSubmission = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, submission());
    }

    #[tokio::test]
    async fn test_json_file_sink_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let sink = JsonFileSink::new(nested.to_str().unwrap().to_string());

        sink.deliver(&submission()).await.unwrap();

        assert!(sink.submissions_file().exists());
    }
}
