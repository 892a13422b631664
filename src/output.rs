use crate::error::{Result, TradeoffError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Writes generated reports to disk.
///
/// File names carry an epoch-millis timestamp so repeated exports of the
/// same topic never collide. Writes go through a temp file and rename so a
/// failed write never leaves a partial report behind, and the temp file
/// never outlives the write.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn current_dir() -> Result<Self> {
        let current = std::env::current_dir().map_err(|e| {
            TradeoffError::report_failed(format!("Failed to get current directory: {}", e))
        })?;
        Ok(Self::new(current))
    }

    /// Path for a topic's report: `tradeoff-analysis-<key>-<millis>.txt`
    pub fn report_path(&self, topic_key: &str) -> Result<PathBuf> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TradeoffError::report_failed(format!("Failed to get system time: {}", e)))?
            .as_millis();

        Ok(self
            .output_dir
            .join(format!("tradeoff-analysis-{}-{}.txt", topic_key, millis)))
    }

    /// Write a report for a topic and return the path it landed at
    pub fn write_report(&self, topic_key: &str, content: &str) -> Result<PathBuf> {
        let path = self.report_path(topic_key)?;
        self.write_atomic(&path, content)?;
        Ok(path)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    TradeoffError::report_failed(format!(
                        "Failed to create output directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let temp_path = path.with_extension("txt.tmp");

        fs::write(&temp_path, content).map_err(|e| {
            TradeoffError::report_failed(format!(
                "Failed to write temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, path).map_err(|e| {
            // Don't leave the temp file around on a failed rename
            let _ = fs::remove_file(&temp_path);
            TradeoffError::report_failed(format!(
                "Failed to rename temp file to {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_path_format() {
        let writer = ReportWriter::new("/tmp/reports");
        let path = writer.report_path("api").unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();

        assert!(name.starts_with("tradeoff-analysis-api-"));
        assert!(name.ends_with(".txt"));

        // Timestamp segment is numeric epoch millis
        let stamp = name
            .trim_start_matches("tradeoff-analysis-api-")
            .trim_end_matches(".txt");
        assert!(stamp.parse::<u128>().is_ok());
    }

    #[test]
    fn test_write_report_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp_dir.path());

        let path = writer.write_report("api", "report body").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "report body");
    }

    #[test]
    fn test_write_report_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp_dir.path());

        writer.write_report("api", "report body").unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "tmp").unwrap_or(false))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_successive_reports_get_unique_names() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp_dir.path());

        let first = writer.write_report("api", "one").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = writer.write_report("api", "two").unwrap();

        assert_ne!(first, second);
    }
}
