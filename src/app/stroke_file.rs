//! Stroke file format
//!
//! JSON point sequences for the offline evaluation harness. This is test and
//! replay tooling for the classifier, not product-side persistence: the
//! exercise itself discards every drawing after one evaluation cycle.

use crate::capture::types::{Point, Stroke};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A recorded drawing: one or more point sequences, one per pen-down.
///
/// The classifier requires exactly one stroke; files with several are loaded
/// faithfully so the harness can exercise the multi-stroke rejection path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeFile {
    /// One point list per stroke, in capture order.
    pub strokes: Vec<Vec<Point>>,
    /// Elapsed drawing time in seconds, if the recorder captured it.
    #[serde(default)]
    pub elapsed_secs: Option<f64>,
}

impl StrokeFile {
    /// Load a stroke file, enforcing the configured point budget.
    pub fn load(path: &Path, max_points: usize) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: StrokeFile = serde_json::from_str(&content)?;

        let total: usize = file.strokes.iter().map(|s| s.len()).sum();
        if total > max_points {
            return Err(crate::Error::Capture(format!(
                "stroke file has {total} points, limit is {max_points}"
            )));
        }
        Ok(file)
    }

    /// Finalized strokes, ready for classification.
    pub fn strokes(&self) -> Vec<Stroke> {
        self.strokes
            .iter()
            .map(|points| Stroke::from_points(points.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, json).expect("write stroke file");
        path
    }

    #[test]
    fn test_load_single_stroke() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "one.json",
            r#"{"strokes": [[{"x": 0.0, "y": 0.0}, {"x": 100.0, "y": 100.0}]], "elapsed_secs": 2.5}"#,
        );

        let file = StrokeFile::load(&path, 10_000).unwrap();
        assert_eq!(file.strokes.len(), 1);
        assert_eq!(file.elapsed_secs, Some(2.5));

        let strokes = file.strokes();
        assert_eq!(strokes[0].len(), 2);
    }

    #[test]
    fn test_elapsed_is_optional() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "no_elapsed.json", r#"{"strokes": [[{"x": 1.0, "y": 2.0}]]}"#);

        let file = StrokeFile::load(&path, 10_000).unwrap();
        assert_eq!(file.elapsed_secs, None);
    }

    #[test]
    fn test_point_budget_is_enforced() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "big.json",
            r#"{"strokes": [[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}, {"x": 2.0, "y": 2.0}]]}"#,
        );

        assert!(StrokeFile::load(&path, 2).is_err());
        assert!(StrokeFile::load(&path, 3).is_ok());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.json", "{not json");
        assert!(StrokeFile::load(&path, 10_000).is_err());
    }

    #[test]
    fn test_multi_stroke_file_loads_faithfully() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "two.json",
            r#"{"strokes": [[{"x": 0.0, "y": 0.0}], [{"x": 5.0, "y": 5.0}]]}"#,
        );

        let file = StrokeFile::load(&path, 10_000).unwrap();
        assert_eq!(file.strokes().len(), 2);
    }
}
