//! Category split weights with hot-reload from config/splits.json.
//!
//! JSON shape:
//! {
//!   "manual": 0.5,
//!   "compliance": 0.25,
//!   "error_reduction": 0.25
//! }
//!
//! Two named splits exist in the product: the headline split (0.50/0.25/0.25)
//! that drives the hours-saved display, and the detail split (0.70/0.20/0.10)
//! behind the by-category view. They are distinct knobs and are never blended.
//!
//! On each `current()` call we check the file's modified time and reload if
//! changed, so ratios can be retuned without a redeploy.

use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::RwLock,
    time::SystemTime,
};

/// Fixed-ratio partition of the hours-saved value across the three
/// efficiency buckets. Normalized to sum 1.0 via `normalized()`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SplitWeights {
    pub manual: f64,
    pub compliance: f64,
    pub error_reduction: f64,
}

impl SplitWeights {
    /// Canonical headline split: manual 0.50 / compliance 0.25 / error 0.25.
    pub const HEADLINE: SplitWeights = SplitWeights {
        manual: 0.50,
        compliance: 0.25,
        error_reduction: 0.25,
    };

    /// Detail split used by the by-category breakdown view.
    pub const DETAIL: SplitWeights = SplitWeights {
        manual: 0.70,
        compliance: 0.20,
        error_reduction: 0.10,
    };

    /// Scale so the three ratios sum to exactly 1.0. A degenerate all-zero
    /// (or negative-sum) split falls back to the canonical headline ratios.
    pub fn normalized(self) -> Self {
        let sum = self.manual + self.compliance + self.error_reduction;
        if !(sum > 0.0) || !sum.is_finite() {
            return Self::HEADLINE;
        }
        Self {
            manual: self.manual / sum,
            compliance: self.compliance / sum,
            error_reduction: self.error_reduction / sum,
        }
    }
}

impl Default for SplitWeights {
    fn default() -> Self {
        Self::HEADLINE
    }
}

/// Hot-reload wrapper: reloads when the config file mtime changes.
#[derive(Debug)]
pub struct HotReloadSplits {
    path: PathBuf,
    inner: RwLock<State>,
}

#[derive(Debug)]
struct State {
    splits: SplitWeights,
    last_modified: Option<SystemTime>,
}

impl HotReloadSplits {
    /// Create with a path (defaults to "config/splits.json" if `None`).
    pub fn new(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("config/splits.json"));
        Self {
            path,
            inner: RwLock::new(State {
                splits: SplitWeights::default(),
                last_modified: None,
            }),
        }
    }

    /// Get the latest splits, reloading if the config file changed.
    pub fn current(&self) -> SplitWeights {
        let needs_reload = match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(mtime) => {
                let guard = self.inner.read().unwrap();
                guard.last_modified != Some(mtime)
            }
            // If the file isn't there, keep defaults; no reload.
            Err(_) => false,
        };

        if !needs_reload {
            return self.inner.read().unwrap().splits;
        }

        // Slow path: reload with write lock.
        let mut guard = self.inner.write().unwrap();
        // Double-check in case of races.
        if let Ok(meta) = fs::metadata(&self.path) {
            if let Ok(mtime) = meta.modified() {
                if guard.last_modified != Some(mtime) {
                    if let Ok(s) = load_splits_file(&self.path) {
                        guard.splits = s.normalized();
                        guard.last_modified = Some(mtime);
                    }
                }
            }
        }
        guard.splits
    }
}

/// Load splits directly (no caching). Public for tests/tools.
pub fn load_splits_file(path: &Path) -> io::Result<SplitWeights> {
    let bytes = fs::read(path)?;
    let s: SplitWeights = serde_json::from_slice(&bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn unique_tmp_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("splits_test_{}", nanos));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn named_splits_sum_to_one() {
        for s in [SplitWeights::HEADLINE, SplitWeights::DETAIL] {
            let sum = s.manual + s.compliance + s.error_reduction;
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn normalized_rescales_arbitrary_ratios() {
        let s = SplitWeights {
            manual: 2.0,
            compliance: 1.0,
            error_reduction: 1.0,
        }
        .normalized();
        assert!((s.manual - 0.5).abs() < 1e-12);
        assert!((s.compliance - 0.25).abs() < 1e-12);
    }

    #[test]
    fn degenerate_split_falls_back_to_headline() {
        let zero = SplitWeights {
            manual: 0.0,
            compliance: 0.0,
            error_reduction: 0.0,
        };
        assert_eq!(zero.normalized(), SplitWeights::HEADLINE);
    }

    #[test]
    fn loads_from_json_file() {
        let tmpdir = unique_tmp_dir();
        let path = tmpdir.join("splits.json");
        {
            let mut f = fs::File::create(&path).unwrap();
            write!(f, r#"{{"manual":0.7,"compliance":0.2,"error_reduction":0.1}}"#).unwrap();
            f.sync_all().unwrap();
        }

        let s = load_splits_file(&path).unwrap();
        assert!((s.manual - 0.7).abs() < 1e-12);

        let hot = HotReloadSplits::new(Some(&path));
        let s2 = hot.current();
        assert!((s2.error_reduction - 0.1).abs() < 1e-12);

        // Cleanup (best-effort)
        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir_all(&tmpdir);
    }

    #[test]
    fn missing_file_keeps_default() {
        let hot = HotReloadSplits::new(Some(Path::new("no/such/splits.json")));
        assert_eq!(hot.current(), SplitWeights::HEADLINE);
    }
}
