//! Shared helpers for integration tests

use std::path::PathBuf;
use std::time::Duration;

use ghostwrite::typist::{DelayPolicy, Pause};
use ghostwrite::Region;
use ratatui::style::Color;
use tempfile::TempDir;

/// Path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy a fixture into a fresh temp dir and return both.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (temp_dir, path)
}

/// A region that keeps a transcript of everything appended to it.
#[derive(Debug, Default)]
pub struct Recorder {
    pub cols: u16,
    pub text: String,
    pub refreshes: usize,
}

impl Recorder {
    pub fn new(cols: u16) -> Self {
        Self {
            cols,
            ..Self::default()
        }
    }
}

impl Region for Recorder {
    fn cols(&self) -> u16 {
        self.cols
    }

    fn rows(&self) -> u16 {
        1
    }

    fn move_to(&mut self, _row: u16, _col: u16) {}

    fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn set_color(&mut self, _color: Color) {}

    fn refresh(&mut self) -> anyhow::Result<()> {
        self.refreshes += 1;
        Ok(())
    }
}

/// Records requested pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct PauseLog {
    pub pauses: Vec<Duration>,
}

impl Pause for &mut PauseLog {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Every character takes the same time.
pub struct FixedDelay(pub Duration);

impl DelayPolicy for FixedDelay {
    fn delay_for(&mut self, _c: char) -> Duration {
        self.0
    }
}
