//! Common test utilities for seed-rewriter integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Relative location of the seed file inside a backend project
pub const SEED_PATH: &str = "src/utils/seed.ts";

/// A throwaway backend project for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write the seed file at its default location
    pub fn write_seed(&self, content: &str) {
        self.write_file(SEED_PATH, content);
    }

    /// Read the seed file from its default location
    pub fn read_seed(&self) -> String {
        self.read_file(SEED_PATH)
    }

    /// Install the fixture seed file at the default location
    pub fn init_from_fixture(&self) -> String {
        let content = fixture_seed();
        self.write_seed(&content);
        content
    }

    /// Absolute path of the seed file
    pub fn seed_path(&self) -> PathBuf {
        self.path.join(SEED_PATH)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Contents of `tests/common/fixtures/seed.ts`
#[allow(dead_code)]
pub fn fixture_seed() -> String {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join("seed.ts");
    std::fs::read_to_string(fixture_path).expect("Failed to read fixture seed")
}

/// Command for the real binary, isolated from developer environment overrides
#[allow(dead_code, deprecated)]
pub fn seed_rewriter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("seed-rewriter").expect("binary should be built");
    cmd.env_remove("SEED_REWRITER_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside `workspace` as its current directory
#[allow(dead_code)]
pub fn seed_rewriter_cmd_in(workspace: &Path) -> Command {
    let mut cmd = seed_rewriter_cmd();
    cmd.current_dir(workspace);
    cmd
}

/// Image URLs of the `images` array following `after` in `document`
#[allow(dead_code)]
pub fn images_after(document: &str, after: &str) -> Vec<String> {
    let start = document.find(after).expect("anchor text present");
    let rest = &document[start..];
    let open = rest.find("images: [").expect("images field present") + "images: [".len();
    let close = rest[open..].find(']').expect("images field closed") + open;
    rest[open..close]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_matches('\'').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_seed_round_trip() {
        let workspace = TestWorkspace::new();
        workspace.write_seed("const products = []\n");
        assert!(workspace.file_exists(SEED_PATH));
        assert_eq!(workspace.read_seed(), "const products = []\n");
    }

    #[test]
    fn test_images_after() {
        let doc = "{ name: 'A', images: [\n  'x',\n  'y'\n] }";
        assert_eq!(images_after(doc, "name: 'A'"), vec!["x", "y"]);
    }
}
