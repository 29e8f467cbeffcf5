//! Test-file path derivation.
//!
//! Unit tests live in a `__tests__` directory next to the source file.
//! API tests mirror the source file's directory structure underneath the
//! integration-test root.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use crate::config::defaults::defaults::{SPEC_SUFFIX, TEST_DIR_NAME};

/// The kind of test a prompt is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestKind {
    /// Jest unit test next to the source file
    Unit,
    /// Jest API integration test under the integration-test root
    Api,
}

impl TestKind {
    /// All kinds, in menu order.
    pub const ALL: &'static [TestKind] = &[TestKind::Unit, TestKind::Api];
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestKind::Unit => write!(f, "unit"),
            TestKind::Api => write!(f, "API"),
        }
    }
}

/// Path derivation error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("source path has no filename component: '{0}'")]
    NoFileName(String),
}

/// Compute where the test file for `source_path` should live.
///
/// Pure function of its inputs; does not touch the filesystem.
pub fn derive_test_path(
    source_path: &Path,
    kind: TestKind,
    integration_root: &Path,
) -> Result<PathBuf, PathError> {
    let no_file_name = || PathError::NoFileName(source_path.display().to_string());

    // `Path::file_name` would silently treat "lib/" as the file "lib"
    let raw = source_path.as_os_str().to_string_lossy();
    if raw
        .chars()
        .next_back()
        .map(std::path::is_separator)
        .unwrap_or(true)
    {
        return Err(no_file_name());
    }

    let file_name = source_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(no_file_name)?;

    let spec_name = spec_file_name(file_name);
    let dir = source_path.parent().unwrap_or_else(|| Path::new(""));

    match kind {
        TestKind::Unit => Ok(dir.join(TEST_DIR_NAME).join(spec_name)),
        TestKind::Api => {
            // Mirror only the relative directory structure; leading `/`,
            // `./` and drive prefixes would escape the root.
            let relative: PathBuf = dir
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .collect();
            Ok(integration_root.join(relative).join(spec_name))
        }
    }
}

/// `work.ts` -> `work.spec.ts`, `Makefile` -> `Makefile.spec`.
fn spec_file_name(file_name: &str) -> String {
    let path = Path::new(file_name);
    let base = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}.{}.{}", base, SPEC_SUFFIX, ext),
        None => format!("{}.{}", base, SPEC_SUFFIX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "__integration-tests__/server";

    #[test]
    fn test_unit_path_is_sibling_tests_dir() {
        let derived =
            derive_test_path(Path::new("lib/rewards/work.ts"), TestKind::Unit, Path::new(ROOT))
                .unwrap();
        assert_eq!(derived, PathBuf::from("lib/rewards/__tests__/work.spec.ts"));
    }

    #[test]
    fn test_api_path_mirrors_structure_under_root() {
        let derived = derive_test_path(
            Path::new("pages/api/reward-applications/work.ts"),
            TestKind::Api,
            Path::new(ROOT),
        )
        .unwrap();
        assert_eq!(
            derived,
            PathBuf::from("__integration-tests__/server/pages/api/reward-applications/work.spec.ts")
        );
    }

    #[test]
    fn test_api_path_drops_leading_dot_and_slash() {
        let derived = derive_test_path(
            Path::new("./lib/rewards/work.ts"),
            TestKind::Api,
            Path::new(ROOT),
        )
        .unwrap();
        assert_eq!(
            derived,
            PathBuf::from("__integration-tests__/server/lib/rewards/work.spec.ts")
        );

        let derived =
            derive_test_path(Path::new("/lib/work.ts"), TestKind::Api, Path::new(ROOT)).unwrap();
        assert_eq!(
            derived,
            PathBuf::from("__integration-tests__/server/lib/work.spec.ts")
        );
    }

    #[test]
    fn test_bare_filename() {
        let derived =
            derive_test_path(Path::new("work.ts"), TestKind::Unit, Path::new(ROOT)).unwrap();
        assert_eq!(derived, PathBuf::from("__tests__/work.spec.ts"));
    }

    #[test]
    fn test_filename_without_extension() {
        let derived =
            derive_test_path(Path::new("lib/Makefile"), TestKind::Unit, Path::new(ROOT)).unwrap();
        assert_eq!(derived, PathBuf::from("lib/__tests__/Makefile.spec"));
    }

    #[test]
    fn test_no_filename_is_rejected() {
        let result = derive_test_path(Path::new(""), TestKind::Unit, Path::new(ROOT));
        assert!(matches!(result, Err(PathError::NoFileName(_))));

        let result = derive_test_path(Path::new("/"), TestKind::Api, Path::new(ROOT));
        assert!(matches!(result, Err(PathError::NoFileName(_))));
    }

    #[test]
    fn test_trailing_separator_is_rejected() {
        let result = derive_test_path(Path::new("lib/"), TestKind::Unit, Path::new(ROOT));
        assert!(matches!(result, Err(PathError::NoFileName(_))));

        let result =
            derive_test_path(Path::new("lib/rewards/"), TestKind::Api, Path::new(ROOT));
        assert!(matches!(result, Err(PathError::NoFileName(_))));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let source = Path::new("lib/rewards/work.ts");
        let first = derive_test_path(source, TestKind::Api, Path::new(ROOT)).unwrap();
        let second = derive_test_path(source, TestKind::Api, Path::new(ROOT)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_integration_root() {
        let derived = derive_test_path(
            Path::new("lib/work.ts"),
            TestKind::Api,
            Path::new("itest/server"),
        )
        .unwrap();
        assert_eq!(derived, PathBuf::from("itest/server/lib/work.spec.ts"));
    }
}
