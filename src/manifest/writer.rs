//! Manifest Writer
//!
//! Writes the manifest through a sibling temporary file that is renamed over
//! the target, so a failed run never leaves a partial manifest behind. An
//! existing target must be writable; symlinks are written through and the
//! target keeps its permissions.

use super::generator::ResourceMethodMap;
use crate::error::{GenError, Result};
use std::fs::{self, OpenOptions, Permissions};
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file next to the target (`resource_methods.json.tmp`)
fn temp_path(path: &Path) -> Result<PathBuf> {
    let Some(file_name) = path.file_name() else {
        return Err(GenError::fs(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
        ));
    };

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

/// Resolve an existing target to the file that will be replaced.
///
/// Returns `None` when nothing exists at `path` yet.
fn existing_target(path: &Path) -> Result<Option<(PathBuf, Permissions)>> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(GenError::fs(path, e)),
    };

    if metadata.permissions().readonly() {
        return Err(GenError::fs(
            path,
            io::Error::new(io::ErrorKind::PermissionDenied, "output file is read-only"),
        ));
    }

    // Opening without truncation surfaces ownership and ACL denials.
    OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| GenError::fs(path, e))?;

    let target = fs::canonicalize(path).map_err(|e| GenError::fs(path, e))?;
    Ok(Some((target, metadata.permissions())))
}

/// Serialize the manifest and write it to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_manifest(map: &ResourceMethodMap, path: &Path) -> Result<()> {
    let content = map.to_json_pretty()?;
    let (target, permissions) = match existing_target(path)? {
        Some((target, permissions)) => (target, Some(permissions)),
        None => (path.to_path_buf(), None),
    };
    let tmp = temp_path(&target)?;

    if let Err(e) = fs::write(&tmp, content) {
        let _ = fs::remove_file(&tmp);
        return Err(GenError::fs(path, e));
    }

    if let Some(permissions) = permissions {
        if let Err(e) = fs::set_permissions(&tmp, permissions) {
            let _ = fs::remove_file(&tmp);
            return Err(GenError::fs(path, e));
        }
    }

    if let Err(e) = fs::rename(&tmp, &target) {
        let _ = fs::remove_file(&tmp);
        return Err(GenError::fs(path, e));
    }

    tracing::info!("Wrote {} resources to {:?}", map.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> ResourceMethodMap {
        let mut map = ResourceMethodMap::new();
        map.insert(
            "rdk:component:servo",
            vec!["do_command".to_string(), "move".to_string()],
        );
        map
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resource_methods.json");

        write_manifest(&sample_map(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "{\n  \"rdk:component:servo\": [\n    \"do_command\",\n    \"move\"\n  ]\n}"
        );
        assert!(!dir.path().join("resource_methods.json.tmp").exists());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resource_methods.json");
        fs::write(&path, "stale content that is longer than the new manifest").unwrap();

        write_manifest(&sample_map(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["rdk:component:servo"][1], "move");
    }

    #[test]
    fn test_missing_parent_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("lib").join("resource_methods.json");

        let err = write_manifest(&sample_map(), &path).unwrap_err();
        match err {
            GenError::FileSystem { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_read_only_target_is_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resource_methods.json");
        fs::write(&path, "{}").unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();

        let err = write_manifest(&sample_map(), &path).unwrap_err();
        match err {
            GenError::FileSystem { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!dir.path().join("resource_methods.json.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_mode_0444_fails() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resource_methods.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o444)).unwrap();

        assert!(matches!(
            write_manifest(&sample_map(), &path),
            Err(GenError::FileSystem { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_mode_is_kept() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resource_methods.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o640)).unwrap();

        write_manifest(&sample_map(), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_target_is_written_through() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("generated.json");
        let link = dir.path().join("resource_methods.json");
        fs::write(&real, "{}").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_manifest(&sample_map(), &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&real).unwrap()).unwrap();
        assert_eq!(value["rdk:component:servo"][0], "do_command");
    }

    #[test]
    fn test_path_without_file_name_fails() {
        let err = write_manifest(&sample_map(), Path::new("..")).unwrap_err();
        assert!(matches!(err, GenError::FileSystem { .. }));
    }
}
