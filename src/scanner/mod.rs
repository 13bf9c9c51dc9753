mod exif;

use crate::error::{FreshscanError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub date: Option<String>,
    pub size: Option<u64>,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Collect the images to analyze.
///
/// An explicit file is taken as-is (the extension filter only applies to
/// folder scans, the way a picker's `image/*` filter only applies to the
/// dialog). A folder is scanned non-recursively and sorted by filename.
pub fn scan_path(path: &Path) -> Result<Vec<ImageInfo>> {
    if path.is_file() {
        return Ok(vec![image_info(path)]);
    }
    if !path.is_dir() {
        return Err(FreshscanError::FileNotFound(path.display().to_string()));
    }
    scan_folder(path)
}

pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(FreshscanError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if IMAGE_EXTENSIONS.iter().any(|e| ext_str.eq_ignore_ascii_case(e)) {
                images.push(image_info(path));
            }
        }
    }

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

fn image_info(path: &Path) -> ImageInfo {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    ImageInfo {
        path: path.to_path_buf(),
        file_name,
        date: exif::extract_capture_date(path).ok(),
        size: std::fs::metadata(path).ok().map(|m| m.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name))
            .unwrap()
            .write_all(b"dummy")
            .unwrap();
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(FreshscanError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_empty() {
        let temp = tempfile::tempdir().unwrap();
        let result = scan_folder(temp.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let temp = tempfile::tempdir().unwrap();
        touch(temp.path(), "banana.png");
        touch(temp.path(), "apple.jpg");
        touch(temp.path(), "cherry.JPG");
        touch(temp.path(), "readme.txt");

        let result = scan_folder(temp.path()).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].file_name, "apple.jpg");
        assert_eq!(result[1].file_name, "banana.png");
        assert_eq!(result[2].file_name, "cherry.JPG");
        assert_eq!(result[0].size, Some(5));
    }

    #[test]
    fn test_scan_folder_is_not_recursive() {
        let temp = tempfile::tempdir().unwrap();
        touch(temp.path(), "top.jpg");
        std::fs::create_dir(temp.path().join("nested")).unwrap();
        touch(&temp.path().join("nested"), "deep.jpg");

        let result = scan_folder(temp.path()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "top.jpg");
    }

    #[test]
    fn test_scan_path_accepts_explicit_file_regardless_of_extension() {
        let temp = tempfile::tempdir().unwrap();
        touch(temp.path(), "scan.tiff");

        let result = scan_path(&temp.path().join("scan.tiff")).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "scan.tiff");
    }

    #[test]
    fn test_scan_path_missing_target() {
        let result = scan_path(Path::new("/nonexistent/image.jpg"));
        assert!(matches!(result, Err(FreshscanError::FileNotFound(_))));
    }
}
