use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::warn;
use pathdiff::diff_paths;
use regex::RegexSet;
use walkdir::WalkDir;

use crate::models::file::InputItem;

pub fn read_file_content(file_path: &Path) -> io::Result<(Vec<u8>, usize)> {
    let mut file = File::open(file_path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    let file_size = buffer.len();
    Ok((buffer, file_size))
}

pub fn is_file_valid(
    path: &Path,
    include_set: &RegexSet,
    exclude_set: &RegexSet,
    max_size: Option<f64>,
) -> io::Result<bool> {
    let path_str = path.to_string_lossy();
    if !include_set.is_match(&path_str) || exclude_set.is_match(&path_str) {
        return Ok(false);
    }
    if let Some(max) = max_size {
        let file_size = fs::metadata(path)?.len() as f64 / 1_048_576.0;
        if file_size > max {
            warn!(
                "檔案 {} 超過大小限制（{:.2} MB > {} MB），跳過",
                path.display(),
                file_size,
                max
            );
            return Ok(false);
        }
    }
    Ok(true)
}

/// 收集輸入路徑下所有符合條件的檔案；單一檔案輸入直接驗證該檔
pub fn collect_files(
    input_path: &Path,
    include_set: &RegexSet,
    exclude_set: &RegexSet,
    max_size: Option<f64>,
) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if input_path.is_file() {
        if is_file_valid(input_path, include_set, exclude_set, max_size)? {
            files.push(input_path.to_path_buf());
        }
        return Ok(files);
    }

    for entry in WalkDir::new(input_path).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_file_valid(entry.path(), include_set, exclude_set, max_size)? {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

/// 讀取收集到的檔案內容組成批次；目錄輸入時以相對路徑命名項目
pub fn build_batch(input_path: &Path, files: &[PathBuf]) -> io::Result<Vec<InputItem>> {
    let mut items = Vec::new();
    for file_path in files {
        let name = if input_path.is_dir() {
            diff_paths(file_path, input_path)
                .unwrap_or_else(|| file_path.clone())
                .to_string_lossy()
                .replace('\\', "/")
        } else {
            file_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("document"))
                .to_string_lossy()
                .to_string()
        };
        let (bytes, _) = read_file_content(file_path)?;
        items.push(InputItem::new(name, bytes));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file::FileKind;
    use crate::utils::utils::create_regex_sets;
    use std::io::Write;

    #[test]
    fn test_collect_files_filters_by_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"one").unwrap();
        fs::write(dir.path().join("b.docx"), b"two").unwrap();
        fs::write(dir.path().join("c.log"), b"three").unwrap();

        let (include, exclude) =
            create_regex_sets(&["*.txt".to_string(), "*.docx".to_string()], &[]);
        let files = collect_files(dir.path(), &include, &exclude, None).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_collect_files_respects_max_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut big = File::create(dir.path().join("big.txt")).unwrap();
        big.write_all(&vec![b'x'; 2 * 1024 * 1024]).unwrap();
        fs::write(dir.path().join("small.txt"), b"ok").unwrap();

        let (include, exclude) = create_regex_sets(&["*".to_string()], &[]);
        let files = collect_files(dir.path(), &include, &exclude, Some(1.0)).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("small.txt"));
    }

    #[test]
    fn test_build_batch_relative_names_for_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/inner.txt"), b"data").unwrap();

        let (include, exclude) = create_regex_sets(&["*".to_string()], &[]);
        let files = collect_files(dir.path(), &include, &exclude, None).unwrap();
        let items = build_batch(dir.path(), &files).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "sub/inner.txt");
        assert_eq!(items[0].kind, FileKind::Txt);
        assert_eq!(items[0].bytes, b"data");
    }

    #[test]
    fn test_build_batch_single_file_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("alone.txt");
        fs::write(&file, b"data").unwrap();

        let items = build_batch(&file, &[file.clone()]).unwrap();
        assert_eq!(items[0].name, "alone.txt");
    }
}
