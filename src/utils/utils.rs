use std::io;

use indicatif::{ProgressBar, ProgressStyle};
use regex::RegexSet;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();
    Ok(())
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressBar {
    if no_progress {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}

pub fn format_file_size(size: usize) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

pub fn create_regex_sets(include: &[String], exclude: &[String]) -> (RegexSet, RegexSet) {
    let include_patterns: Vec<_> = include
        .iter()
        .map(|p| p.replace(".", "\\.").replace("*", ".*"))
        .collect();
    let exclude_patterns: Vec<_> = exclude
        .iter()
        .map(|p| p.replace(".", "\\.").replace("*", ".*"))
        .collect();

    let include_set = RegexSet::new(&include_patterns).unwrap_or_else(|e| {
        log::warn!("無效的包含模式: {}，使用空集作為回退", e);
        RegexSet::empty()
    });

    let exclude_set = RegexSet::new(&exclude_patterns).unwrap_or_else(|e| {
        log::warn!("無效的排除模式: {}，使用空集作為回退", e);
        RegexSet::empty()
    });

    (include_set, exclude_set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "0.50 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.00 MB");
    }

    #[test]
    fn test_create_regex_sets_glob_translation() {
        let (include, exclude) = create_regex_sets(
            &["*.txt".to_string()],
            &["*.bak".to_string()],
        );
        assert!(include.is_match("notes.txt"));
        assert!(!include.is_match("notes.doc"));
        assert!(exclude.is_match("old.bak"));
    }

    #[test]
    fn test_create_regex_sets_match_all() {
        let (include, _) = create_regex_sets(&["*".to_string()], &[]);
        assert!(include.is_match("anything.whatever"));
    }
}
