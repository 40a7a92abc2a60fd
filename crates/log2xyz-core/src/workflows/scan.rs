use super::error::WorkflowError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A job input file paired with the result file it is expected to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFile {
    /// File name of the job input (e.g. `water.gjf`), without directory.
    pub job_name: String,
    /// Full path of the paired result file (e.g. `<dir>/water.log`).
    pub result_path: PathBuf,
}

/// Replaces the trailing `job_ext` of `file_name` with `result_ext`.
/// Returns `None` if the name does not end with `job_ext` or is nothing but it.
pub fn derive_result_name(file_name: &str, job_ext: &str, result_ext: &str) -> Option<String> {
    let stem = file_name.strip_suffix(job_ext)?;
    if stem.is_empty() {
        return None;
    }
    Some(format!("{}{}", stem, result_ext))
}

/// Lists the job files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into and entries that are not regular
/// files are ignored.
///
/// # Errors
///
/// Returns [`WorkflowError::InputDirectory`] if `dir` cannot be listed.
pub fn find_jobs(dir: &Path, job_ext: &str, result_ext: &str) -> Result<Vec<JobFile>, WorkflowError> {
    let entries = fs::read_dir(dir).map_err(|source| WorkflowError::InputDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut jobs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| WorkflowError::InputDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_type = entry
            .file_type()
            .map_err(|source| WorkflowError::io(entry.path(), source))?;
        if file_type.is_dir() {
            trace!(path = %entry.path().display(), "Skipping subdirectory.");
            continue;
        }

        let Some(job_name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(path = %entry.path().display(), "Skipping non UTF-8 file name.");
            continue;
        };
        if let Some(result_name) = derive_result_name(&job_name, job_ext, result_ext) {
            jobs.push(JobFile {
                result_path: dir.join(result_name),
                job_name,
            });
        }
    }

    jobs.sort_by(|a, b| a.job_name.cmp(&b.job_name));
    debug!(count = jobs.len(), dir = %dir.display(), "Discovered job files.");
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn derive_result_name_replaces_only_the_trailing_extension() {
        assert_eq!(
            derive_result_name("water.gjf", ".gjf", ".log"),
            Some("water.log".to_string())
        );
        assert_eq!(
            derive_result_name("a.gjf.gjf", ".gjf", ".log"),
            Some("a.gjf.log".to_string())
        );
        assert_eq!(derive_result_name("water.log", ".gjf", ".log"), None);
        assert_eq!(derive_result_name(".gjf", ".gjf", ".log"), None);
    }

    #[test]
    fn find_jobs_lists_matching_files_sorted_by_name() {
        let dir = tempdir().unwrap();
        for name in ["b.gjf", "a.gjf", "a.log", "notes.txt", "c.gjf"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let jobs = find_jobs(dir.path(), ".gjf", ".log").unwrap();
        let names: Vec<&str> = jobs.iter().map(|j| j.job_name.as_str()).collect();
        assert_eq!(names, vec!["a.gjf", "b.gjf", "c.gjf"]);
        assert_eq!(jobs[0].result_path, dir.path().join("a.log"));
        assert_eq!(jobs[2].result_path, dir.path().join("c.log"));
    }

    #[test]
    fn find_jobs_does_not_recurse_into_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested.gjf")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("inner.gjf")).unwrap();
        File::create(dir.path().join("top.gjf")).unwrap();

        let jobs = find_jobs(dir.path(), ".gjf", ".log").unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_name, "top.gjf");
    }

    #[test]
    fn find_jobs_returns_empty_list_for_directory_without_jobs() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("readme.md")).unwrap();
        assert!(find_jobs(dir.path(), ".gjf", ".log").unwrap().is_empty());
    }

    #[test]
    fn find_jobs_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let result = find_jobs(&missing, ".gjf", ".log");
        assert!(matches!(
            result,
            Err(WorkflowError::InputDirectory { path, .. }) if path == missing
        ));
    }
}
