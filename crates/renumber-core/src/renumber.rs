use crate::config::{AppConfig, OrderPolicy};
use crate::error::{EntryError, Error, SkipReason};
use crate::naming::SequenceName;
use crate::reporter::RenumberReporter;
use crate::sequencer::Sequencer;
use glob::Pattern;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Default)]
pub struct RenumberOptions {
    pub order: OrderPolicy,
    pub ignore_patterns: Vec<String>,
    pub dry_run: bool,
}

impl From<&AppConfig> for RenumberOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            order: config.order,
            ignore_patterns: config.ignore_patterns.clone(),
            dry_run: config.dry_run,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenumberSummary {
    /// Renamed, or planned for renaming in a dry run.
    pub renamed: usize,
    /// Already carried their target name.
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Distinct groups that received at least one number.
    pub groups: usize,
}

/// Renumber the files directly inside `dir`.
///
/// Files named `base_<anything>.ext` are renamed to `base_NN.ext`, numbered
/// from 01 within each (base, extension) group. Entries are visited in the
/// order given by `options.order`. Subdirectories are never entered.
///
/// Only an invalid directory or ignore pattern aborts the run. Problems with
/// individual entries go to `reporter` and the scan carries on.
pub fn renumber(
    dir: &Path,
    options: &RenumberOptions,
    reporter: &dyn RenumberReporter,
) -> Result<RenumberSummary, Error> {
    if !dir.is_dir() {
        return Err(Error::InvalidDirectory(dir.to_path_buf()));
    }

    let ignore_patterns = compile_patterns(&options.ignore_patterns)?;

    info!(
        "Renumbering {} (order: {:?}, dry run: {})",
        dir.display(),
        options.order,
        options.dry_run
    );
    reporter.on_start(dir);

    let listing = read_listing(dir, options.order);

    let mut scan = Scan {
        options,
        reporter,
        sequencer: Sequencer::new(),
        planned: PlannedNames::default(),
        summary: RenumberSummary::default(),
    };
    let mut deferred = Vec::new();

    for entry_result in listing {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                let name = err
                    .path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                warn!("Error reading entry in {}: {}", dir.display(), err);
                scan.fail(&name, &EntryError::Walk(err));
                continue;
            }
        };

        let Some(file_name) = entry.file_name().to_str() else {
            let lossy = entry.file_name().to_string_lossy();
            debug!("Skipping {}: not valid UTF-8", lossy);
            scan.skip(&lossy, SkipReason::NonUtf8Name);
            continue;
        };

        if ignore_patterns.iter().any(|p| p.matches(file_name)) {
            debug!("Skipping {}: ignored", file_name);
            scan.skip(file_name, SkipReason::Ignored);
            continue;
        }

        let Some(name) = SequenceName::parse(file_name) else {
            debug!("Skipping {}: no sequence pattern", file_name);
            scan.skip(file_name, SkipReason::NoSequencePattern);
            continue;
        };

        if let Attempt::Collided(target) = scan.attempt(entry.path(), file_name, &name) {
            debug!(
                "{} collides with {}, retrying after the scan",
                file_name,
                target.display()
            );
            let file_name = file_name.to_string();
            deferred.push((entry.into_path(), file_name, name));
        }
    }

    // A target may be freed later in the scan, e.g. `a_0.txt` listed before
    // `a_01.txt` keeps its own name. Each collided entry gets one more try.
    for (path, file_name, name) in deferred {
        if let Attempt::Collided(target) = scan.attempt(&path, &file_name, &name) {
            let err = EntryError::Collision { target };
            warn!("Not renaming {}: {}", file_name, err);
            scan.fail(&file_name, &err);
        }
    }

    let mut summary = scan.summary;
    summary.groups = scan.sequencer.group_count();
    info!(
        "{} renamed, {} unchanged, {} skipped, {} failed across {} groups",
        summary.renamed, summary.unchanged, summary.skipped, summary.failed, summary.groups
    );
    reporter.on_complete(&summary);

    Ok(summary)
}

/// Read the whole listing up front so renamed files are not enumerated twice.
/// Only regular files are kept, classified now rather than when renamed.
fn read_listing(dir: &Path, order: OrderPolicy) -> Vec<Result<DirEntry, walkdir::Error>> {
    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    if order == OrderPolicy::Name {
        walker = walker.sort_by_file_name();
    }

    walker
        .into_iter()
        .filter(|entry_result| match entry_result {
            Ok(entry) => is_regular_file(entry),
            Err(_) => true,
        })
        .collect()
}

/// Follows symlinks, so a link to a regular file is renamed as one.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        fs::metadata(entry.path())
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    } else {
        file_type.is_file()
    }
}

enum Attempt {
    Done,
    Collided(PathBuf),
}

/// State of one renumbering run.
struct Scan<'a> {
    options: &'a RenumberOptions,
    reporter: &'a dyn RenumberReporter,
    sequencer: Sequencer,
    planned: PlannedNames,
    summary: RenumberSummary,
}

impl Scan<'_> {
    /// Give `path` the next number of its group. A collision is handed back
    /// without being reported.
    fn attempt(&mut self, path: &Path, file_name: &str, name: &SequenceName) -> Attempt {
        let new_name = self.sequencer.propose(name);
        if new_name == file_name {
            debug!("{} already numbered", file_name);
            self.sequencer.commit(name);
            self.planned.claim(file_name, &new_name);
            self.summary.unchanged += 1;
            self.reporter.on_unchanged(file_name);
            return Attempt::Done;
        }

        let target = path.with_file_name(&new_name);
        if self
            .planned
            .is_occupied(&new_name, &target, self.options.dry_run)
        {
            return Attempt::Collided(target);
        }

        if self.options.dry_run {
            debug!("Would rename {} -> {}", file_name, new_name);
            self.sequencer.commit(name);
            self.planned.claim(file_name, &new_name);
            self.summary.renamed += 1;
            self.reporter.on_planned(file_name, &new_name);
            return Attempt::Done;
        }

        match fs::rename(path, &target) {
            Ok(()) => {
                let number = self.sequencer.commit(name);
                debug!(
                    "Renamed {} -> {} (group {}, #{})",
                    file_name,
                    new_name,
                    name.group_key(),
                    number
                );
                self.summary.renamed += 1;
                self.reporter.on_renamed(file_name, &new_name);
            }
            Err(source) => {
                let err = EntryError::Rename { target, source };
                warn!("Failed to rename {}: {}", file_name, err);
                self.fail(file_name, &err);
            }
        }
        Attempt::Done
    }

    fn skip(&mut self, file_name: &str, reason: SkipReason) {
        self.summary.skipped += 1;
        self.reporter.on_skipped(file_name, reason);
    }

    fn fail(&mut self, file_name: &str, err: &EntryError) {
        self.summary.failed += 1;
        self.reporter.on_failed(file_name, err);
    }
}

fn compile_patterns(globs: &[String]) -> Result<Vec<Pattern>, Error> {
    globs
        .iter()
        .map(|glob| {
            Pattern::new(glob).map_err(|source| Error::Pattern {
                pattern: glob.clone(),
                source,
            })
        })
        .collect()
}

/// Names moved away from and claimed by renames planned so far.
///
/// A real run checks the filesystem directly. A dry run changes nothing on
/// disk, so earlier planned renames are layered over what the disk shows.
#[derive(Debug, Default)]
struct PlannedNames {
    vacated: HashSet<String>,
    claimed: HashSet<String>,
}

impl PlannedNames {
    fn claim(&mut self, old: &str, new: &str) {
        if old != new {
            self.vacated.insert(old.to_string());
        }
        self.vacated.remove(new);
        self.claimed.insert(new.to_string());
    }

    fn is_occupied(&self, new_name: &str, target: &Path, dry_run: bool) -> bool {
        let on_disk = fs::symlink_metadata(target).is_ok();
        if !dry_run {
            return on_disk;
        }
        self.claimed.contains(new_name) || (on_disk && !self.vacated.contains(new_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_patterns_rejects_bad_glob() {
        let err = compile_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Pattern { ref pattern, .. } if pattern == "["));
    }

    #[test]
    fn test_planned_names_tracks_vacated_and_claimed() {
        let mut planned = PlannedNames::default();
        planned.claim("foo_02.txt", "foo_01.txt");
        assert!(planned.vacated.contains("foo_02.txt"));
        assert!(planned.claimed.contains("foo_01.txt"));

        planned.claim("foo_1.txt", "foo_02.txt");
        assert!(!planned.vacated.contains("foo_02.txt"));
        assert!(planned.claimed.contains("foo_02.txt"));
    }

    #[test]
    fn test_dry_run_treats_claimed_names_as_occupied() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("foo_02.txt"), "").unwrap();

        let mut planned = PlannedNames::default();
        planned.claim("foo_02.txt", "foo_01.txt");

        // Claimed by an earlier plan, though nothing is on disk yet.
        let claimed = tmp.path().join("foo_01.txt");
        assert!(planned.is_occupied("foo_01.txt", &claimed, true));
        assert!(!planned.is_occupied("foo_01.txt", &claimed, false));

        // On disk, but vacated by an earlier plan.
        let vacated = tmp.path().join("foo_02.txt");
        assert!(!planned.is_occupied("foo_02.txt", &vacated, true));
        assert!(planned.is_occupied("foo_02.txt", &vacated, false));
    }

    #[test]
    fn test_options_from_config() {
        let config = AppConfig {
            order: OrderPolicy::Filesystem,
            ignore_patterns: vec!["*.tmp".to_string()],
            dry_run: true,
        };
        let options = RenumberOptions::from(&config);
        assert_eq!(options.order, OrderPolicy::Filesystem);
        assert_eq!(options.ignore_patterns, vec!["*.tmp"]);
        assert!(options.dry_run);
    }
}
