use crate::error::{PlotError, Result};
use crate::model::CommitInfo;
use crate::plot::CommitSource;
use chrono::DateTime;
use gix::{ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    fn resolve_branch(&self, branch: &str) -> Result<ObjectId> {
        let id = self
            .repo
            .rev_parse_single(branch)
            .map_err(|_| PlotError::BranchNotFound(branch.to_string()))?;

        let commit = id
            .object()?
            .try_into_commit()
            .map_err(|_| PlotError::BranchNotFound(branch.to_string()))?;

        Ok(commit.id)
    }

    /// Every commit reachable from `branch`, newest first.
    pub fn collect_commits(&self, branch: &str, show_progress: bool) -> Result<Vec<CommitInfo>> {
        let tip = self.resolve_branch(branch)?;

        let mut commits = Vec::new();

        let pb = if show_progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} ({pos})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading {branch} in {}...", self.path.display()));

        // The walk stops at the shallow boundary of shallow clones.
        for info in self.repo.rev_walk([tip]).all()? {
            let info = info?;
            let commit = info.object()?;
            let secs = commit.time()?.seconds;
            let timestamp = DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| PlotError::InvalidDate(format!("Invalid timestamp: {secs}")))?;

            let author = commit.author()?;
            commits.push(CommitInfo {
                id: info.id.to_string(),
                author_name: author.name.to_string(),
                message: commit.message_raw()?.to_string(),
                timestamp,
            });

            pb.inc(1);
        }

        pb.finish_and_clear();
        commits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(commits)
    }
}

impl CommitSource for GitRepo {
    fn branch_commits(&self, branch: &str, show_progress: bool) -> Result<Vec<CommitInfo>> {
        self.collect_commits(branch, show_progress)
    }
}
