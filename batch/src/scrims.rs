//! The `Scrim*/` directory convention.
//!
//! ```text
//! root/
//!   Scrim1/  a.rofl b.rofl ...
//!   Scrim2/  ...
//! ```
//!
//! Every scrim gets `<scrim>_matches.json` and `<scrim>_data.json` (scrim
//! name lowercased) in the output directory, and all of them together
//! `global_matches.json` and `global_data.json`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use analysis::export::RiotExportOptions;
use analysis::normalize::Match;
use analysis::scrim::{Roster, ScrimSummary};

use crate::replay::ReplayFile;
use crate::Error;

const SCRIM_DIR_PREFIX: &str = "Scrim";
const REPLAY_EXTENSION: &str = "rofl";

#[derive(Debug, Clone)]
pub struct ScrimsConfig {
    pub root: PathBuf,
    pub out: PathBuf,
    pub roster: Roster,
    /// Replays parsed at the same time.
    pub jobs: usize,
    pub analysis: analysis::Config,
    /// `game_creation_ms` is replaced by each file's modification time.
    pub export: RiotExportOptions,
}

/// A replay that made it through the pipeline.
#[derive(Debug, Clone)]
pub struct ParsedReplay {
    pub path: PathBuf,
    pub game: Match,
    pub document: common::MatchV5,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrimOutcome {
    pub name: String,
    pub parsed: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub scrims: Vec<ScrimOutcome>,
    pub global: ScrimSummary,
}

/// Subdirectories of `root` named `Scrim*`, sorted by name.
pub fn discover_scrims(root: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root).map_err(Error::io(root))? {
        let entry = entry.map_err(Error::io(root))?;
        let path = entry.path();
        let is_scrim = entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with(SCRIM_DIR_PREFIX));

        if is_scrim && path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// `*.rofl` files directly inside `dir`, sorted by name.
pub fn replay_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(Error::io(dir))? {
        let path = entry.map_err(Error::io(dir))?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == REPLAY_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// One Riot ID per line, blank lines ignored.
pub fn read_roster_file(path: &Path) -> Result<Vec<String>, Error> {
    let text = std::fs::read_to_string(path).map_err(Error::io(path))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect())
}

fn parse_file(
    path: &Path,
    config: &analysis::Config,
    export: &RiotExportOptions,
) -> Result<ParsedReplay, Error> {
    let file = ReplayFile::load(path)?;
    let game = file.parse(config)?;

    let options = RiotExportOptions {
        game_creation_ms: file.modified_ms,
        ..export.clone()
    };
    let document = analysis::export::to_match_v5(&game, &options);

    Ok(ParsedReplay {
        path: path.to_path_buf(),
        game,
        document,
    })
}

/// Runs `work` over `files` on the blocking pool, at most `jobs` at a time.
///
/// Results keep the order of `files`. Files whose work fails or panics are
/// logged and left out.
pub async fn parallel_map<T, F>(files: Vec<PathBuf>, jobs: usize, work: F) -> Result<Vec<T>, Error>
where
    T: Send + 'static,
    F: Fn(&Path) -> Result<T, Error> + Send + Sync + 'static,
{
    let limit = Arc::new(tokio::sync::Semaphore::new(jobs.max(1)));
    let work = Arc::new(work);

    let mut handles = Vec::with_capacity(files.len());
    for path in files {
        let permit = limit.clone().acquire_owned().await?;
        let work = work.clone();
        let task_path = path.clone();

        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            work(&task_path)
        });
        handles.push((path, handle));
    }

    let mut results = Vec::with_capacity(handles.len());
    for (path, handle) in handles {
        match handle.await {
            Ok(Ok(value)) => results.push(value),
            Ok(Err(e)) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping replay");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Replay worker failed, skipping replay");
            }
        }
    }

    Ok(results)
}

/// Parses `files` with [`parallel_map`].
pub async fn parse_all(
    files: Vec<PathBuf>,
    jobs: usize,
    config: &analysis::Config,
    export: &RiotExportOptions,
) -> Result<Vec<ParsedReplay>, Error> {
    let config = config.clone();
    let export = export.clone();

    parallel_map(files, jobs, move |path| parse_file(path, &config, &export)).await
}

async fn write_json<T>(path: PathBuf, value: &T) -> Result<(), Error>
where
    T: serde::Serialize,
{
    let content = serde_json::to_vec_pretty(value).map_err(Error::json(&path))?;
    tokio::fs::write(&path, content).await.map_err(Error::io(&path))?;
    tracing::debug!(path = %path.display(), "Wrote output");
    Ok(())
}

#[tracing::instrument(skip_all, fields(root = %config.root.display()))]
pub async fn run(config: &ScrimsConfig) -> Result<BatchReport, Error> {
    if config.roster.is_empty() {
        tracing::warn!("Roster is empty, no players will be tracked");
    }

    tokio::fs::create_dir_all(&config.out)
        .await
        .map_err(Error::io(&config.out))?;

    let mut report = BatchReport::default();
    let mut global_documents = Vec::new();

    for dir in discover_scrims(&config.root)? {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let files = replay_files(&dir)?;
        let total = files.len();
        let parsed = parse_all(files, config.jobs, &config.analysis, &config.export).await?;

        if parsed.is_empty() {
            tracing::warn!(scrim = %name, files = total, "No usable replays, skipping scrim");
            continue;
        }

        let summary = ScrimSummary::aggregate(&config.roster, parsed.iter().map(|p| &p.game));
        let documents: Vec<_> = parsed.into_iter().map(|p| p.document).collect();
        let outcome = ScrimOutcome {
            name: name.clone(),
            parsed: documents.len(),
            skipped: total - documents.len(),
        };

        write_json(
            config.out.join(format!("{}_matches.json", name.to_lowercase())),
            &common::MatchList {
                matches: documents.clone(),
            },
        )
        .await?;
        write_json(
            config.out.join(format!("{}_data.json", name.to_lowercase())),
            &summary.report(),
        )
        .await?;

        tracing::info!(
            scrim = %name,
            parsed = outcome.parsed,
            skipped = outcome.skipped,
            players = summary.players().len(),
            "Processed scrim"
        );

        report.global.merge(&summary);
        global_documents.extend(documents);
        report.scrims.push(outcome);
    }

    write_json(
        config.out.join("global_matches.json"),
        &common::MatchList {
            matches: global_documents,
        },
    )
    .await?;
    write_json(config.out.join("global_data.json"), &report.global.report()).await?;

    Ok(report)
}
