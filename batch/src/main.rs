use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, Parser)]
#[command(version, about = "Match statistics from League of Legends replays")]
struct Cli {
    /// More output, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Parse every Scrim*/ directory and write per-scrim and global outputs
    Scrims {
        #[arg(long, default_value = ".")]
        root: PathBuf,
        #[arg(long, default_value = "output")]
        out: PathBuf,
        /// Tracked player as gameName#tagLine
        #[arg(long = "roster")]
        roster: Vec<String>,
        /// File with one gameName#tagLine per line
        #[arg(long)]
        roster_file: Option<PathBuf>,
        #[arg(long, default_value_t = 4)]
        jobs: usize,
        #[arg(long, default_value = "EUW1")]
        platform: String,
        #[arg(long, default_value = "14.24")]
        game_version: String,
    },
    /// Print a single replay's document
    Parse {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Riot)]
        format: Format,
        #[arg(long, default_value = "EUW1")]
        platform: String,
        #[arg(long, default_value = "14.24")]
        game_version: String,
    },
    /// Infer a player's role from match history or champion mastery
    Roles {
        #[arg(long)]
        puuid: String,
        #[arg(long)]
        history: Option<PathBuf>,
        #[arg(long)]
        mastery: Option<PathBuf>,
        #[arg(long, default_value = "config/champion_roles.json")]
        champion_roles: PathBuf,
        #[arg(long, default_value_t = 420)]
        queue: u32,
        /// Count games from every queue
        #[arg(long)]
        any_queue: bool,
        #[arg(long, default_value_t = 15)]
        max_matches: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    Riot,
    Compact,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::filter_fn(move |meta| {
            let target = meta.target();
            (target.starts_with("analysis") || target.starts_with("batch")) && *meta.level() <= level
        }));

    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("Installing tracing subscriber: {}", e);
    }
}

fn analysis_config(platform: &str) -> analysis::Config {
    let mut config = analysis::Config::default();
    config.normalize.platform_id = platform.to_owned();
    config
}

async fn run(command: Command) -> Result<(), batch::Error> {
    match command {
        Command::Scrims {
            root,
            out,
            roster,
            roster_file,
            jobs,
            platform,
            game_version,
        } => {
            let mut members = roster;
            if let Some(path) = roster_file {
                members.extend(batch::scrims::read_roster_file(&path)?);
            }

            let config = batch::scrims::ScrimsConfig {
                root,
                out,
                roster: analysis::scrim::Roster::new(members),
                jobs,
                analysis: analysis_config(&platform),
                export: analysis::export::RiotExportOptions {
                    platform_id: platform,
                    game_version,
                    game_creation_ms: 0,
                },
            };

            let report = batch::scrims::run(&config).await?;
            tracing::info!(
                scrims = report.scrims.len(),
                players = report.global.players().len(),
                out = %config.out.display(),
                "Done"
            );
        }
        Command::Parse {
            file,
            format,
            platform,
            game_version,
        } => {
            let replay = batch::replay::ReplayFile::load(&file)?;
            let game = replay.parse(&analysis_config(&platform))?;

            let output = match format {
                Format::Riot => {
                    let options = analysis::export::RiotExportOptions {
                        platform_id: platform,
                        game_version,
                        game_creation_ms: replay.modified_ms,
                    };
                    serde_json::to_string_pretty(&analysis::export::to_match_v5(&game, &options))?
                }
                Format::Compact => serde_json::to_string_pretty(&analysis::export::to_compact(&game))?,
            };
            println!("{}", output);
        }
        Command::Roles {
            puuid,
            history,
            mastery,
            champion_roles,
            queue,
            any_queue,
            max_matches,
        } => {
            let request = batch::roles::RolesRequest {
                puuid,
                history,
                mastery,
                champion_roles,
                history_config: analysis::roles::RoleHistoryConfig {
                    queue_id: if any_queue { None } else { Some(queue) },
                    max_matches,
                },
            };

            let role = batch::roles::infer(&request)?;
            println!("{}", analysis::roles::role_label(role));
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed");
            std::process::ExitCode::FAILURE
        }
    }
}
