use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use team_core::{
    application::{
        commands::teams::{
            AddTeamMemberCommand, CreateTeamCommand, DeleteTeamCommand, RemoveTeamMemberCommand,
            UpdateTeamCommand,
        },
        ports::{
            time::Clock,
            util::{SlugGenerator, SuffixGenerator},
        },
        queries::teams::{GetTeamBySlugQuery, ListTeamMembersQuery, ListTeamsForMemberQuery},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::errors::DomainError,
    domain::team::{TeamId, TeamReadRepository, TeamRole, TeamWriteRepository, UserId},
    infrastructure::{
        database,
        repositories::{SqliteTeamReadRepository, SqliteTeamWriteRepository},
        time::SystemClock,
        util::{DefaultSlugGenerator, RandomSuffixGenerator},
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// `team_core` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "team_core",
    about = "Manage teams, their slugs and their members",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// Create a team owned by `owner-id`.
    Create {
        #[arg(value_parser = parse_user_id)]
        owner_id: UserId,
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Rename a team, re-deriving its slug.
    Rename {
        #[arg(value_parser = parse_team_id)]
        id: TeamId,
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Show the live team holding `slug`.
    Show { slug: String },
    /// List the teams a user belongs to.
    List {
        #[arg(value_parser = parse_user_id)]
        user_id: UserId,
    },
    /// List a team's members.
    Members {
        #[arg(value_parser = parse_team_id)]
        team_id: TeamId,
    },
    AddMember {
        #[arg(value_parser = parse_team_id)]
        team_id: TeamId,
        #[arg(value_parser = parse_user_id)]
        user_id: UserId,
        #[arg(value_parser = parse_role, default_value = "member")]
        role: TeamRole,
    },
    RemoveMember {
        #[arg(value_parser = parse_team_id)]
        team_id: TeamId,
        #[arg(value_parser = parse_user_id)]
        user_id: UserId,
    },
    /// Soft-delete a team and release its slug.
    Delete {
        #[arg(value_parser = parse_team_id)]
        id: TeamId,
    },
}

fn parse_team_id(raw: &str) -> Result<TeamId, String> {
    TeamId::parse(raw).map_err(|err| err.to_string())
}

fn parse_user_id(raw: &str) -> Result<UserId, String> {
    UserId::parse(raw).map_err(|err| err.to_string())
}

fn parse_role(raw: &str) -> Result<TeamRole, String> {
    raw.parse().map_err(|err: DomainError| err.to_string())
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .with_context(|| format!("failed to open {}", config.database_url()))?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let team_write_repo: Arc<dyn TeamWriteRepository> =
        Arc::new(SqliteTeamWriteRepository::new(Arc::clone(&pool)));
    let team_read_repo: Arc<dyn TeamReadRepository> =
        Arc::new(SqliteTeamReadRepository::new(Arc::clone(&pool)));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let suffixes: Arc<dyn SuffixGenerator> =
        Arc::new(RandomSuffixGenerator::new(config.slug_suffix_length()));

    let services = ApplicationServices::new(
        team_write_repo,
        team_read_repo,
        clock,
        slugger,
        suffixes,
        config.slug_suffix_attempts(),
    );

    let result = run(&services, cli.command).await;
    pool.close().await;
    result
}

async fn run(services: &ApplicationServices, command: Command) -> Result<()> {
    let commands = &services.team_commands;
    let queries = &services.team_queries;

    match command {
        Command::Create { owner_id, name } => {
            let team = commands
                .create_team(CreateTeamCommand {
                    owner_id,
                    name: name.join(" "),
                })
                .await?;
            print_json(&team)
        }
        Command::Rename { id, name } => {
            let team = commands
                .update_team(UpdateTeamCommand {
                    id,
                    name: name.join(" "),
                })
                .await?;
            print_json(&team)
        }
        Command::Show { slug } => {
            let team = queries.get_team_by_slug(GetTeamBySlugQuery { slug }).await?;
            print_json(&team)
        }
        Command::List { user_id } => {
            let teams = queries
                .list_teams_for_member(ListTeamsForMemberQuery { user_id })
                .await?;
            print_json(&teams)
        }
        Command::Members { team_id } => {
            let members = queries.list_members(ListTeamMembersQuery { team_id }).await?;
            print_json(&members)
        }
        Command::AddMember {
            team_id,
            user_id,
            role,
        } => {
            let member = commands
                .add_member(AddTeamMemberCommand {
                    team_id,
                    user_id,
                    role,
                })
                .await?;
            print_json(&member)
        }
        Command::RemoveMember { team_id, user_id } => {
            commands
                .remove_member(RemoveTeamMemberCommand { team_id, user_id })
                .await?;
            Ok(())
        }
        Command::Delete { id } => {
            commands.delete_team(DeleteTeamCommand { id }).await?;
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
