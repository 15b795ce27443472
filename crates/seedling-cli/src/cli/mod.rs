//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "seedling",
    bin_name = "seedling",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Idempotent code generation inside existing projects",
    long_about = "Seedling adds generated modules, scripts and service definitions \
                  to an existing Python project. Every step is safe to re-run.",
    after_help = "EXAMPLES:\n\
        \x20 seedling task SyncUsers --async\n\
        \x20 seedling cmd sync-users --docker-compose\n\
        \x20 seedling names HTTPServerError\n\
        \x20 seedling completions bash > /usr/share/bash-completion/completions/seedling",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a task class under `<package>/tasks/`.
    #[command(
        visible_alias = "t",
        about = "Generate a task module",
        after_help = "EXAMPLES:\n\
            \x20 seedling task SyncUsers\n\
            \x20 seedling task cleanup --name \"nightly cleanup\" --async\n\
            \x20 seedling task Invoice --app billing"
    )]
    Task(TaskArgs),

    /// Generate a console command with launcher and optional container files.
    #[command(
        visible_alias = "c",
        about = "Generate a console command",
        after_help = "EXAMPLES:\n\
            \x20 seedling cmd worker\n\
            \x20 seedling cmd sync-users --docker\n\
            \x20 seedling cmd sync-users --docker-compose --override"
    )]
    Cmd(CmdArgs),

    /// Create a sibling app package with boot, cmd and config modules.
    #[command(
        about = "Generate a new app package",
        after_help = "EXAMPLES:\n\
            \x20 seedling startapp billing\n\
            \x20 seedling task Invoice --app billing"
    )]
    Startapp(StartAppArgs),

    /// Show how an identifier is segmented and cased.
    #[command(
        about = "Inspect identifier segmentation",
        after_help = "EXAMPLES:\n\
            \x20 seedling names HelloWorld\n\
            \x20 seedling names hello_world --output-format json"
    )]
    Names(NamesArgs),

    /// Initialise a Seedling configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 seedling init           # default location\n\
            \x20 seedling init --local   # .seedling.toml in CWD\n\
            \x20 seedling init --force   # replace an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 seedling completions bash > ~/.local/share/bash-completion/completions/seedling\n\
            \x20 seedling completions zsh  > ~/.zfunc/_seedling\n\
            \x20 seedling completions fish > ~/.config/fish/completions/seedling.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Seedling configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 seedling config get generation.strict\n\
            \x20 seedling config list\n\
            \x20 seedling config path"
    )]
    Config(ConfigCommands),
}

// ── shared location flags ─────────────────────────────────────────────────────

/// Where generation writes. Anything not given is discovered.
#[derive(Debug, Default, Args)]
pub struct LocationArgs {
    /// Project root; discovered by walking up from the current directory.
    #[arg(long = "project-dir", value_name = "DIR", help = "Project directory")]
    pub project_dir: Option<PathBuf>,

    /// Main package; read from `[tool.coverage.run] source` when omitted.
    #[arg(long = "package-dir", value_name = "DIR", help = "Main package directory")]
    pub package_dir: Option<PathBuf>,

    /// Generate into a sibling app package instead of the main one.
    #[arg(long = "app", value_name = "NAME", help = "Target app package")]
    pub app: Option<String>,

    /// Replace generated files that already exist.
    #[arg(
        long = "override",
        visible_alias = "force",
        help = "Overwrite generated files that already exist"
    )]
    pub overwrite: bool,
}

// ── task ──────────────────────────────────────────────────────────────────────

/// Arguments for `seedling task`.
#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Task class identifier, e.g. `SyncUsers` or `sync_users`.
    #[arg(value_name = "CLASS", help = "Task class name")]
    pub class: String,

    /// Display name returned by the task; defaults to CLASS.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Task display name")]
    pub name: Option<String>,

    /// Derive from `AsyncTask` and make `_run` a coroutine.
    #[arg(long = "async", help = "Generate an async task")]
    pub is_async: bool,

    #[command(flatten)]
    pub location: LocationArgs,
}

// ── cmd ───────────────────────────────────────────────────────────────────────

/// Arguments for `seedling cmd`.
#[derive(Debug, Args)]
pub struct CmdArgs {
    /// Command name as run via `poetry run <COMMAND>`.
    #[arg(value_name = "COMMAND", help = "Command name")]
    pub command: String,

    /// Extra import line for the generated entry point.
    #[arg(long = "extra-import", value_name = "LINE")]
    pub extra_import: Option<String>,

    /// Extra statement run after startup.
    #[arg(long = "extra-run", value_name = "LINE")]
    pub extra_run: Option<String>,

    /// Generate a Dockerfile.
    #[arg(long = "docker", help = "Generate a Dockerfile")]
    pub docker: bool,

    /// Generate a Dockerfile and a compose service.
    #[arg(long = "docker-compose", help = "Generate a Dockerfile and compose service")]
    pub docker_compose: bool,

    #[command(flatten)]
    pub location: LocationArgs,
}

// ── startapp ──────────────────────────────────────────────────────────────────

/// Arguments for `seedling startapp`.
#[derive(Debug, Args)]
pub struct StartAppArgs {
    /// App package identifier; the directory is its snake form.
    #[arg(value_name = "NAME", help = "App name")]
    pub name: String,

    #[command(flatten)]
    pub location: LocationArgs,
}

// ── names ─────────────────────────────────────────────────────────────────────

/// Arguments for `seedling names`.
#[derive(Debug, Args)]
pub struct NamesArgs {
    /// Identifiers to inspect.
    #[arg(value_name = "IDENT", required = true, help = "Identifier(s) to segment")]
    pub identifiers: Vec<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `seedling init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.seedling.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `seedling completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `seedling config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.strict`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn task_flags_parse() {
        let cli = Cli::parse_from([
            "seedling", "task", "SyncUsers", "--async", "--app", "billing", "--override",
        ]);
        let Commands::Task(args) = cli.command else {
            panic!("expected task");
        };
        assert_eq!(args.class, "SyncUsers");
        assert!(args.is_async);
        assert_eq!(args.location.app.as_deref(), Some("billing"));
        assert!(args.location.overwrite);
    }

    #[test]
    fn force_is_an_alias_for_override() {
        let cli = Cli::parse_from(["seedling", "cmd", "worker", "--force"]);
        let Commands::Cmd(args) = cli.command else {
            panic!("expected cmd");
        };
        assert!(args.location.overwrite);
        assert!(!args.docker_compose);
    }

    #[test]
    fn strict_is_global() {
        let cli = Cli::parse_from(["seedling", "cmd", "worker", "--strict"]);
        assert!(cli.global.strict);
    }

    #[test]
    fn startapp_takes_a_name() {
        let cli = Cli::parse_from(["seedling", "startapp", "billing", "--override"]);
        let Commands::Startapp(args) = cli.command else {
            panic!("expected startapp");
        };
        assert_eq!(args.name, "billing");
        assert!(args.location.overwrite);
    }

    #[test]
    fn names_requires_an_identifier() {
        assert!(Cli::try_parse_from(["seedling", "names"]).is_err());
    }
}
