use clap::{Parser, Subcommand, ValueEnum};
use gravity::{
    candidate_paths, find_installed_path, generate_all, generate_editor_config,
    generate_omnisharp_config, generate_vscode_settings, is_valid_path, logging,
    AntigravityEditor, EditorError, JsonPreferenceStore, KnownDirs, NoopSync, OsKind,
};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "gravity")]
#[command(about = "A CLI tool for opening projects in the Antigravity editor")]
struct Cli {
    /// Project root handed to the editor (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    project: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the auto-detected Antigravity executable without saving it
    Detect {
        /// Operating system layout to search (defaults to the running one)
        #[arg(long)]
        os: Option<OsKind>,
    },
    /// List installation locations in the order they are searched
    Candidates {
        /// Operating system layout to list (defaults to the running one)
        #[arg(long)]
        os: Option<OsKind>,
    },
    /// Auto-detect the Antigravity executable and save it
    ResetPath,
    /// Save an explicit Antigravity executable path
    SetPath {
        /// Path to the Antigravity executable
        path: PathBuf,
    },
    /// Show the saved Antigravity executable
    #[command(name = "path")]
    ShowPath,
    /// List Antigravity installations, detecting one if none is saved
    Installations,
    /// Open a file, optionally at a line and column, or the project
    Open {
        /// File to open; opens the project folder when omitted
        file: Option<PathBuf>,
        /// 1-based line to jump to
        #[arg(long, default_value_t = 0)]
        line: u32,
        /// 1-based column to jump to
        #[arg(long, default_value_t = 0)]
        column: u32,
    },
    /// Open a folder on its own
    OpenFolder {
        /// Folder to open
        dir: PathBuf,
    },
    /// Open the project folder
    OpenProject,
    /// Write editor configuration files into the project
    Generate {
        /// Which file to write
        #[arg(value_enum, default_value_t = ConfigFile::All)]
        file: ConfigFile,
    },
    /// Synchronize project files
    Sync,
}

#[derive(Clone, Copy, ValueEnum)]
enum ConfigFile {
    All,
    Omnisharp,
    Editorconfig,
    Vscode,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let project_root = match cli.project.as_deref() {
        Some(dir) => absolute(dir),
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => exit_with_error("Error getting current directory", e),
        },
    };

    match &cli.command {
        Commands::Detect { os } => {
            let os = target_os(*os);
            match find_installed_path(os, &KnownDirs::from_env()) {
                Some(path) => println!("{}", path.display()),
                None => println!("No Antigravity installation found for {}", os),
            }
        }
        Commands::Candidates { os } => {
            let os = target_os(*os);
            for candidate in candidate_paths(os, &KnownDirs::from_env()) {
                if candidate.is_file() {
                    println!("{} (found)", candidate.display());
                } else {
                    println!("{}", candidate.display());
                }
            }
        }
        Commands::ResetPath => match open_editor(&project_root).reset_path() {
            Ok(path) => println!("Antigravity path set to: {}", path.display()),
            Err(e) => exit_with_error("Error detecting Antigravity", e),
        },
        Commands::SetPath { path } => {
            let path = absolute(path);
            if !is_valid_path(Some(&path)) {
                exit_with_error("Error setting editor path", EditorError::PathInvalid(path));
            }

            let mut editor = open_editor(&project_root);
            if editor.try_get_installation_for_path(&path).is_none() {
                eprintln!(
                    "Warning: '{}' does not look like an Antigravity executable",
                    path.display()
                );
            }

            match editor.set_editor_path(&path) {
                Ok(()) => println!("Antigravity path set to: {}", path.display()),
                Err(e) => exit_with_error("Error setting editor path", e),
            }
        }
        Commands::ShowPath => match open_editor(&project_root).editor_path() {
            Some(path) if is_valid_path(Some(&path)) => println!("{}", path.display()),
            Some(path) => println!("{} (missing)", path.display()),
            None => println!("(Not Set)"),
        },
        Commands::Installations => {
            for installation in open_editor(&project_root).installations() {
                if installation.is_configured() {
                    println!("{}: {}", installation.name, installation.path.display());
                } else {
                    println!("{}", installation.name);
                }
            }
        }
        Commands::Open { file, line, column } => {
            let file = file.as_deref().map(absolute);
            let mut editor = open_editor(&project_root);
            match editor.open_file(file.as_deref(), *line, *column) {
                Ok(()) => println!(
                    "Opened {} in Antigravity",
                    file.as_deref().unwrap_or(&project_root).display()
                ),
                Err(e) => exit_with_error("Error opening editor", e),
            }
        }
        Commands::OpenFolder { dir } => {
            let dir = absolute(dir);
            match open_editor(&project_root).open_path(&dir, true) {
                Ok(()) => println!("Opened {} in Antigravity", dir.display()),
                Err(e) => exit_with_error("Error opening folder", e),
            }
        }
        Commands::OpenProject => {
            let mut editor = open_editor(&project_root);
            match editor.open_project_folder() {
                Ok(()) => println!("Opened {} in Antigravity", editor.project_root().display()),
                Err(e) => exit_with_error("Error opening project", e),
            }
        }
        Commands::Generate { file } => {
            let result = match file {
                ConfigFile::All => generate_all(&project_root),
                ConfigFile::Omnisharp => generate_omnisharp_config(&project_root).map(|p| vec![p]),
                ConfigFile::Editorconfig => generate_editor_config(&project_root).map(|p| vec![p]),
                ConfigFile::Vscode => generate_vscode_settings(&project_root).map(|p| vec![p]),
            };
            match result {
                Ok(paths) => {
                    for path in paths {
                        println!("Generated: {}", path.display());
                    }
                }
                Err(e) => exit_with_error("Error generating configuration files", e),
            }
        }
        Commands::Sync => {
            open_editor(&project_root).sync_all();
            println!("Project files synchronized");
        }
    }
}

/// Builds the editor integration backed by the user's preference file
fn open_editor(project_root: &Path) -> AntigravityEditor<JsonPreferenceStore> {
    let store = match JsonPreferenceStore::open_default() {
        Ok(store) => store,
        Err(e) => exit_with_error("Error locating preferences", e),
    };
    AntigravityEditor::new(
        store,
        NoopSync,
        OsKind::current(),
        KnownDirs::from_env(),
        project_root,
    )
}

fn target_os(requested: Option<OsKind>) -> OsKind {
    match requested.or_else(OsKind::current) {
        Some(os) => os,
        None => exit_with_error(
            "Error detecting operating system",
            "unsupported platform, pass --os windows|macos|linux",
        ),
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn exit_with_error(context: &str, err: impl Display) -> ! {
    eprintln!("{}: {}", context, err);
    process::exit(1);
}
