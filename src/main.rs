use anyhow::Result;
use clap::{Parser, Subcommand};
use nit::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "nit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal version-control tool",
    long_about = "A minimal version-control tool: a content-addressed object store, \
    a commit graph, branch refs, a staging index, and commands to navigate and \
    synchronize history across local remotes.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(name = "status", about = "Show staged files and unstaged changes")]
    Status,
    #[command(
        name = "add",
        about = "Stage a file, or every file under a directory"
    )]
    Add {
        #[arg(index = 1, help = "The file or directory to stage")]
        path: String,
    },
    #[command(name = "commit", about = "Create a new commit with the specified message")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "config", about = "Show or update the committer identity")]
    Config {
        #[arg(long, help = "The committer name")]
        name: Option<String>,
        #[arg(long, help = "The committer email")]
        email: Option<String>,
    },
    #[command(name = "log", about = "Show history from HEAD, first parents only")]
    Log,
    #[command(name = "branch", about = "List, create, or delete branches")]
    Branch {
        #[arg(index = 1, help = "The branch to create")]
        name: Option<String>,
        #[arg(
            short = 'd',
            long = "delete",
            value_name = "NAME",
            help = "Delete the named branch"
        )]
        delete: Option<String>,
        #[arg(short, long, help = "Force deletion of an unmerged branch")]
        force: bool,
    },
    #[command(name = "checkout", about = "Switch to a branch and materialize its tree")]
    Checkout {
        #[arg(short = 'b', help = "Create the branch before switching")]
        create: bool,
        #[arg(index = 1, help = "The branch to switch to")]
        name: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current one")]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(name = "diff", about = "Show unstaged changes, or staged ones with --staged")]
    Diff {
        #[arg(long, help = "Compare the index against HEAD instead")]
        staged: bool,
    },
    #[command(name = "reset", about = "Remove a path from the staging index")]
    Reset {
        #[arg(index = 1, help = "The path to unstage")]
        path: String,
    },
    #[command(name = "rm", about = "Delete a working file and unstage it")]
    Rm {
        #[arg(index = 1, help = "The path to remove")]
        path: String,
    },
    #[command(name = "stash", about = "Park the working tree, list or pop stashes")]
    Stash {
        #[command(subcommand)]
        action: Option<StashCommands>,
    },
    #[command(name = "remote", about = "Manage the configured remotes")]
    Remote {
        #[command(subcommand)]
        action: Option<RemoteCommands>,
    },
    #[command(name = "fetch", about = "Copy missing objects and track a remote's branches")]
    Fetch {
        #[arg(index = 1, help = "The remote to fetch from")]
        remote: String,
    },
    #[command(name = "push", about = "Copy objects to a remote and overwrite its branch head")]
    Push {
        #[arg(index = 1, help = "The remote to push to")]
        remote: String,
        #[arg(index = 2, help = "The branch to push")]
        branch: String,
    },
    #[command(name = "pull", about = "Fetch, then fast-forward or merge the remote branch")]
    Pull {
        #[arg(index = 1, help = "The remote to pull from")]
        remote: String,
        #[arg(index = 2, help = "The branch to pull")]
        branch: String,
    },
}

#[derive(Subcommand)]
enum StashCommands {
    #[command(name = "list", about = "List stash slots in numeric order")]
    List,
    #[command(name = "pop", about = "Restore and drop the most recent stash")]
    Pop,
}

#[derive(Subcommand)]
enum RemoteCommands {
    #[command(name = "add", about = "Record a remote's connection string")]
    Add {
        #[arg(index = 1, help = "The remote name")]
        name: String,
        #[arg(index = 2, help = "The remote URL (file://<metadata dir>)")]
        url: String,
    },
    #[command(name = "list", about = "List configured remotes")]
    List,
}

fn repository_at_pwd() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => {
                    if !std::path::Path::new(path).exists() {
                        std::fs::create_dir_all(path)?;
                    }
                    Repository::new(path, Box::new(std::io::stdout()))?
                }
                None => repository_at_pwd()?,
            };

            repository.init()?
        }
        Commands::Status => repository_at_pwd()?.status()?,
        Commands::Add { path } => repository_at_pwd()?.add(path)?,
        Commands::Commit { message } => repository_at_pwd()?.commit(message)?,
        Commands::Config { name, email } => {
            repository_at_pwd()?.config(name.as_deref(), email.as_deref())?
        }
        Commands::Log => repository_at_pwd()?.log()?,
        Commands::Branch {
            name,
            delete,
            force,
        } => repository_at_pwd()?.branch(name.as_deref(), delete.as_deref(), *force)?,
        Commands::Checkout { create, name } => repository_at_pwd()?.checkout(name, *create)?,
        Commands::Merge { branch } => repository_at_pwd()?.merge(branch)?,
        Commands::Diff { staged } => repository_at_pwd()?.diff(*staged)?,
        Commands::Reset { path } => repository_at_pwd()?.reset(path)?,
        Commands::Rm { path } => repository_at_pwd()?.rm(path)?,
        Commands::Stash { action } => match action {
            None => repository_at_pwd()?.stash_save()?,
            Some(StashCommands::List) => repository_at_pwd()?.stash_list()?,
            Some(StashCommands::Pop) => repository_at_pwd()?.stash_pop()?,
        },
        Commands::Remote { action } => match action {
            Some(RemoteCommands::Add { name, url }) => {
                repository_at_pwd()?.remote_add(name, url)?
            }
            Some(RemoteCommands::List) | None => repository_at_pwd()?.remote_list()?,
        },
        Commands::Fetch { remote } => repository_at_pwd()?.fetch(remote)?,
        Commands::Push { remote, branch } => repository_at_pwd()?.push(remote, branch)?,
        Commands::Pull { remote, branch } => repository_at_pwd()?.pull(remote, branch)?,
    }

    Ok(())
}
