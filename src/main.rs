use chart_publish::areas::publisher::Publisher;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chart-publish",
    version = "0.1.0",
    about = "Publish the chart archives packaged by a commit to a Helm repository tree",
    long_about = "This tool stages the files a commit changed under app/, regenerates the \
    Helm repository index for the staged archives, and publishes both into a \
    destination tree served as a chart repository. It is meant to run once per \
    build event, typically from a GitHub Actions workflow.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, value_name = "PATH", help = "The source directory the build ran in")]
    source_dir: PathBuf,
    #[arg(long, value_name = "PATH", help = "The destination directory to publish into")]
    destination_dir: PathBuf,
    #[arg(
        long,
        value_name = "BRANCH",
        help = "Branch of the destination repository, used to build the public download URL"
    )]
    destination_branch: String,
    #[arg(
        long,
        env = "GITHUB_SHA",
        default_value = "HEAD",
        help = "The commit whose changed files are published"
    )]
    commit: String,
    #[arg(
        long,
        env = "GITHUB_REPOSITORY_OWNER",
        help = "Owner of the destination repository, used to build the public download URL"
    )]
    repo_owner: String,
}

fn main() {
    let cli = Cli::parse();

    let result = Publisher::new(
        &cli.source_dir,
        &cli.destination_dir,
        Box::new(std::io::stdout()),
    )
    .and_then(|publisher| {
        publisher.publish(&cli.commit, &cli.destination_branch, &cli.repo_owner)
    });

    // report the first fatal condition once and die
    if let Err(err) = result {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        if running_in_github_actions() {
            // surfaced as a workflow error annotation
            println!("::error::{err:#}");
        }
        std::process::exit(1);
    }
}

fn running_in_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some_and(|value| value == "true")
}
