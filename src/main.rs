use clap::Parser;

use version_bumper::cli::orchestration::{self, RunArgs};
use version_bumper::ui;

#[derive(clap::Parser)]
#[command(
    name = "version-bumper",
    about = "Bump the semantic version and tag the release based on the pull request title"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "Baseline version in x.y.z form, overriding the initial_version input"
    )]
    initial_version: Option<String>,

    #[arg(
        short,
        long,
        help = "Pull request title, overriding the workflow event payload"
    )]
    title: Option<String>,

    #[arg(
        short,
        long,
        help = "Repository to tag (defaults to GITHUB_WORKSPACE, then the current directory)"
    )]
    workdir: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("version-bumper {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let run_args = RunArgs {
        config_path: args.config,
        initial_version: args.initial_version,
        title: args.title,
        workdir: args.workdir,
        dry_run: args.dry_run,
    };

    // Single top-level catch: every failure becomes a diagnostic plus a
    // failed exit status, nothing escapes as a panic.
    if let Err(e) = orchestration::run(run_args) {
        ui::display_error(&format!("Action failed: {}", e));
        std::process::exit(1);
    }
}
