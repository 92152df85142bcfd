//! Build command orchestration: load config, plan, execute, report.

use crate::cli::style::{Stylize, arrow, check};
use crate::cli::{Cli, CliProgress};
use anstream::println;
use cherrytree::config::load_config;
use cherrytree::error::Result;
use cherrytree::release::{BuildOptions, BuildOutcome, create_build_plan, execute_build};
use cherrytree::run::SystemRunner;
use terminal_link::Link;
use tracing::debug;

/// Run one release build from parsed CLI arguments.
pub fn run_build(cli: &Cli) -> Result<()> {
    let config = load_config(&cli.config)?;

    let options = BuildOptions {
        deploy_branch: cli.deploy_branch.clone(),
        commit_msg: cli.commit_msg.clone(),
    };
    let plan = create_build_plan(&config, &options);

    if cli.dry_run {
        println!("{}:", "Build plan".emphasis());
        println!();
        for step in plan.describe_steps() {
            println!("  {} {step}", arrow());
        }
        println!();
        println!("{}", "Dry run complete".muted());
        return Ok(());
    }

    let progress = CliProgress::new();
    let runner = SystemRunner;

    let outcome = match execute_build(&plan, &runner, &cli.path, &progress) {
        Ok(outcome) => outcome,
        Err(e) => {
            progress.clear();
            return Err(e);
        }
    };

    progress.finish(format!(
        "{} Force-pushed {} to {}",
        check(),
        outcome.deploy_branch.accent(),
        plan.push_remote.emphasis()
    ));

    print_summary(&config.version, config.next_patch_version(), &outcome);

    if !cli.no_open {
        open_compare_page(&outcome.compare_url);
    }

    Ok(())
}

fn print_summary(
    version: &str,
    next_version: Option<String>,
    outcome: &BuildOutcome,
) {
    println!();
    println!(
        "{} {} squashed into one commit titled {}",
        format!("{} Build complete:", check()).success(),
        format!("{} cherries", outcome.cherries_applied).accent(),
        version.emphasis()
    );
    if let Some(next) = next_version {
        println!("  {}", format!("next version hint: {next}").muted());
    }

    let link_text = format!("Open a PR for {}", outcome.outer_branch);
    if supports_hyperlinks::supports_hyperlinks() {
        println!("  {} {}", arrow(), Link::new(&link_text, &outcome.compare_url));
    } else {
        println!("  {} {}: {}", arrow(), link_text, outcome.compare_url.accent());
    }
}

/// Open the PR comparison page; failure is never checked (🚢).
fn open_compare_page(url: &str) {
    println!("{}", "Redirecting you to github for PR creation 🚢".muted());
    if let Err(e) = webbrowser::open(url) {
        debug!(url, error = %e, "failed to open browser");
    }
}
