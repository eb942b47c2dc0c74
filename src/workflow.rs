use crate::agents::{GitAgent, VersionControl, Workspace};
use crate::branches::{BranchAggregator, ProjectBranches};
use crate::cli::UpdateTarget;
use crate::config::{ReleaseConfig, ReleaseModel};
use crate::error::{ReleaseError, Result};
use crate::logger::ConsoleLogger;
use crate::model::{Phase, TrainIteration};
use crate::tracker::TrackerFactory;
use crate::update::{UpdateOperations, UpdateReport, UpdateSettings};
use colored::Colorize;
use std::path::Path;

/// Execute the update workflow for one train iteration
pub fn execute_update<P: AsRef<Path>>(
    config_path: P,
    target: UpdateTarget,
    train: &str,
    iteration: &str,
    phase: Phase,
) -> Result<()> {
    println!(
        "{}",
        format!("Updating {train} {iteration} ({phase})...").cyan().bold()
    );

    // Step 1: Load configuration
    let (config, model) = load_configuration(config_path.as_ref())?;

    // Step 2: Resolve the train iteration
    println!("\n{}", "2. Resolving train iteration...".yellow());
    let train_iteration = resolve_iteration(&model, train, iteration)?;
    for module in train_iteration.modules() {
        println!(
            "   • {} ({})",
            module.display().bright_cyan(),
            module.version().to_string().dimmed()
        );
    }

    let workspace = Workspace::new(&config.workspace.root)?;
    let git = GitAgent::new(workspace.root())?;

    // Step 3: Check Git status before anything gets committed
    if commits_changes(target, phase) {
        println!("\n{}", "3. Checking Git status...".yellow());
        for module in train_iteration.modules() {
            let project = module.project();
            if !workspace.project_directory(project).join(".git").exists() {
                continue;
            }
            if !git.is_working_directory_clean(project)? {
                println!(
                    "{}",
                    format!(
                        "⚠ Warning: {} has uncommitted changes",
                        workspace.project_directory(project).display()
                    )
                    .red()
                );
                println!("Please commit or stash your changes before proceeding.");
                return Ok(());
            }
        }
        println!("{}", "✓ Working directories are clean".green());
    } else {
        println!("\n{}", "3. No commits required, skipping Git checks".yellow());
    }

    // Step 4: Apply the updates
    println!("\n{}", "4. Applying updates...".yellow());
    let settings = UpdateSettings::from_config(&config, &model)?;
    let tracker = TrackerFactory::create(&config.tracker)?;
    let logger = ConsoleLogger::new();
    let operations = UpdateOperations::new(&workspace, &logger, &git, tracker.as_ref(), &settings);

    let report = run_update(&operations, &train_iteration, target, phase)?;
    println!("{}", "✓ Update completed".green());

    print_update_report(&report);

    println!(
        "\n{}",
        "✨ Update process completed successfully!".green().bold()
    );
    Ok(())
}

fn commits_changes(target: UpdateTarget, phase: Phase) -> bool {
    match target {
        UpdateTarget::Changelog => true,
        UpdateTarget::All => phase == Phase::Prepare,
        _ => false,
    }
}

fn run_update(
    operations: &UpdateOperations<'_>,
    iteration: &TrainIteration,
    target: UpdateTarget,
    phase: Phase,
) -> Result<UpdateReport> {
    match target {
        UpdateTarget::Gradle => operations.update_gradle(iteration, phase),
        UpdateTarget::Build => operations.update_build_files(iteration, phase),
        UpdateTarget::Docs => operations.update_docs_index(iteration),
        UpdateTarget::Changelog => operations.update_changelog(iteration),
        UpdateTarget::Notice => operations.update_notice(iteration),
        UpdateTarget::All => operations.update_all(iteration, phase),
    }
}

/// List ticket branches across a train, or a single project of it
pub fn execute_branches<P: AsRef<Path>>(
    config_path: P,
    train: &str,
    project: Option<&str>,
) -> Result<()> {
    println!(
        "{}",
        format!("Collecting ticket branches of {train}...").cyan().bold()
    );

    let (config, model) = load_configuration(config_path.as_ref())?;
    let train = model.train(train)?;

    println!("\n{}", "2. Querying repositories and issue tracker...".yellow());
    let workspace = Workspace::new(&config.workspace.root)?;
    let git = GitAgent::new(workspace.root())?;
    let tracker = TrackerFactory::create(&config.tracker)?;
    let aggregator = BranchAggregator::new(&git, tracker.as_ref());

    let results = match project {
        Some(key) => {
            let project = model.project(key)?;
            if !train.contains(project) {
                return Err(ReleaseError::UnknownProject(format!(
                    "{key} is not part of train {}",
                    train.name()
                )));
            }
            vec![aggregator.for_project(project)?]
        }
        None => aggregator.for_train(train)?,
    };
    println!("{}", "✓ Lookup completed".green());

    print_branches(&results);
    Ok(())
}

fn print_branches(results: &[ProjectBranches]) {
    let total: usize = results.iter().map(ProjectBranches::len).sum();
    if total == 0 {
        println!("\n{}", "✨ No ticket branches found!".green().bold());
        return;
    }

    println!("\n{}", "Ticket branches:".cyan().bold());
    for project in results.iter().filter(|p| !p.is_empty()) {
        println!("\n{}:", project.project.full_name().cyan());
        for entry in &project.entries {
            let location = if entry.branch.remote { "remote" } else { "local" };
            match &entry.ticket {
                Some(ticket) => {
                    let status = if ticket.resolved {
                        ticket.status.green()
                    } else {
                        ticket.status.yellow()
                    };
                    println!(
                        "  • {} [{}] {} ({})",
                        entry.branch.name.white().bold(),
                        status,
                        ticket.summary,
                        location.dimmed()
                    );
                }
                None => println!(
                    "  • {} {} ({})",
                    entry.branch.name.white().bold(),
                    "[unknown ticket]".red(),
                    location.dimmed()
                ),
            }
        }
    }

    let resolved: usize = results.iter().map(|p| p.resolved().count()).sum();
    println!("\n{}", "Summary:".cyan().bold());
    println!("  {} ticket branches", total.to_string().yellow());
    println!("  {} with resolved tickets", resolved.to_string().yellow());
}

/// Print the changelog of one module iteration
pub fn execute_changelog<P: AsRef<Path>>(
    config_path: P,
    train: &str,
    iteration: &str,
    project: &str,
) -> Result<()> {
    let (config, model) = load_configuration(config_path.as_ref())?;
    let train_iteration = resolve_iteration(&model, train, iteration)?;
    let project = model.project(project)?;
    let module = train_iteration.module(project).ok_or_else(|| {
        ReleaseError::UnknownProject(format!("{} is not part of train {train}", project.key()))
    })?;

    println!("\n{}", "2. Fetching tickets from the issue tracker...".yellow());
    let tracker = TrackerFactory::create(&config.tracker)?;
    let changelog = tracker.changelog_for(module)?;
    println!(
        "{}",
        format!("✓ {} ticket(s) found", changelog.tickets().len()).green()
    );

    println!("\n{changelog}");
    Ok(())
}

/// List tickets referenced in commits between the previous iteration and this one
pub fn execute_tickets<P: AsRef<Path>>(
    config_path: P,
    train: &str,
    iteration: &str,
    project: &str,
) -> Result<()> {
    let (config, model) = load_configuration(config_path.as_ref())?;
    let train_iteration = resolve_iteration(&model, train, iteration)?;
    let project = model.project(project)?;
    let module = train_iteration.module(project).ok_or_else(|| {
        ReleaseError::UnknownProject(format!("{} is not part of train {train}", project.key()))
    })?;
    let previous = train_iteration.previous();
    let previous_module = previous.as_ref().and_then(|p| p.module(project));

    println!("\n{}", "2. Scanning commit history...".yellow());
    let workspace = Workspace::new(&config.workspace.root)?;
    let git = GitAgent::new(workspace.root())?;
    let references = git.ticket_references_between(project, previous_module, module)?;
    match previous_module {
        Some(from) => println!("   Range: {}..{}", from.release_tag(), module.release_tag()),
        None => println!("   Range: start of history..{}", module.release_tag()),
    }

    if references.is_empty() {
        println!("\n{}", "No ticket references found".yellow());
        return Ok(());
    }

    println!("\n{}", "3. Looking up tickets...".yellow());
    let tracker = TrackerFactory::create(&config.tracker)?;
    let ids: Vec<String> = references.iter().map(|r| r.id.clone()).collect();
    let tickets = tracker.find_tickets(project, &ids)?;

    println!("\n{}", format!("Tickets for {module}:").cyan().bold());
    for reference in &references {
        match tickets.iter().find(|t| t.id == reference.id) {
            Some(ticket) => {
                println!("  • {} {}", ticket, format!("[{}]", ticket.status).dimmed())
            }
            None => println!("  • {} {}", reference.id.white().bold(), "[not found]".red()),
        }
    }
    Ok(())
}

/// Show a train's modules, either per iteration or with versions at one iteration
pub fn execute_train<P: AsRef<Path>>(
    config_path: P,
    train: &str,
    iteration: Option<&str>,
) -> Result<()> {
    let (_, model) = load_configuration(config_path.as_ref())?;

    match iteration {
        Some(iteration) => {
            let train_iteration = resolve_iteration(&model, train, iteration)?;
            println!("\n{}", format!("{train_iteration}:").cyan().bold());
            for module in train_iteration.modules() {
                println!(
                    "  • {:<30} {}",
                    module.project().full_name().white().bold(),
                    module.version().to_string().green()
                );
            }
        }
        None => {
            let train = model.train(train)?;
            println!("\n{}", format!("{}:", train.name()).cyan().bold());
            for module in train.modules() {
                println!(
                    "  • {:<30} {}",
                    module.project().full_name().white().bold(),
                    module.base_version().green()
                );
            }
            let iterations: Vec<String> =
                train.iterations().iter().map(ToString::to_string).collect();
            println!("\n  Iterations: {}", iterations.join(", ").yellow());
        }
    }
    Ok(())
}

fn load_configuration(path: &Path) -> Result<(ReleaseConfig, ReleaseModel)> {
    println!("\n{}", "1. Loading configuration...".yellow());
    if !path.is_file() {
        return Err(ReleaseError::NotFound(path.to_path_buf()));
    }

    let config = ReleaseConfig::load(path)?;
    let model = config.resolve()?;
    println!(
        "{}",
        format!(
            "✓ {} projects, {} trains",
            model.projects.len(),
            model.trains.len()
        )
        .green()
    );
    Ok((config, model))
}

fn resolve_iteration(
    model: &ReleaseModel,
    train: &str,
    iteration: &str,
) -> Result<TrainIteration> {
    let train = model.train(train)?;
    let iteration = train.iteration(iteration)?;
    train.at(iteration)
}

fn print_update_report(report: &UpdateReport) {
    if report.is_empty() {
        println!("\n{}", "No files needed changes".yellow());
        return;
    }

    println!("\n{}", "Update Summary:".cyan().bold());
    println!(
        "{}",
        format!("Total updates: {}", report.total_updates()).green()
    );

    let mut current_module: Option<&str> = None;
    for update in report.updates() {
        if current_module != Some(update.module.as_str()) {
            println!("\n{}:", update.module.cyan());
            current_module = Some(update.module.as_str());
        }
        println!(
            "  • {} {}",
            update.file.white().bold(),
            update.description.green()
        );
    }
}
