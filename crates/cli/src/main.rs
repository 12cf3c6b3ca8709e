//! TaskFlow CLI - project progress and performance reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use taskflow_core::{Priority, Project, WorkStatus};
use taskflow_scoring::{PerformanceCalculator, PerformanceReport, ProgressCalculator, ProgressReport};
use taskflow_storage::{JsonStorage, Storage};

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = "Project progress and performance scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import projects from a JSON snapshot file
    Import {
        /// Path to a JSON array of projects
        file: std::path::PathBuf,
    },
    /// List stored projects
    List,
    /// Show the progress report for one project
    Progress {
        /// Project ID
        id: String,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the portfolio performance report
    Performance {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    // Open storage
    let storage_path = std::path::PathBuf::from(".taskflow");
    let mut storage = JsonStorage::new(&storage_path).await?;

    match cli.command {
        Commands::Import { file } => {
            let json = tokio::fs::read_to_string(&file).await?;
            let projects: Vec<Project> = serde_json::from_str(&json)?;
            let count = projects.len();
            for project in &projects {
                storage.save_project(project).await?;
            }
            storage.commit("Import projects").await?;
            info!(count, "imported projects");
            println!("Imported {} project(s) from {}", count, file.display());
        }
        Commands::List => {
            let projects = storage.list_projects().await?;
            let calc = ProgressCalculator;

            println!("Projects ({})", projects.len());
            for project in projects {
                let report = calc.project_report(&project);
                println!(
                    "  {} | {} | {:>5.1}% | {}",
                    project.id,
                    project.status,
                    report.progress_percentage,
                    project.name,
                );
            }
        }
        Commands::Progress { id, json } => {
            let project_id = id
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid project ID"))?;
            let Some(project) = storage.load_project(project_id).await? else {
                println!("Project not found");
                return Ok(());
            };

            let report = ProgressCalculator.project_report(&project);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_progress(&report);
            }
        }
        Commands::Performance { json } => {
            let projects = storage.list_projects().await?;
            let report = PerformanceCalculator::new().evaluate(&projects);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_performance(&report);
            }
        }
    }

    Ok(())
}

fn print_progress(report: &ProgressReport) {
    println!("Project: {} ({})", report.project_name, report.project_id);
    println!(
        "  Progress: {:.1}% weighted, {:.1}% simple",
        report.progress_percentage, report.simple_progress_percentage,
    );
    println!(
        "  Phases: {}, Tasks: {}",
        report.total_phases, report.total_tasks
    );

    println!("  By status:");
    for status in WorkStatus::ALL {
        if let Some(entry) = report.status_breakdown.get(&status) {
            println!(
                "    {:<10} {:>3} ({:.1}%)",
                status.as_str(),
                entry.count,
                entry.percentage
            );
        }
    }

    println!("  By priority:");
    for priority in Priority::ALL {
        if let Some(entry) = report.priority_breakdown.get(&priority) {
            println!(
                "    {:<10} {:>3} ({:.1}%)",
                priority.as_str(),
                entry.count,
                entry.percentage
            );
        }
    }

    println!("  Phases:");
    for phase in &report.phases {
        println!(
            "    {:<20} {:>5.1}% ({} tasks)",
            phase.name, phase.weighted_progress, phase.task_count
        );
    }

    if !report.insights.is_empty() {
        println!("  Insights:");
        for insight in &report.insights {
            println!("    - {}", insight);
        }
    }
}

fn print_performance(report: &PerformanceReport) {
    println!(
        "Overall: {:.2} ({}) across {} project(s)",
        report.overall_score, report.grade, report.total_projects
    );

    for (name, metric) in [
        ("Completion", &report.completion),
        ("Time", &report.time),
        ("Progress", &report.progress),
    ] {
        match &metric.note {
            Some(note) => println!(
                "  {:<10} {:>6.1} x {:.2} ({})",
                name, metric.score, metric.weight, note
            ),
            None => println!("  {:<10} {:>6.1} x {:.2}", name, metric.score, metric.weight),
        }
    }

    if !report.deliveries.is_empty() {
        println!("  Deliveries:");
        for delivery in &report.deliveries {
            println!(
                "    {:<20} {} ({} day(s) late)",
                delivery.project_name, delivery.timing, delivery.days_late
            );
        }
    }

    if !report.insights.is_empty() {
        println!("  Insights:");
        for insight in &report.insights {
            println!("    - {}", insight);
        }
    }

    if !report.recommendations.is_empty() {
        println!("  Recommendations:");
        for recommendation in &report.recommendations {
            println!("    - {}", recommendation);
        }
    }
}
