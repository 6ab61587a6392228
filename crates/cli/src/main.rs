//! LifeOS CLI - goal tracking with predictive analytics.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing::Level;

use lifeos_analytics::{analyze_goals, GoalHealth};
use lifeos_core::{Activity, ActivityId, ActivityStatus, EffortLevel, Goal, GoalMetric, GoalStatus};
use lifeos_storage::{JsonStorage, Storage};

#[derive(Parser)]
#[command(name = "lifeos")]
#[command(about = "Personal goal tracking and analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },
    /// Log a completed activity against a goal
    Log {
        /// Activity name
        name: String,
        /// Goal ID the work counts toward
        #[arg(long)]
        goal: String,
        /// Work delta applied toward the goal metric (may be negative)
        #[arg(long)]
        work: f64,
        /// Effort level: low, medium, high, intense
        #[arg(long)]
        effort: Option<String>,
        /// Calendar day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List logged activities
    Activities {
        /// Restrict to one goal
        #[arg(long)]
        goal: Option<String>,
    },
    /// Print the goal health report, most severe first
    Health {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum GoalCommands {
    /// Add a new goal
    Add {
        /// Goal title
        title: String,
        /// Metric name, e.g. "Pages Read"
        #[arg(long)]
        metric: Option<String>,
        /// Metric unit, e.g. "pages"
        #[arg(long, default_value = "units")]
        unit: String,
        /// Current metric value
        #[arg(long, default_value = "0")]
        current: f64,
        /// Target metric value
        #[arg(long)]
        target: Option<f64>,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        target_date: Option<NaiveDate>,
    },
    /// List goals
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let storage_path = std::path::PathBuf::from(".lifeos");
    let mut storage = JsonStorage::new(&storage_path).await?;

    match cli.command {
        Commands::Goal { action } => match action {
            GoalCommands::Add {
                title,
                metric,
                unit,
                current,
                target,
                target_date,
            } => {
                let mut goal = Goal::new(title, Utc::now());
                goal.status = GoalStatus::InProgress;
                goal.target_date = target_date;
                if let (Some(name), Some(target)) = (metric, target) {
                    goal.metric = Some(GoalMetric {
                        name,
                        unit,
                        current,
                        target,
                    });
                }
                storage.save_goal(&goal).await?;
                println!("Added goal: {} - {}", goal.id, goal.title);
            }
            GoalCommands::List => {
                let goals = storage.list_goals().await?;
                println!("Goals ({})", goals.len());
                for goal in goals {
                    let metric = goal
                        .metric
                        .map(|m| format!("{:.1}/{:.1} {}", m.current, m.target, m.unit))
                        .unwrap_or_else(|| "no metric".to_string());
                    println!("  {} | {} | {}", goal.id, metric, goal.title);
                }
            }
        },
        Commands::Log {
            name,
            goal,
            work,
            effort,
            date,
        } => {
            let goal_id = goal
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid goal ID"))?;
            let Some(goal) = storage.load_goal(goal_id).await? else {
                println!("Goal not found");
                return Ok(());
            };

            let activity = Activity {
                id: ActivityId::new(),
                name,
                date: date.unwrap_or_else(|| Utc::now().date_naive()),
                status: ActivityStatus::Complete,
                goal_id: Some(goal.id),
                work_completed: Some(work),
                effort_level: effort.as_deref().map(parse_effort).transpose()?,
            };
            storage.save_activity(&activity).await?;
            println!("Logged: {} ({:+} toward {})", activity.name, work, goal.title);
        }
        Commands::Activities { goal } => {
            let goal_id = goal
                .map(|g| g.parse().map_err(|_| anyhow::anyhow!("Invalid goal ID")))
                .transpose()?;
            let activities = storage.list_activities(goal_id).await?;

            println!("Activities ({})", activities.len());
            for activity in activities {
                println!(
                    "  {} | {} | {:?} | {:+} | {}",
                    activity.id,
                    activity.date,
                    activity.status,
                    activity.work_completed.unwrap_or(0.0),
                    activity.name,
                );
            }
        }
        Commands::Health { json } => {
            let goals = storage.list_goals().await?;
            let activities = storage.list_activities(None).await?;
            let report = analyze_goals(&goals, &activities, Utc::now());

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.is_empty() {
                println!("No quantifiable goals. Add a goal with --metric and --target.");
            } else {
                for health in report {
                    print_health(&health);
                }
            }
        }
    }

    Ok(())
}

fn parse_effort(s: &str) -> Result<EffortLevel> {
    match s.to_lowercase().as_str() {
        "low" => Ok(EffortLevel::Low),
        "medium" => Ok(EffortLevel::Medium),
        "high" => Ok(EffortLevel::High),
        "intense" => Ok(EffortLevel::Intense),
        other => anyhow::bail!("Unknown effort level: {other}"),
    }
}

fn print_health(health: &GoalHealth) {
    println!("{:?} | {}", health.risk.level, health.title);
    println!(
        "  pace {:.2}/day (required {:.2}/day, {:?})",
        health.velocity.current, health.velocity.required, health.velocity.trend,
    );
    match &health.prediction.projection {
        Some(p) => println!(
            "  projected completion {} ({}..{}), {} days out",
            p.completion_date, p.optimistic, p.pessimistic, p.days_remaining,
        ),
        None => println!("  no projection (no progress in the last 7 days)"),
    }
    for reason in &health.risk.reasons {
        println!("  - {reason}");
    }
}
