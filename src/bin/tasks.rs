use chrono::{DateTime, Datelike, Utc};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use task_manager::client::{TaskStore, TasksClient};
use task_manager::routes::tasks::dto::{StatusFilter, UpdateTask};
use task_manager::routes::tasks::model::Task;

#[derive(Parser)]
#[command(name = "tasks", about = "Terminal dashboard for the task manager API")]
struct Cli {
    #[arg(long, env = "TASKS_API_URL", default_value = "http://127.0.0.1:5000")]
    api_url: String,

    /// Bearer token identifying the user, issued by the auth service.
    #[arg(long, env = "TASKS_TOKEN")]
    token: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show stats, the active filter and the task list
    Dashboard {
        /// "pending" or "completed"; anything else shows all tasks
        #[arg(long)]
        status: Option<String>,
    },
    /// Add a new task
    Add {
        title: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Edit an existing task; only the supplied fields change
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Flip a task between pending and completed
    Toggle { id: Uuid },
    /// Delete a task
    Delete { id: Uuid },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = TasksClient::new(&cli.api_url, &cli.token);
    let mut store = TaskStore::new();

    let outcome = run(cli.command, &client, &mut store).await;

    if let Err(message) = outcome {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

async fn run(
    command: Command,
    client: &TasksClient,
    store: &mut TaskStore,
) -> Result<(), String> {
    match command {
        Command::Dashboard { status } => {
            let filter = StatusFilter::parse(status.as_deref());
            store.fetch_tasks(client, filter).await?;
            render_dashboard(store, filter);
        }
        Command::Add { title, description } => {
            // Same check the form does before it ever calls the server.
            if title.trim().is_empty() {
                return Err("Task title is required".into());
            }
            store
                .add_task(client, title.trim(), description.as_deref())
                .await?;
            println!("Added:");
            render_task(&store.tasks[0]);
        }
        Command::Edit {
            id,
            title,
            description,
            completed,
        } => {
            if title.is_none() && description.is_none() && completed.is_none() {
                return Err("Nothing to update".into());
            }
            if matches!(&title, Some(t) if t.trim().is_empty()) {
                return Err("Task title is required".into());
            }
            let updates = UpdateTask {
                title,
                description,
                completed,
            };
            store.fetch_tasks(client, StatusFilter::All).await?;
            store.update_task(client, id, &updates).await?;
            println!("Updated:");
            render_found(store, id);
        }
        Command::Toggle { id } => {
            store.fetch_tasks(client, StatusFilter::All).await?;
            store.toggle_task(client, id).await?;
            render_found(store, id);
        }
        Command::Delete { id } => {
            store.delete_task(client, id).await?;
            println!("Task deleted successfully");
        }
    }
    Ok(())
}

fn render_dashboard(store: &TaskStore, filter: StatusFilter) {
    let stats = store.stats();
    println!("Task Manager");
    println!(
        "Total: {}   Completed: {}   Pending: {}",
        stats.total, stats.completed, stats.pending
    );
    println!("Filter: {}", filter.label());
    println!();
    if store.tasks.is_empty() {
        println!("No tasks found. Add a new task to get started!");
    } else {
        for task in &store.tasks {
            render_task(task);
        }
    }
    println!();
    println!("© {} Task Manager", Utc::now().year());
}

fn render_task(task: &Task) {
    let marker = if task.completed { "[x]" } else { "[ ]" };
    println!("{marker} {}  ({})", task.title, task.id);
    if let Some(description) = &task.description {
        println!("      {description}");
    }
    if task.updated_at != task.created_at {
        println!(
            "      Created: {}  Updated: {}",
            format_date(task.created_at),
            format_date(task.updated_at)
        );
    } else {
        println!("      Created: {}", format_date(task.created_at));
    }
}

// Toggle and edit only touch one entry; the store keeps it in place, so look
// it up by id instead of assuming a position.
fn render_found(store: &TaskStore, id: Uuid) {
    if let Some(task) = store.tasks.iter().find(|t| t.id == id) {
        render_task(task);
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %e, %Y %H:%M").to_string()
}
