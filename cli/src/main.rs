//! Orgchart CLI: import employee files, pick a department and inspect or
//! edit the reconstructed reporting tree.
//!
//! Every invocation opens the JSON store, applies one command and saves.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use orgchart::config::SessionConfig;
use orgchart::algo::TreeView;
use orgchart::graph::{EmployeeRecord, HierarchySnapshot, NodeId, NodeKind};
use orgchart::{ClickOutcome, DeleteMode, NewNode, Position, Session};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orgchart", version, about = "Org chart hierarchy engine CLI")]
struct Cli {
    /// Dataset store file
    #[arg(long, default_value = "orgchart.json", global = true, env = "ORGCHART_STORE")]
    store: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Import CSV, TSV or JSON files as a new dataset
    Import {
        /// Dataset name
        name: String,

        /// Files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List stored datasets
    Datasets,
    /// Make a stored dataset current
    Use { name: String },
    /// Remove a stored dataset
    DeleteDataset { name: String },
    /// List departments of the current dataset
    Departments,
    /// List locations of the selected department
    Locations,
    /// List managers of the selected department
    Managers,
    /// Change the department, manager or location selection
    Select {
        #[arg(long)]
        department: Option<String>,

        /// Focus on one manager's chain and reports
        #[arg(long, conflicts_with = "all_managers")]
        manager: Option<String>,

        /// Drop the manager focus
        #[arg(long)]
        all_managers: bool,

        #[arg(long, conflicts_with = "all_locations")]
        location: Option<String>,

        /// Drop the location filter
        #[arg(long)]
        all_locations: bool,
    },
    /// Print the current hierarchy
    Show {
        /// Include nodes hidden by collapsed ancestors
        #[arg(long)]
        all: bool,
    },
    /// Summary numbers and tree metrics
    Stats,
    /// Managers above an employee, nearest first
    Chain { employee: String },
    /// Add a node (edit mode)
    Add {
        name: String,

        /// department, manager, location, job-role, top-level-role or employee
        #[arg(long, default_value = "employee")]
        kind: String,

        #[arg(long)]
        parent: Option<u64>,

        #[arg(long, default_value_t = 0)]
        count: usize,

        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a node (edit mode)
    Delete {
        id: u64,

        /// single or cascade
        #[arg(long, default_value = "single")]
        mode: String,
    },
    /// Expand or collapse a node
    Toggle { id: u64 },
    /// Click a node, optionally twice in quick succession
    Click {
        id: u64,

        #[arg(long)]
        double: bool,
    },
    /// Store a node position (edit mode)
    #[command(allow_negative_numbers = true)]
    Move { id: u64, x: f64, y: f64 },
    /// Set the node size and spacing sliders (1-200)
    Layout {
        #[arg(long)]
        node_size: u32,

        #[arg(long)]
        spacing: u32,
    },
    /// Save the current layout
    SaveLayout,
    /// Restore the hierarchy as built and the default layout
    Reset,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    debug!("Using dataset store {}", cli.store.display());
    let config = SessionConfig::default().with_store_path(&cli.store);
    let mut session =
        Session::open(config).with_context(|| format!("opening store {}", cli.store.display()))?;
    let format = &cli.format;

    match cli.command {
        Commands::Import { name, files } => run_import(&mut session, &name, &files, format),
        Commands::Datasets => run_datasets(&session, format),
        Commands::Use { name } => {
            session.load_dataset(&name)?;
            print_status(&session);
            Ok(())
        }
        Commands::DeleteDataset { name } => {
            session.delete_dataset(&name)?;
            print_status(&session);
            Ok(())
        }
        Commands::Departments => print_list("department", &session.departments()?, format),
        Commands::Locations => print_list("location", &session.locations()?, format),
        Commands::Managers => run_managers(&session, format),
        Commands::Select { department, manager, all_managers, location, all_locations } => {
            if let Some(department) = department.as_deref() {
                session.select_department(Some(department))?;
            }
            if location.is_some() || all_locations {
                session.select_location(location.as_deref())?;
            }
            if manager.is_some() || all_managers {
                session.select_manager(manager.as_deref())?;
            }
            print_status(&session);
            Ok(())
        }
        Commands::Show { all } => run_show(&session, all, format),
        Commands::Stats => run_stats(&session, format),
        Commands::Chain { employee } => {
            let chain = session.chain_of_command(&employee)?;
            print_employees(&chain, format)
        }
        Commands::Add { name, kind, parent, count, description } => {
            let kind: NodeKind = kind.parse().map_err(anyhow::Error::msg)?;
            let mut request = NewNode::new(name, kind).with_count(count);
            if let Some(parent) = parent {
                request = request.under(NodeId::new(parent));
            }
            if let Some(description) = description {
                request = request.with_description(description);
            }
            session.set_edit_mode(true);
            let id = session.add_node(request)?;
            println!("{}", id);
            Ok(())
        }
        Commands::Delete { id, mode } => {
            let mode: DeleteMode = mode.parse()?;
            session.set_edit_mode(true);
            let removed = session.delete_node(NodeId::new(id), mode)?;
            if removed.is_empty() {
                println!("(no node {})", id);
            } else {
                let ids: Vec<String> = removed.iter().map(|n| n.to_string()).collect();
                println!("Removed: {}", ids.join(", "));
            }
            Ok(())
        }
        Commands::Toggle { id } => {
            match session.toggle_node(NodeId::new(id))? {
                Some(true) => println!("{} expanded", id),
                Some(false) => println!("{} collapsed", id),
                None => println!("{} cannot be expanded", id),
            }
            Ok(())
        }
        Commands::Click { id, double } => run_click(&mut session, NodeId::new(id), double, format),
        Commands::Move { id, x, y } => {
            session.set_edit_mode(true);
            session.move_node(NodeId::new(id), Position::new(x, y))?;
            Ok(())
        }
        Commands::Layout { node_size, spacing } => {
            session.set_layout_sliders(node_size, spacing)?;
            let layout = session.layout()?;
            debug!("Node box is now {:.0}px", layout.node_box_size());
            println!("{}", serde_json::to_string_pretty(layout)?);
            Ok(())
        }
        Commands::SaveLayout => {
            session.save_layout()?;
            print_status(&session);
            Ok(())
        }
        Commands::Reset => {
            session.reset_layout()?;
            print_status(&session);
            Ok(())
        }
    }
}

fn print_status(session: &Session) {
    if let Some(status) = session.status() {
        println!("{}", status.text);
    }
}

fn run_import(session: &mut Session, name: &str, files: &[PathBuf], format: &OutputFormat) -> anyhow::Result<()> {
    let report = session.import_dataset(name, files)?;
    for failure in &report.failures {
        eprintln!("Skipped: {}", failure);
    }

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "dataset": name.trim(),
                "imported": report.imported,
                "records": report.records.len(),
                "failures": report.failures.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
            })
        ),
        _ => print_status(session),
    }
    Ok(())
}

fn run_datasets(session: &Session, format: &OutputFormat) -> anyhow::Result<()> {
    let store = session.store();
    let rows: Vec<(String, usize, String, bool)> = store
        .names()
        .into_iter()
        .filter_map(|name| {
            let dataset = store.get(name)?;
            let created = dataset
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            Some((name.to_string(), dataset.employee_count(), created, store.current_dataset.as_deref() == Some(name)))
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let json: Vec<_> = rows
                .iter()
                .map(|(name, count, created, current)| {
                    serde_json::json!({ "name": name, "employees": count, "created": created, "current": current })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Csv => {
            println!("name,employees,created,current");
            for (name, count, created, current) in &rows {
                println!("{},{},{},{}", csv_cell(name), count, created, current);
            }
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(no datasets)");
                return Ok(());
            }
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Dataset", "Employees", "Created", ""]);
            for (name, count, created, current) in &rows {
                let marker = if *current { "*" } else { "" };
                table.add_row(vec![name.clone(), count.to_string(), created.clone(), marker.to_string()]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn print_list(header: &str, values: &[String], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
        OutputFormat::Csv => {
            println!("{}", header);
            for value in values {
                println!("{}", csv_cell(value));
            }
        }
        OutputFormat::Table => {
            for value in values {
                println!("{}", value);
            }
            println!("{} {}(s)", values.len(), header);
        }
    }
    Ok(())
}

fn run_managers(session: &Session, format: &OutputFormat) -> anyhow::Result<()> {
    let managers = session.managers()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&managers)?),
        OutputFormat::Csv => {
            println!("name,direct_reports,placeholder");
            for m in &managers {
                println!("{},{},{}", csv_cell(&m.name), m.direct_reports, m.placeholder);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Manager", "Direct reports", "Placeholder"]);
            for m in &managers {
                let placeholder = if m.placeholder { "yes" } else { "" };
                table.add_row(vec![m.name.clone(), m.direct_reports.to_string(), placeholder.to_string()]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn run_show(session: &Session, all: bool, format: &OutputFormat) -> anyhow::Result<()> {
    let Some(snapshot) = session.snapshot() else {
        bail!("No hierarchy built yet; select a department first");
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(snapshot)?),
        OutputFormat::Csv => {
            println!("id,parent,kind,name,count,expanded,hidden");
            let visibility = snapshot.visibility();
            let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
            for link in &snapshot.links {
                parents.entry(link.target).or_insert(link.source);
            }
            for node in &snapshot.nodes {
                if !all && !visibility.get(&node.id).copied().unwrap_or(false) {
                    continue;
                }
                let parent = parents.get(&node.id).map(|p| p.to_string()).unwrap_or_default();
                println!(
                    "{},{},{},{},{},{},{}",
                    node.id,
                    parent,
                    node.kind,
                    csv_cell(&node.name),
                    node.member_count,
                    node.expanded,
                    node.hidden
                );
            }
        }
        OutputFormat::Table => {
            print_outline(snapshot, all);
            if let Some((width, height)) = session.canvas_size() {
                let node_box = session.layout()?.node_box_size();
                println!("canvas {:.0} x {:.0}, node box {:.0}", width, height, node_box);
            }
        }
    }
    Ok(())
}

/// Indented outline from the root; hidden subtrees are skipped unless `all`
fn print_outline(snapshot: &HierarchySnapshot, all: bool) {
    if snapshot.nodes.is_empty() {
        return;
    }
    let view = TreeView::from_snapshot(snapshot);
    let mut stack = vec![(0usize, 0usize)];
    let mut printed = vec![false; view.node_count];

    while let Some((idx, indent)) = stack.pop() {
        if std::mem::replace(&mut printed[idx], true) {
            continue;
        }
        let node = &snapshot.nodes[idx];
        if !all && node.hidden {
            continue;
        }

        let marker = match (node.kind.is_expandable(), node.expanded) {
            (true, true) => "-",
            (true, false) => "+",
            (false, _) => " ",
        };
        let detail = node.description.as_deref().unwrap_or("");
        println!("{}{} [{}] {} ({}) {}", "  ".repeat(indent), marker, node.id, node.name, node.kind, detail);

        stack.extend(view.children(idx).iter().rev().map(|&child| (child, indent + 1)));
    }
}

fn run_stats(session: &Session, format: &OutputFormat) -> anyhow::Result<()> {
    let summary = session.summary()?;
    let metrics = session.metrics();

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "summary": summary,
                "depth": metrics.map(|m| m.depth),
                "breadth": metrics.map(|m| m.breadth),
            })
        ),
        _ => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Metric", "Value"]);
            table.add_row(vec!["Total employees".to_string(), summary.total_employees.to_string()]);
            table.add_row(vec!["Total managers".to_string(), summary.total_managers.to_string()]);
            if let Some(reports) = summary.direct_reports {
                table.add_row(vec!["Direct reports".to_string(), reports.to_string()]);
            }
            if let Some(levels) = summary.levels_above {
                table.add_row(vec!["Levels above".to_string(), levels.to_string()]);
            }
            if let Some(m) = metrics {
                table.add_row(vec!["Depth".to_string(), m.depth.to_string()]);
                table.add_row(vec!["Breadth".to_string(), m.breadth.to_string()]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn run_click(session: &mut Session, id: NodeId, double: bool, format: &OutputFormat) -> anyhow::Result<()> {
    let mut outcome = session.handle_click(id, 0)?;
    if double {
        outcome = session.handle_click(id, 1)?;
    }

    match outcome {
        ClickOutcome::Ignored => println!("(nothing to do)"),
        ClickOutcome::Toggled { node, expanded } => {
            println!("{} {}", node, if expanded { "expanded" } else { "collapsed" })
        }
        ClickOutcome::Aggregated { title, employees, .. } => {
            println!("{}", title);
            print_employees(&employees, format)?;
        }
        ClickOutcome::Details { members, .. } => print_employees(&members, format)?,
    }
    Ok(())
}

fn print_employees(employees: &[EmployeeRecord], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(employees)?),
        OutputFormat::Csv => {
            println!("name,job_title,location,reporting_manager");
            for e in employees {
                println!(
                    "{},{},{},{}",
                    csv_cell(&e.name),
                    csv_cell(&e.job_title),
                    csv_cell(&e.location),
                    csv_cell(&e.reporting_manager)
                );
            }
        }
        OutputFormat::Table => {
            if employees.is_empty() {
                println!("(no employees)");
                return Ok(());
            }
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Name", "Job title", "Location", "Manager"]);
            for e in employees {
                table.add_row(vec![
                    e.name.clone(),
                    e.job_title.clone(),
                    e.location.clone(),
                    e.reporting_manager.clone(),
                ]);
            }
            println!("{}", table);
            println!("{} employee(s)", employees.len());
        }
    }
    Ok(())
}

fn csv_cell(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
