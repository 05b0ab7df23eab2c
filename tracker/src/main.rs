//! Command-line front end for the checklist tracker
//!
//! Wires the JSON file store and the session fingerprint store into a
//! `ChecklistTracker` and maps each subcommand onto one tracker operation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};

use shared::{ArmorSlot, ChecklistId, ItemId, OptimizeResponse, Stat, TargetStats, TrackerConfig, logging};
use tracker::core::export::render_text;
use tracker::core::summary::{Allocation, summarize};
use tracker::{ChecklistState, ChecklistTracker, JsonFileStore, SessionFingerprints, SlotChange, TrackerError};

/// Track farming progress for optimized armor builds
#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Turns armor optimizer solutions into farming checklists")]
pub struct Args {
    /// Directory holding the checklist store
    #[arg(long, env = "TRACKER_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TRACKER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Save solutions from an optimizer response as checklists
    Import {
        response: PathBuf,

        /// Index of the solution to save
        #[arg(long, default_value = "0", conflicts_with = "all")]
        solution: usize,

        /// Save every solution in the response
        #[arg(long)]
        all: bool,

        /// Target stat the build was optimized for, e.g. Melee=150
        #[arg(long = "target", value_parser = parse_target)]
        targets: Vec<(Stat, u32)>,
    },
    /// Print a summary of each solution in an optimizer response
    Summary { response: PathBuf },
    /// List saved checklists with their progress
    List,
    /// Print a checklist with item ids
    Show { checklist: String },
    /// Put an armor item in a slot; naming its current slot removes it
    Assign { checklist: String, item: String, slot: ArmorSlot },
    /// Record the tuning stat an armor item rolled; omit the stat to clear it
    Tune { checklist: String, item: String, stat: Option<Stat> },
    /// Toggle a mod as acquired
    ToggleMod { checklist: String, mod_id: String },
    /// Delete a checklist
    Delete { checklist: String },
}

fn parse_target(s: &str) -> Result<(Stat, u32), String> {
    let (stat, value) = s.split_once('=').ok_or_else(|| format!("expected Stat=value, got '{s}'"))?;
    let stat: Stat = stat.trim().parse().map_err(|e| format!("{e}"))?;
    let value: u32 = value.trim().parse().map_err(|e| format!("invalid value '{value}': {e}"))?;
    Ok((stat, value))
}

type Tracker = ChecklistTracker<JsonFileStore, SessionFingerprints>;

fn read_response(path: &PathBuf) -> Result<OptimizeResponse> {
    let content = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Find a checklist by full id or unique id prefix
fn resolve_checklist(tracker: &Tracker, needle: &str) -> Result<ChecklistId> {
    if let Ok(id) = ChecklistId::from_string(needle) {
        return Ok(id);
    }
    let matches: Vec<ChecklistId> = tracker
        .checklists()
        .into_iter()
        .map(|c| c.id)
        .filter(|id| id.to_string().starts_with(needle))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => bail!("no checklist matches '{needle}'"),
        _ => bail!("'{needle}' matches {} checklists", matches.len()),
    }
}

/// Find an item id by full id or unique prefix among `ids`
fn resolve_item(ids: impl Iterator<Item = ItemId>, needle: &str) -> Result<ItemId> {
    if let Ok(id) = ItemId::from_string(needle) {
        return Ok(id);
    }
    let matches: Vec<ItemId> = ids.filter(|id| id.to_string().starts_with(needle)).collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => bail!("no item matches '{needle}'"),
        _ => bail!("'{needle}' matches {} items", matches.len()),
    }
}

fn checklist<'a>(tracker: &'a Tracker, id: ChecklistId) -> Result<&'a ChecklistState> {
    tracker.get(id).ok_or_else(|| anyhow!(TrackerError::ChecklistNotFound { checklist_id: id }))
}

fn print_progress_line(checklist: &ChecklistState) {
    let progress = checklist.progress();
    println!(
        "{}  {:<24} {:>3}%  ({}/{}){}",
        checklist.id.short(),
        checklist.name,
        progress.rounded_percentage(),
        progress.completed(),
        progress.total(),
        if progress.is_complete() { "  complete" } else { "" }
    );
}

fn print_summaries(response: &OptimizeResponse) {
    if let Some(message) = &response.message {
        println!("{message}");
    }
    for (index, solution) in response.solutions.iter().enumerate() {
        let summary = summarize(solution);
        let verdict = if summary.exact_match {
            "exact match".to_string()
        } else {
            format!("deviation {:.1}", summary.deviation)
        };
        println!("\nSolution {} ({}, {} pieces)", index + 1, verdict, summary.total_pieces);
        for group in &summary.groups {
            println!("  {}x {} (Tertiary: {}) [{}]", group.count, group.archetype, group.tertiary, group.kind.label());
        }
        for (stat, count) in &summary.mods {
            println!("  {count}x +10 {stat} Mod");
        }
        for (stat, count) in &summary.tuning {
            println!("  {count}x +5 {stat} tuning");
        }
        match summary.allocation {
            Allocation::Sufficient => println!(
                "  Tuning: {} needed, {} flexible pieces",
                summary.total_tuning, summary.flexible_pieces
            ),
            Allocation::Insufficient => println!(
                "  Tuning: {} needed but only {} flexible pieces",
                summary.total_tuning, summary.flexible_pieces
            ),
        }
    }
}

fn run(args: Args, tracker: &mut Tracker) -> Result<()> {
    match args.command {
        Command::Import { response, solution, all, targets } => {
            let response = read_response(&response)?;
            let target_stats: TargetStats = targets.into_iter().collect();
            let indices: Vec<usize> = if all { (0..response.solutions.len()).collect() } else { vec![solution] };

            let mut saved_count = 0;
            for index in indices {
                let chosen = response
                    .solutions
                    .get(index)
                    .ok_or_else(|| anyhow!("response has no solution {}", index + 1))?;
                match tracker.save_solution(chosen, target_stats.clone(), index) {
                    Ok(id) => {
                        let saved = checklist(tracker, id)?;
                        println!("Saved {} as {}", saved.name, id.short());
                        saved_count += 1;
                    }
                    Err(TrackerError::AlreadySaved { .. }) => {
                        println!("Solution {} already saved, skipping", index + 1);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            logging::log_success(&format!("Imported {saved_count} checklists"));
        }
        Command::Summary { response } => print_summaries(&read_response(&response)?),
        Command::List => {
            let overview = tracker.overview();
            println!(
                "{} checklists: {} in progress, {} completed",
                overview.total, overview.in_progress, overview.completed
            );
            for checklist in tracker.checklists() {
                print_progress_line(checklist);
            }
        }
        Command::Show { checklist: needle } => {
            let id = resolve_checklist(tracker, &needle)?;
            let state = checklist(tracker, id)?;
            println!("{}\n", render_text(state));
            print_progress_line(state);
            for item in &state.armor_items {
                let tuning = item.selected_tuning.map(|s| format!(" tuned {s}")).unwrap_or_default();
                println!("  armor {}  {}{}", item.id.short(), item.archetype, tuning);
            }
            for item in &state.mod_items {
                println!("  mod   {}  +10 {}", item.id.short(), item.stat);
            }
        }
        Command::Assign { checklist: needle, item, slot } => {
            let id = resolve_checklist(tracker, &needle)?;
            let item = resolve_item(checklist(tracker, id)?.armor_items.iter().map(|i| i.id), &item)?;
            match tracker.assign_slot(id, item, slot)? {
                SlotChange::Assigned(slot) => println!("Assigned to {slot}"),
                SlotChange::Moved { from, to } => println!("Moved from {from} to {to}"),
                SlotChange::Unassigned(slot) => println!("Removed from {slot}"),
                SlotChange::Rejected(reason) => bail!("cannot put item in {slot}: {reason:?}"),
            }
        }
        Command::Tune { checklist: needle, item, stat } => {
            let id = resolve_checklist(tracker, &needle)?;
            let item = resolve_item(checklist(tracker, id)?.armor_items.iter().map(|i| i.id), &item)?;
            if !tracker.select_tuning(id, item, stat)? {
                println!("Item takes no tuning");
            }
        }
        Command::ToggleMod { checklist: needle, mod_id } => {
            let id = resolve_checklist(tracker, &needle)?;
            let mod_id = resolve_item(checklist(tracker, id)?.mod_items.iter().map(|i| i.id), &mod_id)?;
            tracker.toggle_mod(id, mod_id)?;
        }
        Command::Delete { checklist: needle } => {
            let id = resolve_checklist(tracker, &needle)?;
            let removed = tracker.delete_checklist(id)?;
            println!("Deleted {}", removed.name);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let config = TrackerConfig::new(&args.data_dir).with_log_level(&args.log_level);
    config.validate()?;
    logging::init_tracing(Some(&config.log_level));
    logging::log_startup(&format!("tracker with store {}", config.store_path().display()));

    let mut tracker = ChecklistTracker::new(JsonFileStore::from_config(&config), SessionFingerprints::new());
    tracker.load();

    run(args, &mut tracker)
}
