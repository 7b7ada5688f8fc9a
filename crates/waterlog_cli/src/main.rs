//! Terminal driver for the tracker core.
//!
//! # Responsibility
//! - Play the presentation layer: read events from stdin, print notices and the view.
//! - Verify `waterlog_core` wiring independently from the Flutter runtime.

use clap::Parser;
use std::io::{self, BufRead, Write};
use waterlog_core::{
    init_logging, parse_display_unit, AchievementPolicy, IntakeTracker, LogLevel, QuickLogPreset,
    TrackerConfig, TrackerEvent, TrackerView,
};

#[derive(Parser)]
#[command(name = "waterlog", version, about = "Daily water intake tracker")]
struct Cli {
    /// Log level (trace|debug|info|warn|error); defaults to debug in debug builds, info otherwise
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,
    /// Let logging latch achievement before any goal is set
    #[arg(long)]
    legacy_achievement: bool,
    /// Decimals for the rendered total
    #[arg(long)]
    precision: Option<usize>,
}

const HELP: &str = "commands: type <text> | submit | goal <text> | log <ml|glass|bottle|liter> | unit <ml|oz|cups> | show | reset | help | quit";

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| LogLevel::build_default().as_str());
        init_logging(level, log_dir).map_err(|err| err.to_string())?;
    }

    let mut config = TrackerConfig::from_env().map_err(|err| err.to_string())?;
    if cli.legacy_achievement {
        config.achievement_policy = AchievementPolicy::Legacy;
    }
    if let Some(precision) = cli.precision {
        config.display_precision = precision;
    }
    config.validate().map_err(|err| err.to_string())?;

    let mut tracker = IntakeTracker::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("waterlog {} (core ping={})", waterlog_core::core_version(), waterlog_core::ping());
    println!("{HELP}");
    print_view(&tracker.view());

    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("failed to read stdin: {err}"))?;
        let (command, arg) = split_command(&line);
        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "show" => print_view(&tracker.view()),
            "reset" => {
                tracker.reset();
                print_view(&tracker.view());
            }
            "goal" => {
                tracker.goal_input_changed(arg);
                apply(&mut tracker, TrackerEvent::SubmitGoal);
            }
            "type" => apply(&mut tracker, TrackerEvent::GoalInputChanged(arg.to_string())),
            "submit" => apply(&mut tracker, TrackerEvent::SubmitGoal),
            "log" => match parse_log_amount(arg) {
                Some(amount_ml) => apply(&mut tracker, TrackerEvent::QuickLog(amount_ml)),
                None => println!("! unknown amount `{arg}`"),
            },
            "unit" => match parse_display_unit(arg) {
                Ok(unit) => apply(&mut tracker, TrackerEvent::UnitChanged(unit)),
                Err(err) => println!("! {err}"),
            },
            other => println!("! unknown command `{other}`; {HELP}"),
        }
        stdout
            .flush()
            .map_err(|err| format!("failed to flush stdout: {err}"))?;
    }

    Ok(())
}

fn apply(tracker: &mut IntakeTracker, event: TrackerEvent) {
    match tracker.dispatch(event) {
        Ok(Some(notice)) => println!("[{}] {}", notice.title(), notice.message()),
        Ok(None) => {}
        Err(err) => println!("! {err}"),
    }
    print_view(&tracker.view());
}

fn split_command(line: &str) -> (&str, &str) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    }
}

fn parse_log_amount(arg: &str) -> Option<f64> {
    QuickLogPreset::from_id(arg)
        .map(QuickLogPreset::amount_ml)
        .or_else(|| arg.parse::<f64>().ok())
}

fn print_view(view: &TrackerView) {
    println!("== {} ==", view.title);
    println!("{} [{}]", view.goal_prompt, view.goal_input);
    if let Some(picker) = &view.unit_picker {
        let options: Vec<String> = picker
            .options
            .iter()
            .map(|option| {
                if option.selected {
                    format!("*{}", option.label)
                } else {
                    option.label.clone()
                }
            })
            .collect();
        println!("{} {}", picker.prompt, options.join(" | "));
    }
    if let Some(banner) = &view.achieved_banner {
        println!("{banner}");
    }
    let buttons: Vec<&str> = view
        .quick_log_buttons
        .iter()
        .map(|button| button.label.as_str())
        .collect();
    println!("[{}]", buttons.join("] ["));
    println!("{}", view.total_line);
    println!("{}", view.goal_line);
}
