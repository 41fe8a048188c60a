//! Foreground work/break countdown.
//!
//! The engine only counts ticks; this module supplies them once per second
//! from a tokio interval and draws the countdown in place. Lines typed on
//! stdin control the running timer.

use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use questlog_core::presenter::{present, Presenter};
use questlog_core::{Config, Event, TimerEngine};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::console::ConsolePresenter;

const CONTROLS_HINT: &str = "controls: p = pause/resume, r = reset, s = status, q = quit";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the timer in the foreground until quit or interrupted with Ctrl-C
    Run {
        /// Stop after this many completed intervals
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        cycles: Option<u32>,
    },
}

/// A line typed while the timer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Toggle,
    Reset,
    Status,
    Quit,
}

impl Control {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" | "pause" | "resume" => Some(Control::Toggle),
            "r" | "reset" => Some(Control::Reset),
            "s" | "status" => Some(Control::Status),
            "q" | "quit" => Some(Control::Quit),
            _ => None,
        }
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run { cycles } => {
            let config = Config::load_or_default();
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let result = runtime.block_on(countdown(&config, cycles));
            // A pending stdin read would otherwise hold up shutdown.
            runtime.shutdown_background();
            result?;
        }
    }
    Ok(())
}

/// Apply one control to the engine. Returns the events to present and the
/// line to print on stdout, if any.
pub fn apply_control(
    engine: &mut TimerEngine,
    control: Control,
) -> Result<(Vec<Event>, Option<String>), serde_json::Error> {
    match control {
        Control::Toggle => Ok((engine.toggle().into_iter().collect(), None)),
        Control::Reset => Ok((vec![engine.reset()], None)),
        Control::Status => Ok((Vec::new(), Some(serde_json::to_string(&engine.snapshot())?))),
        Control::Quit => Ok((engine.pause().into_iter().collect(), None)),
    }
}

async fn countdown(
    config: &Config,
    cycles: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let duration_ms = config.notifications.message_duration_ms;
    let mut presenter = ConsolePresenter::new(config, false);
    let mut engine = TimerEngine::new(config.timer_durations());

    let started: Vec<Event> = engine.start().into_iter().collect();
    present(&mut presenter, &started, duration_ms);
    presenter.show_message(CONTROLS_HINT, duration_ms);

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick completes immediately.
    interval.tick().await;
    draw(&engine)?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    let mut completed = 0u32;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Some(event) = engine.tick() {
                    println!();
                    present(&mut presenter, &[event], duration_ms);
                    completed += 1;
                    if cycles.is_some_and(|limit| completed >= limit) {
                        tracing::debug!(completed, "cycle limit reached");
                        break;
                    }
                }
                draw(&engine)?;
            }
            line = lines.next_line(), if stdin_open => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) | Err(_) => {
                        stdin_open = false;
                        continue;
                    }
                };
                let Some(control) = Control::parse(&line) else {
                    presenter.show_message(CONTROLS_HINT, duration_ms);
                    continue;
                };
                let (events, output) = apply_control(&mut engine, control)?;
                present(&mut presenter, &events, duration_ms);
                if let Some(output) = output {
                    println!();
                    println!("{output}");
                }
                if control == Control::Quit {
                    println!();
                    break;
                }
                draw(&engine)?;
            }
            _ = &mut ctrl_c => {
                println!();
                let paused: Vec<Event> = engine.pause().into_iter().collect();
                present(&mut presenter, &paused, duration_ms);
                eprintln!("stopped at {} ({})", engine.display(), engine.mode().label());
                break;
            }
        }
    }
    Ok(())
}

fn draw(engine: &TimerEngine) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "\r{}  {}", engine.mode().label(), engine.display())?;
    stdout.flush()
}
