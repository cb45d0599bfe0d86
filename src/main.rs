#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
use calc_rush::{
    GameConfig, QuestionGenerator, SceneryMover, ScoreSink, SessionSignal, SessionState,
    SessionStateMachine, Symbol, error, info, log, score, warn,
};
use calc_rush::formula::BoardLayout;
use calc_rush::question::QuestionSource;
use calc_rush::util::Vec2D;
use rand::{SeedableRng, rngs::StdRng};
use std::{str::FromStr, time::Duration};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

const TICK_PERIOD: Duration = Duration::from_millis(50);
const CLOCK_REPORT_PERIOD: f32 = 5.0;

/// Prints the final score; stands in for a remote scoreboard.
struct ConsoleScoreSink;

impl ScoreSink for ConsoleScoreSink {
    fn submit_score(&mut self, score: u32) { score!("Submitting final score {score}"); }
}

/// Where released tiles land on the board.
struct DropZone {
    layout: BoardLayout,
    radius: f32,
}

enum Command {
    Place(usize, Symbol),
    Drop(Vec2D<f32>, Symbol),
    Attack,
    Board,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "place" | "p" => {
            let index = parts.next()?.parse().ok()?;
            let symbol = Symbol::from_str(parts.next()?).ok()?;
            Some(Command::Place(index, symbol))
        }
        "drop" | "d" => {
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            let symbol = Symbol::from_str(parts.next()?).ok()?;
            Some(Command::Drop(Vec2D::new(x, y), symbol))
        }
        "attack" | "a" => Some(Command::Attack),
        "board" | "b" => Some(Command::Board),
        "quit" | "q" => Some(Command::Quit),
        _ => None,
    }
}

fn print_usage() {
    info!("Commands: place <slot 0-11> <+ - * / ( )>, drop <x> <y> <tile>, attack, board, quit");
}

/// Applies one command. Returns `false` when the player wants to leave.
fn handle_command<Q: QuestionSource>(
    session: &mut SessionStateMachine<Q>,
    zone: &DropZone,
    line: &str,
) -> bool {
    match parse_command(line) {
        Some(Command::Place(index, symbol)) => {
            if let Err(e) = session.place(index, symbol) {
                warn!("Cannot place {symbol}: {e}");
            }
        }
        Some(Command::Drop(pos, symbol)) => {
            match session.drop_tile(&zone.layout, pos, zone.radius, symbol) {
                Ok(index) => log!("{symbol} released at {pos} snapped to slot {index}"),
                Err(e) => warn!("Cannot drop {symbol} at {pos}: {e}"),
            }
        }
        Some(Command::Attack) => match session.attempt_evaluation() {
            Some(report) => log!(
                "Result {} is {} off, {:.1}s left",
                report.result,
                report.diff,
                report.time
            ),
            None => warn!("Board is not a complete expression"),
        },
        Some(Command::Board) => info!("{}", session.board()),
        Some(Command::Quit) => return false,
        None => print_usage(),
    }
    true
}

fn present(signal: &SessionSignal) {
    match signal {
        SessionSignal::StateChanged(state) => info!("Session is now {state}"),
        SessionSignal::QuestionCreated { digits, target } => {
            let slots: Vec<String> = digits.iter().map(|(i, s)| format!("{s}@{i}")).collect();
            info!("Reach {target} using {}", slots.join(" "));
        }
        SessionSignal::SlotChanged { index, symbol } => log!("Slot {index} <- {symbol}"),
        SessionSignal::Evaluated { result, diff } => log!("Evaluated to {result} ({diff} off)"),
        SessionSignal::BoardCleared => {}
    }
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let config = GameConfig::from_env().unwrap_or_else(|e| {
        error!("{e}, falling back to default config");
        GameConfig::default()
    });
    let generator = QuestionGenerator::new(config.question.policy, StdRng::from_os_rng());
    let mut session =
        SessionStateMachine::new(&config.session, generator, Box::new(ConsoleScoreSink));
    let mut scenery = SceneryMover::from_config(&config.scenery);
    let zone = DropZone { layout: config.board.layout(), radius: config.board.drop_radius };
    print_usage();

    let shutdown = CancellationToken::new();
    let shutdown_signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown_signal.cancel();
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK_PERIOD);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();
    let mut since_report = 0.0;

    loop {
        tokio::select! {
            () = shutdown.cancelled() => {
                info!("Interrupted, shutting down");
                break;
            }
            now = ticker.tick() => {
                let dt = (now - last).as_secs_f32();
                last = now;
                session.tick(dt);
                scenery.tick(dt);
                if session.state() == SessionState::OnGoing {
                    since_report += dt;
                    if since_report >= CLOCK_REPORT_PERIOD {
                        since_report = 0.0;
                        log!("{:.1}s left", session.time());
                    }
                }
            }
            line = lines.next_line() => match line {
                Ok(Some(text)) => {
                    if !handle_command(&mut session, &zone, &text) {
                        break;
                    }
                }
                Ok(None) => {
                    info!("Input closed, shutting down");
                    break;
                }
                Err(e) => {
                    error!("Failed to read input: {e}");
                    break;
                }
            },
        }
        for signal in session.drain_signals() {
            present(&signal);
        }
        if session.state() == SessionState::Over {
            break;
        }
    }

    session.teardown();
    scenery.teardown();
    info!("Defeated {} in total", session.game_data().defeated_enemy_num());
}
