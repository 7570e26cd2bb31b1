use clap::Parser;
use console::{Console, Input};
use minim::mach::{Config, Event, Program, Runtime};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

mod console;

#[derive(Parser)]
#[command(name = "minim")]
#[command(about = "Runs a Minim program")]
#[command(version)]
struct Cli {
    /// Minim source file to run
    source: PathBuf,

    /// Arguments passed to the program (the `a` literal)
    #[arg(trailing_var_arg = true)]
    args: Vec<String>,

    /// Cells in every memory scope
    #[arg(short, long, default_value_t = 1024)]
    memory: usize,

    /// Seed for `r` and the random commands
    #[arg(short, long)]
    seed: Option<u64>,

    /// Deepest gosub nesting and memory scope stack
    #[arg(long, default_value_t = 65535)]
    max_depth: usize,
}

pub fn main() {
    init_tracing();
    let cli = Cli::parse();
    let code = match main_loop(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("minim: {}: {}", cli.source.display(), error);
            1
        }
    };
    std::process::exit(code);
}

/// Only initialized when `RUST_LOG` is set, e.g. `RUST_LOG=minim=debug`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Answers whether the program ran to completion.
fn main_loop(cli: &Cli) -> std::io::Result<bool> {
    let text = std::fs::read_to_string(&cli.source)?;
    let mut console = Console::new()?;
    let program = match Program::compile(&cli.source.display().to_string(), &text) {
        Ok(program) => program,
        Err(error) => {
            console.error(&error)?;
            return Ok(false);
        }
    };
    let mut runtime = Runtime::new(Config {
        scope_size: cli.memory,
        args: cli.args.join(" "),
        seed: cli.seed,
        max_depth: cli.max_depth,
    });
    runtime.load(&program);

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C will not interrupt the program");
    }

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => console.print(&s)?,
            Event::Input => match console.read_line()? {
                Input::Line(line) => runtime.enter(&line),
                Input::Eof => runtime.close_input(),
                Input::Interrupt => runtime.interrupt(),
            },
            Event::Error(error) => {
                console.error(&error)?;
                return Ok(false);
            }
        }
    }
    console.finish()?;
    debug!(result = ?runtime.result(), "program finished");
    Ok(true)
}
