use crate::mach::{Config, Event, Runtime};

mod control_test;
mod system_test;

fn runtime(source: &str) -> Runtime {
    let mut r = Runtime::new(Config {
        scope_size: 16,
        seed: Some(1),
        ..Config::default()
    });
    if let Err(error) = r.load_str("test", source) {
        panic!("{}", error);
    }
    r
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => break,
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
            Event::Running => {
                s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                break;
            }
            Event::Print(ps) => s.push_str(&ps),
            Event::Input => break,
        }
    }
    s
}
