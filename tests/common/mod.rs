use minim::mach::{Config, Event, Runtime};

pub fn runtime(source: &str) -> Runtime {
    runtime_with(
        Config {
            scope_size: 32,
            seed: Some(3),
            ..Config::default()
        },
        source,
    )
}

pub fn runtime_with(config: Config, source: &str) -> Runtime {
    let mut r = Runtime::new(config);
    if let Err(error) = r.load_str("test", source) {
        panic!("{}", error);
    }
    r
}

pub fn run(source: &str) -> String {
    exec(&mut runtime(source))
}

/// Runs with every line of input available up front.
pub fn run_with_input(source: &str, lines: &[&str]) -> String {
    let mut r = runtime(source);
    for line in lines {
        r.enter(line);
    }
    r.close_input();
    exec(&mut r)
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
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
