use super::{Builtins, Cell, Labels, Library, Memory, Operand, Program, Stack, Val};
use crate::error;
use crate::lang::ast::{Expression, Mode, Statement};
use crate::lang::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

mod eval;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime settings

#[derive(Debug, Clone)]
pub struct Config {
    /// Cells in every memory scope.
    pub scope_size: usize,
    /// Exposed to the program as the `a` literal.
    pub args: String,
    /// Fixed seed for `r` and the random commands. Entropy when absent.
    pub seed: Option<u64>,
    /// Deepest gosub nesting and memory scope stack.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scope_size: 1024,
            args: String::new(),
            seed: None,
            max_depth: u16::MAX as usize,
        }
    }
}

/// ## Events for the user interface

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Input,
    Error(Error),
}

enum Step {
    Next,
    Print(String),
    Input,
}

#[derive(Debug, Clone, Copy)]
enum Queue {
    Text,
    SystemResults,
    Transfer,
}

/// ## Statement evaluator
///
/// Runs one program against a memory stack. The counter names the
/// statement being executed and moves to the next one afterward, so a
/// goto lands just past its label and a return just past its gosub.

pub struct Runtime {
    config: Config,
    library: Box<dyn Library>,
    statements: Rc<[Statement]>,
    counter: i32,
    memory: Memory,
    labels: Labels,
    calls: Stack<i32>,
    text: VecDeque<Val>,
    system_args: VecDeque<Val>,
    system_results: VecDeque<Val>,
    transfer: VecDeque<Val>,
    input: VecDeque<String>,
    input_closed: bool,
    stopped: bool,
    interrupted: bool,
    rng: StdRng,
    started: Instant,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime::with_library(config, Builtins)
    }

    pub fn with_library(config: Config, library: impl Library + 'static) -> Runtime {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Runtime {
            memory: Memory::new(config.scope_size, config.max_depth),
            calls: Stack::new("call stack overflow", config.max_depth),
            library: Box::new(library),
            statements: Program::default().shared(),
            counter: 0,
            labels: Labels::default(),
            text: VecDeque::new(),
            system_args: VecDeque::new(),
            system_results: VecDeque::new(),
            transfer: VecDeque::new(),
            input: VecDeque::new(),
            input_closed: false,
            stopped: false,
            interrupted: false,
            rng,
            started: Instant::now(),
            config,
        }
    }

    /// Replaces the program and resets everything but pending input.
    pub fn load(&mut self, program: &Program) {
        self.statements = program.shared();
        self.counter = 0;
        self.memory = Memory::new(self.config.scope_size, self.config.max_depth);
        self.labels.clear();
        self.calls.clear();
        self.text.clear();
        self.system_args.clear();
        self.system_results.clear();
        self.transfer.clear();
        self.stopped = false;
        self.interrupted = false;
    }

    pub fn load_str(&mut self, source_name: &str, text: &str) -> Result<()> {
        let program = Program::compile(source_name, text)?;
        self.load(&program);
        Ok(())
    }

    /// Queues one line of console input, without its line terminator.
    pub fn enter(&mut self, line: &str) {
        self.input.push_back(line.to_string());
    }

    /// No more input will arrive. Input statements become no-ops.
    pub fn close_input(&mut self) {
        self.input_closed = true;
    }

    pub fn interrupt(&mut self) {
        if !self.stopped {
            self.interrupted = true;
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn counter(&self) -> i32 {
        self.counter
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn call_depth(&self) -> usize {
        self.calls.len()
    }

    /// Cell 0 of the top scope.
    pub fn result(&self) -> Option<Val> {
        self.memory.cells().first().copied()
    }

    pub fn random(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// Inclusive of both bounds, in either order.
    pub fn random_int(&mut self, lo: i32, hi: i32) -> i32 {
        if lo <= hi {
            self.rng.gen_range(lo..=hi)
        } else {
            self.rng.gen_range(hi..=lo)
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Runs at most `cycles` statements.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if self.stopped {
                return Event::Stopped;
            }
            let statements = Rc::clone(&self.statements);
            let statement = match usize::try_from(self.counter) {
                Err(_) => return self.fail(error!(Runtime; "counter out of range")),
                Ok(pc) => match statements.get(pc) {
                    Some(statement) => statement,
                    None => {
                        self.stopped = true;
                        return Event::Stopped;
                    }
                },
            };
            if self.interrupted {
                self.interrupted = false;
                return self.fail(error!(Runtime, statement.location(); "interrupted"));
            }
            trace!(counter = self.counter, "{}", statement);
            match self.statement(statement) {
                Ok(Step::Next) => self.advance(),
                Ok(Step::Print(s)) => {
                    self.advance();
                    return Event::Print(s);
                }
                Ok(Step::Input) => return Event::Input,
                Err(error) => return self.fail(error.in_location(statement.location())),
            }
        }
        if self.stopped {
            return Event::Stopped;
        }
        Event::Running
    }

    fn fail(&mut self, error: Error) -> Event {
        debug!(%error, "run halted");
        self.stopped = true;
        Event::Error(error)
    }

    fn advance(&mut self) {
        self.counter = self.counter.wrapping_add(1);
    }

    fn statement(&mut self, statement: &Statement) -> Result<Step> {
        use Statement::*;
        match statement {
            NumberOut(_, mode, expr) => {
                let operand = self.evaluate(expr)?;
                return Ok(Step::Print(self.format_number(&operand, *mode)?));
            }
            NumberIn(_, mode, target) => return self.number_in(*mode, target),
            TextOut(_, expr) => {
                let operand = self.evaluate(expr)?;
                return Ok(Step::Print(self.format_text(&operand)?));
            }
            TextIn(_, target) => return self.text_in(target),
            TextFlush(_) => self.text.clear(),
            Label(_, id) => {
                let id = self.value_of(id)?;
                self.labels.define(id, self.counter as usize);
            }
            Goto(_, id, fallback) => {
                if let Some(index) = self.resolve(id, fallback)? {
                    self.counter = index as i32;
                }
            }
            Jump(_, condition) => {
                if self.value_of(condition)?.is_truthy() {
                    self.advance();
                }
            }
            Gosub(_, id, fallback) => {
                if let Some(index) = self.resolve(id, fallback)? {
                    self.calls.push(self.counter)?;
                    self.counter = index as i32;
                }
            }
            Return(_) => {
                if let Some(counter) = self.calls.pop() {
                    self.counter = counter;
                }
            }
            SystemArg(_, expr) => {
                let operand = self.evaluate(expr)?;
                let vals = self.values(&operand)?;
                self.system_args.extend(vals);
            }
            SystemCall(_, target) => self.system_call(target)?,
            SystemFlush(_) => {
                self.system_args.clear();
                self.system_results.clear();
            }
            MemoryPush(_) => self.memory.push()?,
            MemoryPop(_) => self.memory.pop(),
            MemoryOut(_, expr) => {
                let operand = self.evaluate(expr)?;
                let vals = self.values(&operand)?;
                self.transfer.extend(vals);
            }
            MemoryIn(_, target) => {
                let target = self.evaluate(target)?;
                self.receive(&target, Queue::Transfer)?;
            }
            MemoryFlush(_) => self.transfer.clear(),
            SingleAssign(_, index, value) => {
                let target = self.single(index)?;
                let source = self.evaluate(value)?;
                self.store(&target, &source)?;
            }
            FixedAssign(_, start, end, step, value) => {
                let target = self.fixed_range(start, end, step)?;
                let source = self.evaluate(value)?;
                self.store(&target, &source)?;
            }
            RelativeAssign(_, start, count, step, value) => {
                let target = self.relative_range(start, count, step)?;
                let source = self.evaluate(value)?;
                self.store(&target, &source)?;
            }
            Expression(_, expr) => {
                self.evaluate(expr)?;
            }
            Empty(_) => {}
        }
        Ok(Step::Next)
    }

    fn number_in(&mut self, mode: Mode, target: &Expression) -> Result<Step> {
        let line = match self.input.pop_front() {
            Some(line) => line,
            None if self.input_closed => return Ok(Step::Next),
            None => return Ok(Step::Input),
        };
        let text = line.trim();
        let val = match mode {
            Mode::Plain => text.parse::<f32>().ok().map(Val::Float),
            Mode::Integer => text
                .parse::<i32>()
                .ok()
                .or_else(|| text.parse::<f32>().ok().map(|f| Val::Float(f).to_int()))
                .map(Val::Integer),
        };
        let val = match val {
            Some(val) => val,
            None => return Err(error!(Runtime; "invalid number `{}`", text)),
        };
        let target = self.evaluate(target)?;
        self.store(&target, &Operand::Value(val))?;
        Ok(Step::Next)
    }

    fn text_in(&mut self, target: &Expression) -> Result<Step> {
        if self.text.is_empty() {
            match self.input.pop_front() {
                Some(line) => {
                    self.text.extend(line.chars().map(|ch| Val::Integer(ch as i32)));
                    self.text.push_back(Val::Integer(0));
                }
                None if self.input_closed => return Ok(Step::Next),
                None => return Ok(Step::Input),
            }
        }
        let target = self.evaluate(target)?;
        self.receive(&target, Queue::Text)?;
        Ok(Step::Next)
    }

    fn system_call(&mut self, target: &Expression) -> Result<()> {
        if let Some(address) = self.system_args.pop_front() {
            let name = self.command_name(address)?;
            let (arity, command) = match self.library.command(&name) {
                Some(found) => found,
                None => return Err(error!(Runtime; "unknown system command `{}`", name)),
            };
            if self.system_args.len() < arity {
                return Err(error!(Runtime;
                    "system command `{}` expects {} arguments, found {}",
                    name,
                    arity,
                    self.system_args.len()
                ));
            }
            let args: Vec<Val> = self.system_args.drain(..arity).collect();
            debug!(command = %name, ?args, "system call");
            let results = command(self, &args)?;
            self.system_results.extend(results);
        }
        if !target.is_none() && !self.system_results.is_empty() {
            let target = self.evaluate(target)?;
            self.receive(&target, Queue::SystemResults)?;
        }
        Ok(())
    }

    /// Reads a zero terminated name from memory.
    fn command_name(&self, address: Val) -> Result<String> {
        let start = self.memory.address(address)?;
        let mut name = String::new();
        let mut index = start.index;
        loop {
            let code = self.memory.get(&Cell { index, ..start })?.to_int();
            if code == 0 {
                return Ok(name);
            }
            name.push(u32::try_from(code).ok().and_then(char::from_u32).unwrap_or('?'));
            index += 1;
        }
    }

    /// Finds a label by id, then by the fallback id if there is one.
    fn resolve(&mut self, id: &Expression, fallback: &Expression) -> Result<Option<usize>> {
        let id = self.value_of(id)?;
        if let Some(index) = self.find_label(id)? {
            return Ok(Some(index));
        }
        if fallback.is_none() {
            return Ok(None);
        }
        let id = self.value_of(fallback)?;
        self.find_label(id)
    }

    fn find_label(&mut self, id: Val) -> Result<Option<usize>> {
        if let Some(index) = self.labels.get(id) {
            return Ok(Some(index));
        }
        self.labels.count_scan();
        debug!(%id, "scanning for label");
        let key = Labels::key(id);
        let statements = Rc::clone(&self.statements);
        for (index, statement) in statements.iter().enumerate() {
            if let Statement::Label(_, expr) = statement {
                if Labels::key(self.value_of(expr)?) == key {
                    self.labels.define(id, index);
                    return Ok(Some(index));
                }
            }
        }
        debug!(%id, "label not found");
        Ok(None)
    }

    fn queue(&mut self, queue: Queue) -> &mut VecDeque<Val> {
        match queue {
            Queue::Text => &mut self.text,
            Queue::SystemResults => &mut self.system_results,
            Queue::Transfer => &mut self.transfer,
        }
    }

    /// Dequeues one value per addressed cell while values remain.
    fn receive(&mut self, target: &Operand, queue: Queue) -> Result<()> {
        for reference in self.references(target)? {
            match self.queue(queue).pop_front() {
                Some(val) => self.write(&reference, val)?,
                None => break,
            }
        }
        Ok(())
    }

    fn format_number(&self, operand: &Operand, mode: Mode) -> Result<String> {
        let show = |val: Val| match mode {
            Mode::Plain => val.to_string(),
            Mode::Integer => val.to_int().to_string(),
        };
        if operand.is_array() {
            let shown: Vec<String> = self.values(operand)?.into_iter().map(show).collect();
            return Ok(format!("{{{}}}", shown.join(", ")));
        }
        Ok(show(self.value(operand)?))
    }

    fn format_text(&self, operand: &Operand) -> Result<String> {
        let to_char = |val: Val| {
            u32::try_from(val.to_int())
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        };
        if operand.is_array() {
            return Ok(self
                .values(operand)?
                .into_iter()
                .take_while(|val| val.to_int() != 0)
                .map(to_char)
                .collect());
        }
        Ok(to_char(self.value(operand)?).to_string())
    }
}
