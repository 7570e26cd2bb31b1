use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    max_len: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str, max_len: usize) -> Stack<T> {
        Stack {
            overflow_message,
            max_len,
            vec: vec![],
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    /// Fails exactly when `push` would.
    pub fn reserve(&self) -> Result<()> {
        if self.vec.len() >= self.max_len {
            return Err(error!(Runtime; "{}", self.overflow_message));
        }
        Ok(())
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.reserve()?;
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
}
