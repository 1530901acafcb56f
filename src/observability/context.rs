//! Thread-local context tracking for crash reports.
//!
//! Records which phase of a command is running and which input file it
//! is working on. Guards restore the previous context on drop.

use std::cell::RefCell;
use std::path::PathBuf;

thread_local! {
    static CURRENT_CONTEXT: RefCell<RunContext> = const { RefCell::new(RunContext::new()) };
}

/// Context snapshot for the current command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunContext {
    pub phase: Option<RunPhase>,
    pub input: Option<PathBuf>,
}

impl RunContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            input: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Reading and decoding product records
    Loading,
    /// Running the threshold filter
    Filtering,
    /// Writing the report
    Writing,
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Filtering => write!(f, "filtering"),
            Self::Writing => write!(f, "writing"),
        }
    }
}

/// RAII guard for restoring run context on drop.
pub struct ContextGuard {
    previous: RunContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Set the current phase. Returns a guard that restores the previous one.
///
/// ```ignore
/// let _phase = set_phase(RunPhase::Filtering);
/// let charges = strategy.apply(&products);
/// ```
#[must_use]
pub fn set_phase(phase: RunPhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard { previous }
    })
}

/// Set the input file being processed.
#[must_use]
pub fn set_current_input(path: impl Into<PathBuf>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().input = Some(path.into());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn get_current_context() -> RunContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}
