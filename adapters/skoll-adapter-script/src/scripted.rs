//! Scripted factory and session.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use skoll_nb::Output;
use skoll_session::{Session, SessionFactory, SessionResult};

/// Canned behavior for one execution pass.
///
/// Keys are execution ordinals: the Nth `run_cell` call of the pass, i.e.
/// the Nth code cell of the document. Unlisted cells return no outputs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPass {
    outputs: FxHashMap<usize, Vec<Output>>,
    cell_delay: Option<Duration>,
}

impl ScriptedPass {
    /// A pass where every cell runs clean with no outputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach arbitrary outputs to the Nth executed cell.
    pub fn outputs_at(mut self, ordinal: usize, outputs: Vec<Output>) -> Self {
        self.outputs.insert(ordinal, outputs);
        self
    }

    /// Attach a stdout stream output to the Nth executed cell.
    pub fn stdout_at(self, ordinal: usize, text: &str) -> Self {
        self.outputs_at(ordinal, vec![Output::stdout(text)])
    }

    /// Attach an error output to the Nth executed cell.
    pub fn error_at(self, ordinal: usize, ename: &str, evalue: &str) -> Self {
        self.outputs_at(ordinal, vec![Output::error(ename, evalue)])
    }

    /// Sleep this long inside every `run_cell` of the pass. Lets tests
    /// trip the runner's pass timeout.
    pub fn with_cell_delay(mut self, delay: Duration) -> Self {
        self.cell_delay = Some(delay);
        self
    }
}

/// Session factory that replays a fixed script of passes.
#[derive(Debug, Clone)]
pub struct ScriptedFactory {
    passes: Arc<Vec<ScriptedPass>>,
    opened: Arc<AtomicUsize>,
}

impl ScriptedFactory {
    /// Factory replaying `passes` in order; the final pass repeats.
    ///
    /// # Panics
    ///
    /// Panics if `passes` is empty: a script with no passes cannot answer
    /// the first `open`.
    pub fn new(passes: Vec<ScriptedPass>) -> Self {
        assert!(!passes.is_empty(), "scripted factory needs at least one pass");
        Self {
            passes: Arc::new(passes),
            opened: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Factory whose every pass behaves the same.
    pub fn repeating(pass: ScriptedPass) -> Self {
        Self::new(vec![pass])
    }

    /// How many sessions have been opened so far. One per execution pass,
    /// so this is the runner's attempt count.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionFactory for ScriptedFactory {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn open(&self, _workdir: &Path) -> SessionResult<Box<dyn Session>> {
        let n = self.opened.fetch_add(1, Ordering::SeqCst);
        let pass = self.passes[n.min(self.passes.len() - 1)].clone();
        Ok(Box::new(ScriptedSession { pass, cursor: 0 }))
    }
}

struct ScriptedSession {
    pass: ScriptedPass,
    cursor: usize,
}

#[async_trait]
impl Session for ScriptedSession {
    async fn run_cell(&mut self, _source: &str) -> SessionResult<Vec<Output>> {
        if let Some(delay) = self.pass.cell_delay {
            tokio::time::sleep(delay).await;
        }
        let ordinal = self.cursor;
        self.cursor += 1;
        Ok(self.pass.outputs.get(&ordinal).cloned().unwrap_or_default())
    }

    async fn close(&mut self) -> SessionResult<()> {
        Ok(())
    }
}
