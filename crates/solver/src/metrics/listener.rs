use crate::*;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

/// Read-only snapshot handed to [`ResolvingListener`] callbacks.
pub struct ResolvingInfo<'a, G>
where
    G: CfrGame,
{
    /// States entered by the current resolve so far.
    pub visited: usize,
    /// Iterations completed by the current resolve so far.
    pub iterations: usize,
    /// Unnormalized cumulative strategy of the current resolve.
    pub strategy: &'a Strategy<GadgetInfo<G::I>>,
    /// The resolving player's information set, absent during init.
    pub hidden: Option<&'a G::I>,
}

/// Instrumentation hooks around a resolve.
///
/// Listeners run synchronously in registration order and never steer
/// the resolve. Every callback defaults to doing nothing.
pub trait ResolvingListener<G>: Send
where
    G: CfrGame,
{
    fn init_end(&mut self, info: &ResolvingInfo<'_, G>) {
        let _ = info;
    }
    fn resolving_start(&mut self, info: &ResolvingInfo<'_, G>) {
        let _ = info;
    }
    fn resolving_end(&mut self, info: &ResolvingInfo<'_, G>) {
        let _ = info;
    }
    fn state_visited(&mut self, state: &Gadget<G>, info: &ResolvingInfo<'_, G>) {
        let _ = (state, info);
    }
    fn iteration_end(&mut self, info: &ResolvingInfo<'_, G>) {
        let _ = info;
    }
}

/// A listener shared with the caller, who reads it back between resolves.
impl<G, L> ResolvingListener<G> for Arc<Mutex<L>>
where
    G: CfrGame,
    L: ResolvingListener<G>,
{
    fn init_end(&mut self, info: &ResolvingInfo<'_, G>) {
        self.lock().unwrap_or_else(|e| e.into_inner()).init_end(info)
    }
    fn resolving_start(&mut self, info: &ResolvingInfo<'_, G>) {
        self.lock().unwrap_or_else(|e| e.into_inner()).resolving_start(info)
    }
    fn resolving_end(&mut self, info: &ResolvingInfo<'_, G>) {
        self.lock().unwrap_or_else(|e| e.into_inner()).resolving_end(info)
    }
    fn state_visited(&mut self, state: &Gadget<G>, info: &ResolvingInfo<'_, G>) {
        self.lock().unwrap_or_else(|e| e.into_inner()).state_visited(state, info)
    }
    fn iteration_end(&mut self, info: &ResolvingInfo<'_, G>) {
        self.lock().unwrap_or_else(|e| e.into_inner()).iteration_end(info)
    }
}

/// Logs reasoning time and visited states per resolve and in total.
#[derive(Debug, Clone, Default)]
pub struct LoggingListener {
    resolves: usize,
    iterations: usize,
    visited: usize,
    infos: usize,
    watch: Stopwatch,
    total_visited: usize,
    total_time: Duration,
}

impl LoggingListener {
    pub fn resolves(&self) -> usize {
        self.resolves
    }
    pub fn total_visited(&self) -> usize {
        self.total_visited
    }
    pub fn total_time(&self) -> Duration {
        self.total_time
    }
}

impl Progress for LoggingListener {
    fn epoch(&self) -> usize {
        self.iterations
    }
    fn nodes(&self) -> usize {
        self.visited
    }
    fn infos(&self) -> usize {
        self.infos
    }
    fn elapsed(&self) -> Duration {
        self.watch.live()
    }
}

impl<G> ResolvingListener<G> for LoggingListener
where
    G: CfrGame,
{
    fn init_end(&mut self, _: &ResolvingInfo<'_, G>) {
        log::info!(
            "{:<32}{:<32}",
            format!("init time {:.3}s", self.total_time.as_secs_f64()),
            format!("init states {}", self.total_visited),
        );
    }
    fn resolving_start(&mut self, _: &ResolvingInfo<'_, G>) {
        self.visited = 0;
        self.iterations = 0;
        self.watch.reset();
        self.watch.start();
    }
    fn resolving_end(&mut self, info: &ResolvingInfo<'_, G>) {
        self.watch.stop();
        self.resolves += 1;
        self.infos = info.strategy.len();
        self.total_visited += self.visited;
        self.total_time += self.watch.elapsed();
        log::info!("{}", self.format());
        log::info!(
            "{:<32}{:<32}",
            format!("reasoning time {:.3}s", self.total_time.as_secs_f64()),
            format!("states visited {}", self.total_visited),
        );
    }
    fn state_visited(&mut self, _: &Gadget<G>, _: &ResolvingInfo<'_, G>) {
        self.visited += 1;
    }
    fn iteration_end(&mut self, info: &ResolvingInfo<'_, G>) {
        self.iterations = info.iterations;
    }
}
