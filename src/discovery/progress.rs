//! Progress hooks for the ordinary crawl.
//!
//! Purely observational; nothing here can influence discovery.

/// Receives progress events once per pass (`start`, `tick` per file, `complete`).
pub trait ProgressReporter {
    fn start(&mut self, total: usize);
    fn tick(&mut self);
    fn complete(&mut self);
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for &mut P {
    fn start(&mut self, total: usize) {
        (**self).start(total);
    }

    fn tick(&mut self) {
        (**self).tick();
    }

    fn complete(&mut self) {
        (**self).complete();
    }
}

/// Silent reporter.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn start(&mut self, _total: usize) {}
    fn tick(&mut self) {}
    fn complete(&mut self) {}
}

/// Reports progress through `tracing`.
#[derive(Clone, Debug, Default)]
pub struct TracingProgress {
    pass: usize,
    total: usize,
    done: usize,
}

impl ProgressReporter for TracingProgress {
    fn start(&mut self, total: usize) {
        self.pass += 1;
        self.total = total;
        self.done = 0;
        tracing::debug!("Discovery pass {}: {} file(s) to resolve", self.pass, total);
    }

    fn tick(&mut self) {
        self.done += 1;
        tracing::trace!("Discovery pass {}: {}/{}", self.pass, self.done, self.total);
    }

    fn complete(&mut self) {
        tracing::debug!(
            "Discovery pass {} complete ({} file(s))",
            self.pass,
            self.done
        );
    }
}
