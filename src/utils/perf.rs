use std::time::Instant;

use crate::config::DEBUG_FLAGS;

/// Warns on drop if the enclosing scope outran its budget.
pub struct SlowScope {
    name: &'static str,
    budget_micros: u128,
    started: Instant,
}

impl SlowScope {
    /// None unless performance logging is switched on.
    pub fn start(name: &'static str, budget_micros: u128) -> Option<Self> {
        DEBUG_FLAGS.log_performance.then(|| Self {
            name,
            budget_micros,
            started: Instant::now(),
        })
    }

    fn is_over_budget(&self, elapsed_micros: u128) -> bool {
        elapsed_micros > self.budget_micros
    }
}

impl Drop for SlowScope {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed().as_micros();
        if self.is_over_budget(elapsed) {
            log::warn!(
                "[perf] '{}' took {:.3}ms, budget {:.3}ms ({} build)",
                self.name,
                elapsed as f64 / 1000.0,
                self.budget_micros as f64 / 1000.0,
                if cfg!(debug_assertions) { "debug" } else { "release" }
            );
        }
    }
}

/// Evaluate `$block`, warning if it takes longer than `$budget_micros`.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $budget_micros:expr, $block:block) => {{
        let _scope = $crate::utils::perf::SlowScope::start($name, $budget_micros);
        $block
    }};
}
