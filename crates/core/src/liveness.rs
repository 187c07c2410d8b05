//! Mounted-flag used to drop async results after a component unmounts

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag cleared when the owning component is torn down.
///
/// Clones observe the same flag, so a clone moved into an async task sees
/// the release performed by the effect cleanup.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Mark the owner as unmounted
    pub fn release(&self) {
        self.0.set(false);
    }

    /// Run `update` only while the owner is still mounted
    pub fn run<F: FnOnce()>(&self, update: F) -> bool {
        if self.is_alive() {
            update();
            true
        } else {
            tracing::debug!("Discarding update for unmounted component");
            false
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_while_alive() {
        let liveness = Liveness::new();
        let ran = Cell::new(false);
        assert!(liveness.run(|| ran.set(true)));
        assert!(ran.get());
    }

    #[test]
    fn test_release_seen_by_clones() {
        let liveness = Liveness::new();
        let task_handle = liveness.clone();

        liveness.release();

        let ran = Cell::new(false);
        assert!(!task_handle.run(|| ran.set(true)));
        assert!(!ran.get());
        assert!(!task_handle.is_alive());
    }
}
