//! Leptos Task Scope
//!
//! Ties spawned futures to the lifetime of a component.
//! Everything spawned through a scope is aborted when the owning
//! component is cleaned up, so completion callbacks never run against
//! disposed state.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::*;

/// Set of abortable tasks owned by one component
#[derive(Clone, Default)]
pub struct TaskScope {
    handles: Arc<Mutex<Vec<AbortHandle>>>,
    cancelled: Arc<AtomicBool>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope cancelled automatically when the current reactive owner is disposed
    pub fn for_component() -> Self {
        let scope = Self::new();
        let on_exit = scope.clone();
        on_cleanup(move || on_exit.cancel_all());
        scope
    }

    /// Register `fut` with the scope without spawning it.
    ///
    /// If the scope is already cancelled the returned future resolves to
    /// `Err(Aborted)` on first poll.
    pub fn wrap<F: Future>(&self, fut: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        if self.is_cancelled() {
            handle.abort();
        } else {
            let mut handles = self.lock();
            handles.retain(|h| !h.is_aborted());
            handles.push(handle);
        }
        Abortable::new(fut, registration)
    }

    /// Spawn `fut` on the browser event loop, bound to this scope
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let task = self.wrap(fut);
        wasm_bindgen_futures::spawn_local(async move {
            if task.await.is_err() {
                log::debug!("[TASK] aborted before completion");
            }
        });
    }

    /// Abort every registered task; later `wrap`/`spawn` calls are aborted immediately
    pub fn cancel_all(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        let drained: Vec<AbortHandle> = self.lock().drain(..).collect();
        if !drained.is_empty() {
            log::debug!("[TASK] cancelling {} pending task(s)", drained.len());
        }
        for handle in drained {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AbortHandle>> {
        // Single-threaded in the browser; a poisoned lock still holds valid handles.
        self.handles.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_wrapped_task_completes_when_not_cancelled() {
        let scope = TaskScope::new();
        let result = block_on(scope.wrap(async { 42 }));
        assert_eq!(result.ok(), Some(42));
    }

    #[test]
    fn test_cancel_in_flight_task_skips_completion() {
        let scope = TaskScope::new();
        let completed = Rc::new(Cell::new(false));
        let (tx, rx) = oneshot::channel::<()>();

        let flag = completed.clone();
        let task = scope.wrap(async move {
            let _ = rx.await;
            flag.set(true);
        });

        let mut pool = LocalPool::new();
        pool.spawner()
            .spawn_local(async move {
                let _ = task.await;
            })
            .unwrap();
        pool.run_until_stalled();

        scope.cancel_all();
        let _ = tx.send(());
        pool.run();

        assert!(!completed.get());
    }

    #[test]
    fn test_wrap_after_cancel_is_aborted_immediately() {
        let scope = TaskScope::new();
        scope.cancel_all();
        assert!(scope.is_cancelled());

        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let result = block_on(scope.wrap(async move { flag.set(true) }));
        assert!(result.is_err());
        assert!(!ran.get());
    }

    #[test]
    fn test_clones_share_cancellation() {
        let scope = TaskScope::new();
        let other = scope.clone();
        other.cancel_all();
        assert!(scope.is_cancelled());
    }
}
