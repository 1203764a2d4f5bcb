//! Bounded worker pool over the image task backlog.
//!
//! N OS threads pull tasks from a shared queue and send each outcome over a
//! channel; the caller collects outcomes in completion order and joins every
//! worker before returning.

use std::collections::VecDeque;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use super::task::{process_task, ImageTask};
use super::WorkerContext;
use crate::report::TaskOutcome;

/// Runs every task under at most `max_workers` concurrent workers and
/// returns one outcome per task, in completion order.
///
/// Workers share only the read-only context and the backlog; each writes to
/// its own uniquely-indexed output file. There is no cancellation and no
/// pool-level timeout, only the per-request timeout inside each task.
pub(crate) fn run_pool(
    tasks: Vec<ImageTask>,
    ctx: Arc<WorkerContext>,
    max_workers: usize,
) -> Vec<TaskOutcome> {
    let count = tasks.len();
    if count == 0 {
        return Vec::new();
    }

    let work: Arc<Mutex<VecDeque<ImageTask>>> = Arc::new(Mutex::new(tasks.into_iter().collect()));
    let (tx, rx) = mpsc::channel();
    let num_workers = max_workers.max(1).min(count);

    let mut handles = Vec::with_capacity(num_workers);
    for _ in 0..num_workers {
        let work = Arc::clone(&work);
        let tx = tx.clone();
        let ctx = Arc::clone(&ctx);
        handles.push(std::thread::spawn(move || loop {
            let task = match work.lock().unwrap().pop_front() {
                Some(t) => t,
                None => break,
            };
            let outcome = process_task(&task, &ctx);
            let _ = tx.send(outcome);
        }));
    }
    drop(tx);

    let mut outcomes = Vec::with_capacity(count);
    for _ in 0..count {
        outcomes.push(rx.recv().expect("worker outcome"));
    }
    for h in handles {
        h.join().unwrap_or_else(|e| panic!("worker panicked: {:?}", e));
    }

    outcomes
}
