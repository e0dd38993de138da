//! Helpers to measure and report running times.

use std::time::{Duration, Instant};

/// Run `f`, print how long it took to stderr and report it as `running_time_ms`.
pub fn report_time<Out, F: FnOnce() -> Out>(name: &str, f: F) -> Out {
    report_time_with_key(name, "running_time_ms", f)
}

/// Run `f`, print how long it took to stderr and report it under `key`.
pub fn report_time_with_key<Out, F: FnOnce() -> Out>(name: &str, key: &'static str, f: F) -> Out {
    eprintln!("starting {}", name);
    let (res, passed) = measure(f);
    let passed_ms = passed.as_secs_f64() * 1000.0;
    eprintln!("{} done - took: {}ms", name, passed_ms);
    report!(key, passed_ms);
    res
}

/// Run `f` and return its result along with the time it took.
pub fn measure<Out, F: FnOnce() -> Out>(f: F) -> (Out, Duration) {
    let start = Instant::now();
    let res = f();
    (res, start.elapsed())
}
