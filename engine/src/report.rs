//! Structured reporting of program runs as a single JSON object.
//!
//! A thread local reporter collects values under string keys. Nested objects and
//! collections are opened through RAII guards which close the context again when dropped,
//! so the shape of the output mirrors the call graph of the program.
//! Reporting is a no-op until `enable_reporting` is called, which makes it safe to sprinkle
//! `report!` calls over library code.
//! When the guard returned by `enable_reporting` is dropped, the report is printed to stdout.

use serde_json::{Map, Value};
use std::cell::RefCell;
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

pub use serde_json::json;

#[derive(Debug)]
enum Frame {
    // `key` is where the object goes in the parent, `None` for the root and for collection items
    Object { key: Option<String>, fields: Map<String, Value> },
    Collection { key: String, items: Vec<Value> },
}

#[derive(Debug)]
struct Reporter {
    stack: Vec<Frame>,
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter {
            stack: vec![Frame::Object { key: None, fields: Map::new() }],
        }
    }
}

impl Reporter {
    fn fields(&mut self) -> &mut Map<String, Value> {
        match self.stack.last_mut() {
            Some(Frame::Object { fields, .. }) => fields,
            _ => panic!("values can only be reported into objects"),
        }
    }

    fn report(&mut self, key: String, val: Value) {
        let prev = self.fields().insert(key, val);
        if !cfg!(feature = "report-allow-override") {
            assert!(prev.is_none(), "key reported twice in the same context");
        }
    }

    fn open_object(&mut self, key: String) {
        self.fields();
        self.stack.push(Frame::Object {
            key: Some(key),
            fields: Map::new(),
        });
    }

    fn open_collection(&mut self, key: String) {
        self.fields();
        self.stack.push(Frame::Collection { key, items: Vec::new() });
    }

    fn open_item(&mut self) {
        assert!(matches!(self.stack.last(), Some(Frame::Collection { .. })), "items can only be added to collections");
        self.stack.push(Frame::Object { key: None, fields: Map::new() });
    }

    fn close(&mut self) {
        assert!(self.stack.len() > 1, "tried to close the root context");
        let (key, value) = match self.stack.pop() {
            Some(Frame::Object { key, fields }) => (key, Value::Object(fields)),
            Some(Frame::Collection { key, items }) => (Some(key), Value::Array(items)),
            None => unreachable!(),
        };

        match key {
            Some(key) => self.report(key, value),
            None => match self.stack.last_mut() {
                Some(Frame::Collection { items, .. }) => items.push(value),
                _ => panic!("inconsistent context stack"),
            },
        }
    }

    fn finish(mut self) -> Value {
        assert_eq!(self.stack.len(), 1, "unclosed reporting contexts");
        match self.stack.pop() {
            Some(Frame::Object { fields, .. }) => Value::Object(fields),
            _ => panic!("broken root object for reporting"),
        }
    }
}

thread_local! {
    static REPORTER: RefCell<Option<Reporter>> = RefCell::new(None);
}

fn with_reporter(f: impl FnOnce(&mut Reporter)) {
    REPORTER.with(|reporter| {
        if let Some(r) = reporter.borrow_mut().as_mut() {
            f(r)
        }
    });
}

pub fn report(key: String, val: Value) {
    if cfg!(feature = "report-to-stderr") {
        eprintln!("{}: {}", key, val);
    }
    report_silent(key, val)
}

pub fn report_silent(key: String, val: Value) {
    with_reporter(|r| r.report(key, val));
}

#[macro_export]
macro_rules! report {
    ($k:expr, $($json:tt)+) => { $crate::report::report($k.to_string(), $crate::report::json!($($json)+)) };
}

#[macro_export]
macro_rules! report_silent {
    ($k:expr, $($json:tt)+) => { $crate::report::report_silent($k.to_string(), $crate::report::json!($($json)+)) };
}

#[must_use]
pub struct ContextGuard(());

impl Drop for ContextGuard {
    fn drop(&mut self) {
        with_reporter(Reporter::close);
    }
}

/// Everything reported while the guard lives ends up in an object under `key`.
pub fn push_context(key: String) -> ContextGuard {
    with_reporter(|r| r.open_object(key));
    ContextGuard(())
}

#[must_use]
pub struct CollectionContextGuard(());

impl Drop for CollectionContextGuard {
    fn drop(&mut self) {
        with_reporter(Reporter::close);
    }
}

/// Opens an array under `key`. Add elements with `push_collection_item`.
pub fn push_collection_context(key: String) -> CollectionContextGuard {
    with_reporter(|r| r.open_collection(key));
    CollectionContextGuard(())
}

impl CollectionContextGuard {
    pub fn push_collection_item(&mut self) -> CollectionItemContextGuard {
        with_reporter(Reporter::open_item);
        CollectionItemContextGuard(self)
    }
}

#[must_use]
pub struct CollectionItemContextGuard<'a>(&'a CollectionContextGuard);

impl<'a> Drop for CollectionItemContextGuard<'a> {
    fn drop(&mut self) {
        with_reporter(Reporter::close);
    }
}

#[must_use]
pub struct ReportingGuard(());

impl Drop for ReportingGuard {
    fn drop(&mut self) {
        if let Some(reporter) = REPORTER.with(|reporter| reporter.borrow_mut().take()) {
            println!("{}", reporter.finish());
        }
    }
}

/// Install the reporter for the current thread and record some general info about the run.
pub fn enable_reporting(program: &str) -> ReportingGuard {
    REPORTER.with(|reporter| reporter.replace(Some(Reporter::default())));

    report!("build_target", crate::built_info::TARGET);
    report!("build_profile", crate::built_info::PROFILE);
    report!("feature_flags", crate::built_info::FEATURES_STR);
    report!("build_with_rustc", crate::built_info::RUSTC_VERSION);

    report!("program", program);
    if let Ok(start_time) = OffsetDateTime::now_utc().format(&Rfc2822) {
        report!("start_time", start_time);
    }
    report!("args", std::env::args().collect::<Vec<String>>());

    ReportingGuard(())
}

pub mod benchmark;
pub use benchmark::*;
