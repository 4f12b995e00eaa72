use std::panic::{self, Location};
use std::sync::Arc;

use eyre::Context;
use regex::Regex;

use fieldlog::{fields, BufferSink, Fields, LevelWriter, LineStyle, Logger};

#[test]
fn info_example_from_the_docs() {
    let sink = Arc::new(BufferSink::new());
    let logger = Logger::builder()
        .info_sink(Box::new(Arc::clone(&sink)))
        .build();

    logger.info(&fields! { "k" => "v" }).unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let pattern = Regex::new(r"^INFO: \d{2}:\d{2}:\d{2}\.\d{6} logger\.rs:\d+: k: v$").unwrap();
    assert!(pattern.is_match(&lines[0]), "unexpected line: {}", lines[0]);
}

#[test]
fn mixed_value_types_render_one_pair_each() {
    let sink = Arc::new(BufferSink::new());
    let logger = Logger::builder()
        .debug_sink(Box::new(Arc::clone(&sink)))
        .build();

    logger
        .debug(&fields! { "word count" => 42, "cached" => false, "url" => "/bar" })
        .unwrap();

    let line = &sink.lines()[0];
    assert!(line.ends_with("cached: false url: /bar word count: 42"));
}

// The recipe for adding a level: hold a base logger plus one extra writer and
// give the new level its own method. Composition only, no overriding.
struct PanicLogger {
    base: Logger,
    panic: LevelWriter,
}

impl PanicLogger {
    fn new(base: Logger, sink: Box<dyn fieldlog::LogSink>) -> Self {
        Self {
            base,
            panic: LevelWriter::new(
                "PANIC: ",
                LineStyle {
                    date: true,
                    long_path: true,
                },
                sink,
            ),
        }
    }

    #[track_caller]
    fn panic_now(&self, fields: &Fields) -> eyre::Result<()> {
        let location = Location::caller();
        let payload = fieldlog::render_fields(fields).context("PANIC log failed")?;
        self.panic.emit(location, &payload)?;
        panic!("{}", payload);
    }
}

#[test]
fn composed_logger_adds_a_sixth_level() {
    let base_sink = Arc::new(BufferSink::new());
    let panic_sink = Arc::new(BufferSink::new());
    let logger = PanicLogger::new(
        Logger::builder()
            .info_sink(Box::new(Arc::clone(&base_sink)))
            .build(),
        Box::new(Arc::clone(&panic_sink)),
    );

    logger.base.info(&fields! { "state" => "running" }).unwrap();

    let caught = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        let _ = logger.panic_now(&fields! { "reason" => "unrecoverable" });
    }))
    .unwrap_err();

    let message = caught.downcast_ref::<String>().unwrap();
    assert_eq!(message, "reason: unrecoverable");

    assert_eq!(base_sink.lines().len(), 1);
    let lines = panic_sink.lines();
    assert_eq!(lines.len(), 1);
    let pattern = Regex::new(
        r"^PANIC: \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\.\d{6} \S*tests/logger\.rs:\d+: reason: unrecoverable$",
    )
    .unwrap();
    assert!(pattern.is_match(&lines[0]), "unexpected line: {}", lines[0]);
}

#[test]
fn composed_logger_still_rejects_empty_fields() {
    let panic_sink = Arc::new(BufferSink::new());
    let logger = PanicLogger::new(Logger::builder().build(), Box::new(Arc::clone(&panic_sink)));

    let err = logger.panic_now(&fields! {}).unwrap_err();

    assert_eq!(err.to_string(), "PANIC log failed");
    assert!(panic_sink.lines().is_empty());
}
