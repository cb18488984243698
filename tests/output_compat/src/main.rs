fn main() {
    println!("Run `cargo test -p output-compat` to execute output compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::thread;

    use chrono::DateTime;
    use conlog::{
        ColorMode, ConsoleLogger, FixedClock, Logger, LoggerConfig, MemorySink, MinimumLogger,
        Severity, Stream,
    };
    use serde::Deserialize;

    /// A rendered-line fixture: every case is rendered at `time`.
    #[derive(Deserialize)]
    struct LineFixture {
        time: String,
        cases: Vec<LineCase>,
    }

    #[derive(Deserialize)]
    struct LineCase {
        severity: Severity,
        color: ColorMode,
        message: String,
        expected: String,
    }

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads and parses a fixture file.
    fn load_fixture(name: &str) -> LineFixture {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    fn clock_at(rfc3339: &str) -> FixedClock {
        FixedClock::new(DateTime::parse_from_rfc3339(rfc3339).unwrap())
    }

    fn capture(config: &LoggerConfig) -> (ConsoleLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = ConsoleLogger::with_parts(
            config,
            clock_at("2024-03-05T07:08:09+09:00"),
            sink.clone(),
        );
        (logger, sink)
    }

    // --- Rendered line fixtures ---

    #[test]
    fn fixture_rendered_lines() {
        let fixture = load_fixture("lines.json");
        assert!(!fixture.cases.is_empty());

        for case in &fixture.cases {
            let sink = MemorySink::new();
            let config = LoggerConfig {
                min_severity: Severity::Debug,
                color: case.color,
                ..LoggerConfig::default()
            };
            let logger = ConsoleLogger::with_parts(&config, clock_at(&fixture.time), sink.clone());

            let rendered = logger.render(case.severity, format_args!("{}", case.message));
            assert_eq!(
                rendered, case.expected,
                "render mismatch for {} ({:?})",
                case.severity, case.color
            );

            logger.log(case.severity, format_args!("{}", case.message));
            assert_eq!(sink.contents(Stream::Stdout), case.expected);
        }
    }

    // --- Behavioral scenarios ---

    #[test]
    fn info_label_prefix_and_stripped_form() {
        let (logger, sink) = capture(&LoggerConfig::default());
        conlog::info!(logger, "Hello, {}!", "world");

        let out = sink.contents(Stream::Stdout);
        assert!(out.starts_with(&conlog::label::info_label()));
        assert!(out.contains("Hello, world!"));
        assert!(conlog::color::strip_ansi(&out).starts_with("[INFO] "));
    }

    #[test]
    fn debug_hidden_at_default_threshold() {
        let (logger, sink) = capture(&LoggerConfig::default());
        conlog::debug!(logger, "x={}", 5);
        assert!(sink.is_empty());
    }

    #[test]
    fn debug_toggle_scenario() {
        let (logger, sink) = capture(&LoggerConfig::default());

        logger.set_min_severity(Severity::Debug);
        conlog::debug!(logger, "x={}", 5);
        let out = sink.contents(Stream::Stdout);
        assert!(out.starts_with("[DEBUG]"));
        assert!(out.contains("x=5"));

        sink.take();
        logger.set_min_severity(Severity::Info);
        conlog::debug!(logger, "x={}", 5);
        assert!(sink.is_empty());
    }

    #[test]
    fn threshold_from_toml_config() {
        let config = LoggerConfig::from_toml(
            r#"
            min_severity = "warn"
            error_stream = "stderr"
            "#,
        )
        .unwrap();
        let (logger, sink) = capture(&config);

        conlog::info!(logger, "dropped");
        conlog::warn!(logger, "kept");
        conlog::error!(logger, "routed");

        assert_eq!(sink.lines().len(), 2);
        assert!(sink.contents(Stream::Stdout).contains("kept"));
        assert!(sink.contents(Stream::Stderr).contains("routed"));
    }

    #[test]
    fn injected_minimum_logger() {
        struct Uploader<L: MinimumLogger> {
            log: L,
        }

        impl<L: MinimumLogger> Uploader<L> {
            fn run(&self) {
                conlog::info!(self.log, "upload started");
                conlog::error!(self.log, "upload failed: {}", "disk full");
            }
        }

        let (logger, sink) = capture(&LoggerConfig::default());
        let uploader = Uploader { log: &logger };
        uploader.run();

        let out = sink.contents(Stream::Stdout);
        assert!(out.contains("upload started"));
        assert!(out.contains("upload failed: disk full"));
    }

    #[test]
    fn shared_across_threads() {
        let (logger, sink) = capture(&LoggerConfig::default());
        let logger: Arc<dyn Logger + Send + Sync> = Arc::new(logger);

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let log = Arc::clone(&logger);
                thread::spawn(move || {
                    for i in 0..25 {
                        conlog::info!(log, "worker {worker} line {i}");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 100);
        for (stream, line) in &lines {
            assert_eq!(*stream, Stream::Stdout);
            assert!(line.ends_with('\n'));
            assert_eq!(line.matches('\n').count(), 1);
        }
    }

    #[test]
    fn threshold_change_visible_across_threads() {
        let (logger, sink) = capture(&LoggerConfig::default());
        let logger = Arc::new(logger);

        let setter = Arc::clone(&logger);
        thread::spawn(move || setter.set_min_severity(Severity::Error))
            .join()
            .unwrap();

        assert_eq!(logger.min_severity(), Severity::Error);
        conlog::warn!(logger, "suppressed");
        assert!(sink.is_empty());
    }
}
