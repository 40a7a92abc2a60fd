use crate::error::{CliError, Result};
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{filter::LevelFilter, fmt, fmt::MakeWriter, prelude::*};

/// Maps `-v` repetitions and `--quiet` onto the global level filter.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Console writer that hides `bar` while a log record is printed.
///
/// Each record is buffered and handed to the inner writer in one piece inside
/// [`ProgressBar::suspend`], so a warning emitted mid-batch never lands on
/// top of the bar.
pub struct BarAwareWriter<M> {
    bar: ProgressBar,
    inner: M,
}

impl<M> BarAwareWriter<M> {
    pub fn new(bar: ProgressBar, inner: M) -> Self {
        Self { bar, inner }
    }
}

impl<'a, M> MakeWriter<'a> for BarAwareWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SuspendingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SuspendingWriter {
            bar: self.bar.clone(),
            inner: self.inner.make_writer(),
            pending: Vec::new(),
        }
    }
}

pub struct SuspendingWriter<W: Write> {
    bar: ProgressBar,
    inner: W,
    pending: Vec<u8>,
}

impl<W: Write> Write for SuspendingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let record = std::mem::take(&mut self.pending);
        let Self { bar, inner, .. } = self;
        bar.suspend(|| {
            inner.write_all(&record)?;
            inner.flush()
        })
    }
}

impl<W: Write> Drop for SuspendingWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Installs the global subscriber: a compact console layer routed around
/// `bar`, plus a plain-text file layer when `log_file` is given.
pub fn setup_logging(
    verbosity: u8,
    quiet: bool,
    log_file: Option<PathBuf>,
    bar: ProgressBar,
) -> Result<()> {
    let console_layer = fmt::layer()
        .with_writer(BarAwareWriter::new(bar, io::stderr))
        .with_target(false)
        .compact();

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(&path).map_err(CliError::Io)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::{Arc, Once};
    use tracing::{debug, error, info, trace, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None, ProgressBar::hidden())
                .expect("Failed to set up global logger for tests");
        });
    }

    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl SharedSink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn level_filter_maps_flags_to_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(2, true), LevelFilter::OFF);
    }

    #[test]
    fn suspending_writer_holds_record_until_flushed() {
        let sink = SharedSink::default();
        let make = BarAwareWriter::new(ProgressBar::hidden(), {
            let sink = sink.clone();
            move || sink.clone()
        });

        let mut writer = make.make_writer();
        writer.write_all(b"job a.gjf ").unwrap();
        writer.write_all(b"did not converge\n").unwrap();
        assert!(sink.contents().is_empty());

        writer.flush().unwrap();
        assert_eq!(sink.contents(), "job a.gjf did not converge\n");

        writer.write_all(b"second record\n").unwrap();
        drop(writer);
        assert_eq!(
            sink.contents(),
            "job a.gjf did not converge\nsecond record\n"
        );
    }

    #[test]
    #[serial]
    fn warnings_reach_console_while_bar_is_active() {
        let sink = SharedSink::default();
        let bar = ProgressBar::hidden();
        bar.set_length(2);
        bar.inc(1);

        let console_layer = fmt::layer()
            .with_writer(BarAwareWriter::new(bar.clone(), {
                let sink = sink.clone();
                move || sink.clone()
            }))
            .with_ansi(false)
            .with_target(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(level_filter(0, false))
            .with(console_layer);

        tracing::subscriber::with_default(subscriber, || {
            warn!(job = "b.gjf", "Job did not converge; scheduling resubmission.");
            info!("Filtered out at the default level.");
        });

        let output = sink.contents();
        assert!(output.contains("WARN"));
        assert!(output.contains("scheduling resubmission"));
        assert!(output.contains("job=\"b.gjf\""));
        assert!(!output.contains("Filtered out"));
        assert_eq!(bar.position(), 1);
    }

    #[test]
    #[serial]
    fn initialization_and_macros_work() {
        ensure_global_logger_is_set();

        error!("error record");
        warn!("warn record");
        info!("info record");
        debug!("debug record");
        trace!("trace record");
    }

    #[test]
    #[serial]
    fn file_layer_writes_plain_text_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("run.log");

        let file = File::create(&log_path).unwrap();
        let file_layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true);
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            debug!(path = "water.log", "Parsed geometry block.");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Parsed geometry block."));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("path=\"water.log\""));
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let invalid_path = temp_dir.path().join("missing").join("run.log");

        let result = setup_logging(0, false, Some(invalid_path), ProgressBar::hidden());
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
