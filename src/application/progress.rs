// Progress lines for the person running the build
use std::io::Write;

/// Writes `[HH:MM:SS] : text` lines to an optional sink.
pub struct ProgressWriter {
    sink: Option<Box<dyn Write + Send>>,
}

impl ProgressWriter {
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Some(Box::new(sink)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Discards every line.
    pub fn silent() -> Self {
        Self { sink: None }
    }

    pub fn print(&mut self, text: &str) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let line = format!("[{}] : {text}", chrono::Local::now().format("%H:%M:%S"));
        // A broken sink must not abort the build.
        if let Err(e) = writeln!(sink, "{line}").and_then(|_| sink.flush()) {
            tracing::warn!(error = %e, %line, "Failed to write progress");
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory sink.
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
