use std::io::{self, Write};
use std::sync::Mutex;

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

/// Activate buffering. While active, log output is stored instead of
/// being printed to stderr.
pub fn activate() {
    if let Ok(mut guard) = BUFFER.lock() {
        *guard = Some(Vec::new());
    }
}

/// Deactivate buffering and return all collected messages.
pub fn drain() -> Vec<String> {
    BUFFER
        .lock()
        .map(|mut guard| guard.take().unwrap_or_default())
        .unwrap_or_default()
}

/// Store a message if buffering is active; otherwise print it to stderr immediately.
pub fn write_message(msg: &str) {
    let mut guard = match BUFFER.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(buf) = guard.as_mut() {
        buf.push(msg.trim_end().to_string());
    } else {
        drop(guard);
        eprint!("{}", msg);
    }
}

/// `io::Write` sink that routes through the buffer; handed to the logger.
pub struct BufferedStderr;

impl Write for BufferedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        write_message(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_collects_while_active() {
        activate();
        let mut sink = BufferedStderr;
        sink.write_all(b"first line\n").unwrap();
        write_message("second\n");
        let drained = drain();
        // Other tests may log concurrently, so only check ours arrived in order
        let first = drained.iter().position(|m| m == "first line").unwrap();
        let second = drained.iter().position(|m| m == "second").unwrap();
        assert!(first < second);
    }
}
