use std::{cell::RefCell, io};

use common::sink::NotificationSink;

/// Captures published lines in publication order.
#[derive(Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn publish(&self, line: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

/// Rejects every line, for exercising subscribers whose sink is unavailable.
pub struct FailingSink;

impl NotificationSink for FailingSink {
    fn publish(&self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink unavailable"))
    }
}

#[cfg(test)]
mod tests {
    use common::sink::NotificationSink;

    use crate::{FailingSink, RecordingSink};

    #[test]
    fn test_recording_sink_should_keep_lines_in_publication_order() {
        // Given
        let sink = RecordingSink::default();

        // When
        sink.publish("first").unwrap();
        sink.publish("second").unwrap();

        // Then
        assert_eq!(
            vec!["first".to_string(), "second".to_string()],
            sink.lines()
        );
    }

    #[test]
    fn test_failing_sink_should_reject_every_line() {
        // When
        let result = FailingSink.publish("anything");

        // Then
        assert!(matches!(result, Err(_)), "Should fail for any line");
    }
}
