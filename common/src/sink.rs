use std::io;

pub trait NotificationSink {
    fn publish(&self, line: &str) -> io::Result<()>;
}
