use std::{env, rc::Rc};

use anyhow::Result;
use booking::{
    registry::BookingRegistry,
    subscriber::{FamilyMember, LogSink},
};
use common::{sink::NotificationSink, subject_observer::Subject};
use log::info;
use simple_logger::SimpleLogger;
use strum::IntoEnumIterator;
use transports::TransportKind;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let destination = env::args().nth(1).unwrap_or("Paris".to_string());

    let sink: Rc<dyn NotificationSink> = Rc::new(LogSink);
    let mut registry = BookingRegistry::default();
    registry.register_observer(Rc::new(FamilyMember::new("Alice", sink.clone())));
    registry.register_observer(Rc::new(FamilyMember::new("Bob", sink)));

    for kind in TransportKind::iter() {
        let quote = registry.book(kind.option(), &destination);
        info!(
            "{}: {} for {} ({} quality)",
            quote.mode, quote.duration, quote.price, quote.quality
        );
    }

    Ok(())
}
