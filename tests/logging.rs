use std::{
    sync::{atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
    time::Duration,
};

use anylist::{AnyBox, TypeTag};
use log::{LevelFilter, Log, Metadata, Record};


/// Reads a box and asks for a tag from inside every log call.
struct BoxReadingLogger {
    calls: AtomicUsize,
}

impl Log for BoxReadingLogger {
    fn enabled(&self, _: &Metadata) -> bool { true }

    fn log(&self, _: &Record) {
        let value = AnyBox::new(1u8);
        assert_eq!(value.get::<u8>(), Ok(&1));
        assert!(value.current_type() != TypeTag::of::<u16>());
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    fn flush(&self) {}
}

static LOGGER: BoxReadingLogger = BoxReadingLogger { calls: AtomicUsize::new(0) };


#[test]
fn logger_may_use_boxes_during_registration() {
    struct Fresh;

    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let tag = TypeTag::of::<Fresh>();
        let mut value = AnyBox::new(0i8);
        value.assign(tag.id());
        tx.send(value.cast::<u64>()).unwrap();
    });

    let id = rx
        .recv_timeout(Duration::from_secs(10))
        .expect("registering a type with a box-reading logger hung");

    assert_eq!(id, Ok(TypeTag::of::<Fresh>().id()));
    assert!(LOGGER.calls.load(Ordering::Relaxed) > 0);
}
