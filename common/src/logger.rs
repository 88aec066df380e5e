use log::{LevelFilter, Metadata, Record};
use std::time::Instant;

/// A logger that logs to stdout, prefixing records with the time since startup
pub struct MyLog {
    start: Instant,
}

impl MyLog {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn init() {
        let leaked = Box::leak(Box::new(MyLog::new()));
        crate::unwrap_orr!(log::set_logger(leaked), return);
        log::set_max_level(LevelFilter::Debug);
        log_panics::init();
    }
}

impl log::Log for MyLog {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, r: &Record<'_>) {
        if !self.enabled(r.metadata()) {
            return;
        }
        let time = self.start.elapsed();

        let module_path = r.module_path().unwrap_or_default();
        println!(
            "[{:9.3} {} {}] {}",
            time.as_secs_f32(),
            r.level(),
            module_path,
            r.args()
        );
    }

    fn flush(&self) {}
}
