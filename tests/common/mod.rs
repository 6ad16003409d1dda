use simplelog::{Config, LevelFilter, TestLogger};

pub const NUM_OF_OPERATIONS: usize = 20_000;

pub fn init_logging() {
    // Every test binary shares one global logger; later calls fail harmlessly.
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}
