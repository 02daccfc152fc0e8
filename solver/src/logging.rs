use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// Install the colored logger. `RUST_LOG`, when set, overrides `level`.
    pub fn init(level: LevelFilter) {
        let mut builder: env_logger::Builder = colog::default_builder();
        builder.filter_level(level);
        builder.parse_default_env();
        builder.init();
    }
}
