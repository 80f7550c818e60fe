/// Initializes env_logger; `verbose` enables trace output.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .init();
}
