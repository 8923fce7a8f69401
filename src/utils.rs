use std::env;

pub fn setup_logging(verbose: bool) {
    if verbose {
        env::set_var("RUST_LOG", "info");
    } else {
        env::set_var("RUST_LOG", "error");
    }
    env_logger::init();
}
