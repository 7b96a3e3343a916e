use linkcard::{cli, logging};

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        eprintln!("linkcard: {err:#}");
    }

    if let Err(err) = cli::run() {
        eprintln!("linkcard error: {:#}", err);
        std::process::exit(1);
    }
}
