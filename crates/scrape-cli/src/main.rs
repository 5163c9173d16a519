use scrape_core::logging;

mod cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli::run_from_args().await {
        eprintln!("scrape error: {:#}", err);
        std::process::exit(1);
    }
}
