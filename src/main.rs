fn main() {
    if let Err(e) = netsim_log_analyser::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
