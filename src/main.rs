fn main() {
    if let Err(e) = markdown_journal::cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
