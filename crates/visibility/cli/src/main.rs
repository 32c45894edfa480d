fn main() {
    if let Err(err) = visibility_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
