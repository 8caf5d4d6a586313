fn main() {
    if let Err(e) = langfix_shell::run() {
        tracing::error!("Error: {:#}", e);
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}
