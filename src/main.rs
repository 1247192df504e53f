fn main() {
    std::process::exit(ansigenome::app::cli::run());
}
