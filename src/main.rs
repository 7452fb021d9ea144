fn main() {
    intro_sync::app::cli::run();
}
