fn main() {
    create_vitron::app::cli::run();
}
