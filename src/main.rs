fn main() {
    envstage::app::cli::run();
}
