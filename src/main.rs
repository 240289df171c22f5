fn main() {
    octoctl::app::cli::run();
}
