fn main() {
    symptra::run();
}
