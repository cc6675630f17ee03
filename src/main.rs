fn main() {
    filmfind::run();
}
