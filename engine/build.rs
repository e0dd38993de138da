fn main() {
    // build time info, reported with every run
    built::write_built_file().expect("Failed to acquire build-time information");
}
