fn main() {
    draughts_engine::protocol::run();
}
