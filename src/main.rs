use fairy_engine::{Board, Game};

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    Game::new(Board::fantasy()).play()
}
