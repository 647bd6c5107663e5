use fairy_engine::{Board, Game};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    Game::new(Board::draughts()).play()
}
