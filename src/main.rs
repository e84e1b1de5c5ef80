use anyhow::Result;
use clap::Parser;
use vim_snake::game::GameConfig;
use vim_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "vim-snake")]
#[command(version, about = "Terminal snake steered with vim-style hjkl keys")]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value = "30")]
    cols: usize,

    /// Board height in cells
    #[arg(long, default_value = "20")]
    rows: usize,

    /// Initial level; the game runs at `level` ticks per second
    #[arg(long, default_value = "1")]
    starting_level: u32,

    /// Foods eaten before the level increments
    #[arg(long, default_value = "10")]
    foods_per_level: u32,

    /// Level cap
    #[arg(long, default_value = "25")]
    max_level: u32,

    /// Snake segments at game start
    #[arg(long, default_value = "3")]
    snake_size: usize,

    /// Food items on the board at game start
    #[arg(long, default_value = "1")]
    food_count: usize,

    /// Give one grace tick before a collision ends the game
    #[arg(long)]
    grace: bool,

    /// End the game as a win once this score is reached
    #[arg(long)]
    target_score: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        cols: cli.cols,
        rows: cli.rows,
        starting_level: cli.starting_level,
        foods_per_level: cli.foods_per_level,
        max_level: cli.max_level,
        initial_snake_size: cli.snake_size,
        initial_food_count: cli.food_count,
        collision_grace: cli.grace,
        target_score: cli.target_score,
    };

    let mut play_mode = PlayMode::new(config)?;
    play_mode.run().await?;

    Ok(())
}
