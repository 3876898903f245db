use std::time::{Duration, Instant};

use roomgen::{Generator, MazeConfig, generate_maze};

fn main() -> Result<(), roomgen::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(10)
        .max(1);

    for generator in Generator::ALL {
        let mut total = Duration::ZERO;
        let mut rooms = 0;
        for seed in 0..num_iters {
            let config = MazeConfig {
                algorithm: generator,
                seed: Some(seed as u64),
                ..MazeConfig::default()
            };
            let start = Instant::now();
            let maze = generate_maze(&config)?;
            total += start.elapsed();
            rooms += maze.rooms().len();
        }
        println!(
            "{}: {} runs, mean {:?}, mean {} rooms",
            generator,
            num_iters,
            total / num_iters,
            rooms / num_iters as usize
        );
    }
    Ok(())
}
