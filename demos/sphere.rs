//! Sphere Function Optimization
//!
//! Runs the unimodal preset against the Sphere function with a seeded RNG
//! and a hard cap of 10 000 fitness evaluations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sigma_evo::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut rng = StdRng::seed_from_u64(42);

    const DIM: usize = 10;
    let space = SearchSpace::new(DIM, -5.0, 5.0)?;

    let strategy = Strategy::unimodal(&space);
    let engine = Engine::new(space, strategy, 10_000)?;

    let result = engine.run(&mut Sphere, &mut rng)?;

    println!("Optimization complete!");
    println!("  Best fitness: {:.6}", result.best.fitness.unwrap_or(f64::NAN));
    println!("  Generations:  {}", result.generations);
    println!("  Evaluations:  {}", result.evaluations);
    println!("\nBest solution:");
    for (i, val) in result.best.genotype.iter().enumerate() {
        println!("  x[{}] = {:.6}", i, val);
    }

    Ok(())
}
