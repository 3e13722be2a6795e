use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{simulate, Dimensions, TurnRules, STANDARD_FLEET};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let summary = simulate(
        Dimensions::STANDARD,
        &STANDARD_FLEET,
        TurnRules::standard(),
        &mut rng,
    )?;

    let result = json!({
        "seed": seed,
        "winner": summary.winner,
        "shots": summary.shots,
        "hits": summary.hits,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
