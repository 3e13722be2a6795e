#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{init_logging, Alphabet, Dimensions, Driver, GameConfig, TurnRules};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::time::Duration;

#[cfg(feature = "std")]
#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlphabetArg {
    Latin,
    Cyrillic,
}

#[cfg(feature = "std")]
#[derive(ValueEnum, Clone, Copy, Debug)]
enum RulesArg {
    /// A hit earns another shot, a miss passes the turn.
    Standard,
    /// Players alternate after every shot.
    Alternating,
}

/// Two-player sea battle on a shared terminal.
#[cfg(feature = "std")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Dev mode: random ship placement, target board always visible, turn never passes")]
    dev: bool,
    #[arg(long, value_enum, default_value_t = AlphabetArg::Latin)]
    alphabet: AlphabetArg,
    #[arg(long, value_enum, default_value_t = RulesArg::Standard)]
    rules: RulesArg,
    #[arg(long, default_value_t = 10)]
    width: usize,
    #[arg(long, default_value_t = 10)]
    height: usize,
    #[arg(long, value_delimiter = ',', default_values_t = [String::from("Player 1"), String::from("Player 2")])]
    names: Vec<String>,
    #[arg(long, help = "Do not clear the terminal between frames")]
    no_clear: bool,
    #[arg(long, default_value_t = 1000, help = "How long error notices stay on screen")]
    pause_ms: u64,
    #[arg(long, help = "Fix RNG seed for reproducible dev games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
impl Cli {
    fn into_config(self) -> anyhow::Result<GameConfig> {
        let dims = Dimensions::new(self.width, self.height).context("invalid board size")?;
        let [first, second]: [String; 2] = self
            .names
            .try_into()
            .map_err(|_| anyhow::anyhow!("exactly two player names are required"))?;
        Ok(GameConfig {
            dims,
            alphabet: match self.alphabet {
                AlphabetArg::Latin => Alphabet::LATIN,
                AlphabetArg::Cyrillic => Alphabet::CYRILLIC,
            },
            dev_mode: self.dev,
            rules: match self.rules {
                RulesArg::Standard => TurnRules::standard(),
                RulesArg::Alternating => TurnRules::alternating(),
            },
            names: [first, second],
            clear_screen: !self.no_clear,
            notice_pause: Duration::from_millis(self.pause_ms),
            seed: self.seed,
            ..GameConfig::default()
        })
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Cli::parse().into_config()?;
    if let Some(s) = config.seed {
        log::info!("using fixed seed {}", s);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut driver = Driver::new(config, stdin.lock(), stdout.lock())?;
    let summary = driver.run()?;
    log::info!("{} won, shots {:?}", summary.winner_name, summary.shots);
    Ok(())
}
