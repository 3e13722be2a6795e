#![cfg(feature = "std")]

//! The terminal game loop: prompts, retries and screen updates around [`Game`].

use std::fmt;
use std::io::{BufRead, Write};
use std::string::String;
use std::thread;

use anyhow::{bail, Context};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    config::GameConfig,
    game::{Game, Phase, PlayerId},
    input::{parse_placement, parse_target, random_placement_command},
    render::Screen,
    turn::Shot,
};

/// Consecutive rejected random placements before dev mode gives up.
const MAX_RANDOM_CONFLICTS: usize = 10_000;
/// Consecutive failed or empty reads before an interactive session gives up.
const MAX_READ_FAILURES: usize = 100;

/// The command stream ended before the game did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input closed before the game finished")
    }
}

impl std::error::Error for InputClosed {}

/// How a finished game went.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSummary {
    pub winner: PlayerId,
    pub winner_name: String,
    /// Shots fired by each player, indexed by [`PlayerId::index`].
    pub shots: [usize; 2],
}

/// Runs one session, reading commands from `input` and drawing to `out`.
pub struct Driver<R, W> {
    config: GameConfig,
    input: R,
    out: W,
    rng: SmallRng,
    screen: Screen,
    last_shot: Option<String>,
    read_failures: usize,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(config: GameConfig, input: R, out: W) -> anyhow::Result<Self> {
        config.validate().context("invalid game configuration")?;
        let rng = match config.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let screen = Screen::for_boards(config.dims, 2);
        Ok(Self {
            config,
            input,
            out,
            rng,
            screen,
            last_shot: None,
            read_failures: 0,
        })
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Play a whole game: placement for both players, then shots until one fleet is sunk.
    pub fn run(&mut self) -> anyhow::Result<GameSummary> {
        let mut game = Game::new(self.config.dims, self.config.fleet, self.config.turn_rules());
        log::info!(
            "new game {}x{}, dev mode {}",
            self.config.dims.width(),
            self.config.dims.height(),
            self.config.dev_mode
        );
        self.place_fleets(&mut game)?;
        let summary = self.play(&mut game)?;
        self.show_final(&game, &summary)?;
        Ok(summary)
    }

    fn place_fleets(&mut self, game: &mut Game) -> anyhow::Result<()> {
        for player in PlayerId::BOTH {
            let mut conflicts = 0;
            while let Some(ship) = game.next_ship(player) {
                let name = self.config.name(player).to_owned();
                let prompt = format!("{}, {} ({})> ", name, ship.name(), ship.length());

                let command = if self.config.dev_mode {
                    if conflicts == 0 {
                        self.draw_placement(game, player, &name)?;
                    }
                    random_placement_command(&mut self.rng, &self.config.alphabet, self.config.dims)
                } else {
                    self.draw_placement(game, player, &name)?;
                    match self.read_command(&prompt)? {
                        Some(line) => line,
                        None => continue,
                    }
                };

                let parsed =
                    parse_placement(&command, &self.config.alphabet, self.config.dims, ship);
                let (origin, orientation) = match parsed {
                    Ok(p) => p,
                    Err(e) if self.config.dev_mode => bail!("bad random input {:?}: {}", command, e),
                    Err(e) => {
                        self.notice(&format!("BAD INPUT {:?}: {}", command, e))?;
                        continue;
                    }
                };

                let (start, end) = ship.span(origin, orientation);
                match game.place_ship(player, start, end) {
                    Ok(_) => conflicts = 0,
                    Err(e) if self.config.dev_mode => {
                        conflicts += 1;
                        if conflicts >= MAX_RANDOM_CONFLICTS {
                            bail!("no room for {} after {} random attempts: {}", ship.name(), conflicts, e);
                        }
                    }
                    Err(e) => self.notice(&format!("CONFLICT: {}", e))?,
                }
            }
        }
        Ok(())
    }

    fn draw_placement(&mut self, game: &Game, player: PlayerId, name: &str) -> anyhow::Result<()> {
        self.screen.clear();
        self.screen
            .render_board(game.board(player), &self.config.alphabet, 2, 2, true, name);
        self.screen.print(&mut self.out, self.config.clear_screen)?;
        Ok(())
    }

    fn play(&mut self, game: &mut Game) -> anyhow::Result<GameSummary> {
        let mut shots = [0usize; 2];
        loop {
            match game.phase() {
                Phase::Playing => {}
                Phase::GameOver { winner } => {
                    return Ok(GameSummary {
                        winner,
                        winner_name: self.config.name(winner).to_owned(),
                        shots,
                    })
                }
                Phase::Placing => bail!("fleets are not fully placed"),
            }

            let shooter = game.current_turn();
            self.draw_battle(game)?;
            let prompt = format!("{}> ", self.config.name(shooter));
            let line = match self.read_command(&prompt)? {
                Some(line) => line,
                None => continue,
            };
            let at = match parse_target(&line, &self.config.alphabet, self.config.dims) {
                Ok(at) => at,
                Err(e) => {
                    self.notice(&format!("BAD INPUT {:?}: {}", line, e))?;
                    continue;
                }
            };

            let report = game.fire(at)?;
            shots[shooter.index()] += 1;
            let verdict = match report.shot {
                Shot::Hit => "HIT",
                Shot::Miss => "MISS",
            };
            let repeat = if report.repeated { " (already fired)" } else { "" };
            self.last_shot = Some(format!(
                "{} fired at {}: {}{}",
                self.config.name(shooter),
                self.config.alphabet.format(at),
                verdict,
                repeat
            ));
        }
    }

    fn draw_battle(&mut self, game: &Game) -> anyhow::Result<()> {
        let alphabet = self.config.alphabet;
        self.screen.clear();
        if self.config.dev_mode {
            let owner = game.current_turn().opponent();
            self.screen
                .render_board(game.board(owner), &alphabet, 0, 0, true, self.config.name(owner));
        } else {
            let stride = Screen::board_stride(self.config.dims);
            for (i, owner) in PlayerId::BOTH.into_iter().enumerate() {
                self.screen.render_board(
                    game.board(owner),
                    &alphabet,
                    i * stride,
                    0,
                    false,
                    self.config.name(owner),
                );
            }
        }
        self.screen.print(&mut self.out, self.config.clear_screen)?;
        if let Some(line) = &self.last_shot {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn show_final(&mut self, game: &Game, summary: &GameSummary) -> anyhow::Result<()> {
        let alphabet = self.config.alphabet;
        let stride = Screen::board_stride(self.config.dims);
        self.screen.clear();
        for (i, owner) in PlayerId::BOTH.into_iter().enumerate() {
            self.screen
                .render_board(game.board(owner), &alphabet, i * stride, 0, true, self.config.name(owner));
        }
        self.screen.print(&mut self.out, self.config.clear_screen)?;
        writeln!(
            self.out,
            "{} wins after {} shots!",
            summary.winner_name,
            summary.shots[summary.winner.index()]
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Prompt and read one line. `Ok(None)` asks the caller to prompt again.
    fn read_command(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) if self.config.dev_mode => Err(InputClosed.into()),
            Ok(0) => {
                self.read_failures += 1;
                if self.read_failures >= MAX_READ_FAILURES {
                    return Err(InputClosed.into());
                }
                log::warn!("input ended, prompting again");
                Ok(None)
            }
            Ok(_) => {
                self.read_failures = 0;
                Ok(Some(line.trim().to_owned()))
            }
            Err(e) if self.config.dev_mode => Err(e).context("reading command"),
            Err(e) => {
                self.read_failures += 1;
                if self.read_failures >= MAX_READ_FAILURES {
                    return Err(e).context("too many failed reads");
                }
                log::warn!("failed to read command: {}", e);
                Ok(None)
            }
        }
    }

    fn notice(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        if !self.config.notice_pause.is_zero() {
            thread::sleep(self.config.notice_pause);
        }
        Ok(())
    }
}
