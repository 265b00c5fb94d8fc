// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Result, bail};
use crossterm::{
    queue,
    style::{self, StyledContent, Stylize},
};
use std::io::{self, BufRead, Write};

use drawpoker_core::{Card, Game, GameState, Phase, TOTAL_ROUNDS, best_hand, computer_action};

const HELP: &str = "\
Commands:
  d <cards>  toggle cards for discard, by position (1-7) or name (AH, td)
  x          discard the selected cards
  p          play without discarding
  s <cards>  toggle cards for submit
  b          select the best five cards
  c          submit the selected cards or continue to the next round
  n          start a new game
  h          show this help
  q          quit";

/// Terminal game configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Seed for a reproducible game.
    pub seed: Option<u64>,
    /// Let the computer strategy play the player hand.
    pub auto: bool,
    /// Print the final game state as JSON.
    pub json: bool,
}

/// A command read from the terminal.
#[derive(Debug, PartialEq)]
enum Command {
    Discard(Vec<Card>),
    ConfirmDiscard,
    KeepAll,
    Submit(Vec<Card>),
    Best,
    Confirm,
    NewGame,
    Help,
    Quit,
}

/// Runs the terminal loop.
pub fn run(config: Config) -> Result<()> {
    let mut game = match config.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };

    let mut stdout = io::stdout();
    if config.auto {
        play_auto(&mut stdout, &mut game)?;
        if config.json {
            print_json(&mut stdout, game.state())?;
        }
    } else {
        writeln!(stdout, "{HELP}")?;
        play_interactive(&mut stdout, &mut game, config.json)?;
    }

    Ok(())
}

/// Plays a whole game using the computer strategy for the player.
fn play_auto(w: &mut impl Write, game: &mut Game) -> Result<()> {
    while !game.state().is_game_over() {
        let hand = game.state().player_hand().to_vec();
        let phase = game.state().phase().clone();
        match phase {
            Phase::Dealing => {
                game.start_new_round();
            }
            Phase::Discarding { .. } => {
                for card in computer_action(&hand)?.discards {
                    game.select_card_for_discard(card);
                }
                game.confirm_discard();
            }
            Phase::Submitting { .. } => {
                for card in computer_action(&hand)?.submission {
                    game.select_card_for_submit(card);
                }
                game.confirm_submit();
                print_state(w, game.state())?;
            }
            Phase::Revealing => {
                game.continue_after_reveal();
            }
            Phase::GameEnd => {}
        }
    }

    print_state(w, game.state())
}

fn play_interactive(w: &mut impl Write, game: &mut Game, json: bool) -> Result<()> {
    game.start_new_round();
    print_state(w, game.state())?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = match parse_command(&line, game.state().player_hand()) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(w, "{}", e.to_string().red())?;
                continue;
            }
        };

        let was_over = game.state().is_game_over();
        match cmd {
            Command::Discard(cards) => {
                for card in cards {
                    game.select_card_for_discard(card);
                }
            }
            Command::ConfirmDiscard => {
                game.confirm_discard();
            }
            Command::KeepAll => {
                game.play_hand_without_discard();
            }
            Command::Submit(cards) => {
                for card in cards {
                    game.select_card_for_submit(card);
                }
            }
            Command::Best => select_best(game)?,
            Command::Confirm => {
                if matches!(game.state().phase(), Phase::Submitting { .. }) {
                    game.confirm_submit();
                } else {
                    game.continue_after_reveal();
                }
            }
            Command::NewGame => {
                game.reset_game();
            }
            Command::Help => {
                writeln!(w, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }

        if matches!(game.state().phase(), Phase::Dealing) {
            game.start_new_round();
        }

        print_state(w, game.state())?;

        if json && !was_over && game.state().is_game_over() {
            print_json(w, game.state())?;
        }
    }

    Ok(())
}

/// Replaces the submit selection with the best five cards.
fn select_best(game: &mut Game) -> Result<()> {
    if !matches!(game.state().phase(), Phase::Submitting { .. }) {
        return Ok(());
    }

    let best = best_hand(game.state().player_hand())?;
    for card in game.state().selected_for_submit().to_vec() {
        game.select_card_for_submit(card);
    }

    for &card in best.cards() {
        game.select_card_for_submit(card);
    }

    Ok(())
}

fn parse_command(line: &str, hand: &[Card]) -> Result<Option<Command>> {
    let mut args = line.split_whitespace();
    let Some(cmd) = args.next() else {
        return Ok(None);
    };

    let cmd = match cmd {
        "d" => Command::Discard(parse_cards(args, hand)?),
        "x" => Command::ConfirmDiscard,
        "p" => Command::KeepAll,
        "s" => Command::Submit(parse_cards(args, hand)?),
        "b" => Command::Best,
        "c" => Command::Confirm,
        "n" => Command::NewGame,
        "h" => Command::Help,
        "q" => Command::Quit,
        _ => bail!("Unknown command {cmd}, type h for help"),
    };

    Ok(Some(cmd))
}

/// Parses cards by their position in hand or by name.
fn parse_cards<'a>(args: impl Iterator<Item = &'a str>, hand: &[Card]) -> Result<Vec<Card>> {
    let cards = args
        .map(|arg| -> Result<Card> {
            match arg.parse::<usize>() {
                Ok(pos) if (1..=hand.len()).contains(&pos) => Ok(hand[pos - 1]),
                Ok(pos) => bail!("Invalid card position {pos}"),
                Err(_) => Ok(arg.parse::<Card>()?),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    if cards.is_empty() {
        bail!("No cards given");
    }

    Ok(cards)
}

fn print_json(w: &mut impl Write, state: &GameState) -> Result<()> {
    writeln!(w, "{}", serde_json::to_string_pretty(state)?)?;
    Ok(())
}

fn print_state(w: &mut impl Write, state: &GameState) -> Result<()> {
    let score = format!(
        "Round {}/{TOTAL_ROUNDS}  You {}  Computer {}  Ties {}  Deck {}",
        state.round(),
        state.player_wins(),
        state.ai_wins(),
        state.ties(),
        state.deck_count()
    );

    queue!(
        w,
        style::Print("\n"),
        style::PrintStyledContent(score.dark_green()),
        style::Print("\n")
    )?;

    match state.phase() {
        Phase::Revealing | Phase::GameEnd => {
            if let Some(res) = state.last_result() {
                writeln!(w, "Computer: {}", res.ai_hand())?;
                writeln!(w, "You:      {}", res.player_hand())?;
                queue!(
                    w,
                    style::PrintStyledContent(res.winner().to_string().bold()),
                    style::Print("\n")
                )?;
            }
        }
        _ => {
            write!(w, "Computer:")?;
            for _ in state.ai_hand() {
                write!(w, " ▒▒")?;
            }
            writeln!(w)?;

            let selected: &[Card] = match state.phase() {
                Phase::Discarding { selected } => selected.as_slice(),
                Phase::Submitting { selected, .. } => selected.as_slice(),
                _ => &[],
            };

            write!(w, "You:     ")?;
            for (pos, card) in state.player_hand().iter().enumerate() {
                let text = styled_card(*card, selected.contains(card));
                queue!(w, style::Print(format!(" {}:", pos + 1)))?;
                queue!(w, style::PrintStyledContent(text))?;
            }
            writeln!(w)?;
        }
    }

    let prompt = match state.phase() {
        Phase::Dealing => "Dealing",
        Phase::Discarding { .. } => "Select up to 2 cards to discard (d), then x, or p to keep all",
        Phase::Submitting { .. } => "Select 5 cards to play (s or b), then c",
        Phase::Revealing => "Press c to continue",
        Phase::GameEnd => "Game over, n for a new game or q to quit",
    };

    if let Some(winner) = state.game_winner() {
        queue!(
            w,
            style::PrintStyledContent(format!("Match: {winner}").bold().yellow()),
            style::Print("\n")
        )?;
    }

    queue!(w, style::PrintStyledContent(prompt.dark_grey()), style::Print("\n"))?;
    w.flush()?;

    Ok(())
}

/// A card with its suit symbol, red suits in red.
fn styled_card(card: Card, selected: bool) -> StyledContent<String> {
    let text = format!("{}{}", card.rank(), card.suit().symbol());
    let text = if card.suit().is_red() {
        text.red()
    } else {
        text.white()
    };

    if selected { text.reverse() } else { text }
}
