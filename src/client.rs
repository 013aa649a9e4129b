use crate::{
    game::{ChoosePlayerKind, GameEvent, GameOptions, Prompt},
    session::Session,
    text::Text,
};
use anyhow::{bail, Context};
use std::io::{BufRead, Write};

/// The terminal client shared by every player at the table.
pub struct Console<R, W> {
    input: R,
    output: W,
    text: Text,
    /// The kind of the last prompt shown, so retries don't repeat the announcement.
    last_prompt: Option<ChoosePlayerKind>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a new console client.
    pub fn new(input: R, output: W, text: Text) -> Self {
        Self {
            input,
            output,
            text,
            last_prompt: None,
        }
    }

    /// Asks for the number of players until a supported count is given.
    pub fn read_player_count(&mut self) -> anyhow::Result<GameOptions> {
        loop {
            write!(self.output, "{}", self.text.ask_player_count())?;
            self.output.flush()?;
            let line = self.read_line()?;
            match line.trim().parse::<usize>().ok().map(GameOptions::new) {
                Some(Ok(options)) => return Ok(options),
                _ => writeln!(self.output, "{}", self.text.invalid_player_count())?,
            }
        }
    }

    /// Plays the session through to the end of the game.
    pub fn play(&mut self, session: &mut Session) -> anyhow::Result<()> {
        let role = session.game().role_of(0)?;
        writeln!(self.output, "{}", self.text.your_role(role))?;

        loop {
            for event in session.drain_events() {
                self.show_event(&event)?;
            }

            let Prompt::ChoosePlayer { kind, actor, options } = session.game().prompt() else {
                break;
            };

            if self.last_prompt != Some(kind) {
                writeln!(self.output, "{}", self.text.wakes_up(kind))?;
                self.last_prompt = Some(kind);
            }
            write!(self.output, "{}", self.text.choose_target(kind, actor, &options))?;
            self.output.flush()?;

            // Players are numbered from 1 on screen
            let line = self.read_line()?;
            let Some(target) = line.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
                log::debug!("unreadable selection {:?}", line.trim());
                writeln!(self.output, "{}", self.text.invalid_selection())?;
                continue;
            };

            match session.choose_player(target) {
                Ok(()) => {}
                // The game records the rejection, which is shown with the other events
                Err(err) if err.is_retryable() => {}
                Err(err) => return Err(err.into()),
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn show_event(&mut self, event: &GameEvent) -> anyhow::Result<()> {
        let line = match *event {
            GameEvent::RoundStarted { round } => self.text.round_started(round),
            GameEvent::InvalidSelection { .. } => self.text.invalid_selection(),
            GameEvent::TargetChosen { turn, target } => self.text.target_chosen(turn, target),
            GameEvent::Investigation { target, is_mafia } => self.text.investigation(target, is_mafia),
            GameEvent::Dawn { killed } => self.text.dawn(killed),
            // Votes are typed in the open, so there is nothing to add
            GameEvent::VoteCast { .. } => return Ok(()),
            GameEvent::VoteTied => self.text.vote_tied(),
            GameEvent::PlayerEliminated { player, votes } => self.text.eliminated(player, votes),
            GameEvent::GameOver { outcome, .. } => self.text.game_over(outcome),
        };
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("could not read from the terminal")?;
        if read == 0 {
            bail!("input ended before the game was over");
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Language;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), vec![], Text::new(Language::English))
    }

    /// Works out the 1-based answers that play the game by always taking the first option.
    fn script_for(options: GameOptions, seed: u64) -> Vec<String> {
        let mut session = Session::new(options, seed).unwrap();
        let mut answers = vec![];
        while let Prompt::ChoosePlayer { options, .. } = session.game().prompt() {
            answers.push((options[0] + 1).to_string());
            session.choose_player(options[0]).unwrap();
        }
        answers
    }

    #[test]
    fn rereads_player_count_until_valid() {
        let mut console = console("4\nseven\n\n6\n");
        let options = console.read_player_count().unwrap();
        assert_eq!(options.num_players, 6);

        let output = String::from_utf8(console.output).unwrap();
        assert_eq!(output.matches("not a valid number of players").count(), 3);
    }

    #[test]
    fn plays_a_whole_game() {
        let options = GameOptions { num_players: 7 };
        let mut input = vec!["abc".to_string(), "0".to_string(), "99".to_string()];
        input.extend(script_for(options, 5));
        let mut console = console(&(input.join("\n") + "\n"));

        let mut session = Session::new(options, 5).unwrap();
        console.play(&mut session).unwrap();

        assert!(session.game().game_over());
        let output = String::from_utf8(console.output).unwrap();
        assert!(output.starts_with("Player 1, you are the "));
        assert!(output.contains("--- Round 1 ---"));
        assert!(output.contains("The mafia wakes up..."));
        assert!(output.contains("The mafia chooses player "));
        assert_eq!(output.matches("Invalid choice, try again.").count(), 3);
        assert_eq!(output.matches("The mafia wakes up...").count(), session.game().round());
        assert!(output.trim_end().ends_with("win!") || output.trim_end().ends_with("wins!"));
    }

    #[test]
    fn stops_when_input_runs_out() {
        let mut console = console("2\n");
        let mut session = Session::new(GameOptions { num_players: 5 }, 1).unwrap();
        let err = console.play(&mut session).unwrap_err();
        assert!(err.to_string().contains("input ended"));
        assert!(!session.game().game_over());
    }

    #[test]
    fn speaks_russian() {
        let mut console = Console::new(Cursor::new(b"5\n".to_vec()), vec![], Text::new(Language::Russian));
        console.read_player_count().unwrap();
        let output = String::from_utf8(console.output).unwrap();
        assert!(output.starts_with("Введите количество игроков"));
    }
}
