//! Real-time game driver
//!
//! Ties the simulation to an I/O [`Shell`]: render, wait one tick, read
//! input, advance the simulation, until the game ends or the player quits.

use anyhow::Result;

use crate::render::{FrameBuffer, draw_frame};
use crate::sim::{GameResult, GameState, Intent, tick};

/// What the player asked for on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Intent),
    Quit,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Game reached a terminal result
    Finished(GameResult),
    /// Player quit before the game ended
    Quit,
}

/// I/O collaborator of the game loop
pub trait Shell {
    /// Put a composed frame on screen
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;
    /// Non-blocking input poll; no key pressed is `Steer(Intent::None)`
    fn poll(&mut self) -> Result<Command>;
    /// Block for one tick
    fn sleep_tick(&mut self);
}

/// Run the game until it is won, lost, or the player quits
pub fn run(state: &mut GameState, shell: &mut impl Shell) -> Result<Exit> {
    let mut frame = FrameBuffer::new();
    log::info!("Game started");

    loop {
        frame.clear();
        draw_frame(state, &mut frame);
        shell.present(&frame)?;
        shell.sleep_tick();

        let intent = match shell.poll()? {
            Command::Steer(intent) => intent,
            Command::Quit => {
                log::info!("Player quit after {} ticks", state.time_ticks);
                return Ok(Exit::Quit);
            }
        };

        let result = tick(state, intent);
        if result.is_over() {
            return Ok(Exit::Finished(result));
        }
    }
}

/// Boxed end-of-game message
pub fn banner(result: GameResult) -> Option<String> {
    let message = match result {
        GameResult::Won => "You win! >:) ",
        GameResult::Lost => "You lose! >:(",
        GameResult::Playing => return None,
    };
    Some(format!(
        "\n\t#################\n\t# {} #\n\t#################\n\n",
        message
    ))
}

/// Print the end-of-game message. Call after the terminal is restored.
pub fn announce(result: GameResult) {
    if let Some(text) = banner(result) {
        print!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{Ball, BlockId};
    use glam::IVec2;
    use std::collections::VecDeque;

    /// Shell that replays scripted commands and records frames
    #[derive(Default)]
    struct ScriptedShell {
        commands: VecDeque<Command>,
        frames: Vec<FrameBuffer>,
        sleeps: usize,
    }

    impl Shell for ScriptedShell {
        fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }

        fn poll(&mut self) -> Result<Command> {
            Ok(self
                .commands
                .pop_front()
                .unwrap_or(Command::Steer(Intent::None)))
        }

        fn sleep_tick(&mut self) {
            self.sleeps += 1;
        }
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut state = GameState::new();
        let mut shell = ScriptedShell {
            commands: VecDeque::from([
                Command::Steer(Intent::MoveLeft),
                Command::Steer(Intent::MoveLeft),
                Command::Quit,
            ]),
            ..Default::default()
        };
        let exit = run(&mut state, &mut shell).unwrap();
        assert_eq!(exit, Exit::Quit);
        assert_eq!(shell.frames.len(), 3);
        assert_eq!(shell.sleeps, 3);
        assert_eq!(state.paddle.x, PAD_START_X - 2);
        assert_eq!(state.result, GameResult::Playing);
    }

    #[test]
    fn test_unattended_game_is_lost() {
        let mut state = GameState::new();
        let mut shell = ScriptedShell::default();
        let exit = run(&mut state, &mut shell).unwrap();
        assert_eq!(exit, Exit::Finished(GameResult::Lost));
        assert_eq!(state.result, GameResult::Lost);
        // One frame per tick
        assert_eq!(shell.frames.len() as u64, state.time_ticks);
    }

    #[test]
    fn test_frames_follow_paddle() {
        let mut state = GameState::new();
        let mut shell = ScriptedShell {
            commands: VecDeque::from([Command::Steer(Intent::MoveRight), Command::Quit]),
            ..Default::default()
        };
        run(&mut state, &mut shell).unwrap();
        let row = PAD_Y as usize;
        assert_eq!(shell.frames[0].get(row, 20), Some('-'));
        assert_eq!(shell.frames[1].get(row, 20), Some(' '));
        assert_eq!(shell.frames[1].get(row, 23), Some('-'));
    }

    #[test]
    fn test_winning_run() {
        let mut state = GameState::new();
        let last = BlockId { row: 1, col: 3 };
        for row in 0..BLOCK_ROWS {
            for col in 0..BLOCK_COLS {
                if (BlockId { row, col }) != last {
                    state.blocks.break_block(BlockId { row, col });
                }
            }
        }
        // Straight into the bottom edge of block (1, 3)
        state.ball = Ball {
            pos: IVec2::new(60, 2 * BLOCK_H),
            dir: IVec2::new(-1, -1),
        };
        let mut shell = ScriptedShell::default();
        let exit = run(&mut state, &mut shell).unwrap();
        assert_eq!(exit, Exit::Finished(GameResult::Won));
        assert_eq!(shell.frames.len(), BALL_DELAY as usize);
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(
            banner(GameResult::Won).unwrap(),
            "\n\t#################\n\t# You win! >:)  #\n\t#################\n\n"
        );
        assert_eq!(
            banner(GameResult::Lost).unwrap(),
            "\n\t#################\n\t# You lose! >:( #\n\t#################\n\n"
        );
        assert_eq!(banner(GameResult::Playing), None);
    }
}
