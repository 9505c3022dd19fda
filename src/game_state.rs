use crate::dictionary::DictionaryChecker;
use crate::engine::{Accepted, Alert, EngineError, GameEngine, GameSnapshot};
use crate::wordbank::RootWordSource;
use crate::{debug_log, info_log};

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewGame,
    Exit,
}

/// Presentation surface driven by [`game_loop`].
///
/// Implemented by the line-oriented CLI and the ratatui TUI.
pub trait GameInterface {
    /// Block until the player does something. `None` means nothing actionable.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_game(&mut self, snapshot: &GameSnapshot);
    fn display_accepted(&mut self, accepted: &Accepted);
    fn display_rejection(&mut self, alert: &Alert);
    fn display_new_game(&mut self, root_word: &str);
    fn display_exit_message(&mut self);
}

/// Main game loop: render, read an action, apply it to the engine.
///
/// Only a failed restart (no root word) ends the loop with an error.
pub fn game_loop<S, D, I>(engine: &mut GameEngine<S, D>, interface: &mut I) -> Result<(), EngineError>
where
    S: RootWordSource,
    D: DictionaryChecker,
    I: GameInterface,
{
    info_log!("game_loop() - starting with root word '{}'", engine.root_word());
    interface.display_new_game(engine.root_word());

    loop {
        interface.display_game(&engine.snapshot());

        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                engine.reset_for_new_game()?;
                interface.display_new_game(engine.root_word());
            }
            UserAction::Submit(text) => {
                engine.set_pending_input(&text);
                match engine.submit_word(&text) {
                    Ok(Some(accepted)) => interface.display_accepted(&accepted),
                    Ok(None) => {}
                    Err(rejection) => interface.display_rejection(&rejection.alert()),
                }
            }
        }
    }

    info_log!("game_loop() - finished with score {}", engine.score());
    Ok(())
}
