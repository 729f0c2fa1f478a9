use tic_tac_toe::game::Celebration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfettiCommand {
    Play,
    Stop,
}

/// [`Celebration`] that queues a command for the confetti systems to pick up on the next frame.
/// Only the latest command is kept.
#[derive(Debug, Default)]
pub struct ConfettiLauncher {
    pending: Option<ConfettiCommand>,
}

impl ConfettiLauncher {
    #[cfg(test)]
    pub fn pending(&self) -> Option<ConfettiCommand> {
        self.pending
    }

    pub fn take(&mut self) -> Option<ConfettiCommand> {
        self.pending.take()
    }
}

impl Celebration for ConfettiLauncher {
    fn play(&mut self) {
        self.pending = Some(ConfettiCommand::Play);
    }

    fn stop(&mut self) {
        self.pending = Some(ConfettiCommand::Stop);
    }
}
