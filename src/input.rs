use std::io;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TryRecvError, TrySendError};
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error, trace};

use crate::snake::Direction;

/// Everything the player can ask of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    TogglePause,
    Quit,
}

impl Command {
    /// Maps a key press to a command. Releases, repeats and unbound keys map to `None`.
    pub fn from_key(ev: &KeyEvent) -> Option<Command> {
        if ev.kind != KeyEventKind::Press {
            return None;
        }
        if is_ctrl_c(ev) {
            return Some(Command::Quit);
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Up => Some(Command::Up),
            KeyCode::Char('a') | KeyCode::Left => Some(Command::Left),
            KeyCode::Char('s') | KeyCode::Down => Some(Command::Down),
            KeyCode::Char('d') | KeyCode::Right => Some(Command::Right),
            KeyCode::Char('p') | KeyCode::Esc => Some(Command::TogglePause),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            Command::TogglePause | Command::Quit => None,
        }
    }
}

/// Starts the background thread that blocks on terminal events and hands
/// commands to the game loop through a queue holding at most `capacity` items.
pub fn spawn_listener(capacity: usize) -> io::Result<Receiver<Command>> {
    let (tx, rx) = sync_channel(capacity);
    thread::Builder::new()
        .name("input".into())
        .spawn(move || forward(std::iter::repeat_with(event::read), &tx))?;
    Ok(rx)
}

/// Pumps `events` into `tx` until the source fails or the game hangs up.
/// Commands that arrive while the queue is full are dropped.
pub fn forward<I>(events: I, tx: &SyncSender<Command>)
where
    I: IntoIterator<Item = io::Result<Event>>,
{
    for ev in events {
        let key = match ev {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(e) => {
                error!(error = %e, "reading terminal events failed, input listener stopping");
                return;
            }
        };

        let Some(cmd) = Command::from_key(&key) else {
            continue;
        };

        match tx.try_send(cmd) {
            Ok(()) => {}
            Err(TrySendError::Full(cmd)) => trace!(?cmd, "input queue full, dropping command"),
            Err(TrySendError::Disconnected(_)) => {
                debug!("game loop hung up, input listener stopping");
                return;
            }
        }
    }
}

/// Takes the next pending command without waiting. An empty or closed queue is no input.
pub fn read_command(rx: &Receiver<Command>) -> Option<Command> {
    match rx.try_recv() {
        Ok(cmd) => Some(cmd),
        Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
