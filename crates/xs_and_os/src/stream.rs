//! The action bus and the stream of games folded from it.
//!
//! User interface code pushes [`Action`]s onto an [`ActionBus`]. The
//! receiving end is folded by [`games`] into a stream of game states, one per
//! action, which the view renders as they arrive.

use crate::action::Action;
use crate::game::Game;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use futures::{Stream, StreamExt, future};
use tracing::{debug, instrument, warn};

/// Receiving end of an action bus.
pub type ActionStream = UnboundedReceiver<Action>;

/// The receiving end of the bus was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Action bus is closed")]
pub struct BusClosed;

/// Cloneable handle for pushing user actions.
#[derive(Debug, Clone)]
pub struct ActionBus {
    tx: UnboundedSender<Action>,
}

impl ActionBus {
    /// Pushes an action onto the bus.
    #[instrument(skip(self))]
    pub fn push(&self, action: Action) -> Result<(), BusClosed> {
        self.tx.unbounded_send(action).map_err(|_| {
            warn!("Action dropped, bus closed");
            BusClosed
        })
    }

    /// Whether the receiving end is gone.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Creates an action bus and its receiving stream.
pub fn bus() -> (ActionBus, ActionStream) {
    let (tx, rx) = unbounded();
    (ActionBus { tx }, rx)
}

/// Folds a stream of actions into the stream of games they produce.
///
/// Starting at `initial`, every action is applied to the previous game and
/// the result is emitted. `initial` itself is not emitted.
pub fn games<S>(initial: Game, actions: S) -> impl Stream<Item = Game>
where
    S: Stream<Item = Action>,
{
    actions.scan(initial, |game, action| {
        let next = action.apply(std::mem::take(game));
        debug!(%action, play = ?next.play(), player = ?next.player(), "Game updated");
        *game = next.clone();
        future::ready(Some(next))
    })
}
