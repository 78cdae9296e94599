use super::event::Event;

/// The UI side of the game. Rendering, animation, and graphs live behind
/// this trait; the core only calls `notify`.
pub trait Observer {
    fn notify(&self, event: &Event);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Observer for Silent {
    fn notify(&self, _: &Event) {}
}

impl<F> Observer for F
where
    F: Fn(&Event),
{
    fn notify(&self, event: &Event) {
        self(event)
    }
}
