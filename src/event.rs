/// A small non-negative integer identifying an event dispatched to a state.
///
/// Three codes are reserved by the engine: [`Event::NONE`] is the ancestry
/// probe sentinel and is never delivered to user code through
/// [`Machine::dispatch`](crate::machine::Machine::dispatch), while
/// [`Event::ENTER`] and [`Event::EXIT`] are synthesized by the transition
/// choreography. User-defined events begin at [`Event::FIRST_USER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Event(pub u16);

impl Event {
    /// Ancestry-probe sentinel. Never delivered to user code as a real event.
    pub const NONE: Event = Event(0);
    /// Synthesized when a state becomes active.
    pub const ENTER: Event = Event(1);
    /// Synthesized when a state becomes inactive.
    pub const EXIT: Event = Event(2);
    /// First code available to user-defined events.
    pub const FIRST_USER: u16 = 3;

    /// Construct a user-defined event code.
    ///
    /// # Panics
    ///
    /// Panics if `code` collides with a reserved code (`< FIRST_USER`).
    pub const fn new(code: u16) -> Self {
        assert!(code >= Self::FIRST_USER, "event code collides with a reserved signal");
        Event(code)
    }

    /// True for [`Event::ENTER`] or [`Event::EXIT`].
    pub const fn is_synthetic(self) -> bool {
        self.0 == Self::ENTER.0 || self.0 == Self::EXIT.0
    }
}
