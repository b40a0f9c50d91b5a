//! A calculator session: the engine plus its conversion-mode timer.
//!
//! The session is the single owner of the [`Engine`]. Timer threads only post
//! [`SessionEvent`]s into its inbox; the owning loop calls [`Session::pump`]
//! (or [`Session::wait_for_event`]) to apply them.

use crate::config::Config;
use crate::engine::{Conversion, Engine, Evaluation, ExpiryTimer, ModeTicket};
use crate::expr::CalcError;
use flume::{Receiver, RecvTimeoutError};
use std::time::Duration;

/// Messages delivered to the session's inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The conversion period started with this ticket has run out.
    ConvertExpired(ModeTicket),
}

/// Engine, expiry timer and inbox, driven from one thread.
pub struct Session {
    engine: Engine,
    timer: ExpiryTimer<SessionEvent>,
    inbox: Receiver<SessionEvent>,
    convert_timeout: Duration,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let (tx, inbox) = flume::unbounded();
        Self {
            engine: Engine::with_config(config),
            timer: ExpiryTimer::new(tx),
            inbox,
            convert_timeout: config.convert_timeout(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Append a digit, decimal point or operator. See [`Engine::append_token`].
    pub fn append_token(&mut self, token: char) -> bool {
        self.engine.append_token(token)
    }

    pub fn backspace(&mut self) {
        self.engine.backspace();
    }

    pub fn clear(&mut self) {
        self.engine.clear();
    }

    pub fn evaluate(&mut self) -> Result<Option<Evaluation>, CalcError> {
        self.engine.evaluate()
    }

    /// Conversions leave the expiry alone; they never extend the period.
    pub fn convert_to_binary(&mut self) -> Conversion {
        self.engine.convert_to_binary()
    }

    pub fn convert_to_fraction(&mut self) -> Conversion {
        self.engine.convert_to_fraction()
    }

    /// Enter (or restart) conversion mode and arm its expiry.
    pub fn enter_convert_mode(&mut self) -> ModeTicket {
        let ticket = self.engine.enter_convert_mode();
        self.arm(ticket);
        ticket
    }

    /// Leave conversion mode and cancel its expiry.
    pub fn exit_convert_mode(&mut self) {
        self.timer.cancel();
        self.engine.exit_convert_mode();
    }

    /// The keypad's convert key.
    pub fn toggle_convert_mode(&mut self) -> Option<ModeTicket> {
        let ticket = self.engine.toggle_convert_mode();
        match ticket {
            Some(ticket) => self.arm(ticket),
            None => self.timer.cancel(),
        }
        ticket
    }

    fn arm(&mut self, ticket: ModeTicket) {
        self.timer
            .arm(self.convert_timeout, SessionEvent::ConvertExpired(ticket));
    }

    /// Apply every queued event without blocking.
    ///
    /// Returns how many events changed the mode.
    pub fn pump(&mut self) -> usize {
        let events: Vec<_> = self.inbox.try_iter().collect();
        events.into_iter().filter(|&event| self.apply(event)).count()
    }

    /// Block up to `timeout` for the next event and apply it.
    ///
    /// Returns the event, or `None` if nothing arrived in time.
    pub fn wait_for_event(&mut self, timeout: Duration) -> Option<SessionEvent> {
        match self.inbox.recv_timeout(timeout) {
            Ok(event) => {
                self.apply(event);
                Some(event)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::ConvertExpired(ticket) => self.engine.expire_convert_mode(ticket),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Mode;

    fn quick() -> Session {
        Session::new(&Config {
            convert_timeout_ms: 30,
            ..Config::default()
        })
    }

    #[test]
    fn test_expiry_reverts() {
        let mut session = quick();
        let ticket = session.enter_convert_mode();

        let event = session.wait_for_event(Duration::from_secs(2));
        assert_eq!(event, Some(SessionEvent::ConvertExpired(ticket)));
        assert_eq!(session.engine().mode(), Mode::Base);
    }

    #[test]
    fn test_exit_cancels_expiry() {
        let mut session = quick();
        session.enter_convert_mode();
        session.exit_convert_mode();

        assert_eq!(session.wait_for_event(Duration::from_millis(150)), None);
        assert_eq!(session.engine().mode(), Mode::Base);
    }

    #[test]
    fn test_toggle_arms_expiry() {
        let mut session = quick();
        let ticket = session.toggle_convert_mode().unwrap();

        let event = session.wait_for_event(Duration::from_secs(2));
        assert_eq!(event, Some(SessionEvent::ConvertExpired(ticket)));
        assert_eq!(session.engine().mode(), Mode::Base);
    }

    #[test]
    fn test_toggle_off_cancels_expiry() {
        let mut session = quick();
        session.toggle_convert_mode();
        assert_eq!(session.toggle_convert_mode(), None);

        assert_eq!(session.wait_for_event(Duration::from_millis(150)), None);
        assert_eq!(session.engine().mode(), Mode::Base);
    }

    #[test]
    fn test_editing_through_session() {
        let mut session = Session::default();
        for c in "3/4".chars() {
            assert!(session.append_token(c));
        }
        let eval = session.evaluate().unwrap().unwrap();
        assert_eq!(eval.formatted_result, "0.75");
        assert_eq!(session.convert_to_fraction(), Conversion::Output("3/4".into()));
        assert_eq!(session.convert_to_binary(), Conversion::Output("0.11".into()));

        session.backspace();
        assert_eq!(session.engine().equation(), "3/");
        session.clear();
        assert_eq!(session.engine().last_result(), None);
    }

    #[test]
    fn test_pump_without_events() {
        let mut session = Session::default();
        assert_eq!(session.pump(), 0);
    }
}
