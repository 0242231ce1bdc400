//! Maintains the console message log in response to session events.
use runtime::GameEvent;

use client_frontend_core::{EventConsumer, EventImpact, MessageLog};

pub struct CliEventConsumer {
    log: MessageLog,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &GameEvent) -> EventImpact {
        match event {
            GameEvent::StateRefreshed => EventImpact::resync(),
            GameEvent::SelectionChanged { selected } => {
                match selected {
                    Some(unit) => self.log.info(format!("Unit {unit} selected")),
                    None => self.log.info("Selection cleared"),
                }
                EventImpact::resync()
            }
            GameEvent::VillageClicked { .. } => {
                // The event loop opens the construction menu; nothing to log.
                EventImpact::redraw()
            }
            GameEvent::MoveSubmitted { unit, destination } => {
                self.log.info(format!("Unit {unit} moved to {destination}"));
                EventImpact::resync()
            }
            GameEvent::MoveRejected {
                unit,
                destination,
                reason,
            } => {
                self.log
                    .warning(format!("Unit {unit} cannot move to {destination}: {reason}"));
                EventImpact::resync()
            }
            GameEvent::TurnEnded { turn } => {
                self.log.info(format!("Turn {turn} begins"));
                EventImpact::resync()
            }
            GameEvent::ProgramFailed { context } => {
                self.log.error(format!("Program error: {context}"));
                EventImpact::resync()
            }
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Position, UnitId};

    #[test]
    fn rejection_is_logged_as_a_warning_and_forces_a_resync() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));

        let impact = consumer.on_event(&GameEvent::MoveRejected {
            unit: UnitId(1),
            destination: Position::new(4, 4),
            reason: "tile occupied".into(),
        });

        assert!(impact.snapshot_stale);
        let entry = consumer.message_log().recent(1).next().unwrap();
        assert!(entry.text.contains("cannot move"));
    }

    #[test]
    fn village_clicks_do_not_touch_the_log() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));
        consumer.on_event(&GameEvent::VillageClicked {
            position: Position::new(1, 1),
        });
        assert!(consumer.message_log().recent(1).next().is_none());
    }
}
