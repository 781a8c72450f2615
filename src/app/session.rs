//! Pfad-Bearbeitungs-Session: übersetzt Zell-Ereignisse in Pfad-Mutationen.

use super::events::{PathAction, PathEvent};
use crate::core::{
    GridCoordinate, MazeLayout, PathElement, PathError, PathSequence, TurnPolicy,
};

/// Ergebnis eines verarbeiteten Ereignisses (für Rückmeldung im Host-UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Der Pfad wurde verändert
    Applied,
    /// Ereignis ohne Wirkung (Zelle schon enthalten bzw. nicht enthalten)
    Ignored(PathError),
}

impl EventOutcome {
    /// Gibt zurück, ob der Pfad verändert wurde
    pub fn is_applied(&self) -> bool {
        matches!(self, EventOutcome::Applied)
    }
}

/// Besitzt die `PathSequence` exklusiv; alle Mutationen laufen über `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct PathEditingSession {
    sequence: PathSequence,
}

impl PathEditingSession {
    /// Erstellt eine Session mit leerem Pfad und Standard-Policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Session mit leerem Pfad und der angegebenen Policy
    pub fn with_policy(policy: TurnPolicy) -> Self {
        Self {
            sequence: PathSequence::with_policy(policy),
        }
    }

    /// Verarbeitet ein aufgelöstes Zell-Ereignis.
    ///
    /// Erneutes Anklicken einer enthaltenen Zelle und Entfernen einer fremden
    /// Zelle sind kein Fehler, sondern werden ignoriert.
    pub fn handle_event(&mut self, event: PathEvent) -> EventOutcome {
        let result = match event.action {
            PathAction::Select => self.sequence.append(event.coordinate, event.open_sides),
            PathAction::Deselect => self.sequence.remove(event.coordinate),
        };

        match result {
            Ok(()) => EventOutcome::Applied,
            Err(err) => {
                log::debug!("Ereignis ignoriert: {err}");
                EventOutcome::Ignored(err)
            }
        }
    }

    /// Löst die offenen Seiten über das Layout auf und verarbeitet das Ereignis.
    ///
    /// Kennt das Layout die Zelle nicht, bleibt der Pfad unverändert und der
    /// Fehler geht an den Aufrufer.
    pub fn handle_pick<L>(
        &mut self,
        layout: &L,
        coordinate: GridCoordinate,
        action: PathAction,
    ) -> Result<EventOutcome, PathError>
    where
        L: MazeLayout + ?Sized,
    {
        let open_sides = layout
            .open_sides(coordinate)
            .ok_or(PathError::MissingExternalData(coordinate))?;
        Ok(self.handle_event(PathEvent {
            coordinate,
            open_sides,
            action,
        }))
    }

    /// Kehrt den Pfad um
    pub fn invert(&mut self) {
        self.sequence.invert();
    }

    /// Verwirft alle Elemente
    pub fn clear(&mut self) {
        self.sequence.clear();
    }

    /// Ersetzt den Pfad vollständig (z.B. nach dem Laden)
    pub fn replace(&mut self, sequence: PathSequence) {
        self.sequence = sequence;
    }

    /// Setzt die Turn-Policy für folgende Mutationen
    pub fn set_policy(&mut self, policy: TurnPolicy) {
        self.sequence.set_policy(policy);
    }

    /// Elemente in Pfad-Reihenfolge
    pub fn elements(&self) -> impl ExactSizeIterator<Item = &PathElement> + '_ {
        self.sequence.elements()
    }

    /// Read-only Zugriff auf die Sequenz
    pub fn sequence(&self) -> &PathSequence {
        &self.sequence
    }
}
