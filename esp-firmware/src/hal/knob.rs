// Drehgeber-Treiber: Quadratur-Dekodierung in Links/Rechts-Events
//
// Die beiden phasenverschobenen Signale werden über die
// Gray-Code-Übergangstabelle dekodiert und pro Rastung als ein
// Richtungs-Event gemeldet.

use embassy_futures::select::select;
use esp_core::KnobDirection;
use esp_hal::gpio::Input;

/// Fehler-Typ für die Drehgeber-Anlage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobError {
    CreateFailed,
}

/// Übergangstabelle: Index = (alter Phasenzustand << 2) | neuer Phasenzustand
/// Ungültige Übergänge (Prellen, übersprungene Flanke) zählen als 0
const QUAD_STEPS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Viertelschritte pro mechanischer Rastung
const STEPS_PER_DETENT: i8 = 4;

/// Quadratur-Drehgeber an zwei GPIOs (Phase A und Phase B)
pub struct Knob {
    pin_a: Input<'static>,
    pin_b: Input<'static>,
    prev: u8,
    accum: i8,
}

impl Knob {
    /// Legt den Treiber an und übernimmt den Start-Zustand der Phasen
    ///
    /// Die Anlage ist als fallible Operation modelliert; die GPIO-Variante
    /// hat keinen echten Fehlerpfad, der Aufrufer behandelt `Err` trotzdem
    /// (Policy: `KNOB_INIT_FATAL` in config.rs).
    pub fn new(pin_a: Input<'static>, pin_b: Input<'static>) -> Result<Self, KnobError> {
        let prev = phase_state(&pin_a, &pin_b);
        Ok(Self {
            pin_a,
            pin_b,
            prev,
            accum: 0,
        })
    }

    /// Wartet auf die nächste volle Rastung und liefert die Drehrichtung
    pub async fn next_rotation(&mut self) -> KnobDirection {
        loop {
            // Auf eine Flanke an irgendeiner der beiden Phasen warten
            select(
                self.pin_a.wait_for_any_edge(),
                self.pin_b.wait_for_any_edge(),
            )
            .await;

            let state = phase_state(&self.pin_a, &self.pin_b);
            let step = QUAD_STEPS[usize::from((self.prev << 2) | state)];
            self.prev = state;
            self.accum += step;

            if self.accum >= STEPS_PER_DETENT {
                self.accum = 0;
                return KnobDirection::Right;
            }
            if self.accum <= -STEPS_PER_DETENT {
                self.accum = 0;
                return KnobDirection::Left;
            }
        }
    }
}

fn phase_state(pin_a: &Input<'_>, pin_b: &Input<'_>) -> u8 {
    (u8::from(pin_a.is_high()) << 1) | u8::from(pin_b.is_high())
}
