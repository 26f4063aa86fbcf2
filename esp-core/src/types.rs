//! Core Types für die Blink-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::sync::atomic::{AtomicU32, Ordering};

use rgb::RGB8;

use crate::logic::{CHANNEL_LEVEL, PERIOD_INITIAL_MS, cycle_color, step_period};

/// Debounced Button-Flanken vom Button-Treiber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    PressDown,
    PressUp,
}

/// Dekodierte Drehrichtung vom Drehgeber-Treiber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobDirection {
    Left,
    Right,
}

/// Input-Event für den Channel zwischen Treiber-Tasks und Handler-Task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Button(ButtonEvent),
    Knob(KnobDirection),
}

/// Geteilter Zustand zwischen Input-Handler und Blink-Loop
///
/// Periode und Farbe sind Single-Producer/Single-Consumer-Zellen: geschrieben
/// wird nur vom Input-Handler-Task, gelesen nur vom Blink-Task. Atomics mit
/// `Relaxed`-Ordering reichen dafür aus - ein Update muss nur "irgendwann"
/// sichtbar werden, spätestens zur nächsten Loop-Iteration.
pub struct BlinkShared {
    /// Blink-Periode in Millisekunden
    period_ms: AtomicU32,
    /// Aktuelle Farbe, gepackt als 0x00RRGGBB
    color: AtomicU32,
}

impl BlinkShared {
    /// Erstellt den Boot-Zustand: Rot aktiv, Start-Periode
    pub const fn new() -> Self {
        Self {
            period_ms: AtomicU32::new(PERIOD_INITIAL_MS),
            color: AtomicU32::new(pack_color(RGB8 {
                r: CHANNEL_LEVEL,
                g: 0,
                b: 0,
            })),
        }
    }

    /// Aktuelle Blink-Periode in Millisekunden
    pub fn period_ms(&self) -> u32 {
        self.period_ms.load(Ordering::Relaxed)
    }

    /// Aktuelle Farbe
    pub fn color(&self) -> RGB8 {
        unpack_color(self.color.load(Ordering::Relaxed))
    }

    /// Wendet ein Input-Event auf den Zustand an
    ///
    /// - `PressDown`: Farbe zyklisch weiterschalten
    /// - `PressUp`: keine Zustandsänderung (nur Logging im Handler)
    /// - `Knob`: Periode um eine Rastung verschieben (geklemmt)
    pub fn apply(&self, event: InputEvent) {
        match event {
            InputEvent::Button(ButtonEvent::PressDown) => {
                let next = cycle_color(self.color());
                self.color.store(pack_color(next), Ordering::Relaxed);
            }
            InputEvent::Button(ButtonEvent::PressUp) => {}
            InputEvent::Knob(direction) => {
                let next = step_period(self.period_ms(), direction);
                self.period_ms.store(next, Ordering::Relaxed);
            }
        }
    }
}

impl Default for BlinkShared {
    fn default() -> Self {
        Self::new()
    }
}

const fn pack_color(color: RGB8) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | (color.b as u32)
}

const fn unpack_color(packed: u32) -> RGB8 {
    RGB8 {
        r: ((packed >> 16) & 0xFF) as u8,
        g: ((packed >> 8) & 0xFF) as u8,
        b: (packed & 0xFF) as u8,
    }
}

/// Zwei-Zustands-Maschine des Blink-Loops: LED_ON / LED_OFF
///
/// Wechselt bei jedem Aufruf unbedingt den Zustand, unabhängig von
/// Perioden-Änderungen. Wird nur vom Blink-Task mutiert.
pub struct BlinkToggle {
    lit: bool,
}

impl BlinkToggle {
    /// Startzustand: LED aus (erster Render fährt die LED aus/low)
    pub const fn new() -> Self {
        Self { lit: false }
    }

    /// Liefert den Zustand der aktuellen Iteration und wechselt danach
    pub fn next(&mut self) -> bool {
        let lit = self.lit;
        self.lit = !self.lit;
        lit
    }
}

impl Default for BlinkToggle {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ButtonEvent::PressDown => defmt::write!(fmt, "PressDown"),
            ButtonEvent::PressUp => defmt::write!(fmt, "PressUp"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for KnobDirection {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            KnobDirection::Left => defmt::write!(fmt, "Left"),
            KnobDirection::Right => defmt::write!(fmt, "Right"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            InputEvent::Button(event) => defmt::write!(fmt, "Button({})", event),
            InputEvent::Knob(direction) => defmt::write!(fmt, "Knob({})", direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{PERIOD_MAX_MS, PERIOD_MIN_MS};

    #[test]
    fn test_blink_shared_boot_state() {
        let shared = BlinkShared::new();
        assert_eq!(shared.period_ms(), PERIOD_INITIAL_MS);
        assert_eq!(shared.color(), RGB8 { r: 5, g: 0, b: 0 });
    }

    #[test]
    fn test_apply_press_down_cycles_color() {
        let shared = BlinkShared::new();
        shared.apply(InputEvent::Button(ButtonEvent::PressDown));
        assert_eq!(shared.color(), RGB8 { r: 0, g: 5, b: 0 });
    }

    #[test]
    fn test_apply_press_up_is_noop() {
        let shared = BlinkShared::new();
        shared.apply(InputEvent::Button(ButtonEvent::PressUp));
        assert_eq!(shared.color(), RGB8 { r: 5, g: 0, b: 0 });
        assert_eq!(shared.period_ms(), PERIOD_INITIAL_MS);
    }

    #[test]
    fn test_apply_knob_adjusts_period() {
        let shared = BlinkShared::new();
        shared.apply(InputEvent::Knob(KnobDirection::Right));
        assert_eq!(shared.period_ms(), PERIOD_INITIAL_MS + 100);
        shared.apply(InputEvent::Knob(KnobDirection::Left));
        shared.apply(InputEvent::Knob(KnobDirection::Left));
        assert_eq!(shared.period_ms(), PERIOD_INITIAL_MS - 100);
    }

    #[test]
    fn test_apply_knob_respects_bounds() {
        let shared = BlinkShared::new();
        for _ in 0..100 {
            shared.apply(InputEvent::Knob(KnobDirection::Right));
        }
        assert_eq!(shared.period_ms(), PERIOD_MAX_MS);
        for _ in 0..100 {
            shared.apply(InputEvent::Knob(KnobDirection::Left));
        }
        assert_eq!(shared.period_ms(), PERIOD_MIN_MS);
    }

    #[test]
    fn test_blink_toggle_alternates() {
        let mut toggle = BlinkToggle::new();
        assert!(!toggle.next());
        assert!(toggle.next());
        assert!(!toggle.next());
        assert!(toggle.next());
    }
}
