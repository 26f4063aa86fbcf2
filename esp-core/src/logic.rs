//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::KnobDirection;

/// Intensität des aktiven Farbkanals (0-255)
/// Niedriger Wert ist gedimmt für Augenschonung
pub const CHANNEL_LEVEL: u8 = 5;

/// Untere Grenze der Blink-Periode in Millisekunden
pub const PERIOD_MIN_MS: u32 = 100;

/// Obere Grenze der Blink-Periode in Millisekunden
pub const PERIOD_MAX_MS: u32 = 3100;

/// Schrittweite pro Knob-Rastung in Millisekunden
pub const PERIOD_STEP_MS: u32 = 100;

/// Blink-Periode beim Boot in Millisekunden
pub const PERIOD_INITIAL_MS: u32 = 1000;

/// Schaltet die Farbe zyklisch weiter: Rot → Grün → Blau → Rot
///
/// Der aktive Kanal (erster Nicht-Null-Kanal in Rot→Grün→Blau-Reihenfolge)
/// wird gelöscht und der nächste Kanal im Zyklus auf [`CHANNEL_LEVEL`]
/// gesetzt. Es ist immer genau ein Kanal aktiv.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use esp_core::cycle_color;
/// let rot = RGB8 { r: 5, g: 0, b: 0 };
/// assert_eq!(cycle_color(rot), RGB8 { r: 0, g: 5, b: 0 });
/// ```
pub fn cycle_color(color: RGB8) -> RGB8 {
    if color.r != 0 {
        RGB8 {
            r: 0,
            g: CHANNEL_LEVEL,
            b: 0,
        }
    } else if color.g != 0 {
        RGB8 {
            r: 0,
            g: 0,
            b: CHANNEL_LEVEL,
        }
    } else {
        RGB8 {
            r: CHANNEL_LEVEL,
            g: 0,
            b: 0,
        }
    }
}

/// Verschiebt die Blink-Periode um eine Rastung
///
/// Rechtsdrehung erhöht, Linksdrehung verringert die Periode um
/// [`PERIOD_STEP_MS`]. Das Ergebnis ist auf [`PERIOD_MIN_MS`] bis
/// [`PERIOD_MAX_MS`] geklemmt; Drehungen über die Grenzen hinaus werden
/// stillschweigend verworfen.
pub fn step_period(period_ms: u32, direction: KnobDirection) -> u32 {
    match direction {
        KnobDirection::Right => (period_ms + PERIOD_STEP_MS).min(PERIOD_MAX_MS),
        KnobDirection::Left => period_ms.saturating_sub(PERIOD_STEP_MS).max(PERIOD_MIN_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_color_red_to_green() {
        let red = RGB8 { r: 5, g: 0, b: 0 };
        let green = cycle_color(red);
        assert_eq!(green, RGB8 { r: 0, g: 5, b: 0 });
    }

    #[test]
    fn test_cycle_color_green_to_blue() {
        let green = RGB8 { r: 0, g: 5, b: 0 };
        let blue = cycle_color(green);
        assert_eq!(blue, RGB8 { r: 0, g: 0, b: 5 });
    }

    #[test]
    fn test_cycle_color_blue_to_red() {
        let blue = RGB8 { r: 0, g: 0, b: 5 };
        let red = cycle_color(blue);
        assert_eq!(red, RGB8 { r: 5, g: 0, b: 0 });
    }

    #[test]
    fn test_cycle_color_full_cycle() {
        let mut color = RGB8 { r: 5, g: 0, b: 0 };
        color = cycle_color(color); // Rot → Grün
        color = cycle_color(color); // Grün → Blau
        color = cycle_color(color); // Blau → Rot
        assert_eq!(color, RGB8 { r: 5, g: 0, b: 0 });
    }

    #[test]
    fn test_cycle_color_red_has_priority() {
        // Rot gewinnt als Diskriminante wenn mehrere Kanäle gesetzt sind
        let odd = RGB8 { r: 5, g: 5, b: 0 };
        assert_eq!(cycle_color(odd), RGB8 { r: 0, g: 5, b: 0 });
    }

    #[test]
    fn test_step_period_right_increases() {
        assert_eq!(step_period(1000, KnobDirection::Right), 1100);
    }

    #[test]
    fn test_step_period_left_decreases() {
        assert_eq!(step_period(1000, KnobDirection::Left), 900);
    }

    #[test]
    fn test_step_period_clamps_at_max() {
        assert_eq!(step_period(PERIOD_MAX_MS, KnobDirection::Right), PERIOD_MAX_MS);
        assert_eq!(step_period(3000, KnobDirection::Right), PERIOD_MAX_MS);
    }

    #[test]
    fn test_step_period_clamps_at_min() {
        assert_eq!(step_period(PERIOD_MIN_MS, KnobDirection::Left), PERIOD_MIN_MS);
        assert_eq!(step_period(200, KnobDirection::Left), PERIOD_MIN_MS);
    }
}
