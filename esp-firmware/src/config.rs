// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die LED-Datenleitung (Strip) bzw. die LED selbst (GPIO-Backend)
pub const LED_GPIO_PIN: u8 = 8;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 1;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// SPI Bustakt in kHz für das ws2812-spi Backend
/// WS2812-Bitmuster brauchen 2 bis 3.8 MHz, 3.2 MHz liegt mittig
pub const SPI_CLOCK_KHZ: u32 = 3200;

// ============================================================================
// Input Konfiguration
// ============================================================================

/// GPIO-Pin für den Push-Button (Active-Low, interner Pull-Up)
pub const BUTTON_GPIO_PIN: u8 = 9;

/// Entprell-Fenster für den Button in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// GPIO-Pins für die beiden Quadratur-Phasen des Drehgebers
pub const KNOB_GPIO_A_PIN: u8 = 10;
pub const KNOB_GPIO_B_PIN: u8 = 6;

/// Verhalten wenn die Drehgeber-Anlage beim Boot fehlschlägt
///
/// `true` = Startup-Fehler wird fatal (Panic), `false` = Fehler wird nur
/// geloggt und die Firmware blinkt mit dauerhaft totem Drehgeber weiter.
pub const KNOB_INIT_FATAL: bool = false;
