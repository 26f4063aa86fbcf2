//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für das LED-Ausgabe-Backend
///
/// Abstrahiert die drei zur Build-Zeit wählbaren Backends hinter einem
/// Kontrakt: LED an/aus schalten mit der aktuellen Farbe.
///
/// # Implementierungen
/// - **Production:** GpioLed (Push/Pull-Pin), RmtStripLed (WS2812 über RMT),
///   SpiStripLed (WS2812 über SPI)
/// - **Testing:** MockBlinkLed (in-memory Mock)
pub trait BlinkLed: Send {
    /// Rendert einen Blink-Zustand
    ///
    /// Bei `lit` wird die LED mit `color` eingeschaltet, sonst ausgeschaltet
    /// bzw. der Strip gelöscht. Das GPIO-Backend ignoriert `color`.
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn render(&mut self, lit: bool, color: RGB8) -> Result<(), LedError>;
}
