// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    BlinkLed, BlinkShared, BlinkToggle, ButtonEvent, InputEvent, KnobDirection, LedError,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

// ============================================================================
// LED-Backend-Auswahl absichern
// ============================================================================
//
// Die drei Backends sind zur Build-Zeit exklusive Alternativen. Cargo-Features
// sind additiv, deshalb wird "genau eines" hier explizit erzwungen.

#[cfg(not(any(
    feature = "led-gpio",
    feature = "led-strip-rmt",
    feature = "led-strip-spi"
)))]
compile_error!(
    "Kein LED-Backend gewählt: eines der Features `led-gpio`, `led-strip-rmt`, `led-strip-spi` aktivieren"
);

#[cfg(any(
    all(feature = "led-gpio", feature = "led-strip-rmt"),
    all(feature = "led-gpio", feature = "led-strip-spi"),
    all(feature = "led-strip-rmt", feature = "led-strip-spi"),
))]
compile_error!(
    "Mehrere LED-Backends gewählt: genau EINES der Features `led-gpio`, `led-strip-rmt`, `led-strip-spi` aktivieren"
);

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Sender<'static, NoopRawMutex, InputEvent, 8>
// Nutze:  InputEventSender

/// Channel für Input-Events (Button/Knob-Treiber → Handler-Task)
/// - 8: Event-Kapazität (der Drehgeber kann kurze Bursts liefern);
///   volle Queue verwirft das Event, der Input-Pfad ist Best-Effort
pub type InputEventChannel = Channel<NoopRawMutex, InputEvent, 8>;

/// Sender für Input-Events
/// Je eine Instanz im Button- und im Knob-Task
pub type InputEventSender = Sender<'static, NoopRawMutex, InputEvent, 8>;

/// Receiver für Input-Events (Handler-Task empfängt)
pub type InputEventReceiver = Receiver<'static, NoopRawMutex, InputEvent, 8>;
