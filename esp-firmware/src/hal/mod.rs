// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus esp-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod button;
pub mod knob;
pub mod led;

pub use button::Button;
pub use knob::{Knob, KnobError};

#[cfg(feature = "led-gpio")]
pub use led::GpioLed;
#[cfg(feature = "led-strip-rmt")]
pub use led::RmtStripLed;
#[cfg(feature = "led-strip-spi")]
pub use led::SpiStripLed;
