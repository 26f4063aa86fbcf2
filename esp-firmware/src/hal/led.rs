// LED-Backends: Implementierungen des BlinkLed Traits
//
// Drei zur Build-Zeit exklusive Backends hinter einem Kontrakt.
// Die Auswahl läuft über Cargo-Features (siehe lib.rs).

// ============================================================================
// GPIO Backend (Feature led-gpio)
// ============================================================================

#[cfg(feature = "led-gpio")]
mod gpio_impl {
    use esp_core::{BlinkLed, LedError};
    use esp_hal::gpio::{Level, Output};
    use rgb::RGB8;

    /// Einzelne LED an einem Push/Pull-GPIO
    ///
    /// Das einfachste Backend: Blink-Zustand wird direkt zum Pin-Pegel,
    /// die Farbe hat hier keine Bedeutung.
    pub struct GpioLed {
        pin: Output<'static>,
    }

    impl GpioLed {
        pub fn new(pin: Output<'static>) -> Self {
            Self { pin }
        }
    }

    impl BlinkLed for GpioLed {
        fn render(&mut self, lit: bool, _color: RGB8) -> Result<(), LedError> {
            let level = if lit { Level::High } else { Level::Low };
            self.pin.set_level(level);
            Ok(())
        }
    }
}

#[cfg(feature = "led-gpio")]
pub use gpio_impl::GpioLed;

// ============================================================================
// RMT Strip Backend (Feature led-strip-rmt)
// ============================================================================

#[cfg(feature = "led-strip-rmt")]
mod rmt_impl {
    use esp_core::{BlinkLed, LedError};
    use esp_hal::Blocking;
    use esp_hal::rmt::Rmt;
    use esp_hal::time::Rate;
    use esp_hal_smartled::SmartLedsAdapter;
    use rgb::RGB8;
    use smart_leds_trait::SmartLedsWrite;

    // Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
    pub const LED_BUFFER_SIZE: usize = 25;

    /// WS2812-Strip am ESP32 RMT Peripheral
    ///
    /// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
    /// und als Parameter übergeben statt im Constructor allokiert.
    pub struct RmtStripLed<'a> {
        strip: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    }

    impl<'a> RmtStripLed<'a> {
        /// Erstellt den RMT-Transport und den SmartLED Adapter
        ///
        /// # Parameter
        /// - `gpio8`: GPIO8 Peripheral für die LED-Datenleitung
        /// - `rmt_peripheral`: RMT Peripheral
        /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
        /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
        ///
        /// # Panics
        /// Schlägt die RMT-Anlage fehl, bricht die Firmware ab - ohne LED
        /// gibt es nichts Sinnvolles zu tun (fataler Startup-Fehler).
        pub fn new(
            gpio8: esp_hal::peripherals::GPIO8<'a>,
            rmt_peripheral: esp_hal::peripherals::RMT<'a>,
            rmt_clock_mhz: u32,
            buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
        ) -> Self {
            // RMT initialisieren
            let rmt: Rmt<'a, Blocking> =
                Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).expect("RMT init failed");

            // SmartLED Adapter erstellen
            let strip = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

            Self { strip }
        }
    }

    impl BlinkLed for RmtStripLed<'_> {
        fn render(&mut self, lit: bool, color: RGB8) -> Result<(), LedError> {
            // Aus = schwarzes Pixel schreiben, das löscht den Strip
            let pixel = if lit { color } else { RGB8::default() };
            self.strip
                .write([pixel].into_iter())
                .map_err(|_| LedError::WriteFailed)
        }
    }
}

#[cfg(feature = "led-strip-rmt")]
pub use rmt_impl::{LED_BUFFER_SIZE, RmtStripLed};

// ============================================================================
// SPI Strip Backend (Feature led-strip-spi)
// ============================================================================

#[cfg(feature = "led-strip-spi")]
mod spi_impl {
    use esp_core::{BlinkLed, LedError};
    use esp_hal::Blocking;
    use esp_hal::spi::master::Spi;
    use rgb::RGB8;
    use smart_leds_trait::SmartLedsWrite;
    use ws2812_spi::Ws2812;

    /// WS2812-Strip am SPI Peripheral
    ///
    /// ws2812-spi kodiert die Strip-Bitmuster auf den MOSI-Pin; der Bus
    /// muss dafür mit 2 bis 3.8 MHz takten (siehe SPI_CLOCK_KHZ in config.rs).
    pub struct SpiStripLed {
        strip: Ws2812<Spi<'static, Blocking>>,
    }

    impl SpiStripLed {
        pub fn new(spi: Spi<'static, Blocking>) -> Self {
            Self {
                strip: Ws2812::new(spi),
            }
        }
    }

    impl BlinkLed for SpiStripLed {
        fn render(&mut self, lit: bool, color: RGB8) -> Result<(), LedError> {
            let pixel = if lit { color } else { RGB8::default() };
            self.strip
                .write([pixel].into_iter())
                .map_err(|_| LedError::WriteFailed)
        }
    }
}

#[cfg(feature = "led-strip-spi")]
pub use spi_impl::SpiStripLed;
