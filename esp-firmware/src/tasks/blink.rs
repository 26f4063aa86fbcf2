// LED Blink Task - der einzige dauerlaufende Control-Loop der Firmware
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_core::{BlinkLed, BlinkShared, BlinkToggle};

#[cfg(feature = "led-strip-rmt")]
use esp_hal_smartled::smart_led_buffer;

#[cfg(feature = "led-strip-rmt")]
use crate::config::RMT_CLOCK_MHZ;
#[cfg(feature = "led-strip-spi")]
use crate::config::SPI_CLOCK_KHZ;

/// Blink Logic - testbare Loop ohne Hardware-Abhängigkeit
///
/// Für immer: Periode loggen, LED mit aktuellem Toggle-Zustand und Farbe
/// rendern, Toggle wechseln, für die aktuelle Periode schlafen. Periode und
/// Farbe werden in jeder Iteration frisch aus dem geteilten Zustand gelesen,
/// Input-Events während des Schlafens greifen also ab der nächsten
/// Iteration. Der laufende Schlaf wird nie verkürzt.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `L: BlinkLed` ermöglicht:
/// - Real Hardware (GpioLed / RmtStripLed / SpiStripLed) im Production-Code
/// - Mock Implementation (MockBlinkLed) in Host-Tests
pub async fn blink_logic<L: BlinkLed>(mut led: L, shared: &BlinkShared) {
    let mut toggle = BlinkToggle::new();

    loop {
        let period_ms = shared.period_ms();
        info!("blink period {} ms", period_ms);

        if led.render(toggle.next(), shared.color()).is_err() {
            // Nicht wiederholen, nur sichtbar machen
            error!("Failed to write to LED");
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(u64::from(period_ms))).await;
    }
}

// ============================================================================
// Task-Varianten pro LED-Backend
// ============================================================================
//
// Die Hardware-Initialisierung lebt im Task, die Loop selbst in
// blink_logic(). Genau eine der drei Varianten ist pro Build aktiv.

/// LED Blink Task - WS2812 über das RMT Peripheral
#[cfg(feature = "led-strip-rmt")]
#[embassy_executor::task]
pub async fn blink_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    shared: &'static BlinkShared,
) {
    use crate::hal::RmtStripLed;

    info!("Configured to blink addressable LED over RMT");

    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);

    let led = RmtStripLed::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);
    blink_logic(led, shared).await
}

/// LED Blink Task - WS2812 über das SPI Peripheral (MOSI als Datenleitung)
#[cfg(feature = "led-strip-spi")]
#[embassy_executor::task]
pub async fn blink_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    spi_peripheral: esp_hal::peripherals::SPI2<'static>,
    shared: &'static BlinkShared,
) {
    use esp_hal::spi::master::{Config as SpiConfig, Spi};
    use esp_hal::time::Rate;

    use crate::hal::SpiStripLed;

    info!("Configured to blink addressable LED over SPI");

    let spi = Spi::new(
        spi_peripheral,
        SpiConfig::default().with_frequency(Rate::from_khz(SPI_CLOCK_KHZ)),
    )
    .expect("SPI init failed")
    .with_mosi(gpio8);

    blink_logic(SpiStripLed::new(spi), shared).await
}

/// LED Blink Task - einzelne LED an einem Push/Pull-GPIO
#[cfg(feature = "led-gpio")]
#[embassy_executor::task]
pub async fn blink_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    shared: &'static BlinkShared,
) {
    use esp_hal::gpio::{Level, Output, OutputConfig};

    use crate::hal::GpioLed;

    info!("Configured to blink GPIO LED");

    let led = GpioLed::new(Output::new(gpio8, Level::Low, OutputConfig::default()));
    blink_logic(led, shared).await
}
