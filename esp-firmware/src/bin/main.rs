// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::{error, info};

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_blink_steuerung::InputEventChannel;
use esp_blink_steuerung::config::KNOB_INIT_FATAL;
use esp_blink_steuerung::hal::{Button, Knob};
use esp_blink_steuerung::tasks::{blink_task, button_task, control_task, knob_task};
use esp_core::BlinkShared;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Embassy Runtime und spawnt die Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("embassy tick rate {} Hz", embassy_time::TICK_HZ);

    // Geteilter Zustand: Periode + Farbe
    // Geschrieben nur vom Handler-Task, gelesen nur vom Blink-Task
    static BLINK_SHARED: static_cell::StaticCell<BlinkShared> = static_cell::StaticCell::new();
    let shared = &*BLINK_SHARED.init(BlinkShared::new());

    // Input-Event-Channel erstellen (Treiber-Tasks → Handler-Task)
    static INPUT_EVENTS: static_cell::StaticCell<InputEventChannel> =
        static_cell::StaticCell::new();
    let input_events = &*INPUT_EVENTS.init(InputEventChannel::new());

    // Spawn LED Task - Peripherals je nach gewähltem Backend
    // (GPIO8 ist auf dem DevKit die LED-Datenleitung)
    #[cfg(feature = "led-strip-rmt")]
    spawner
        .spawn(blink_task(peripherals.GPIO8, peripherals.RMT, shared))
        .unwrap();
    #[cfg(feature = "led-strip-spi")]
    spawner
        .spawn(blink_task(peripherals.GPIO8, peripherals.SPI2, shared))
        .unwrap();
    #[cfg(feature = "led-gpio")]
    spawner.spawn(blink_task(peripherals.GPIO8, shared)).unwrap();

    // Button an GPIO9 (Active-Low, interner Pull-Up)
    let button_input = Input::new(peripherals.GPIO9, InputConfig::default().with_pull(Pull::Up));
    spawner
        .spawn(button_task(Button::new(button_input), input_events.sender()))
        .unwrap();

    // Drehgeber an GPIO10 (Phase A) und GPIO6 (Phase B)
    let knob_a = Input::new(peripherals.GPIO10, InputConfig::default().with_pull(Pull::Up));
    let knob_b = Input::new(peripherals.GPIO6, InputConfig::default().with_pull(Pull::Up));
    match Knob::new(knob_a, knob_b) {
        Ok(knob) => spawner
            .spawn(knob_task(knob, input_events.sender()))
            .unwrap(),
        Err(_) if KNOB_INIT_FATAL => defmt::panic!("knob create failed"),
        Err(_) => {
            // Firmware blinkt mit dauerhaft totem Drehgeber weiter
            // (siehe KNOB_INIT_FATAL in config.rs)
            error!("knob create failed");
        }
    }

    // Spawn Input Handler Task
    spawner
        .spawn(control_task(input_events.receiver(), shared))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
