// Input Handler Task - wendet Button/Knob-Events auf den geteilten Zustand an
use defmt::info;
use esp_core::{BlinkShared, ButtonEvent, InputEvent, KnobDirection};

use crate::InputEventReceiver;

/// Input Handler Task
///
/// Empfängt Events aus dem Channel, loggt sie und mutiert den geteilten
/// Zustand. Press-Up ändert keinen Zustand.
/// Die eigentlichen Übergänge (Farb-Zyklus, Perioden-Klemmung) leben
/// testbar in `BlinkShared::apply`.
#[embassy_executor::task]
pub async fn control_task(events: InputEventReceiver, shared: &'static BlinkShared) {
    loop {
        let event = events.receive().await;

        match event {
            InputEvent::Button(ButtonEvent::PressDown) => info!("BTN: press down"),
            InputEvent::Button(ButtonEvent::PressUp) => info!("BTN: press up"),
            InputEvent::Knob(KnobDirection::Right) => info!("KNOB: right"),
            InputEvent::Knob(KnobDirection::Left) => info!("KNOB: left"),
        }

        shared.apply(event);
    }
}
