// Knob Task - Treiber-Loop für den Drehgeber
use defmt::{info, warn};
use esp_core::InputEvent;

use crate::InputEventSender;
use crate::hal::Knob;

/// Knob Driver Task
///
/// Dekodiert Rastungen und reicht sie als Richtungs-Events an den
/// Handler-Task weiter. Ist die Queue voll, wird das Event verworfen -
/// eine verlorene Rastung verzögert die Anpassung nur um eine Drehung.
#[embassy_executor::task]
pub async fn knob_task(mut knob: Knob, events: InputEventSender) {
    info!("Knob task started");

    loop {
        let direction = knob.next_rotation().await;
        if events.try_send(InputEvent::Knob(direction)).is_err() {
            warn!("Input queue full, dropping knob event");
        }
    }
}
