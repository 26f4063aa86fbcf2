// Button Task - Treiber-Loop für den Push-Button
use defmt::{info, warn};
use esp_core::InputEvent;

use crate::InputEventSender;
use crate::hal::Button;

/// Button Driver Task
///
/// Wartet auf entprellte Flanken und reicht sie als Events an den
/// Handler-Task weiter. Ist die Queue voll, wird das Event verworfen -
/// der Input-Pfad ist Best-Effort.
#[embassy_executor::task]
pub async fn button_task(mut button: Button, events: InputEventSender) {
    info!("Button task started");

    loop {
        let event = button.next_event().await;
        if events.try_send(InputEvent::Button(event)).is_err() {
            warn!("Input queue full, dropping button event");
        }
    }
}
