// Button-Treiber: debounced Press-Down/Press-Up Flanken
//
// Rohe GPIO-Flanken werden entprellt und als diskrete Events geliefert.

use embassy_time::{Duration, Timer};
use esp_core::ButtonEvent;
use esp_hal::gpio::Input;

use crate::config::BUTTON_DEBOUNCE_MS;

/// Push-Button an einem GPIO, Active-Low verdrahtet (Pull-Up, gedrückt = Low)
pub struct Button {
    pin: Input<'static>,
    pressed: bool,
}

impl Button {
    pub fn new(pin: Input<'static>) -> Self {
        // Startzustand vom Pin übernehmen, nicht raten
        let pressed = pin.is_low();
        Self { pin, pressed }
    }

    /// Wartet auf die nächste entprellte Button-Flanke
    ///
    /// Nach jeder rohen Flanke entscheidet der Pegel am Ende des
    /// Entprell-Fensters. Prellen, das den gemeldeten Zustand nicht ändert,
    /// wird verworfen.
    pub async fn next_event(&mut self) -> ButtonEvent {
        loop {
            self.pin.wait_for_any_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

            let pressed = self.pin.is_low();
            if pressed != self.pressed {
                self.pressed = pressed;
                return if pressed {
                    ButtonEvent::PressDown
                } else {
                    ButtonEvent::PressUp
                };
            }
        }
    }
}
