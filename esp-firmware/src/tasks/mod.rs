// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig. Die Input-Tasks liefern Events
// über den InputEventChannel an den Handler, der Blink-Task liest nur den
// geteilten Zustand.

pub mod blink;
pub mod button;
pub mod control;
pub mod knob;

// Re-export Tasks für einfachen Import
pub use blink::blink_task;
pub use button::button_task;
pub use control::control_task;
pub use knob::knob_task;
