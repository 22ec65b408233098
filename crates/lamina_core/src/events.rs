//! Input event types shared between the dispatcher and layer handlers.
//!
//! A raw [`InputEvent`] is what the host's input-capture layer feeds into
//! dispatch: one sample from one device, with a combinable flag mask
//! describing what happened. A [`LayerEvent`] is the same sample after
//! routing, carrying the location converted into the receiving layer's
//! local plane.

use bitflags::bitflags;

use crate::geometry::Vec2;

bitflags! {
    /// Event-type mask carried by a device sample.
    ///
    /// Flags are combinable: a left press sets both the generic
    /// `BUTTON_DOWN` bit and the `LEFT_BUTTON_DOWN` bit, and one motion
    /// sample may carry both `MOTION` and `BUTTON_DRAGGED`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct EventFlags: u32 {
        const BUTTON_DOWN          = 1;
        const BUTTON_UP            = 2;
        const LEFT_BUTTON_DOWN     = 4 | Self::BUTTON_DOWN.bits();
        const LEFT_BUTTON_UP       = 8 | Self::BUTTON_UP.bits();
        const RIGHT_BUTTON_DOWN    = 16 | Self::BUTTON_DOWN.bits();
        const RIGHT_BUTTON_UP      = 32 | Self::BUTTON_UP.bits();
        const BUTTON_DRAGGED       = 64;
        const LEFT_BUTTON_DRAGGED  = 128 | Self::BUTTON_DRAGGED.bits();
        const RIGHT_BUTTON_DRAGGED = 256 | Self::BUTTON_DRAGGED.bits();
        const ENTERED              = 512;
        const EXITED               = 1024;
        const MOTION               = 2048;
        const SCROLL               = 4096;
        const KEY                  = 8192;
    }
}

/// Pointer button identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Button {
    #[default]
    None,
    Left,
    Right,
    Middle,
}

/// Opaque key code. Key-code tables belong to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

/// One raw sample from one input device.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputEvent {
    /// Device slot the sample originated from.
    pub device: usize,
    pub flags: EventFlags,
    /// Location in screen coordinates.
    pub screen_location: Vec2,
    /// Relative motion since the device's previous sample.
    pub relative_motion: Vec2,
    pub button: Button,
    pub scroll_delta: i32,
    pub key: KeyCode,
}

/// An event routed to a specific layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayerEvent {
    pub device: usize,
    pub flags: EventFlags,
    pub screen_location: Vec2,
    /// The sample location converted into the receiving layer's plane.
    pub local_location: Vec2,
    pub relative_motion: Vec2,
    pub button: Button,
    pub scroll_delta: i32,
    pub key: KeyCode,
}

impl LayerEvent {
    /// Build a routed event from a raw sample; the local location is
    /// filled in per receiving layer by the dispatcher.
    pub fn from_input(event: &InputEvent) -> Self {
        Self {
            device: event.device,
            flags: event.flags,
            screen_location: event.screen_location,
            local_location: Vec2::ZERO,
            relative_motion: event.relative_motion,
            button: event.button,
            scroll_delta: event.scroll_delta,
            key: event.key,
        }
    }
}

/// Continuation flag returned by layer event handlers.
///
/// `Continue` lets dispatch hand the event to the next intersecting layer;
/// `Stop` halts propagation for this event only. This is the only
/// caller-observable signal in the dispatch path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Propagation {
    #[default]
    Continue,
    Stop,
}

impl Propagation {
    pub fn is_stop(self) -> bool {
        self == Propagation::Stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composed_flag_bits() {
        // A specific-button bit always carries its generic counterpart.
        assert!(EventFlags::LEFT_BUTTON_DOWN.contains(EventFlags::BUTTON_DOWN));
        assert!(EventFlags::RIGHT_BUTTON_UP.contains(EventFlags::BUTTON_UP));
        assert!(EventFlags::LEFT_BUTTON_DRAGGED.contains(EventFlags::BUTTON_DRAGGED));

        // Motion and drag can coexist on one sample.
        let flags = EventFlags::MOTION | EventFlags::LEFT_BUTTON_DRAGGED;
        assert!(flags.contains(EventFlags::MOTION));
        assert!(flags.contains(EventFlags::BUTTON_DRAGGED));
    }

    #[test]
    fn test_layer_event_from_input() {
        let raw = InputEvent {
            device: 3,
            flags: EventFlags::SCROLL,
            screen_location: Vec2::new(5.0, 6.0),
            scroll_delta: -2,
            ..Default::default()
        };
        let routed = LayerEvent::from_input(&raw);
        assert_eq!(routed.device, 3);
        assert_eq!(routed.scroll_delta, -2);
        assert_eq!(routed.local_location, Vec2::ZERO);
    }
}
