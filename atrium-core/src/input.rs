//! Touch input selection
//!
//! Debounces the five touch pads into rising-edge events, one decision
//! per loop iteration. A pad held down produces a single edge; releasing
//! and touching again produces the next one.

use crate::traits::{TouchPads, TOUCH_PAD_COUNT};

/// Rising-edge detector over the five touch pads
///
/// When several pads show an edge in the same iteration, the
/// lowest-numbered pad wins.
#[derive(Debug, Clone, Default)]
pub struct InputSelector {
    previous: [bool; TOUCH_PAD_COUNT],
}

impl InputSelector {
    /// Create a selector with all pads considered released
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the pads once and report a selected tab, if any
    ///
    /// Returns the index of the first pad that went from released to
    /// touched since the previous iteration, or `None` when no pad did.
    pub fn poll<T: TouchPads>(&mut self, pads: &mut T) -> Option<u8> {
        let current = pads.poll();

        let mut selected = None;
        for (index, (&now, &before)) in current.iter().zip(self.previous.iter()).enumerate() {
            if now && !before && selected.is_none() {
                selected = Some(index as u8);
            }
        }

        self.previous = current;
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pad double replaying a fixed sequence of frames
    struct ScriptedPads {
        frames: &'static [[bool; TOUCH_PAD_COUNT]],
        cursor: usize,
    }

    impl ScriptedPads {
        fn new(frames: &'static [[bool; TOUCH_PAD_COUNT]]) -> Self {
            Self { frames, cursor: 0 }
        }
    }

    impl TouchPads for ScriptedPads {
        fn poll(&mut self) -> [bool; TOUCH_PAD_COUNT] {
            let frame = self.frames[self.cursor];
            self.cursor += 1;
            frame
        }
    }

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_rising_edge_selects_pad() {
        let mut pads = ScriptedPads::new(&[[F, F, T, F, F]]);
        let mut selector = InputSelector::new();
        assert_eq!(selector.poll(&mut pads), Some(2));
    }

    #[test]
    fn test_held_pad_fires_once() {
        let mut pads = ScriptedPads::new(&[
            [F, T, F, F, F],
            [F, T, F, F, F],
            [F, F, F, F, F],
            [F, T, F, F, F],
        ]);
        let mut selector = InputSelector::new();

        assert_eq!(selector.poll(&mut pads), Some(1));
        assert_eq!(selector.poll(&mut pads), None);
        assert_eq!(selector.poll(&mut pads), None);
        // Released and touched again: new edge
        assert_eq!(selector.poll(&mut pads), Some(1));
    }

    #[test]
    fn test_simultaneous_edges_lowest_pad_wins() {
        let mut pads = ScriptedPads::new(&[[F, T, F, T, T]]);
        let mut selector = InputSelector::new();
        assert_eq!(selector.poll(&mut pads), Some(1));
    }

    #[test]
    fn test_pad_zero_has_priority() {
        let mut pads = ScriptedPads::new(&[[T, T, T, T, T]]);
        let mut selector = InputSelector::new();
        assert_eq!(selector.poll(&mut pads), Some(0));
    }

    #[test]
    fn test_no_edge_no_selection() {
        let mut pads = ScriptedPads::new(&[[F, F, F, F, F], [F, F, F, F, F]]);
        let mut selector = InputSelector::new();
        assert_eq!(selector.poll(&mut pads), None);
        assert_eq!(selector.poll(&mut pads), None);
    }

    #[test]
    fn test_still_held_pad_does_not_mask_new_edge() {
        let mut pads = ScriptedPads::new(&[[T, F, F, F, F], [T, F, F, T, F]]);
        let mut selector = InputSelector::new();

        assert_eq!(selector.poll(&mut pads), Some(0));
        // Pad 0 still held: only pad 3 shows an edge
        assert_eq!(selector.poll(&mut pads), Some(3));
    }
}
