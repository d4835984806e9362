use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tactile_common::time::{Duration, Instant};
use tactile_common::types::InteractionId;

use crate::behavior::{is_finite_point, ControlBehavior};
use crate::error::TactileSurfaceError;
use crate::store::ControlStore;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaderBankConfig {
    pub fader_count: usize,
    pub min_value: f32,
    pub max_value: f32,
    pub default_value: f32,
    /// Keep manipulating the first-touched fader for the whole interaction,
    /// instead of re-targeting from the pointer's x on every move
    pub static_selection: bool,
    pub double_tap_window: Duration,
}

impl Default for FaderBankConfig {
    fn default() -> Self {
        Self {
            fader_count: 30,
            min_value: 0.0,
            max_value: 1.0,
            default_value: 0.5,
            static_selection: false,
            double_tap_window: Duration::from_millis(200),
        }
    }
}

/// A horizontal array of vertical faders addressed by the pointer's x.
///
/// A second touch-down on the same fader within the double-tap window resets
/// it to the configured default value. The window is keyed per fader, so two
/// quick taps on different faders never trigger a reset.
#[derive(Debug, Clone)]
pub struct FaderBank {
    store: ControlStore<f32>,
    last_start: Vec<Option<Instant>>,
    owners: HashMap<InteractionId, usize>,
    min_value: f32,
    max_value: f32,
    default_value: f32,
    static_selection: bool,
    double_tap_window: Duration,
}

impl FaderBank {
    pub fn new(config: &FaderBankConfig) -> Result<Self, TactileSurfaceError> {
        if config.fader_count == 0 {
            return Err(TactileSurfaceError::ZeroElementCount);
        }
        if config.min_value >= config.max_value {
            return Err(TactileSurfaceError::InvalidValueRange {
                min: config.min_value,
                max: config.max_value,
            });
        }
        Ok(Self {
            store: ControlStore::new(config.fader_count, config.default_value),
            last_start: vec![None; config.fader_count],
            owners: HashMap::new(),
            min_value: config.min_value,
            max_value: config.max_value,
            default_value: config.default_value,
            static_selection: config.static_selection,
            double_tap_window: config.double_tap_window,
        })
    }

    pub fn fader_count(&self) -> usize {
        self.store.len()
    }

    /// Fader index targeted by a normalized x coordinate
    fn fader_at(&self, nx: f32) -> Option<usize> {
        if !nx.is_finite() {
            return None;
        }
        let count = self.store.len();
        let index = (count as f32 * nx.clamp(0.0, 1.0)).floor() as usize;
        Some(index.min(count - 1))
    }

    /// Fader value addressed by a normalized y coordinate (y grows downward)
    fn value_at(&self, ny: f32) -> f32 {
        self.min_value + (1.0 - ny).clamp(0.0, 1.0) * (self.max_value - self.min_value)
    }
}

impl ControlBehavior for FaderBank {
    type Value = f32;

    fn on_start(&mut self, interaction: InteractionId, point: [f32; 2], now: Instant) {
        if !is_finite_point(point) {
            return;
        }
        let Some(index) = self.fader_at(point[0]) else {
            return;
        };

        let double_tap = self.last_start[index]
            .map(|last| now.duration_since(last) < self.double_tap_window)
            .unwrap_or(false);
        let value = if double_tap {
            self.default_value
        } else {
            self.value_at(point[1])
        };

        self.store.write(index, value);
        self.last_start[index] = Some(now);
        self.owners.insert(interaction, index);
    }

    fn on_move(&mut self, interaction: InteractionId, point: [f32; 2]) {
        if !is_finite_point(point) {
            return;
        }
        let index = if self.static_selection {
            match self.owners.get(&interaction) {
                Some(index) => *index,
                None => return,
            }
        } else {
            let Some(index) = self.fader_at(point[0]) else {
                return;
            };
            self.owners.insert(interaction, index);
            index
        };

        let value = self.value_at(point[1]);
        self.store.write(index, value);
    }

    fn on_end(&mut self, interaction: InteractionId) {
        self.owners.remove(&interaction);
    }

    fn store(&self) -> &ControlStore<f32> {
        &self.store
    }

    fn store_mut(&mut self) -> &mut ControlStore<f32> {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn bank(count: usize) -> FaderBank {
        FaderBank::new(&FaderBankConfig {
            fader_count: count,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_zero_fader_count_is_an_error() {
        let err = FaderBank::new(&FaderBankConfig {
            fader_count: 0,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, TactileSurfaceError::ZeroElementCount);
    }

    #[test]
    fn test_inverted_range_is_an_error() {
        let err = FaderBank::new(&FaderBankConfig {
            min_value: 1.0,
            max_value: 0.0,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            TactileSurfaceError::InvalidValueRange { min: 1.0, max: 0.0 }
        );
    }

    #[test]
    fn test_index_is_a_function_of_x_alone() {
        let bank = bank(4);
        assert_eq!(bank.fader_at(0.0), Some(0));
        assert_eq!(bank.fader_at(0.24), Some(0));
        assert_eq!(bank.fader_at(0.25), Some(1));
        assert_eq!(bank.fader_at(0.99), Some(3));
        // Clamped at both ends
        assert_eq!(bank.fader_at(-2.0), Some(0));
        assert_eq!(bank.fader_at(1.0), Some(3));
        assert_eq!(bank.fader_at(5.0), Some(3));
        assert_eq!(bank.fader_at(f32::NAN), None);
    }

    #[test]
    fn test_start_at_top_sets_full_value() {
        let mut bank = bank(3);
        bank.on_start(InteractionId::Mouse, [0.0, 0.0], Instant::now());
        assert_approx_eq!(f32, *bank.store().value(0), 1.0);
        assert_eq!(bank.store_mut().take_changed(), vec![0]);
    }

    #[test]
    fn test_double_tap_resets_to_default() {
        let mut bank = bank(3);
        let first = Instant::now();
        bank.on_start(InteractionId::Mouse, [0.0, 0.0], first);
        bank.on_end(InteractionId::Mouse);
        // Second tap lands at the bottom of the fader, but within the window
        bank.on_start(
            InteractionId::Mouse,
            [0.0, 1.0],
            first + Duration::from_millis(150),
        );
        assert_approx_eq!(f32, *bank.store().value(0), 0.5);
    }

    #[test]
    fn test_slow_second_tap_does_not_reset() {
        let mut bank = bank(3);
        let first = Instant::now();
        bank.on_start(InteractionId::Mouse, [0.0, 0.0], first);
        bank.on_end(InteractionId::Mouse);
        bank.on_start(
            InteractionId::Mouse,
            [0.0, 1.0],
            first + Duration::from_millis(200),
        );
        assert_approx_eq!(f32, *bank.store().value(0), 0.0);
    }

    #[test]
    fn test_quick_taps_on_different_faders_do_not_reset() {
        let mut bank = bank(3);
        let first = Instant::now();
        bank.on_start(InteractionId::Mouse, [0.0, 0.0], first);
        bank.on_end(InteractionId::Mouse);
        bank.on_start(
            InteractionId::Mouse,
            [0.5, 0.25],
            first + Duration::from_millis(50),
        );
        assert_approx_eq!(f32, *bank.store().value(1), 0.75);
    }

    #[test]
    fn test_dynamic_selection_retargets_on_move() {
        let mut bank = bank(3);
        bank.on_start(InteractionId::Mouse, [0.0, 0.0], Instant::now());
        bank.on_move(InteractionId::Mouse, [0.9, 0.25]);
        assert_approx_eq!(f32, *bank.store().value(0), 1.0);
        assert_approx_eq!(f32, *bank.store().value(2), 0.75);
    }

    #[test]
    fn test_static_selection_keeps_first_fader() {
        let mut bank = FaderBank::new(&FaderBankConfig {
            fader_count: 3,
            static_selection: true,
            ..Default::default()
        })
        .unwrap();
        bank.on_start(InteractionId::Mouse, [0.0, 0.0], Instant::now());
        bank.on_move(InteractionId::Mouse, [0.9, 0.25]);
        assert_approx_eq!(f32, *bank.store().value(0), 0.75);
        assert_approx_eq!(f32, *bank.store().value(2), 0.5);
    }

    #[test]
    fn test_static_selection_move_without_start_is_noop() {
        let mut bank = FaderBank::new(&FaderBankConfig {
            fader_count: 3,
            static_selection: true,
            ..Default::default()
        })
        .unwrap();
        bank.on_move(InteractionId::Touch(7), [0.5, 0.0]);
        assert!(bank.store_mut().take_changed().is_empty());
    }

    #[test]
    fn test_scaled_value_range() {
        let mut bank = FaderBank::new(&FaderBankConfig {
            fader_count: 2,
            min_value: -1.0,
            max_value: 3.0,
            default_value: 0.0,
            ..Default::default()
        })
        .unwrap();
        bank.on_start(InteractionId::Mouse, [0.0, 0.25], Instant::now());
        assert_approx_eq!(f32, *bank.store().value(0), 2.0);
        bank.on_move(InteractionId::Mouse, [0.0, 1.0]);
        assert_approx_eq!(f32, *bank.store().value(0), -1.0);
    }

    #[test]
    fn test_identical_move_values_do_not_renotify() {
        let mut bank = bank(3);
        bank.on_start(InteractionId::Mouse, [0.0, 0.5], Instant::now());
        assert_eq!(bank.store_mut().take_changed(), vec![0]);
        bank.on_move(InteractionId::Mouse, [0.0, 0.5]);
        assert!(bank.store_mut().take_changed().is_empty());
    }
}
