use bevy::prelude::*;

use crate::page::PageId;

/// Persistent UI root that pages are mounted under
#[derive(Component)]
pub struct MenuDocument;

/// Root node of the currently mounted page
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRoot(pub PageId);

/// Style classes copied from the page asset
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleClasses(pub Vec<String>);

/// Continuous or whole-number value slider
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MenuSlider {
    pub min: f32,
    pub max: f32,
    pub value: f32,
    pub whole_numbers: bool,
}

impl MenuSlider {
    /// Position of the current value along the track, in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Value at `fraction` of the track.
    pub fn value_at(&self, fraction: f32) -> f32 {
        let value = self.min + (self.max - self.min) * fraction.clamp(0.0, 1.0);
        if self.whole_numbers {
            value.round()
        } else {
            value
        }
    }
}

/// Filled part of a slider track
#[derive(Component, Debug, Clone, Copy)]
pub struct SliderTrack {
    pub fill: Entity,
}

/// Boolean toggle
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct MenuToggle {
    pub label: String,
    pub on: bool,
}

/// Single-line text input
#[derive(Component, Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuTextField {
    pub placeholder: String,
    pub value: String,
    pub masked: bool,
}

impl MenuTextField {
    pub fn display_text(&self, focused: bool) -> String {
        let mut text = if self.value.is_empty() && !focused {
            self.placeholder.clone()
        } else if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        };
        if focused {
            text.push('|');
        }
        text
    }
}

/// Text child rendering a toggle's or text field's state
#[derive(Component, Debug, Clone, Copy)]
pub struct WidgetLabel(pub Entity);

/// Interaction seen on the previous change, used to detect pointer enter
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviousInteraction(pub Interaction);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_number_slider_snaps() {
        let slider = MenuSlider {
            min: 2.0,
            max: 16.0,
            value: 8.0,
            whole_numbers: true,
        };
        assert_eq!(slider.value_at(0.5), 9.0);
        assert_eq!(slider.value_at(2.0), 16.0);
    }

    #[test]
    fn degenerate_slider_has_zero_fraction() {
        let slider = MenuSlider {
            min: 1.0,
            max: 1.0,
            value: 1.0,
            whole_numbers: false,
        };
        assert_eq!(slider.fraction(), 0.0);
    }

    #[test]
    fn masked_field_hides_its_value() {
        let field = MenuTextField {
            placeholder: "Password".into(),
            value: "hunter2".into(),
            masked: true,
        };
        assert_eq!(field.display_text(false), "*******");
        assert_eq!(field.display_text(true), "*******|");
        assert_eq!(MenuTextField { value: String::new(), ..field }.display_text(false), "Password");
    }
}
