use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::binding::EventKind;
use crate::components::*;

/// A discrete interaction on a widget, consumed by the router and the hover
/// controller.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct WidgetEvent {
    pub entity: Entity,
    pub kind: WidgetEventKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WidgetEventKind {
    Click,
    ValueChanged(f32),
    Toggled(bool),
    PointerEnter,
}

impl WidgetEventKind {
    pub fn event_kind(&self) -> EventKind {
        match self {
            WidgetEventKind::Click => EventKind::Click,
            WidgetEventKind::ValueChanged(_) => EventKind::ValueChanged,
            WidgetEventKind::Toggled(_) => EventKind::Toggled,
            WidgetEventKind::PointerEnter => EventKind::PointerEnter,
        }
    }
}

impl WidgetEvent {
    pub fn new(entity: Entity, kind: WidgetEventKind) -> Self {
        Self { entity, kind }
    }
}

/// Text field receiving keyboard input, if any
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FocusedField(pub Option<Entity>);

/// Turns `Interaction` changes into click, toggle and pointer-enter events.
pub(crate) fn emit_interaction_events(
    mut widgets: Query<(Entity, &Interaction, &mut PreviousInteraction), Changed<Interaction>>,
    mut toggles: Query<&mut MenuToggle>,
    sliders: Query<(), With<MenuSlider>>,
    mut writer: MessageWriter<WidgetEvent>,
) {
    for (entity, interaction, mut previous) in &mut widgets {
        let before = previous.0;
        if before == *interaction {
            continue;
        }
        previous.0 = *interaction;

        if before == Interaction::None {
            writer.write(WidgetEvent::new(entity, WidgetEventKind::PointerEnter));
        }
        if *interaction != Interaction::Pressed || sliders.contains(entity) {
            continue;
        }
        if let Ok(mut toggle) = toggles.get_mut(entity) {
            toggle.on = !toggle.on;
            writer.write(WidgetEvent::new(entity, WidgetEventKind::Toggled(toggle.on)));
        } else {
            writer.write(WidgetEvent::new(entity, WidgetEventKind::Click));
        }
    }
}

/// Moves pressed sliders to the cursor position.
pub(crate) fn drag_sliders(
    mut sliders: Query<(Entity, &Interaction, &RelativeCursorPosition, &mut MenuSlider)>,
    mut writer: MessageWriter<WidgetEvent>,
) {
    for (entity, interaction, cursor, mut slider) in &mut sliders {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(position) = cursor.normalized else {
            continue;
        };
        // `normalized` is centered on the node.
        let value = slider.value_at(position.x + 0.5);
        if (value - slider.value).abs() > f32::EPSILON {
            slider.value = value;
            writer.write(WidgetEvent::new(entity, WidgetEventKind::ValueChanged(value)));
        }
    }
}

/// Clicking a text field focuses it; clicking anything else clears focus.
pub(crate) fn focus_text_fields(
    mut events: MessageReader<WidgetEvent>,
    fields: Query<(), With<MenuTextField>>,
    mut focus: ResMut<FocusedField>,
) {
    for event in events.read() {
        if event.kind != WidgetEventKind::Click {
            continue;
        }
        let next = fields.contains(event.entity).then_some(event.entity);
        if focus.0 != next {
            focus.0 = next;
        }
    }
}

pub(crate) fn type_into_focused_field(
    mut keys: MessageReader<KeyboardInput>,
    mut focus: ResMut<FocusedField>,
    mut fields: Query<&mut MenuTextField>,
) {
    let Some(entity) = focus.0 else {
        keys.clear();
        return;
    };
    let Ok(mut field) = fields.get_mut(entity) else {
        // Field went away with its page.
        focus.0 = None;
        keys.clear();
        return;
    };

    for input in keys.read() {
        if input.state != ButtonState::Pressed {
            continue;
        }
        match &input.logical_key {
            Key::Character(chars) => field.value.push_str(chars),
            Key::Space => field.value.push(' '),
            Key::Backspace => {
                field.value.pop();
            }
            Key::Enter | Key::Escape | Key::Tab => {
                focus.0 = None;
                break;
            }
            _ => {}
        }
    }
}
