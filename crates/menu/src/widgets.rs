//! Mounting page assets as Bevy UI entities, and keeping widget visuals in
//! sync with widget state.

use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;
use std::collections::HashMap;

use crate::components::*;
use crate::input::FocusedField;
use crate::page::{PageDef, PageId, WidgetDef, WidgetKind, WidgetType};

const TEXT_COLOR: Color = Color::WHITE;
const BUTTON_NORMAL: Color = Color::srgb(0.2, 0.2, 0.2);
const BUTTON_HOVERED: Color = Color::srgb(0.3, 0.3, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.45, 0.45, 0.45);
const TRACK_COLOR: Color = Color::srgb(0.15, 0.15, 0.15);
const FILL_COLOR: Color = Color::srgb(0.8, 0.6, 0.2);

/// Name and class lookup over one mounted page.
#[derive(Clone, Debug, Default)]
pub struct WidgetIndex {
    by_name: HashMap<String, Vec<(Entity, WidgetType)>>,
    by_class: HashMap<String, Vec<(Entity, WidgetType)>>,
}

impl WidgetIndex {
    pub fn insert(&mut self, entity: Entity, def: &WidgetDef) {
        let ty = def.kind.widget_type();
        if let Some(name) = &def.name {
            self.by_name.entry(name.clone()).or_default().push((entity, ty));
        }
        for class in &def.classes {
            self.by_class.entry(class.clone()).or_default().push((entity, ty));
        }
    }

    /// First widget (depth-first) with this name and type.
    pub fn find(&self, name: &str, ty: WidgetType) -> Option<Entity> {
        self.by_name
            .get(name)?
            .iter()
            .find(|(_, t)| *t == ty)
            .map(|(entity, _)| *entity)
    }

    /// Every widget of type `ty` carrying `class`, in tree order.
    pub fn with_class<'a>(&'a self, class: &str, ty: WidgetType) -> impl Iterator<Item = Entity> + 'a {
        self.by_class
            .get(class)
            .into_iter()
            .flatten()
            .filter(move |(_, t)| *t == ty)
            .map(|(entity, _)| *entity)
    }
}

/// Spawns `def` as a child of `document` and returns the page root and its
/// widget index.
pub fn spawn_page(
    commands: &mut Commands,
    document: Entity,
    page: PageId,
    def: &PageDef,
) -> (Entity, WidgetIndex) {
    let root = commands
        .spawn((
            PageRoot(page),
            Name::new(format!("Page: {page}")),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(20.0),
                ..default()
            },
            ChildOf(document),
        ))
        .id();

    if let Some(title) = &def.title {
        commands.spawn((
            Text::new(title.clone()),
            TextFont {
                font_size: 60.0,
                ..default()
            },
            TextColor(TEXT_COLOR),
            ChildOf(root),
        ));
    }

    let mut index = WidgetIndex::default();
    spawn_widget(commands, root, &def.root, &mut index);
    (root, index)
}

fn spawn_widget(commands: &mut Commands, parent: Entity, def: &WidgetDef, index: &mut WidgetIndex) {
    let entity = commands.spawn(ChildOf(parent)).id();
    index.insert(entity, def);

    let mut entity_commands = commands.entity(entity);
    if let Some(name) = &def.name {
        entity_commands.insert(Name::new(name.clone()));
    }
    if !def.classes.is_empty() {
        entity_commands.insert(StyleClasses(def.classes.clone()));
    }

    match &def.kind {
        WidgetKind::Column => {
            entity_commands.insert(Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            });
        }
        WidgetKind::Row => {
            entity_commands.insert(Node {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(16.0),
                ..default()
            });
        }
        WidgetKind::Label { text, size } => {
            entity_commands.insert((
                Text::new(text.clone()),
                TextFont {
                    font_size: size.unwrap_or(24.0),
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        }
        WidgetKind::Button { text } => {
            entity_commands.insert((button_node(200.0, 56.0), PreviousInteraction::default()));
            spawn_text(commands, entity, text.clone(), 28.0);
        }
        WidgetKind::Slider {
            min,
            max,
            value,
            whole_numbers,
        } => {
            let slider = MenuSlider {
                min: *min,
                max: *max,
                value: *value,
                whole_numbers: *whole_numbers,
            };
            let fill = commands
                .spawn((
                    Node {
                        width: Val::Percent(slider.fraction() * 100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(FILL_COLOR),
                    ChildOf(entity),
                ))
                .id();
            commands.entity(entity).insert((
                slider,
                SliderTrack { fill },
                Interaction::default(),
                PreviousInteraction::default(),
                RelativeCursorPosition::default(),
                Node {
                    width: Val::Px(300.0),
                    height: Val::Px(20.0),
                    ..default()
                },
                BackgroundColor(TRACK_COLOR),
            ));
        }
        WidgetKind::Toggle { label, value } => {
            let toggle = MenuToggle {
                label: label.clone(),
                on: *value,
            };
            let text = spawn_text(commands, entity, toggle_text(&toggle), 24.0);
            commands.entity(entity).insert((
                toggle,
                WidgetLabel(text),
                button_node(300.0, 48.0),
                PreviousInteraction::default(),
            ));
        }
        WidgetKind::TextField {
            placeholder,
            value,
            masked,
        } => {
            let field = MenuTextField {
                placeholder: placeholder.clone(),
                value: value.clone(),
                masked: *masked,
            };
            let text = spawn_text(commands, entity, field.display_text(false), 22.0);
            commands.entity(entity).insert((
                field,
                WidgetLabel(text),
                button_node(300.0, 44.0),
                PreviousInteraction::default(),
            ));
        }
    }

    for child in &def.children {
        spawn_widget(commands, entity, child, index);
    }
}

fn button_node(width: f32, height: f32) -> impl Bundle {
    (
        Button,
        Node {
            width: Val::Px(width),
            height: Val::Px(height),
            border: UiRect::all(Val::Px(4.0)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BorderColor::all(Color::WHITE),
        BackgroundColor(BUTTON_NORMAL),
    )
}

fn spawn_text(commands: &mut Commands, parent: Entity, text: String, font_size: f32) -> Entity {
    commands
        .spawn((
            Text::new(text),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(TEXT_COLOR),
            ChildOf(parent),
        ))
        .id()
}

fn toggle_text(toggle: &MenuToggle) -> String {
    let mark = if toggle.on { "x" } else { " " };
    format!("[{mark}] {}", toggle.label)
}

pub(crate) fn refresh_button_colors(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, mut color) in &mut buttons {
        *color = match interaction {
            Interaction::Pressed => BUTTON_PRESSED.into(),
            Interaction::Hovered => BUTTON_HOVERED.into(),
            Interaction::None => BUTTON_NORMAL.into(),
        };
    }
}

pub(crate) fn refresh_slider_fills(
    sliders: Query<(&MenuSlider, &SliderTrack), Changed<MenuSlider>>,
    mut fills: Query<&mut Node>,
) {
    for (slider, track) in &sliders {
        if let Ok(mut node) = fills.get_mut(track.fill) {
            node.width = Val::Percent(slider.fraction() * 100.0);
        }
    }
}

pub(crate) fn refresh_toggle_labels(
    toggles: Query<(&MenuToggle, &WidgetLabel), Changed<MenuToggle>>,
    mut texts: Query<&mut Text>,
) {
    for (toggle, label) in &toggles {
        if let Ok(mut text) = texts.get_mut(label.0) {
            text.0 = toggle_text(toggle);
        }
    }
}

pub(crate) fn refresh_text_fields(
    focus: Res<FocusedField>,
    fields: Query<(Entity, Ref<MenuTextField>, &WidgetLabel)>,
    mut texts: Query<&mut Text>,
) {
    for (entity, field, label) in &fields {
        if !field.is_changed() && !focus.is_changed() {
            continue;
        }
        if let Ok(mut text) = texts.get_mut(label.0) {
            text.0 = field.display_text(focus.0 == Some(entity));
        }
    }
}
