use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MenuError;

/// The closed set of menu pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub enum PageId {
    MainMenu,
    Settings,
    Host,
    Join,
    Credits,
    AboutUs,
}

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::MainMenu,
        PageId::Settings,
        PageId::Host,
        PageId::Join,
        PageId::Credits,
        PageId::AboutUs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::MainMenu => "main-menu",
            PageId::Settings => "settings",
            PageId::Host => "host",
            PageId::Join => "join",
            PageId::Credits => "credits",
            PageId::AboutUs => "about-us",
        }
    }

    /// Default asset path, relative to the asset root.
    pub fn asset_path(self) -> String {
        format!("menu/{}.page.ron", self.as_str())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| MenuError::UnknownPage(s.to_string()))
    }
}

/// Page layout, loaded from an individual `.page.ron` file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Asset, TypePath)]
pub struct PageDef {
    #[serde(default)]
    pub title: Option<String>,
    pub root: WidgetDef,
}

impl PageDef {
    pub fn new(root: WidgetDef) -> Self {
        Self { title: None, root }
    }

    /// Depth-first walk over every widget, root first.
    pub fn widgets(&self) -> impl Iterator<Item = &WidgetDef> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }
}

/// One node of a page's widget tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidgetDef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    pub kind: WidgetKind,
    #[serde(default)]
    pub children: Vec<WidgetDef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WidgetKind {
    Column,
    Row,
    Label {
        text: String,
        #[serde(default)]
        size: Option<f32>,
    },
    Button {
        text: String,
    },
    Slider {
        min: f32,
        max: f32,
        value: f32,
        #[serde(default)]
        whole_numbers: bool,
    },
    Toggle {
        label: String,
        #[serde(default)]
        value: bool,
    },
    TextField {
        #[serde(default)]
        placeholder: String,
        #[serde(default)]
        value: String,
        #[serde(default)]
        masked: bool,
    },
}

/// Widget type used when looking a widget up by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetType {
    Container,
    Label,
    Button,
    Slider,
    Toggle,
    TextField,
}

impl WidgetKind {
    pub fn widget_type(&self) -> WidgetType {
        match self {
            WidgetKind::Column | WidgetKind::Row => WidgetType::Container,
            WidgetKind::Label { .. } => WidgetType::Label,
            WidgetKind::Button { .. } => WidgetType::Button,
            WidgetKind::Slider { .. } => WidgetType::Slider,
            WidgetKind::Toggle { .. } => WidgetType::Toggle,
            WidgetKind::TextField { .. } => WidgetType::TextField,
        }
    }
}

impl WidgetDef {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            name: None,
            classes: Vec::new(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn column(children: impl IntoIterator<Item = WidgetDef>) -> Self {
        Self::new(WidgetKind::Column).with_children(children)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(WidgetKind::Label {
            text: text.into(),
            size: None,
        })
    }

    pub fn button(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(WidgetKind::Button { text: text.into() }).named(name)
    }

    pub fn slider(name: impl Into<String>, min: f32, max: f32, value: f32) -> Self {
        Self::new(WidgetKind::Slider {
            min,
            max,
            value,
            whole_numbers: false,
        })
        .named(name)
    }

    pub fn toggle(name: impl Into<String>, label: impl Into<String>, value: bool) -> Self {
        Self::new(WidgetKind::Toggle {
            label: label.into(),
            value,
        })
        .named(name)
    }

    pub fn text_field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(WidgetKind::TextField {
            placeholder: String::new(),
            value: value.into(),
            masked: false,
        })
        .named(name)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = WidgetDef>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
