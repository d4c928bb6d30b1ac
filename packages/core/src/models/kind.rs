//! Component Type Tags and the Property Union
//!
//! The closed set of component types is declared once in the catalog table at
//! the bottom of this file. From it we generate:
//!
//! - [`ComponentKind`] - the type tag (`text`, `iconSet`, `grid`, ...)
//! - [`ComponentProps`] - a tagged union with one typed record per type,
//!   serialized as `{ "<type>": { ...fields } }`
//!
//! Only `container`, `grid` and `columns` records carry children, so the
//! "only containers have children" invariant holds by construction.

use crate::config::ThemeDefaults;
use crate::models::component::{ComponentNode, ValidationError};
use crate::models::fields::{EditableProps, FieldSpec, PropertyError};
use crate::models::props::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Palette grouping for component types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Typography,
    Forms,
    Media,
    Data,
    Layout,
    Feedback,
    Marketing,
}

impl ComponentCategory {
    /// Categories in palette order
    pub const ALL: [ComponentCategory; 7] = [
        Self::Layout,
        Self::Typography,
        Self::Media,
        Self::Forms,
        Self::Data,
        Self::Feedback,
        Self::Marketing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Typography => "Typography",
            Self::Forms => "Forms",
            Self::Media => "Media",
            Self::Data => "Data",
            Self::Layout => "Layout",
            Self::Feedback => "Feedback",
            Self::Marketing => "Marketing",
        }
    }
}

macro_rules! component_catalog {
    (
        $( $variant:ident => $tag:literal, $props:ident, $display:literal, $category:ident; )*
    ) => {
        /// Component type tag
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ComponentKind {
            $(
                #[serde(rename = $tag)]
                $variant,
            )*
        }

        impl ComponentKind {
            /// Every supported type, in catalog order
            pub const ALL: &'static [ComponentKind] = &[ $( ComponentKind::$variant, )* ];

            /// Type tag as persisted
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $tag, )*
                }
            }

            /// Default human readable name for new nodes
            pub fn display_name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $display, )*
                }
            }

            pub fn category(&self) -> ComponentCategory {
                match self {
                    $( Self::$variant => ComponentCategory::$category, )*
                }
            }

            /// Editable fields of this type, in panel order
            pub fn fields(&self) -> &'static [FieldSpec] {
                match self {
                    $( Self::$variant => <$props as EditableProps>::FIELDS, )*
                }
            }
        }

        impl FromStr for ComponentKind {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $tag => Ok(Self::$variant), )*
                    other => Err(ValidationError::InvalidComponentType(other.to_string())),
                }
            }
        }

        /// Type-specific property record, keyed by the component's type tag
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum ComponentProps {
            $(
                #[serde(rename = $tag)]
                $variant($props),
            )*
        }

        impl ComponentProps {
            pub fn kind(&self) -> ComponentKind {
                match self {
                    $( Self::$variant(_) => ComponentKind::$variant, )*
                }
            }

            /// Schema default record for `kind`
            pub fn default_for(kind: ComponentKind) -> Self {
                match kind {
                    $( ComponentKind::$variant => Self::$variant($props::default()), )*
                }
            }

            /// Decode the `props.<type>` object of a persisted node
            ///
            /// Missing fields take their schema default.
            pub fn from_value(kind: ComponentKind, value: Value) -> Result<Self, serde_json::Error> {
                match kind {
                    $( ComponentKind::$variant => Ok(Self::$variant(serde_json::from_value(value)?)), )*
                }
            }

            /// Encode the record body (without the type key)
            pub fn to_value(&self) -> Result<Value, serde_json::Error> {
                match self {
                    $( Self::$variant(props) => serde_json::to_value(props), )*
                }
            }

            pub fn get_field(&self, key: &str) -> Option<Value> {
                match self {
                    $( Self::$variant(props) => props.get_field(key), )*
                }
            }

            pub fn set_field(&mut self, key: &str, value: Value) -> Result<(), PropertyError> {
                match self {
                    $( Self::$variant(props) => props.set_field(key, value), )*
                }
            }
        }
    };
}

component_catalog! {
    Text => "text", TextProps, "Text", Typography;
    Heading => "heading", HeadingProps, "Heading", Typography;
    Paragraph => "paragraph", ParagraphProps, "Paragraph", Typography;
    Quote => "quote", QuoteProps, "Quote", Typography;
    Button => "button", ButtonProps, "Button", Forms;
    Input => "input", InputProps, "Input", Forms;
    Textarea => "textarea", TextareaProps, "Text Area", Forms;
    Select => "select", SelectProps, "Select", Forms;
    Image => "image", ImageProps, "Image", Media;
    Icon => "icon", IconProps, "Icon", Media;
    IconSet => "iconSet", IconSetProps, "Icon Set", Media;
    IconButton => "iconButton", IconButtonProps, "Icon Button", Forms;
    IconLink => "iconLink", IconLinkProps, "Icon Link", Typography;
    Video => "video", VideoProps, "Video", Media;
    Audio => "audio", AudioProps, "Audio", Media;
    Svg => "svg", SvgProps, "SVG", Media;
    Animation => "animation", AnimationProps, "Animation", Media;
    Carousel => "carousel", CarouselProps, "Carousel", Media;
    Gallery => "gallery", GalleryProps, "Gallery", Media;
    Map => "map", MapProps, "Map", Media;
    List => "list", ListProps, "List", Data;
    Table => "table", TableProps, "Table", Data;
    Timeline => "timeline", TimelineProps, "Timeline", Data;
    Card => "card", CardProps, "Card", Marketing;
    Alert => "alert", AlertProps, "Alert", Feedback;
    Badge => "badge", BadgeProps, "Badge", Feedback;
    Divider => "divider", DividerProps, "Divider", Layout;
    Code => "code", CodeProps, "Code", Data;
    Pre => "pre", PreProps, "Preformatted", Data;
    Container => "container", ContainerProps, "Container", Layout;
    Grid => "grid", GridProps, "Grid", Layout;
    Columns => "columns", ColumnsProps, "Columns", Layout;
    Spacer => "spacer", SpacerProps, "Spacer", Layout;
    Hero => "hero", HeroProps, "Hero", Marketing;
    Pricing => "pricing", PricingProps, "Pricing", Marketing;
}

impl ComponentKind {
    /// Whether nodes of this type hold an ordered child list
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container | Self::Grid | Self::Columns)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ComponentProps {
    /// Child nodes of a container record, `None` for leaf types
    pub fn children(&self) -> Option<&Vec<ComponentNode>> {
        match self {
            Self::Container(props) => Some(&props.children),
            Self::Grid(props) => Some(&props.children),
            Self::Columns(props) => Some(&props.children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<ComponentNode>> {
        match self {
            Self::Container(props) => Some(&mut props.children),
            Self::Grid(props) => Some(&mut props.children),
            Self::Columns(props) => Some(&mut props.children),
            _ => None,
        }
    }

    /// Overwrite the site-wide colour and font defaults of themed types
    pub fn apply_theme(&mut self, theme: &ThemeDefaults) {
        match self {
            Self::Text(props) => {
                props.color = theme.text_color.clone();
                props.font_family = theme.font_family.clone();
            }
            Self::Heading(props) => {
                props.color = theme.text_color.clone();
                props.font_family = theme.font_family.clone();
            }
            Self::Paragraph(props) => {
                props.color = theme.text_color.clone();
                props.font_family = theme.font_family.clone();
            }
            Self::Button(props) => props.background_color = theme.primary_color.clone(),
            Self::IconButton(props) => props.background_color = theme.primary_color.clone(),
            Self::IconLink(props) => props.color = theme.primary_color.clone(),
            Self::Badge(props) => props.background_color = theme.primary_color.clone(),
            Self::Hero(props) => props.cta_color = theme.primary_color.clone(),
            Self::Pricing(props) => props.accent_color = theme.primary_color.clone(),
            _ => {}
        }
    }
}
