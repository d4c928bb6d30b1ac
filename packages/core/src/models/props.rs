//! Typed Property Records
//!
//! One record per component type. A stored field that is missing, or holds
//! a value of the wrong type, loads as the schema default instead of failing
//! the template.
//!
//! # Examples
//!
//! ```rust
//! use sitedesk_core::models::{ButtonProps, EditableProps};
//! use serde_json::json;
//!
//! let mut button = ButtonProps::default();
//! button.set_field("text", json!("Buy Now")).unwrap();
//! assert_eq!(button.get_field("text"), Some(json!("Buy Now")));
//! ```

use crate::models::fields::{props_struct, FieldKind};
use serde::{Deserialize, Serialize};

/// Primary colour used by button-like components when no theme is configured
pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";

/// Body text colour used when no theme is configured
pub const DEFAULT_TEXT_COLOR: &str = "#333333";

const ALIGNMENTS: &[&str] = &["left", "center", "right"];
const SIZES: &[&str] = &["small", "medium", "large"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted"];

props_struct! {
    /// Free-form text block
    pub struct TextProps {
        content: String = "Edit this text".to_string() => "content", FieldKind::LongText, "Content",
        color: String = DEFAULT_TEXT_COLOR.to_string() => "color", FieldKind::Color, "Text color",
        font_size: u32 = 16 => "fontSize", FieldKind::Number, "Font size",
        font_family: String = "inherit".to_string() => "fontFamily", FieldKind::Text, "Font family",
        align: String = "left".to_string() => "align", FieldKind::Select(ALIGNMENTS), "Alignment",
    }
}

props_struct! {
    /// Section heading (h1-h6)
    pub struct HeadingProps {
        text: String = "Heading".to_string() => "text", FieldKind::Text, "Text",
        level: u32 = 2 => "level", FieldKind::Number, "Level",
        color: String = DEFAULT_TEXT_COLOR.to_string() => "color", FieldKind::Color, "Text color",
        font_family: String = "inherit".to_string() => "fontFamily", FieldKind::Text, "Font family",
        align: String = "left".to_string() => "align", FieldKind::Select(ALIGNMENTS), "Alignment",
    }
}

props_struct! {
    pub struct ParagraphProps {
        text: String = "Write your paragraph here.".to_string() => "text", FieldKind::LongText, "Text",
        color: String = DEFAULT_TEXT_COLOR.to_string() => "color", FieldKind::Color, "Text color",
        font_family: String = "inherit".to_string() => "fontFamily", FieldKind::Text, "Font family",
        line_height: f64 = 1.6 => "lineHeight", FieldKind::Number, "Line height",
        align: String = "left".to_string() => "align", FieldKind::Select(ALIGNMENTS), "Alignment",
    }
}

props_struct! {
    pub struct QuoteProps {
        text: String = "A memorable quote.".to_string() => "text", FieldKind::LongText, "Quote",
        author: String = String::new() => "author", FieldKind::Text, "Author",
        cite_url: String = String::new() => "citeUrl", FieldKind::Url, "Source URL",
    }
}

props_struct! {
    /// Call-to-action button
    pub struct ButtonProps {
        text: String = "Click me".to_string() => "text", FieldKind::Text, "Label",
        url: String = "#".to_string() => "url", FieldKind::Url, "Link",
        background_color: String = DEFAULT_PRIMARY_COLOR.to_string() => "backgroundColor", FieldKind::Color, "Background color",
        text_color: String = "#ffffff".to_string() => "textColor", FieldKind::Color, "Text color",
        size: String = "medium".to_string() => "size", FieldKind::Select(SIZES), "Size",
        variant: String = "solid".to_string() => "variant", FieldKind::Select(&["solid", "outline", "ghost"]), "Variant",
        open_in_new_tab: bool = false => "openInNewTab", FieldKind::Toggle, "Open in new tab",
    }
}

props_struct! {
    pub struct InputProps {
        label: String = "Label".to_string() => "label", FieldKind::Text, "Label",
        placeholder: String = "Enter text".to_string() => "placeholder", FieldKind::Text, "Placeholder",
        input_type: String = "text".to_string() => "inputType", FieldKind::Select(&["text", "email", "password", "number", "tel", "url"]), "Input type",
        required: bool = false => "required", FieldKind::Toggle, "Required",
    }
}

props_struct! {
    pub struct TextareaProps {
        label: String = "Message".to_string() => "label", FieldKind::Text, "Label",
        placeholder: String = "Type your message".to_string() => "placeholder", FieldKind::Text, "Placeholder",
        rows: u32 = 4 => "rows", FieldKind::Number, "Rows",
        required: bool = false => "required", FieldKind::Toggle, "Required",
    }
}

props_struct! {
    pub struct SelectProps {
        label: String = "Choose an option".to_string() => "label", FieldKind::Text, "Label",
        options: Vec<String> = vec!["Option 1".to_string(), "Option 2".to_string()] => "options", FieldKind::StringList, "Options",
        placeholder: String = "Select...".to_string() => "placeholder", FieldKind::Text, "Placeholder",
        required: bool = false => "required", FieldKind::Toggle, "Required",
    }
}

props_struct! {
    pub struct ImageProps {
        src: String = String::new() => "src", FieldKind::Url, "Image URL",
        alt: String = String::new() => "alt", FieldKind::Text, "Alt text",
        width: String = "100%".to_string() => "width", FieldKind::Text, "Width",
        height: String = "auto".to_string() => "height", FieldKind::Text, "Height",
        object_fit: String = "cover".to_string() => "objectFit", FieldKind::Select(&["cover", "contain", "fill", "none"]), "Fit",
        border_radius: u32 = 0 => "borderRadius", FieldKind::Number, "Corner radius",
    }
}

props_struct! {
    pub struct IconProps {
        icon: String = "star".to_string() => "icon", FieldKind::Text, "Icon",
        size: u32 = 24 => "size", FieldKind::Number, "Size",
        color: String = DEFAULT_TEXT_COLOR.to_string() => "color", FieldKind::Color, "Color",
    }
}

props_struct! {
    /// Row of icons, typically social links
    pub struct IconSetProps {
        icons: Vec<String> = vec!["facebook".to_string(), "twitter".to_string(), "instagram".to_string()] => "icons", FieldKind::StringList, "Icons",
        size: u32 = 24 => "size", FieldKind::Number, "Size",
        color: String = DEFAULT_TEXT_COLOR.to_string() => "color", FieldKind::Color, "Color",
        gap: u32 = 12 => "gap", FieldKind::Number, "Gap",
    }
}

props_struct! {
    pub struct IconButtonProps {
        icon: String = "plus".to_string() => "icon", FieldKind::Text, "Icon",
        label: String = String::new() => "label", FieldKind::Text, "Accessible label",
        url: String = "#".to_string() => "url", FieldKind::Url, "Link",
        background_color: String = DEFAULT_PRIMARY_COLOR.to_string() => "backgroundColor", FieldKind::Color, "Background color",
        color: String = "#ffffff".to_string() => "color", FieldKind::Color, "Icon color",
    }
}

props_struct! {
    pub struct IconLinkProps {
        icon: String = "arrow-right".to_string() => "icon", FieldKind::Text, "Icon",
        text: String = "Learn more".to_string() => "text", FieldKind::Text, "Text",
        url: String = "#".to_string() => "url", FieldKind::Url, "Link",
        color: String = DEFAULT_PRIMARY_COLOR.to_string() => "color", FieldKind::Color, "Color",
    }
}

props_struct! {
    pub struct VideoProps {
        src: String = String::new() => "src", FieldKind::Url, "Video URL",
        poster: String = String::new() => "poster", FieldKind::Url, "Poster image",
        autoplay: bool = false => "autoplay", FieldKind::Toggle, "Autoplay",
        controls: bool = true => "controls", FieldKind::Toggle, "Show controls",
        looped: bool = false => "loop", FieldKind::Toggle, "Loop",
        muted: bool = false => "muted", FieldKind::Toggle, "Muted",
    }
}

props_struct! {
    pub struct AudioProps {
        src: String = String::new() => "src", FieldKind::Url, "Audio URL",
        title: String = String::new() => "title", FieldKind::Text, "Title",
        autoplay: bool = false => "autoplay", FieldKind::Toggle, "Autoplay",
        controls: bool = true => "controls", FieldKind::Toggle, "Show controls",
        looped: bool = false => "loop", FieldKind::Toggle, "Loop",
    }
}

props_struct! {
    /// Inline SVG markup
    pub struct SvgProps {
        markup: String = "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\"></svg>".to_string() => "markup", FieldKind::LongText, "SVG markup",
        width: String = "24".to_string() => "width", FieldKind::Text, "Width",
        height: String = "24".to_string() => "height", FieldKind::Text, "Height",
        color: String = "currentColor".to_string() => "color", FieldKind::Color, "Color",
    }
}

props_struct! {
    pub struct AnimationProps {
        effect: String = "fadeIn".to_string() => "effect", FieldKind::Select(&["fadeIn", "slideUp", "slideLeft", "zoomIn", "bounce"]), "Effect",
        duration_ms: u32 = 600 => "duration", FieldKind::Number, "Duration (ms)",
        delay_ms: u32 = 0 => "delay", FieldKind::Number, "Delay (ms)",
        repeat: bool = false => "repeat", FieldKind::Toggle, "Repeat",
        content: String = "Animated content".to_string() => "content", FieldKind::Text, "Content",
    }
}

/// One slide of a carousel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselSlide {
    pub image: String,
    pub caption: String,
    pub url: String,
}

fn default_slides() -> Vec<CarouselSlide> {
    (1..=2)
        .map(|i| CarouselSlide {
            caption: format!("Slide {}", i),
            ..Default::default()
        })
        .collect()
}

props_struct! {
    pub struct CarouselProps {
        slides: Vec<CarouselSlide> = default_slides() => "slides", FieldKind::Items, "Slides",
        autoplay: bool = true => "autoplay", FieldKind::Toggle, "Autoplay",
        interval_ms: u32 = 5000 => "interval", FieldKind::Number, "Interval (ms)",
        show_indicators: bool = true => "showIndicators", FieldKind::Toggle, "Show indicators",
    }
}

/// One image of a gallery grid
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

props_struct! {
    pub struct GalleryProps {
        images: Vec<GalleryImage> = Vec::new() => "images", FieldKind::Items, "Images",
        columns: u32 = 3 => "columns", FieldKind::Number, "Columns",
        gap: u32 = 8 => "gap", FieldKind::Number, "Gap",
        lightbox: bool = true => "lightbox", FieldKind::Toggle, "Open in lightbox",
    }
}

props_struct! {
    pub struct MapProps {
        address: String = String::new() => "address", FieldKind::Text, "Address",
        latitude: f64 = 0.0 => "latitude", FieldKind::Number, "Latitude",
        longitude: f64 = 0.0 => "longitude", FieldKind::Number, "Longitude",
        zoom: u32 = 13 => "zoom", FieldKind::Number, "Zoom",
        height: String = "400px".to_string() => "height", FieldKind::Text, "Height",
    }
}

props_struct! {
    pub struct ListProps {
        items: Vec<String> = vec!["First item".to_string(), "Second item".to_string(), "Third item".to_string()] => "items", FieldKind::StringList, "Items",
        ordered: bool = false => "ordered", FieldKind::Toggle, "Numbered",
        marker: String = "disc".to_string() => "marker", FieldKind::Select(&["disc", "circle", "square", "decimal", "none"]), "Marker",
    }
}

props_struct! {
    pub struct TableProps {
        headers: Vec<String> = vec!["Column 1".to_string(), "Column 2".to_string()] => "headers", FieldKind::StringList, "Headers",
        rows: Vec<Vec<String>> = vec![vec!["Cell 1".to_string(), "Cell 2".to_string()]] => "rows", FieldKind::Items, "Rows",
        striped: bool = true => "striped", FieldKind::Toggle, "Striped rows",
        bordered: bool = false => "bordered", FieldKind::Toggle, "Bordered",
    }
}

/// One entry of a timeline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    pub date: String,
    pub title: String,
    pub description: String,
}

props_struct! {
    pub struct TimelineProps {
        entries: Vec<TimelineEntry> = vec![TimelineEntry {
            date: "2024".to_string(),
            title: "Milestone".to_string(),
            description: String::new(),
        }] => "entries", FieldKind::Items, "Entries",
        orientation: String = "vertical".to_string() => "orientation", FieldKind::Select(&["vertical", "horizontal"]), "Orientation",
    }
}

props_struct! {
    pub struct CardProps {
        title: String = "Card title".to_string() => "title", FieldKind::Text, "Title",
        body: String = "Card content goes here.".to_string() => "body", FieldKind::LongText, "Body",
        image: String = String::new() => "image", FieldKind::Url, "Image URL",
        link_text: String = String::new() => "linkText", FieldKind::Text, "Link text",
        link_url: String = String::new() => "linkUrl", FieldKind::Url, "Link URL",
        shadow: bool = true => "shadow", FieldKind::Toggle, "Shadow",
    }
}

props_struct! {
    pub struct AlertProps {
        title: String = String::new() => "title", FieldKind::Text, "Title",
        message: String = "This is an alert.".to_string() => "message", FieldKind::LongText, "Message",
        variant: String = "info".to_string() => "variant", FieldKind::Select(&["info", "success", "warning", "error"]), "Variant",
        dismissible: bool = false => "dismissible", FieldKind::Toggle, "Dismissible",
    }
}

props_struct! {
    pub struct BadgeProps {
        text: String = "New".to_string() => "text", FieldKind::Text, "Text",
        background_color: String = DEFAULT_PRIMARY_COLOR.to_string() => "backgroundColor", FieldKind::Color, "Background color",
        text_color: String = "#ffffff".to_string() => "textColor", FieldKind::Color, "Text color",
        rounded: bool = true => "rounded", FieldKind::Toggle, "Pill shape",
    }
}

props_struct! {
    pub struct DividerProps {
        style: String = "solid".to_string() => "style", FieldKind::Select(BORDER_STYLES), "Style",
        color: String = "#e5e7eb".to_string() => "color", FieldKind::Color, "Color",
        thickness: u32 = 1 => "thickness", FieldKind::Number, "Thickness",
        spacing: u32 = 16 => "spacing", FieldKind::Number, "Spacing",
    }
}

props_struct! {
    pub struct CodeProps {
        code: String = "console.log('Hello');".to_string() => "code", FieldKind::LongText, "Code",
        language: String = "javascript".to_string() => "language", FieldKind::Text, "Language",
        show_line_numbers: bool = false => "showLineNumbers", FieldKind::Toggle, "Line numbers",
    }
}

props_struct! {
    pub struct PreProps {
        text: String = "Preformatted text".to_string() => "text", FieldKind::LongText, "Text",
        wrap: bool = false => "wrap", FieldKind::Toggle, "Wrap lines",
    }
}

props_struct! {
    /// Generic layout box
    pub struct ContainerProps {
        max_width: String = "1200px".to_string() => "maxWidth", FieldKind::Text, "Max width",
        padding: String = "16px".to_string() => "padding", FieldKind::Text, "Padding",
        background_color: String = "transparent".to_string() => "backgroundColor", FieldKind::Color, "Background color"
        ; children
    }
}

props_struct! {
    /// Fixed-column grid layout
    pub struct GridProps {
        columns: u32 = 3 => "columns", FieldKind::Number, "Columns",
        gap: u32 = 16 => "gap", FieldKind::Number, "Gap"
        ; children
    }
}

props_struct! {
    /// Side-by-side column layout
    pub struct ColumnsProps {
        count: u32 = 2 => "count", FieldKind::Number, "Columns",
        gap: u32 = 24 => "gap", FieldKind::Number, "Gap",
        stack_on_mobile: bool = true => "stackOnMobile", FieldKind::Toggle, "Stack on mobile"
        ; children
    }
}

props_struct! {
    pub struct SpacerProps {
        height: u32 = 32 => "height", FieldKind::Number, "Height",
    }
}

props_struct! {
    /// Full-width banner with call to action
    pub struct HeroProps {
        title: String = "Welcome to our site".to_string() => "title", FieldKind::Text, "Title",
        subtitle: String = "Build something great.".to_string() => "subtitle", FieldKind::LongText, "Subtitle",
        background_image: String = String::new() => "backgroundImage", FieldKind::Url, "Background image",
        background_color: String = "#111827".to_string() => "backgroundColor", FieldKind::Color, "Background color",
        text_color: String = "#ffffff".to_string() => "textColor", FieldKind::Color, "Text color",
        cta_text: String = "Get started".to_string() => "ctaText", FieldKind::Text, "Button text",
        cta_url: String = "#".to_string() => "ctaUrl", FieldKind::Url, "Button link",
        cta_color: String = DEFAULT_PRIMARY_COLOR.to_string() => "ctaColor", FieldKind::Color, "Button color",
        align: String = "center".to_string() => "align", FieldKind::Select(ALIGNMENTS), "Alignment",
    }
}

/// One plan column of a pricing table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_url: String,
    pub highlighted: bool,
}

fn default_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Basic".to_string(),
            price: "9".to_string(),
            features: vec!["1 site".to_string(), "Email support".to_string()],
            cta_text: "Choose Basic".to_string(),
            cta_url: "#".to_string(),
            highlighted: false,
        },
        PricingPlan {
            name: "Pro".to_string(),
            price: "29".to_string(),
            features: vec![
                "10 sites".to_string(),
                "Priority support".to_string(),
                "Custom domain".to_string(),
            ],
            cta_text: "Choose Pro".to_string(),
            cta_url: "#".to_string(),
            highlighted: true,
        },
    ]
}

props_struct! {
    /// Pricing table with one column per plan
    pub struct PricingProps {
        plans: Vec<PricingPlan> = default_plans() => "plans", FieldKind::Items, "Plans",
        currency: String = "$".to_string() => "currency", FieldKind::Text, "Currency",
        billing_period: String = "month".to_string() => "billingPeriod", FieldKind::Select(&["month", "year"]), "Billing period",
        accent_color: String = DEFAULT_PRIMARY_COLOR.to_string() => "accentColor", FieldKind::Color, "Accent color",
    }
}
