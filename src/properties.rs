//! Concentric property metadata table
//!
//! Static mapping from CSS property name to its box-model group and its
//! priority within that group, used only by concentric ordering. Pure data
//! with no derivation logic: properties absent from the table fall into the
//! implicit trailing `unknown` bucket handled by the ordering engine.
//! Side properties follow the conventional clockwise authoring order
//! (top, right, bottom, left) rather than alphabetical order.

/// Box-model groups in their fixed concentric sequence, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyGroup {
    Positioning,
    Display,
    FlexGrid,
    BoxSizing,
    Background,
    Typography,
    Misc,
}

impl PropertyGroup {
    /// Fixed position of this group in the concentric sequence
    pub fn rank(&self) -> u16 {
        match self {
            PropertyGroup::Positioning => 0,
            PropertyGroup::Display => 1,
            PropertyGroup::FlexGrid => 2,
            PropertyGroup::BoxSizing => 3,
            PropertyGroup::Background => 4,
            PropertyGroup::Typography => 5,
            PropertyGroup::Misc => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyGroup::Positioning => "positioning",
            PropertyGroup::Display => "display",
            PropertyGroup::FlexGrid => "flex-grid",
            PropertyGroup::BoxSizing => "box-sizing",
            PropertyGroup::Background => "background",
            PropertyGroup::Typography => "typography",
            PropertyGroup::Misc => "misc",
        }
    }
}

/// Centralized name to concentric-key mapping, accepting both the CSS
/// kebab-case spelling and the camelCase spelling style-object hosts use
pub fn concentric_key(name: &str) -> Option<(PropertyGroup, u16)> {
    use PropertyGroup::*;

    let key = match name {
        // Positioning
        "position" => (Positioning, 0),
        "top" => (Positioning, 1),
        "right" => (Positioning, 2),
        "bottom" => (Positioning, 3),
        "left" => (Positioning, 4),
        "inset" => (Positioning, 5),
        "z-index" | "zIndex" => (Positioning, 6),

        // Display and visibility
        "display" => (Display, 0),
        "visibility" => (Display, 1),
        "opacity" => (Display, 2),
        "overflow" => (Display, 3),
        "overflow-x" | "overflowX" => (Display, 4),
        "overflow-y" | "overflowY" => (Display, 5),
        "float" => (Display, 6),
        "clear" => (Display, 7),

        // Flex and grid container/item properties
        "flex" => (FlexGrid, 0),
        "flex-direction" | "flexDirection" => (FlexGrid, 1),
        "flex-wrap" | "flexWrap" => (FlexGrid, 2),
        "flex-flow" | "flexFlow" => (FlexGrid, 3),
        "flex-grow" | "flexGrow" => (FlexGrid, 4),
        "flex-shrink" | "flexShrink" => (FlexGrid, 5),
        "flex-basis" | "flexBasis" => (FlexGrid, 6),
        "justify-content" | "justifyContent" => (FlexGrid, 7),
        "justify-items" | "justifyItems" => (FlexGrid, 8),
        "justify-self" | "justifySelf" => (FlexGrid, 9),
        "align-content" | "alignContent" => (FlexGrid, 10),
        "align-items" | "alignItems" => (FlexGrid, 11),
        "align-self" | "alignSelf" => (FlexGrid, 12),
        "order" => (FlexGrid, 13),
        "gap" => (FlexGrid, 14),
        "row-gap" | "rowGap" => (FlexGrid, 15),
        "column-gap" | "columnGap" => (FlexGrid, 16),
        "grid" => (FlexGrid, 17),
        "grid-template" | "gridTemplate" => (FlexGrid, 18),
        "grid-template-rows" | "gridTemplateRows" => (FlexGrid, 19),
        "grid-template-columns" | "gridTemplateColumns" => (FlexGrid, 20),
        "grid-template-areas" | "gridTemplateAreas" => (FlexGrid, 21),
        "grid-auto-rows" | "gridAutoRows" => (FlexGrid, 22),
        "grid-auto-columns" | "gridAutoColumns" => (FlexGrid, 23),
        "grid-auto-flow" | "gridAutoFlow" => (FlexGrid, 24),
        "grid-area" | "gridArea" => (FlexGrid, 25),
        "grid-row" | "gridRow" => (FlexGrid, 26),
        "grid-column" | "gridColumn" => (FlexGrid, 27),

        // Box sizing: dimensions, margin, border, padding, outermost first
        "box-sizing" | "boxSizing" => (BoxSizing, 0),
        "width" => (BoxSizing, 1),
        "min-width" | "minWidth" => (BoxSizing, 2),
        "max-width" | "maxWidth" => (BoxSizing, 3),
        "height" => (BoxSizing, 4),
        "min-height" | "minHeight" => (BoxSizing, 5),
        "max-height" | "maxHeight" => (BoxSizing, 6),
        "margin" => (BoxSizing, 7),
        "margin-top" | "marginTop" => (BoxSizing, 8),
        "margin-right" | "marginRight" => (BoxSizing, 9),
        "margin-bottom" | "marginBottom" => (BoxSizing, 10),
        "margin-left" | "marginLeft" => (BoxSizing, 11),
        "border" => (BoxSizing, 12),
        "border-width" | "borderWidth" => (BoxSizing, 13),
        "border-style" | "borderStyle" => (BoxSizing, 14),
        "border-color" | "borderColor" => (BoxSizing, 15),
        "border-top" | "borderTop" => (BoxSizing, 16),
        "border-right" | "borderRight" => (BoxSizing, 17),
        "border-bottom" | "borderBottom" => (BoxSizing, 18),
        "border-left" | "borderLeft" => (BoxSizing, 19),
        "border-radius" | "borderRadius" => (BoxSizing, 20),
        "outline" => (BoxSizing, 21),
        "padding" => (BoxSizing, 22),
        "padding-top" | "paddingTop" => (BoxSizing, 23),
        "padding-right" | "paddingRight" => (BoxSizing, 24),
        "padding-bottom" | "paddingBottom" => (BoxSizing, 25),
        "padding-left" | "paddingLeft" => (BoxSizing, 26),

        // Background and color
        "background" => (Background, 0),
        "background-color" | "backgroundColor" => (Background, 1),
        "background-image" | "backgroundImage" => (Background, 2),
        "background-repeat" | "backgroundRepeat" => (Background, 3),
        "background-position" | "backgroundPosition" => (Background, 4),
        "background-size" | "backgroundSize" => (Background, 5),
        "color" => (Background, 6),
        "box-shadow" | "boxShadow" => (Background, 7),

        // Typography
        "font" => (Typography, 0),
        "font-family" | "fontFamily" => (Typography, 1),
        "font-size" | "fontSize" => (Typography, 2),
        "font-style" | "fontStyle" => (Typography, 3),
        "font-weight" | "fontWeight" => (Typography, 4),
        "line-height" | "lineHeight" => (Typography, 5),
        "letter-spacing" | "letterSpacing" => (Typography, 6),
        "word-spacing" | "wordSpacing" => (Typography, 7),
        "text-align" | "textAlign" => (Typography, 8),
        "text-decoration" | "textDecoration" => (Typography, 9),
        "text-transform" | "textTransform" => (Typography, 10),
        "text-overflow" | "textOverflow" => (Typography, 11),
        "white-space" | "whiteSpace" => (Typography, 12),
        "word-break" | "wordBreak" => (Typography, 13),

        // Everything else with a conventional slot
        "list-style" | "listStyle" => (Misc, 0),
        "content" => (Misc, 1),
        "cursor" => (Misc, 2),
        "pointer-events" | "pointerEvents" => (Misc, 3),
        "user-select" | "userSelect" => (Misc, 4),
        "transform" => (Misc, 5),
        "transition" => (Misc, 6),
        "animation" => (Misc, 7),

        _ => return None,
    };
    Some(key)
}
