// Utility-class groups: which CSS property family a class sets, and which
// families a class of that group overrides.
use std::borrow::Cow;

// What may follow `prefix-` for a rule to apply
#[derive(Debug, Clone, Copy)]
enum Value {
    // Exactly these values; "" allows the bare prefix
    Keywords(&'static [&'static str]),
    // Plain number or arbitrary length, or bare
    Length,
    // Spacing scale: numbers, fractions, px/auto/full, anything arbitrary
    Spacing,
    // Spacing plus the sizing keywords and t-shirt sizes
    Sizing,
    // xs..9xl/base or an arbitrary length
    FontSize,
    // Bare, t-shirt sizes, none/full/inner or arbitrary
    Scale,
    // Any non-empty value
    Any,
    // Any value, or bare
    BareOrAny,
}

impl Value {
    fn accepts(self, value: &str) -> bool {
        match self {
            Value::Keywords(words) => words.contains(&value),
            Value::Length => value.is_empty() || is_number(value) || is_arbitrary_length(value),
            Value::Spacing => is_spacing(value),
            Value::Sizing => {
                is_spacing(value)
                    || is_tshirt(value)
                    || value.starts_with("screen-")
                    || SIZING_WORDS.contains(&value)
            }
            Value::FontSize => {
                value == "base" || (is_tshirt(value) && value != "2xs") || is_arbitrary_length(value)
            }
            Value::Scale => {
                value.is_empty()
                    || is_tshirt(value)
                    || matches!(value, "none" | "full" | "inner")
                    || is_arbitrary(value)
            }
            Value::Any => !value.is_empty(),
            Value::BareOrAny => true,
        }
    }
}

const SIZING_WORDS: &[&str] = &[
    "screen", "min", "max", "fit", "none", "prose", "svw", "lvw", "dvw", "svh", "lvh", "dvh",
];

struct Rule {
    prefix: &'static str,
    value: Value,
    group: &'static str,
}

const fn rule(prefix: &'static str, value: Value, group: &'static str) -> Rule {
    Rule { prefix, value, group }
}

// Classes that are a whole word rather than prefix-value
const EXACT: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("table", "display"),
    ("inline-table", "display"),
    ("table-caption", "display"),
    ("table-cell", "display"),
    ("table-column", "display"),
    ("table-column-group", "display"),
    ("table-footer-group", "display"),
    ("table-header-group", "display"),
    ("table-row-group", "display"),
    ("table-row", "display"),
    ("flow-root", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("contents", "display"),
    ("list-item", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("isolate", "isolation"),
    ("isolation-auto", "isolation"),
    ("box-border", "box-sizing"),
    ("box-content", "box-sizing"),
    ("sr-only", "sr"),
    ("not-sr-only", "sr"),
    ("antialiased", "font-smoothing"),
    ("subpixel-antialiased", "font-smoothing"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("truncate", "text-overflow"),
    ("container", "container"),
];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

// Checked in order; a side-specific prefix must come before a general prefix
// whose value check would also accept the side letter.
const RULES: &[Rule] = &[
    // Layout
    rule("aspect", Value::Any, "aspect"),
    rule("columns", Value::Any, "columns"),
    rule("break-after", Value::Any, "break-after"),
    rule("break-before", Value::Any, "break-before"),
    rule("break-inside", Value::Any, "break-inside"),
    rule("box-decoration", Value::Any, "box-decoration"),
    rule("float", Value::Any, "float"),
    rule("clear", Value::Any, "clear"),
    rule("object", Value::Keywords(&["contain", "cover", "fill", "none", "scale-down"]), "object-fit"),
    rule("object", Value::Any, "object-position"),
    rule("overflow-x", Value::Any, "overflow-x"),
    rule("overflow-y", Value::Any, "overflow-y"),
    rule("overflow", Value::Any, "overflow"),
    rule("overscroll-x", Value::Any, "overscroll-x"),
    rule("overscroll-y", Value::Any, "overscroll-y"),
    rule("overscroll", Value::Any, "overscroll"),
    rule("inset-x", Value::Sizing, "inset-x"),
    rule("inset-y", Value::Sizing, "inset-y"),
    rule("inset", Value::Sizing, "inset"),
    rule("start", Value::Sizing, "start"),
    rule("end", Value::Sizing, "end"),
    rule("top", Value::Sizing, "top"),
    rule("right", Value::Sizing, "right"),
    rule("bottom", Value::Sizing, "bottom"),
    rule("left", Value::Sizing, "left"),
    rule("z", Value::Any, "z"),
    // Flexbox and grid
    rule("basis", Value::Any, "basis"),
    rule("flex", Value::Keywords(&["row", "row-reverse", "col", "col-reverse"]), "flex-direction"),
    rule("flex", Value::Keywords(&["wrap", "wrap-reverse", "nowrap"]), "flex-wrap"),
    rule("flex", Value::Any, "flex"),
    rule("grow", Value::BareOrAny, "grow"),
    rule("shrink", Value::BareOrAny, "shrink"),
    rule("order", Value::Any, "order"),
    rule("grid-cols", Value::Any, "grid-cols"),
    rule("grid-rows", Value::Any, "grid-rows"),
    rule("grid-flow", Value::Any, "grid-flow"),
    rule("col-start", Value::Any, "col-start"),
    rule("col-end", Value::Any, "col-end"),
    rule("col", Value::Any, "col-start-end"),
    rule("row-start", Value::Any, "row-start"),
    rule("row-end", Value::Any, "row-end"),
    rule("row", Value::Any, "row-start-end"),
    rule("auto-cols", Value::Any, "auto-cols"),
    rule("auto-rows", Value::Any, "auto-rows"),
    rule("gap-x", Value::Spacing, "gap-x"),
    rule("gap-y", Value::Spacing, "gap-y"),
    rule("gap", Value::Spacing, "gap"),
    rule("justify-items", Value::Any, "justify-items"),
    rule("justify-self", Value::Any, "justify-self"),
    rule("justify", Value::Any, "justify-content"),
    rule(
        "content",
        Value::Keywords(&[
            "normal", "center", "start", "end", "between", "around", "evenly", "baseline", "stretch",
        ]),
        "align-content",
    ),
    rule("content", Value::Any, "content"),
    rule("items", Value::Any, "align-items"),
    rule("self", Value::Any, "align-self"),
    rule("place-content", Value::Any, "place-content"),
    rule("place-items", Value::Any, "place-items"),
    rule("place-self", Value::Any, "place-self"),
    // Spacing
    rule("p", Value::Spacing, "p"),
    rule("px", Value::Spacing, "px"),
    rule("py", Value::Spacing, "py"),
    rule("ps", Value::Spacing, "ps"),
    rule("pe", Value::Spacing, "pe"),
    rule("pt", Value::Spacing, "pt"),
    rule("pr", Value::Spacing, "pr"),
    rule("pb", Value::Spacing, "pb"),
    rule("pl", Value::Spacing, "pl"),
    rule("m", Value::Spacing, "m"),
    rule("mx", Value::Spacing, "mx"),
    rule("my", Value::Spacing, "my"),
    rule("ms", Value::Spacing, "ms"),
    rule("me", Value::Spacing, "me"),
    rule("mt", Value::Spacing, "mt"),
    rule("mr", Value::Spacing, "mr"),
    rule("mb", Value::Spacing, "mb"),
    rule("ml", Value::Spacing, "ml"),
    rule("space-x", Value::Keywords(&["reverse"]), "space-x-reverse"),
    rule("space-x", Value::Any, "space-x"),
    rule("space-y", Value::Keywords(&["reverse"]), "space-y-reverse"),
    rule("space-y", Value::Any, "space-y"),
    // Sizing
    rule("size", Value::Sizing, "size"),
    rule("w", Value::Sizing, "w"),
    rule("min-w", Value::Sizing, "min-w"),
    rule("max-w", Value::Sizing, "max-w"),
    rule("h", Value::Sizing, "h"),
    rule("min-h", Value::Sizing, "min-h"),
    rule("max-h", Value::Sizing, "max-h"),
    // Typography
    rule("text", Value::FontSize, "font-size"),
    rule("text", Value::Keywords(&["left", "center", "right", "justify", "start", "end"]), "text-alignment"),
    rule("text", Value::Keywords(&["ellipsis", "clip"]), "text-overflow"),
    rule("text", Value::Keywords(&["wrap", "nowrap", "balance", "pretty"]), "text-wrap"),
    rule("text", Value::Any, "text-color"),
    rule(
        "font",
        Value::Keywords(&[
            "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
        ]),
        "font-weight",
    ),
    rule("font", Value::Any, "font-family"),
    rule("tracking", Value::Any, "tracking"),
    rule("leading", Value::Any, "leading"),
    rule("line-clamp", Value::Any, "line-clamp"),
    rule("list-image", Value::Any, "list-image"),
    rule("list", Value::Keywords(&["inside", "outside"]), "list-style-position"),
    rule("list", Value::Any, "list-style-type"),
    rule("decoration", Value::Keywords(&["solid", "dashed", "dotted", "double", "wavy"]), "decoration-style"),
    rule("decoration", Value::Keywords(&["auto", "from-font"]), "decoration-thickness"),
    rule("decoration", Value::Length, "decoration-thickness"),
    rule("decoration", Value::Any, "decoration-color"),
    rule("underline-offset", Value::Any, "underline-offset"),
    rule("indent", Value::Spacing, "indent"),
    rule("align", Value::Any, "vertical-align"),
    rule("whitespace", Value::Any, "whitespace"),
    rule("break", Value::Keywords(&["normal", "words", "all", "keep"]), "break"),
    rule("hyphens", Value::Any, "hyphens"),
    // Backgrounds
    rule("bg-clip", Value::Any, "bg-clip"),
    rule("bg-origin", Value::Any, "bg-origin"),
    rule("bg-blend", Value::Any, "bg-blend"),
    rule("bg-gradient", Value::Any, "bg-image"),
    rule("bg", Value::Keywords(&["fixed", "local", "scroll"]), "bg-attachment"),
    rule(
        "bg",
        Value::Keywords(&[
            "bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top", "top",
        ]),
        "bg-position",
    ),
    rule(
        "bg",
        Value::Keywords(&["repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"]),
        "bg-repeat",
    ),
    rule("bg", Value::Keywords(&["auto", "cover", "contain"]), "bg-size"),
    rule("bg", Value::Keywords(&["none"]), "bg-image"),
    rule("bg", Value::Any, "bg-color"),
    rule("from", Value::Any, "gradient-from"),
    rule("via", Value::Any, "gradient-via"),
    rule("to", Value::Any, "gradient-to"),
    // Borders
    rule("rounded-ss", Value::Scale, "rounded-ss"),
    rule("rounded-se", Value::Scale, "rounded-se"),
    rule("rounded-ee", Value::Scale, "rounded-ee"),
    rule("rounded-es", Value::Scale, "rounded-es"),
    rule("rounded-tl", Value::Scale, "rounded-tl"),
    rule("rounded-tr", Value::Scale, "rounded-tr"),
    rule("rounded-br", Value::Scale, "rounded-br"),
    rule("rounded-bl", Value::Scale, "rounded-bl"),
    rule("rounded-s", Value::Scale, "rounded-s"),
    rule("rounded-e", Value::Scale, "rounded-e"),
    rule("rounded-t", Value::Scale, "rounded-t"),
    rule("rounded-r", Value::Scale, "rounded-r"),
    rule("rounded-b", Value::Scale, "rounded-b"),
    rule("rounded-l", Value::Scale, "rounded-l"),
    rule("rounded", Value::Scale, "rounded"),
    rule("border-x", Value::Length, "border-w-x"),
    rule("border-y", Value::Length, "border-w-y"),
    rule("border-s", Value::Length, "border-w-s"),
    rule("border-e", Value::Length, "border-w-e"),
    rule("border-t", Value::Length, "border-w-t"),
    rule("border-r", Value::Length, "border-w-r"),
    rule("border-b", Value::Length, "border-w-b"),
    rule("border-l", Value::Length, "border-w-l"),
    rule("border-x", Value::Any, "border-color-x"),
    rule("border-y", Value::Any, "border-color-y"),
    rule("border-s", Value::Any, "border-color-s"),
    rule("border-e", Value::Any, "border-color-e"),
    rule("border-t", Value::Any, "border-color-t"),
    rule("border-r", Value::Any, "border-color-r"),
    rule("border-b", Value::Any, "border-color-b"),
    rule("border-l", Value::Any, "border-color-l"),
    rule("border", Value::Keywords(BORDER_STYLES), "border-style"),
    rule("border", Value::Keywords(&["collapse", "separate"]), "border-collapse"),
    rule("border", Value::Length, "border-w"),
    rule("border", Value::Any, "border-color"),
    rule("divide-x", Value::Keywords(&["reverse"]), "divide-x-reverse"),
    rule("divide-x", Value::Length, "divide-x"),
    rule("divide-y", Value::Keywords(&["reverse"]), "divide-y-reverse"),
    rule("divide-y", Value::Length, "divide-y"),
    rule("divide", Value::Keywords(BORDER_STYLES), "divide-style"),
    rule("divide", Value::Any, "divide-color"),
    rule("outline-offset", Value::Any, "outline-offset"),
    rule("outline", Value::Keywords(&["", "none", "dashed", "dotted", "double"]), "outline-style"),
    rule("outline", Value::Length, "outline-w"),
    rule("outline", Value::Any, "outline-color"),
    rule("ring-offset", Value::Length, "ring-offset-w"),
    rule("ring-offset", Value::Any, "ring-offset-color"),
    rule("ring", Value::Keywords(&["inset"]), "ring-inset"),
    rule("ring", Value::Length, "ring-w"),
    rule("ring", Value::Any, "ring-color"),
    // Effects and filters
    rule("shadow", Value::Scale, "shadow"),
    rule("shadow", Value::Any, "shadow-color"),
    rule("opacity", Value::Any, "opacity"),
    rule("mix-blend", Value::Any, "mix-blend"),
    rule("blur", Value::Scale, "blur"),
    rule("brightness", Value::Any, "brightness"),
    rule("contrast", Value::Any, "contrast"),
    rule("drop-shadow", Value::Scale, "drop-shadow"),
    rule("grayscale", Value::BareOrAny, "grayscale"),
    rule("invert", Value::BareOrAny, "invert"),
    rule("saturate", Value::Any, "saturate"),
    rule("sepia", Value::BareOrAny, "sepia"),
    rule("backdrop-blur", Value::Scale, "backdrop-blur"),
    // Transitions and transforms
    rule("transition", Value::BareOrAny, "transition"),
    rule("duration", Value::Any, "duration"),
    rule("ease", Value::Any, "ease"),
    rule("delay", Value::Any, "delay"),
    rule("animate", Value::Any, "animate"),
    rule("scale-x", Value::Any, "scale-x"),
    rule("scale-y", Value::Any, "scale-y"),
    rule("scale", Value::Any, "scale"),
    rule("rotate", Value::Any, "rotate"),
    rule("translate-x", Value::Any, "translate-x"),
    rule("translate-y", Value::Any, "translate-y"),
    rule("skew-x", Value::Any, "skew-x"),
    rule("skew-y", Value::Any, "skew-y"),
    rule("origin", Value::Any, "transform-origin"),
    // Interactivity
    rule("accent", Value::Any, "accent"),
    rule("appearance", Value::Any, "appearance"),
    rule("cursor", Value::Any, "cursor"),
    rule("caret", Value::Any, "caret-color"),
    rule("pointer-events", Value::Any, "pointer-events"),
    rule("resize", Value::BareOrAny, "resize"),
    rule("scroll", Value::Keywords(&["auto", "smooth"]), "scroll-behavior"),
    rule("select", Value::Any, "select"),
    rule("touch", Value::Any, "touch"),
    rule("will-change", Value::Any, "will-change"),
    // Tables and SVG
    rule("table", Value::Keywords(&["auto", "fixed"]), "table-layout"),
    rule("fill", Value::Any, "fill"),
    rule("stroke", Value::Length, "stroke-w"),
    rule("stroke", Value::Any, "stroke"),
];

/// The group `class` belongs to, or `None` for classes this table does not know.
///
/// `class` has already lost its variants, important marker and leading `-`.
pub(super) fn class_group(class: &str) -> Option<Cow<'static, str>> {
    if let Some(property) = arbitrary_property(class) {
        return Some(Cow::Owned(format!("arbitrary..{property}")));
    }

    if let Some((_, group)) = EXACT.iter().find(|(name, _)| *name == class) {
        return Some(Cow::Borrowed(*group));
    }

    RULES
        .iter()
        .find(|rule| rule_value(class, rule.prefix).is_some_and(|value| rule.value.accepts(value)))
        .map(|rule| Cow::Borrowed(rule.group))
}

/// Groups a class of `group` also overrides.
pub(super) fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "overflow" => &["overflow-x", "overflow-y"],
        "overscroll" => &["overscroll-x", "overscroll-y"],
        "inset" => &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "flex" => &["basis", "grow", "shrink"],
        "gap" => &["gap-x", "gap-y"],
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "font-size" => &["leading"],
        "line-clamp" => &["display", "overflow"],
        "rounded" => &[
            "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-ss",
            "rounded-se", "rounded-ee", "rounded-es", "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-s", "border-w-e", "border-w-t", "border-w-r", "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x", "border-color-y", "border-color-s", "border-color-e", "border-color-t",
            "border-color-r", "border-color-b", "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        "scale" => &["scale-x", "scale-y"],
        _ => &[],
    }
}

// `prefix` alone gives "", `prefix-value` gives "value"
fn rule_value<'a>(class: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = class.strip_prefix(prefix)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix('-')
}

// `[mask-type:luminance]` sets `mask-type`
fn arbitrary_property(class: &str) -> Option<&str> {
    let inner = class.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    let valid = !property.is_empty()
        && !value.is_empty()
        && property.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');
    valid.then_some(property)
}

fn is_arbitrary(value: &str) -> bool {
    value.len() > 2 && value.starts_with('[') && value.ends_with(']')
}

fn is_arbitrary_length(value: &str) -> bool {
    if !is_arbitrary(value) {
        return false;
    }
    let inner = &value[1..value.len() - 1];
    if let Some(hinted) = inner.strip_prefix("length:") {
        return !hinted.is_empty();
    }
    if ["calc(", "min(", "max(", "clamp("].iter().any(|f| inner.starts_with(f)) {
        return true;
    }
    // A number followed by a unit, e.g. 3px, 1.5rem, 0
    let digits_end = inner
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(inner.len());
    let (number, unit) = inner.split_at(digits_end);
    is_number(number) && unit.bytes().all(|b| b.is_ascii_alphabetic() || b == b'%')
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite) && !value.starts_with('+')
}

// 1/2, 3/4, ...
fn is_fraction(value: &str) -> bool {
    value
        .split_once('/')
        .is_some_and(|(num, den)| is_number(num) && is_number(den))
}

fn is_spacing(value: &str) -> bool {
    is_number(value) || is_fraction(value) || matches!(value, "px" | "auto" | "full") || is_arbitrary(value)
}

// sm, md, lg, xl, 2xl .. 9xl, 2xs, xs
fn is_tshirt(value: &str) -> bool {
    if matches!(value, "xs" | "sm" | "md" | "lg" | "xl") {
        return true;
    }
    let size = value.strip_suffix("xl").or_else(|| value.strip_suffix("xs"));
    size.is_some_and(|n| n.len() == 1 && n.bytes().all(|b| (b'2'..=b'9').contains(&b)))
}
