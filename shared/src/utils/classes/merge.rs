use std::borrow::Cow;
use std::collections::HashSet;

use super::groups::{class_group, conflicting_groups};

// A class token split into its parts, e.g. `md:hover:!-mt-2` or `bg-red-500/50`
#[derive(Debug, PartialEq, Eq)]
struct ParsedClass<'a> {
    modifiers: Vec<&'a str>,
    important: bool,
    // Without variants, `!` and leading `-`
    base: &'a str,
    // Byte offset of a top-level `/` in `base`, if any
    postfix_at: Option<usize>,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        let mut postfix_at = None;

        for (i, c) in token.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&token[start..i]);
                    start = i + 1;
                    postfix_at = None;
                }
                '/' if depth == 0 => postfix_at = Some(i - start),
                _ => {}
            }
        }

        let mut base = &token[start..];
        let mut important = false;
        // `!p-2` (v3) and `p-2!` (v4) mean the same thing
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
            postfix_at = postfix_at.map(|at| at - 1);
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }
        if let Some(rest) = base.strip_prefix('-') {
            base = rest;
            postfix_at = postfix_at.map(|at| at - 1);
        }

        Self { modifiers, important, base, postfix_at }
    }

    // Variants are order-insensitive, except that an arbitrary variant like
    // `[&>*]` pins the ones around it in place.
    fn modifier_key(&self) -> String {
        let mut sorted: Vec<&str> = Vec::with_capacity(self.modifiers.len());
        let mut run: Vec<&str> = Vec::new();
        for &modifier in &self.modifiers {
            if modifier.starts_with('[') {
                run.sort_unstable();
                sorted.append(&mut run);
                sorted.push(modifier);
            } else {
                run.push(modifier);
            }
        }
        run.sort_unstable();
        sorted.append(&mut run);

        let mut key = sorted.join(":");
        if self.important {
            key.push('!');
        }
        key
    }

    fn group(&self) -> Option<Cow<'static, str>> {
        // `bg-red-500/50` is classified as `bg-red-500`, `w-1/2` falls back to itself
        if let Some(at) = self.postfix_at {
            if let Some(group) = class_group(&self.base[..at]) {
                return Some(group);
            }
        }
        class_group(self.base)
    }
}

/// Joins whitespace-separated class tokens, dropping every token that a later
/// token overrides.
///
/// Tokens outside any known utility group only collide with identical tokens.
/// Surviving tokens keep their relative order.
pub fn merge_classes(class_list: &str) -> String {
    let mut claimed: HashSet<(String, Cow<'static, str>)> = HashSet::new();
    let mut seen_unknown: HashSet<&str> = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();

    // Last one wins, so walk backwards
    for token in class_list.split_whitespace().rev() {
        let parsed = ParsedClass::parse(token);

        let Some(group) = parsed.group() else {
            if seen_unknown.insert(token) {
                kept.push(token);
            }
            continue;
        };

        let key = parsed.modifier_key();
        if claimed.contains(&(key.clone(), group.clone())) {
            tracing::trace!("Dropping class '{}' overridden by a later '{}' class", token, group);
            continue;
        }

        for conflict in conflicting_groups(&group) {
            claimed.insert((key.clone(), Cow::Borrowed(*conflict)));
        }
        claimed.insert((key, group));
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_class() {
        let parsed = ParsedClass::parse("p-2");
        assert_eq!(parsed.base, "p-2");
        assert!(parsed.modifiers.is_empty());
        assert!(!parsed.important);
        assert_eq!(parsed.postfix_at, None);
    }

    #[test]
    fn test_parse_variants_important_and_negative() {
        let parsed = ParsedClass::parse("md:hover:!-mt-2");
        assert_eq!(parsed.modifiers, vec!["md", "hover"]);
        assert!(parsed.important);
        assert_eq!(parsed.base, "mt-2");
    }

    #[test]
    fn test_parse_postfix_and_arbitrary_values() {
        let parsed = ParsedClass::parse("hover:bg-red-500/50");
        assert_eq!(parsed.base, "bg-red-500/50");
        assert_eq!(parsed.postfix_at, Some(10));

        // `:` and `/` inside brackets are part of the value
        let parsed = ParsedClass::parse("bg-[url(/img/a:b.png)]");
        assert!(parsed.modifiers.is_empty());
        assert_eq!(parsed.postfix_at, None);
    }

    #[test]
    fn test_modifier_key_is_order_insensitive() {
        let a = ParsedClass::parse("hover:md:p-2");
        let b = ParsedClass::parse("md:hover:p-4");
        assert_eq!(a.modifier_key(), b.modifier_key());

        let c = ParsedClass::parse("[&>*]:hover:p-2");
        let d = ParsedClass::parse("hover:[&>*]:p-2");
        assert_ne!(c.modifier_key(), d.modifier_key());
    }

    #[test]
    fn test_merge_last_conflict_wins() {
        assert_eq!(merge_classes("p-2 p-4"), "p-4");
        assert_eq!(merge_classes("text-sm font-bold text-lg"), "font-bold text-lg");
        assert_eq!(merge_classes("bg-red-500 text-white bg-blue-600"), "text-white bg-blue-600");
    }

    #[test]
    fn test_merge_keeps_non_conflicting_order() {
        assert_eq!(
            merge_classes("flex items-center p-2 text-sm p-3"),
            "flex items-center text-sm p-3"
        );
    }

    #[test]
    fn test_merge_shorthand_overrides_sides() {
        assert_eq!(merge_classes("px-2 py-1 p-3"), "p-3");
        assert_eq!(merge_classes("mt-2 mx-4 m-0"), "m-0");
        assert_eq!(merge_classes("top-0 left-2 inset-0"), "inset-0");
        assert_eq!(merge_classes("rounded-tl-lg rounded-md"), "rounded-md");
    }

    #[test]
    fn test_merge_side_does_not_override_shorthand() {
        assert_eq!(merge_classes("p-3 px-2"), "p-3 px-2");
        assert_eq!(merge_classes("border-2 border-t-4"), "border-2 border-t-4");
    }

    #[test]
    fn test_merge_font_size_overrides_leading() {
        assert_eq!(merge_classes("leading-9 text-lg"), "text-lg");
        assert_eq!(merge_classes("text-lg leading-9"), "text-lg leading-9");
    }

    #[test]
    fn test_merge_distinguishes_text_groups() {
        assert_eq!(
            merge_classes("text-red-500 text-center text-lg"),
            "text-red-500 text-center text-lg"
        );
        assert_eq!(merge_classes("border border-input border-2"), "border-input border-2");
    }

    #[test]
    fn test_merge_respects_variants() {
        assert_eq!(merge_classes("p-2 hover:p-4"), "p-2 hover:p-4");
        assert_eq!(merge_classes("hover:p-2 hover:p-4"), "hover:p-4");
        assert_eq!(merge_classes("md:hover:p-2 hover:md:p-4"), "hover:md:p-4");
    }

    #[test]
    fn test_merge_important_is_separate() {
        assert_eq!(merge_classes("!p-2 p-4"), "!p-2 p-4");
        assert_eq!(merge_classes("!p-2 !p-4"), "!p-4");
        assert_eq!(merge_classes("p-2! !p-4"), "!p-4");
    }

    #[test]
    fn test_merge_negative_and_arbitrary_values() {
        assert_eq!(merge_classes("-m-2 m-4"), "m-4");
        assert_eq!(merge_classes("p-[3px] p-2"), "p-2");
        assert_eq!(merge_classes("text-[14px] text-[#fff] text-sm"), "text-[#fff] text-sm");
        assert_eq!(merge_classes("[mask-type:luminance] [mask-type:alpha]"), "[mask-type:alpha]");
    }

    #[test]
    fn test_merge_postfix_modifier() {
        assert_eq!(merge_classes("bg-red-500/50 bg-blue-500"), "bg-blue-500");
        assert_eq!(merge_classes("w-full w-1/2"), "w-1/2");
    }

    #[test]
    fn test_merge_unknown_classes() {
        assert_eq!(merge_classes("card card-body card"), "card-body card");
        assert_eq!(merge_classes("btn p-2 btn-primary"), "btn p-2 btn-primary");
    }

    #[test]
    fn test_merge_display_group() {
        assert_eq!(merge_classes("hidden md:flex flex"), "md:flex flex");
        assert_eq!(merge_classes("block inline-flex"), "inline-flex");
    }

    #[test]
    fn test_merge_whitespace() {
        assert_eq!(merge_classes("  p-2\n\tm-1  "), "p-2 m-1");
        assert_eq!(merge_classes(""), "");
    }
}
