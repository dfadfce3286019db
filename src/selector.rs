// src/selector.rs
//! Template identifier resolution: ordered rule table, first match wins

use tracing::debug;

use crate::templates::TemplateKind;

/// Exact-match aliases kept for CVs persisted before templates got slugs.
/// Checked before the substring rules.
const LEGACY_ALIASES: &[(&str, TemplateKind)] = &[
    ("template_1", TemplateKind::Modern),
    ("template_2", TemplateKind::Classic),
    ("template_3", TemplateKind::Creative),
    ("template_4", TemplateKind::Professional),
];

/// Substring-containment rules, evaluated in order against the lowercased
/// identifier. Ordering is load-bearing: identifiers may contain several
/// tokens, and the more specific rule must sit above the general one
/// ("executive-premium" above "executive").
const RULES: &[(&str, TemplateKind)] = &[
    ("executive-premium", TemplateKind::ExecutivePremium),
    ("executive", TemplateKind::Executive),
    ("ats", TemplateKind::AtsFocused),
    ("academic", TemplateKind::Academic),
    ("timeline", TemplateKind::Timeline),
    ("tech", TemplateKind::Tech),
    ("compact", TemplateKind::Compact),
    ("minimal", TemplateKind::Minimal),
    ("classic", TemplateKind::Classic),
    ("creative", TemplateKind::Creative),
    ("professional", TemplateKind::Professional),
    ("modern", TemplateKind::Modern),
];

/// Resolve a free-form template identifier to a concrete variant.
///
/// The identifier is untrusted: legacy ids, slugs, or arbitrary text all
/// resolve to exactly one variant. An identifier matching no rule is not an
/// error, it selects the default.
pub fn select(template_id: &str) -> TemplateKind {
    let normalized = template_id.to_lowercase();

    for (alias, kind) in LEGACY_ALIASES {
        if normalized == *alias {
            return *kind;
        }
    }

    for (token, kind) in RULES {
        if normalized.contains(token) {
            return *kind;
        }
    }

    debug!(template_id, "no template rule matched, using default");
    TemplateKind::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_deterministic() {
        for id in ["modern", "executive-premium-dark", "", "xyz123"] {
            assert_eq!(select(id), select(id));
        }
    }

    #[test]
    fn test_unmatched_identifiers_fall_back_to_modern() {
        assert_eq!(select(""), TemplateKind::Modern);
        assert_eq!(select("xyz123"), TemplateKind::Modern);
        assert_eq!(select("null"), TemplateKind::Modern);
        assert_eq!(select("template_99"), TemplateKind::Modern);
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(select("template_1"), TemplateKind::Modern);
        assert_eq!(select("template_2"), TemplateKind::Classic);
        assert_eq!(select("template_3"), TemplateKind::Creative);
        assert_eq!(select("template_4"), TemplateKind::Professional);
    }

    #[test]
    fn test_legacy_aliases_are_exact_not_substring() {
        // "template_1x" is not the legacy id; it carries no rule token either
        assert_eq!(select("template_1x"), TemplateKind::Modern);
        assert_eq!(select("template_2-classic"), TemplateKind::Classic);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(select("MODERN"), TemplateKind::Modern);
        assert_eq!(select("Executive-Premium"), TemplateKind::ExecutivePremium);
        assert_eq!(select("TEMPLATE_3"), TemplateKind::Creative);
    }

    #[test]
    fn test_specific_rule_wins_over_general() {
        // contains both "executive-premium" and "executive"
        assert_eq!(
            select("executive-premium-dark"),
            TemplateKind::ExecutivePremium
        );
        assert_eq!(select("executive"), TemplateKind::Executive);
        assert_eq!(select("my-executive-cv"), TemplateKind::Executive);
    }

    #[test]
    fn test_slug_variants_resolve_by_containment() {
        assert_eq!(select("ats-focused"), TemplateKind::AtsFocused);
        assert_eq!(select("modern-dark"), TemplateKind::Modern);
        assert_eq!(select("academic-2024"), TemplateKind::Academic);
        assert_eq!(select("timeline"), TemplateKind::Timeline);
        assert_eq!(select("tech"), TemplateKind::Tech);
        assert_eq!(select("compact"), TemplateKind::Compact);
        assert_eq!(select("minimal"), TemplateKind::Minimal);
    }

    #[test]
    fn test_every_rule_token_resolves_to_its_own_kind() {
        // Ordering regression guard: a token reaching its rule must not be
        // shadowed by an earlier, more general rule.
        for (token, kind) in RULES {
            assert_eq!(select(token), *kind, "token {token:?} was shadowed");
        }
    }

    #[test]
    fn test_every_catalogue_id_round_trips() {
        for kind in TemplateKind::ALL {
            assert_eq!(select(kind.id()), *kind, "id {:?} mis-resolved", kind.id());
        }
    }
}
