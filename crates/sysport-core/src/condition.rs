//! `//go:build` rewriting.
//!
//! The rewrite is a containment test over known tokens, not a boolean
//! expression parser: `linux || darwin`, `!linux` and `linux && arm64` all
//! "mention linux" and are treated alike. The conjunctive forms that occur in
//! the curated catalogs come out right; anything fancier is best effort.

use std::borrow::Cow;

use crate::lines::find_line_by_prefix;
use crate::tokens::TokenMap;
use crate::BUILD_DIRECTIVE;

/// Per-catalog knowledge about which constraint tokens matter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionRules {
    /// Tokens meaning "origin platform family"; any hit yields the target GOOS
    pub platform_tokens: Vec<String>,
    /// Qualifiers copied verbatim, in this order, when present
    pub qualifiers: Vec<String>,
}

impl ConditionRules {
    /// Rules for the standard library `syscall` catalog
    pub fn syscall(tokens: &TokenMap) -> Self {
        Self {
            platform_tokens: vec![tokens.origin_os.clone(), "unix".to_string()],
            qualifiers: ["!asan", "!msan", "!386", "!arm"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Rules for the `x/sys/unix` catalog
    pub fn unix(tokens: &TokenMap) -> Self {
        Self {
            platform_tokens: vec![tokens.origin_os.clone()],
            qualifiers: ["!race", "gc"].into_iter().map(String::from).collect(),
        }
    }

    /// Ordered tag list for an existing constraint expression.
    ///
    /// Never empty: with no recognised token the result is the bare target GOOS.
    pub fn target_tags(&self, expr: &str, tokens: &TokenMap) -> Vec<String> {
        let mut tags = Vec::new();

        if self.platform_tokens.iter().any(|t| expr.contains(t.as_str())) {
            tags.push(tokens.target_os.clone());
        }
        if expr.contains(tokens.origin_arch.as_str()) {
            tags.push(tokens.target_arch.clone());
        }
        for qualifier in &self.qualifiers {
            if expr.contains(qualifier.as_str()) {
                tags.push(qualifier.clone());
            }
        }

        if tags.is_empty() {
            tags.push(tokens.target_os.clone());
        }
        tags
    }
}

/// Build the replacement `//go:build` line for an existing one.
pub fn rewrite_directive(line: &str, rules: &ConditionRules, tokens: &TokenMap) -> String {
    let expr = line.strip_prefix(BUILD_DIRECTIVE).unwrap_or(line);
    let tags = rules.target_tags(expr, tokens);
    format!("{} {}", BUILD_DIRECTIVE, tags.join(" && "))
}

/// Replace the first `//go:build` line of `data`, once.
///
/// Content without a constraint line is handed back untouched.
pub fn rewrite_condition<'a>(
    data: &'a [u8],
    rules: &ConditionRules,
    tokens: &TokenMap,
) -> Cow<'a, [u8]> {
    let Some(found) = find_line_by_prefix(data, BUILD_DIRECTIVE) else {
        return Cow::Borrowed(data);
    };

    let directive = rewrite_directive(&found.text(), rules, tokens);
    tracing::debug!(
        component = "GEN",
        from = %found.text(),
        to = %directive,
        "rewrote build constraint"
    );

    let span = found.span();
    let mut out = Vec::with_capacity(data.len() - span.len() + directive.len());
    out.extend_from_slice(&data[..span.start]);
    out.extend_from_slice(directive.as_bytes());
    out.extend_from_slice(&data[span.end..]);
    Cow::Owned(out)
}
