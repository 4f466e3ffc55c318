//! Validates timinggroup attribute tokens against the recognized set.

use super::CheckerRun;
use crate::chart::Item;
use crate::derived::ChartCache;
use aff_toolchain_diagnostics::{Diagnostic, codes, text};

pub(super) fn check(cache: &ChartCache, _run: &CheckerRun, issues: &mut Vec<Diagnostic>) {
    for (idx, item) in cache.chart().items.iter().enumerate() {
        let Item::TimingGroup(group) = item else {
            continue;
        };
        let Some(result) = cache.group_timing(idx) else {
            continue;
        };
        let unknown: Vec<&str> = result
            .attributes
            .iter()
            .map(String::as_str)
            .filter(|attr| !is_known_attribute(attr))
            .collect();
        if !unknown.is_empty() {
            let list = unknown
                .iter()
                .map(|attr| format!("\"{attr}\""))
                .collect::<Vec<_>>()
                .join(", ");
            issues.push(Diagnostic::warning(
                codes::UNKNOWN_GROUP_ATTRIBUTE,
                text!(
                    en: format!("Timinggroup event with attribute {list} is not known by us"),
                    zh: format!("Timinggroup 事件的属性 {list} 未知"),
                ),
                group.attribute.span,
            ));
        }
    }
}

/// `noinput`, `fadingholds`, or `angle[xy]<digits>`.
fn is_known_attribute(attr: &str) -> bool {
    if matches!(attr, "noinput" | "fadingholds") {
        return true;
    }
    let Some(rest) = attr.strip_prefix("angle") else {
        return false;
    };
    let Some(digits) = rest.strip_prefix('x').or_else(|| rest.strip_prefix('y')) else {
        return false;
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
