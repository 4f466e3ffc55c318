//! Surfaces the timing-anchor diagnostics derived per scope.

use super::CheckerRun;
use crate::derived::ChartCache;
use aff_toolchain_diagnostics::Diagnostic;

pub(super) fn check(cache: &ChartCache, _run: &CheckerRun, issues: &mut Vec<Diagnostic>) {
    issues.extend(cache.root_timing().issues.iter().cloned());
    for idx in 0..cache.chart().items.len() {
        if let Some(result) = cache.group_timing(idx) {
            issues.extend(result.issues.iter().cloned());
        }
    }
}
