//! Validates scene-control parameter lists against their declared kind.

use super::CheckerRun;
use super::ctx;
use crate::chart::{Item, SceneControlEvent};
use crate::derived::ChartCache;
use aff_toolchain_diagnostics::{Diagnostic, codes, text};

pub(super) fn check(cache: &ChartCache, _run: &CheckerRun, issues: &mut Vec<Diagnostic>) {
    for item in &cache.chart().items {
        match item {
            Item::SceneControl(event) => check_event(event, issues),
            Item::TimingGroup(group) => {
                for nested in &group.items {
                    if let Item::SceneControl(event) = nested {
                        check_event(event, issues);
                    }
                }
            }
            _ => {}
        }
    }
}

fn check_event(event: &SceneControlEvent, issues: &mut Vec<Diagnostic>) {
    let kind = event.scene_kind.value.as_str();
    match kind {
        "trackshow" | "trackhide" => {
            check_value_count(event, 0, issues);
        }
        "redline" | "arcahvdistort" | "arcahvdebris" | "hidegroup" | "enwidencamera"
        | "enwidenlanes" | "trackdisplay" => {
            // A count mismatch leaves nothing meaningful to type-check.
            if check_value_count(event, 2, issues) {
                check_value_type(event, "length", "float", 0, issues);
                check_value_type(event, "value", "int", 1, issues);
            }
        }
        _ => issues.push(
            Diagnostic::warning(
                codes::SCENECONTROL_UNKNOWN_KIND,
                text!(
                    en: format!(
                        "Scenecontrol event with type \"{kind}\" is not known by us, \
                         so the type of additional values is not checked"
                    ),
                    zh: format!("未知的 scenecontrol 类型 \"{kind}\"，因此不检查额外参数类型"),
                ),
                event.scene_kind.span,
            )
            .with_context(ctx!("kind" => kind)),
        ),
    }
}

/// Check the additional-value count; `true` when it matches.
fn check_value_count(event: &SceneControlEvent, count: usize, issues: &mut Vec<Diagnostic>) -> bool {
    let actual = event.values.value.len();
    if actual != count {
        let kind = &event.scene_kind.value;
        issues.push(Diagnostic::error(
            codes::SCENECONTROL_VALUE_COUNT,
            text!(
                en: format!(
                    "Scenecontrol event with type \"{kind}\" should have {count} \
                     additional value(s) instead of {actual} additional value(s)"
                ),
                zh: format!(
                    "类型为 \"{kind}\" 的 scenecontrol 事件应当有 {count} 个额外参数，\
                     而实际上有 {actual} 个额外参数"
                ),
            ),
            event.values.span,
        ));
        return false;
    }
    true
}

/// Check the type of the value at `id`; positions are checked
/// independently of each other.
fn check_value_type(
    event: &SceneControlEvent,
    field: &str,
    expected: &str,
    id: usize,
    issues: &mut Vec<Diagnostic>,
) {
    let value = &event.values.value[id];
    let actual = value.value.kind_name();
    if actual != expected {
        let kind = &event.scene_kind.value;
        issues.push(Diagnostic::error(
            codes::SCENECONTROL_VALUE_TYPE,
            text!(
                en: format!(
                    "The value in the \"{field}\" field of scenecontrol event with type \
                     \"{kind}\" should be \"{expected}\" instead of \"{actual}\""
                ),
                zh: format!(
                    "类型为 \"{kind}\" 的 scenecontrol 事件的 \"{field}\" 字段应当为 \
                     \"{expected}\" 类型，而非 \"{actual}\" 类型"
                ),
            ),
            value.span,
        ));
    }
}
