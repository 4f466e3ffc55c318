//! Per-item-kind field and range validation.

use super::CheckerRun;
use crate::chart::{ArcEvent, Item, Sp};
use crate::derived::ChartCache;
use aff_toolchain_diagnostics::{Diagnostic, codes, text};

pub(super) fn check(cache: &ChartCache, _run: &CheckerRun, issues: &mut Vec<Diagnostic>) {
    for item in &cache.chart().items {
        check_item(item, issues);
    }
}

fn check_item(item: &Item, issues: &mut Vec<Diagnostic>) {
    match item {
        Item::Timing(event) => {
            check_timestamp(&event.time, issues);
            if event.bpm.value != 0.0 && event.segment.value == 0.0 {
                issues.push(Diagnostic::error(
                    codes::TIMING_SEGMENT_ZERO,
                    text!(
                        en: "Timing event with non-zero bpm should not have zero beats per segment",
                        zh: "Timing 的 BPM 不为 0 时，拍号不应为 0",
                    ),
                    event.segment.span,
                ));
            }
            if event.bpm.value == 0.0 && event.segment.value != 0.0 {
                issues.push(Diagnostic::info(
                    codes::TIMING_BPM_ZERO_SEGMENT,
                    text!(
                        en: "Timing event with zero bpm should have zero beats per segment",
                        zh: "Timing 的 BPM 为 0 时，拍号应为 0",
                    ),
                    event.segment.span,
                ));
            }
        }
        Item::Tap(event) => check_timestamp(&event.time, issues),
        Item::Hold(event) => {
            check_timestamp(&event.start, issues);
            check_timestamp(&event.end, issues);
            if event.start.value >= event.end.value {
                issues.push(Diagnostic::error(
                    codes::HOLD_NOT_POSITIVE,
                    text!(
                        en: "Hold event should have a positive time length",
                        zh: "Hold 的起始时间应小于结束时间",
                    ),
                    event.span,
                ));
            }
        }
        Item::Arc(event) => check_arc(event, issues),
        Item::Camera(event) => {
            check_timestamp(&event.time, issues);
            if event.duration.value < 0 {
                issues.push(Diagnostic::error(
                    codes::CAMERA_NEGATIVE_DURATION,
                    text!(
                        en: "Camera event should have a non-negative duration",
                        zh: "Camera 的持续时间应为非负数",
                    ),
                    event.duration.span,
                ));
            }
        }
        Item::SceneControl(event) => {
            check_timestamp(&event.time, issues);
            let kind = event.scene_kind.value.as_str();
            if matches!(kind, "enwidencamera" | "enwidenlanes" | "trackdisplay") {
                // Only judge the duration once the value list is well-typed;
                // the scenecontrol checker already reports the shape.
                let values = &event.values.value;
                if values.len() == 2
                    && let Some(duration) = values[0].value.as_float()
                    && values[1].value.as_int().is_some()
                    && duration <= 0.0
                {
                    issues.push(Diagnostic::error(
                        codes::SCENECONTROL_NONPOSITIVE_DURATION,
                        text!(
                            en: format!(
                                "The scenecontrol item with kind \"{kind}\" should have \
                                 a positive duration"
                            ),
                            zh: format!("类型为 \"{kind}\" 的 scenecontrol 持续时间应为正数"),
                        ),
                        values[0].span,
                    ));
                }
            }
        }
        Item::TimingGroup(group) => {
            for nested in &group.items {
                check_item(nested, issues);
            }
        }
    }
}

fn check_arc(event: &ArcEvent, issues: &mut Vec<Diagnostic>) {
    check_timestamp(&event.start, issues);
    check_timestamp(&event.end, issues);

    if event.start.value > event.end.value {
        issues.push(Diagnostic::error(
            codes::ARC_NEGATIVE_LENGTH,
            text!(
                en: "Arc event should have a non-negative time length",
                zh: "Arc 的起始时间应小于或等于结束时间",
            ),
            event.span,
        ));
    }

    if event.start.value == event.end.value {
        if event.x_start.value == event.x_end.value && event.y_start.value == event.y_end.value {
            issues.push(Diagnostic::error(
                codes::ZERO_ARC_SAME_POSITION,
                text!(
                    en: "Arc event with zero time length should have different start point \
                         and end point",
                    zh: "0ms 的 arc 起始点和结束点应不同",
                ),
                event.span,
            ));
        }
        if event.curve.value != "s" {
            issues.push(Diagnostic::info(
                codes::ZERO_ARC_CURVE,
                text!(
                    en: "Arc event with zero time length should be \"s\" type",
                    zh: "0ms 的 arc 类型应为 \"s\"",
                ),
                event.curve.span,
            ));
        }
        if let Some(arctaps) = &event.arctaps {
            issues.push(Diagnostic::error(
                codes::ZERO_ARC_WITH_ARCTAPS,
                text!(
                    en: "Arc event with zero time length should not have arctap events on it",
                    zh: "0ms 的 arc 不应有 Arctap",
                ),
                arctaps.span,
            ));
        }
    }

    let effect = event.effect.value.as_str();
    if effect != "none" && !effect.ends_with("_wav") {
        issues.push(Diagnostic::warning(
            codes::UNKNOWN_ARC_EFFECT,
            text!(
                en: format!("Arc event with effect \"{effect}\" is not known by us"),
                zh: format!("未知的 arc 效果 \"{effect}\""),
            ),
            event.effect.span,
        ));
    }

    let solid = !event.line_kind.value.is_line();
    if solid && event.arctaps.is_some() {
        issues.push(Diagnostic::warning(
            codes::SOLID_ARC_WITH_ARCTAPS,
            text!(
                en: "Arc event with arctap events on it will be treated as not solid \
                     even if it is declared solid",
                zh: "带有 arctap 的 arc 总被解释为音轨（黑线），即使声明其为音弧",
            ),
            event.line_kind.span,
        ));
    }
    if solid && event.arctaps.is_none() && event.color.value >= 4 {
        issues.push(Diagnostic::error(
            codes::SOLID_ARC_COLOR,
            text!(
                en: format!("Solid arc event should not use the color {}", event.color.value),
                zh: format!("音弧不应声明其颜色代号为 {}", event.color.value),
            ),
            event.color.span,
        ));
    }

    if let Some(smoothness) = &event.smoothness
        && smoothness.value < 1.0
    {
        issues.push(Diagnostic::warning(
            codes::ARC_SMOOTHNESS_IGNORED,
            text!(
                en: "Arc smoothness with value less than 1 will be ignored",
                zh: "Arc 的平滑度参数小于 1 无效，将被忽略",
            ),
            smoothness.span,
        ));
    }

    if let Some(arctaps) = &event.arctaps {
        for arctap in &arctaps.value {
            if arctap.time.value < event.start.value || arctap.time.value > event.end.value {
                issues.push(Diagnostic::error(
                    codes::ARCTAP_OUT_OF_PARENT,
                    text!(
                        en: "Arctap event should happen within the time range of its \
                             parent arc event",
                        zh: "Arctap 必须在其父 arc 的时间范围内",
                    ),
                    arctap.span,
                ));
            }
        }
    }
}

fn check_timestamp(timestamp: &Sp<i64>, issues: &mut Vec<Diagnostic>) {
    if timestamp.value < 0 {
        issues.push(Diagnostic::error(
            codes::NEGATIVE_TIMESTAMP,
            text!(
                en: "Timestamp should not be negative",
                zh: "时间戳不能为负数",
            ),
            timestamp.span,
        ));
    }
}
