//! Validates the chart's key/value metadata header.

use super::CheckerRun;
use super::ctx;
use crate::derived::ChartCache;
use aff_toolchain_diagnostics::{Diagnostic, codes, text};

pub(super) fn check(cache: &ChartCache, _run: &CheckerRun, issues: &mut Vec<Diagnostic>) {
    let metadata = &cache.chart().metadata;

    for entry in &metadata.entries {
        let key = entry.key.value.as_str();
        if !matches!(key, "AudioOffset" | "TimingPointDensityFactor") {
            issues.push(
                Diagnostic::warning(
                    codes::UNKNOWN_METADATA_KEY,
                    text!(
                        en: format!("The \"{key}\" metadata is not used and will be ignored"),
                        zh: format!("非标准的元数据 \"{key}\" 将被忽略"),
                    ),
                    entry.key.span,
                )
                .with_context(ctx!("key" => key)),
            );
        }
    }

    match metadata.get("AudioOffset") {
        None => issues.push(Diagnostic::warning(
            codes::AUDIO_OFFSET_MISSING,
            text!(
                en: "The \"AudioOffset\" metadata is missing, this chart will be processed \
                     with zero audio offset",
                zh: "缺失 AudioOffset 元数据，值被视为 0",
            ),
            metadata.end_span,
        )),
        Some(offset) => {
            if !is_int_literal(&offset.value.value) {
                issues.push(Diagnostic::error(
                    codes::AUDIO_OFFSET_NOT_INT,
                    text!(
                        en: "The value of \"AudioOffset\" metadata is not an int",
                        zh: "AudioOffset 值类型应为整数",
                    ),
                    offset.value.span,
                ));
            }
        }
    }

    if let Some(factor) = metadata.get("TimingPointDensityFactor") {
        match factor.value.value.parse::<f64>() {
            Err(_) => issues.push(Diagnostic::error(
                codes::DENSITY_FACTOR_NOT_FLOAT,
                text!(
                    en: "The value of \"TimingPointDensityFactor\" metadata is not a float",
                    zh: "TimingPointDensityFactor 值类型应为浮点数",
                ),
                factor.value.span,
            )),
            // Rust's float parser accepts "NaN"; treat it as not-a-float too.
            Ok(value) if value.is_nan() => issues.push(Diagnostic::error(
                codes::DENSITY_FACTOR_NOT_FLOAT,
                text!(
                    en: "The value of \"TimingPointDensityFactor\" metadata is not a float",
                    zh: "TimingPointDensityFactor 值类型应为浮点数",
                ),
                factor.value.span,
            )),
            Ok(value) if value <= 0.0 => issues.push(Diagnostic::error(
                codes::DENSITY_FACTOR_NOT_POSITIVE,
                text!(
                    en: "The value of \"TimingPointDensityFactor\" metadata is not positive",
                    zh: "TimingPointDensityFactor 值应为正数",
                ),
                factor.value.span,
            )),
            Ok(_) => {}
        }
    }
}

/// Integer-literal pattern: optional leading `-`, then `0` or a digit run
/// with no leading zero.
fn is_int_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

#[cfg(test)]
mod tests {
    use super::is_int_literal;

    #[test]
    fn int_literal_pattern() {
        assert!(is_int_literal("0"));
        assert!(is_int_literal("-120"));
        assert!(is_int_literal("248"));
        assert!(!is_int_literal(""));
        assert!(!is_int_literal("-"));
        assert!(!is_int_literal("007"));
        assert!(!is_int_literal("1.5"));
        assert!(!is_int_literal("+3"));
        assert!(!is_int_literal("12a"));
    }
}
