use crate::core::Rect;
use crate::render::{TextHAlign, TextPrimitive};

use super::{GraphDataSource, GraphStyle, HorizontalGridLine, VerticalGridLine};

/// Gap between the plot edge and the nearest label edge.
const LABEL_GAP_PX: f64 = 4.0;

/// Formats one axis tick value.
///
/// Fixed precision prints exactly that many decimals. Adaptive formatting
/// prints as many decimals as the value carries, trimmed of trailing zeros.
pub(super) fn format_axis_value(value: f64, precision: Option<u8>) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    match precision {
        Some(precision) => {
            let precision = usize::from(precision);
            format!("{value:.precision$}")
        }
        None => trim_axis_decimal(format!("{value:.12}")),
    }
}

fn trim_axis_decimal(mut text: String) -> String {
    if let Some(index) = text.find('.') {
        let mut trim_start = text.len();
        for (idx, ch) in text.char_indices().rev() {
            if idx <= index {
                break;
            }
            if ch != '0' {
                break;
            }
            trim_start = idx;
        }
        if trim_start < text.len() {
            text.truncate(trim_start);
        }
        if text.ends_with('.') {
            text.pop();
        }
    }

    if text == "-0" { "0".to_owned() } else { text }
}

/// Builds Y-axis labels anchored to horizontal reference lines.
///
/// Labels sit right-aligned inside the left margin. A hook returning an
/// empty string hides that tick's label.
pub(super) fn y_axis_label_primitives(
    lines: &[HorizontalGridLine],
    plot_rect: Rect,
    style: &GraphStyle,
    data_source: &dyn GraphDataSource,
) -> Vec<TextPrimitive> {
    let mut labels = Vec::with_capacity(lines.len());
    for line in lines {
        let text = data_source
            .y_axis_label(line.y_value)
            .unwrap_or_else(|| format_axis_value(line.y_value, style.label_numeric_precision));
        if text.is_empty() {
            continue;
        }
        labels.push(TextPrimitive::new(
            text,
            plot_rect.origin_x - LABEL_GAP_PX,
            line.y_px,
            style.label_font_size_px,
            style.label_text_color,
            TextHAlign::Right,
        ));
    }
    labels
}

/// Builds X-axis labels anchored to vertical reference lines.
///
/// Labels sit centered under their tick, inside the bottom margin.
pub(super) fn x_axis_label_primitives(
    lines: &[VerticalGridLine],
    plot_rect: Rect,
    style: &GraphStyle,
    data_source: &dyn GraphDataSource,
) -> Vec<TextPrimitive> {
    let mut labels = Vec::with_capacity(lines.len());
    for line in lines {
        let text = data_source
            .x_axis_label(line.x_value)
            .unwrap_or_else(|| format_axis_value(line.x_value, style.label_numeric_precision));
        if text.is_empty() {
            continue;
        }
        labels.push(TextPrimitive::new(
            text,
            line.x_px,
            plot_rect.max_y() + LABEL_GAP_PX,
            style.label_font_size_px,
            style.label_text_color,
            TextHAlign::Center,
        ));
    }
    labels
}
