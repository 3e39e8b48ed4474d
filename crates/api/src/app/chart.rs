//! Bar-chart rendering adapter.

use plotly::common::{TextPosition, Title};
use plotly::{Bar, Layout, Plot};

use staffboard_reporting::ChartSeries;

/// Render a series as an embeddable bar-chart fragment (a div + script, not
/// a full document).
///
/// Value labels sit outside (above) each bar; fixed visual policy, not a
/// per-call option.
pub fn bar_chart_html(series: &ChartSeries) -> String {
    let text: Vec<String> = series.values.iter().map(u64::to_string).collect();
    let trace = Bar::new(series.labels.clone(), series.values.clone())
        .text_array(text)
        .text_position(TextPosition::Outside);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(Layout::new().title(Title::with_text(series.title.clone())));

    plot.to_inline_html(Some("employee-chart"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ChartSeries {
        ChartSeries {
            title: "Employees per Department".to_string(),
            labels: vec!["Engineering".to_string(), "HR".to_string()],
            values: vec![3, 1],
        }
    }

    #[test]
    fn renders_an_embeddable_fragment_not_a_document() {
        let html = bar_chart_html(&series());

        assert!(html.contains("employee-chart"));
        assert!(!html.contains("<html"));
    }

    #[test]
    fn includes_title_labels_and_counts() {
        let html = bar_chart_html(&series());

        assert!(html.contains("Employees per Department"));
        assert!(html.contains("Engineering"));
        assert!(html.contains("HR"));
    }
}
