//! Line charts of historical and predicted sales.

use salecast_core::{Dataset, PredictionBatch, YearMonth};
use serde_json::{Value, json};

const TEMPLATE: &str = "plotly_white";
const HISTORY_COLOR: &str = "blue";
const FORECAST_COLOR: &str = "green";

/// One line+markers trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// A single-series chart, convertible to a Plotly figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series: Series,
}

impl Chart {
    /// The Plotly figure: `{"data": [...], "layout": {...}}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "data": [{
                "type": "scatter",
                "mode": "lines+markers",
                "name": self.series.name,
                "x": self.series.x,
                "y": self.series.y,
                "line": { "color": self.series.color },
            }],
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": self.x_title } },
                "yaxis": { "title": { "text": self.y_title } },
                "template": TEMPLATE,
            },
        })
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// A `<div>` plus inline script that draws the figure with `Plotly.newPlot`.
    ///
    /// Not a full page: the host page must load `plotly.js`.
    #[must_use]
    pub fn to_html_fragment(&self) -> String {
        let id = element_id(&self.title);
        let figure = self.to_value();
        let data = script_safe(&figure["data"]);
        let layout = script_safe(&figure["layout"]);
        format!(
            "<div id=\"{id}\" class=\"salecast-chart\"></div>\n\
             <script type=\"text/javascript\">\
             Plotly.newPlot(\"{id}\", {data}, {layout});\
             </script>"
        )
    }
}

/// Historical sales by month, sorted by date. x values are `YYYY-MM-01`.
#[must_use]
pub fn render_history(dataset: &Dataset) -> Chart {
    let sorted = dataset.sorted_by_date();
    Chart {
        title: "Historical Sales Data".to_string(),
        x_title: "Date".to_string(),
        y_title: "Sales ($)".to_string(),
        series: Series {
            name: "Historical Sales".to_string(),
            color: HISTORY_COLOR.to_string(),
            x: sorted.iter().map(|r| month_start(r.period())).collect(),
            y: sorted.iter().map(|r| r.sales).collect(),
        },
    }
}

/// Predicted sales by month. x values are `YYYY-MM`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn render_forecast(batch: &PredictionBatch) -> Chart {
    Chart {
        title: "Predicted Sales Data".to_string(),
        x_title: "Year-Month".to_string(),
        y_title: "Sales ($)".to_string(),
        series: Series {
            name: "Predicted Sales".to_string(),
            color: FORECAST_COLOR.to_string(),
            x: batch.iter().map(|p| p.period().to_string()).collect(),
            y: batch.iter().map(|p| p.sales as f64).collect(),
        },
    }
}

fn month_start(period: YearMonth) -> String {
    period.first_day().map_or_else(
        || format!("{period}-01"),
        |date| date.format("%Y-%m-%d").to_string(),
    )
}

fn element_id(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("chart-{}", slug.trim_matches('-'))
}

// `</script>` inside a string literal would end the script element early.
fn script_safe(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
