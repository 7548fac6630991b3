//! Plotly chart types for simulation log charts
//!
//! Serialises to the `{data: [...], layout: {...}}` document Plotly.js
//! accepts. Only the attributes the histogram and throughput charts set are
//! modelled.

use serde::Serialize;

/// Chart document: traces plus layout
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyChart {
    pub data: Vec<PlotlyTrace>,
    pub layout: PlotlyLayout,
}

/// Trace geometry; serialised as Plotly's `type` attribute plus its
/// type-specific fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TraceKind {
    /// Bars centred on `x`, one width per bar so adjacent bins touch
    Bar { width: Vec<f64> },
    /// Time series drawn as lines with a marker per sample
    Scatter { mode: &'static str },
}

/// One data series
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(flatten)]
    pub kind: TraceKind,
    pub marker: PlotlyMarker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<PlotlyLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlotlyMarker {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Bar outline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<PlotlyLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLine {
    pub color: String,
    pub width: f64,
}

impl PlotlyTrace {
    /// Histogram bars at bin centres with outlined edges
    pub fn bar(centres: Vec<f64>, heights: Vec<f64>, widths: Vec<f64>, name: &str, colour: &str) -> Self {
        Self {
            x: centres,
            y: heights,
            name: name.to_string(),
            kind: TraceKind::Bar { width: widths },
            marker: PlotlyMarker {
                color: colour.to_string(),
                size: None,
                line: Some(PlotlyLine {
                    color: "black".to_string(),
                    width: 0.5,
                }),
            },
            line: None,
            hovertemplate: None,
        }
    }

    /// Thin line with a small marker at every retained sample
    pub fn line(x: Vec<f64>, y: Vec<f64>, name: &str, colour: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            kind: TraceKind::Scatter {
                mode: "lines+markers",
            },
            marker: PlotlyMarker {
                color: colour.to_string(),
                size: Some(2),
                line: None,
            },
            line: Some(PlotlyLine {
                color: colour.to_string(),
                width: 1.0,
            }),
            hovertemplate: None,
        }
    }

    pub fn with_hovertemplate(mut self, template: &str) -> Self {
        self.hovertemplate = Some(template.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLayout {
    pub title: PlotlyTitle,
    pub xaxis: PlotlyAxis,
    pub yaxis: PlotlyAxis,
    pub hovermode: &'static str,
    /// Zero for histograms so bins are drawn edge to edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<PlotlyLegend>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<PlotlyAnnotation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTitle {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlotlyAxis {
    pub title: String,
    /// d3 format string, e.g. ".0%" renders fractions as percentages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    pub showgrid: bool,
}

/// Vertical legend placed just outside the plot area on the right
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLegend {
    pub orientation: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
}

impl Default for PlotlyLegend {
    fn default() -> Self {
        Self {
            orientation: "v",
            x: 1.02,
            y: 1.0,
            xanchor: "left",
        }
    }
}

/// Text box in paper coordinates (0..1 across the plot area)
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyAnnotation {
    pub text: String,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub showarrow: bool,
    pub bgcolor: &'static str,
    pub bordercolor: &'static str,
    pub borderwidth: u32,
    pub font: PlotlyFont,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlotlyFont {
    pub family: &'static str,
    pub size: u32,
}

impl PlotlyAnnotation {
    /// Monospaced summary box pinned to the top-right corner
    pub fn summary_box(lines: &[String]) -> Self {
        Self {
            text: lines.join("<br>"),
            xref: "paper",
            yref: "paper",
            x: 0.98,
            y: 0.98,
            xanchor: "right",
            yanchor: "top",
            showarrow: false,
            bgcolor: "rgba(255, 255, 255, 0.8)",
            bordercolor: "gray",
            borderwidth: 1,
            font: PlotlyFont {
                family: "monospace",
                size: 10,
            },
        }
    }
}

impl PlotlyAxis {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            tickformat: None,
            range: None,
            showgrid: true,
        }
    }
}

impl PlotlyLayout {
    pub fn new(title: &str, x_title: &str, y_title: &str) -> Self {
        Self {
            title: PlotlyTitle {
                text: title.to_string(),
            },
            xaxis: PlotlyAxis::new(x_title),
            yaxis: PlotlyAxis::new(y_title),
            hovermode: "closest",
            bargap: None,
            legend: None,
            annotations: Vec::new(),
        }
    }
}

/// Palette for per-flow traces, cycled by request position
const FLOW_COLOURS: &[&str] = &[
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
    "#BCBD22", "#17BECF",
];

/// Colour of the n-th plotted flow
pub fn flow_colour(position: usize) -> &'static str {
    FLOW_COLOURS[position % FLOW_COLOURS.len()]
}
