use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chart types a selection can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationType {
    HorizontalBarChart,
    VerticalBarChart,
    GroupHorizontalBarChart,
    GroupVerticalBarChart,
    StackedHorizontalBarChart,
    StackedVerticalBarChart,
    PercentHorizontalBarChart,
    PercentVerticalBarChart,
    PieChart,
    PyramidChart,
    LineChart,
    ScatterPlot,
    Table,
    KeyFigure,
}

impl VisualizationType {
    /// Every chart type, in evaluation and report order.
    pub const ALL: [Self; 14] = [
        Self::HorizontalBarChart,
        Self::VerticalBarChart,
        Self::GroupHorizontalBarChart,
        Self::GroupVerticalBarChart,
        Self::StackedHorizontalBarChart,
        Self::StackedVerticalBarChart,
        Self::PercentHorizontalBarChart,
        Self::PercentVerticalBarChart,
        Self::PieChart,
        Self::PyramidChart,
        Self::LineChart,
        Self::ScatterPlot,
        Self::Table,
        Self::KeyFigure,
    ];

    /// Configuration key and wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HorizontalBarChart => "horizontal_bar_chart",
            Self::VerticalBarChart => "vertical_bar_chart",
            Self::GroupHorizontalBarChart => "group_horizontal_bar_chart",
            Self::GroupVerticalBarChart => "group_vertical_bar_chart",
            Self::StackedHorizontalBarChart => "stacked_horizontal_bar_chart",
            Self::StackedVerticalBarChart => "stacked_vertical_bar_chart",
            Self::PercentHorizontalBarChart => "percent_horizontal_bar_chart",
            Self::PercentVerticalBarChart => "percent_vertical_bar_chart",
            Self::PieChart => "pie_chart",
            Self::PyramidChart => "pyramid_chart",
            Self::LineChart => "line_chart",
            Self::ScatterPlot => "scatter_plot",
            Self::Table => "table",
            Self::KeyFigure => "key_figure",
        }
    }

    /// Human readable name for text output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HorizontalBarChart => "Horizontal bar chart",
            Self::VerticalBarChart => "Vertical bar chart",
            Self::GroupHorizontalBarChart => "Grouped horizontal bar chart",
            Self::GroupVerticalBarChart => "Grouped vertical bar chart",
            Self::StackedHorizontalBarChart => "Stacked horizontal bar chart",
            Self::StackedVerticalBarChart => "Stacked vertical bar chart",
            Self::PercentHorizontalBarChart => "Percent horizontal bar chart",
            Self::PercentVerticalBarChart => "Percent vertical bar chart",
            Self::PieChart => "Pie chart",
            Self::PyramidChart => "Pyramid chart",
            Self::LineChart => "Line chart",
            Self::ScatterPlot => "Scatter plot",
            Self::Table => "Table",
            Self::KeyFigure => "Key figure",
        }
    }
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisualizationType {
    type Err = String;

    /// Accepts the snake_case key as well as the CamelCase type name
    /// (`line_chart`, `LineChart`, `line-chart`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|chart| chart.as_str().replace('_', "") == normalized)
            .ok_or_else(|| format!("Unknown visualization type: {s}"))
    }
}

#[cfg(test)]
#[path = "visualization_tests.rs"]
mod tests;
