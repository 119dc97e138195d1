use serde::Serialize;

use crate::export::Table;

/// Chart family the presentation collaborator should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    GroupedBar,
    Heatmap,
}

/// Display hint attached to each result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartSpec {
    pub fn bar(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }

    pub fn grouped_bar(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            kind: ChartKind::GroupedBar,
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }

    pub fn heatmap(title: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Heatmap,
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
        }
    }

}

/// Pure sink receiving each result table with its display hint.
///
/// Computation never talks to a widget; selection and display counts
/// arrive as explicit parameters and results leave through this trait.
pub trait Presenter {
    fn present(&mut self, table: &Table, chart: &ChartSpec);
}
