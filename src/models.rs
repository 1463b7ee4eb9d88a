use serde::{Deserialize, Serialize};

/// One named line: ordered x values and their y values.
///
/// `x` and `y` are expected to have the same length and `x` is expected to be
/// ascending. Neither is enforced here; the renderer rejects mismatched lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Build a series from (x, y) pairs.
    pub fn from_points<I>(name: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (x, y) = points.into_iter().unzip();
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Number of points, or `None` when x and y disagree.
    pub fn len(&self) -> Option<usize> {
        (self.x.len() == self.y.len()).then_some(self.x.len())
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }

    /// Iterate (x, y) pairs. Stops at the shorter side; validate first.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// A set of series sharing one coordinate system, axis labels and legend.
///
/// Series order is draw order and legend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_label: String,
    pub y_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
}

fn default_show_legend() -> bool {
    true
}

impl Chart {
    pub fn new(series: Vec<Series>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            series,
            x_label: x_label.into(),
            y_label: y_label.into(),
            title: None,
            show_legend: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let t = title.into();
        self.title = if t.trim().is_empty() { None } else { Some(t) };
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }
}
