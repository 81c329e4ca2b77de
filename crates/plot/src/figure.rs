/// A titled set of panels stacked top to bottom.
///
/// Panels of a figure with a linked x-axis pan and zoom together.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: Option<String>,
    panels: Vec<Panel>,
    link_x: bool,
}

impl Figure {
    pub(crate) fn new(title: Option<String>, panels: Vec<Panel>, link_x: bool) -> Self {
        Self {
            title,
            panels,
            link_x,
        }
    }

    /// Returns the figure title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the panels from top to bottom.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Returns true if the panels share their x-axis.
    #[must_use]
    pub fn is_x_linked(&self) -> bool {
        self.link_x
    }
}

/// One set of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    x_label: String,
    y_label: String,
    series: Vec<Series>,
}

impl Panel {
    pub(crate) fn new(x_label: String, y_label: String, series: Vec<Series>) -> Self {
        Self {
            x_label,
            y_label,
            series,
        }
    }

    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }
}

/// A named sequence of `[x, y]` points drawn in one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    points: Vec<[f64; 2]>,
    style: Style,
}

impl Series {
    /// Pairs `x` with `y` element by element.
    ///
    /// Callers check that the lengths match.
    pub(crate) fn new(name: impl Into<String>, x: &[f64], y: &[f64], style: Style) -> Self {
        Self {
            name: name.into(),
            points: x.iter().zip(y).map(|(&x, &y)| [x, y]).collect(),
            style,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub line: LineKind,
    pub marker: Option<Marker>,
}

/// Line pattern connecting consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Solid,
    Dashed,
}

/// Marker drawn at each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
}
