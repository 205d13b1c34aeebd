// Dashboard domain model
use super::variable::Variable;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Interval variable every generated panel refers to.
pub const INTERVAL_VARIABLE: &str = "$interval";

/// An in-memory dashboard, serialized to the shape `/api/dashboards/db` expects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dashboard {
    pub title: String,
    pub panels: Vec<Panel>,
    pub variables: Vec<Variable>,
}

impl Dashboard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            panels: Vec::new(),
            variables: Vec::new(),
        }
    }

    pub fn add_variable(&mut self, variable: impl Into<Variable>) -> &mut Self {
        self.variables.push(variable.into());
        self
    }

    pub fn add_panel(&mut self, panel: impl Into<Panel>) -> &mut Self {
        self.panels.push(panel.into());
        self
    }

    /// Appends a graph in the next free slot of the two-column grid.
    ///
    /// Panel ids start at 2 and grow by 2.
    pub fn add_graph(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        target: Target,
        datasource: impl Into<String>,
    ) -> &mut Self {
        let index = self.panels.len();
        let graph = Graph::new(
            ((index + 1) * 2) as u32,
            title,
            description,
            target,
            GridPos::two_columns(index),
            INTERVAL_VARIABLE,
            datasource,
        );
        self.add_panel(graph)
    }
}

impl Serialize for Dashboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Templating<'a> {
            list: &'a [Variable],
        }

        let mut state = serializer.serialize_struct("Dashboard", 5)?;
        state.serialize_field("id", &None::<i64>)?;
        state.serialize_field("uid", &None::<String>)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("panels", &self.panels)?;
        state.serialize_field(
            "templating",
            &Templating {
                list: &self.variables,
            },
        )?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Panel {
    Graph(Graph),
}

impl From<Graph> for Panel {
    fn from(graph: Graph) -> Self {
        Panel::Graph(graph)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    pub datasource: String,
    pub id: u32,
    pub title: String,
    pub description: String,
    pub targets: Vec<Target>,
    pub grid_pos: GridPos,
    pub interval: String,
}

impl Graph {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        target: Target,
        grid_pos: GridPos,
        interval: impl Into<String>,
        datasource: impl Into<String>,
    ) -> Self {
        Self {
            datasource: datasource.into(),
            id,
            title: title.into(),
            description: description.into(),
            targets: vec![target],
            grid_pos,
            interval: interval.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub expr: String,
    pub legend_format: String,
}

impl Target {
    pub fn new(expr: impl Into<String>, legend_format: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            legend_format: legend_format.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridPos {
    pub h: u32,
    pub w: u32,
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    pub const ROW_HEIGHT: u32 = 8;
    pub const COLUMN_WIDTH: u32 = 12;

    pub fn new(h: u32, w: u32, x: u32, y: u32) -> Self {
        Self { h, w, x, y }
    }

    /// Position of the zero-based `index`th panel in a two-column grid.
    pub fn two_columns(index: usize) -> Self {
        let column = (index % 2) as u32;
        let row = (index / 2) as u32;
        Self::new(
            Self::ROW_HEIGHT,
            Self::COLUMN_WIDTH,
            column * Self::COLUMN_WIDTH,
            row * Self::ROW_HEIGHT,
        )
    }
}
