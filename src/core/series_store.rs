use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Milliseconds in one day; the master drawable measures time in days.
pub const DAY_MILLIS: f64 = 86_400_000.0;

/// Role of a raw input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// The shared time axis.
    X,
    /// A value series drawn as a polyline.
    Line,
}

/// Columnar chart input as produced by data feeds.
///
/// Every column starts with its key followed by the samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub columns: Vec<Vec<Value>>,
    pub types: IndexMap<String, ColumnType>,
    #[serde(default)]
    pub names: IndexMap<String, String>,
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

impl ChartInput {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::MalformedInput(format!("failed to parse chart input: {e}")))
    }
}

/// Strictly increasing millisecond timestamps shared by every series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAxis {
    timestamps: Vec<i64>,
}

impl TimeAxis {
    pub fn new(timestamps: Vec<i64>) -> ChartResult<Self> {
        if timestamps.len() < 2 {
            return Err(ChartError::MalformedInput(format!(
                "time axis needs at least two samples, got {}",
                timestamps.len()
            )));
        }
        if let Some(pair) = timestamps.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(ChartError::MalformedInput(format!(
                "time axis must be strictly increasing ({} followed by {})",
                pair[0], pair[1]
            )));
        }

        Ok(Self { timestamps })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Always `false`: an axis holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.timestamps.get(index).copied()
    }

    #[must_use]
    pub fn start(&self) -> i64 {
        self.timestamps[0]
    }

    #[must_use]
    pub fn end(&self) -> i64 {
        self.timestamps[self.timestamps.len() - 1]
    }

    #[must_use]
    pub fn span(&self) -> i64 {
        self.end() - self.start()
    }

    /// First index whose timestamp is `>= time`, if any.
    #[must_use]
    pub fn first_index_at_or_after(&self, time: f64) -> Option<usize> {
        let index = self.timestamps.partition_point(|&t| (t as f64) < time);
        (index < self.timestamps.len()).then_some(index)
    }
}

/// One named value series aligned with the time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub name: String,
    pub color: Option<String>,
    pub values: Vec<f64>,
}

/// Owns the loaded axis and series plus the legend's hidden set.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStore {
    axis: TimeAxis,
    series: Vec<Series>,
    hidden: IndexSet<String>,
}

impl SeriesStore {
    /// Partitions raw columns into one time axis and the value series.
    pub fn load(input: ChartInput) -> ChartResult<Self> {
        let ChartInput {
            columns,
            types,
            names,
            colors,
        } = input;

        let mut axis_values: Option<Vec<i64>> = None;
        let mut raw_series: Vec<(String, Vec<f64>)> = Vec::new();
        let mut seen_keys: IndexSet<String> = IndexSet::new();

        for column in columns {
            let mut cells = column.into_iter();
            let key = match cells.next() {
                Some(Value::String(key)) => key,
                Some(other) => {
                    return Err(ChartError::MalformedInput(format!(
                        "column key must be a string, got {other}"
                    )));
                }
                None => {
                    return Err(ChartError::MalformedInput(
                        "column without a key".to_owned(),
                    ));
                }
            };

            if !seen_keys.insert(key.clone()) {
                return Err(ChartError::MalformedInput(format!(
                    "duplicate column `{key}`"
                )));
            }

            match types.get(&key) {
                Some(ColumnType::X) => {
                    if axis_values.is_some() {
                        return Err(ChartError::MalformedInput(format!(
                            "more than one x column (second is `{key}`)"
                        )));
                    }
                    let timestamps = cells
                        .map(|cell| parse_timestamp(&key, &cell))
                        .collect::<ChartResult<Vec<_>>>()?;
                    axis_values = Some(timestamps);
                }
                Some(ColumnType::Line) => {
                    let values = cells
                        .map(|cell| parse_value(&key, &cell))
                        .collect::<ChartResult<Vec<_>>>()?;
                    raw_series.push((key, values));
                }
                None => {
                    return Err(ChartError::MalformedInput(format!(
                        "column `{key}` has no declared type"
                    )));
                }
            }
        }

        let axis = TimeAxis::new(
            axis_values
                .ok_or_else(|| ChartError::MalformedInput("no x column present".to_owned()))?,
        )?;

        let mut series = Vec::with_capacity(raw_series.len());
        for (key, values) in raw_series {
            if values.len() != axis.len() {
                return Err(ChartError::MalformedInput(format!(
                    "series `{key}` has {} values, axis has {}",
                    values.len(),
                    axis.len()
                )));
            }
            series.push(Series {
                name: names.get(&key).cloned().unwrap_or_else(|| key.clone()),
                color: colors.get(&key).cloned(),
                key,
                values,
            });
        }

        debug!(
            samples = axis.len(),
            series_count = series.len(),
            "loaded chart series"
        );

        Ok(Self {
            axis,
            series,
            hidden: IndexSet::new(),
        })
    }

    #[must_use]
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// All series in declaration order, hidden ones included.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_by_key(&self, key: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.key == key)
    }

    #[must_use]
    pub fn is_hidden(&self, key: &str) -> bool {
        self.hidden.contains(key)
    }

    /// Keys currently hidden, in the order they were hidden.
    pub fn hidden_keys(&self) -> impl Iterator<Item = &str> {
        self.hidden.iter().map(String::as_str)
    }

    /// Updates the hidden flag of a series.
    ///
    /// Returns whether the hidden set changed.
    pub fn set_hidden(&mut self, key: &str, hidden: bool) -> ChartResult<bool> {
        if self.series_by_key(key).is_none() {
            return Err(ChartError::UnknownSeries(key.to_owned()));
        }

        let changed = if hidden {
            self.hidden.insert(key.to_owned())
        } else {
            self.hidden.shift_remove(key)
        };
        if changed {
            debug!(key, hidden, "series visibility changed");
        }
        Ok(changed)
    }

    /// Visible series in declaration order.
    #[must_use]
    pub fn visible_series(&self) -> Vec<&Series> {
        self.series
            .iter()
            .filter(|series| !self.hidden.contains(&series.key))
            .collect()
    }
}

fn parse_timestamp(key: &str, cell: &Value) -> ChartResult<i64> {
    if let Some(value) = cell.as_i64() {
        return Ok(value);
    }
    match cell.as_f64() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(ChartError::MalformedInput(format!(
            "column `{key}` holds a non-integer timestamp: {cell}"
        ))),
    }
}

fn parse_value(key: &str, cell: &Value) -> ChartResult<f64> {
    match cell.as_f64() {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(ChartError::MalformedInput(format!(
            "column `{key}` holds a non-numeric value: {cell}"
        ))),
    }
}
