//! Intersect query builder: per-frame selections to a `Count(Intersect(...))` query.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{frames::FrameConfig, pql};

const INDENT: &str = "  ";

/// Selected values per frame name, as typed into the intersect form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Selection {
    pub values: BTreeMap<String, Vec<String>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, frame: impl Into<String>, values: Vec<impl Into<String>>) -> Self {
        self.set(frame, values.into_iter().map(|v| v.into()).collect());
        self
    }

    pub fn set(&mut self, frame: impl Into<String>, values: Vec<String>) {
        let frame = frame.into();
        if values.is_empty() {
            self.values.remove(&frame);
        } else {
            self.values.insert(frame, values);
        }
    }

    /// One free-text field per frame, each holding a list like `"1, 2 5"`.
    pub fn from_text_fields<'a>(fields: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let mut selection = Self::new();
        for (frame, text) in fields {
            selection.set(frame.clone(), parse_row_id_list(text));
        }
        selection
    }

    pub fn get(&self, frame: &str) -> &[String] {
        self.values.get(frame).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }
}

/// Parses a selected value into a row id.
///
/// A value counts as selected when, once trimmed, it is a non-empty unsigned
/// integer. Row id `0` is a valid selection.
pub fn selectable_row_id(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<u64>().ok()
}

pub fn is_selectable_row_id(value: &str) -> bool {
    selectable_row_id(value).is_some()
}

/// Splits a free-text form field ("1, 2 5") into its values.
pub fn parse_row_id_list(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn frame_sub_expression(frame: &str, values: &[String]) -> Option<String> {
    let refs = values
        .iter()
        .filter_map(|v| selectable_row_id(v))
        .map(|row_id| format!("{INDENT}{}", pql::bitmap(frame, row_id)))
        .collect::<Vec<_>>();

    match refs.len() {
        0 => None,
        1 => refs.into_iter().next(),
        _ => Some(format!(
            "{INDENT}Union(\n{INDENT}{}\n{INDENT})",
            refs.join(&format!(",\n{INDENT}"))
        )),
    }
}

/// Builds the count query for the current selection.
///
/// Frames are visited in `frames` order; selections for frames outside the
/// config are ignored. Returns an empty string when nothing is selected, which
/// callers treat as "do not submit".
pub fn build_intersect_query(frames: &FrameConfig, selection: &Selection) -> String {
    let to_intersect = frames
        .frames()
        .iter()
        .filter_map(|frame| frame_sub_expression(&frame.name, selection.get(&frame.name)))
        .collect::<Vec<_>>();

    if to_intersect.is_empty() {
        return String::new();
    }
    format!("Count(Intersect(\n{}\n))", to_intersect.join(",\n"))
}
