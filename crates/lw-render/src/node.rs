//! Entry tree model and decoding.

use lw_codes::Ability;
use lw_tags::{class_document_name, subclass_document_name, title_case};
use serde_json::{Map, Number, Value};

/// One block of body content.
#[derive(Clone, Debug, PartialEq)]
pub enum EntryNode {
    /// Paragraph text, possibly containing tag tokens.
    Text(String),
    /// Bulleted list.
    List(Vec<EntryNode>),
    Table(Table),
    /// Group of children with an optional heading.
    ///
    /// Unnamed sections flatten into the surrounding text. Plain JSON arrays
    /// decode to unnamed sections.
    Section {
        name: Option<String>,
        children: Vec<EntryNode>,
    },
    /// Children introduced by a bold lead-in: `**Name.** text`.
    Named {
        name: String,
        children: Vec<EntryNode>,
    },
    /// Sidebar rendered as a blockquote.
    Inset {
        name: Option<String>,
        children: Vec<EntryNode>,
    },
    Quote {
        children: Vec<EntryNode>,
        author: Option<String>,
    },
    CrossRef(CrossRef),
    /// Children joined without separators.
    Inline(Vec<EntryNode>),
    /// Horizontal rule.
    Rule,
    AbilityFormula(AbilityFormula),
    /// Shape with no model; rendered by stringification.
    Unknown(Value),
}

/// Table entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub caption: Option<String>,
    pub columns: Vec<String>,
    /// Column alignment, same length as `columns` after decoding.
    pub aligns: Vec<Align>,
    pub rows: Vec<Vec<Cell>>,
}

/// Column alignment, from `colStyles`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    fn from_style(style: &str) -> Self {
        if style.contains("text-center") {
            Self::Center
        } else if style.contains("text-right") {
            Self::Right
        } else {
            Self::Left
        }
    }

    pub(crate) fn divider(self) -> &'static str {
        match self {
            Self::Left => ":--",
            Self::Center => ":-:",
            Self::Right => "--:",
        }
    }
}

/// One table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(Number),
    /// Exact die roll result.
    Exact(Number),
    /// Die roll range; `max` absent means open-ended.
    Range { min: Number, max: Option<Number> },
    Entry(Box<EntryNode>),
}

/// Reference to a feature documented elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossRef {
    pub kind: CrossRefKind,
    /// Feature name.
    pub name: String,
    /// Document holding the feature; `None` when the feature has its own.
    pub document: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossRefKind {
    ClassFeature,
    SubclassFeature,
    OptionalFeature,
}

/// Spell save DC or attack modifier formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbilityFormula {
    pub kind: FormulaKind,
    pub name: String,
    pub abilities: Vec<Ability>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormulaKind {
    SaveDc,
    AttackModifier,
}

impl EntryNode {
    /// Decode any JSON value into an entry tree.
    ///
    /// Never fails: strings and scalars become [`EntryNode::Text`], arrays
    /// become unnamed sections, and objects without a recognised shape become
    /// [`EntryNode::Unknown`].
    #[must_use]
    pub fn decode(value: &Value) -> Self {
        match value {
            Value::Null => Self::Text(String::new()),
            Value::String(s) => Self::Text(s.clone()),
            Value::Bool(_) | Value::Number(_) => Self::Text(value.to_string()),
            Value::Array(items) => Self::Section {
                name: None,
                children: decode_all(items),
            },
            Value::Object(obj) => decode_object(value, obj),
        }
    }

    /// Decode a JSON array (or a single value) into sibling nodes.
    #[must_use]
    pub fn decode_list(value: &Value) -> Vec<Self> {
        match value {
            Value::Array(items) => decode_all(items),
            Value::Null => Vec::new(),
            other => vec![Self::decode(other)],
        }
    }
}

fn decode_all(items: &[Value]) -> Vec<EntryNode> {
    items.iter().map(EntryNode::decode).collect()
}

fn get_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn name_of(obj: &Map<String, Value>) -> Option<String> {
    get_str(obj, "name").map(ToOwned::to_owned)
}

/// Children from `entries`, falling back to a single `entry`.
fn children_of(obj: &Map<String, Value>) -> Vec<EntryNode> {
    match (obj.get("entries"), obj.get("entry")) {
        (Some(entries), _) => EntryNode::decode_list(entries),
        (None, Some(entry)) => vec![EntryNode::decode(entry)],
        (None, None) => Vec::new(),
    }
}

fn decode_object(value: &Value, obj: &Map<String, Value>) -> EntryNode {
    let Some(kind) = get_str(obj, "type") else {
        return match (name_of(obj), obj.contains_key("entries") || obj.contains_key("entry")) {
            (Some(name), true) if !obj.contains_key("entries") => EntryNode::Named {
                name,
                children: children_of(obj),
            },
            (name, true) => EntryNode::Section {
                name,
                children: children_of(obj),
            },
            (_, false) => EntryNode::Unknown(value.clone()),
        };
    };

    match kind {
        "entries" | "section" | "variant" | "variantSub" | "options" => EntryNode::Section {
            name: name_of(obj),
            children: children_of(obj),
        },
        "list" => EntryNode::List(
            obj.get("items")
                .map(EntryNode::decode_list)
                .unwrap_or_default(),
        ),
        "item" | "itemSub" | "itemSpell" => match name_of(obj) {
            Some(name) => EntryNode::Named {
                name,
                children: children_of(obj),
            },
            None => EntryNode::Section {
                name: None,
                children: children_of(obj),
            },
        },
        "table" => EntryNode::Table(decode_table(obj)),
        "tableGroup" => EntryNode::Section {
            name: name_of(obj),
            children: obj
                .get("tables")
                .map(EntryNode::decode_list)
                .unwrap_or_default(),
        },
        "inset" | "insetReadaloud" => EntryNode::Inset {
            name: name_of(obj),
            children: children_of(obj),
        },
        "quote" => EntryNode::Quote {
            children: children_of(obj),
            author: quote_author(obj),
        },
        "inline" | "inlineBlock" => EntryNode::Inline(children_of(obj)),
        "hr" => EntryNode::Rule,
        "abilityDc" | "abilityAttackMod" => EntryNode::AbilityFormula(AbilityFormula {
            kind: if kind == "abilityDc" {
                FormulaKind::SaveDc
            } else {
                FormulaKind::AttackModifier
            },
            name: name_of(obj).unwrap_or_else(|| "Spell".to_owned()),
            abilities: obj
                .get("attributes")
                .and_then(Value::as_array)
                .map(|attrs| {
                    attrs
                        .iter()
                        .filter_map(Value::as_str)
                        .filter_map(Ability::from_code)
                        .collect()
                })
                .unwrap_or_default(),
        }),
        "refClassFeature" => decode_cross_ref(obj, "classFeature", CrossRefKind::ClassFeature)
            .unwrap_or_else(|| EntryNode::Unknown(value.clone())),
        "refSubclassFeature" => {
            decode_cross_ref(obj, "subclassFeature", CrossRefKind::SubclassFeature)
                .unwrap_or_else(|| EntryNode::Unknown(value.clone()))
        }
        "refOptionalfeature" => {
            decode_cross_ref(obj, "optionalfeature", CrossRefKind::OptionalFeature)
                .unwrap_or_else(|| EntryNode::Unknown(value.clone()))
        }
        _ if obj.contains_key("entries") => EntryNode::Section {
            name: name_of(obj),
            children: children_of(obj),
        },
        _ => EntryNode::Unknown(value.clone()),
    }
}

fn quote_author(obj: &Map<String, Value>) -> Option<String> {
    let parts: Vec<&str> = ["by", "from"]
        .into_iter()
        .filter_map(|key| get_str(obj, key))
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// Decode a `name|class|classSource|...` reference string.
fn decode_cross_ref(obj: &Map<String, Value>, key: &str, kind: CrossRefKind) -> Option<EntryNode> {
    let reference = get_str(obj, key)?;
    let parts: Vec<&str> = reference.split('|').map(str::trim).collect();
    let name = (*parts.first().filter(|n| !n.is_empty())?).to_owned();
    let part = |i: usize| parts.get(i).copied().filter(|p| !p.is_empty());
    let document = match kind {
        CrossRefKind::ClassFeature => part(1).map(|c| class_document_name(&title_case(c))),
        CrossRefKind::SubclassFeature => match (part(1), part(3)) {
            (Some(class), Some(short)) => Some(subclass_document_name(&title_case(class), short)),
            (Some(class), None) => Some(class_document_name(&title_case(class))),
            _ => None,
        },
        CrossRefKind::OptionalFeature => None,
    };
    Some(EntryNode::CrossRef(CrossRef {
        kind,
        name,
        document,
    }))
}

fn decode_table(obj: &Map<String, Value>) -> Table {
    let rows: Vec<Vec<Cell>> = obj
        .get("rows")
        .and_then(Value::as_array)
        .map(|rows| rows.iter().map(decode_row).collect())
        .unwrap_or_default();

    let mut columns: Vec<String> = obj
        .get("colLabels")
        .and_then(Value::as_array)
        .map(|labels| {
            labels
                .iter()
                .map(|label| match label {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    if columns.is_empty() {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        columns = vec![String::new(); width];
    }

    let mut aligns: Vec<Align> = obj
        .get("colStyles")
        .and_then(Value::as_array)
        .map(|styles| {
            styles
                .iter()
                .map(|s| s.as_str().map(Align::from_style).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();
    aligns.resize(columns.len(), Align::Left);

    Table {
        caption: get_str(obj, "caption").map(ToOwned::to_owned),
        columns,
        aligns,
        rows,
    }
}

fn decode_row(row: &Value) -> Vec<Cell> {
    match row {
        Value::Array(cells) => cells.iter().map(decode_cell).collect(),
        Value::Object(obj) if obj.get("type").and_then(Value::as_str) == Some("row") => obj
            .get("row")
            .and_then(Value::as_array)
            .map(|cells| cells.iter().map(decode_cell).collect())
            .unwrap_or_default(),
        other => vec![decode_cell(other)],
    }
}

fn decode_cell(cell: &Value) -> Cell {
    match cell {
        Value::Null => Cell::Text(String::new()),
        Value::String(s) => Cell::Text(s.clone()),
        Value::Bool(b) => Cell::Text(b.to_string()),
        Value::Number(n) => Cell::Number(n.clone()),
        Value::Object(obj) if obj.get("type").and_then(Value::as_str) == Some("cell") => {
            if let Some(roll) = obj.get("roll").and_then(Value::as_object) {
                if let Some(exact) = roll.get("exact").and_then(as_number) {
                    return Cell::Exact(exact);
                }
                if let Some(min) = roll.get("min").and_then(as_number) {
                    return Cell::Range {
                        min,
                        max: roll.get("max").and_then(as_number),
                    };
                }
            }
            match obj.get("entry") {
                Some(entry) => Cell::Entry(Box::new(EntryNode::decode(entry))),
                None => Cell::Entry(Box::new(EntryNode::Unknown(cell.clone()))),
            }
        }
        other => Cell::Entry(Box::new(EntryNode::decode(other))),
    }
}

fn as_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}
