//! Tag classification and resolution.

use crate::links::{class_document_name, subclass_document_name};
use crate::scan::{interpolate_into, split_args};
use crate::{TagContext, link, title_case};

/// Family a tag name belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    /// Link to another document: `{@spell fireball|phb|alias}`.
    Reference,
    /// Link to a feature heading in a class document.
    ClassFeature,
    /// Link to a feature heading in a subclass document.
    SubclassFeature,
    /// Literal first argument: `{@damage 8d6}`.
    Value,
    /// Literal scaling step: `{@scaledice 3d6|3-9|1d6}`.
    Scaled,
    /// Emphasised annotation.
    Note,
    Bold,
    Italic,
    Strike,
    Code,
    /// Content kept as plain text: `{@filter label|...}`.
    Label,
    /// Percentage: `{@chance 25}`.
    Chance,
    /// Recharge range: `{@recharge 5}`.
    Recharge,
    /// Attack type tag of the classic stat block: `{@atk mw}`.
    Attack,
    /// Attack roll tag of the revised stat block: `{@atkr m}`.
    AttackRoll,
    /// `{@h}` hit marker.
    Hit,
    /// Anything else; removed with its content.
    Unknown,
}

impl TagKind {
    /// Classify a tag name.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        match name {
            "spell" | "item" | "creature" | "race" | "condition" | "skill" | "action"
            | "background" | "feat" | "class" | "deity" | "disease" | "hazard" | "object"
            | "optfeature" | "reward" | "status" | "vehicle" | "language" | "table"
            | "variantrule" | "trap" | "boon" | "cult" | "psionic" | "itemMastery" | "card"
            | "deck" | "facility" => Self::Reference,
            "classFeature" => Self::ClassFeature,
            "subclassFeature" => Self::SubclassFeature,
            "damage" | "dice" | "dc" | "hit" | "sense" | "d20" | "autodice" => Self::Value,
            "scaledice" | "scaledamage" => Self::Scaled,
            "note" => Self::Note,
            "b" | "bold" => Self::Bold,
            "i" | "italic" => Self::Italic,
            "s" | "strike" => Self::Strike,
            "code" => Self::Code,
            "filter" | "book" | "adventure" | "quickref" | "link" | "5etools" | "u"
            | "underline" | "color" | "highlight" | "help" => Self::Label,
            "chance" => Self::Chance,
            "recharge" => Self::Recharge,
            "atk" => Self::Attack,
            "atkr" => Self::AttackRoll,
            "h" => Self::Hit,
            _ => Self::Unknown,
        }
    }
}

/// Append the resolution of one token to `out`.
pub(crate) fn resolve(out: &mut String, name: &str, body: &str, ctx: &TagContext) {
    let kind = TagKind::classify(name);
    match kind {
        TagKind::Reference => {
            let args = split_args(body);
            push_reference(out, &args, 0, None, 2, ctx);
        }
        TagKind::ClassFeature => {
            let args = split_args(body);
            let class = arg(&args, 1).map(|c| class_document_name(&title_case(c)));
            push_reference(out, &args, 0, class.as_deref(), 5, ctx);
        }
        TagKind::SubclassFeature => {
            let args = split_args(body);
            let document = match (arg(&args, 1), arg(&args, 3)) {
                (Some(class), Some(short)) => {
                    Some(subclass_document_name(&title_case(class), short))
                }
                (Some(class), None) => Some(class_document_name(&title_case(class))),
                _ => None,
            };
            push_reference(out, &args, 0, document.as_deref(), 7, ctx);
        }
        TagKind::Value | TagKind::Label => {
            let args = split_args(body);
            interpolate_into(out, args[0].trim(), ctx);
        }
        TagKind::Scaled => {
            let args = split_args(body);
            let step = arg(&args, 2).unwrap_or_else(|| args[0].trim());
            interpolate_into(out, step, ctx);
        }
        TagKind::Note | TagKind::Italic => wrap(out, "*", body, ctx),
        TagKind::Bold => wrap(out, "**", body, ctx),
        TagKind::Strike => wrap(out, "~~", body, ctx),
        TagKind::Code => wrap(out, "`", body, ctx),
        TagKind::Chance => {
            let args = split_args(body);
            interpolate_into(out, args[0].trim(), ctx);
            out.push('%');
        }
        TagKind::Recharge => {
            let args = split_args(body);
            out.push_str("(recharge: ");
            out.push_str(arg(&args, 0).unwrap_or("6"));
            out.push(')');
        }
        TagKind::Attack => {
            out.push('*');
            out.push_str(&attack_label(body));
            out.push_str(":*");
        }
        TagKind::AttackRoll => {
            out.push('*');
            out.push_str(&attack_roll_label(body));
            out.push_str(":*");
        }
        TagKind::Hit => out.push_str("*Hit:*"),
        TagKind::Unknown => {}
    }
}

/// Non-empty trimmed argument at `index`.
fn arg<'a>(args: &[&'a str], index: usize) -> Option<&'a str> {
    args.get(index).copied().map(str::trim).filter(|a| !a.is_empty())
}

fn wrap(out: &mut String, marker: &str, body: &str, ctx: &TagContext) {
    let mut inner = String::new();
    interpolate_into(&mut inner, body.trim(), ctx);
    if inner.is_empty() {
        return;
    }
    out.push_str(marker);
    out.push_str(&inner);
    out.push_str(marker);
}

/// Push a link whose target is the title-cased argument at `name_index`.
///
/// With `document` set, the name becomes an anchor inside that document.
fn push_reference(
    out: &mut String,
    args: &[&str],
    name_index: usize,
    document: Option<&str>,
    alias_index: usize,
    ctx: &TagContext,
) {
    let Some(raw) = arg(args, name_index) else {
        return;
    };
    let mut plain = String::new();
    interpolate_into(&mut plain, raw, &ctx.plain());
    let name = title_case(&plain);
    let alias = arg(args, alias_index).map(|a| {
        let mut label = String::new();
        interpolate_into(&mut label, a, &ctx.plain());
        label
    });
    let rendered = match document {
        Some(document) => link(ctx.links, document, Some(&name), alias.as_deref()),
        None => link(ctx.links, &name, None, alias.as_deref()),
    };
    out.push_str(&rendered);
}

fn attack_label(body: &str) -> String {
    let parts: Vec<&str> = body
        .split(',')
        .map(|p| match p.trim() {
            "mw" => "Melee Weapon",
            "rw" => "Ranged Weapon",
            "ms" => "Melee Spell",
            "rs" => "Ranged Spell",
            "m" => "Melee",
            "r" => "Ranged",
            _ => "",
        })
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [] => "Attack".to_owned(),
        ["Melee Weapon", "Ranged Weapon"] => "Melee or Ranged Weapon Attack".to_owned(),
        ["Melee Spell", "Ranged Spell"] => "Melee or Ranged Spell Attack".to_owned(),
        _ => format!("{} Attack", parts.join(" or ")),
    }
}

fn attack_roll_label(body: &str) -> String {
    let melee = body.split(',').any(|p| p.trim() == "m");
    let ranged = body.split(',').any(|p| p.trim() == "r");
    match (melee, ranged) {
        (true, true) => "Melee or Ranged Attack Roll",
        (true, false) => "Melee Attack Roll",
        (false, true) => "Ranged Attack Roll",
        (false, false) => "Attack Roll",
    }
    .to_owned()
}
