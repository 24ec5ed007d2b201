//! Note model (schema) and deck definitions as stored in the `col` table.

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::schema::{DEFAULT_DECK_CONFIG_ID, DEFAULT_DECK_ID};

const DEFAULT_CSS: &str = ".card {\n font-family: arial;\n font-size: 20px;\n text-align: center;\n color: black;\n background-color: white;\n}\n";

const LATEX_PRE: &str = "\\documentclass[12pt]{article}\n\\special{papersize=3in,5in}\n\\usepackage[utf8]{inputenc}\n\\usepackage{amssymb,amsmath}\n\\pagestyle{empty}\n\\setlength{\\parindent}{0in}\n\\begin{document}\n";

const LATEX_POST: &str = "\\end{document}";

/// A named field of a note model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    pub name: String,
}

/// Front/back rendering for one card of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    pub name: String,
    pub front: String,
    pub back: String,
}

/// Field list and templates shared by every note in a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteModel {
    pub id: i64,
    pub name: String,
    pub fields: Vec<ModelField>,
    pub templates: Vec<CardTemplate>,
    pub css: String,
}

impl NoteModel {
    /// Question/answer model with a single front-to-back card.
    pub fn question_answer(id: i64) -> Self {
        Self {
            id,
            name: "Simple Model".to_string(),
            fields: vec![
                ModelField {
                    name: "Question".to_string(),
                },
                ModelField {
                    name: "Answer".to_string(),
                },
            ],
            templates: vec![CardTemplate {
                name: "Card 1".to_string(),
                front: "{{Question}}".to_string(),
                back: "{{FrontSide}}<hr id=\"answer\">{{Answer}}".to_string(),
            }],
            css: DEFAULT_CSS.to_string(),
        }
    }

    pub(crate) fn to_collection_json(&self, deck_id: i64, mod_secs: i64) -> ModelJson<'_> {
        ModelJson {
            id: self.id.to_string(),
            name: &self.name,
            kind: 0,
            modified: mod_secs,
            usn: -1,
            sort_field: 0,
            did: deck_id,
            tmpls: self
                .templates
                .iter()
                .enumerate()
                .map(|(ord, t)| TemplateJson {
                    name: &t.name,
                    ord,
                    qfmt: &t.front,
                    afmt: &t.back,
                    bqfmt: "",
                    bafmt: "",
                    did: None,
                })
                .collect(),
            flds: self
                .fields
                .iter()
                .enumerate()
                .map(|(ord, f)| FieldJson {
                    name: &f.name,
                    ord,
                    sticky: false,
                    rtl: false,
                    font: "Arial",
                    size: 20,
                    media: Vec::new(),
                })
                .collect(),
            css: &self.css,
            latex_pre: LATEX_PRE,
            latex_post: LATEX_POST,
            latexsvg: false,
            // Every template only needs the first field to render.
            req: self
                .templates
                .iter()
                .enumerate()
                .map(|(ord, _)| json!([ord, "all", [0]]))
                .collect(),
            tags: Vec::new(),
            vers: Vec::new(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct ModelJson<'a> {
    id: String,
    name: &'a str,
    #[serde(rename = "type")]
    kind: u8,
    #[serde(rename = "mod")]
    modified: i64,
    usn: i64,
    #[serde(rename = "sortf")]
    sort_field: usize,
    did: i64,
    tmpls: Vec<TemplateJson<'a>>,
    flds: Vec<FieldJson<'a>>,
    css: &'a str,
    #[serde(rename = "latexPre")]
    latex_pre: &'a str,
    #[serde(rename = "latexPost")]
    latex_post: &'a str,
    latexsvg: bool,
    req: Vec<Value>,
    tags: Vec<String>,
    vers: Vec<Value>,
}

#[derive(Serialize)]
struct TemplateJson<'a> {
    name: &'a str,
    ord: usize,
    qfmt: &'a str,
    afmt: &'a str,
    bqfmt: &'a str,
    bafmt: &'a str,
    did: Option<i64>,
}

#[derive(Serialize)]
struct FieldJson<'a> {
    name: &'a str,
    ord: usize,
    sticky: bool,
    rtl: bool,
    font: &'a str,
    size: u32,
    media: Vec<String>,
}

/// Named deck container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Deck {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
        }
    }

    pub(crate) fn to_collection_json(&self, mod_secs: i64) -> Value {
        deck_json(self.id, &self.name, &self.description, mod_secs)
    }
}

fn deck_json(id: i64, name: &str, description: &str, mod_secs: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "desc": description,
        "mod": mod_secs,
        "usn": -1,
        "conf": DEFAULT_DECK_CONFIG_ID,
        "dyn": 0,
        "collapsed": false,
        "browserCollapsed": false,
        "extendNew": 0,
        "extendRev": 50,
        "newToday": [0, 0],
        "revToday": [0, 0],
        "lrnToday": [0, 0],
        "timeToday": [0, 0],
    })
}

/// `col.decks`: the built-in default deck plus the exported one.
pub(crate) fn decks_json(deck: &Deck, mod_secs: i64) -> Value {
    let mut decks = Map::new();
    decks.insert(
        DEFAULT_DECK_ID.to_string(),
        deck_json(DEFAULT_DECK_ID, "Default", "", mod_secs),
    );
    decks.insert(deck.id.to_string(), deck.to_collection_json(mod_secs));
    Value::Object(decks)
}

/// `col.conf`: collection-wide preferences.
pub(crate) fn collection_conf_json(model_id: i64, deck_id: i64) -> Value {
    json!({
        "activeDecks": [deck_id],
        "curDeck": deck_id,
        "curModel": model_id.to_string(),
        "newSpread": 0,
        "collapseTime": 1200,
        "timeLim": 0,
        "estTimes": true,
        "dueCounts": true,
        "nextPos": 1,
        "sortType": "noteFld",
        "sortBackwards": false,
        "addToCur": true,
    })
}

/// `col.dconf`: the default deck options group.
pub(crate) fn deck_config_json(mod_secs: i64) -> Value {
    json!({
        (DEFAULT_DECK_CONFIG_ID.to_string()): {
            "id": DEFAULT_DECK_CONFIG_ID,
            "name": "Default",
            "mod": mod_secs,
            "usn": 0,
            "maxTaken": 60,
            "autoplay": true,
            "replayq": true,
            "timer": 0,
            "new": {
                "bury": true,
                "delays": [1, 10],
                "initialFactor": 2500,
                "ints": [1, 4, 7],
                "order": 1,
                "perDay": 20,
                "separate": true,
            },
            "rev": {
                "bury": true,
                "ease4": 1.3,
                "fuzz": 0.05,
                "ivlFct": 1,
                "maxIvl": 36500,
                "minSpace": 1,
                "perDay": 100,
            },
            "lapse": {
                "delays": [10],
                "leechAction": 0,
                "leechFails": 8,
                "minInt": 1,
                "mult": 0,
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_answer_model_templates() {
        let model = NoteModel::question_answer(42);
        let json = serde_json::to_value(model.to_collection_json(7, 0)).unwrap();

        assert_eq!(json["id"], "42");
        assert_eq!(json["did"], 7);
        assert_eq!(json["flds"][0]["name"], "Question");
        assert_eq!(json["flds"][1]["name"], "Answer");
        assert_eq!(json["flds"][1]["ord"], 1);
        assert_eq!(json["tmpls"][0]["qfmt"], "{{Question}}");
        assert_eq!(
            json["tmpls"][0]["afmt"],
            "{{FrontSide}}<hr id=\"answer\">{{Answer}}"
        );
        assert_eq!(json["req"][0], json!([0, "all", [0]]));
    }

    #[test]
    fn decks_include_default_deck() {
        let decks = decks_json(&Deck::new(99, "Biology"), 0);
        assert_eq!(decks["1"]["name"], "Default");
        assert_eq!(decks["99"]["name"], "Biology");
        assert_eq!(decks["99"]["id"], 99);
    }
}
