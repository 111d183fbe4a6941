use serde_json::{Value, json};
use sheetpress::source::{ActorData, parse_actors};

/// A fully populated character as the game-server module exports it.
pub fn rin_json() -> Value {
    json!({
        "id": "a1",
        "name": "Rin Ashgrove",
        "type": "character",
        "img": "tokens/rin.png",
        "system": {
            "attributes": { "hp": { "value": 7, "max": 12 }, "ac": { "value": 15 } },
            "details": { "level": 3, "race": "Elf", "class": "Ranger", "biography": { "public": "Line one\nLine two" } },
            "abilities": { "str": { "value": 10 }, "dex": { "value": 16 } }
        },
        "items": [
            { "name": "Sword", "type": "weapon" },
            { "name": "Rope", "type": "loot" },
            { "name": "Lantern", "type": "loot" }
        ],
        "effects": [],
        "flags": {},
        "prototypeToken": { "name": "Rin" },
        "_meta": {
            "systemId": "dnd5e",
            "systemVersion": "3.1.2",
            "foundryVersion": "12.331",
            "exportedAt": "2024-05-01T12:00:00.000Z"
        }
    })
}

pub fn rin() -> ActorData {
    serde_json::from_value(rin_json()).expect("fixture actor parses")
}

/// Two actors, the second with almost nothing filled in.
pub fn party() -> Vec<ActorData> {
    let json = json!([rin_json(), { "id": "a2", "name": "Kai Vela" }]);
    parse_actors(&json.to_string()).expect("fixture party parses")
}

/// A small template exercising conditions, repeats and style overrides.
pub fn roster_template() -> String {
    json!({
        "meta": { "id": "roster", "name": "Roster", "width": 100, "height": 50, "exports": ["pdf", "png"], "printful": null },
        "styles": { "heading": { "fontSize": 10, "fontWeight": "bold" } },
        "layout": [
            { "type": "text", "x": 5, "y": 5, "width": 90, "content": "{{actor.name}}", "style": { "fontSize": 10, "fontWeight": "bold" } },
            { "type": "text", "x": 5, "y": 12, "width": 90, "content": "Has portrait", "condition": "{{actor.img}}" },
            {
                "type": "repeat", "x": 5, "y": 20, "bind": "{{actor.items}}", "direction": "horizontal", "gap": 2, "maxItems": 2,
                "template": [
                    { "type": "text", "x": 0, "y": 0, "width": 20, "height": 5, "content": "{{item.name}}" }
                ]
            }
        ]
    })
    .to_string()
}

/// A PDF-only template.
pub fn pdf_only_template() -> String {
    json!({
        "meta": { "id": "ledger", "name": "Ledger", "width": 210, "height": 297, "exports": ["pdf"], "printful": null },
        "layout": [ { "type": "text", "x": 10, "y": 10, "content": "{{actor.name}}" } ]
    })
    .to_string()
}
