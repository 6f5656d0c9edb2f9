#![allow(dead_code)]

use std::path::Path;

use serde_json::{Value, json};

/// Writes `<sale_dir>/<date>/<store>_deals.json`
pub fn write_store_deals(sale_dir: &Path, date: &str, store: &str, file: &Value) {
    let folder = sale_dir.join(date);
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(
        folder.join(format!("{store}_deals.json")),
        serde_json::to_string_pretty(file).unwrap(),
    )
    .unwrap();
}

pub fn store_file(store_name: &str, deals: Value) -> Value {
    json!({
        "store_name": store_name,
        "valid_from": "2025-03-15",
        "valid_to": "2025-03-21",
        "week_number": 11,
        "deals": deals,
    })
}

pub fn deal(category: &str, name: &str, price: f64, price_per_unit: f64) -> Value {
    json!({
        "category": category,
        "original_name": name.to_uppercase(),
        "normalized_name": name,
        "price": price,
        "price_per_unit": price_per_unit,
    })
}

/// A week with three sale folders; only 2025-03-15 should ever be read
pub fn seed_sale_dir(sale_dir: &Path) {
    write_store_deals(
        sale_dir,
        "2025-03-08",
        "netto",
        &store_file("Netto", json!([deal("Mejeri", "gammel mælk", 1.0, 1.0)])),
    );
    write_store_deals(
        sale_dir,
        "2025-03-15",
        "netto",
        &store_file(
            "Netto",
            json!([
                deal("Mejeri", "letmælk", 10.95, 10.95),
                deal("Kød", "hakket oksekød", 35.0, 70.0),
            ]),
        ),
    );
    write_store_deals(
        sale_dir,
        "2025-03-15",
        "rema",
        &store_file(
            "REMA 1000",
            json!([
                deal("Kød", "hakket oksekød", 39.0, 78.0),
                deal("Frugt & grønt", "bananer", 2.0, 13.0),
            ]),
        ),
    );
    std::fs::create_dir_all(sale_dir.join("not-a-date")).unwrap();
}
