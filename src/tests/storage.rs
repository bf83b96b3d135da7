use serde_json::json;

use crate::storage::write_pretty_json;

#[test]
fn test_document_format() {
    let path = std::env::temp_dir().join("fortnite-data-core-format.json");

    let document = json!({
        "outfits": [
            { "id": "CID_001", "name": "Рекрут" }
        ]
    });

    write_pretty_json(&path, &document).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();

    // 4 spaces indentation, non-ASCII untouched, nothing after the
    // closing brace
    assert_eq!(written, concat!(
        "{\n",
        "    \"outfits\": [\n",
        "        {\n",
        "            \"id\": \"CID_001\",\n",
        "            \"name\": \"Рекрут\"\n",
        "        }\n",
        "    ]\n",
        "}"
    ));
}

#[test]
fn test_overwrites_in_place() {
    let path = std::env::temp_dir().join("fortnite-data-core-overwrite.json");

    write_pretty_json(&path, &json!({ "outfits": [1, 2, 3] })).unwrap();
    write_pretty_json(&path, &json!({ "outfits": [] })).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();

    assert_eq!(written, "{\n    \"outfits\": []\n}");
}
