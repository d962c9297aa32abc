#![no_main]

use libfuzzer_sys::fuzz_target;
use treepick::provider::{parse_tree_document, DocumentFormat};
use treepick::tree::{all_ids, invert, toggle_node, SelectionSet};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    for format in [DocumentFormat::Json, DocumentFormat::Yaml, DocumentFormat::Toml] {
        let Ok(roots) = parse_tree_document(content, format) else {
            continue;
        };

        // Every node of any parsed tree, duplicates included, toggles cleanly
        let mut selection = SelectionSet::new();
        for id in all_ids(&roots) {
            selection = toggle_node(&roots, &selection, id, true);
            assert!(selection.contains(id));
        }
        let inverted = invert(&roots, &selection);
        assert!(all_ids(&roots).iter().all(|id| !inverted.contains(id)));
    }
});
