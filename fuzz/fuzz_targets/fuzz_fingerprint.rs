#![no_main]

use libfuzzer_sys::fuzz_target;
use oas_explorer::model::{Change, ChangeContext, ChangeKind};

fuzz_target!(|input: (bool, String, Option<String>, Option<String>, u32, u32)| {
    let (breaking, property, original, new, line, column) = input;
    let change = Change {
        breaking,
        kind: ChangeKind::Modified,
        property,
        original,
        new,
        context: ChangeContext {
            original_line: Some(line),
            original_column: Some(column),
            new_line: None,
            new_column: None,
        },
    };
    let first = oas_explorer::fingerprint(&change);
    let second = oas_explorer::fingerprint(&change);
    // Deterministic and always a valid i32 rendering.
    assert_eq!(first, second);
    assert!(first.parse::<i32>().is_ok());
});
