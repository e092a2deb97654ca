#![no_main]

use libfuzzer_sys::fuzz_target;
use ts2dart::frontend::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Every stage must return an error rather than panic.
        if let Ok(tokens) = lexer::lex(s) {
            let _ = parser::parse(&tokens);
        }
        let _ = ts2dart::translate_source("fuzz.ts", s);
    }
});
