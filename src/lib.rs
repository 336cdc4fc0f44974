pub mod classify;
pub mod escape;
pub mod query;
pub mod swaplist;
pub mod terms;
pub mod widths;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Quote a SQL identifier with the standard `"` delimiter
#[wasm_bindgen(js_name = "quoteIdentifier")]
pub fn quote_identifier(text: &str) -> String {
    escape::quote(text)
}

/// Build a substring-match LIKE literal from raw user text
#[wasm_bindgen(js_name = "likePattern")]
pub fn like_pattern(text: &str) -> String {
    escape::like_pattern(text)
}

/// Build a prefix-match LIKE literal from raw user text
#[wasm_bindgen(js_name = "startsWithPattern")]
pub fn starts_with_pattern(text: &str) -> String {
    escape::starts_with_pattern(text)
}

/// Whether executing the statement may change the database schema
#[wasm_bindgen(js_name = "affectsSchema")]
pub fn affects_schema(sql: &str) -> bool {
    classify::affects_schema(sql)
}

/// Whether executing the statement may change table contents
#[wasm_bindgen(js_name = "affectsData")]
pub fn affects_data(sql: &str) -> bool {
    classify::affects_data(sql)
}

/// Distribute a pixel budget over columns with the given wanted widths
#[wasm_bindgen(js_name = "allocateWidths")]
pub fn allocate_widths(wanted: Vec<i32>, total: i32) -> Vec<i32> {
    widths::allocate(&wanted, total)
}
