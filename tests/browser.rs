//! Browser smoke test. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use runtime_env::{environment, Environment};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn resolves_from_real_window() {
    let env = Environment::from_browser().expect("browser tests have a window");

    assert!(env.production);
    assert_eq!(env.rest.host, env.ui.host);
    assert_eq!(env.rest.name_space, "/server");
    assert_eq!(env.ui.name_space, "/");
}

#[wasm_bindgen_test]
fn cached_accessor_returns_same_value() {
    let first = environment().expect("resolvable in browser");
    let second = environment().expect("resolvable in browser");

    assert!(std::ptr::eq(first, second));
}
