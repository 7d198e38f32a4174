//! Binary entrypoint for the browser-hosted listing page script.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::start();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `site_app` for wasm32 with the `csr` feature and load it from a listing page."
    );
}
