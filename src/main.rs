#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod interactions;
mod lazy;
mod loading;
mod particles;
mod rate_limit;
mod scroll;
mod telemetry;
mod theme;
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This crate only runs in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
