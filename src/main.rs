#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod easing;
mod error;
mod form;
mod frame;
mod header;
mod images;
mod log;
mod menu;
mod motion;
mod reveal;
mod scroll;
mod skills;
mod timing;
mod typing;
mod visibility;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This crate enhances a page in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
