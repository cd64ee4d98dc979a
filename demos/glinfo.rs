//! Opens a hidden window and prints what its GL context provides.

use glbind::gl::{self, cmd, Gl, GlutinLoader, SharedGlutinLoader};
use glbind::{Config, Resolve};
use glutin::*;
use std::rc::Rc;

fn main() {
    env_logger::init();

    let events_loop = EventsLoop::new();
    let window = WindowBuilder::new()
        .with_title("glinfo")
        .with_visibility(false);
    let context = ContextBuilder::new()
        .build_windowed(window, &events_loop)
        .unwrap();
    let context = Rc::new(unsafe { context.make_current().map_err(|(_, error)| error).unwrap() });

    let config = Config::from_env().unwrap_or_else(|error| {
        eprintln!("{}, using defaults", error);
        Config::default()
    });
    let gl = match config.resolve {
        Resolve::Eager => Gl::eager(GlutinLoader(&context), config),
        Resolve::Lazy  => Gl::lazy(SharedGlutinLoader(context.clone()), config),
    };

    let vendor = unsafe { gl::get_string(&gl, gl::VENDOR) }.unwrap_or_default();
    let renderer = unsafe { gl::get_string(&gl, gl::RENDERER) }.unwrap_or_default();
    println!("{} ({})", renderer, vendor);
    match gl.version() {
        Some(version) => println!("version:    {}", version),
        None => println!("version:    unknown"),
    }
    println!("extensions: {}", gl.extensions().len());
    println!("commands:   {} loaded", gl.loaded_count());

    for &command in &[
        cmd::DispatchCompute,
        cmd::TextureImage2DEXT,
        cmd::ConvolutionFilter1DEXT,
        cmd::DebugMessageCallback,
        cmd::MaxShaderCompilerThreadsKHR,
    ] {
        let requires: Vec<String> = command.requirements().iter().map(ToString::to_string).collect();
        println!(
            "{:<32} loaded: {:<5} available: {:<5} requires: {}",
            command.symbol(),
            gl.is_loaded(command),
            gl.is_available(command),
            requires.join(" | "),
        );
    }
}
