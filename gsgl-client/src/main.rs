use std::time::Instant;

use glow::HasContext;

use crate::{
    abs::App,
    input::{KeyboardState, UpdateContext},
    scenes::{Demo, SceneManager},
    settings::Settings,
};

mod abs;
mod input;
mod logging;
mod render;
mod scenes;
mod settings;

/// Compiles and links `render/shaders/<name>/{vert,frag}.glsl`, relative to the calling file's
/// `$path_prefix`.
#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $path_prefix:literal) => {
        $crate::abs::ShaderProgram::from_sources(
            &$gl,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
    };
}

fn main() {
    let (settings, source) = Settings::resolve();
    let level = settings.log_level();
    if let Err(e) = logging::init(
        level.unwrap_or(log::LevelFilter::Info),
        settings.log_file.as_deref(),
    ) {
        eprintln!("Failed to initialise logging: {e}");
        std::process::exit(1);
    }
    source.report();
    if level.is_none() {
        log::warn!("Unknown log level '{}', using info", settings.log_level);
    }

    let demo = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<Demo>() {
            Ok(demo) => demo,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(2);
            }
        },
        None => Demo::default(),
    };

    if let Err(e) = run(&settings, demo) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(settings: &Settings, demo: Demo) -> Result<(), String> {
    let mut app = App::new(&settings.window)?;
    log::info!("Opening the {demo} demo");
    let initial_scene = demo.create(&app.gl, settings, app.window.size())?;
    let mut scene_manager =
        SceneManager::new(initial_scene, &mut app.window, &settings.window.title);
    log::info!("Press 1, 2 or 3 to switch demos, Escape to quit");

    let mut keyboard_state = KeyboardState::default();
    let mut last_frame_time = Instant::now();

    'running: loop {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        keyboard_state.begin_frame();

        for event in app.event_pump.poll_iter() {
            scene_manager.handle_event(&event);
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::FocusLost,
                    ..
                } => keyboard_state.release_all(),
                sdl2::event::Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => keyboard_state.key_down(keycode),
                sdl2::event::Event::KeyUp {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => keyboard_state.key_up(keycode),
                _ => {}
            }
        }

        let update_ctx =
            UpdateContext::new(&keyboard_state, delta_time, settings, app.window.size());
        if !scene_manager.update(&app.gl, &update_ctx, &mut app.window, &app.sdl) {
            break 'running;
        }

        scene_manager.render(&app.gl);
        app.window.gl_swap_window();
    }

    log::info!("Closing");
    Ok(())
}
