//! Oracle display - a dithered, breathing blob that types out fortunes.
//!
//! The pattern drifts slowly while idle and races while a fortune is being
//! revealed, one character (and one click) at a time.

use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use oracle_display::audio::{CuePlayer, CueSystem, SilentCue};
use oracle_display::cli::Args;
use oracle_display::display::{DisplaySettings, OracleDisplay};
use oracle_display::params::{DisplayConfig, SnapshotConfig};
use oracle_display::rendering::{save_png, RenderSystem};

/// Acceleration fed to the shake detector by the `S` key (m/s²)
const SIMULATED_SHAKE: Vec3 = Vec3::new(18.0, 0.0, 9.81);

/// Events delivered to the event loop from other threads
#[derive(Debug)]
enum HostEvent {
    /// One line of host input (JSON message or plain fortune)
    Message(String),
}

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    display: OracleDisplay,
    config: DisplayConfig,

    // Time tracking
    start_time: Instant,
}

impl App {
    fn new(mut display: OracleDisplay, config: DisplayConfig, initial: Option<&str>) -> Self {
        let start_time = Instant::now();
        display.start(initial, Duration::ZERO);
        Self {
            window: None,
            render_system: None,
            display,
            config,
            start_time,
        }
    }

    fn now(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.now();
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        let screen = self.display.frame(now);
        render_system.upload(screen);

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, exiting");
                self.display.stop();
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        let now = self.now();
        match code {
            KeyCode::Escape => {
                self.display.stop();
                event_loop.exit();
            }
            KeyCode::ArrowUp | KeyCode::ArrowDown => {
                let outcome = self.display.handle_scroll(now);
                debug!("scroll: {:?}", outcome);
            }
            KeyCode::KeyS => {
                if let Some(outcome) = self.display.handle_acceleration(SIMULATED_SHAKE, now) {
                    debug!("shake: {:?}", outcome);
                }
            }
            _ => {}
        }
    }
}

impl ApplicationHandler<HostEvent> for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let (width, height) = self.config.window_size();
        let window_attributes = Window::default_attributes()
            .with_title("Oracle")
            .with_resizable(false)
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            self.config.width,
            self.config.height,
        ));
        match render_system {
            Ok(render_system) => self.render_system = Some(render_system),
            Err(e) => {
                error!("Failed to initialize rendering: {}", e);
                event_loop.exit();
                return;
            }
        }

        info!("Oracle is running (arrows: replay, S: shake, Esc: quit)");
        self.window = Some(window);
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: HostEvent) {
        match event {
            HostEvent::Message(line) => {
                let now = self.now();
                if let Some(outcome) = self.display.handle_input(&line, now) {
                    debug!("host message: {:?}", outcome);
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.display.stop();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => self.handle_key(event_loop, code),
            WindowEvent::MouseWheel { .. } => {
                let now = self.now();
                self.display.handle_scroll(now);
            }
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

/// Open the typing cue, falling back to silence
fn open_cue(args: &Args) -> Box<dyn CuePlayer> {
    if args.mute {
        return Box::new(SilentCue);
    }
    match CueSystem::new(&args.cue_config()) {
        Ok(cue) => Box::new(cue),
        Err(e) => {
            warn!("Typing sound unavailable ({}), continuing muted", e);
            Box::new(SilentCue)
        }
    }
}

/// Forward stdin lines to the event loop
fn spawn_stdin_reader(proxy: EventLoopProxy<HostEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if proxy.send_event(HostEvent::Message(line)).is_err() {
                            break; // Event loop gone
                        }
                    }
                    Err(e) => {
                        warn!("stdin read failed: {}", e);
                        break;
                    }
                }
            }
            debug!("stdin reader exiting");
        })
}

/// Headless mode: render on a virtual clock and save every frame as PNG
fn run_snapshot(args: &Args, settings: DisplaySettings, config: &SnapshotConfig) -> Result<()> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create snapshot directory {}",
            config.output_dir.display()
        )
    })?;

    let mut display =
        OracleDisplay::new(settings, Box::new(SilentCue)).context("invalid display settings")?;
    display.start(args.text.as_deref(), Duration::ZERO);

    let started = Instant::now();
    for frame in 0..config.frames {
        let now = config.frame_time(frame);
        let screen = display.frame(now);
        save_png(screen, &config.frame_path(frame), frame)?;
    }

    info!(
        "Wrote {} frames to {} in {:.2}s (text: {:?})",
        config.frames,
        config.output_dir.display(),
        started.elapsed().as_secs_f64(),
        display.oracle().displayed_text()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = args.display_settings();

    if let Some(config) = args.snapshot_config() {
        return run_snapshot(&args, settings, &config);
    }

    let cue = open_cue(&args);
    let display_config = settings.display.clone();
    let display = OracleDisplay::new(settings, cue).context("invalid display settings")?;

    let event_loop = EventLoop::<HostEvent>::with_user_event()
        .build()
        .context("failed to create event loop")?;

    if args.stdin {
        spawn_stdin_reader(event_loop.create_proxy()).context("failed to spawn stdin reader")?;
    }

    let mut app = App::new(display, display_config, args.text.as_deref());
    event_loop.run_app(&mut app).context("event loop failed")?;
    Ok(())
}
