//! Headless host simulation: a UI thread, a render thread, and a scripted user.
//!
//! The main thread plays the host's message thread. It delivers scripted
//! input to the backend's listeners and pumps the message queue. A second
//! thread plays the renderer and calls `new_frame` at ~60 Hz. The GUI context
//! just prints what it receives.
//!
//! Run with: RUST_LOG=debug cargo run -p imhost --example headless

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use imhost::{
    Backend, BackendConfig, BackendFlags, Clipboard, ClipboardBackend, ConfigFlags, GuiContext,
    GuiCursor, GuiKey, HostComponent, HostKey, HostServices, KeyEventSink, KeyPress, Keyboard,
    ModifierFlags, MouseButton, MouseEvent, MouseSource, MouseWheelDetails, PointerEventSink,
    QueuedMessageThread, RenderContext, StandardCursor, shared_context,
};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

const FRAMES: usize = 8;

#[derive(Default)]
struct PrintingGui {
    frame: usize,
    cursor: GuiCursor,
    clipboard: Option<Box<dyn ClipboardBackend>>,
}

impl GuiContext for PrintingGui {
    fn add_mouse_source_event(&mut self, source: MouseSource) {
        println!("  [gui] source   {source:?}");
    }
    fn add_mouse_pos_event(&mut self, x: f32, y: f32) {
        println!("  [gui] pos      ({x}, {y})");
    }
    fn add_mouse_button_event(&mut self, button: MouseButton, down: bool) {
        println!("  [gui] button   {button:?} {}", if down { "down" } else { "up" });
    }
    fn add_mouse_wheel_event(&mut self, wheel_x: f32, wheel_y: f32) {
        println!("  [gui] wheel    ({wheel_x}, {wheel_y})");
    }
    fn add_key_event(&mut self, key: GuiKey, down: bool) {
        println!("  [gui] key      {key:?} {}", if down { "down" } else { "up" });
    }
    fn add_input_character(&mut self, c: char) {
        println!("  [gui] char     {c:?}");
    }
    fn set_display_size(&mut self, _width: f32, _height: f32) {}
    fn set_display_framebuffer_scale(&mut self, _x: f32, _y: f32) {}
    fn set_delta_time(&mut self, seconds: f32) {
        self.frame += 1;
        // The GUI asks for a text cursor on the third frame.
        if self.frame == 3 {
            self.cursor = GuiCursor::TextInput;
        }
        tracing::trace!(frame = self.frame, dt = seconds, "frame");
    }
    fn want_text_input(&self) -> bool {
        true
    }
    fn mouse_cursor(&self) -> GuiCursor {
        self.cursor
    }
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags::empty()
    }
    fn mouse_draw_cursor(&self) -> bool {
        false
    }
    fn set_clipboard_backend(&mut self, backend: Option<Box<dyn ClipboardBackend>>) {
        self.clipboard = backend;
    }
    fn set_backend_platform_name(&mut self, name: Option<&'static str>) {
        println!("  [gui] platform {name:?}");
    }
    fn insert_backend_flags(&mut self, flags: BackendFlags) {
        println!("  [gui] flags    {flags:?}");
    }
}

/// A window that never appears, with a keyboard the script controls.
#[derive(Default)]
struct SimulatedHost {
    modifiers: Mutex<ModifierFlags>,
    down: Mutex<HashSet<HostKey>>,
    clipboard: Mutex<String>,
    pointer: Mutex<Vec<Arc<dyn PointerEventSink>>>,
    keys: Mutex<Vec<Arc<dyn KeyEventSink>>>,
}

impl SimulatedHost {
    fn type_key(&self, key: HostKey, text: char) {
        self.down.lock().insert(key);
        let press = KeyPress::new(key)
            .with_modifiers(*self.modifiers.lock())
            .with_text(text);
        for listener in self.keys.lock().iter() {
            listener.key_pressed(&press);
        }
    }

    fn release_key(&self, key: HostKey) {
        self.down.lock().remove(&key);
    }

    fn pointer(&self, f: impl Fn(&dyn PointerEventSink)) {
        for listener in self.pointer.lock().iter() {
            f(listener.as_ref());
        }
    }
}

impl HostComponent for SimulatedHost {
    fn width(&self) -> u32 {
        800
    }
    fn height(&self) -> u32 {
        600
    }
    fn set_mouse_cursor(&self, cursor: StandardCursor) {
        println!("  [host] cursor  {cursor:?}");
    }
    fn add_mouse_listener(&self, listener: Arc<dyn PointerEventSink>) {
        self.pointer.lock().push(listener);
    }
    fn remove_mouse_listener(&self, listener: &Arc<dyn PointerEventSink>) {
        self.pointer.lock().retain(|l| !Arc::ptr_eq(l, listener));
    }
    fn add_key_listener(&self, listener: Arc<dyn KeyEventSink>) {
        self.keys.lock().push(listener);
    }
    fn remove_key_listener(&self, listener: &Arc<dyn KeyEventSink>) {
        self.keys.lock().retain(|l| !Arc::ptr_eq(l, listener));
    }
}

impl RenderContext for SimulatedHost {
    fn rendering_scale(&self) -> f64 {
        2.0
    }
}

impl Keyboard for SimulatedHost {
    fn current_modifiers(&self) -> ModifierFlags {
        *self.modifiers.lock()
    }
    fn is_key_currently_down(&self, key: HostKey) -> bool {
        self.down.lock().contains(&key)
    }
}

impl Clipboard for SimulatedHost {
    fn text(&self) -> String {
        self.clipboard.lock().clone()
    }
    fn set_text(&self, text: &str) {
        *self.clipboard.lock() = text.to_owned();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let host = Arc::new(SimulatedHost::default());
    let queue = Arc::new(QueuedMessageThread::new());
    let context = shared_context(PrintingGui::default());
    let services = HostServices::new(queue.clone(), host.clone(), host.clone());

    let backend = match Backend::new(
        host.clone(),
        host.clone(),
        Arc::clone(&context),
        services,
        BackendConfig::default().with_mouse_wheel_sensitivity(0.5),
    ) {
        Ok(backend) => Arc::new(backend),
        Err(err) => {
            eprintln!("failed to create backend: {err}");
            std::process::exit(1);
        }
    };

    // Render thread: one new_frame per tick, reported back over a channel.
    let (frame_tx, frame_rx) = crossbeam_channel::bounded::<usize>(1);
    let render = Arc::clone(&backend);
    let renderer = thread::spawn(move || {
        for frame in 1..=FRAMES {
            render.new_frame();
            if frame_tx.send(frame).is_err() {
                break;
            }
            thread::sleep(Duration::from_millis(16));
        }
    });

    // Message thread: script some input, then merge whatever the renderer
    // asked for.
    for frame in frame_rx.iter() {
        println!("frame {frame}");
        match frame {
            1 => host.pointer(|p| {
                p.mouse_move(&MouseEvent::new(120.0, 80.0));
                p.mouse_down(&MouseEvent::new(120.0, 80.0).with_mods(ModifierFlags::LEFT_BUTTON));
            }),
            2 => {
                host.pointer(|p| {
                    p.mouse_up(&MouseEvent::new(120.0, 80.0).with_mods(ModifierFlags::LEFT_BUTTON));
                });
                *host.modifiers.lock() = ModifierFlags::SHIFT;
                host.type_key(HostKey::Char('H'), 'H');
            }
            3 => {
                host.release_key(HostKey::Char('H'));
                *host.modifiers.lock() = ModifierFlags::empty();
                host.type_key(HostKey::Char('I'), 'i');
            }
            4 => {
                host.release_key(HostKey::Char('I'));
                host.pointer(|p| {
                    p.mouse_wheel_move(
                        &MouseEvent::new(120.0, 80.0),
                        &MouseWheelDetails {
                            delta_x: 0.0,
                            delta_y: -3.0,
                        },
                    );
                });
            }
            5 => {
                *host.clipboard.lock() = "pasted".to_owned();
                if let Some(clipboard) = context.lock().clipboard.as_mut() {
                    println!("  [gui] clipboard {:?}", clipboard.get());
                }
            }
            _ => {}
        }
        queue.pump();
    }

    if renderer.join().is_err() {
        eprintln!("render thread panicked");
    }
    queue.pump();

    // Drop on the message thread, after the renderer has let go.
    drop(Arc::into_inner(backend));
    println!("done");
}
