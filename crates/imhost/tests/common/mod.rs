//! Simulated host and GUI context shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use imhost::{
    Backend, BackendConfig, BackendFlags, Clipboard, ClipboardBackend, ConfigFlags, GuiContext,
    GuiCursor, GuiKey, HostComponent, HostKey, HostServices, KeyEventSink, Keyboard,
    ModifierFlags, MouseButton, MouseSource, PointerEventSink, QueuedMessageThread,
    RenderContext, SharedContext, StandardCursor, shared_context,
};
use parking_lot::Mutex;

/// Everything the backend wrote into the GUI context, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Source(MouseSource),
    Pos(f32, f32),
    Button(MouseButton, bool),
    Wheel(f32, f32),
    Key(GuiKey, bool),
    Char(char),
}

/// GUI context that records input and exposes its outputs as plain fields.
#[derive(Default)]
pub struct RecordingGui {
    pub inputs: Vec<Input>,
    pub display_size: (f32, f32),
    pub framebuffer_scale: (f32, f32),
    pub delta_times: Vec<f32>,
    pub want_text_input: bool,
    pub cursor: GuiCursor,
    pub config_flags: ConfigFlags,
    pub draw_cursor: bool,
    pub clipboard: Option<Box<dyn ClipboardBackend>>,
    pub platform_name: Option<&'static str>,
    pub backend_flags: BackendFlags,
}

impl RecordingGui {
    pub fn take_inputs(&mut self) -> Vec<Input> {
        std::mem::take(&mut self.inputs)
    }

    pub fn key_events(&self) -> Vec<(GuiKey, bool)> {
        self.inputs
            .iter()
            .filter_map(|i| match *i {
                Input::Key(k, down) => Some((k, down)),
                _ => None,
            })
            .collect()
    }
}

impl GuiContext for RecordingGui {
    fn add_mouse_source_event(&mut self, source: MouseSource) {
        self.inputs.push(Input::Source(source));
    }
    fn add_mouse_pos_event(&mut self, x: f32, y: f32) {
        self.inputs.push(Input::Pos(x, y));
    }
    fn add_mouse_button_event(&mut self, button: MouseButton, down: bool) {
        self.inputs.push(Input::Button(button, down));
    }
    fn add_mouse_wheel_event(&mut self, wheel_x: f32, wheel_y: f32) {
        self.inputs.push(Input::Wheel(wheel_x, wheel_y));
    }
    fn add_key_event(&mut self, key: GuiKey, down: bool) {
        self.inputs.push(Input::Key(key, down));
    }
    fn add_input_character(&mut self, c: char) {
        self.inputs.push(Input::Char(c));
    }
    fn set_display_size(&mut self, width: f32, height: f32) {
        self.display_size = (width, height);
    }
    fn set_display_framebuffer_scale(&mut self, x: f32, y: f32) {
        self.framebuffer_scale = (x, y);
    }
    fn set_delta_time(&mut self, seconds: f32) {
        self.delta_times.push(seconds);
    }
    fn want_text_input(&self) -> bool {
        self.want_text_input
    }
    fn mouse_cursor(&self) -> GuiCursor {
        self.cursor
    }
    fn config_flags(&self) -> ConfigFlags {
        self.config_flags
    }
    fn mouse_draw_cursor(&self) -> bool {
        self.draw_cursor
    }
    fn set_clipboard_backend(&mut self, backend: Option<Box<dyn ClipboardBackend>>) {
        self.clipboard = backend;
    }
    fn set_backend_platform_name(&mut self, name: Option<&'static str>) {
        self.platform_name = name;
    }
    fn insert_backend_flags(&mut self, flags: BackendFlags) {
        self.backend_flags |= flags;
    }
}

/// One object playing every host role: surface, renderer, keyboard and
/// clipboard.
pub struct FakeHost {
    pub size: Mutex<(u32, u32)>,
    pub scale: Mutex<f64>,
    pub cursors: Mutex<Vec<StandardCursor>>,
    pub modifiers: Mutex<ModifierFlags>,
    pub down: Mutex<HashSet<HostKey>>,
    pub clipboard: Mutex<String>,
    pub pointer_listeners: Mutex<Vec<Arc<dyn PointerEventSink>>>,
    pub key_listeners: Mutex<Vec<Arc<dyn KeyEventSink>>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            size: Mutex::new((800, 600)),
            scale: Mutex::new(1.0),
            cursors: Mutex::new(Vec::new()),
            modifiers: Mutex::new(ModifierFlags::empty()),
            down: Mutex::new(HashSet::new()),
            clipboard: Mutex::new(String::new()),
            pointer_listeners: Mutex::new(Vec::new()),
            key_listeners: Mutex::new(Vec::new()),
        }
    }
}

impl FakeHost {
    pub fn pointer(&self) -> Arc<dyn PointerEventSink> {
        Arc::clone(&self.pointer_listeners.lock()[0])
    }

    pub fn keys(&self) -> Arc<dyn KeyEventSink> {
        Arc::clone(&self.key_listeners.lock()[0])
    }

    pub fn hold(&self, key: HostKey) {
        self.down.lock().insert(key);
    }

    pub fn lift(&self, key: HostKey) {
        self.down.lock().remove(&key);
    }

    pub fn set_modifiers(&self, flags: ModifierFlags) {
        *self.modifiers.lock() = flags;
    }

    pub fn cursors(&self) -> Vec<StandardCursor> {
        self.cursors.lock().clone()
    }
}

impl HostComponent for FakeHost {
    fn width(&self) -> u32 {
        self.size.lock().0
    }
    fn height(&self) -> u32 {
        self.size.lock().1
    }
    fn set_mouse_cursor(&self, cursor: StandardCursor) {
        self.cursors.lock().push(cursor);
    }
    fn add_mouse_listener(&self, listener: Arc<dyn PointerEventSink>) {
        self.pointer_listeners.lock().push(listener);
    }
    fn remove_mouse_listener(&self, listener: &Arc<dyn PointerEventSink>) {
        self.pointer_listeners
            .lock()
            .retain(|l| !Arc::ptr_eq(l, listener));
    }
    fn add_key_listener(&self, listener: Arc<dyn KeyEventSink>) {
        self.key_listeners.lock().push(listener);
    }
    fn remove_key_listener(&self, listener: &Arc<dyn KeyEventSink>) {
        self.key_listeners.lock().retain(|l| !Arc::ptr_eq(l, listener));
    }
}

impl RenderContext for FakeHost {
    fn rendering_scale(&self) -> f64 {
        *self.scale.lock()
    }
}

impl Keyboard for FakeHost {
    fn current_modifiers(&self) -> ModifierFlags {
        *self.modifiers.lock()
    }
    fn is_key_currently_down(&self, key: HostKey) -> bool {
        self.down.lock().contains(&key)
    }
}

impl Clipboard for FakeHost {
    fn text(&self) -> String {
        self.clipboard.lock().clone()
    }
    fn set_text(&self, text: &str) {
        *self.clipboard.lock() = text.to_owned();
    }
}

/// A backend wired to a [`FakeHost`] and a [`QueuedMessageThread`] owned by
/// the calling thread.
pub struct Harness {
    pub host: Arc<FakeHost>,
    pub queue: Arc<QueuedMessageThread>,
    pub context: SharedContext<RecordingGui>,
    pub backend: Option<Backend<RecordingGui>>,
}

impl Harness {
    pub fn new(config: BackendConfig) -> Self {
        let host = Arc::new(FakeHost::default());
        let queue = Arc::new(QueuedMessageThread::new());
        let context = shared_context(RecordingGui::default());
        let services = HostServices::new(queue.clone(), host.clone(), host.clone());
        let backend = Backend::new(
            host.clone(),
            host.clone(),
            Arc::clone(&context),
            services,
            config,
        )
        .expect("valid config");
        Self {
            host,
            queue,
            context,
            backend: Some(backend),
        }
    }

    pub fn backend(&self) -> &Backend<RecordingGui> {
        self.backend.as_ref().expect("backend dropped")
    }

    /// Run one frame the way a single-threaded host would.
    pub fn frame(&self) {
        self.backend().new_frame();
        self.queue.pump();
    }

    pub fn take_inputs(&self) -> Vec<Input> {
        self.context.lock().take_inputs()
    }
}
